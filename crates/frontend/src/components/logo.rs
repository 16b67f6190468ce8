use dioxus::prelude::*;

/// Corner radius and font size of the badge for a given edge length.
fn logo_metrics(size: f64) -> (f64, f64) {
    ((size * 0.35).max(12.0), size * 0.36)
}

#[component]
pub fn TpLogo(
    #[props(default = 52.0)] size: f64,
    #[props(default = "TP logo".to_string())] label: String,
) -> Element {
    let (radius, font_size) = logo_metrics(size);

    rsx! {
        div {
            class: "tp-logo",
            role: "img",
            "aria-label": "{label}",
            style: "width:{size}px;height:{size}px;border-radius:{radius}px;font-size:{font_size}px;",
            "TP"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logo_metrics_small_badge_keeps_min_radius() {
        let (radius, font) = logo_metrics(20.0);
        assert!((radius - 12.0).abs() < 1e-9);
        assert!((font - 7.2).abs() < 1e-9);
    }

    #[test]
    fn test_logo_metrics_default_size() {
        let (radius, font) = logo_metrics(52.0);
        assert!((radius - 18.2).abs() < 1e-9);
        assert!((font - 18.72).abs() < 1e-9);
    }
}
