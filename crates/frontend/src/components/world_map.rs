use champions_shared::geo::{VIEW_HEIGHT, VIEW_WIDTH};
use champions_shared::land;
use champions_shared::models::{ConnectionEdge, GeoPoint};
use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use url::Url;

use crate::browser;

const DEFAULT_LINE_COLOR: &str = "#69CFF6";

/// Delay before the entry animations start, in milliseconds.
const MOUNT_DELAY_MS: u32 = 50;

// Backdrop lattice
const LATTICE_STEP: f64 = 5.0;
const LATTICE_RADIUS: f64 = 0.9;
const LATTICE_COLOR: &str = "#1a1a1a40";

const DOT_RADIUS: f64 = 4.0;
const DOT_RADIUS_HOVERED: f64 = 8.0;

/// Identifies one rendered dot: the edge it belongs to and which end.
#[derive(Debug, Clone, Copy, PartialEq)]
struct DotKey {
    edge: usize,
    end: bool,
}

/// Arc `i` starts drawing after `0.15 * i` seconds.
fn arc_delay(index: usize) -> f64 {
    0.15 * index as f64
}

/// Start dots appear 0.3 s into their arc, end dots 0.8 s in.
fn dot_delay(index: usize, end: bool) -> f64 {
    arc_delay(index) + if end { 0.8 } else { 0.3 }
}

/// Where a dot without a page handler should send the user. Placeholder
/// links (`""`, `"#"`) resolve to nothing; anything else must parse as an
/// absolute URL.
fn external_target(raw: &str) -> Result<Option<Url>, url::ParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "#" {
        return Ok(None);
    }
    Url::parse(trimmed).map(Some)
}

/// What a click on a dot should do.
#[derive(Debug, PartialEq)]
enum DotAction {
    /// Hand the dot to the page.
    Handler,
    Open(Url),
    Ignore,
    /// The dot's URL does not parse; logged, nothing else happens.
    Rejected(url::ParseError),
}

fn dot_action(dot: &GeoPoint, has_handler: bool) -> DotAction {
    if !dot.clickable {
        return DotAction::Ignore;
    }
    if has_handler {
        return DotAction::Handler;
    }
    match external_target(dot.url) {
        Ok(Some(url)) => DotAction::Open(url),
        Ok(None) => DotAction::Ignore,
        Err(e) => DotAction::Rejected(e),
    }
}

fn handle_dot_click(dot: GeoPoint, on_dot_click: Option<EventHandler<GeoPoint>>) {
    match dot_action(&dot, on_dot_click.is_some()) {
        DotAction::Handler => {
            if let Some(handler) = on_dot_click {
                handler.call(dot);
            }
        }
        DotAction::Open(url) => browser::open_in_new_tab(url.as_str()),
        DotAction::Ignore => {}
        DotAction::Rejected(e) => warn!(url = dot.url, error = %e, "ignoring invalid dot url"),
    }
}

/// Build the dotted world map as a standalone SVG document string.
fn build_backdrop_svg() -> String {
    let points = land::land_dots(LATTICE_STEP);
    let mut svg = String::with_capacity(points.len() * 48 + 128);
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {VIEW_WIDTH} {VIEW_HEIGHT}" preserveAspectRatio="xMidYMid meet">"#
    ));
    for p in points {
        svg.push_str(&format!(
            r#"<circle cx="{}" cy="{}" r="{LATTICE_RADIUS}" fill="{LATTICE_COLOR}"/>"#,
            p.x, p.y
        ));
    }
    svg.push_str("</svg>");
    svg
}

#[component]
pub fn WorldMap(
    edges: Vec<ConnectionEdge>,
    #[props(default = DEFAULT_LINE_COLOR.to_string())] line_color: String,
    on_dot_click: Option<EventHandler<GeoPoint>>,
) -> Element {
    let mut hovered = use_signal(|| None::<DotKey>);
    let mut mounted = use_signal(|| false);
    let backdrop = use_hook(build_backdrop_svg);

    use_future(move || async move {
        TimeoutFuture::new(MOUNT_DELAY_MS).await;
        mounted.set(true);
    });

    let dots: Vec<(DotKey, GeoPoint)> = edges
        .iter()
        .enumerate()
        .flat_map(|(i, e)| {
            [
                (DotKey { edge: i, end: false }, e.start),
                (DotKey { edge: i, end: true }, e.end),
            ]
        })
        .collect();

    let arcs: Vec<(usize, String, String)> = edges
        .iter()
        .enumerate()
        .map(|(i, e)| (i, e.arc().to_path_data(), format!("animation-delay: {:.2}s", arc_delay(i))))
        .collect();

    rsx! {
        div {
            class: "world-map",
            class: if *mounted.read() { "world-map--mounted" },
            div {
                class: "world-map-backdrop",
                "aria-hidden": "true",
                dangerous_inner_html: "{backdrop}",
            }
            svg {
                class: "world-map-overlay",
                view_box: "0 0 {VIEW_WIDTH} {VIEW_HEIGHT}",
                role: "img",
                "aria-label": "World map of the champions network",

                defs {
                    linearGradient { id: "path-gradient", x1: "0%", y1: "0%", x2: "100%", y2: "0%",
                        stop { offset: "0%", "stop-color": "white", "stop-opacity": "0" }
                        stop { offset: "5%", "stop-color": "{line_color}", "stop-opacity": "1" }
                        stop { offset: "95%", "stop-color": "{line_color}", "stop-opacity": "1" }
                        stop { offset: "100%", "stop-color": "white", "stop-opacity": "0" }
                    }
                }

                for (i, path_data, arc_style) in arcs {
                    path {
                        key: "arc-{i}",
                        class: "map-arc",
                        d: "{path_data}",
                        fill: "none",
                        stroke: "url(#path-gradient)",
                        stroke_width: "2.5",
                        "pathLength": "1",
                        style: "{arc_style}",
                    }
                }

                for (key, dot) in dots {
                    {
                        let p = dot.projected();
                        let is_hovered = *hovered.read() == Some(key);
                        let r = if is_hovered { DOT_RADIUS_HOVERED } else { DOT_RADIUS };
                        let delay = dot_delay(key.edge, key.end);
                        let dot_style = format!("animation-delay: {delay:.2}s");
                        let pulse_style = format!("animation-delay: {delay:.2}s, {:.2}s", delay + 0.3);
                        let line_color = line_color.clone();
                        rsx! {
                            g {
                                key: "dot-{key.edge}-{key.end}",
                                circle {
                                    class: "map-dot",
                                    class: if dot.clickable { "map-dot--clickable" },
                                    cx: "{p.x}",
                                    cy: "{p.y}",
                                    r: "{r}",
                                    fill: "{line_color}",
                                    stroke: "white",
                                    stroke_width: if is_hovered { "2" } else { "1" },
                                    style: "{dot_style}",
                                    onmouseenter: move |_| hovered.set(Some(key)),
                                    onmouseleave: move |_| hovered.set(None),
                                    onclick: move |evt: Event<MouseData>| {
                                        evt.prevent_default();
                                        evt.stop_propagation();
                                        handle_dot_click(dot, on_dot_click);
                                    },
                                    title { "{dot.label}" }
                                }
                                circle {
                                    class: "map-dot-pulse",
                                    class: if is_hovered { "map-dot-pulse--hovered" },
                                    cx: "{p.x}",
                                    cy: "{p.y}",
                                    r: "{r}",
                                    fill: "{line_color}",
                                    style: "{pulse_style}",
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use champions_shared::geo;

    #[test]
    fn test_arc_and_dot_delays() {
        assert!((arc_delay(0) - 0.0).abs() < 1e-9);
        assert!((arc_delay(2) - 0.3).abs() < 1e-9);
        assert!((dot_delay(0, false) - 0.3).abs() < 1e-9);
        assert!((dot_delay(1, true) - 0.95).abs() < 1e-9);
    }

    #[test]
    fn test_external_target_placeholders() {
        assert_eq!(external_target("#"), Ok(None));
        assert_eq!(external_target(""), Ok(None));
        assert_eq!(external_target("   "), Ok(None));
    }

    #[test]
    fn test_external_target_absolute_url() {
        let url = external_target("https://example.com/champions").unwrap().unwrap();
        assert_eq!(url.host_str(), Some("example.com"));
    }

    #[test]
    fn test_external_target_rejects_relative() {
        assert!(external_target("/america-leaderboard").is_err());
        assert!(external_target("not a url").is_err());
    }

    #[test]
    fn test_backdrop_is_a_complete_svg() {
        let svg = build_backdrop_svg();
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains(r#"viewBox="0 0 800 400""#));
        assert_eq!(svg.matches("<circle").count(), land::land_dots(LATTICE_STEP).len());
    }

    fn dot(url: &'static str, clickable: bool) -> GeoPoint {
        GeoPoint {
            latitude: 34.0522,
            longitude: -118.2437,
            label: "Los Angeles, California",
            url,
            clickable,
        }
    }

    #[test]
    fn test_backdrop_skips_open_ocean() {
        let svg = build_backdrop_svg();
        assert!(svg.matches("<circle").count() < geo::lattice(LATTICE_STEP).len());
    }

    #[test]
    fn test_non_clickable_dot_is_ignored_even_with_url() {
        let d = dot("https://example.com/champions", false);
        assert_eq!(dot_action(&d, false), DotAction::Ignore);
        assert_eq!(dot_action(&d, true), DotAction::Ignore);
    }

    #[test]
    fn test_page_handler_wins_over_url() {
        let d = dot("https://example.com/champions", true);
        assert_eq!(dot_action(&d, true), DotAction::Handler);
    }

    #[test]
    fn test_valid_url_opens_without_handler() {
        let d = dot("https://example.com/champions", true);
        let expected = Url::parse("https://example.com/champions").unwrap();
        assert_eq!(dot_action(&d, false), DotAction::Open(expected));
    }

    #[test]
    fn test_placeholder_url_does_nothing() {
        assert_eq!(dot_action(&dot("#", true), false), DotAction::Ignore);
        assert_eq!(dot_action(&dot("", true), false), DotAction::Ignore);
    }

    #[test]
    fn test_invalid_url_is_rejected() {
        assert!(matches!(
            dot_action(&dot("not a url", true), false),
            DotAction::Rejected(_)
        ));
    }

    #[test]
    fn test_stylesheet_animation_timings() {
        let css = include_str!("../../assets/main.css");
        assert!(css.contains("animation: arc-draw 0.8s ease-in-out forwards;"));
        assert!(css.contains("dot-pulse 1.5s linear infinite;"));
        assert!(css.contains("dot-pulse-hovered 1.5s linear infinite;"));
        // Pulse radius 4 -> 12, or 8 -> 16 on hover
        assert!((DOT_RADIUS * 3.0 - 12.0).abs() < 1e-9);
        assert!((DOT_RADIUS_HOVERED * 2.0 - 16.0).abs() < 1e-9);
        assert!(css.contains("transform: scale(3);"));
        assert!(css.contains("transform: scale(2);"));
    }
}
