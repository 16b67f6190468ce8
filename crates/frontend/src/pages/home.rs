use champions_shared::data::MAP_EDGES;
use champions_shared::models::GeoPoint;
use champions_shared::region::classify;
use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::components::navbar::Navbar;
use crate::components::world_map::WorldMap;
use crate::leaderboard_route;

const TITLE: &str = "TetraPak Champions";
const TAGLINE: &str = "connecting change across the globe";

/// Per-character entry delay of the title, in seconds.
const TITLE_CHAR_DELAY: f64 = 0.02;

#[component]
pub fn Home() -> Element {
    let on_dot_click = move |dot: GeoPoint| {
        let region = classify(dot.latitude, dot.longitude);
        debug!(label = dot.label, %region, "map dot dispatched");
        navigator().push(leaderboard_route(region));
    };

    let title_chars: Vec<(usize, char, String)> = TITLE
        .chars()
        .enumerate()
        .map(|(idx, ch)| (idx, ch, format!("animation-delay: {:.2}s", idx as f64 * TITLE_CHAR_DELAY)))
        .collect();

    rsx! {
        div { class: "home",
            Navbar { show_auth_buttons: true }
            div { class: "home-hero",
                p { class: "home-title", "aria-label": "{TITLE}",
                    for (idx, ch, char_style) in title_chars {
                        span {
                            key: "{idx}",
                            class: if ch == ' ' { "home-title-char home-title-space" } else { "home-title-char" },
                            "aria-hidden": "true",
                            style: "{char_style}",
                            if ch == ' ' { "\u{00a0}" } else { "{ch}" }
                        }
                    }
                }
                p { class: "home-tagline", "{TAGLINE}" }
            }
            div { class: "home-map",
                WorldMap { edges: MAP_EDGES.to_vec(), on_dot_click }
            }
        }
    }
}
