use dioxus::prelude::*;

use crate::browser;
use crate::components::navbar::Navbar;

const LAUNCH_TEXT: &str = "We have launched a global Change Champions Network to make \
transformation easier and more human. Champions are local, trained employees who will help \
teams understand upcoming changes, provide guidance during rollouts; and surface feedback to \
leadership. Reach out to your regional champion for help.";

const DUTIES: [&str; 7] = [
    "Communicate upcoming changes and timelines to the team",
    "Support colleagues during transitions and answer common questions",
    "Act as a bridge between strategy and people \u{2014} translate messages locally",
    "Collect feedback, highlight pain points, and escalate risks early",
    "Reinforce training and share job-aids / quick tips",
    "Monitor readiness and adoption within their team",
    "Represent regional and functional nuances to the programme team",
];

const THUMBNAILS: [&str; 3] = ["APAC", "EMEA", "Greater: China"];

/// (title, description)
const SESSIONS: [(&str, &str); 2] = [
    (
        "Q1 \u{2014} Introduction Webinar",
        "Short 25 minute webinar \"Meet the Change Champions Network\" \u{2014} what champions do, \
         how to expect them; 1 degree star",
    ),
    (
        "Q3 \u{2014} Mid-Year Impact Session",
        "30\u{2013}45 minute session. Champions share success stories, adoption metrics, and \
         upcoming change calendar.",
    ),
];

#[component]
pub fn GetStarted() -> Element {
    rsx! {
        div { class: "get-started-container",
            Navbar {}
            div { class: "page-wrapper",
                main { class: "get-started-card",
                    div { class: "get-started-content",
                        div {
                            h1 { class: "page-title", "Change Champions Hub" }
                            p { class: "lede", "Your local partners for clarity, support, and smooth adoption." }
                        }
                        section { class: "gs-section",
                            h2 { class: "gs-section-title", "Change Champions \u{2014} Now Live (Q1 2025)" }
                            p { class: "gs-section-text", "{LAUNCH_TEXT}" }
                        }
                        section { class: "gs-section",
                            h2 { class: "gs-section-title", "What Change Champions do" }
                            ul { class: "bullet-list",
                                for duty in DUTIES {
                                    li { key: "{duty}", class: "bullet-item", "{duty}" }
                                }
                            }
                        }
                    }

                    aside { class: "get-started-sidebar",
                        div { class: "sidebar-section",
                            h3 { class: "sidebar-title", "Change Champion Spotlight" }
                            div { class: "video-container",
                                button {
                                    class: "play-button",
                                    "aria-label": "Play video",
                                    onclick: move |_| browser::alert("Play video"),
                                }
                                div { class: "time-badge", "1:00" }
                            }
                            div { class: "thumbnails-row",
                                for thumb in THUMBNAILS {
                                    div { key: "{thumb}", class: "thumbnail", "{thumb}" }
                                }
                            }
                            div { class: "carousel-dots",
                                for idx in 0..THUMBNAILS.len() {
                                    div { key: "{idx}", class: "carousel-dot", class: if idx == 0 { "carousel-dot--active" } }
                                }
                            }
                        }
                        div { class: "sidebar-section",
                            h3 { class: "sidebar-title", "Upcoming Sessions" }
                            for (title, description) in SESSIONS {
                                div { key: "{title}", class: "session-block",
                                    div { class: "session-title", "{title}" }
                                    div { class: "session-description", "{description}" }
                                }
                            }
                        }
                        button {
                            class: "cta-button",
                            "aria-label": "Find your regional champion",
                            onclick: move |_| browser::alert("Find your regional champion"),
                            "Find your regional champion \u{2192}"
                        }
                    }
                }
            }
        }
    }
}
