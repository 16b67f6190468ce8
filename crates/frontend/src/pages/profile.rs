use champions_shared::profile::find_profile;
use dioxus::prelude::*;

use crate::browser;
use crate::components::logo::TpLogo;
use crate::Route;

const SKILLS: [&str; 4] = [
    "Communication",
    "Facilitation",
    "Data Awareness",
    "Change Management",
];

const QUICK_LINKS: [&str; 3] = [
    "View shared resources",
    "Schedule a meeting",
    "Request support",
];

#[component]
pub fn Profile(name: String) -> Element {
    let profile = find_profile(&name);
    let initials = profile.initials();
    let email = profile.email();
    let first_name = profile.first_name().to_string();
    let info = profile.info;
    let trained = profile.champions_trained();
    let initiatives = profile.initiatives_led();

    rsx! {
        div { class: "profile-container",
            div { class: "content-wrapper",
                header { class: "header",
                    div { class: "brand-section", TpLogo { size: 48.0 } }
                    nav { class: "nav-buttons",
                        Link { class: "nav-btn", to: Route::Dashboard {}, "Dashboard" }
                        Link { class: "nav-btn", to: Route::Home {}, "Champions" }
                        Link { class: "nav-btn", to: Route::Resources {}, "Resources" }
                    }
                }

                main { class: "profile-card",
                    div { class: "card-header",
                        div { class: "avatar-large", "aria-label": "{profile.name} avatar", "{initials}" }
                        div { class: "profile-header-info",
                            h1 { class: "profile-name", "{profile.name}" }
                            div { class: "profile-subtitle",
                                "Transformation Champion \u{2014} {info.region_name}"
                            }
                        }
                        div { class: "header-actions",
                            button {
                                class: "action-btn",
                                onclick: {
                                    let first_name = first_name.clone();
                                    move |_| browser::alert(&format!("Message {first_name} clicked"))
                                },
                                "Message {first_name}"
                            }
                            button {
                                class: "action-btn",
                                onclick: move |_| browser::alert("Book a 10-min sync clicked"),
                                "Book a 10-min sync"
                            }
                            button {
                                class: "action-btn",
                                onclick: move |_| browser::alert("Ask for support clicked"),
                                "Ask for support"
                            }
                        }
                    }

                    div { class: "card-body",
                        div { class: "left-column",
                            div { class: "meta-block",
                                div { class: "meta-label", "Location" }
                                div { class: "meta-value", "{profile.country} \u{2014} {info.region_name}" }
                            }
                            div { class: "meta-block",
                                div { class: "meta-label", "Function" }
                                div { class: "meta-value", "{profile.business_unit}" }
                            }
                            div { class: "meta-block",
                                div { class: "meta-label", "Languages" }
                                div { class: "meta-value", "{info.languages}" }
                            }
                            section { class: "about-section",
                                h2 { class: "section-title", "About" }
                                p { class: "about-text", "{info.about}" }
                            }
                            section { class: "skills-section",
                                h2 { class: "section-title", "Skills" }
                                div { class: "skills-tags",
                                    for skill in SKILLS {
                                        span { key: "{skill}", class: "skill-tag", "{skill}" }
                                    }
                                }
                            }
                            section { class: "achievements-section",
                                h2 { class: "section-title", "Achievements" }
                                div { class: "achievement-item",
                                    "{profile.adoption_rate}% team adoption rate"
                                }
                                div { class: "achievement-item",
                                    "Trained {trained}+ champions"
                                }
                                div { class: "achievement-item",
                                    "Led {initiatives} successful change initiatives"
                                }
                            }
                        }

                        aside { class: "right-column",
                            div { class: "side-card",
                                div { class: "side-card-title", "Contact" }
                                div { class: "side-card-content",
                                    a { class: "side-card-link", href: "mailto:{email}", "{email}" }
                                    button {
                                        class: "copy-btn",
                                        "aria-label": "Copy email address",
                                        onclick: {
                                            let email = email.clone();
                                            move |_| browser::copy_to_clipboard(email.clone())
                                        },
                                        "Copy"
                                    }
                                }
                            }
                            div { class: "side-card",
                                div { class: "side-card-title", "Availability" }
                                div { class: "side-card-content", "{info.timezone}" }
                            }
                            div { class: "side-card",
                                div { class: "side-card-title", "Quick Links" }
                                div { class: "side-card-content side-card-links",
                                    for link in QUICK_LINKS {
                                        a { key: "{link}", class: "side-card-link", href: "#", "{link}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
