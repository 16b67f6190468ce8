use dioxus::prelude::*;

use crate::browser;
use crate::components::logo::TpLogo;
use crate::Route;

struct Announcement {
    title: &'static str,
    detail: &'static str,
    age: &'static str,
    high_priority: bool,
}

const ANNOUNCEMENTS: [Announcement; 3] = [
    Announcement {
        title: "New Global Initiative Launch",
        detail: "Customer Experience Transformation begins Q2",
        age: "2 days ago",
        high_priority: true,
    },
    Announcement {
        title: "Q1 Champion Results",
        detail: "87% adoption rate across all regions",
        age: "1 week ago",
        high_priority: false,
    },
    Announcement {
        title: "Updated Communication Templates",
        detail: "New materials available in Resources Hub",
        age: "2 weeks ago",
        high_priority: false,
    },
];

struct UpcomingEvent {
    title: &'static str,
    when: &'static str,
    registered: u32,
}

const EVENTS: [UpcomingEvent; 3] = [
    UpcomingEvent { title: "EMEA Regional Call", when: "Tomorrow, 14:00 CET", registered: 23 },
    UpcomingEvent { title: "Global Champions Webinar", when: "Friday, 16:00 UTC", registered: 156 },
    UpcomingEvent { title: "APAC Sync Session", when: "Next Monday, 09:00 SGT", registered: 18 },
];

/// (name, icon)
const QUICK_LINKS: [(&str, &str); 4] = [
    ("Playbooks", "\u{1F4D8}"),
    ("Templates", "\u{1F4C4}"),
    ("Ask a Champion", "\u{1F4AC}"),
    ("Success Stories", "\u{1F3C6}"),
];

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        div { class: "dashboard-container",
            div { class: "content-wrapper",
                header { class: "header",
                    div { class: "brand-section", TpLogo { size: 48.0 } }
                    nav { class: "nav-buttons",
                        Link { class: "nav-btn nav-btn--active", to: Route::Dashboard {}, "Dashboard" }
                        Link { class: "nav-btn", to: Route::Home {}, "Champions" }
                        Link { class: "nav-btn", to: Route::Resources {}, "Resources" }
                    }
                }

                section { class: "welcome-section",
                    h1 { class: "welcome-title", "Welcome back, Champion" }
                    p { class: "welcome-subtitle", "Your global network at a glance" }
                }

                div { class: "dashboard-grid",
                    section { class: "dashboard-card",
                        h2 { class: "card-title", "Latest Announcements" }
                        ul { class: "announcement-list",
                            for item in ANNOUNCEMENTS.iter() {
                                li { key: "{item.title}", class: "announcement-item",
                                    div { class: "announcement-header",
                                        span { class: "announcement-title", "{item.title}" }
                                        if item.high_priority {
                                            span { class: "priority-tag", "High Priority" }
                                        }
                                    }
                                    div { class: "announcement-meta", "{item.detail} \u{2022} {item.age}" }
                                }
                            }
                        }
                    }

                    section { class: "dashboard-card",
                        h2 { class: "card-title", "Upcoming Events" }
                        ul { class: "event-list",
                            for event in EVENTS.iter() {
                                li { key: "{event.title}", class: "event-item",
                                    div { class: "event-title", "{event.title}" }
                                    div { class: "event-meta",
                                        "{event.when} \u{2022} {event.registered} registered"
                                    }
                                }
                            }
                        }
                    }

                    section { class: "dashboard-card dashboard-card--wide",
                        h2 { class: "card-title", "Quick Links" }
                        div { class: "quick-links-grid",
                            for (name, icon) in QUICK_LINKS {
                                button {
                                    key: "{name}",
                                    class: "quick-link",
                                    onclick: move |_| browser::alert(name),
                                    span { class: "quick-link-icon", "aria-hidden": "true", "{icon}" }
                                    span { class: "quick-link-label", "{name}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
