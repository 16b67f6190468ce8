use std::fmt;

use dioxus::prelude::*;

use crate::components::navbar::Navbar;
use crate::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResourceKind {
    Pdf,
    Pptx,
    Docx,
}

impl ResourceKind {
    fn pill_class(self) -> &'static str {
        match self {
            ResourceKind::Pdf => "pill--pdf",
            ResourceKind::Pptx => "pill--pptx",
            ResourceKind::Docx => "pill--docx",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Pdf => write!(f, "PDF"),
            ResourceKind::Pptx => write!(f, "PPTX"),
            ResourceKind::Docx => write!(f, "DOCX"),
        }
    }
}

#[derive(Debug, PartialEq)]
struct ResourceItem {
    id: &'static str,
    kind: ResourceKind,
    title: &'static str,
    size: &'static str,
}

#[derive(Debug, PartialEq)]
struct Collection {
    title: &'static str,
    description: &'static str,
    icon_label: &'static str,
    items: [ResourceItem; 3],
}

struct QuickAction {
    id: &'static str,
    label: &'static str,
    description: &'static str,
    icon: &'static str,
}

struct FeaturedResource {
    id: &'static str,
    title: &'static str,
    kind: ResourceKind,
    description: &'static str,
    status: &'static str,
    size: &'static str,
}

const fn item(id: &'static str, kind: ResourceKind, title: &'static str, size: &'static str) -> ResourceItem {
    ResourceItem { id, kind, title, size }
}

const QUICK_ACTIONS: [QuickAction; 4] = [
    QuickAction {
        id: "qa-all",
        label: "Browse everything",
        description: "Search the full asset library",
        icon: "\u{1F5C2}\u{FE0F}",
    },
    QuickAction {
        id: "qa-templates",
        label: "Download templates",
        description: "Townhall, newsletter & posters",
        icon: "\u{1F4D1}",
    },
    QuickAction {
        id: "qa-ask",
        label: "Ask a strategist",
        description: "Get guidance in <10 min",
        icon: "\u{26A1}",
    },
    QuickAction {
        id: "qa-share",
        label: "Share success",
        description: "Submit your local win",
        icon: "\u{1F3C6}",
    },
];

const FEATURED: [FeaturedResource; 3] = [
    FeaturedResource {
        id: "feat-1",
        title: "2025 Transformation Narrative",
        kind: ResourceKind::Pdf,
        description: "Executive-ready storyline with key proof points.",
        status: "Updated this week",
        size: "2.3 MB",
    },
    FeaturedResource {
        id: "feat-2",
        title: "Leadership Briefing Mega Deck",
        kind: ResourceKind::Pptx,
        description: "80+ slides, modular sections, plug & play visuals.",
        status: "Slides refreshed",
        size: "6.8 MB",
    },
    FeaturedResource {
        id: "feat-3",
        title: "Manager Talking Points",
        kind: ResourceKind::Docx,
        description: "Short-form Q&A to cover top employee questions.",
        status: "Vetted by People Ops",
        size: "1.1 MB",
    },
];

static COLLECTIONS: [Collection; 4] = [
    Collection {
        title: "Key Messages",
        description: "Core narrative, elevator pitch, and briefing notes.",
        icon_label: "KM",
        items: [
            item("key-1", ResourceKind::Pdf, "Executive Summary Narrative", "2.3 MB"),
            item("key-2", ResourceKind::Pptx, "Leadership Briefing Deck", "6.8 MB"),
            item("key-3", ResourceKind::Docx, "Talking Points & Q&A", "1.1 MB"),
        ],
    },
    Collection {
        title: "FAQs",
        description: "Pre-approved responses and quick answers.",
        icon_label: "FAQ",
        items: [
            item("faq-1", ResourceKind::Pdf, "Global FAQs Pack", "1.5 MB"),
            item("faq-2", ResourceKind::Pdf, "Regional Extension (EMEA)", "1.2 MB"),
            item("faq-3", ResourceKind::Pdf, "People Manager FAQs", "1.9 MB"),
        ],
    },
    Collection {
        title: "Ready-to-use Slides",
        description: "Plug-and-play decks for townhalls and market updates.",
        icon_label: "SL",
        items: [
            item("slides-1", ResourceKind::Pptx, "Executive Townhall Slides", "12.4 MB"),
            item("slides-2", ResourceKind::Pptx, "Market Rollout Deck", "8.1 MB"),
            item("slides-3", ResourceKind::Pptx, "Field Enablement Pack", "9.7 MB"),
        ],
    },
    Collection {
        title: "Culture Adaptation Guide",
        description: "Guides to localize stories while staying on-message.",
        icon_label: "CG",
        items: [
            item("guide-1", ResourceKind::Pdf, "Global Cultural Playbook", "4.2 MB"),
            item("guide-2", ResourceKind::Pdf, "Asia-Pacific Localization Kit", "3.4 MB"),
            item("guide-3", ResourceKind::Pdf, "Latin America Story Starters", "3.1 MB"),
        ],
    },
];

#[component]
fn ResourceSection(collection: &'static Collection) -> Element {
    rsx! {
        section { class: "resource-section", "aria-label": "{collection.title}",
            header { class: "resource-section__header",
                div { class: "resource-section__icon", "aria-hidden": "true", "{collection.icon_label}" }
                div {
                    p { class: "resource-section__eyebrow", "Collection" }
                    h3 { class: "resource-section__title", "{collection.title}" }
                    p { class: "resource-section__description", "{collection.description}" }
                }
            }
            div { class: "resource-list",
                for res in collection.items.iter() {
                    article { key: "{res.id}", class: "resource-card",
                        div { class: "resource-card__meta",
                            span { class: "resource-pill {res.kind.pill_class()}", "{res.kind}" }
                            div {
                                p { class: "resource-card__title", "{res.title}" }
                                p { class: "resource-card__size", "{res.size}" }
                            }
                        }
                        div { class: "resource-card__actions",
                            button { class: "ghost-btn", "aria-label": "Open {res.title}",
                                span { "Open" }
                                svg {
                                    view_box: "0 0 24 24",
                                    fill: "none",
                                    stroke: "currentColor",
                                    stroke_width: "1.8",
                                    path {
                                        d: "M7 17 17 7M7 7h10v10",
                                        stroke_linecap: "round",
                                        stroke_linejoin: "round",
                                    }
                                }
                            }
                            button { class: "ghost-btn", "aria-label": "Download {res.title}",
                                span { "Download" }
                                svg {
                                    view_box: "0 0 24 24",
                                    fill: "none",
                                    stroke: "currentColor",
                                    stroke_width: "1.8",
                                    path {
                                        d: "M12 5v10m0 0 3.5-3.5M12 15l-3.5-3.5M5 19h14",
                                        stroke_linecap: "round",
                                        stroke_linejoin: "round",
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

#[component]
pub fn Resources() -> Element {
    rsx! {
        div { class: "resources-page",
            Navbar {}
            div { class: "resources-shell",
                header { class: "resources-hero",
                    div { class: "resources-hero__heading",
                        div {
                            p { class: "resources-hero__eyebrow", "Change resources hub" }
                            h1 { class: "resources-hero__title", "Library of pre-approved stories & visuals" }
                            p { class: "resources-hero__summary",
                                "Every document below is vetted, versioned, and ready for rollout. Adapt to your \
                                 market in minutes, then share the same hero narrative across the globe."
                            }
                        }
                        div { class: "resources-hero__cta",
                            button {
                                class: "primary-btn",
                                onclick: move |_| {
                                    navigator().push(Route::Leaderboard {});
                                },
                                "Browse champions"
                            }
                            button {
                                class: "secondary-btn",
                                onclick: move |_| {
                                    navigator().push(Route::Dashboard {});
                                },
                                "Back to dashboard"
                            }
                        }
                    }
                    aside { class: "hero-status",
                        p { class: "hero-status__label", "Live collections" }
                        p { class: "hero-status__metric", "148 files" }
                        p { class: "hero-status__caption",
                            "Updated nightly \u{00B7} Auto-tagged by audience & campaign moment"
                        }
                    }
                }

                section { class: "panel", "aria-label": "Quick actions",
                    h2 { class: "panel__title", "Your shortcuts" }
                    div { class: "quick-actions",
                        for action in QUICK_ACTIONS.iter() {
                            button { key: "{action.id}", class: "quick-action",
                                div { class: "quick-action__icon", "aria-hidden": "true", "{action.icon}" }
                                div {
                                    p { class: "quick-action__label", "{action.label}" }
                                    p { class: "quick-action__description", "{action.description}" }
                                }
                            }
                        }
                    }
                }

                section { class: "panel", "aria-label": "Featured resources",
                    h2 { class: "panel__title", "Featured this week" }
                    div { class: "featured-grid",
                        for res in FEATURED.iter() {
                            article { key: "{res.id}", class: "featured-card",
                                span { class: "featured-card__status", "{res.status}" }
                                p { class: "resource-card__title", "{res.title}" }
                                p { class: "resource-card__size", "{res.description}" }
                                div { class: "resource-card__actions",
                                    span { class: "resource-pill {res.kind.pill_class()}", "{res.kind}" }
                                    span { class: "resource-card__size", "{res.size}" }
                                }
                            }
                        }
                    }
                }

                for collection in COLLECTIONS.iter() {
                    ResourceSection { key: "{collection.title}", collection }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_labels_and_pills() {
        assert_eq!(ResourceKind::Pdf.to_string(), "PDF");
        assert_eq!(ResourceKind::Pptx.pill_class(), "pill--pptx");
        assert_eq!(ResourceKind::Docx.pill_class(), "pill--docx");
    }

    #[test]
    fn test_resource_ids_unique() {
        let mut ids: Vec<&str> = COLLECTIONS
            .iter()
            .flat_map(|c| c.items.iter().map(|i| i.id))
            .chain(FEATURED.iter().map(|f| f.id))
            .chain(QUICK_ACTIONS.iter().map(|a| a.id))
            .collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
        assert_eq!(total, 4 * 3 + 3 + 4);
    }

    #[test]
    fn test_slides_collection_is_all_decks() {
        let slides = COLLECTIONS
            .iter()
            .find(|c| c.icon_label == "SL")
            .unwrap();
        assert!(slides.items.iter().all(|i| i.kind == ResourceKind::Pptx));
    }
}
