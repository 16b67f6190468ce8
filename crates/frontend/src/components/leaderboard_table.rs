use champions_shared::models::LeaderboardEntry;
use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn LeaderboardTable(title: String, entries: &'static [LeaderboardEntry]) -> Element {
    let aria = format!("{title} showing top {} participants", entries.len());

    rsx! {
        table { class: "leaderboard-table", role: "table", "aria-label": "{aria}",
            thead {
                tr {
                    th { "#" }
                    th { "Participant name" }
                    th { class: "location-cell", "Location" }
                    th { "Adoption rate" }
                    th { class: "business-unit-cell", "Business unit" }
                    th { class: "view-cell", "View" }
                }
            }
            tbody {
                for entry in entries.iter() {
                    tr { key: "{entry.rank}",
                        td { class: "rank-cell", "{entry.rank}" }
                        td { class: "participant-cell",
                            div { class: "participant-block",
                                div { class: "avatar", "aria-label": "{entry.name} avatar", "{entry.initials}" }
                                div { class: "participant-info",
                                    div { class: "participant-name", "{entry.name}" }
                                    div { class: "participant-location", "{entry.country}" }
                                }
                            }
                        }
                        td { class: "location-cell", "{entry.country}" }
                        td { class: "adoption-cell",
                            div { class: "adoption-block",
                                span { class: "adoption-percent", "{entry.adoption_rate}%" }
                                div {
                                    class: "progress-bar-container",
                                    role: "progressbar",
                                    "aria-valuenow": "{entry.adoption_rate}",
                                    "aria-valuemin": "0",
                                    "aria-valuemax": "100",
                                    div {
                                        class: "progress-bar-fill",
                                        style: "width: {entry.adoption_rate}%",
                                        "aria-label": "{entry.adoption_rate}% adoption rate",
                                    }
                                }
                            }
                        }
                        td { class: "business-unit-cell", "{entry.business_unit}" }
                        td { class: "view-cell",
                            button {
                                class: "view-profile-btn",
                                "aria-label": "View profile for {entry.name}",
                                onclick: move |_| {
                                    navigator().push(Route::Profile { name: entry.name.to_string() });
                                },
                                "View"
                            }
                        }
                    }
                }
            }
        }
    }
}
