use champions_shared::data::leaderboard;
use champions_shared::region::Region;
use dioxus::prelude::*;

use crate::components::leaderboard_table::LeaderboardTable;
use crate::components::navbar::Navbar;

/// Page heading for a region's board.
fn leaderboard_title(region: Region) -> String {
    format!("{} Leaderboard", region.info().region_name)
}

#[component]
pub fn RegionLeaderboard(region: Region) -> Element {
    let title = leaderboard_title(region);

    rsx! {
        div { class: "leaderboard-container",
            Navbar {}
            div { class: "content-wrapper",
                div { class: "leaderboard-card",
                    h1 { class: "leaderboard-title", "{title}" }
                    LeaderboardTable { title: title.clone(), entries: leaderboard(region) }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaderboard_titles() {
        assert_eq!(leaderboard_title(Region::Apac), "APAC Region Leaderboard");
        assert_eq!(
            leaderboard_title(Region::GreaterChina),
            "Greater China Region Leaderboard"
        );
    }
}
