//! Compiled-in datasets: the landing-page map edges and the four regional
//! leaderboards.

use crate::models::{ConnectionEdge, GeoPoint, LeaderboardEntry};
use crate::region::Region;

const fn point(latitude: f64, longitude: f64, label: &'static str, clickable: bool) -> GeoPoint {
    GeoPoint { latitude, longitude, label, url: "#", clickable }
}

const ANCHORAGE: GeoPoint = point(61.2181, -149.9003, "Anchorage, Alaska", false);
const LOS_ANGELES: GeoPoint = point(34.0522, -118.2437, "Los Angeles, California", true);
const BRASILIA: GeoPoint = point(-15.7942, -47.8822, "Brasília, Brazil", true);
const LISBON: GeoPoint = point(38.7223, -9.1393, "Lisbon, Portugal", false);
const CENTRAL_EUROPE: GeoPoint = point(51.1657, 10.4515, "Central Europe", true);
const NEW_DELHI: GeoPoint = point(28.6139, 77.2090, "New Delhi, India", true);
const VLADIVOSTOK: GeoPoint = point(43.1332, 131.9113, "Vladivostok, Russia", true);
const NAIROBI: GeoPoint = point(-1.2921, 36.8219, "Nairobi, Kenya", true);

/// Arcs drawn on the landing page, in animation order.
pub const MAP_EDGES: [ConnectionEdge; 6] = [
    ConnectionEdge { start: ANCHORAGE, end: LOS_ANGELES },
    ConnectionEdge { start: ANCHORAGE, end: BRASILIA },
    ConnectionEdge { start: BRASILIA, end: LISBON },
    ConnectionEdge { start: CENTRAL_EUROPE, end: NEW_DELHI },
    ConnectionEdge { start: NEW_DELHI, end: VLADIVOSTOK },
    ConnectionEdge { start: NEW_DELHI, end: NAIROBI },
];

const fn entry(
    rank: u8,
    initials: &'static str,
    name: &'static str,
    country: &'static str,
    adoption_rate: u8,
    business_unit: &'static str,
) -> LeaderboardEntry {
    LeaderboardEntry { rank, initials, name, country, adoption_rate, business_unit }
}

pub const APAC_LEADERBOARD: [LeaderboardEntry; 10] = [
    entry(1, "SH", "Shaurya", "India", 98, "Operations"),
    entry(2, "NM", "Nguyen Minh", "Vietnam", 96, "Supply Chain"),
    entry(3, "RM", "Rahul Mehta", "India", 95, "Quality"),
    entry(4, "SN", "Siti Nur", "Indonesia", 94, "Manufacturing"),
    entry(5, "KW", "Kenji Watanabe", "Japan", 93, "R&D"),
    entry(6, "LJ", "Liew Jia", "Malaysia", 92, "Logistics"),
    entry(7, "SP", "Sonal Patel", "India", 91, "Sales"),
    entry(8, "ZA", "Zainab Ali", "Singapore", 90, "Customer Success"),
    entry(9, "EP", "Eun-Ji Park", "South Korea", 89, "Digital"),
    entry(10, "AR", "Arjun Rao", "India", 88, "Procurement"),
];

pub const AMERICA_LEADERBOARD: [LeaderboardEntry; 10] = [
    entry(1, "JS", "James Smith", "United States", 98, "Operations"),
    entry(2, "MS", "Mariana Santos", "Brazil", 96, "Supply Chain"),
    entry(3, "RW", "Robert Williams", "United States", 95, "Quality"),
    entry(4, "PB", "Patricia Brown", "Canada", 94, "Manufacturing"),
    entry(5, "MD", "Michael Davis", "United States", 93, "R&D"),
    entry(6, "DO", "Diego Oliveira", "Brazil", 92, "Logistics"),
    entry(7, "JG", "Jennifer Garcia", "United States", 91, "Sales"),
    entry(8, "AC", "Ana Costa", "Brazil", 90, "Customer Success"),
    entry(9, "DT", "David Thompson", "Canada", 89, "Digital"),
    entry(10, "SM", "Santiago Martinez", "Argentina", 88, "Procurement"),
];

pub const EMEA_LEADERBOARD: [LeaderboardEntry; 10] = [
    entry(1, "HS", "Hans Schmidt", "Germany", 98, "Operations"),
    entry(2, "SM", "Sophie Martin", "France", 96, "Supply Chain"),
    entry(3, "JB", "James Brown", "United Kingdom", 95, "Quality"),
    entry(4, "AM", "Ahmed Mohammed", "UAE", 94, "Manufacturing"),
    entry(5, "LM", "Luca Moretti", "Italy", 93, "R&D"),
    entry(6, "EK", "Emma Karlsson", "Sweden", 92, "Logistics"),
    entry(7, "PB", "Pieter van der Berg", "Netherlands", 91, "Sales"),
    entry(8, "OA", "Omar Al-Rashid", "Saudi Arabia", 90, "Customer Success"),
    entry(9, "NO", "Nkem Okonkwo", "Nigeria", 89, "Digital"),
    entry(10, "YK", "Yusuf Kaya", "Turkey", 88, "Procurement"),
];

pub const GREATER_CHINA_LEADERBOARD: [LeaderboardEntry; 10] = [
    entry(1, "WL", "Wang Li", "China", 98, "Operations"),
    entry(2, "ZM", "Zhang Ming", "China", 96, "Supply Chain"),
    entry(3, "LX", "Liu Xia", "China", 95, "Quality"),
    entry(4, "CJ", "Chen Jun", "China", 94, "Manufacturing"),
    entry(5, "LY", "Li Yang", "China", 93, "R&D"),
    entry(6, "HW", "Huang Wei", "China", 92, "Logistics"),
    entry(7, "WX", "Wu Xin", "China", 91, "Sales"),
    entry(8, "ZQ", "Zhou Qing", "China", 90, "Customer Success"),
    entry(9, "XF", "Xu Fang", "China", 89, "Digital"),
    entry(10, "SY", "Sun Yu", "China", 88, "Procurement"),
];

pub fn leaderboard(region: Region) -> &'static [LeaderboardEntry] {
    match region {
        Region::Apac => &APAC_LEADERBOARD,
        Region::America => &AMERICA_LEADERBOARD,
        Region::Emea => &EMEA_LEADERBOARD,
        Region::GreaterChina => &GREATER_CHINA_LEADERBOARD,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::initials;
    use crate::region::classify;

    #[test]
    fn test_leaderboard_ranks_are_sequential() {
        for region in Region::ALL {
            for (i, e) in leaderboard(region).iter().enumerate() {
                assert_eq!(e.rank as usize, i + 1, "{region} rank {}", e.rank);
            }
        }
    }

    #[test]
    fn test_leaderboard_rates_strictly_descend() {
        for region in Region::ALL {
            let rates: Vec<u8> = leaderboard(region).iter().map(|e| e.adoption_rate).collect();
            assert!(rates.windows(2).all(|w| w[0] > w[1]), "{region}: {rates:?}");
            assert!(rates.iter().all(|&r| r <= 100));
        }
    }

    #[test]
    fn test_stored_initials_match_derived() {
        for region in Region::ALL {
            for e in leaderboard(region) {
                assert_eq!(e.initials, initials(e.name), "{}", e.name);
            }
        }
    }

    #[test]
    fn test_names_are_unique_across_regions() {
        let mut names: Vec<&str> = Region::ALL
            .iter()
            .flat_map(|r| leaderboard(*r).iter().map(|e| e.name))
            .collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn test_clickable_dots_resolve_to_expected_regions() {
        let expected = [
            ("Los Angeles, California", Region::America),
            ("Brasília, Brazil", Region::America),
            ("Central Europe", Region::Emea),
            ("Nairobi, Kenya", Region::Emea),
            ("Vladivostok, Russia", Region::GreaterChina),
            ("New Delhi, India", Region::Apac),
        ];
        for (label, region) in expected {
            let dot = MAP_EDGES
                .iter()
                .flat_map(|e| [e.start, e.end])
                .find(|p| p.label == label)
                .unwrap();
            assert!(dot.clickable, "{label}");
            assert_eq!(classify(dot.latitude, dot.longitude), region, "{label}");
        }
    }
}
