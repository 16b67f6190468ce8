use serde::Serialize;

use crate::models::{GeoPoint, RegionInfo};

/// Leaderboard region. `Apac` doubles as the default for anything the
/// classifier cannot place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Region {
    #[default]
    #[serde(rename = "APAC")]
    Apac,
    America,
    #[serde(rename = "EMEA")]
    Emea,
    #[serde(rename = "Greater China")]
    GreaterChina,
}

impl Region {
    pub const ALL: [Region; 4] = [
        Region::Apac,
        Region::America,
        Region::Emea,
        Region::GreaterChina,
    ];

    /// Client-side route of the region's leaderboard.
    pub fn route(self) -> &'static str {
        match self {
            Region::America => "/america-leaderboard",
            Region::Emea => "/emea-leaderboard",
            Region::GreaterChina => "/greater-china-leaderboard",
            Region::Apac => "/leaderboard",
        }
    }

    pub fn info(self) -> &'static RegionInfo {
        match self {
            Region::Apac => &APAC_INFO,
            Region::America => &AMERICA_INFO,
            Region::Emea => &EMEA_INFO,
            Region::GreaterChina => &GREATER_CHINA_INFO,
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Region::Apac => write!(f, "APAC"),
            Region::America => write!(f, "America"),
            Region::Emea => write!(f, "EMEA"),
            Region::GreaterChina => write!(f, "Greater China"),
        }
    }
}

/// Absolute-difference window around a reference coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToleranceBox {
    pub region: Region,
    pub latitude: f64,
    pub longitude: f64,
    pub tolerance: f64,
}

impl ToleranceBox {
    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        (lat - self.latitude).abs() < self.tolerance && (lng - self.longitude).abs() < self.tolerance
    }
}

/// Checked in order; the first box containing the point decides the region.
/// America boxes come before EMEA, EMEA before Greater China.
pub const REFERENCE_BOXES: [ToleranceBox; 5] = [
    // Los Angeles
    ToleranceBox { region: Region::America, latitude: 34.0522, longitude: -118.2437, tolerance: 1.0 },
    // Brasília
    ToleranceBox { region: Region::America, latitude: -15.7942, longitude: -47.8822, tolerance: 1.0 },
    // Nairobi
    ToleranceBox { region: Region::Emea, latitude: -1.2921, longitude: 36.8219, tolerance: 1.0 },
    // Central Europe
    ToleranceBox { region: Region::Emea, latitude: 51.1657, longitude: 10.4515, tolerance: 2.0 },
    // Vladivostok
    ToleranceBox { region: Region::GreaterChina, latitude: 43.1332, longitude: 131.9113, tolerance: 1.0 },
];

/// Resolve a coordinate to a region. Points outside every reference box,
/// NaN included, fall through to the default region.
pub fn classify(lat: f64, lng: f64) -> Region {
    REFERENCE_BOXES
        .iter()
        .find(|b| b.contains(lat, lng))
        .map(|b| b.region)
        .unwrap_or_default()
}

/// Destination route for a map click. A click without point data goes to the
/// default leaderboard.
pub fn route_for_click(dot: Option<&GeoPoint>) -> &'static str {
    match dot {
        Some(p) => classify(p.latitude, p.longitude).route(),
        None => Region::default().route(),
    }
}

const APAC_INFO: RegionInfo = RegionInfo {
    region_name: "APAC Region",
    languages: "English, Hindi, Mandarin, Japanese, Korean, Bahasa",
    about: "Leading digital transformation initiatives across Asia-Pacific with extensive experience in cross-cultural change management. Passionate about regional adoption, data-driven decisions and human-centred transformation.",
    timezone: "Mon \u{2014} Fri, 09:00 \u{2014} 17:00 (SGT)",
};

const AMERICA_INFO: RegionInfo = RegionInfo {
    region_name: "America Region",
    languages: "English, Spanish, Portuguese, French",
    about: "Driving digital transformation across North and South America with deep expertise in organizational change. Committed to adoption excellence, data-driven strategies and people-first transformation approaches.",
    timezone: "Mon \u{2014} Fri, 09:00 \u{2014} 17:00 (EST)",
};

const EMEA_INFO: RegionInfo = RegionInfo {
    region_name: "EMEA Region",
    languages: "English, German, French, Arabic, Swedish, Dutch, Italian",
    about: "Leading digital transformation initiatives across Europe, Middle East and Africa with 8+ years of experience in organizational change. Passionate about adoption, data-driven decisions and human-centred change.",
    timezone: "Mon \u{2014} Fri, 09:00 \u{2014} 16:30 (CET)",
};

const GREATER_CHINA_INFO: RegionInfo = RegionInfo {
    region_name: "Greater China Region",
    languages: "Mandarin, Cantonese, English",
    about: "Spearheading digital transformation across Greater China with extensive experience in regional change management. Focused on adoption excellence, data-driven innovation and culturally-aware transformation strategies.",
    timezone: "Mon \u{2014} Fri, 09:00 \u{2014} 18:00 (CST)",
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_classify_reference_cities() {
        assert_eq!(classify(34.0522, -118.2437), Region::America); // Los Angeles
        assert_eq!(classify(-15.7942, -47.8822), Region::America); // Brasília
        assert_eq!(classify(-1.2921, 36.8219), Region::Emea); // Nairobi
        assert_eq!(classify(51.1657, 10.4515), Region::Emea); // central Germany
        assert_eq!(classify(43.1332, 131.9113), Region::GreaterChina); // Vladivostok
    }

    #[test]
    fn test_classify_misses_fall_back_to_default() {
        assert_eq!(classify(0.0, 0.0), Region::Apac);
        assert_eq!(classify(28.6139, 77.2090), Region::Apac); // New Delhi
        assert_eq!(classify(61.2181, -149.9003), Region::Apac); // Anchorage
        assert_eq!(classify(38.7223, -9.1393), Region::Apac); // Lisbon
    }

    #[test]
    fn test_classify_tolerance_is_strict() {
        assert_eq!(classify(35.1, -118.2437), Region::Apac);
        assert_eq!(classify(34.0522, -117.2), Region::Apac);
        assert_eq!(classify(34.0522 + 0.99, -118.2437 - 0.99), Region::America);
    }

    #[test]
    fn test_classify_europe_box_is_wider() {
        assert_eq!(classify(51.1657 + 1.5, 10.4515 - 1.5), Region::Emea);
        assert_eq!(classify(-1.2921 + 1.5, 36.8219), Region::Apac);
    }

    #[test]
    fn test_classify_is_total() {
        let mut lat = -90.0;
        while lat <= 90.0 {
            let mut lng = -180.0;
            while lng <= 180.0 {
                assert!(Region::ALL.contains(&classify(lat, lng)));
                lng += 2.5;
            }
            lat += 2.5;
        }
        assert_eq!(classify(f64::NAN, f64::NAN), Region::Apac);
    }

    #[test]
    fn test_routes_are_exhaustive_and_distinct() {
        let routes: HashSet<&str> = Region::ALL.iter().map(|r| r.route()).collect();
        assert_eq!(routes.len(), Region::ALL.len());
        for r in Region::ALL {
            assert!(r.route().starts_with('/'));
            assert!(r.route().len() > 1);
        }
        assert_eq!(Region::default().route(), "/leaderboard");
    }

    #[test]
    fn test_route_for_click() {
        let la = GeoPoint {
            latitude: 34.0522,
            longitude: -118.2437,
            label: "Los Angeles, California",
            url: "#",
            clickable: true,
        };
        assert_eq!(route_for_click(Some(&la)), "/america-leaderboard");
        assert_eq!(route_for_click(None), "/leaderboard");
    }

    #[test]
    fn test_region_info_names_match_display() {
        for r in Region::ALL {
            assert_eq!(r.info().region_name, format!("{r} Region"));
        }
    }

    #[test]
    fn test_region_serializes_as_display_name() {
        let json = serde_json::to_string(&Region::GreaterChina).unwrap();
        assert_eq!(json, "\"Greater China\"");
        let json = serde_json::to_string(&Region::Emea).unwrap();
        assert_eq!(json, "\"EMEA\"");
    }
}
