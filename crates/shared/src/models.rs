use serde::Serialize;

use crate::geo::{self, Point};
use crate::region::Region;

/// A labelled point on the world map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub label: &'static str,
    pub url: &'static str,
    pub clickable: bool,
}

impl GeoPoint {
    pub fn projected(&self) -> Point {
        geo::project(self.latitude, self.longitude)
    }
}

/// Directed pair of map points, drawn as one arc.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConnectionEdge {
    pub start: GeoPoint,
    pub end: GeoPoint,
}

impl ConnectionEdge {
    pub fn arc(&self) -> geo::QuadCurve {
        geo::curve(self.start.projected(), self.end.projected())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub rank: u8,
    pub initials: &'static str,
    pub name: &'static str,
    pub country: &'static str,
    /// Percentage in `0..=100`.
    pub adoption_rate: u8,
    pub business_unit: &'static str,
}

/// Descriptive copy shown on every profile from a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionInfo {
    pub region_name: &'static str,
    pub languages: &'static str,
    pub about: &'static str,
    pub timezone: &'static str,
}

/// A participant joined with the copy of the region they belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantProfile {
    pub name: String,
    pub country: String,
    pub business_unit: String,
    pub adoption_rate: u8,
    pub region: Region,
    pub info: RegionInfo,
}
