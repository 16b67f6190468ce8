//! Toolchain-neutral core of the champions portal: map geometry, region
//! routing and the compiled-in leaderboard and profile data.

pub mod data;
pub mod geo;
pub mod land;
pub mod models;
pub mod profile;
pub mod region;
