pub mod dashboard;
pub mod get_started;
pub mod home;
pub mod leaderboard;
pub mod not_found;
pub mod profile;
pub mod resources;
