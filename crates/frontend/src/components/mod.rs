pub mod leaderboard_table;
pub mod logo;
pub mod navbar;
pub mod world_map;
