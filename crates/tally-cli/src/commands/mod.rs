pub mod entries;
pub mod menu;
pub mod misc;
pub mod totals;
