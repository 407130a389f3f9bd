pub mod config;
pub mod corrector;
pub mod entry;
pub mod points;
pub mod ranker;
pub mod series;

pub use config::*;
pub use corrector::{correct, elapsed_only, time_on_distance, time_on_time};
pub use entry::{RaceEntry, ResultRecord};
pub use points::{assign_points, calculate_points, Penalty};
pub use ranker::rank;
pub use series::{aggregate, Race, SeriesStanding};
