pub mod colors;
pub mod formatting;
pub mod table;
pub mod time;

pub use formatting::mins2readable;
pub use time::{minutes_to_time, time_to_minutes};
