pub mod exit_window;
pub mod lunch;
pub mod solo_limit;
pub mod status;
pub mod worked;
