pub mod calculator;
pub mod logic;
pub mod notify;
