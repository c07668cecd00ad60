pub mod config;
pub mod eval;
pub mod init;
pub mod lunch;
pub mod profiles;
pub mod watch;
