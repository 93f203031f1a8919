pub mod connection;
pub mod constants;
