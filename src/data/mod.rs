pub mod booking;
pub mod client;
pub mod schedule;
pub mod upstream;
