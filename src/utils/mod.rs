pub mod date;
pub mod dom;
