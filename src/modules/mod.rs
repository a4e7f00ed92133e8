pub mod admin;
pub mod probe;
