pub mod formatters;
pub mod token;
pub mod tracking;
