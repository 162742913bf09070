pub mod poll_validation;

pub use poll_validation::*;
