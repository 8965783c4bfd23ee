//! Utility modules

pub mod fuzzy;
pub mod phone;

pub use fuzzy::distance;
pub use phone::{raw_phone_number, suffix};
