//! Board analysis: eye detection and disputed-territory extraction.

pub mod eyes;
pub mod territory;

pub use eyes::{EyeReport, PotentialEye, eyes_by_chain, find_potential_eyes};
pub use territory::{contested_points, find_disputed_territory};
