pub mod error;
pub mod model;
pub mod roster;
pub mod score;
