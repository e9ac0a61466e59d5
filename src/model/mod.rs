pub mod course;
pub mod player;

pub use course::{Course, CourseMetadata, Hole};
pub use player::{HoleScore, Player, PlayerId};
