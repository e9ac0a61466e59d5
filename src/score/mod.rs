pub mod aggregate;
pub mod allocation;
pub mod tens;

pub use aggregate::*;
pub use allocation::*;
pub use tens::*;
