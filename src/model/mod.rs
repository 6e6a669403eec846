//! Pure data structures (DTOs) implementing the [`Record`](crate::framework::Record) trait.

pub mod product;

pub use product::*;
