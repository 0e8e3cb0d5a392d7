//! **statespace-core**: value types shared across the *statespace* crates.
//!
//! Currently this is the grid geometry used by explicit grid graphs:
//! [`GridPoint`] and the closed rectangle [`Bounds`].

pub mod geom;

pub use geom::{Bounds, GridPoint};
