//! Partitioned vectors over player → infoset → action coordinates.
//!
//! - [`Shape`] — Per-player infoset counts and per-infoset action counts
//! - [`Layout`] — Offset tables derived once from a shape, shared by `Arc`
//! - [`Partitioned`] — Flat storage sliced by a layout

mod layout;
mod partitioned;
mod shape;

pub use layout::*;
pub use partitioned::*;
pub use shape::*;
