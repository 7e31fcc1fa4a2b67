//! The in-memory annotation model
//!
//! A [`TextGrid`] owns an ordered set of named [`Tier`]s; each tier owns
//! its [`Interval`] or [`Point`] elements. The model is a pure value tree
//! with no shared or back references, and every decoder produces exactly
//! this shape regardless of the on-disk encoding.

mod grid;
mod tier;

pub use grid::TextGrid;
pub use tier::{Interval, Point, Tier, TierElement, TierKind, TIME_TOLERANCE};
