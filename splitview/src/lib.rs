//! Side-by-side comparison of two map layers.
//!
//! One layer is clipped to the left of a draggable divider, the other
//! to the right. The clip rectangles live in the map content's pixel
//! space while the divider handle lives in viewport space, and the
//! two drift apart as soon as the map is panned.

mod clip;
mod compare;
mod error;

pub use crate::{
    clip::{split, ClipSplit, PixelPt, PixelRect, ViewBox},
    compare::{Compare, Teardown, DEFAULT_FRACTION},
    error::SplitViewError,
};
