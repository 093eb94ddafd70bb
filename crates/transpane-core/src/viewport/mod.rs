//! Shared pan/zoom state for both panes and the pointer state machine that
//! drives it.

pub mod controller;
pub mod easing;
pub mod pointer;
pub mod transform;

pub use controller::{DragState, ViewportController};
pub use easing::TransformEasing;
pub use pointer::{PointerEvent, PointerPhase};
pub use transform::ViewTransform;
