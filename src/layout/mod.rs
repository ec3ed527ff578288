//! Line wrapping and positioning for sequences of boxes.
//!
//! Layout happens in two passes, each a lazy iterator feeding the next:
//!
//! - [`Lines`](crate::layout::Lines) greedily splits the boxes into lines no wider than
//!   the wrap width, working out the gap between every pair of neighbouring boxes
//! - [`Placements`](crate::layout::Placements) stacks those lines vertically and
//!   positions the boxes on each one according to the [`Alignment`](crate::layout::Alignment)
//!
//! Most callers won't use either directly and will go through
//! [`WrappingCollection`](crate::WrappingCollection) instead.
//!
//! # Example
//!
//! ```
//! use rect_wrap::{LayoutParams, Pt, WrappingCollection};
//! use rect_wrap::layout::Alignment;
//!
//! let mut params = LayoutParams::new();
//! params.wrap_width(120.0).line_height_multiplier(1.0);
//!
//! let mut collection = WrappingCollection::new(params);
//! for _ in 0..3 {
//!     collection.add_box(50.0, 20.0, Some(Pt(10.0))).expect("valid box");
//! }
//!
//! let positions = collection.compute_positions();
//! assert_eq!(
//!     positions,
//!     vec![(Pt(0.0), Pt(0.0)), (Pt(60.0), Pt(0.0)), (Pt(0.0), Pt(20.0))]
//! );
//!
//! collection.set_alignment(Alignment::Right);
//! assert_eq!(collection.compute_positions()[0], (Pt(10.0), Pt(0.0)));
//! ```

mod align;
mod lines;
mod positions;

pub use align::*;
pub use lines::*;
pub use positions::*;
