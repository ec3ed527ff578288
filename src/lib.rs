mod collection;
pub use collection::*;

/// Line wrapping and positioning passes, plus the types they produce
pub mod layout;

mod params;
pub use params::*;

mod rect;
pub use rect::*;

mod units;
pub use units::*;

mod error;
pub use error::*;
