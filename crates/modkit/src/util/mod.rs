//! Small helpers shared across the library.
//!
//! - **Parsing**: lenient enum parsing with a logged fallback
//! - **Values**: minimum of several values, default-aware assignment
//! - **Timing**: a pausable [`Stopwatch`]

mod parse;
mod stopwatch;
mod value;

pub use parse::{short_type_name, try_parse_enum};
pub use stopwatch::Stopwatch;
pub use value::{min_of, set_if_default};
