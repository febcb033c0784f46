//! Common types shared by every module: values, sort order, constants and
//! small utilities.

mod constants;
mod sort_order;
pub mod util;
mod value;

pub use constants::*;
pub use sort_order::*;
pub use util::*;
pub use value::*;
