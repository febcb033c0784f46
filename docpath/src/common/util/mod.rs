mod date_utils;
mod slug_utils;

pub use date_utils::*;
pub use slug_utils::*;
