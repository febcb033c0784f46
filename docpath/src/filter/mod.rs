//! Query conditions.
//!
//! A condition is a `(field, operator, value)` triple; the conditions of a
//! query are ANDed in the order given. They are built either from textual
//! operators or with the fluent API:
//!
//! ```rust
//! use docpath::filter::{field, QueryCondition};
//!
//! let fluent = field("age").gte(18);
//! let parsed = QueryCondition::parse("age", ">=", 18).unwrap();
//! assert_eq!(fluent, parsed);
//! ```
//!
//! # Supported Operators
//!
//! - **Equality**: `==`, `!=`
//! - **Comparison**: `<`, `<=`, `>`, `>=`
//! - **Array**: `array-contains`, `array-contains-any`
//! - **Membership**: `in`, `not-in`

mod condition;
mod fluent;

pub use condition::*;
pub use fluent::*;
