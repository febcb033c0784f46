//! HTTP request collaborator.
//!
//! A small `reqwest` wrapper that returns every outcome, success or not, as
//! a [StandardResponse]. The document operations do not depend on it.

mod client;
mod config;
mod response;

pub use client::*;
pub use config::*;
pub use response::*;
