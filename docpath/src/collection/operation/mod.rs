mod document_store;
mod upsert_engine;
mod write_result;

pub use document_store::*;
pub use upsert_engine::*;
pub use write_result::*;
