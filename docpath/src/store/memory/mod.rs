mod in_memory_datastore;
mod query_engine;

pub use in_memory_datastore::*;
