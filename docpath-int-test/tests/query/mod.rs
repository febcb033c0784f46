mod pagination_test;
mod query_test;
