mod crud_test;
mod sanitizer_test;
mod upsert_test;
