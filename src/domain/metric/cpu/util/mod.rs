pub mod query_builder;
pub mod result_normalizer;
