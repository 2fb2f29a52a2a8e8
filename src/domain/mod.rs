pub mod common;
pub mod metric;
pub mod system;
