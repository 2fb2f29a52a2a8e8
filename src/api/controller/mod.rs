pub mod metric;
pub mod system;
