pub mod cpu;
pub mod error;
