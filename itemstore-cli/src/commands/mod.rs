//! Command implementations for the itemstore CLI

pub mod serve;

pub use serve::run_serve;
