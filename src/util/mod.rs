// LogTriage - util/mod.rs
//
// Cross-cutting utilities: named constants, typed errors, logging setup.

pub mod constants;
pub mod error;
pub mod logging;
