// LogTriage - lib.rs
//
// Library entry point, exposing all non-CLI modules for integration testing
// and potential future programmatic use.
//
// The clap CLI surface lives in `main.rs` and is not part of the library.

pub mod app;
pub mod core;
pub mod util;
