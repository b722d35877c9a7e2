// LogTriage - core/mod.rs
//
// Core triage logic layer.
// Dependencies: standard library, regex, serde/serde_json only.
// Must NOT depend on: app, clap, or the filesystem directly.

pub mod classify;
pub mod extract;
pub mod model;
pub mod report;
pub mod summary;
