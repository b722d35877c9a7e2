// LogTriage - app/mod.rs
//
// Application layer: I/O orchestration between the filesystem and the
// pure core. The core never reads files itself.

pub mod input;
