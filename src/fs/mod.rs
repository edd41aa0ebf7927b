//! Filesystem utilities for hookstrip.
//!
//! The only operation here is the atomic rewrite used when writing the
//! filtered platform file back, so an interrupted run never leaves the
//! file truncated.

pub mod atomic;

pub use atomic::atomic_write_file;
