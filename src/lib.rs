//! trackpaint - blocked paint segments for ride track pieces
//!
//! The library side of the `trackpaint` binary. Table data and lookups live
//! in `trackpaint_core`; this crate adds the application configuration.

pub mod config;
