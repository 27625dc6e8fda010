//! Core of logcli: run a child, capture stdout and stderr concurrently and
//! print every line with a per-stream style.
pub mod config;
pub mod error;
pub mod runner;
pub mod style;
