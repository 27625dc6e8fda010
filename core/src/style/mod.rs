//! Line decoration: the static style registry, override resolution and the
//! demo listing of every mode.
mod demo;
mod registry;
mod resolve;

pub use demo::{write_demo, DEMO_STDERR_SAMPLE, DEMO_STDOUT_SAMPLE};
pub use registry::{mode_names, StylePair, StyleVariant, DEFAULT_MODE};
pub use resolve::StyleOverrides;
