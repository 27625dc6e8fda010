mod load;
mod types;

pub use load::{get_logcli_data_dir, load, load_from_path};
pub use types::{AppConfig, LoggingConfig, RunnerConfig, StyleConfig};
