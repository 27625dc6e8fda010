use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("no command to execute - add '--' last and whatever command you want to run after")]
    Usage,
    #[error("config error: {0}")]
    Config(String),
    #[error("{0}")]
    Runner(#[from] RunnerError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("spawn failed: {0}")]
    Spawn(String),
    #[error("stream io error: {stream} {source}")]
    StreamIo {
        stream: &'static str,
        source: std::io::Error,
    },
    #[error("worker {worker} did not finish: {reason}")]
    Worker {
        worker: &'static str,
        reason: String,
    },
}
