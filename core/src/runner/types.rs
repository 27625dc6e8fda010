/// One line read from the child, tagged with the pipe it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineTap {
    pub line: String,
    pub stream: LineStream,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStream {
    Stdout,
    Stderr,
}

impl LineStream {
    pub fn label(self) -> &'static str {
        match self {
            LineStream::Stdout => "stdout",
            LineStream::Stderr => "stderr",
        }
    }
}

#[derive(Debug, Clone)]
pub struct RunnerStartArgs {
    pub cmd: String,
    pub args: Vec<String>,
}

impl RunnerStartArgs {
    /// Split a command line into program and arguments. `None` when empty.
    pub fn from_command_line(cmdline: &[String]) -> Option<Self> {
        let (cmd, args) = cmdline.split_first()?;
        Some(Self {
            cmd: cmd.clone(),
            args: args.to_vec(),
        })
    }
}

/// How the child terminated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub exit_code: i32,
    pub success: bool,
    /// Human readable status, e.g. `exit status: 3`.
    pub status: String,
}

#[derive(Debug, Clone)]
pub struct RunnerResult {
    pub exit_code: i32,
    pub success: bool,
    pub stdout_lines: u64,
    pub stderr_lines: u64,
    pub printed_lines: u64,
    pub duration_ms: u64,
}
