use std::path::PathBuf;

use clap::Parser;
use logcli_core::style::StyleOverrides;

#[derive(Parser, Debug)]
#[command(
    name = "logcli",
    version,
    about = "Run a command and prefix/style each line of its stdout and stderr"
)]
pub struct Args {
    /// Prefix for <stdout> lines
    #[arg(short = 'o', long, value_name = "PREFIX")]
    pub stdout_prefix: Option<String>,

    /// Prefix for <stderr> lines
    #[arg(short = 'e', long, value_name = "PREFIX")]
    pub stderr_prefix: Option<String>,

    /// Prefix for any line
    #[arg(short = 'p', long, value_name = "PREFIX")]
    pub prefix: Option<String>,

    /// Mode/style of output (normal, dim, color, dimu, dimred)
    #[arg(short = 'm', long)]
    pub mode: Option<String>,

    /// Spacing between prefix and output
    #[arg(short = 's', long, value_parser = clap::value_parser!(u16))]
    pub spacing: Option<u16>,

    /// Print a demo of all modes
    #[arg(long)]
    pub demo: bool,

    /// Config file (defaults to ~/.logcli/config.toml, then ./logcli.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Command to run, after '--'
    #[arg(trailing_var_arg = true, value_name = "COMMAND")]
    pub command: Vec<String>,
}

impl Args {
    pub fn style_overrides(&self) -> StyleOverrides {
        StyleOverrides {
            prefix: self.prefix.clone(),
            stdout_prefix: self.stdout_prefix.clone(),
            stderr_prefix: self.stderr_prefix.clone(),
            spacing: self.spacing.map(usize::from),
        }
    }
}
