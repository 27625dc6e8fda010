//! Application wiring: demo dispatch, style resolution and the supervised run.
use logcli_core::config::AppConfig;
use logcli_core::error::CliError;
use logcli_core::runner::{run_command, RunnerStartArgs};
use logcli_core::style::{write_demo, StylePair};

use crate::commands::cli::Args;

#[tracing::instrument(name = "cli.run_app", skip(args, cfg))]
pub async fn run_app(args: Args, cfg: AppConfig) -> Result<i32, CliError> {
    let overrides = args.style_overrides();

    if args.demo {
        let mut stdout = tokio::io::stdout();
        write_demo(&mut stdout, &overrides).await?;
        return Ok(0);
    }

    let start = RunnerStartArgs::from_command_line(&args.command).ok_or(CliError::Usage)?;

    let mode = args.mode.as_deref().unwrap_or(cfg.style.mode.as_str());
    let style = StylePair::resolve(mode, &overrides);
    tracing::debug!(mode = %mode, cmd = %start.cmd, "starting run");

    let result = run_command(&start, style, &cfg.runner).await?;
    Ok(result.exit_code)
}
