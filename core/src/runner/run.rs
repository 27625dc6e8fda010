//! Supervisor: starts the workers around a child session and tears them down
//! in order (child exit, capture workers, channel close, printer).
use std::time::Instant;

use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::config::RunnerConfig;
use crate::error::RunnerError;
use crate::style::StylePair;

use super::exit::UNKNOWN_EXIT_CODE;
use super::io_pump;
use super::printer;
use super::session::ProcessSession;
use super::traits::RunnerSession;
use super::types::{LineTap, RunOutcome, RunnerResult, RunnerStartArgs};

pub type DynWriter = Box<dyn AsyncWrite + Unpin + Send>;

pub struct RunSessionArgs {
    pub session: Box<dyn RunnerSession>,
    pub style: StylePair,
    pub line_channel_capacity: usize,
    /// Receives every decorated line.
    pub output: DynWriter,
    /// Receives read errors and the final status line.
    pub diagnostics: DynWriter,
}

/// Start `start` as a child and stream its output to this process's stdout.
pub async fn run_command(
    start: &RunnerStartArgs,
    style: StylePair,
    runner_cfg: &RunnerConfig,
) -> Result<RunnerResult, RunnerError> {
    let session = ProcessSession::start(start)?;
    run_session(RunSessionArgs {
        session: Box::new(session),
        style,
        line_channel_capacity: runner_cfg.line_channel_capacity,
        output: Box::new(tokio::io::stdout()),
        diagnostics: Box::new(tokio::io::stderr()),
    })
    .await
}

pub async fn run_session(args: RunSessionArgs) -> Result<RunnerResult, RunnerError> {
    let RunSessionArgs {
        mut session,
        style,
        line_channel_capacity,
        output,
        mut diagnostics,
    } = args;

    let stdout = match session.stdout() {
        Some(s) => s,
        None => return Err(abandon(session.as_mut(), "no stdout pipe").await),
    };
    let stderr = match session.stderr() {
        Some(s) => s,
        None => return Err(abandon(session.as_mut(), "no stderr pipe").await),
    };

    let started_at = Instant::now();

    // The supervisor keeps no sender: once both pumps return, the channel is
    // closed and the printer's receive loop ends after draining it.
    let (line_tx, line_rx) = mpsc::channel::<LineTap>(line_channel_capacity.max(1));
    let out_task = io_pump::pump_stdout(stdout, line_tx.clone());
    let err_task = io_pump::pump_stderr(stderr, line_tx);
    let print_task = printer::spawn_printer(line_rx, style, output);

    let outcome = match session.wait().await {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!(error = %e, "waiting for child failed");
            RunOutcome {
                exit_code: UNKNOWN_EXIT_CODE,
                success: false,
                status: e.to_string(),
            }
        }
    };
    tracing::debug!(exit_code = outcome.exit_code, "child exited");

    let stdout_lines = join_capture(out_task, "stdout", &mut diagnostics).await;
    let stderr_lines = join_capture(err_task, "stderr", &mut diagnostics).await;

    let printed_lines = match print_task.await {
        Ok(res) => res?,
        Err(e) => {
            return Err(RunnerError::Worker {
                worker: "printer",
                reason: e.to_string(),
            })
        }
    };

    let status_line = if outcome.success {
        "Command finished successfully".to_string()
    } else {
        format!("Command finished with error: {}", outcome.status)
    };
    write_diagnostic(&mut diagnostics, &status_line).await;

    let duration_ms = started_at.elapsed().as_millis() as u64;
    tracing::debug!(
        exit_code = outcome.exit_code,
        stdout_lines,
        stderr_lines,
        printed_lines,
        duration_ms,
        "run finished"
    );

    Ok(RunnerResult {
        exit_code: outcome.exit_code,
        success: outcome.success,
        stdout_lines,
        stderr_lines,
        printed_lines,
        duration_ms,
    })
}

/// Kill a child whose pipes could not be wired up.
async fn abandon(session: &mut dyn RunnerSession, reason: &str) -> RunnerError {
    if let Err(e) = session.kill().await {
        tracing::warn!(error = %e, "failed to kill child after setup error");
    }
    RunnerError::Spawn(reason.to_string())
}

/// Wait for one capture worker. Its failures are reported, never propagated.
async fn join_capture(
    task: JoinHandle<Result<u64, RunnerError>>,
    label: &'static str,
    diagnostics: &mut DynWriter,
) -> u64 {
    match task.await {
        Ok(Ok(lines)) => lines,
        Ok(Err(e)) => {
            write_diagnostic(diagnostics, &format!("Error reading output: {e}")).await;
            0
        }
        Err(e) => {
            tracing::error!(stream = label, error = %e, "capture worker crashed");
            write_diagnostic(diagnostics, &format!("Error reading {label}: {e}")).await;
            0
        }
    }
}

async fn write_diagnostic(wr: &mut DynWriter, line: &str) {
    let _ = wr.write_all(line.as_bytes()).await;
    let _ = wr.write_all(b"\n").await;
    let _ = wr.flush().await;
}
