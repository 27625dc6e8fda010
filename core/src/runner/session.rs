use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncRead;
use tokio::process::{Child, Command};

use crate::error::RunnerError;

use super::exit::normalize_exit;
use super::traits::RunnerSession;
use super::types::{RunOutcome, RunnerStartArgs};

/// A real child process: stdin inherited, stdout and stderr piped.
pub struct ProcessSession {
    child: Child,
}

impl ProcessSession {
    pub fn start(args: &RunnerStartArgs) -> Result<Self, RunnerError> {
        let child = Command::new(&args.cmd)
            .args(&args.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| RunnerError::Spawn(format!("{}: {}", args.cmd, e)))?;

        tracing::debug!(cmd = %args.cmd, pid = ?child.id(), "child started");
        Ok(Self { child })
    }
}

#[async_trait]
impl RunnerSession for ProcessSession {
    fn stdout(&mut self) -> Option<Box<dyn AsyncRead + Unpin + Send>> {
        self.child
            .stdout
            .take()
            .map(|s| Box::new(s) as Box<dyn AsyncRead + Unpin + Send>)
    }

    fn stderr(&mut self) -> Option<Box<dyn AsyncRead + Unpin + Send>> {
        self.child
            .stderr
            .take()
            .map(|s| Box::new(s) as Box<dyn AsyncRead + Unpin + Send>)
    }

    async fn kill(&mut self) -> anyhow::Result<()> {
        self.child.kill().await?;
        Ok(())
    }

    async fn wait(&mut self) -> anyhow::Result<RunOutcome> {
        let status = self.child.wait().await?;
        Ok(RunOutcome {
            exit_code: normalize_exit(status),
            success: status.success(),
            status: status.to_string(),
        })
    }
}
