use async_trait::async_trait;
use tokio::io::AsyncRead;

use super::types::RunOutcome;

/// A started child whose output pipes can be taken exactly once.
#[async_trait]
pub trait RunnerSession: Send {
    fn stdout(&mut self) -> Option<Box<dyn AsyncRead + Unpin + Send>>;
    fn stderr(&mut self) -> Option<Box<dyn AsyncRead + Unpin + Send>>;
    async fn kill(&mut self) -> anyhow::Result<()>;
    async fn wait(&mut self) -> anyhow::Result<RunOutcome>;
}
