use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::error::RunnerError;
use crate::style::StylePair;

use super::types::LineTap;

/// Spawn the single consumer of the line channel.
///
/// Lines are rendered with `style` and written in arrival order, one
/// `write_all` per line. The task ends once every sender is dropped and the
/// channel is empty, resolving with the number of lines written. After a
/// write error the channel keeps being drained so producers never stall, and
/// the first error is returned at the end.
pub fn spawn_printer<W>(
    mut line_rx: mpsc::Receiver<LineTap>,
    style: StylePair,
    mut wr: W,
) -> JoinHandle<Result<u64, RunnerError>>
where
    W: AsyncWrite + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut written = 0u64;
        let mut failure: Option<std::io::Error> = None;

        while let Some(tap) = line_rx.recv().await {
            if failure.is_some() {
                continue;
            }
            let rendered = style.variant(tap.stream).render(&tap.line);
            match write_line(&mut wr, &rendered).await {
                Ok(()) => written += 1,
                Err(e) => {
                    tracing::error!(error = %e, "writing output failed, discarding remaining lines");
                    failure = Some(e);
                }
            }
        }

        tracing::debug!(lines = written, "printer finished");
        match failure {
            Some(source) => Err(RunnerError::StreamIo {
                stream: "output",
                source,
            }),
            None => Ok(written),
        }
    })
}

async fn write_line<W>(wr: &mut W, rendered: &str) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    wr.write_all(rendered.as_bytes()).await?;
    wr.flush().await
}
