use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::error::RunnerError;

use super::types::{LineStream, LineTap};

pub fn pump_stdout<R>(rd: R, line_tx: mpsc::Sender<LineTap>) -> JoinHandle<Result<u64, RunnerError>>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    pump(rd, line_tx, LineStream::Stdout)
}

pub fn pump_stderr<R>(rd: R, line_tx: mpsc::Sender<LineTap>) -> JoinHandle<Result<u64, RunnerError>>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    pump(rd, line_tx, LineStream::Stderr)
}

/// Read `rd` until EOF, sending one [`LineTap`] per line.
///
/// Resolves with the number of lines delivered. A read error ends the pump
/// early; the pipe is dropped either way. If the receiver is gone the pipe is
/// still drained so the child never blocks on a full pipe.
fn pump<R>(
    rd: R,
    line_tx: mpsc::Sender<LineTap>,
    stream: LineStream,
) -> JoinHandle<Result<u64, RunnerError>>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let label = stream.label();
        let mut rd = BufReader::with_capacity(16 * 1024, rd);
        let mut line_buf: Vec<u8> = Vec::with_capacity(8 * 1024);
        let mut sent = 0u64;
        let mut receiver_gone = false;

        loop {
            line_buf.clear();
            // A final line without '\n' is returned as-is at EOF.
            let n = match rd.read_until(b'\n', &mut line_buf).await {
                Ok(n) => n,
                Err(e) => {
                    tracing::warn!(stream = label, error = %e, "read failed, stopping capture");
                    return Err(RunnerError::StreamIo {
                        stream: label,
                        source: e,
                    });
                }
            };
            if n == 0 {
                break;
            }
            if receiver_gone {
                continue;
            }

            trim_newline(&mut line_buf);
            let line = String::from_utf8_lossy(&line_buf).into_owned();
            if line_tx.send(LineTap { line, stream }).await.is_err() {
                tracing::warn!(stream = label, "line channel closed, discarding output");
                receiver_gone = true;
            } else {
                sent += 1;
            }
        }

        tracing::debug!(stream = label, lines = sent, "capture finished");
        Ok(sent)
    })
}

fn trim_newline(buf: &mut Vec<u8>) {
    if buf.last() == Some(&b'\n') {
        buf.pop();
    }
    if buf.last() == Some(&b'\r') {
        buf.pop();
    }
}
