use tokio::io::{AsyncWrite, AsyncWriteExt};

use super::registry::{mode_names, StylePair};
use super::resolve::StyleOverrides;

pub const DEMO_STDOUT_SAMPLE: &str = "normal print (stdout)";
pub const DEMO_STDERR_SAMPLE: &str = "error-message (stderr)";

/// Print every registered mode with the given overrides applied.
pub async fn write_demo<W>(wr: &mut W, overrides: &StyleOverrides) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin + ?Sized,
{
    let mut out = String::from("logcli - all modes of styling:\n");
    for name in mode_names() {
        let pair = StylePair::for_mode(name).apply(overrides);
        out.push_str(&format!("\n'{name}'\n"));
        out.push_str(&pair.stdout.render(DEMO_STDOUT_SAMPLE));
        out.push_str(&pair.stderr.render(DEMO_STDERR_SAMPLE));
    }
    wr.write_all(out.as_bytes()).await?;
    wr.flush().await
}
