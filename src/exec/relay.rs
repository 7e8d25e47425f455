// src/exec/relay.rs

//! Line pump from one child pipe to one parent stream.

use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::trace;

use crate::errors::{LaunchError, Result, StreamKind};

/// Drain `reader` to end-of-stream, writing every line to `writer`.
///
/// Lines are handled as raw bytes, so output that is not valid UTF-8 is
/// passed through untouched. Trailing `\r`/`\n` are stripped and a single
/// `\n` is written in their place; a final line without a terminator is
/// still relayed. The writer is flushed whenever no more input is buffered,
/// which keeps output live without flushing once per line during bursts.
///
/// Returns the number of lines relayed.
pub async fn relay_lines<R, W>(reader: R, writer: &mut W, stream: StreamKind) -> Result<u64>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin + ?Sized,
{
    let relay_err = |source| LaunchError::StreamRead { stream, source };

    let mut reader = BufReader::new(reader);
    let mut buf = Vec::with_capacity(256);
    let mut lines = 0u64;

    loop {
        buf.clear();
        let n = reader.read_until(b'\n', &mut buf).await.map_err(relay_err)?;
        if n == 0 {
            break;
        }

        let len = strip_line_terminator(&buf).len();
        buf.truncate(len);
        trace!(%stream, line = %String::from_utf8_lossy(&buf), "relaying line");
        buf.push(b'\n');

        writer.write_all(&buf).await.map_err(relay_err)?;
        lines += 1;

        if reader.buffer().is_empty() {
            writer.flush().await.map_err(relay_err)?;
        }
    }

    writer.flush().await.map_err(relay_err)?;
    Ok(lines)
}

/// `line` without any trailing `\r` or `\n` bytes.
pub fn strip_line_terminator(line: &[u8]) -> &[u8] {
    let end = line
        .iter()
        .rposition(|b| *b != b'\n' && *b != b'\r')
        .map_or(0, |i| i + 1);
    &line[..end]
}
