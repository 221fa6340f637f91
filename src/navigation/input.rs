//! Line-oriented navigation input.
//!
//! Each non-blank line is one navigation target. Lines that are not valid
//! UTF-8 are decoded lossily rather than rejected, so they still navigate
//! (usually to the fallback) instead of ending the session.

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;

use crate::navigation::event::NavigationEvent;

/// Forward every non-blank line of `reader` as a user navigation.
///
/// Returns the number of events sent. Stops early, without error, when the
/// navigator has gone away.
pub async fn forward_lines<R>(
    reader: R,
    tx: mpsc::Sender<NavigationEvent>,
) -> Result<usize, std::io::Error>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.split(b'\n');
    let mut sent = 0;

    while let Some(raw) = lines.next_segment().await? {
        let line = match String::from_utf8(raw) {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!(bytes = e.as_bytes().len(), "Navigation target is not valid UTF-8");
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };

        let target = line.trim_end_matches('\r');
        if target.trim().is_empty() {
            continue;
        }

        if tx.send(NavigationEvent::user(target)).await.is_err() {
            tracing::debug!("Navigator gone, no longer reading input");
            break;
        }
        sent += 1;
    }

    Ok(sent)
}
