// Event Receiver - NDJSON event loop
//
// Reads one JSON event per line from the host and hands each one to the
// dispatcher before touching the next. Malformed lines are counted and
// skipped; dispatch failures abort the loop and propagate.

use std::io::BufRead;

use anyhow::{Context, Result};

use crate::dispatcher::Dispatcher;
use crate::notification::Notifier;
use crate::session::SessionSource;

use super::Event;

/// Receiver statistics
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ReceiverStats {
    pub events_received: u64,
    pub parse_errors: u64,
}

impl ReceiverStats {
    fn log_summary(&self) {
        println!("[Receiver] === Statistics ===");
        println!("  Events received: {}", self.events_received);
        println!("  Parse errors: {}", self.parse_errors);
        println!("==================");
    }
}

/// Drive the dispatcher from a line-delimited event stream until EOF
pub fn run<R, S, N>(reader: R, dispatcher: &Dispatcher<S, N>) -> Result<ReceiverStats>
where
    R: BufRead,
    S: SessionSource,
    N: Notifier,
{
    let mut stats = ReceiverStats::default();

    for line_result in reader.lines() {
        let line = line_result.context("failed to read event line")?;

        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<Event>(&line) {
            Ok(event) => {
                stats.events_received += 1;
                dispatcher.handle(&event)?;
            }
            Err(e) => {
                stats.parse_errors += 1;
                eprintln!(
                    "[Receiver] Parse error #{}: {} - Data: {}",
                    stats.parse_errors, e, line
                );
            }
        }
    }

    println!("[Receiver] Event stream closed by host");
    stats.log_summary();
    Ok(stats)
}
