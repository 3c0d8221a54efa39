//! Streaming event grouping over a `FinalEvents` file.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use g2s_core::{ConvError, ErrorInfo};
use g2s_event::record::RawParticle;
use log::warn;

use crate::line::parse_particle_line;

fn io_error(path: &Path, err: &std::io::Error) -> ConvError {
    ConvError::Parse(
        ErrorInfo::new("read-input", err.to_string())
            .with_context("path", path.display().to_string()),
    )
}

/// Number of simulator runs recorded in a file, read from the first column
/// of its last data line. Used for the `1 / NRuns` statistics weight.
pub fn count_runs(path: &Path) -> Result<u32, ConvError> {
    let file = File::open(path).map_err(|err| io_error(path, &err))?;
    let mut last = None;
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|err| io_error(path, &err))?;
        if !line.trim().is_empty() && !line.starts_with('#') {
            last = Some(line);
        }
    }
    last.as_deref()
        .and_then(|line| line.split_whitespace().next())
        .and_then(|token| token.parse().ok())
        .ok_or_else(|| {
            ConvError::Parse(
                ErrorInfo::new("count-runs", "could not read a run count from the last line")
                    .with_context("path", path.display().to_string()),
            )
        })
}

/// Iterator over the events of a `FinalEvents` stream.
///
/// An event is a contiguous block of particle lines sharing an event
/// number. Unparseable lines poison the event being accumulated: the block
/// is yielded as an error and the caller decides whether that aborts the
/// run or merely drops the event.
pub struct EventReader<R: BufRead> {
    reader: R,
    has_prod_charge: bool,
    current: Vec<RawParticle>,
    poisoned: bool,
    line_number: usize,
    done: bool,
}

impl EventReader<BufReader<File>> {
    /// Opens a `FinalEvents` file for streaming.
    pub fn open(path: &Path, has_prod_charge: bool) -> Result<Self, ConvError> {
        let file = File::open(path).map_err(|err| io_error(path, &err))?;
        Ok(Self::new(BufReader::new(file), has_prod_charge))
    }
}

impl<R: BufRead> EventReader<R> {
    /// Wraps an already opened stream.
    pub fn new(reader: R, has_prod_charge: bool) -> Self {
        Self {
            reader,
            has_prod_charge,
            current: Vec::new(),
            poisoned: false,
            line_number: 0,
            done: false,
        }
    }

    /// Yields the accumulated block, resetting the state.
    fn flush(&mut self) -> Option<Result<Vec<RawParticle>, ConvError>> {
        let block = std::mem::take(&mut self.current);
        let poisoned = std::mem::replace(&mut self.poisoned, false);
        if poisoned {
            let event = block.first().map(|p| p.event_number).unwrap_or(0);
            return Some(Err(ConvError::Parse(
                ErrorInfo::new("event-poisoned", "event contained a malformed particle line")
                    .with_context("event_number", event.to_string()),
            )));
        }
        if block.is_empty() {
            None
        } else {
            Some(Ok(block))
        }
    }
}

impl<R: BufRead> Iterator for EventReader<R> {
    type Item = Result<Vec<RawParticle>, ConvError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let mut line = String::new();
        loop {
            line.clear();
            match self.reader.read_line(&mut line) {
                Err(err) => {
                    self.done = true;
                    return Some(Err(ConvError::Parse(ErrorInfo::new(
                        "read-input",
                        err.to_string(),
                    ))));
                }
                Ok(0) => {
                    self.done = true;
                    return self.flush();
                }
                Ok(_) => {}
            }
            self.line_number += 1;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            match parse_particle_line(trimmed, self.line_number, self.has_prod_charge) {
                Err(err) => {
                    warn!("skipping malformed particle line: {err}");
                    self.poisoned = true;
                }
                Ok(part) => {
                    let boundary = self
                        .current
                        .last()
                        .is_some_and(|prev| prev.event_number != part.event_number);
                    if boundary {
                        let finished = self.flush();
                        self.current.push(part);
                        if finished.is_some() {
                            return finished;
                        }
                    } else {
                        self.current.push(part);
                    }
                }
            }
        }
    }
}
