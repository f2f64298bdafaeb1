//! Console collaborators: line input, status output and random integers.
//!
//! The device and its games never touch stdin, stdout or a global RNG
//! directly. They talk to these traits, so the same game logic runs behind
//! the interactive menu, in tests, or behind any other line-oriented channel.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use tracing::{debug, instrument, warn};

/// Source of line-oriented user input.
pub trait LineSource {
    /// Returns the next line without its trailing newline, or `None` once
    /// the source is exhausted.
    fn next_line(&mut self) -> Option<String>;
}

/// Sink for status and result text.
pub trait StatusSink {
    /// Emits one line of text.
    fn emit(&mut self, line: &str);
}

/// Source of uniformly distributed integers.
pub trait RandomSource: std::fmt::Debug {
    /// Returns an integer in `low..=high`.
    fn next_in_range(&mut self, low: i32, high: i32) -> i32;
}

// ─────────────────────────────────────────────────────────────
//  Real console
// ─────────────────────────────────────────────────────────────

/// Reads lines from any buffered reader (stdin in the binary).
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: BufRead> ReaderSource<R> {
    /// Wraps a buffered reader.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD, so a bad
    /// line is still one line.
    fn next_line(&mut self) -> Option<String> {
        let mut buf = Vec::new();
        match self.reader.read_until(b'\n', &mut buf) {
            Ok(0) => None,
            Ok(_) => {
                let line = String::from_utf8_lossy(&buf);
                Some(line.trim_end_matches(['\r', '\n']).to_string())
            }
            Err(e) => {
                warn!(error = %e, "Failed to read input line");
                None
            }
        }
    }
}

/// Writes lines to any writer (stdout in the binary).
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    /// Wraps a writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> StatusSink for WriterSink<W> {
    fn emit(&mut self, line: &str) {
        if let Err(e) = writeln!(self.writer, "{}", line).and_then(|()| self.writer.flush()) {
            warn!(error = %e, "Failed to write output line");
        }
    }
}

/// Random source backed by [`StdRng`].
#[derive(Debug)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Creates a source seeded from the operating system.
    #[instrument]
    pub fn from_entropy() -> Self {
        debug!("Seeding random source from entropy");
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a reproducible source from a fixed seed.
    #[instrument]
    pub fn from_seed(seed: u64) -> Self {
        debug!(seed, "Seeding random source");
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_in_range(&mut self, low: i32, high: i32) -> i32 {
        self.rng.gen_range(low..=high)
    }
}

// ─────────────────────────────────────────────────────────────
//  Scripted doubles
// ─────────────────────────────────────────────────────────────

/// Input source that replays a fixed list of lines.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    /// Creates a source that yields `lines` in order.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns how many lines are still queued.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineSource for ScriptedInput {
    fn next_line(&mut self) -> Option<String> {
        self.lines.pop_front()
    }
}

/// Output sink that records every emitted line.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    /// Creates an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns true if any recorded line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.contains(needle))
    }

    /// Counts recorded lines containing `needle`.
    pub fn count(&self, needle: &str) -> usize {
        self.lines.iter().filter(|l| l.contains(needle)).count()
    }
}

impl StatusSink for Transcript {
    fn emit(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

/// Random source that cycles through a fixed list of values.
///
/// Values are clamped into the requested range.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<i32>,
    next: usize,
}

impl ScriptedRandom {
    /// Creates a source cycling through `values`. An empty list yields the
    /// low end of every range.
    pub fn new(values: impl Into<Vec<i32>>) -> Self {
        Self {
            values: values.into(),
            next: 0,
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn next_in_range(&mut self, low: i32, high: i32) -> i32 {
        if self.values.is_empty() {
            return low;
        }
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value.clamp(low, high)
    }
}
