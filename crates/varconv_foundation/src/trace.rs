//! Call-site capture attached to conversion errors.
//!
//! A [`StackTrace`] is a snapshot: it is taken once, when the error is built,
//! and never refers back to the live call stack afterwards.
//!
//! The newest frame always comes from [`Location::caller`], which the
//! `#[track_caller]` conversion entry points propagate out to user code. Older
//! frames are recovered from [`Backtrace::force_capture`], independent of
//! `RUST_BACKTRACE`. Binaries built without debug info have no file and line
//! for those frames, so their traces hold only the caller.

use std::backtrace::{Backtrace, BacktraceStatus};
use std::fmt;
use std::panic::Location;

/// One `(file, line)` entry of a [`StackTrace`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StackFrame {
    /// Source file path as reported by the compiler.
    pub file: String,
    /// 1-indexed line number.
    pub line: u32,
}

impl StackFrame {
    /// Creates a frame.
    #[must_use]
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }

    /// Returns true if both frames name the same line of the same file.
    ///
    /// Paths are compared by trailing components since backtraces may print
    /// absolute paths where the compiler recorded workspace-relative ones.
    #[must_use]
    pub fn same_site(&self, other: &StackFrame) -> bool {
        if self.line != other.line {
            return false;
        }
        let a = normalize(&self.file);
        let b = normalize(&other.file);
        ends_with_components(a, b) || ends_with_components(b, a)
    }
}

impl fmt::Display for StackFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

impl From<&Location<'_>> for StackFrame {
    fn from(location: &Location<'_>) -> Self {
        Self::new(location.file(), location.line())
    }
}

fn normalize(path: &str) -> &str {
    path.trim_start_matches("./")
}

/// Suffix match that only splits `path` on a separator.
fn ends_with_components(path: &str, suffix: &str) -> bool {
    match path.strip_suffix(suffix) {
        Some("") => true,
        Some(rest) => rest.ends_with(['/', '\\']),
        None => false,
    }
}

/// Ordered call sites, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StackTrace {
    entries: Vec<StackFrame>,
}

impl StackTrace {
    /// Captures the current call sequence up to the caller of this function.
    ///
    /// Frames older than the caller are walked on every call.
    #[must_use]
    #[track_caller]
    pub fn capture() -> Self {
        let origin = StackFrame::from(Location::caller());
        let backtrace = Backtrace::force_capture();
        let mut entries = match backtrace.status() {
            BacktraceStatus::Captured => frames_before(&backtrace.to_string(), &origin),
            _ => Vec::new(),
        };
        entries.push(origin);
        Self { entries }
    }

    /// Builds a trace from frames already ordered oldest first.
    #[must_use]
    pub fn from_frames(entries: Vec<StackFrame>) -> Self {
        Self { entries }
    }

    /// Frames, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[StackFrame] {
        &self.entries
    }

    /// The frame closest to where the error was raised.
    #[must_use]
    pub fn origin(&self) -> Option<&StackFrame> {
        self.entries.last()
    }

    /// Number of frames.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no frames were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over frames, oldest first.
    pub fn iter(&self) -> std::slice::Iter<'_, StackFrame> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a StackTrace {
    type Item = &'a StackFrame;
    type IntoIter = std::slice::Iter<'a, StackFrame>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for StackTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for frame in &self.entries {
            writeln!(f, "  at {frame}")?;
        }
        Ok(())
    }
}

/// Extracts the frames older than `origin` from a rendered backtrace.
///
/// Rendered backtraces list frames newest first, each symbol followed by an
/// `at file:line:column` line when debug info is available. Everything up to
/// and including `origin` belongs to the conversion machinery and is dropped.
/// If `origin` cannot be located no older frames are kept.
fn frames_before(rendered: &str, origin: &StackFrame) -> Vec<StackFrame> {
    let frames: Vec<StackFrame> = rendered.lines().filter_map(parse_location).collect();
    let Some(position) = frames.iter().position(|frame| frame.same_site(origin)) else {
        return Vec::new();
    };
    frames[position + 1..].iter().rev().cloned().collect()
}

fn parse_location(line: &str) -> Option<StackFrame> {
    let location = line.trim_start().strip_prefix("at ")?;
    let mut parts = location.rsplitn(3, ':');
    let first = parts.next()?;
    let second = parts.next()?;
    match parts.next() {
        // file:line:column
        Some(file) => Some(StackFrame::new(file, second.parse().ok()?)),
        // file:line
        None => Some(StackFrame::new(second, first.parse().ok()?)),
    }
}
