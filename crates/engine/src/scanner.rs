// crates/engine/src/scanner.rs
//! Two-phase line scan: find the marker, then the first declaration after it.
//!
//! Lines are byte slices that keep their own terminator, so anything the scan
//! does not replace is written back exactly as it was read.

use log::debug;

use crate::record::Timestamp;

const LF: &[u8] = b"\n";
const CRLF: &[u8] = b"\r\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    SeekingMarker,
    SeekingDeclaration,
}

/// Where the declaration sits and what it will be replaced with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    /// 0-based index into the split lines.
    pub index: usize,
    pub previous: Vec<u8>,
    pub replacement: Vec<u8>,
}

impl Edit {
    /// 1-based line number, as an editor would show it.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        self.index + 1
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    Found(Edit),
    MarkerNotFound,
    DeclarationNotFound,
}

#[derive(Debug, Clone, Copy)]
pub struct Scanner<'a> {
    marker: &'a str,
    declaration: &'a str,
}

impl<'a> Scanner<'a> {
    #[must_use]
    pub const fn new(marker: &'a str, declaration: &'a str) -> Self {
        Self {
            marker,
            declaration,
        }
    }

    /// Locate the declaration to replace and build its new content.
    #[must_use]
    pub fn scan(&self, lines: &[&[u8]], timestamp: &Timestamp) -> ScanOutcome {
        let marker = self.marker.as_bytes();
        let declaration = self.declaration.as_bytes();
        let mut state = ScanState::SeekingMarker;

        for (index, line) in lines.iter().enumerate() {
            let trimmed = trim_line(line);
            match state {
                ScanState::SeekingMarker => {
                    if trimmed == marker {
                        debug!("marker found on line {}", index + 1);
                        state = ScanState::SeekingDeclaration;
                    }
                }
                ScanState::SeekingDeclaration => {
                    if trimmed.starts_with(declaration) {
                        debug!("declaration found on line {}", index + 1);
                        let terminator = match terminator(line) {
                            b"" => dominant_terminator(lines),
                            own => own,
                        };
                        return ScanOutcome::Found(Edit {
                            index,
                            previous: line.to_vec(),
                            replacement: self.replacement(timestamp, terminator),
                        });
                    }
                }
            }
        }

        match state {
            ScanState::SeekingMarker => ScanOutcome::MarkerNotFound,
            ScanState::SeekingDeclaration => ScanOutcome::DeclarationNotFound,
        }
    }

    fn replacement(&self, timestamp: &Timestamp, terminator: &[u8]) -> Vec<u8> {
        let mut line = format!("{} = \"{timestamp}\";", self.declaration).into_bytes();
        line.extend_from_slice(terminator);
        line
    }
}

/// Split into lines, each keeping its trailing `\n` (the last may have none).
#[must_use]
pub fn split_lines(content: &[u8]) -> Vec<&[u8]> {
    content.split_inclusive(|&b| b == b'\n').collect()
}

/// Reassemble `lines` with `edit` applied.
#[must_use]
pub fn apply(lines: &[&[u8]], edit: &Edit) -> Vec<u8> {
    let capacity = lines.iter().map(|l| l.len()).sum::<usize>() + edit.replacement.len();
    let mut out = Vec::with_capacity(capacity);
    for (index, line) in lines.iter().enumerate() {
        if index == edit.index {
            out.extend_from_slice(&edit.replacement);
        } else {
            out.extend_from_slice(line);
        }
    }
    out
}

/// Strip leading and trailing ASCII whitespace, counting vertical tab and the
/// `\x1c`..`\x1f` separators as whitespace too.
#[must_use]
pub fn trim_line(line: &[u8]) -> &[u8] {
    let is_space = |b: &u8| b.is_ascii_whitespace() || matches!(*b, 0x0b | 0x1c..=0x1f);
    let start = line.iter().position(|b| !is_space(b)).unwrap_or(line.len());
    let end = line.iter().rposition(|b| !is_space(b)).map_or(start, |i| i + 1);
    &line[start..end]
}

fn terminator(line: &[u8]) -> &'static [u8] {
    if line.ends_with(CRLF) {
        CRLF
    } else if line.ends_with(LF) {
        LF
    } else {
        b""
    }
}

/// `\r\n` when CRLF lines outnumber bare LF lines, else `\n`.
fn dominant_terminator(lines: &[&[u8]]) -> &'static [u8] {
    let (crlf, lf) = lines.iter().fold((0usize, 0usize), |(crlf, lf), line| {
        match terminator(line) {
            CRLF => (crlf + 1, lf),
            LF => (crlf, lf + 1),
            _ => (crlf, lf),
        }
    });
    debug!("line terminators: {crlf} CRLF, {lf} LF");
    if crlf > lf { CRLF } else { LF }
}
