// WHY: window resolution works on raw bytes rather than pre-split lines so a
// single scan bounded by the line budget suffices, without allocating a line index

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Newline byte that delimits lines during scanning. UTF-8 continuation bytes
/// never equal `0x0A`, so byte-wise comparison is safe on multi-byte text.
const NL: u8 = b'\n';

/// A resolved excerpt of a source buffer.
///
/// `start` and `end` are absolute byte offsets into the buffer the excerpt was
/// taken from; both are inclusive on the scanned path. `text` is an owned copy
/// of the spanned substring, so the result stays valid after the source buffer
/// changes or is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

impl Window {
    /// Length in bytes of the extracted text.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Configuration for multi-line window resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Number of newlines to include above and below the line containing the
    /// cursor. Negative values are clamped to 0 (just the current line).
    pub line_budget: isize,
    /// Buffers shorter than this many bytes are returned whole without
    /// scanning. Values below 1 are clamped to 1, which disables the fast
    /// path for everything but an empty buffer.
    pub threshold: isize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            line_budget: 30,  // 30 above + 30 below + the cursor line itself
            threshold: 300,
        }
    }
}

/// Resolve the multi-line window around `pos` in `text`.
///
/// Scans outward from `pos` for newline characters, collecting
/// `config.line_budget` lines on each side of the line containing the cursor.
/// Buffer start and end act as implicit line boundaries, so windows near
/// either edge come back truncated rather than padded. A `pos` landing
/// exactly on a line-terminating newline resolves to the line that newline
/// ends, not the line after it.
///
/// Fails only when `pos` is past the end of the buffer; a degenerate
/// `line_budget` or `threshold` is normalized instead of rejected.
///
/// Offset conventions: the scanned path reports `end` as the inclusive byte
/// offset of the last included character. The fast path (buffer shorter than
/// `config.threshold`) reports `end == text.len()`, one past it, as does a
/// scan anchored at `pos == text.len()` on a buffer without a trailing
/// newline. Callers tracking offsets must account for both conventions.
pub fn resolve_window(text: &str, pos: usize, config: WindowConfig) -> Result<Window> {
    if pos > text.len() {
        bail!(
            "requested window position outside valid text range (pos={} len={})",
            pos,
            text.len()
        );
    }

    let bytes = text.as_bytes();
    let mut pos = pos;

    // A position on a newline belongs to the line that newline terminates.
    // Applied once: consecutive newlines mean the cursor sits on an empty line.
    if pos > 0 && bytes.get(pos) == Some(&NL) {
        pos -= 1;
    }

    let threshold = config.threshold.max(1) as usize;
    let line_budget = config.line_budget.max(0) as usize;

    if text.len() < threshold || text.is_empty() {
        debug!("window below threshold, returning whole buffer of {} bytes", text.len());
        return Ok(Window {
            start: 0,
            end: text.len(),
            text: text.to_string(),
        });
    }

    // Budget is line_budget + 1 per side: the extra newline is the one
    // terminating the cursor's own line, so a budget of 0 still finds it.
    let mut start = pos;
    let mut off_left = line_budget + 1;
    let mut at_front = false;
    loop {
        if off_left == 0 {
            break;
        }
        if start == 0 {
            at_front = true;
            break;
        }
        start -= 1;
        if bytes[start] == NL {
            off_left -= 1;
        }
    }
    // Step past the newline the left scan stopped on, or to the buffer front.
    let start = if at_front { 0 } else { start + 1 };

    let last = text.len() - 1;
    let mut end = pos;
    let mut off_right = line_budget + 1;
    while off_right > 0 && end < last {
        end += 1;
        if bytes[end] == NL {
            off_right -= 1;
        }
    }

    // end == text.len() only when pos == text.len(); min() keeps the slice valid.
    let end_excl = (end + 1).min(text.len());
    debug!("window scan complete: pos={} start={} end={}", pos, start, end);

    Ok(Window {
        start,
        end,
        text: text[start..end_excl].to_string(),
    })
}

/// Resolve the single line containing `pos`.
///
/// Specialization of [`resolve_window`] with a zero line budget and the fast
/// path disabled, so the result is exactly the cursor's line: its content plus
/// the terminating newline when one exists in the buffer.
pub fn resolve_line(text: &str, pos: usize) -> Result<Window> {
    resolve_window(
        text,
        pos,
        WindowConfig {
            line_budget: 0,
            threshold: 0,
        },
    )
}
