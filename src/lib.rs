//! Cursor-anchored text window extraction for editors and rendering tools.
//!
//! Given a text buffer and an absolute byte position, this crate answers three
//! related queries:
//!
//! - [`resolve_window`] — a bounded multi-line neighborhood around the position,
//! - [`resolve_line`] — the single line containing the position,
//! - [`resolve_word`] — the whitespace-delimited word containing the position.
//!
//! All three return the same [`Window`] shape: inclusive start/end byte offsets
//! into the source buffer plus an owned copy of the spanned text. The source
//! buffer is never mutated and no I/O is performed; the caller supplies the
//! buffer and consumes the result.

pub mod window;
pub mod word;

// Re-export main types for convenient access
pub use window::{resolve_line, resolve_window, Window, WindowConfig};
pub use word::resolve_word;
