use tracing::debug;

use crate::window::Window;

/// Resolve the word containing `pos` in `text`.
///
/// A word is the maximal contiguous run of non-whitespace characters around
/// the position; whitespace is anything [`char::is_whitespace`] accepts, so
/// punctuation-only runs count as words. Unlike [`resolve_window`], this
/// never fails: word lookups get probed at arbitrary cursor positions during
/// interactive use, so an out-of-range `pos` means "no word here" and yields
/// an empty window anchored at the nearest valid offset. A `pos` sitting on
/// whitespace likewise yields an empty window anchored at `pos` itself.
///
/// [`resolve_window`]: crate::window::resolve_window
pub fn resolve_word(text: &str, pos: usize) -> Window {
    if text.is_empty() {
        return empty_at(0);
    }
    if pos >= text.len() {
        return empty_at(text.len());
    }

    // Snap to the first byte of the char containing pos, so probing any byte
    // of a multi-byte char resolves the same word.
    let mut anchor = pos;
    while !text.is_char_boundary(anchor) {
        anchor -= 1;
    }

    let ch = match text[anchor..].chars().next() {
        Some(ch) => ch,
        // Unreachable: anchor is a char boundary below text.len()
        None => return empty_at(pos),
    };
    if ch.is_whitespace() {
        return empty_at(pos);
    }

    let mut start = anchor;
    while start > 0 {
        match text[..start].chars().next_back() {
            Some(prev) if !prev.is_whitespace() => start -= prev.len_utf8(),
            _ => break,
        }
    }

    let mut end_excl = anchor + ch.len_utf8();
    while end_excl < text.len() {
        match text[end_excl..].chars().next() {
            Some(next) if !next.is_whitespace() => end_excl += next.len_utf8(),
            _ => break,
        }
    }

    debug!("word scan complete: pos={} start={} end={}", pos, start, end_excl - 1);

    Window {
        start,
        end: end_excl - 1,
        text: text[start..end_excl].to_string(),
    }
}

fn empty_at(pos: usize) -> Window {
    Window {
        start: pos,
        end: pos,
        text: String::new(),
    }
}
