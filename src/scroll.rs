//! Per-character console scroll animation
//!
//! A presentation-only side effect, not a transform: characters are
//! written one at a time with a fixed delay between them, then a final
//! newline. The writer is a parameter so tests can capture the output
//! without sleeping through a real terminal.

use std::io::Write;
use std::time::Duration;

use crate::utils::AppResult;

/// Write `text` to `out` one character at a time, flushing after each
/// and sleeping `delay` in between. No early exit or cancellation.
pub fn scroll_to<W: Write>(out: &mut W, text: &str, delay: Duration) -> AppResult<()> {
    for c in text.chars() {
        write!(out, "{}", c)?;
        out.flush()?;
        std::thread::sleep(delay);
    }
    writeln!(out)?;
    Ok(())
}

/// Scroll `text` on standard output.
pub fn scroll(text: &str, delay: Duration) -> AppResult<()> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    scroll_to(&mut handle, text, delay)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_writes_all_chars_and_trailing_newline() {
        let mut buf = Vec::new();
        scroll_to(&mut buf, "héllo", Duration::ZERO).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "héllo\n");
    }

    #[test]
    fn test_scroll_empty_text_emits_only_newline() {
        let mut buf = Vec::new();
        scroll_to(&mut buf, "", Duration::ZERO).unwrap();
        assert_eq!(buf, b"\n");
    }
}
