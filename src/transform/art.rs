//! ASCII-art rendering via the figlet collaborator

use figlet_rs::FIGfont;

use crate::utils::{AppResult, TransformError};

/// Render the text as multi-line ASCII art using the standard FIGfont.
pub fn ascii_art(text: &str) -> AppResult<String> {
    if text.is_empty() {
        return Ok(String::new());
    }
    let font = FIGfont::standard().map_err(TransformError::Render)?;
    let figure = font.convert(text).ok_or_else(|| {
        TransformError::Render(format!("no ASCII art produced for '{}'", text))
    })?;
    Ok(figure.to_string())
}

/// Render ASCII art framed by a box border.
///
/// The embedded FIGfont ships only the standard face, so the heavier
/// "block" variant is expressed as a frame around the standard render.
pub fn bordered_art(text: &str) -> AppResult<String> {
    let art = ascii_art(text)?;
    let lines: Vec<&str> = art.lines().collect();
    let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);

    let mut out = String::new();
    out.push_str(&format!("+{}+\n", "-".repeat(width + 2)));
    for line in &lines {
        out.push_str(&format!("| {:<width$} |\n", line, width = width));
    }
    out.push_str(&format!("+{}+", "-".repeat(width + 2)));
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_art_is_multiline() {
        let art = ascii_art("Hi").unwrap();
        assert!(art.lines().count() > 1);
    }

    #[test]
    fn test_bordered_art_frames_every_line() {
        let framed = bordered_art("Hi").unwrap();
        let lines: Vec<&str> = framed.lines().collect();
        assert!(lines.first().unwrap().starts_with("+-"));
        assert!(lines.last().unwrap().ends_with("-+"));
        for line in &lines[1..lines.len() - 1] {
            assert!(line.starts_with("| ") && line.ends_with(" |"));
        }
        // all lines are the same width
        let widths: Vec<usize> = lines.iter().map(|l| l.chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }
}
