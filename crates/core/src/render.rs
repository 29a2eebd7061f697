use std::time::Duration;

/// Glyph appended after the last line while a reveal is in progress.
pub const CURSOR_GLYPH: char = '|';
/// How long the cursor stays lit, then dark.
pub const CURSOR_BLINK: Duration = Duration::from_millis(500);

/// Whether the pulsing cursor is lit `elapsed` after the reveal started.
pub fn cursor_lit(elapsed: Duration) -> bool {
    (elapsed.as_millis() / CURSOR_BLINK.as_millis()) % 2 == 0
}

/// Split text into display lines on `\n`. A trailing newline yields a
/// trailing empty line, so joining with `\n` gives the input back.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// Display-ready form of a (possibly partial) summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedText {
    pub lines: Vec<String>,
    pub cursor: bool,
}

impl RenderedText {
    pub fn new(text: &str, cursor: bool) -> Self {
        let lines = if text.is_empty() {
            Vec::new()
        } else {
            split_lines(text).into_iter().map(str::to_owned).collect()
        };
        Self { lines, cursor }
    }

    /// Lines rejoined with `\n`, without the cursor.
    pub fn joined(&self) -> String {
        self.lines.join("\n")
    }

    /// Each line followed by a line break, then the cursor glyph if shown.
    pub fn to_plain(&self) -> String {
        let mut output = String::new();
        for line in &self.lines {
            output.push_str(line);
            output.push('\n');
        }
        if self.cursor {
            output.push(CURSOR_GLYPH);
        }
        output
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && !self.cursor
    }
}
