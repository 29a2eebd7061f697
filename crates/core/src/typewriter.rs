//! Character-by-character reveal of a finished summary.
//!
//! The typewriter only owns state; something else has to call [`Typewriter::tick`]
//! on a timer (see [`crate::reveal::animate`] or the desktop subscription).

use crate::render::RenderedText;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    Reset,
    Revealing,
    Complete,
}

#[derive(Debug, Clone, Default)]
pub struct Typewriter {
    source: String,
    /// Byte offset of the revealed prefix, always on a char boundary.
    revealed_bytes: usize,
    revealed_chars: usize,
    generation: u64,
}

impl Typewriter {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            source: text.into(),
            ..Self::default()
        }
    }

    pub fn revealed(&self) -> &str {
        &self.source[..self.revealed_bytes]
    }

    /// Number of chars revealed so far.
    pub fn revealed_len(&self) -> usize {
        self.revealed_chars
    }

    /// Bumped on every reset; ticks carrying an older value are stale.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn phase(&self) -> RevealPhase {
        if self.revealed_bytes == self.source.len() {
            RevealPhase::Complete
        } else if self.revealed_bytes == 0 {
            RevealPhase::Reset
        } else {
            RevealPhase::Revealing
        }
    }

    pub fn is_complete(&self) -> bool {
        self.phase() == RevealPhase::Complete
    }

    /// Replace the source text. An identical text leaves the reveal alone;
    /// anything else starts over from an empty prefix.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text == self.source {
            return;
        }
        self.source = text;
        self.restart();
    }

    pub fn restart(&mut self) {
        self.revealed_bytes = 0;
        self.revealed_chars = 0;
        self.generation += 1;
    }

    /// Reveal the next char. Returns false once there is nothing left.
    pub fn tick(&mut self) -> bool {
        let Some(next) = self.source[self.revealed_bytes..].chars().next() else {
            return false;
        };
        self.revealed_bytes += next.len_utf8();
        self.revealed_chars += 1;
        true
    }

    /// Tick only if `generation` still names the current sequence.
    pub fn tick_for(&mut self, generation: u64) -> bool {
        generation == self.generation && self.tick()
    }

    /// Jump straight to the full text.
    pub fn finish(&mut self) {
        self.revealed_chars += self.source[self.revealed_bytes..].chars().count();
        self.revealed_bytes = self.source.len();
    }

    pub fn render(&self) -> RenderedText {
        match self.phase() {
            RevealPhase::Complete => RenderedText::new(&self.source, false),
            RevealPhase::Reset | RevealPhase::Revealing => {
                RenderedText::new(self.revealed(), true)
            }
        }
    }
}
