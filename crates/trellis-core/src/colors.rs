//! ANSI color codes for dumps and traces.
//!
//! - Blue: node ids, pattern ids
//! - Green: characters and input text
//! - Dim: link arrows, counters, positions

/// ANSI palette shared by `Automaton::dump_with` and `PrintTracer`.
///
/// Standard 16-color codes only, so output reads the same on light and dark themes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colors {
    pub blue: &'static str,
    pub green: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        blue: "\x1b[34m",
        green: "\x1b[32m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        blue: "",
        green: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.blue.is_empty()
    }

    /// Wraps a node reference: `N7`.
    pub fn node(&self, id: u32) -> String {
        format!("{}N{id}{}", self.blue, self.reset)
    }

    /// Wraps a character in quotes with escapes for control characters.
    pub fn char(&self, ch: char) -> String {
        format!("{}{:?}{}", self.green, ch, self.reset)
    }
}
