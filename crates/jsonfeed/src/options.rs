// ABOUTME: Configuration for encoding feeds.
// ABOUTME: EncodeOptions selects compact or indented JSON output through a fluent API.

/// Options controlling how a feed is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EncodeOptions {
    pub pretty: bool,
}

impl EncodeOptions {
    /// Compact output, the default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Write indented, human-readable JSON.
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}
