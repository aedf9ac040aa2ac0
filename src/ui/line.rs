//! Toned text lines
//!
//! A [`Line`] is what every HUD label holds: a sequence of [`Span`]s, each
//! with its own [`Tone`]. Lines may contain `'\n'` when word-wrapped.

use super::theme::Tone;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    spans: Vec<Span>,
}

impl Line {
    pub fn new() -> Self {
        Line { spans: Vec::new() }
    }

    /// A single-span line
    pub fn toned(text: impl Into<String>, tone: Tone) -> Self {
        Line::new().push(text, tone)
    }

    /// Appends a span, skipping empty text
    pub fn push(mut self, text: impl Into<String>, tone: Tone) -> Self {
        let text = text.into();
        if !text.is_empty() {
            self.spans.push(Span { text, tone });
        }
        self
    }

    pub fn append(mut self, other: Line) -> Self {
        self.spans.extend(other.spans);
        self
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Text with tones stripped
    pub fn plain(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }

    /// Tone of the first span containing `needle`
    pub fn tone_of(&self, needle: &str) -> Option<Tone> {
        self.spans
            .iter()
            .find(|span| span.text.contains(needle))
            .map(|span| span.tone)
    }
}

impl From<&str> for Line {
    fn from(text: &str) -> Self {
        Line::toned(text, Tone::Normal)
    }
}

impl From<String> for Line {
    fn from(text: String) -> Self {
        Line::toned(text, Tone::Normal)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for span in &self.spans {
            f.write_str(&span.text)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_joins_spans() {
        let line = Line::toned("HP ", Tone::Muted).push("19", Tone::Normal);
        assert_eq!(line.plain(), "HP 19");
        assert_eq!(line.to_string(), "HP 19");
        assert_eq!(line.tone_of("19"), Some(Tone::Normal));
        assert_eq!(line.tone_of("HP"), Some(Tone::Muted));
    }

    #[test]
    fn test_empty_spans_are_dropped() {
        let line = Line::new().push("", Tone::Warning);
        assert!(line.is_empty());
    }
}
