//! Character-by-character text reveal.

/// Reveals a text one character at a time.
///
/// Iterating yields the growing prefix; the last item is the full text.
#[derive(Debug, Clone)]
pub struct Typewriter {
    chars: Vec<char>,
    revealed: usize,
}

impl Typewriter {
    /// Start revealing `text` from empty.
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            revealed: 0,
        }
    }

    /// Text revealed so far.
    pub fn revealed(&self) -> String {
        self.chars[..self.revealed].iter().collect()
    }

    /// Whether every character has been revealed.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.revealed >= self.chars.len()
    }
}

impl Iterator for Typewriter {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.is_finished() {
            return None;
        }
        self.revealed += 1;
        Some(self.revealed())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.chars.len() - self.revealed;
        (remaining, Some(remaining))
    }
}
