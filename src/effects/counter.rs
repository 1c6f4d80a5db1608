//! Count-up animation for statistic lines such as `250+`, `$15M` or `98%`.

/// Substrings that mark a terminal line as an animated statistic.
pub const STAT_MARKERS: [&str; 4] = ["250", "98", "15", "50"];

/// Decoration applied to intermediate values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatFormat {
    /// `N+`
    Plus,
    /// `$NM`
    Millions,
    /// `N%`
    Percent,
}

impl StatFormat {
    fn detect(text: &str) -> Option<Self> {
        if text.contains('+') {
            Some(StatFormat::Plus)
        } else if text.contains('$') {
            Some(StatFormat::Millions)
        } else if text.contains('%') {
            Some(StatFormat::Percent)
        } else {
            None
        }
    }

    /// Render an intermediate value.
    pub fn format(&self, value: u64) -> String {
        match self {
            StatFormat::Plus => format!("{}+", value),
            StatFormat::Millions => format!("${}M", value),
            StatFormat::Percent => format!("{}%", value),
        }
    }
}

/// Steps a statistic from zero up to its displayed value.
///
/// Each step yields the text to show; the last step restores the original
/// text exactly.
#[derive(Debug, Clone)]
pub struct CountUp {
    original: String,
    target: f64,
    format: StatFormat,
    steps: u32,
    step: u32,
}

impl CountUp {
    /// Whether a line should be animated at all.
    pub fn is_stat_line(text: &str) -> bool {
        STAT_MARKERS.iter().any(|marker| text.contains(marker))
    }

    /// Parse a statistic. Returns `None` for texts without a number or a
    /// recognized decoration.
    pub fn parse(text: &str, steps: u32) -> Option<Self> {
        let format = StatFormat::detect(text)?;
        let target = leading_number(text)?;
        Some(Self {
            original: text.to_string(),
            target,
            format,
            steps: steps.max(1),
            step: 0,
        })
    }

    /// Final value being counted to.
    #[inline]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Decoration in use.
    #[inline]
    pub fn format(&self) -> StatFormat {
        self.format
    }

    /// Whether the final text has been produced.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.step >= self.steps
    }
}

impl Iterator for CountUp {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.is_finished() {
            return None;
        }
        self.step += 1;
        if self.is_finished() {
            return Some(self.original.clone());
        }
        let current = self.target * self.step as f64 / self.steps as f64;
        Some(self.format.format(current.floor() as u64))
    }
}

/// First run of digits (with an optional decimal point) in `text`.
fn leading_number(text: &str) -> Option<f64> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let rest = &text[start..];
    let end = rest
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(rest.len());
    rest[..end]
        .trim_end_matches('.')
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}
