//! Text measurement for item sizing.
//!
//! Items only need the bounding size of their text for a given width limit.
//! The [`TextMeasure`] trait is the seam where a host plugs in real font
//! metrics; [`Label`] is a self-contained implementation using
//! character-based estimation.

/// Text measurement configuration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextStyle {
    /// Font family
    pub font_family: String,
    /// Font size in device-independent units
    pub font_size: f64,
    /// Line height as a multiplier (e.g., 1.5 = 150%)
    pub line_height: f64,
    /// Letter spacing in device-independent units
    pub letter_spacing: f64,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_family: "sans-serif".to_string(),
            font_size: 16.0,
            line_height: 1.2,
            letter_spacing: 0.0,
        }
    }
}

/// Measured text metrics.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextMetrics {
    /// Width of the widest line
    pub width: f64,
    /// Height of all lines
    pub height: f64,
    /// Number of lines
    pub lines: u32,
    /// Whether the width limit forced the text onto more than one line
    pub wrapped: bool,
}

impl TextMetrics {
    /// Metrics for a single unwrapped line.
    pub fn single_line(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            lines: 1,
            wrapped: false,
        }
    }
}

/// Something that can report the size of its text.
///
/// Implementations must support an unlimited number of lines: when
/// `max_width` is `Some`, text wider than the limit wraps onto additional
/// lines rather than being truncated. `None` means unbounded.
pub trait TextMeasure {
    /// Measure the text, wrapping to `max_width` if given.
    fn measure(&self, max_width: Option<f64>) -> TextMetrics;

    /// Font size of the text. Drives the gap between icon and text.
    fn font_size(&self) -> f64;
}

/// A run of text with a style, measured with [`measure_text`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Label {
    pub text: String,
    pub style: TextStyle,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: TextStyle::default(),
        }
    }

    /// Set the style.
    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }
}

impl TextMeasure for Label {
    fn measure(&self, max_width: Option<f64>) -> TextMetrics {
        measure_text(&self.text, &self.style, max_width)
    }

    fn font_size(&self) -> f64 {
        self.style.font_size
    }
}

/// Text whose single-line size is known up front, e.g. measured by the host.
///
/// Under a width limit it breaks into as many lines of the original height as
/// needed to stay within the limit.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedText {
    pub width: f64,
    pub line_height: f64,
    pub font_size: f64,
}

impl FixedText {
    /// Create text of the given single-line size with a 7 unit font.
    pub fn new(width: f64, line_height: f64) -> Self {
        Self {
            width,
            line_height,
            font_size: 7.0,
        }
    }

    /// Set the font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }
}

impl TextMeasure for FixedText {
    fn measure(&self, max_width: Option<f64>) -> TextMetrics {
        match max_width {
            Some(max_w) if self.width > max_w => {
                let max_w = max_w.max(1.0);
                let lines = (self.width / max_w).ceil();
                TextMetrics {
                    width: self.width.min(max_w),
                    height: lines * self.line_height,
                    lines: lines as u32,
                    wrapped: lines > 1.0,
                }
            }
            _ => TextMetrics::single_line(self.width, self.line_height),
        }
    }

    fn font_size(&self) -> f64 {
        self.font_size
    }
}

impl TextStyle {
    /// Estimated advance of one character, about 0.55em for proportional
    /// fonts.
    pub fn char_advance(&self) -> f64 {
        self.font_size * 0.55 + self.letter_spacing
    }

    /// Height of one line of text.
    pub fn line_extent(&self) -> f64 {
        self.font_size * self.line_height
    }
}

/// Estimate the size of `text` set in `style`.
///
/// Every character, spaces included, advances by [`TextStyle::char_advance`].
/// With a positive `max_width` the text breaks at whitespace, and a word that
/// is longer than a whole line is split between characters. A line always
/// holds at least one character, so only a limit narrower than a single
/// character can be exceeded.
pub fn measure_text(text: &str, style: &TextStyle, max_width: Option<f64>) -> TextMetrics {
    if text.is_empty() {
        return TextMetrics::default();
    }

    let advance = style.char_advance();
    let line_lengths = match max_width {
        Some(max_w) if max_w > 0.0 => {
            let capacity = ((max_w / advance).floor() as usize).max(1);
            break_into_lines(text, capacity)
        }
        _ => vec![text.chars().count()],
    };

    let lines = line_lengths.len().max(1);
    let longest = line_lengths.iter().copied().max().unwrap_or(0);

    TextMetrics {
        width: longest as f64 * advance,
        height: lines as f64 * style.line_extent(),
        lines: lines as u32,
        wrapped: lines > 1,
    }
}

/// Character counts of the lines `text` occupies when no line may hold more
/// than `capacity` characters.
fn break_into_lines(text: &str, capacity: usize) -> Vec<usize> {
    let mut lines = Vec::new();
    let mut current = 0;

    for word in text.split_whitespace() {
        let mut remaining = word.chars().count();

        if current > 0 && current + 1 + remaining <= capacity {
            current += 1 + remaining;
            continue;
        }
        if current > 0 {
            lines.push(current);
        }

        // Overlong words fill whole lines first
        while remaining > capacity {
            lines.push(capacity);
            remaining -= capacity;
        }
        current = remaining;
    }

    if current > 0 {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style(font_size: f64) -> TextStyle {
        TextStyle {
            font_size,
            ..Default::default()
        }
    }

    #[test]
    fn test_measure_empty_text() {
        let metrics = measure_text("", &TextStyle::default(), None);
        assert!(metrics.width < 0.001);
        assert!(metrics.height < 0.001);
        assert!(!metrics.wrapped);
    }

    #[test]
    fn test_measure_single_line() {
        let metrics = measure_text("Hello", &style(20.0), None);
        // 5 chars * 11
        assert!((metrics.width - 55.0).abs() < 0.001);
        assert!((metrics.height - 24.0).abs() < 0.001);
        assert_eq!(metrics.lines, 1);
    }

    #[test]
    fn test_measure_wrapped_text() {
        let text = "Hello world this is a longer piece of text";
        let metrics = measure_text(text, &style(16.0), Some(100.0));
        assert!(metrics.lines > 1);
        assert!(metrics.wrapped);
        assert!(metrics.width <= 100.0);
    }

    #[test]
    fn test_wide_limit_does_not_wrap() {
        let unbounded = measure_text("Share this", &style(16.0), None);
        let bounded = measure_text("Share this", &style(16.0), Some(1000.0));
        assert!(!bounded.wrapped);
        assert!((bounded.width - unbounded.width).abs() < 0.001);
        assert!((bounded.height - unbounded.height).abs() < 0.001);
    }

    #[test]
    fn test_long_word_breaks_within_limit() {
        // 20 chars at 8.8 each, 5 per line
        let metrics = measure_text("Supercalifragilistic", &style(16.0), Some(50.0));
        assert_eq!(metrics.lines, 4);
        assert!(metrics.wrapped);
        assert!((metrics.width - 44.0).abs() < 0.001);
        assert!(metrics.width <= 50.0);
    }

    #[test]
    fn test_long_word_shares_lines_with_neighbours() {
        // 10 chars per line: "Go" | "Supercalif" | "ragilistic" | "now"
        let metrics = measure_text("Go Supercalifragilistic now", &style(16.0), Some(90.0));
        assert_eq!(metrics.lines, 4);
        assert!((metrics.width - 88.0).abs() < 0.001);
    }

    #[test]
    fn test_limit_below_one_character() {
        let metrics = measure_text("ab", &style(16.0), Some(4.0));
        assert_eq!(metrics.lines, 2);
        assert!((metrics.width - 8.8).abs() < 0.001);
    }

    #[test]
    fn test_fixed_text_wraps_into_lines() {
        let text = FixedText::new(100.0, 20.0);
        assert_eq!(text.measure(None), TextMetrics::single_line(100.0, 20.0));
        assert!(!text.measure(Some(100.0)).wrapped);

        let wrapped = text.measure(Some(30.0));
        assert_eq!(wrapped.lines, 4);
        assert!(wrapped.wrapped);
        assert!((wrapped.width - 30.0).abs() < 0.001);
        assert!((wrapped.height - 80.0).abs() < 0.001);
    }

    #[test]
    fn test_label_reports_font_size() {
        let label = Label::new("Save").with_style(style(13.0));
        assert!((label.font_size() - 13.0).abs() < 0.001);
        assert_eq!(label.measure(None), measure_text("Save", &style(13.0), None));
    }
}
