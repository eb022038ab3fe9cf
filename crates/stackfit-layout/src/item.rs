//! The button item model.

use std::fmt;

use stackfit_core::{EdgeInsets, Size};

use crate::text::TextMeasure;

/// Minimum recommended touch target length.
pub const DEFAULT_MIN_TOUCH_LENGTH: f64 = 44.0;

/// One button in a stack: an optional icon and an optional text, with
/// padding around the combined content.
///
/// A missing icon or text measures as zero size.
pub struct ButtonItem {
    /// Intrinsic icon size. Icons never wrap or shrink.
    pub icon: Option<Size>,
    /// The item's text.
    pub title: Option<Box<dyn TextMeasure>>,
    /// Padding around the combined icon and text.
    pub content_padding: EdgeInsets,
    /// The resolved item size is never smaller than this in either dimension.
    pub min_touch_length: f64,
}

impl Default for ButtonItem {
    fn default() -> Self {
        Self {
            icon: None,
            title: None,
            content_padding: EdgeInsets::ZERO,
            min_touch_length: DEFAULT_MIN_TOUCH_LENGTH,
        }
    }
}

impl fmt::Debug for ButtonItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ButtonItem")
            .field("icon", &self.icon)
            .field("title", &self.title.as_ref().map(|t| t.measure(None)))
            .field("content_padding", &self.content_padding)
            .field("min_touch_length", &self.min_touch_length)
            .finish()
    }
}

impl ButtonItem {
    /// Create an item with neither icon nor text.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the intrinsic icon size.
    pub fn with_icon(mut self, size: Size) -> Self {
        self.icon = Some(size);
        self
    }

    /// Set the text.
    pub fn with_title(mut self, title: impl TextMeasure + 'static) -> Self {
        self.title = Some(Box::new(title));
        self
    }

    /// Set the content padding.
    pub fn with_padding(mut self, padding: EdgeInsets) -> Self {
        self.content_padding = padding;
        self
    }

    /// Set the minimum touch target length.
    pub fn with_min_touch_length(mut self, length: f64) -> Self {
        self.min_touch_length = length;
        self
    }
}
