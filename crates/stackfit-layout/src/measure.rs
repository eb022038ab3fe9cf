//! Single-item measurement.
//!
//! Computes the content and button sizes of one item for icon-beside-text
//! and icon-above-text arrangements. Knows nothing about sibling items.

use stackfit_core::{Axis, Size};

use crate::item::ButtonItem;

/// Sizes of an item's icon, text and their combination (the content).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InternalSizes {
    /// Bounding size of icon and text together, excluding padding
    pub content: Size,
    pub icon: Size,
    pub title: Size,
}

/// How a single item fits into an available width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fit {
    /// Icon beside text fits on one line.
    Horizontal,
    /// Icon above text fits without wrapping the text.
    VerticalUnwrapped,
    /// Icon above text, with the text wrapped to the width.
    VerticalWrapped,
}

impl Fit {
    /// Inner stacking axis for this fit.
    pub fn axis(self) -> Axis {
        match self {
            Fit::Horizontal => Axis::Horizontal,
            Fit::VerticalUnwrapped | Fit::VerticalWrapped => Axis::Vertical,
        }
    }

    pub fn requires_wrapping(self) -> bool {
        self == Fit::VerticalWrapped
    }
}

/// Classification of one item at one available width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutInfo {
    pub fit: Fit,
    /// Padded size, floored at the touch target
    pub button_size: Size,
    /// The sizes actually used to reach `button_size`
    pub sizes: InternalSizes,
}

impl ButtonItem {
    /// Half the gap between icon and text, applied on each side of their
    /// boundary. Derived from the text's font size.
    pub fn half_spacing(&self) -> f64 {
        self.title
            .as_ref()
            .map(|title| (0.3 * title.font_size()).round())
            .unwrap_or(0.0)
    }

    /// Width left for content once horizontal padding is removed.
    pub fn available_content_width(&self, available_width: f64) -> f64 {
        available_width - self.content_padding.horizontal()
    }

    fn icon_size(&self) -> Size {
        self.icon.unwrap_or(Size::ZERO)
    }

    fn title_size(&self, max_width: Option<f64>) -> Size {
        self.title
            .as_ref()
            .map(|title| {
                let metrics = title.measure(max_width);
                Size::new(metrics.width, metrics.height)
            })
            .unwrap_or(Size::ZERO)
    }

    /// Sizes with the text to the right of the icon. The text is never
    /// wrapped.
    pub fn horizontal_content(&self) -> InternalSizes {
        let icon = self.icon_size();
        let title = self.title_size(None);
        InternalSizes {
            content: Size::new(
                icon.width + 2.0 * self.half_spacing() + title.width,
                icon.height.max(title.height),
            ),
            icon,
            title,
        }
    }

    /// Sizes with the icon above the text. With an available width the text
    /// wraps to whatever is left after padding; `None` leaves it unbounded.
    pub fn vertical_content(&self, available_width: Option<f64>) -> InternalSizes {
        let max_title_width = available_width.map(|width| self.available_content_width(width));
        self.vertical_content_from(self.icon_size(), self.title_size(max_title_width))
    }

    fn vertical_content_from(&self, icon: Size, title: Size) -> InternalSizes {
        InternalSizes {
            content: Size::new(
                icon.width.max(title.width),
                icon.height + 2.0 * self.half_spacing() + title.height,
            ),
            icon,
            title,
        }
    }

    /// The minimum item size for a content size: content plus padding,
    /// floored at the touch target in each dimension.
    pub fn button_size(&self, content: Size) -> Size {
        let padding = self.content_padding;
        Size::new(
            (content.width + padding.horizontal()).max(self.min_touch_length),
            (content.height + padding.vertical()).max(self.min_touch_length),
        )
    }

    /// Padded size for icon above text at the given width.
    pub fn vertical_button_size(&self, available_width: Option<f64>) -> Size {
        self.button_size(self.vertical_content(available_width).content)
    }

    /// Classify how this item fits into `available_width`.
    ///
    /// The wrapped measurement only runs when neither unwrapped arrangement
    /// fits.
    pub fn layout_info(&self, available_width: f64) -> LayoutInfo {
        let horizontal = self.horizontal_content();
        let available_content_width = self.available_content_width(available_width);

        let (fit, sizes) = if horizontal.content.width <= available_content_width {
            (Fit::Horizontal, horizontal)
        } else {
            // Same measurements as vertical_content(None), without re-measuring.
            let unwrapped = self.vertical_content_from(horizontal.icon, horizontal.title);
            if unwrapped.content.width <= available_content_width {
                (Fit::VerticalUnwrapped, unwrapped)
            } else {
                (Fit::VerticalWrapped, self.vertical_content(Some(available_width)))
            }
        };

        LayoutInfo {
            fit,
            button_size: self.button_size(sizes.content),
            sizes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::FixedText;
    use stackfit_core::EdgeInsets;

    fn short_item() -> ButtonItem {
        ButtonItem::new()
            .with_icon(Size::splat(20.0))
            .with_title(FixedText::new(40.0, 20.0))
            .with_padding(EdgeInsets::uniform(5.0))
    }

    #[test]
    fn test_half_spacing_from_font_size() {
        assert!((short_item().half_spacing() - 2.0).abs() < 0.001);
        let label = ButtonItem::new().with_title(FixedText::new(10.0, 10.0).with_font_size(17.0));
        // round(5.1)
        assert!((label.half_spacing() - 5.0).abs() < 0.001);
        assert!(ButtonItem::new().half_spacing().abs() < 0.001);
    }

    #[test]
    fn test_horizontal_content() {
        let sizes = short_item().horizontal_content();
        // 20 + 2 * 2 + 40
        assert!((sizes.content.width - 64.0).abs() < 0.001);
        assert!((sizes.content.height - 20.0).abs() < 0.001);
    }

    #[test]
    fn test_vertical_content_unbounded() {
        let sizes = short_item().vertical_content(None);
        assert!((sizes.content.width - 40.0).abs() < 0.001);
        // 20 + 4 + 20
        assert!((sizes.content.height - 44.0).abs() < 0.001);
    }

    #[test]
    fn test_vertical_content_wraps_to_padded_width() {
        // 30 wide leaves 20 for the text, which wraps onto two lines
        let sizes = short_item().vertical_content(Some(30.0));
        assert!((sizes.title.width - 20.0).abs() < 0.001);
        assert!((sizes.title.height - 40.0).abs() < 0.001);
        assert!((sizes.content.height - 64.0).abs() < 0.001);
    }

    #[test]
    fn test_button_size_touch_floor() {
        let item = short_item();
        let size = item.button_size(item.horizontal_content().content);
        // 64 + 10, but 20 + 10 is floored to 44
        assert!((size.width - 74.0).abs() < 0.001);
        assert!((size.height - 44.0).abs() < 0.001);

        let empty = ButtonItem::new();
        assert_eq!(empty.button_size(Size::ZERO), Size::splat(44.0));
    }

    #[test]
    fn test_layout_info_tiers() {
        let item = short_item();

        let wide = item.layout_info(100.0);
        assert_eq!(wide.fit, Fit::Horizontal);
        assert!((wide.button_size.width - 74.0).abs() < 0.001);

        let medium = item.layout_info(60.0);
        assert_eq!(medium.fit, Fit::VerticalUnwrapped);
        assert!((medium.button_size.width - 50.0).abs() < 0.001);
        assert!((medium.button_size.height - 54.0).abs() < 0.001);

        let narrow = item.layout_info(30.0);
        assert_eq!(narrow.fit, Fit::VerticalWrapped);
        assert!(narrow.fit.requires_wrapping());
        assert!((narrow.sizes.title.height - 40.0).abs() < 0.001);
    }

    #[test]
    fn test_wide_icon_forces_wrapping_tier() {
        let item = ButtonItem::new()
            .with_icon(Size::new(80.0, 20.0))
            .with_title(FixedText::new(30.0, 20.0));
        // Text alone fits in 60 but the icon does not
        assert_eq!(item.layout_info(60.0).fit, Fit::VerticalWrapped);
    }
}
