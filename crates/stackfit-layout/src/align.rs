//! Icon and text offsets inside an item, with cross-item alignment.

use stackfit_core::{Axis, EdgeInsets, IconTextInsets, LayoutDirection};

use crate::measure::InternalSizes;

/// The largest icon and text extents along the inner axis across a group of
/// sibling items. Each item's icon and text are shifted by half the
/// difference to its own extents so they line up across the group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlignmentTargets {
    pub icon: f64,
    pub title: f64,
}

impl AlignmentTargets {
    /// Largest icon and text extents along `axis`.
    pub fn largest<'a>(axis: Axis, sizes: impl IntoIterator<Item = &'a InternalSizes>) -> Self {
        sizes.into_iter().fold(
            AlignmentTargets { icon: 0.0, title: 0.0 },
            |acc, s| AlignmentTargets {
                icon: acc.icon.max(s.icon.along(axis)),
                title: acc.title.max(s.title.along(axis)),
            },
        )
    }
}

/// Insets for an item's icon and text relative to where they would sit if
/// the combined content were centered with no gap between them.
///
/// `half_spacing` opens the gap between icon and text. Leading and trailing
/// are resolved to left and right for `direction`.
pub fn icon_text_insets(
    inner: Axis,
    sizes: &InternalSizes,
    half_spacing: f64,
    targets: Option<AlignmentTargets>,
    direction: LayoutDirection,
) -> IconTextInsets {
    let icon = sizes.icon;
    let title = sizes.title;

    let (extra_icon, extra_title) = match targets {
        Some(targets) => {
            let icon_len = icon.along(inner);
            let title_len = title.along(inner);
            (
                0.5 * (targets.title - title_len),
                0.5 * (targets.title - title_len - targets.icon + icon_len),
            )
        }
        None => (0.0, 0.0),
    };

    match inner {
        Axis::Horizontal => IconTextInsets {
            icon: EdgeInsets::directional(
                0.0,
                -extra_icon,
                0.0,
                half_spacing + extra_icon,
                direction,
            ),
            text: EdgeInsets::directional(
                0.0,
                half_spacing - extra_title,
                0.0,
                extra_title,
                direction,
            ),
        },
        Axis::Vertical => IconTextInsets {
            icon: EdgeInsets::directional(
                -extra_icon,
                0.0,
                title.height + half_spacing + extra_icon,
                -title.width,
                direction,
            ),
            text: EdgeInsets::directional(
                icon.height + half_spacing - extra_title,
                -icon.width,
                extra_title,
                0.0,
                direction,
            ),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stackfit_core::Size;

    const LTR: LayoutDirection = LayoutDirection::LeftToRight;

    fn sizes(icon: Size, title: Size) -> InternalSizes {
        InternalSizes {
            content: Size::ZERO,
            icon,
            title,
        }
    }

    #[test]
    fn test_horizontal_without_targets() {
        let s = sizes(Size::splat(20.0), Size::new(40.0, 20.0));
        let insets = icon_text_insets(Axis::Horizontal, &s, 2.0, None, LTR);

        assert_eq!(insets.icon, EdgeInsets::new(0.0, 0.0, 0.0, 2.0));
        assert_eq!(insets.text, EdgeInsets::new(0.0, 2.0, 0.0, 0.0));
    }

    #[test]
    fn test_horizontal_mirrors_for_rtl() {
        let s = sizes(Size::splat(20.0), Size::new(40.0, 20.0));
        let rtl = LayoutDirection::RightToLeft;
        let insets = icon_text_insets(Axis::Horizontal, &s, 2.0, None, rtl);

        assert_eq!(insets.icon, EdgeInsets::new(0.0, 2.0, 0.0, 0.0));
        assert_eq!(insets.text, EdgeInsets::new(0.0, 0.0, 0.0, 2.0));
    }

    #[test]
    fn test_vertical_without_targets() {
        let s = sizes(Size::new(20.0, 24.0), Size::new(40.0, 18.0));
        let insets = icon_text_insets(Axis::Vertical, &s, 3.0, None, LTR);

        assert_eq!(insets.icon, EdgeInsets::new(0.0, 0.0, 21.0, -40.0));
        assert_eq!(insets.text, EdgeInsets::new(27.0, -20.0, 0.0, 0.0));
    }

    #[test]
    fn test_targets_shift_shorter_title() {
        let short = sizes(Size::splat(20.0), Size::new(30.0, 20.0));
        let long = sizes(Size::splat(20.0), Size::new(50.0, 20.0));
        let targets = AlignmentTargets::largest(Axis::Horizontal, [&short, &long]);
        assert!((targets.icon - 20.0).abs() < 0.001);
        assert!((targets.title - 50.0).abs() < 0.001);

        let insets = icon_text_insets(Axis::Horizontal, &short, 2.0, Some(targets), LTR);
        // Half of the 20 unit title difference moves both icon and text
        assert!((insets.icon.left + 10.0).abs() < 0.001);
        assert!((insets.icon.right - 12.0).abs() < 0.001);
        assert!((insets.text.left + 8.0).abs() < 0.001);
        assert!((insets.text.right - 10.0).abs() < 0.001);

        let widest = icon_text_insets(Axis::Horizontal, &long, 2.0, Some(targets), LTR);
        assert_eq!(widest, icon_text_insets(Axis::Horizontal, &long, 2.0, None, LTR));
    }

    #[test]
    fn test_targets_shift_text_below_shorter_icon() {
        let short = sizes(Size::new(20.0, 20.0), Size::new(40.0, 20.0));
        let tall = sizes(Size::new(20.0, 30.0), Size::new(40.0, 20.0));
        let targets = AlignmentTargets::largest(Axis::Vertical, [&short, &tall]);
        assert!((targets.icon - 30.0).abs() < 0.001);
        assert!((targets.title - 20.0).abs() < 0.001);

        // Half of the 10 unit icon difference moves the text down
        let insets = icon_text_insets(Axis::Vertical, &short, 2.0, Some(targets), LTR);
        assert_eq!(insets.text, EdgeInsets::new(27.0, -20.0, -5.0, 0.0));
        assert_eq!(insets.icon, EdgeInsets::new(0.0, 0.0, 22.0, -40.0));

        let tallest = icon_text_insets(Axis::Vertical, &tall, 2.0, Some(targets), LTR);
        assert_eq!(tallest, icon_text_insets(Axis::Vertical, &tall, 2.0, None, LTR));
    }
}
