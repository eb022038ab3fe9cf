//! Sizing and placement of a whole stack of items.
//!
//! Four arrangements are considered, combining outer stacking (items side by
//! side or top to bottom) with inner stacking (icon beside or above text).
//!
//! Sizing tries them from most to least compact:
//! 1. outer horizontal, inner horizontal
//! 2. outer horizontal, inner vertical (no text wrapping)
//! 3. outer vertical, inner horizontal
//! 4. outer vertical, inner vertical (text may wrap, always fits)
//!
//! Placement fills the space it is given, so it tries (3) first because it
//! looks most balanced with room to spare, then (4) if the width is too
//! small, or (2) and finally (1) if the height is too small.

use glam::DVec2;
use smallvec::SmallVec;
use stackfit_core::{
    Arrangement, Axis, Frame, IconTextInsets, LayoutDirection, LayoutError, PixelGrid, Size,
};
use tracing::{debug, trace};

use crate::align::{icon_text_insets, AlignmentTargets};
use crate::item::ButtonItem;
use crate::measure::{Fit, InternalSizes, LayoutInfo};

/// Default gap between adjacent items.
pub const DEFAULT_SPACING: f64 = 8.0;

/// Per-stack configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StackConfig {
    spacing: f64,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            spacing: DEFAULT_SPACING,
        }
    }
}

impl StackConfig {
    /// Create a configuration with the given gap between items.
    pub fn new(spacing: f64) -> Result<Self, LayoutError> {
        if !spacing.is_finite() || spacing < 0.0 {
            return Err(LayoutError::NegativeSpacing { spacing });
        }
        Ok(Self { spacing })
    }

    /// Gap between adjacent items.
    pub fn spacing(&self) -> f64 {
        self.spacing
    }
}

/// Host environment read at the start of each pass.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutEnvironment {
    pub direction: LayoutDirection,
    pub grid: PixelGrid,
}

/// Result of the sizing pass.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sizing {
    pub arrangement: Arrangement,
    pub size: Size,
}

/// Where one item goes and how its icon and text sit inside it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemPlacement {
    pub frame: Frame,
    /// How the icon and text are stacked inside the item
    pub inner: Axis,
    pub insets: IconTextInsets,
}

/// Result of the placement pass, in item order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub arrangement: Arrangement,
    pub items: SmallVec<[ItemPlacement; 4]>,
}

enum Fitting {
    Fits(Placement),
    NotEnoughWidth,
    NotEnoughHeight,
}

/// Runs the sizing and placement passes over an ordered list of items.
#[derive(Debug, Clone, Copy)]
pub struct StackArranger<'a> {
    items: &'a [ButtonItem],
    config: StackConfig,
    env: LayoutEnvironment,
}

impl<'a> StackArranger<'a> {
    pub fn new(items: &'a [ButtonItem], config: StackConfig, env: LayoutEnvironment) -> Self {
        Self { items, config, env }
    }

    fn count(&self) -> f64 {
        self.items.len() as f64
    }

    fn total_spacing(&self) -> f64 {
        self.config.spacing * (self.count() - 1.0)
    }

    fn is_last(&self, index: usize) -> bool {
        index + 1 == self.items.len()
    }

    /// Length of every item but the last when `container_length` is divided
    /// evenly, rounded down to the pixel grid.
    pub fn usual_length(&self, container_length: f64) -> f64 {
        debug_assert!(!self.items.is_empty());
        let unrounded = (container_length - self.total_spacing()) / self.count();
        self.env.grid.floor(unrounded)
    }

    /// Length of the item at `index` when `container_length` is divided
    /// evenly. The last item takes up the rounding remainder so the lengths
    /// and spacing add up to the container length exactly.
    pub fn length_at(&self, index: usize, container_length: f64) -> f64 {
        let usual = self.usual_length(container_length);
        if self.is_last(index) {
            container_length - (self.count() - 1.0) * (usual + self.config.spacing)
        } else {
            usual
        }
    }

    /// Frame of an evenly divided item. Side-by-side order is mirrored for
    /// right-to-left; top-to-bottom order never is.
    fn frame_at(&self, index: usize, outer: Axis, container: Frame) -> Frame {
        let grid = self.env.grid;
        let (origin, size) = match outer {
            Axis::Horizontal => {
                let effective = if self.env.direction.is_right_to_left() {
                    self.items.len() - (index + 1)
                } else {
                    index
                };
                let step = self.usual_length(container.width) + self.config.spacing;
                (
                    DVec2::new(grid.round(effective as f64 * step), 0.0),
                    DVec2::new(self.length_at(index, container.width), container.height),
                )
            }
            Axis::Vertical => {
                let step = self.usual_length(container.height) + self.config.spacing;
                (
                    DVec2::new(0.0, grid.round(index as f64 * step)),
                    DVec2::new(container.width, self.length_at(index, container.height)),
                )
            }
        };
        Frame::from_vecs(container.origin() + origin, size)
    }

    fn item_placement(
        &self,
        item: &ButtonItem,
        frame: Frame,
        inner: Axis,
        sizes: &InternalSizes,
        targets: Option<AlignmentTargets>,
    ) -> ItemPlacement {
        ItemPlacement {
            frame,
            inner,
            insets: icon_text_insets(
                inner,
                sizes,
                item.half_spacing(),
                targets,
                self.env.direction,
            ),
        }
    }

    fn layout_infos(&self, width_at: impl Fn(usize) -> f64) -> SmallVec<[LayoutInfo; 4]> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let info = item.layout_info(width_at(index));
                trace!(
                    index,
                    fit = ?info.fit,
                    width = info.button_size.width,
                    height = info.button_size.height,
                    "classified item"
                );
                info
            })
            .collect()
    }

    /// Smallest size for the stack at `available_width`, with unbounded
    /// height. Returns `None` when there are no items.
    pub fn measure(&self, available_width: f64) -> Option<Sizing> {
        if self.items.is_empty() {
            return None;
        }

        let sizing = self.sizing_for_width(available_width);
        debug!(
            arrangement = ?sizing.arrangement,
            items = self.items.len(),
            available_width,
            width = sizing.size.width,
            height = sizing.size.height,
            "sized stack"
        );
        Some(sizing)
    }

    fn sizing_for_width(&self, available_width: f64) -> Sizing {
        let n = self.count();
        let spacing = self.total_spacing();

        // Items side by side, each with a share of the width.
        let divided = self.layout_infos(|index| self.length_at(index, available_width));

        // (1) Every item fits with icon beside text.
        if divided.iter().all(|info| info.fit == Fit::Horizontal) {
            // The widest item sets every item's width for an even look.
            let max = max_size(divided.iter().map(|info| info.button_size));
            return Sizing {
                arrangement: Arrangement::HorizontalHorizontal,
                size: Size::new(max.width * n + spacing, max.height),
            };
        }

        // (2) Every item fits with icon above text, without wrapping.
        if divided.iter().all(|info| !info.fit.requires_wrapping()) {
            let max = max_size(self.items.iter().map(|item| item.vertical_button_size(None)));
            return Sizing {
                arrangement: Arrangement::HorizontalVertical,
                size: Size::new(max.width * n + spacing, max.height),
            };
        }

        // Items top to bottom, each with the full width.
        let full = self.layout_infos(|_| available_width);

        // (3) Every item fits with icon beside text at full width.
        if full.iter().all(|info| info.fit == Fit::Horizontal) {
            let sizes = full.iter().map(|info| info.button_size);
            return Sizing {
                arrangement: Arrangement::VerticalHorizontal,
                size: stacked_vertically(sizes, spacing),
            };
        }

        // (4) Text wraps as needed. Always fits.
        let sizes = self
            .items
            .iter()
            .map(|item| item.vertical_button_size(Some(available_width)));
        Sizing {
            arrangement: Arrangement::VerticalVertical,
            size: stacked_vertically(sizes, spacing),
        }
    }

    /// Assign a frame and icon/text insets to every item inside `container`.
    /// Returns `None` when there are no items.
    ///
    /// Never fails for lack of space: with too little height, items are
    /// scaled proportionally to fill the container.
    pub fn place(&self, container: Frame) -> Option<Placement> {
        if self.items.is_empty() {
            return None;
        }

        let placement = match self.place_vertical_horizontal(container) {
            Fitting::Fits(placement) => placement,
            Fitting::NotEnoughWidth => self.place_vertical_vertical(container),
            Fitting::NotEnoughHeight => self
                .place_horizontal_vertical(container)
                .unwrap_or_else(|| self.place_horizontal_horizontal(container)),
        };

        debug!(
            arrangement = ?placement.arrangement,
            items = self.items.len(),
            width = container.width,
            height = container.height,
            direction = ?self.env.direction,
            "placed stack"
        );
        Some(placement)
    }

    /// Items top to bottom, icon beside text, icons and texts aligned.
    fn place_vertical_horizontal(&self, container: Frame) -> Fitting {
        let infos = self.layout_infos(|_| container.width);

        if !infos.iter().all(|info| info.fit == Fit::Horizontal) {
            return Fitting::NotEnoughWidth;
        }

        let total_height: f64 = infos.iter().map(|info| info.button_size.height).sum();
        if total_height > container.height - self.total_spacing() {
            return Fitting::NotEnoughHeight;
        }

        let targets =
            AlignmentTargets::largest(Axis::Horizontal, infos.iter().map(|info| &info.sizes));

        let items = self
            .items
            .iter()
            .zip(infos.iter())
            .enumerate()
            .map(|(index, (item, info))| {
                let frame = self.frame_at(index, Axis::Vertical, container);
                self.item_placement(item, frame, Axis::Horizontal, &info.sizes, Some(targets))
            })
            .collect();

        Fitting::Fits(Placement {
            arrangement: Arrangement::VerticalHorizontal,
            items,
        })
    }

    /// Items top to bottom, icon above text with wrapping. Heights are scaled
    /// by one common factor so the items exactly fill the container height.
    /// Items with no height at all share the container height evenly.
    fn place_vertical_vertical(&self, container: Frame) -> Placement {
        let grid = self.env.grid;
        let spacing = self.config.spacing;

        let all_sizes: SmallVec<[InternalSizes; 4]> = self
            .items
            .iter()
            .map(|item| item.vertical_content(Some(container.width)))
            .collect();

        let fitting_heights: SmallVec<[f64; 4]> = self
            .items
            .iter()
            .zip(all_sizes.iter())
            .map(|(item, sizes)| item.button_size(sizes.content).height)
            .collect();

        let total_fitting_height: f64 = fitting_heights.iter().sum();
        let available_height = container.height - self.total_spacing();
        let scaled_height = |index: usize| {
            if total_fitting_height > 0.0 {
                fitting_heights[index] * available_height / total_fitting_height
            } else {
                available_height / self.count()
            }
        };

        let mut unrounded_y = 0.0;
        let mut items = SmallVec::with_capacity(self.items.len());

        for (index, (item, sizes)) in self.items.iter().zip(all_sizes.iter()).enumerate() {
            let origin_y = grid.round(unrounded_y);
            let unrounded_height = scaled_height(index);

            // The last item ends exactly at the bottom of the container.
            let height = if self.is_last(index) {
                container.height - origin_y
            } else {
                grid.round(unrounded_height)
            };

            let frame = Frame::from_vecs(
                container.origin() + DVec2::new(0.0, origin_y),
                DVec2::new(container.width, height),
            );
            items.push(self.item_placement(item, frame, Axis::Vertical, sizes, None));

            unrounded_y += unrounded_height + spacing;
        }

        Placement {
            arrangement: Arrangement::VerticalVertical,
            items,
        }
    }

    /// Items side by side, icon above text, icons and texts aligned.
    /// Returns `None` if any item is taller than the container.
    fn place_horizontal_vertical(&self, container: Frame) -> Option<Placement> {
        let all_sizes: SmallVec<[InternalSizes; 4]> = self
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                item.vertical_content(Some(self.length_at(index, container.width)))
            })
            .collect();

        let all_fit = self
            .items
            .iter()
            .zip(all_sizes.iter())
            .all(|(item, sizes)| item.button_size(sizes.content).height <= container.height);
        if !all_fit {
            return None;
        }

        let targets = AlignmentTargets::largest(Axis::Vertical, all_sizes.iter());

        let items = self
            .items
            .iter()
            .zip(all_sizes.iter())
            .enumerate()
            .map(|(index, (item, sizes))| {
                let frame = self.frame_at(index, Axis::Horizontal, container);
                self.item_placement(item, frame, Axis::Vertical, sizes, Some(targets))
            })
            .collect();

        Some(Placement {
            arrangement: Arrangement::HorizontalVertical,
            items,
        })
    }

    /// Items side by side, icon beside text. No fit check.
    fn place_horizontal_horizontal(&self, container: Frame) -> Placement {
        let items = self
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let frame = self.frame_at(index, Axis::Horizontal, container);
                let sizes = item.horizontal_content();
                self.item_placement(item, frame, Axis::Horizontal, &sizes, None)
            })
            .collect();

        Placement {
            arrangement: Arrangement::HorizontalHorizontal,
            items,
        }
    }
}

fn max_size(sizes: impl Iterator<Item = Size>) -> Size {
    sizes.fold(Size::ZERO, Size::max)
}

/// Widest width and summed heights plus spacing.
fn stacked_vertically(sizes: impl Iterator<Item = Size>, spacing: f64) -> Size {
    let (width, height) = sizes.fold((0.0_f64, 0.0), |(width, height), size| {
        (width.max(size.width), height + size.height)
    });
    Size::new(width, height + spacing)
}
