//! Adaptive layout for stacks of icon-and-text buttons.
//!
//! Given the intrinsic sizes of each button's icon and text and a width
//! constraint, this crate decides whether the buttons sit side by side or
//! top to bottom, whether each button shows its icon beside or above its
//! text, and the pixel-aligned frame of every button.
//!
//! # Architecture
//!
//! 1. **Text measurement**: [`TextMeasure`] reports text size for a width limit
//! 2. **Item measurement**: content and button sizes of a single item
//! 3. **Arrangement**: the sizing pass and the placement pass over all items
//! 4. **Host protocol**: [`DynamicButtonStack`] with deferred invalidation
//!
//! # Example
//!
//! ```
//! use stackfit_core::{EdgeInsets, Frame, Size};
//! use stackfit_layout::{ButtonItem, DynamicButtonStack, Label};
//!
//! let mut stack = DynamicButtonStack::new(vec![
//!     ButtonItem::new()
//!         .with_icon(Size::splat(24.0))
//!         .with_title(Label::new("Reply"))
//!         .with_padding(EdgeInsets::uniform(8.0)),
//!     ButtonItem::new()
//!         .with_icon(Size::splat(24.0))
//!         .with_title(Label::new("Forward"))
//!         .with_padding(EdgeInsets::uniform(8.0)),
//! ]);
//!
//! let size = stack.size_that_fits(320.0, None).unwrap();
//! let placement = stack.layout(Frame::new(0.0, 0.0, 320.0, size.height)).unwrap();
//! assert_eq!(placement.items.len(), 2);
//! ```

mod align;
mod arrange;
mod item;
mod measure;
mod stack;
mod text;

pub use align::{icon_text_insets, AlignmentTargets};
pub use arrange::{
    ItemPlacement, LayoutEnvironment, Placement, Sizing, StackArranger, StackConfig,
    DEFAULT_SPACING,
};
pub use item::{ButtonItem, DEFAULT_MIN_TOUCH_LENGTH};
pub use measure::{Fit, InternalSizes, LayoutInfo};
pub use stack::DynamicButtonStack;
pub use text::{measure_text, FixedText, Label, TextMeasure, TextMetrics, TextStyle};
