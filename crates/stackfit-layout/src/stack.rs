//! The host-facing stack.
//!
//! A host layout system drives [`DynamicButtonStack`] in two phases: it asks
//! for the size needed at a width (`size_that_fits` / `intrinsic_size`) and
//! then hands over a concrete rectangle to fill (`layout`).
//!
//! Geometry changes never trigger a recompute on the spot. `set_frame` only
//! queues a dirty signal, which the next sizing or layout pass consumes, so a
//! host notifying the stack from inside its own layout pass does not re-enter
//! layout.

use stackfit_core::{Frame, LayoutError, Size};
use tracing::debug;

use crate::arrange::{LayoutEnvironment, Placement, StackArranger, StackConfig};
use crate::item::ButtonItem;

/// A stack of buttons that adapts its arrangement to the available width.
#[derive(Debug, Default)]
pub struct DynamicButtonStack {
    items: Vec<ButtonItem>,
    config: StackConfig,
    environment: LayoutEnvironment,
    frame: Frame,
    dirty: bool,
    intrinsic_size: Option<Size>,
}

impl DynamicButtonStack {
    /// Create a stack of items in display order.
    pub fn new(items: Vec<ButtonItem>) -> Self {
        Self {
            items,
            ..Default::default()
        }
    }

    /// Set the configuration.
    pub fn with_config(mut self, config: StackConfig) -> Self {
        self.config = config;
        self.dirty = true;
        self
    }

    pub fn items(&self) -> &[ButtonItem] {
        &self.items
    }

    /// Replace every item.
    pub fn set_items(&mut self, items: Vec<ButtonItem>) {
        self.items = items;
        self.mark_dirty();
    }

    pub fn config(&self) -> &StackConfig {
        &self.config
    }

    pub fn environment(&self) -> &LayoutEnvironment {
        &self.environment
    }

    /// Update the layout direction and pixel grid.
    pub fn set_environment(&mut self, environment: LayoutEnvironment) {
        if environment != self.environment {
            self.environment = environment;
            self.mark_dirty();
        }
    }

    pub fn frame(&self) -> Frame {
        self.frame
    }

    /// Record a geometry change from the host. Invalidation is deferred to
    /// the next pass.
    pub fn set_frame(&mut self, frame: Frame) {
        if frame != self.frame {
            self.frame = frame;
            self.mark_dirty();
        }
    }

    /// Queue invalidation of the cached intrinsic size.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn consume_dirty(&mut self) {
        if self.dirty {
            debug!(items = self.items.len(), "invalidated intrinsic size");
            self.dirty = false;
            self.intrinsic_size = None;
        }
    }

    fn arranger(&self) -> StackArranger<'_> {
        StackArranger::new(&self.items, self.config, self.environment)
    }

    /// Smallest size for the stack at `width`.
    ///
    /// Only width-constrained sizing is supported: `height` must be `None`,
    /// positive infinity or `f64::MAX`. An empty stack needs no space.
    pub fn size_that_fits(&self, width: f64, height: Option<f64>) -> Result<Size, LayoutError> {
        if let Some(height) = height.filter(|h| *h != f64::INFINITY && *h != f64::MAX) {
            return Err(LayoutError::BoundedHeight { height });
        }

        Ok(self
            .arranger()
            .measure(width)
            .map(|sizing| sizing.size)
            .unwrap_or(Size::ZERO))
    }

    /// Size needed at the current frame width, cached until the next dirty
    /// signal is consumed.
    pub fn intrinsic_size(&mut self) -> Size {
        self.consume_dirty();
        if let Some(size) = self.intrinsic_size {
            return size;
        }

        let size = self
            .arranger()
            .measure(self.frame.width)
            .map(|sizing| sizing.size)
            .unwrap_or(Size::ZERO);
        self.intrinsic_size = Some(size);
        size
    }

    /// Place every item inside `container`. Does nothing for an empty stack.
    pub fn layout(&mut self, container: Frame) -> Option<Placement> {
        self.consume_dirty();
        self.arranger().place(container)
    }
}
