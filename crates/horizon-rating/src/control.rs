//! Rating control implementation.
//!
//! This module provides [`RatingControl`], an embeddable widget that maps
//! pointer press/drag input over a row of icon pairs to a numeric rating
//! value.
//!
//! # Example
//!
//! ```ignore
//! use horizon_rating::{Icon, PointerEvent, Precision, RatingControl, Size};
//!
//! // Create a half-star control with 24x24 icons
//! let mut stars = RatingControl::new()
//!     .with_precision(Precision::Half)
//!     .with_icons(Icon::new(24.0, 24.0), Icon::new(24.0, 24.0));
//!
//! // Connect to value changes
//! stars.rating_changing.connect(|&value| {
//!     println!("Dragging: {}", value);
//! });
//! stars.rating_changed.connect(|&value| {
//!     println!("Committed: {}", value);
//! });
//!
//! // Give the control its bounds, then forward input
//! stars.resize(Size::new(160.0, 32.0));
//! stars.pointer_event(&PointerEvent::started((90.0, 16.0).into()));
//! stars.pointer_event(&PointerEvent::ended());
//! ```

use std::sync::Arc;

use horizon_rating_core::{Object, ObjectId, Signal};

use crate::config::RatingConfig;
use crate::engine::{self, ItemSpan, Precision};
use crate::events::{PointerEvent, PointerPhase};
use crate::geometry::{Point, Rect, Size};
use crate::icon::IconImage;

/// Per-item render descriptor.
///
/// The control owns one record per item and recomputes the fill state on
/// every value change. The host draws each item as two layers: the empty
/// icon in [`frame`](Self::frame), then, when
/// [`filled_visible`](Self::filled_visible), the filled icon clipped to
/// [`filled_clip_rect`](Self::filled_clip_rect).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemVisual {
    /// Position of this item in the row, 0-indexed from the left.
    pub index: usize,
    /// The item's frame in control-local coordinates.
    pub frame: Rect,
    /// How much of the filled overlay shows, in `[0, 1]`.
    pub fill_fraction: f32,
    /// Whether the filled overlay should be drawn at all.
    pub filled_visible: bool,
}

impl ItemVisual {
    fn new(index: usize) -> Self {
        Self {
            index,
            frame: Rect::ZERO,
            fill_fraction: 0.0,
            filled_visible: false,
        }
    }

    /// The left-aligned clip rect for the filled overlay.
    pub fn filled_clip_rect(&self) -> Rect {
        Rect::new(
            self.frame.left(),
            self.frame.top(),
            self.frame.width() * self.fill_fraction,
            self.frame.height(),
        )
    }
}

/// An interactive star rating control.
///
/// RatingControl renders a row of icon pairs (empty outline plus filled
/// overlay) and converts pointer gestures into a rating value. It supports
/// whole-star, half-star, and continuous precision, and leaves the actual
/// drawing to the host: [`visuals`](Self::visuals) exposes the per-item
/// frames and fill fractions to composite.
///
/// All state changes happen synchronously on the caller's thread in
/// response to direct API calls; there is no internal event loop.
///
/// # Signals
///
/// - `rating_changing(f64)`: Emitted for every handled press/move while a
///   gesture is in progress
/// - `rating_changed(f64)`: Emitted once per completed gesture (end or
///   cancel), whether or not the value changed
/// - `count_changed(usize)`: Emitted when the item count actually changes
pub struct RatingControl {
    /// Identity for log correlation.
    id: ObjectId,

    /// Number of rating items.
    item_count: usize,

    /// The lowest rating a gesture can produce.
    min_value: f64,

    /// Quantization mode.
    precision: Precision,

    /// Whether pointer input can change the rating.
    editable: bool,

    /// Minimum rendered size of a single item.
    min_item_size: Size,

    /// The empty (outline) icon. Also the aspect source for layout.
    empty_icon: Option<Arc<dyn IconImage>>,

    /// The filled icon overlaid on top of the empty one.
    filled_icon: Option<Arc<dyn IconImage>>,

    /// Current control bounds.
    bounds: Size,

    /// Current rating value, always in `[min_value, item_count]`.
    value: f64,

    /// Whether a pointer gesture is in progress.
    dragging: bool,

    /// Per-item visual records, rebuilt wholesale on item-count changes.
    items: Vec<ItemVisual>,

    /// Signal emitted while a gesture updates the rating.
    pub rating_changing: Signal<f64>,

    /// Signal emitted when a gesture completes.
    pub rating_changed: Signal<f64>,

    /// Signal emitted when the item count changes.
    pub count_changed: Signal<usize>,
}

impl RatingControl {
    /// Create a control with the default configuration (five whole-star
    /// items, editable, no icons installed yet).
    pub fn new() -> Self {
        Self::with_config(RatingConfig::default())
    }

    /// Create a control from a configuration.
    ///
    /// The config is sanitized rather than rejected: a zero item count
    /// becomes 1 and an out-of-range minimum is pulled into range. Use
    /// [`RatingConfig::validate`] first if you want strict errors.
    pub fn with_config(config: RatingConfig) -> Self {
        let config = config.sanitized();
        Self {
            id: ObjectId::next(),
            item_count: config.item_count,
            min_value: config.min_value,
            precision: config.precision,
            editable: config.editable,
            min_item_size: config.min_item_size,
            empty_icon: None,
            filled_icon: None,
            bounds: Size::ZERO,
            value: config.min_value,
            dragging: false,
            items: (0..config.item_count).map(ItemVisual::new).collect(),
            rating_changing: Signal::new(),
            rating_changed: Signal::new(),
            count_changed: Signal::new(),
        }
    }

    /// Snapshot the current configuration.
    pub fn config(&self) -> RatingConfig {
        RatingConfig {
            item_count: self.item_count,
            min_value: self.min_value,
            precision: self.precision,
            editable: self.editable,
            min_item_size: self.min_item_size,
        }
    }

    // =========================================================================
    // Item Count
    // =========================================================================

    /// Get the number of rating items.
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Set the number of rating items.
    ///
    /// Values below 1 are clamped to 1. On an actual change the per-item
    /// visual records are discarded and rebuilt wholesale, the row is laid
    /// out again, and `count_changed` is emitted; calling this with the
    /// current count is a no-op.
    pub fn set_item_count(&mut self, count: usize) {
        let count = count.max(1);
        if count == self.item_count {
            return;
        }

        tracing::debug!(
            target: "horizon_rating::control",
            id = %self.id,
            from = self.item_count,
            to = count,
            "rebuilding rating items"
        );

        self.item_count = count;
        self.items = (0..count).map(ItemVisual::new).collect();

        // Keep the value invariant intact under the new range
        let max = count as f64;
        if self.min_value > max {
            self.min_value = max;
        }
        self.value = self.value.clamp(self.min_value, max);

        self.layout();
        self.count_changed.emit(count);
    }

    /// Set the item count using builder pattern.
    pub fn with_item_count(mut self, count: usize) -> Self {
        self.set_item_count(count);
        self
    }

    // =========================================================================
    // Value and Range
    // =========================================================================

    /// Get the current rating value.
    pub fn rating(&self) -> f64 {
        self.value
    }

    /// Set the rating programmatically.
    ///
    /// The value is clamped into `[min_value, item_count]` and the visuals
    /// refresh. Gesture signals do not fire for programmatic changes.
    pub fn set_rating(&mut self, value: f64) {
        let clamped = value.clamp(self.min_value, self.item_count as f64);
        if clamped != self.value {
            self.value = clamped;
            self.render();
        }
    }

    /// Set the rating using builder pattern.
    pub fn with_rating(mut self, value: f64) -> Self {
        self.set_rating(value);
        self
    }

    /// Get the minimum rating value.
    pub fn min_value(&self) -> f64 {
        self.min_value
    }

    /// Set the minimum rating value.
    ///
    /// Values above the maximum implied by the item count are pulled down
    /// to it. The current rating is lifted if it falls below the new
    /// minimum.
    pub fn set_min_value(&mut self, min_value: f64) {
        let min_value = min_value.min(self.item_count as f64);
        if min_value == self.min_value {
            return;
        }
        self.min_value = min_value;
        if self.value < min_value {
            self.value = min_value;
            self.render();
        }
    }

    /// Set the minimum value using builder pattern.
    pub fn with_min_value(mut self, min_value: f64) -> Self {
        self.set_min_value(min_value);
        self
    }

    // =========================================================================
    // Precision and Editability
    // =========================================================================

    /// Get the precision mode.
    pub fn precision(&self) -> Precision {
        self.precision
    }

    /// Set the precision mode. Takes effect on the next gesture.
    pub fn set_precision(&mut self, precision: Precision) {
        self.precision = precision;
    }

    /// Set the precision using builder pattern.
    pub fn with_precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }

    /// Whether pointer input can change the rating.
    pub fn editable(&self) -> bool {
        self.editable
    }

    /// Set whether pointer input can change the rating.
    pub fn set_editable(&mut self, editable: bool) {
        self.editable = editable;
    }

    /// Set editability using builder pattern.
    pub fn with_editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    // =========================================================================
    // Icons
    // =========================================================================

    /// Set the empty (outline) icon.
    ///
    /// The empty icon is also the aspect source for layout, so replacing it
    /// re-lays out the row.
    pub fn set_empty_icon(&mut self, icon: Option<Arc<dyn IconImage>>) {
        self.empty_icon = icon;
        self.layout();
    }

    /// Set the filled overlay icon.
    pub fn set_filled_icon(&mut self, icon: Option<Arc<dyn IconImage>>) {
        self.filled_icon = icon;
        self.render();
    }

    /// Set both icons at once.
    pub fn set_icons(
        &mut self,
        empty: Option<Arc<dyn IconImage>>,
        filled: Option<Arc<dyn IconImage>>,
    ) {
        self.empty_icon = empty;
        self.filled_icon = filled;
        self.layout();
    }

    /// Set both icons using builder pattern.
    pub fn with_icons(
        mut self,
        empty: impl IconImage + 'static,
        filled: impl IconImage + 'static,
    ) -> Self {
        self.set_icons(Some(Arc::new(empty)), Some(Arc::new(filled)));
        self
    }

    // =========================================================================
    // Sizing
    // =========================================================================

    /// Get the minimum rendered size of a single item.
    pub fn min_item_size(&self) -> Size {
        self.min_item_size
    }

    /// Set the minimum rendered size of a single item.
    pub fn set_min_item_size(&mut self, size: Size) {
        if self.min_item_size != size {
            self.min_item_size = size;
            self.layout();
        }
    }

    /// Set the minimum item size using builder pattern.
    pub fn with_min_item_size(mut self, size: Size) -> Self {
        self.min_item_size = size;
        self
    }

    /// Get the current control bounds.
    pub fn bounds(&self) -> Size {
        self.bounds
    }

    /// Give the control its bounds, re-laying out the row.
    pub fn resize(&mut self, bounds: Size) {
        if self.bounds != bounds {
            self.bounds = bounds;
            self.layout();
        }
    }

    // =========================================================================
    // State Queries
    // =========================================================================

    /// Whether a pointer gesture is in progress.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// The per-item visual records in left-to-right order.
    pub fn visuals(&self) -> &[ItemVisual] {
        &self.items
    }

    // =========================================================================
    // Layout and Rendering
    // =========================================================================

    /// Recompute item frames from the current bounds and icons.
    ///
    /// Item width is the larger of the minimum item size and an even split
    /// of the row, aspect-corrected against the empty icon's intrinsic
    /// size. Spacing distributes the remaining width so the row fills the
    /// bounds exactly; a single item needs no spacing.
    fn layout(&mut self) {
        let Some(empty_icon) = self.empty_icon.as_ref() else {
            // No aspect source yet: clear the frames so input stays inert
            // until an empty icon is installed.
            for item in &mut self.items {
                item.frame = Rect::ZERO;
            }
            self.render();
            return;
        };

        let count = self.items.len() as f32;
        let item_box = Size::new(
            self.min_item_size.width.max(self.bounds.width / count),
            self.min_item_size.height.max(self.bounds.height),
        );
        let item_size = empty_icon.intrinsic_size().aspect_fit(item_box);

        let spacing = if self.items.len() > 1 {
            (self.bounds.width - item_size.width * count) / (count - 1.0)
        } else {
            0.0
        };

        for item in &mut self.items {
            let x = item.index as f32 * (spacing + item_size.width);
            item.frame = Rect::new(x, 0.0, item_size.width, item_size.height);
        }

        tracing::trace!(
            target: "horizon_rating::control",
            id = %self.id,
            item_width = item_size.width,
            spacing,
            "laid out rating row"
        );

        self.render();
    }

    /// Apply the current value to the per-item fill state.
    fn render(&mut self) {
        let fractions = engine::fill_fractions(self.value, self.items.len());
        let has_filled_icon = self.filled_icon.is_some();

        for (item, fraction) in self.items.iter_mut().zip(fractions) {
            item.fill_fraction = fraction;
            // A missing filled icon degrades that layer to a no-op
            item.filled_visible = has_filled_icon && fraction > 0.0;
        }
    }

    /// The horizontal spans of the laid-out items.
    fn item_spans(&self) -> Vec<ItemSpan> {
        self.items
            .iter()
            .map(|item| ItemSpan::new(item.frame.left(), item.frame.width()))
            .collect()
    }

    // =========================================================================
    // Input Handling
    // =========================================================================

    /// Feed a pointer event to the control.
    ///
    /// Returns `true` if the event was handled. Press and move events
    /// update the rating and emit `rating_changing`; end and cancel events
    /// both terminate the gesture and emit `rating_changed` with the final
    /// value, whether or not it changed during the gesture.
    pub fn pointer_event(&mut self, event: &PointerEvent) -> bool {
        match event.phase {
            PointerPhase::Started | PointerPhase::Moved => self.update_from_pointer(event.local_pos),
            PointerPhase::Ended | PointerPhase::Cancelled => self.finish_gesture(),
        }
    }

    /// Recompute the rating for a pointer position during a gesture.
    fn update_from_pointer(&mut self, pos: Point) -> bool {
        if !self.editable {
            return false;
        }

        let spans = self.item_spans();
        if spans.iter().all(|span| span.width <= 0.0) {
            // Not laid out yet (no bounds or no empty icon)
            return false;
        }

        self.dragging = true;

        let rating = engine::rating_at(pos.x, &spans, self.precision, self.min_value);
        if rating != self.value {
            self.value = rating;
            self.render();
        }

        // Observers hear every update during a drag, changed or not
        self.rating_changing.emit(self.value);
        true
    }

    /// Terminate the gesture and notify observers of the final value.
    fn finish_gesture(&mut self) -> bool {
        self.dragging = false;

        tracing::trace!(
            target: "horizon_rating::control",
            id = %self.id,
            value = self.value,
            "gesture finished"
        );

        // The terminal notification is unconditional: cancel and normal end
        // are indistinguishable to observers
        self.rating_changed.emit(self.value);
        true
    }
}

impl Default for RatingControl {
    fn default() -> Self {
        Self::new()
    }
}

impl Object for RatingControl {
    fn object_id(&self) -> ObjectId {
        self.id
    }
}

// Ensure RatingControl is Send + Sync
static_assertions::assert_impl_all!(RatingControl: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::Icon;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicI32, Ordering};

    /// A control with square icons laid out in a 100x20 row: five 20x20
    /// items, no spacing.
    fn laid_out_control(precision: Precision) -> RatingControl {
        let mut control = RatingControl::new()
            .with_precision(precision)
            .with_icons(Icon::new(10.0, 10.0), Icon::new(10.0, 10.0));
        control.resize(Size::new(100.0, 20.0));
        control
    }

    #[test]
    fn test_control_creation() {
        let control = RatingControl::new();
        assert_eq!(control.item_count(), 5);
        assert_eq!(control.rating(), 0.0);
        assert_eq!(control.min_value(), 0.0);
        assert_eq!(control.precision(), Precision::Whole);
        assert!(control.editable());
        assert_eq!(control.min_item_size(), Size::new(5.0, 5.0));
        assert_eq!(control.visuals().len(), 5);
        assert!(!control.is_dragging());
    }

    #[test]
    fn test_builder_pattern() {
        let control = RatingControl::new()
            .with_item_count(7)
            .with_min_value(1.0)
            .with_precision(Precision::Continuous)
            .with_editable(false)
            .with_min_item_size(Size::new(8.0, 8.0))
            .with_rating(3.5);

        assert_eq!(control.item_count(), 7);
        assert_eq!(control.min_value(), 1.0);
        assert_eq!(control.precision(), Precision::Continuous);
        assert!(!control.editable());
        assert_eq!(control.min_item_size(), Size::new(8.0, 8.0));
        assert_eq!(control.rating(), 3.5);
    }

    #[test]
    fn test_config_sanitized_on_construction() {
        let control = RatingControl::with_config(RatingConfig {
            item_count: 0,
            min_value: 10.0,
            ..Default::default()
        });
        assert_eq!(control.item_count(), 1);
        assert_eq!(control.min_value(), 1.0);
        assert_eq!(control.rating(), 1.0);
    }

    #[test]
    fn test_config_snapshot_round_trips() {
        let control = RatingControl::new()
            .with_item_count(3)
            .with_precision(Precision::Half);
        let config = control.config();
        assert_eq!(config.item_count, 3);
        assert_eq!(config.precision, Precision::Half);

        let clone = RatingControl::with_config(config);
        assert_eq!(clone.item_count(), 3);
        assert_eq!(clone.precision(), Precision::Half);
    }

    #[test]
    fn test_set_item_count_rebuilds_wholesale() {
        let mut control = laid_out_control(Precision::Whole);
        control.set_item_count(3);
        assert_eq!(control.visuals().len(), 3);
        // New records are laid out immediately
        assert!(control.visuals().iter().all(|item| item.frame.width() > 0.0));
    }

    #[test]
    fn test_set_item_count_idempotent() {
        let mut control = RatingControl::new();
        let count = Arc::new(AtomicI32::new(0));

        let count_clone = count.clone();
        control.count_changed.connect(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        control.set_item_count(5); // Unchanged: no rebuild, no signal
        assert_eq!(count.load(Ordering::SeqCst), 0);

        control.set_item_count(6);
        control.set_item_count(6);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_set_item_count_clamps_to_one() {
        let mut control = RatingControl::new();
        control.set_item_count(0);
        assert_eq!(control.item_count(), 1);
        assert_eq!(control.visuals().len(), 1);
    }

    #[test]
    fn test_shrinking_item_count_clamps_value() {
        let mut control = RatingControl::new().with_rating(5.0);
        control.set_item_count(3);
        assert_eq!(control.rating(), 3.0);
    }

    #[test]
    fn test_set_rating_clamps() {
        let mut control = RatingControl::new().with_min_value(1.0);

        control.set_rating(-2.0);
        assert_eq!(control.rating(), 1.0);

        control.set_rating(9.0);
        assert_eq!(control.rating(), 5.0);
    }

    #[test]
    fn test_set_min_value_lifts_current() {
        let mut control = RatingControl::new().with_rating(1.0);
        control.set_min_value(2.5);
        assert_eq!(control.rating(), 2.5);
    }

    #[test]
    fn test_set_min_value_clamped_to_max() {
        let mut control = RatingControl::new();
        control.set_min_value(99.0);
        assert_eq!(control.min_value(), 5.0);
    }

    #[test]
    fn test_layout_uniform_row() {
        let control = laid_out_control(Precision::Whole);
        let visuals = control.visuals();

        // Five 20x20 items packed edge to edge
        for (i, item) in visuals.iter().enumerate() {
            assert_eq!(item.frame, Rect::new(i as f32 * 20.0, 0.0, 20.0, 20.0));
        }
        assert_eq!(visuals.last().map(|item| item.frame.right()), Some(100.0));
    }

    #[test]
    fn test_layout_spacing_fills_row() {
        // Tall icons: aspect fit constrains item width below the even
        // split, and spacing absorbs the remainder
        let mut control = RatingControl::new()
            .with_icons(Icon::new(10.0, 20.0), Icon::new(10.0, 20.0));
        control.resize(Size::new(100.0, 20.0));

        let visuals = control.visuals();
        // Item box is 20x20, icon fits to 10x20
        assert_eq!(visuals[0].frame.size, Size::new(10.0, 20.0));
        // spacing = (100 - 5*10) / 4 = 12.5
        assert_eq!(visuals[1].frame.left(), 22.5);
        // The row plus spacing spans the full bounds
        assert_eq!(visuals[4].frame.right(), 100.0);
    }

    #[test]
    fn test_layout_single_item_has_no_spacing() {
        let mut control = RatingControl::new()
            .with_item_count(1)
            .with_icons(Icon::new(10.0, 10.0), Icon::new(10.0, 10.0));
        control.resize(Size::new(40.0, 40.0));

        let visuals = control.visuals();
        assert_eq!(visuals.len(), 1);
        assert_eq!(visuals[0].frame, Rect::new(0.0, 0.0, 40.0, 40.0));
        assert!(visuals[0].frame.width().is_finite());
    }

    #[test]
    fn test_layout_respects_min_item_size() {
        // 100 items in a 50-wide row would shrink below the 5x5 floor
        let mut control = RatingControl::new()
            .with_item_count(100)
            .with_icons(Icon::new(10.0, 10.0), Icon::new(10.0, 10.0));
        control.resize(Size::new(50.0, 5.0));

        assert!(control.visuals().iter().all(|item| item.frame.width() >= 5.0));
    }

    #[test]
    fn test_missing_empty_icon_clears_frames() {
        let mut control = RatingControl::new();
        control.resize(Size::new(100.0, 20.0));
        assert!(control.visuals().iter().all(|item| item.frame.is_empty()));
    }

    #[test]
    fn test_whole_gesture_scenario() {
        // Five items, whole mode: a touch inside item index 2 rates 3
        let mut control = laid_out_control(Precision::Whole);
        let changing = Arc::new(Mutex::new(Vec::new()));
        let changed = Arc::new(Mutex::new(Vec::new()));

        let changing_clone = changing.clone();
        control.rating_changing.connect(move |&value| {
            changing_clone.lock().unwrap().push(value);
        });
        let changed_clone = changed.clone();
        control.rating_changed.connect(move |&value| {
            changed_clone.lock().unwrap().push(value);
        });

        assert!(control.pointer_event(&PointerEvent::started(Point::new(50.0, 10.0))));
        assert!(control.is_dragging());
        assert_eq!(control.rating(), 3.0);

        assert!(control.pointer_event(&PointerEvent::ended()));
        assert!(!control.is_dragging());

        assert_eq!(*changing.lock().unwrap(), vec![3.0]);
        assert_eq!(*changed.lock().unwrap(), vec![3.0]);
    }

    #[test]
    fn test_drag_emits_changing_per_event() {
        let mut control = laid_out_control(Precision::Whole);
        let changing = Arc::new(AtomicI32::new(0));

        let changing_clone = changing.clone();
        control.rating_changing.connect(move |_| {
            changing_clone.fetch_add(1, Ordering::SeqCst);
        });

        control.pointer_event(&PointerEvent::started(Point::new(50.0, 10.0)));
        // Two moves inside the same item: the value stays 3 but observers
        // still hear each update
        control.pointer_event(&PointerEvent::moved(Point::new(52.0, 10.0)));
        control.pointer_event(&PointerEvent::moved(Point::new(55.0, 10.0)));

        assert_eq!(changing.load(Ordering::SeqCst), 3);
        assert_eq!(control.rating(), 3.0);
    }

    #[test]
    fn test_half_gesture_rounds_up() {
        // Decimal 0.8 within item index 1 rounds up to 2.0
        let mut control = laid_out_control(Precision::Half);
        control.pointer_event(&PointerEvent::started(Point::new(36.0, 10.0)));
        assert_eq!(control.rating(), 2.0);
    }

    #[test]
    fn test_continuous_gesture_tracks_position() {
        let mut control = laid_out_control(Precision::Continuous);
        control.pointer_event(&PointerEvent::started(Point::new(68.0, 10.0)));
        assert!((control.rating() - 3.4).abs() < 1e-6);
    }

    #[test]
    fn test_gesture_clamps_to_min_value() {
        let mut control = laid_out_control(Precision::Continuous);
        control.set_min_value(2.0);

        // Raw value would be 1.5
        control.pointer_event(&PointerEvent::started(Point::new(30.0, 10.0)));
        assert_eq!(control.rating(), 2.0);
    }

    #[test]
    fn test_not_editable_ignores_press_but_release_notifies() {
        let mut control = laid_out_control(Precision::Whole).with_editable(false);
        control.set_rating(2.0);
        let changed = Arc::new(Mutex::new(Vec::new()));

        let changed_clone = changed.clone();
        control.rating_changed.connect(move |&value| {
            changed_clone.lock().unwrap().push(value);
        });

        assert!(!control.pointer_event(&PointerEvent::started(Point::new(90.0, 10.0))));
        assert_eq!(control.rating(), 2.0);

        // The terminal notification still fires with the unchanged value
        control.pointer_event(&PointerEvent::ended());
        assert_eq!(*changed.lock().unwrap(), vec![2.0]);
    }

    #[test]
    fn test_cancel_matches_end() {
        let mut control = laid_out_control(Precision::Whole);
        let changed = Arc::new(Mutex::new(Vec::new()));

        let changed_clone = changed.clone();
        control.rating_changed.connect(move |&value| {
            changed_clone.lock().unwrap().push(value);
        });

        control.pointer_event(&PointerEvent::started(Point::new(50.0, 10.0)));
        control.pointer_event(&PointerEvent::cancelled());
        assert!(!control.is_dragging());
        assert_eq!(*changed.lock().unwrap(), vec![3.0]);
    }

    #[test]
    fn test_input_inert_before_layout() {
        let mut control = RatingControl::new()
            .with_icons(Icon::new(10.0, 10.0), Icon::new(10.0, 10.0));
        // Never resized: no frames to hit
        assert!(!control.pointer_event(&PointerEvent::started(Point::new(50.0, 10.0))));
        assert_eq!(control.rating(), 0.0);
    }

    #[test]
    fn test_render_fills_visuals() {
        let mut control = laid_out_control(Precision::Continuous);
        control.set_rating(3.4);

        let visuals = control.visuals();
        assert!(visuals[0].filled_visible);
        assert_eq!(visuals[0].fill_fraction, 1.0);
        assert!((visuals[3].fill_fraction - 0.4).abs() < 1e-6);
        assert!(visuals[3].filled_visible);
        assert_eq!(visuals[4].fill_fraction, 0.0);
        assert!(!visuals[4].filled_visible);

        // The partial overlay clips to 40% of the item width
        let clip = visuals[3].filled_clip_rect();
        assert!((clip.width() - 8.0).abs() < 1e-5);
        assert_eq!(clip.left(), visuals[3].frame.left());
    }

    #[test]
    fn test_missing_filled_icon_hides_overlay() {
        let mut control = RatingControl::new();
        control.set_empty_icon(Some(Arc::new(Icon::new(10.0, 10.0))));
        control.resize(Size::new(100.0, 20.0));
        control.set_rating(4.0);

        assert!(control.visuals().iter().all(|item| !item.filled_visible));

        // Installing the overlay icon makes the fills visible
        control.set_filled_icon(Some(Arc::new(Icon::new(10.0, 10.0))));
        assert!(control.visuals()[..4].iter().all(|item| item.filled_visible));
    }

    #[test]
    fn test_object_identity() {
        let a = RatingControl::new();
        let b = RatingControl::new();
        assert_ne!(a.object_id(), b.object_id());
    }
}
