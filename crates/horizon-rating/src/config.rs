//! Host-facing configuration for the rating control.

use crate::engine::Precision;
use crate::error::{RatingError, RatingResult};
use crate::geometry::Size;

/// Configuration surface for [`RatingControl`](crate::RatingControl).
///
/// The config is a plain value set by the hosting application; the control
/// never persists it. Invalid combinations are either rejected up front via
/// [`validate`](Self::validate) or silently repaired via
/// [`sanitized`](Self::sanitized). The control uses the latter, favoring
/// graceful degradation over runtime failures.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RatingConfig {
    /// Number of rating items. At least 1.
    pub item_count: usize,
    /// The lowest rating a gesture can produce.
    pub min_value: f64,
    /// How pointer positions quantize into rating values.
    pub precision: Precision,
    /// Whether pointer input can change the rating.
    pub editable: bool,
    /// Minimum rendered size of a single item.
    pub min_item_size: Size,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            item_count: 5,
            min_value: 0.0,
            precision: Precision::default(),
            editable: true,
            min_item_size: Size::new(5.0, 5.0),
        }
    }
}

impl RatingConfig {
    /// The maximum rating value implied by the item count.
    pub fn max_value(&self) -> f64 {
        self.item_count as f64
    }

    /// Strictly check the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::ZeroItemCount`] when `item_count` is 0 and
    /// [`RatingError::MinAboveMax`] when `min_value` exceeds the maximum
    /// implied by the item count.
    pub fn validate(&self) -> RatingResult<()> {
        if self.item_count == 0 {
            return Err(RatingError::ZeroItemCount);
        }
        if self.min_value > self.max_value() {
            return Err(RatingError::MinAboveMax {
                min: self.min_value,
                max: self.max_value(),
            });
        }
        Ok(())
    }

    /// Repair the configuration instead of rejecting it.
    ///
    /// Floors `item_count` at 1 and pulls `min_value` down to the maximum
    /// when it exceeds it.
    pub fn sanitized(mut self) -> Self {
        if self.item_count == 0 {
            self.item_count = 1;
        }
        if self.min_value > self.max_value() {
            self.min_value = self.max_value();
        }
        self
    }
}
