//! An embeddable star rating control.
//!
//! Horizon Rating renders a row of icon pairs (an empty outline plus a
//! filled overlay) and converts pointer press/drag gestures into a numeric
//! rating value. Three precision modes are supported: whole-star,
//! half-star, and continuous.
//!
//! The crate deliberately stops at the rendering seam. The host supplies
//! the two icons (only their intrinsic dimensions are read, via
//! [`IconImage`]), forwards pointer input as [`PointerEvent`]s, and draws
//! the per-item [`ItemVisual`] records however its graphics stack likes,
//! typically by compositing the filled icon over the empty one, clipped to
//! [`ItemVisual::filled_clip_rect`].
//!
//! # Architecture
//!
//! - [`engine`]: pure rating computation (pointer offset to quantized
//!   value, value to per-item fill fractions)
//! - [`RatingControl`]: layout, input handling, visual state, and observer
//!   signals (`rating_changing` during a drag, `rating_changed` on release)
//!
//! # Example
//!
//! ```
//! use horizon_rating::{Icon, PointerEvent, Precision, RatingControl, Size};
//!
//! let mut stars = RatingControl::new()
//!     .with_precision(Precision::Half)
//!     .with_icons(Icon::new(24.0, 24.0), Icon::new(24.0, 24.0));
//!
//! stars.rating_changed.connect(|&value| {
//!     println!("rated {value}");
//! });
//!
//! stars.resize(Size::new(100.0, 20.0));
//! stars.pointer_event(&PointerEvent::started((50.0, 10.0).into()));
//! stars.pointer_event(&PointerEvent::ended());
//! assert_eq!(stars.rating(), 2.5);
//! ```

mod config;
mod control;
pub mod engine;
mod error;
mod events;
mod geometry;
mod icon;

pub use config::RatingConfig;
pub use control::{ItemVisual, RatingControl};
pub use engine::{ItemSpan, Precision, fill_fractions, rating_at};
pub use error::{RatingError, RatingResult};
pub use events::{PointerEvent, PointerPhase};
pub use geometry::{Point, Rect, Size};
pub use icon::{Icon, IconImage};

// Re-export the signal primitives hosts interact with
pub use horizon_rating_core::{ConnectionGuard, ConnectionId, Object, ObjectId, Signal};
