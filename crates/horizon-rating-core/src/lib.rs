//! Core systems for Horizon Rating.
//!
//! This crate provides the foundational components shared by the rating
//! control:
//!
//! - **Signal/Slot System**: Type-safe observer notifications
//! - **Object Identity**: Process-unique identifiers for log correlation
//!
//! # Signal/Slot Example
//!
//! ```
//! use horizon_rating_core::Signal;
//!
//! // Create a signal that notifies when a value changes
//! let value_changed = Signal::<f64>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! // Emit the signal
//! value_changed.emit(4.5);
//!
//! // Disconnect when done
//! value_changed.disconnect(conn_id);
//! ```

mod object;
pub mod logging;
pub mod signal;

pub use object::{Object, ObjectId};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
