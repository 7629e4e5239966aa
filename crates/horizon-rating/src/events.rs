//! Pointer input events for the rating control.
//!
//! The host forwards its platform input (mouse drags, touches) as
//! [`PointerEvent`]s with positions already converted to control-local
//! coordinates. A gesture is a `Started` event, zero or more `Moved`
//! events, and a terminal `Ended` or `Cancelled` event; the control treats
//! cancellation identically to a normal end.

use crate::geometry::Point;

/// The phase of a pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    /// The pointer touched down.
    Started,
    /// The pointer moved while down.
    Moved,
    /// The pointer lifted.
    Ended,
    /// The gesture was interrupted by the platform.
    Cancelled,
}

/// A pointer event in control-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// The gesture phase.
    pub phase: PointerPhase,
    /// Position in control-local coordinates.
    pub local_pos: Point,
}

impl PointerEvent {
    /// Create a new pointer event.
    pub fn new(phase: PointerPhase, local_pos: Point) -> Self {
        Self { phase, local_pos }
    }

    /// A pointer-down event at the given position.
    pub fn started(local_pos: Point) -> Self {
        Self::new(PointerPhase::Started, local_pos)
    }

    /// A pointer-move event at the given position.
    pub fn moved(local_pos: Point) -> Self {
        Self::new(PointerPhase::Moved, local_pos)
    }

    /// A pointer-up event. The position is not used for the terminal phase.
    pub fn ended() -> Self {
        Self::new(PointerPhase::Ended, Point::ZERO)
    }

    /// A gesture-cancelled event.
    pub fn cancelled() -> Self {
        Self::new(PointerPhase::Cancelled, Point::ZERO)
    }
}
