// SPDX-License-Identifier: MIT

//!
//! The drag state machine
//!
//! A drag starts from a [`PixelExtent`], follows the pointer while it moves
//! (snapping to month boundaries and clamping to the track), and on release is
//! quantized into a pair of month bounds for committing.  The live extent
//! belongs to the controller; nothing outside sees it except by copy.
//!

use crate::engine::{
    PixelExtent, TrackLayout, WidthClamp, clamp_lower_wins, snap_to_month_boundary,
};
use log::{debug, trace, warn};

/// The two kinds of drag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragKind {
    /// Move the whole selection, keeping its width
    Position,

    /// Resize the selection from its trailing edge
    Width,
}

/// The pixel value captured when a drag starts (the offset for a position
/// drag, the width for a width drag).  Each move is computed from this plus the
/// total pointer delta, never from the previous move
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureContext {
    pub start: f64,
}

/// Drag state
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging {
        kind: DragKind,
        context: GestureContext,
        extent: PixelExtent,
    },
}

/// Turns pointer movement into a snapped, clamped [`PixelExtent`]
#[derive(Debug, Default, Clone, Copy)]
pub struct GestureController {
    state: GestureState,
    width_clamp: WidthClamp,
}

impl GestureController {
    pub fn new(width_clamp: WidthClamp) -> Self {
        Self {
            state: GestureState::Idle,
            width_clamp,
        }
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.kind().is_some()
    }

    /// The kind of drag in progress (if any)
    pub fn kind(&self) -> Option<DragKind> {
        match self.state {
            GestureState::Idle => None,
            GestureState::Dragging { kind, .. } => Some(kind),
        }
    }

    /// The live extent of the drag in progress (if any)
    pub fn extent(&self) -> Option<PixelExtent> {
        match self.state {
            GestureState::Idle => None,
            GestureState::Dragging { extent, .. } => Some(extent),
        }
    }

    /// Start a drag from `extent`.  Refused (returning `false`) if a drag is
    /// already in progress or the track hasn't been measured
    pub fn begin(&mut self, kind: DragKind, extent: PixelExtent, layout: &TrackLayout) -> bool {
        if let Some(active) = self.kind() {
            debug!("ignoring {kind:?} drag start, {active:?} drag already in progress");
            return false;
        }
        if !layout.is_measured() {
            warn!("ignoring {kind:?} drag start, track not measured");
            return false;
        }
        let start = match kind {
            DragKind::Position => extent.offset,
            DragKind::Width => extent.width,
        };
        debug!("{kind:?} drag started at {start}");
        self.state = GestureState::Dragging {
            kind,
            context: GestureContext { start },
            extent,
        };
        true
    }

    /// Move the pointer to `total_dx` px from where the drag started.  Returns
    /// the new live extent, or `None` if the move was ignored
    pub fn drag_to(&mut self, total_dx: f64, layout: &TrackLayout) -> Option<PixelExtent> {
        if !layout.is_measured() || !total_dx.is_finite() {
            return None;
        }
        let GestureState::Dragging {
            kind,
            context,
            mut extent,
        } = self.state
        else {
            return None;
        };

        let month_width = layout.month_width();
        let track_width = layout.track_width();
        let candidate = snap_to_month_boundary(context.start + total_dx, month_width);
        match kind {
            DragKind::Position => {
                extent.offset = clamp_lower_wins(candidate, 0.0, track_width - extent.width);
            }
            DragKind::Width => {
                let max_width = match self.width_clamp {
                    WidthClamp::TrackEdge => track_width - extent.offset,
                    WidthClamp::TrackWidth => track_width,
                };
                extent.width = clamp_lower_wins(candidate, month_width, max_width);
            }
        }
        trace!("{kind:?} drag to {total_dx}: {extent:?}");

        self.state = GestureState::Dragging {
            kind,
            context,
            extent,
        };
        Some(extent)
    }

    /// End the drag, returning the final extent quantized into month bounds.
    ///
    /// Returns `None` if there was no drag.  If the track has lost its
    /// measurement the drag is dropped with no result
    pub fn release(&mut self, layout: &TrackLayout) -> Option<(i64, i64)> {
        let extent = self.extent()?;
        self.state = GestureState::Idle;
        if !layout.is_measured() {
            warn!("dropping drag release, track not measured");
            return None;
        }
        let bounds = extent.to_month_bounds(layout.month_width());
        debug!("drag released at {extent:?} -> {bounds:?}");
        Some(bounds)
    }

    /// Abandon the drag in progress.  Returns whether there was one
    pub fn cancel(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        if was_dragging {
            debug!("drag cancelled");
        }
        self.state = GestureState::Idle;
        was_dragging
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn layout() -> TrackLayout {
        let mut layout = TrackLayout::default();
        layout.measure(360.0);
        layout
    }

    /// `[4, 6]` on a 360px track
    fn may_to_july() -> PixelExtent {
        PixelExtent {
            offset: 120.0,
            width: 90.0,
        }
    }

    #[test]
    fn position_drag() {
        let layout = layout();
        let mut gesture = GestureController::default();
        assert!(gesture.begin(DragKind::Position, may_to_july(), &layout));
        assert_eq!(gesture.kind(), Some(DragKind::Position));

        let extent = gesture.drag_to(90.0, &layout).unwrap();
        assert_eq!(extent.offset, 210.0);
        assert_eq!(extent.width, 90.0);

        assert_eq!(gesture.release(&layout), Some((7, 9)));
        assert_eq!(gesture.state(), GestureState::Idle);
    }

    #[test]
    fn moves_are_relative_to_the_drag_start() {
        let layout = layout();
        let mut gesture = GestureController::default();
        gesture.begin(DragKind::Position, may_to_july(), &layout);
        for step in 1..=100 {
            gesture.drag_to(f64::from(step) * 0.3, &layout);
        }
        // 30px total: exactly one month
        assert_eq!(gesture.extent().unwrap().offset, 150.0);
    }

    #[test]
    fn position_drag_snaps_to_nearest_month() {
        let layout = layout();
        let mut gesture = GestureController::default();
        gesture.begin(DragKind::Position, may_to_july(), &layout);
        assert_eq!(gesture.drag_to(14.0, &layout).unwrap().offset, 120.0);
        assert_eq!(gesture.drag_to(15.0, &layout).unwrap().offset, 150.0);
        assert_eq!(gesture.drag_to(-16.0, &layout).unwrap().offset, 90.0);
    }

    #[test]
    fn position_drag_stays_on_the_track() {
        let layout = layout();
        let mut gesture = GestureController::default();
        gesture.begin(DragKind::Position, may_to_july(), &layout);
        assert_eq!(gesture.drag_to(1000.0, &layout).unwrap().offset, 270.0);
        assert_eq!(gesture.drag_to(-1000.0, &layout).unwrap().offset, 0.0);
        assert_eq!(gesture.release(&layout), Some((0, 2)));
    }

    #[test]
    fn width_drag() {
        let layout = layout();
        let mut gesture = GestureController::default();
        gesture.begin(DragKind::Width, may_to_july(), &layout);
        let extent = gesture.drag_to(60.0, &layout).unwrap();
        assert_eq!(extent.offset, 120.0);
        assert_eq!(extent.width, 150.0);
        assert_eq!(gesture.release(&layout), Some((4, 8)));
    }

    #[test]
    fn width_drag_keeps_at_least_one_month() {
        let layout = layout();
        let mut gesture = GestureController::default();
        gesture.begin(DragKind::Width, may_to_july(), &layout);
        assert_eq!(gesture.drag_to(-500.0, &layout).unwrap().width, 30.0);
        assert_eq!(gesture.release(&layout), Some((4, 4)));
    }

    #[test]
    fn width_drag_stops_at_the_track_edge() {
        let layout = layout();
        let mut gesture = GestureController::new(WidthClamp::TrackEdge);
        gesture.begin(DragKind::Width, may_to_july(), &layout);
        let extent = gesture.drag_to(1000.0, &layout).unwrap();
        assert_eq!(extent.width, 240.0);
        assert_eq!(extent.max_x(), 360.0);
        assert_eq!(gesture.release(&layout), Some((4, 11)));
    }

    #[test]
    fn width_drag_bounded_by_track_width_alone() {
        let layout = layout();
        let mut gesture = GestureController::new(WidthClamp::TrackWidth);
        gesture.begin(DragKind::Width, may_to_july(), &layout);
        let extent = gesture.drag_to(1000.0, &layout).unwrap();
        assert_eq!(extent.width, 360.0);
        assert!(extent.max_x() > layout.track_width());

        // The committed end still can't pass December
        assert_eq!(gesture.release(&layout), Some((4, 11)));
    }

    #[test]
    fn width_drag_to_full_year() {
        let layout = layout();
        let mut gesture = GestureController::default();
        let january = PixelExtent {
            offset: 0.0,
            width: 30.0,
        };
        gesture.begin(DragKind::Width, january, &layout);
        assert_eq!(gesture.drag_to(330.0, &layout).unwrap().width, 360.0);
        assert_eq!(gesture.release(&layout), Some((0, 11)));
    }

    #[test]
    fn only_one_drag_at_a_time() {
        let layout = layout();
        let mut gesture = GestureController::default();
        assert!(gesture.begin(DragKind::Width, may_to_july(), &layout));
        assert!(!gesture.begin(DragKind::Position, may_to_july(), &layout));
        assert_eq!(gesture.kind(), Some(DragKind::Width));
    }

    #[test]
    fn nothing_happens_before_measurement() {
        let layout = TrackLayout::default();
        let mut gesture = GestureController::default();
        assert!(!gesture.begin(DragKind::Position, may_to_july(), &layout));
        assert_eq!(gesture.drag_to(30.0, &layout), None);
        assert_eq!(gesture.release(&layout), None);
    }

    #[test]
    fn moves_and_releases_while_idle_are_ignored() {
        let layout = layout();
        let mut gesture = GestureController::default();
        assert_eq!(gesture.drag_to(30.0, &layout), None);
        assert_eq!(gesture.release(&layout), None);
        assert!(!gesture.cancel());
    }

    #[test]
    fn cancel() {
        let layout = layout();
        let mut gesture = GestureController::default();
        gesture.begin(DragKind::Position, may_to_july(), &layout);
        gesture.drag_to(90.0, &layout);
        assert!(gesture.cancel());
        assert_eq!(gesture.extent(), None);
        assert_eq!(gesture.release(&layout), None);
    }

    #[test]
    fn non_finite_moves_are_ignored() {
        let layout = layout();
        let mut gesture = GestureController::default();
        gesture.begin(DragKind::Position, may_to_july(), &layout);
        assert_eq!(gesture.drag_to(f64::NAN, &layout), None);
        assert_eq!(gesture.extent(), Some(may_to_july()));
    }
}
