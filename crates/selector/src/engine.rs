// SPDX-License-Identifier: MIT

//!
//! The `month-range-selector` engine
//!

mod config;
mod consts;
mod events;
mod extent;
mod gesture;
mod helpers;
mod layout;
mod range_state;

pub(crate) use helpers::*;

pub use config::*;
pub use consts::*;
pub use events::*;
pub use extent::*;
pub use gesture::*;
pub use layout::*;
pub use range_state::*;

use log::{debug, info, trace};
use month_range_core::{MonthRange, Period};

/// The core `month-range-selector` engine.  This owns the committed range and
/// wires pointer and tap input through to it, common to all frontends.
///
/// Frontends must call [`Engine::measure`] with the track's width before any
/// drag is accepted.
pub struct Engine {
    /// The measured track
    layout: TrackLayout,

    /// The committed selection (the only source of truth)
    range_state: RangeState,

    /// The drag in progress (if any)
    gesture: GestureController,

    /// The width (px) of the resize handle at the trailing edge
    handle_width: f64,

    /// Called with a copy of the range every time one is committed
    on_range_change: Option<Box<dyn FnMut(MonthRange)>>,

    /// All events that an external programme might be interested in
    events: Vec<SelectorEvent>,
}

impl Engine {
    /// Create a new engine.  An invalid initial range in the config is clamped
    /// into a valid one
    pub fn new(config: &SelectorConfig) -> Self {
        let initial_range = config.initial_range();
        info!("Constructing a new selector engine with range {initial_range}");
        Self {
            layout: TrackLayout::default(),
            range_state: RangeState::new(initial_range),
            gesture: GestureController::new(config.width_clamp),
            handle_width: config.handle_width_px(),
            on_range_change: None,
            events: Vec::new(),
        }
    }

    /// Set the function called every time a range is committed.  It is called
    /// once per drag release or period tap, never while a drag is moving
    pub fn set_on_range_change<T>(&mut self, on_range_change: T)
    where
        T: 'static + FnMut(MonthRange),
    {
        self.on_range_change = Some(Box::new(on_range_change));
    }

    /// To be called whenever the track is laid out.  The committed range is
    /// unchanged; its pixel extent follows the new width.  A drag in progress
    /// is cancelled because its captured start is in the old pixels
    pub fn measure(&mut self, track_width: f64) {
        if track_width == self.layout.track_width() {
            return;
        }
        if self.layout.measure(track_width) && self.gesture.cancel() {
            debug!("track re-measured mid-drag");
        }
    }

    pub fn is_measured(&self) -> bool {
        self.layout.is_measured()
    }

    pub fn layout(&self) -> TrackLayout {
        self.layout
    }

    /// The committed range
    pub fn range(&self) -> MonthRange {
        self.range_state.range()
    }

    /// The period of the committed range (for showing which tab is active)
    pub fn period(&self) -> Period {
        self.range_state.period()
    }

    /// The extent to draw: the live one while dragging, otherwise the one
    /// covering the committed range
    pub fn extent(&self) -> PixelExtent {
        self.gesture
            .extent()
            .unwrap_or_else(|| self.committed_extent())
    }

    /// The extent covering the committed range
    pub fn committed_extent(&self) -> PixelExtent {
        PixelExtent::from_range(self.range(), self.layout.month_width())
    }

    /// The kind of drag in progress (if any)
    pub fn drag_kind(&self) -> Option<DragKind> {
        self.gesture.kind()
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    /// The area (px) of the trailing resize handle, as `(min_x, max_x)`.  The
    /// handle never takes more than half of the selection, so that there is
    /// always somewhere to grab to move it
    pub fn handle_span(&self) -> (f64, f64) {
        let extent = self.extent();
        let width = self.handle_width.min(extent.width / 2.0);
        (extent.max_x() - width, extent.max_x())
    }

    /// Which drag (if any) a pointer pressed at `x` px along the track would
    /// start.  The resize handle sits inside the selection, so it is checked
    /// first
    pub fn hit_test(&self, x: f64) -> Option<DragKind> {
        if !self.layout.is_measured() {
            return None;
        }
        let (handle_min, handle_max) = self.handle_span();
        if (handle_min..=handle_max).contains(&x) {
            return Some(DragKind::Width);
        }
        if self.extent().contains_x(x) {
            return Some(DragKind::Position);
        }
        None
    }

    /// A pointer was pressed at `x` px along the track.  Starts whichever drag
    /// is under it, returning its kind
    pub fn pointer_down(&mut self, x: f64) -> Option<DragKind> {
        if self.gesture.is_dragging() {
            debug!("ignoring pointer down at {x}, drag already in progress");
            return None;
        }
        let kind = self.hit_test(x)?;
        self.begin_drag(kind).then_some(kind)
    }

    /// Start moving the whole selection
    pub fn begin_position_drag(&mut self) -> bool {
        self.begin_drag(DragKind::Position)
    }

    /// Start resizing the selection from its trailing edge
    pub fn begin_width_drag(&mut self) -> bool {
        self.begin_drag(DragKind::Width)
    }

    fn begin_drag(&mut self, kind: DragKind) -> bool {
        let extent = self.committed_extent();
        self.gesture.begin(kind, extent, &self.layout)
    }

    /// The pointer has moved `total_dx` px since the drag started.  Only the
    /// live extent changes; nothing is committed
    pub fn drag_to(&mut self, total_dx: f64) {
        if self.gesture.drag_to(total_dx, &self.layout).is_none() {
            trace!("ignoring drag to {total_dx}");
        }
    }

    /// The pointer was released.  Commits the quantized range and returns it,
    /// or returns `None` if there was no drag
    pub fn release(&mut self) -> Option<MonthRange> {
        let (start, end) = self.gesture.release(&self.layout)?;
        let range = self.range_state.commit_clamped(start, end);
        self.emit_range_changed(range);
        Some(range)
    }

    /// The drag was interrupted.  The committed range is left untouched
    pub fn cancel(&mut self) {
        self.gesture.cancel();
    }

    /// A period tab was tapped.  Commits and returns the period's canonical
    /// range, or returns `None` for [`Period::Custom`] (which only reflects the
    /// current range) and while a drag is in progress
    pub fn select_period(&mut self, period: Period) -> Option<MonthRange> {
        if self.gesture.is_dragging() {
            debug!("ignoring {period} tap, drag in progress");
            return None;
        }
        let Some(range) = period.apply(self.range()) else {
            debug!("{period} tapped, range left as {}", self.range());
            return None;
        };
        debug!("{period} tapped");
        self.range_state.replace(range);
        self.emit_range_changed(range);
        Some(range)
    }

    /// Get all events for dispatching & handling
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, SelectorEvent> {
        self.events.drain(..)
    }

    fn emit_range_changed(&mut self, range: MonthRange) {
        let period = Period::classify(range);
        debug!("range changed to {range} ({period})");
        self.events
            .push(SelectorEvent::RangeChanged { range, period });
        if let Some(on_range_change) = self.on_range_change.as_mut() {
            on_range_change(range);
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(&SelectorConfig::default())
    }
}
