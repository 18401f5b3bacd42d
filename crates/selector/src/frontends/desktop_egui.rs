// SPDX-License-Identifier: MIT

//!
//! The egui frontend
//!

use crate::{DragKind, Engine, SelectorConfig, SelectorEvent};
use eframe::egui::{
    Align2, Button, Color32, CursorIcon, FontId, Key, Pos2, Rect, Response, Sense, Ui, Vec2,
};
use log::*;
use month_range_core::{Month, MonthRange, Period};

/// Height (px) of the month track
const TRACK_HEIGHT: f32 = 64.0;

/// Corner radius (px) of the track and the selection
const CORNER_RADIUS: f32 = 30.0;

/// How long (s) the drawn selection takes to catch up with the engine
const EASING_SECS: f32 = 0.12;

/// Radius (px) of the grip dots on the resize handle
const DOT_RADIUS: f32 = 2.0;

/// Vertical gap (px) between the grip dots
const DOT_SPACING: f32 = 7.0;

const TRACK_COLOUR: Color32 = Color32::from_rgb(247, 248, 252);
const SELECTION_COLOUR: Color32 = Color32::WHITE;
const DOT_COLOUR: Color32 = Color32::from_rgb(192, 192, 192);
const MONTH_TEXT_COLOUR: Color32 = Color32::BLACK;

/// The month range selector for use in `egui` applications
pub struct MonthRangeSelectorEgui {
    /// The underlying selector [`Engine`].
    engine: Engine,

    /// Screen x-position where the current drag was pressed
    press_x: Option<f32>,
}

impl MonthRangeSelectorEgui {
    /// Create a new egui selector
    pub fn new(config: &SelectorConfig) -> Self {
        info!("Constructing a new MonthRangeSelectorEgui");
        Self {
            engine: Engine::new(config),
            press_x: None,
        }
    }

    pub fn set_on_range_change<T>(&mut self, on_range_change: T)
    where
        T: 'static + FnMut(MonthRange),
    {
        self.engine.set_on_range_change(on_range_change);
    }

    pub fn range(&self) -> MonthRange {
        self.engine.range()
    }

    pub fn period(&self) -> Period {
        self.engine.period()
    }

    pub fn drain_events(&mut self) -> std::vec::Drain<'_, SelectorEvent> {
        self.engine.drain_events()
    }

    /// Draw the period tabs and the month track, handling any input
    pub fn draw(&mut self, ui: &mut Ui) {
        draw_period_tabs(ui, &mut self.engine);
        draw_track(ui, &mut self.engine, &mut self.press_x);
    }
}

/// Draw one tab per [`Period`], highlighting the period of the committed range
fn draw_period_tabs(ui: &mut Ui, engine: &mut Engine) {
    ui.horizontal(|ui| {
        let active = engine.period();
        for period in Period::ALL {
            let tab = ui.add(Button::selectable(active == period, period.to_string()));
            if tab.clicked() {
                engine.select_period(period);
            }
        }
    });
}

/// Draw the month track with the selection over it
fn draw_track(ui: &mut Ui, engine: &mut Engine, press_x: &mut Option<f32>) {
    let width = ui.available_width();
    let (response, painter) = ui.allocate_painter(Vec2::new(width, TRACK_HEIGHT), Sense::drag());
    let track_rect = response.rect;
    engine.measure(track_rect.width().into());

    handle_pointer(ui, engine, &response, press_x);

    painter.rect_filled(track_rect, CORNER_RADIUS, TRACK_COLOUR);

    // Ease the drawn selection towards the engine's.  This is only ever drawn,
    // never fed back into the engine
    let extent = engine.extent();
    let ctx = ui.ctx();
    let offset = ctx.animate_value_with_time(
        response.id.with("offset"),
        extent.offset as f32,
        EASING_SECS,
    );
    let selection_width =
        ctx.animate_value_with_time(response.id.with("width"), extent.width as f32, EASING_SECS);
    let selection_rect = Rect::from_min_size(
        Pos2::new(track_rect.min.x + offset, track_rect.min.y + 1.0),
        Vec2::new(selection_width, track_rect.height() - 2.0),
    );
    painter.rect_filled(selection_rect, CORNER_RADIUS, SELECTION_COLOUR);

    // Grip dots, centred in the resize handle
    let (handle_min, handle_max) = engine.handle_span();
    let handle_width = (handle_max - handle_min) as f32;
    let dots_x = selection_rect.max.x - handle_width / 2.0;
    for row in -1..=1 {
        let centre = Pos2::new(
            dots_x,
            selection_rect.center().y + row as f32 * DOT_SPACING,
        );
        painter.circle_filled(centre, DOT_RADIUS, DOT_COLOUR);
    }

    // Month names sit on top of the selection
    let month_width = engine.layout().month_width() as f32;
    for month in Month::all() {
        let x = track_rect.min.x + (f32::from(month.value()) + 0.5) * month_width;
        painter.text(
            Pos2::new(x, track_rect.center().y),
            Align2::CENTER_CENTER,
            month.short_name(),
            FontId::proportional(16.0),
            MONTH_TEXT_COLOUR,
        );
    }
}

/// Feed the pointer's drag over the track into the engine
fn handle_pointer(ui: &Ui, engine: &mut Engine, response: &Response, press_x: &mut Option<f32>) {
    let track_min_x = response.rect.min.x;

    // Show what a press would do
    if let Some(hover) = response.hover_pos() {
        match engine.drag_kind().or(engine.hit_test((hover.x - track_min_x).into())) {
            Some(DragKind::Width) => ui.ctx().set_cursor_icon(CursorIcon::ResizeHorizontal),
            Some(DragKind::Position) => ui.ctx().set_cursor_icon(CursorIcon::Grab),
            None => {}
        }
    }

    // Start of a drag: work out which handle was grabbed from where the
    // pointer was first pressed (not where it is now)
    if response.drag_started() {
        if let Some(origin) = ui.input(|i| i.pointer.press_origin()) {
            if engine.pointer_down((origin.x - track_min_x).into()).is_some() {
                *press_x = Some(origin.x);
            }
        }
    }

    // Drag in progress
    if response.dragged() {
        if let (Some(start_x), Some(pointer)) = (*press_x, response.interact_pointer_pos()) {
            engine.drag_to((pointer.x - start_x).into());
        }
    }

    // Escape abandons the drag
    if engine.is_dragging() && ui.input(|i| i.key_pressed(Key::Escape)) {
        engine.cancel();
        *press_x = None;
    }

    // End of the drag
    if response.drag_stopped() {
        if let Some(range) = engine.release() {
            debug!("egui selector released at {range}");
        }
        *press_x = None;
    }
}
