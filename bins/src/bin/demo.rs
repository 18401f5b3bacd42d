// SPDX-License-Identifier: MIT

//!
//! The month range selector desktop demo
//!

use clap::{Parser, ValueEnum, builder::PossibleValue};
use eframe::App;
use eframe::egui::{CentralPanel, Context, ViewportBuilder};
use month_range_selector::{MonthRangeSelectorEgui, SelectorConfig, SelectorEvent, WidthClamp};
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, TermLogger, TerminalMode,
};
use std::path::PathBuf;

#[macro_use]
extern crate log;
extern crate simplelog;

/// Default window size (px)
const WINDOW_SIZE: [f32; 2] = [720.0, 220.0];

/// Entry point for the demo desktop application
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();

    // Setup logging
    let config_log = ConfigBuilder::new()
        .add_filter_allow_str("month_range")
        .build();

    CombinedLogger::init(vec![TermLogger::new(
        args.log_level,
        config_log,
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )])?;

    // Load the config (CLI months override the file)
    let mut config = match &args.config {
        Some(path) => SelectorConfig::load(path)?,
        None => SelectorConfig::default(),
    };
    if let Some(start) = args.start {
        config.initial_range[0] = start;
    }
    if let Some(end) = args.end {
        config.initial_range[1] = end;
    }
    if let Some(width_clamp) = &args.width_clamp {
        config.width_clamp = width_clamp.into();
    }

    // Create the selector and report every committed range
    let mut selector = MonthRangeSelectorEgui::new(&config);
    selector.set_on_range_change(|range| info!("range changed: {range}"));

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default().with_inner_size(WINDOW_SIZE),
        ..Default::default()
    };

    info!("Launching demo");

    // Run the application
    eframe::run_native(
        "Month Range Selector",
        options,
        Box::new(|_cc| Ok(Box::new(DemoApp::new(selector)))),
    )?;
    Ok(())
}

/// Demo CLI args using [clap]
#[derive(Parser, Debug)]
#[command(version, about = "Month range selector demo")]
pub struct Cli {
    /// Path to a JSON selector config
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Initial start month (0 = January)
    #[arg(long, allow_negative_numbers = true)]
    pub start: Option<i64>,

    /// Initial end month (11 = December)
    #[arg(long, allow_negative_numbers = true)]
    pub end: Option<i64>,

    /// How width drags are bounded
    #[arg(long, value_enum)]
    pub width_clamp: Option<WidthClampArg>,

    /// Log level
    #[arg(long, default_value = "debug")]
    pub log_level: LevelFilter,
}

#[derive(Debug, Clone)]
pub enum WidthClampArg {
    TrackEdge,
    TrackWidth,
}

impl ValueEnum for WidthClampArg {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::TrackEdge, Self::TrackWidth]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self {
            WidthClampArg::TrackEdge => Some(
                PossibleValue::new("track-edge")
                    .help("The selection can't be resized past the end of the track"),
            ),
            WidthClampArg::TrackWidth => Some(
                PossibleValue::new("track-width")
                    .help("The selection's width alone is limited to the track's width"),
            ),
        }
    }
}

impl From<&WidthClampArg> for WidthClamp {
    fn from(value: &WidthClampArg) -> Self {
        match value {
            WidthClampArg::TrackEdge => WidthClamp::TrackEdge,
            WidthClampArg::TrackWidth => WidthClamp::TrackWidth,
        }
    }
}

/// The demo window: the selector plus a readout of what it has committed
struct DemoApp {
    selector: MonthRangeSelectorEgui,

    /// The most recent events, newest last
    recent_events: Vec<SelectorEvent>,
}

impl DemoApp {
    /// How many events are shown
    const MAX_RECENT_EVENTS: usize = 5;

    fn new(selector: MonthRangeSelectorEgui) -> Self {
        Self {
            selector,
            recent_events: Vec::new(),
        }
    }
}

impl App for DemoApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        CentralPanel::default().show(ctx, |ui| {
            self.selector.draw(ui);

            self.recent_events.extend(self.selector.drain_events());
            let excess = self
                .recent_events
                .len()
                .saturating_sub(Self::MAX_RECENT_EVENTS);
            self.recent_events.drain(..excess);

            ui.separator();
            ui.label(format!(
                "Selected {} ({})",
                self.selector.range(),
                self.selector.period()
            ));
            for event in self.recent_events.iter().rev() {
                let SelectorEvent::RangeChanged { range, period } = event;
                ui.weak(format!("committed {range} ({period})"));
            }
        });
    }
}
