use super::stop::{TabStop, validate_interval};
use crate::{LayoutConfig, LayoutError};
use lectern_style::TabStopSpec;
use lectern_style::parsers::{parse_tab_stops, run_parser};
use lectern_types::units::is_beyond;
use serde::Deserialize;
use std::str::FromStr;

/// Spacing of the implicit tab grid when nothing else is configured (half an inch).
pub const DEFAULT_TAB_INTERVAL: f32 = 36.0;

/// The explicit tab stops of a paragraph plus the interval of the implicit grid
/// that takes over once the cursor has passed all of them.
///
/// Explicit stops are expected in ascending position order. [`TabSettings::new`]
/// keeps them as given; [`TabSettings::insert_stop`] maintains the order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "TabSettingsDef")]
pub struct TabSettings {
    stops: Vec<TabStop>,
    interval: f32,
}

#[derive(Deserialize)]
struct TabSettingsDef {
    #[serde(default = "default_interval")]
    interval: f32,
    #[serde(default)]
    stops: Vec<TabStopSpec>,
}

fn default_interval() -> f32 {
    DEFAULT_TAB_INTERVAL
}

impl TryFrom<TabSettingsDef> for TabSettings {
    type Error = LayoutError;

    fn try_from(def: TabSettingsDef) -> Result<Self, Self::Error> {
        TabSettings::new(def.stops.into_iter().map(TabStop::from).collect(), def.interval)
    }
}

impl Default for TabSettings {
    fn default() -> Self {
        Self {
            stops: Vec::new(),
            interval: DEFAULT_TAB_INTERVAL,
        }
    }
}

impl TabSettings {
    pub fn new(stops: Vec<TabStop>, interval: f32) -> Result<Self, LayoutError> {
        let interval = validate_interval(interval)?;
        Ok(Self { stops, interval })
    }

    /// Only a uniform grid, no explicit stops.
    pub fn with_interval(interval: f32) -> Result<Self, LayoutError> {
        Self::new(Vec::new(), interval)
    }

    pub fn from_stops(stops: Vec<TabStop>) -> Self {
        Self {
            stops,
            interval: DEFAULT_TAB_INTERVAL,
        }
    }

    pub fn from_config(config: &LayoutConfig) -> Result<Self, LayoutError> {
        Self::with_interval(config.tab_interval)
    }

    pub fn stops(&self) -> &[TabStop] {
        &self.stops
    }

    pub fn interval(&self) -> f32 {
        self.interval
    }

    pub fn set_interval(&mut self, interval: f32) -> Result<(), LayoutError> {
        self.interval = validate_interval(interval)?;
        Ok(())
    }

    pub fn set_stops(&mut self, stops: Vec<TabStop>) {
        self.stops = stops;
    }

    /// Inserts a stop after every stop at or before its position.
    pub fn insert_stop(&mut self, stop: TabStop) {
        let at = self
            .stops
            .partition_point(|existing| existing.position() <= stop.position());
        self.stops.insert(at, stop);
    }

    /// Returns the stop the next tab character jumps to from `current_position`.
    ///
    /// The first explicit stop lying more than 0.001 beyond the cursor wins; a stop
    /// at the cursor itself is never selected again. Without one, the next line of
    /// the implicit grid is used. The result is always a copy.
    pub fn next_stop(&self, current_position: f32) -> TabStop {
        match self
            .stops
            .iter()
            .find(|stop| is_beyond(stop.position(), current_position))
        {
            Some(stop) => stop.clone(),
            None => {
                log::trace!(
                    "No explicit tab stop after {}, using {}pt grid",
                    current_position,
                    self.interval
                );
                TabStop::next_on_grid(current_position, self.interval)
            }
        }
    }

    /// Like [`TabSettings::next_stop`], falling back to the default grid when the
    /// paragraph has no tab settings at all.
    pub fn next_stop_or_default(settings: Option<&TabSettings>, current_position: f32) -> TabStop {
        match settings {
            Some(settings) => settings.next_stop(current_position),
            None => TabStop::next_on_grid(current_position, DEFAULT_TAB_INTERVAL),
        }
    }
}

impl FromStr for TabSettings {
    type Err = LayoutError;

    /// Parses a declaration such as `"72pt right, 144pt anchor ','"` using the
    /// default interval.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let specs = run_parser(parse_tab_stops, s)?;
        Ok(Self::from_stops(specs.into_iter().map(TabStop::from).collect()))
    }
}
