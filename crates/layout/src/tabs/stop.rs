use crate::LayoutError;
use lectern_style::tab::DEFAULT_ANCHOR_CHAR;
use lectern_style::{Leader, TabAlignment, TabStopSpec};
use lectern_types::{from_thousandths, to_thousandths};

/// One tab position together with the rule that aligns content against it.
#[derive(Debug, Clone, PartialEq)]
pub struct TabStop {
    position: f32,
    alignment: TabAlignment,
    leader: Option<Leader>,
    anchor_char: char,
}

impl TabStop {
    /// A left-aligned stop at `position`.
    pub fn new(position: f32) -> Self {
        Self::with_alignment(position, TabAlignment::Left)
    }

    pub fn with_alignment(position: f32, alignment: TabAlignment) -> Self {
        Self {
            position,
            alignment,
            leader: None,
            anchor_char: DEFAULT_ANCHOR_CHAR,
        }
    }

    pub fn leader(mut self, leader: Leader) -> Self {
        self.leader = Some(leader);
        self
    }

    pub fn anchor_char(mut self, anchor_char: char) -> Self {
        self.anchor_char = anchor_char;
        self
    }

    /// Returns a copy of this stop placed at `position`.
    pub fn moved_to(&self, position: f32) -> Self {
        Self {
            position,
            ..self.clone()
        }
    }

    /// Creates the implicit stop following `current_position` on a uniform grid.
    ///
    /// Both arguments are rounded to three decimals first. A cursor sitting exactly
    /// on a grid line resolves to the next line, never to itself.
    pub fn synthesize(current_position: f32, interval: f32) -> Result<Self, LayoutError> {
        let interval = validate_interval(interval)?;
        Ok(Self::next_on_grid(current_position, interval))
    }

    /// `interval` must already be validated.
    pub(crate) fn next_on_grid(current_position: f32, interval: f32) -> Self {
        let current = to_thousandths(current_position);
        let interval = to_thousandths(interval);
        // rem_euclid keeps the step within one interval for negative cursors too
        let step = interval - current.rem_euclid(interval);
        Self::new(from_thousandths(current.saturating_add(step)))
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn alignment(&self) -> TabAlignment {
        self.alignment
    }

    pub fn leader_pattern(&self) -> Option<Leader> {
        self.leader
    }

    pub fn anchor(&self) -> char {
        self.anchor_char
    }

    /// Computes where the content following a tab starts.
    ///
    /// * `tab_position` - where the tab character begins.
    /// * `current_position` - where the cursor would be after the tabbed content,
    ///   measured as if the tab were absent.
    /// * `anchor_position` - where the anchor character falls within that content.
    ///   `None` or NaN means the content has no anchor character.
    pub fn resolve(
        &self,
        tab_position: f32,
        current_position: f32,
        anchor_position: Option<f32>,
    ) -> f32 {
        let text_width = current_position - tab_position;
        let resolved = match self.alignment {
            TabAlignment::Left => self.position,
            TabAlignment::Right => self.end_at_stop(tab_position, text_width),
            TabAlignment::Center => self.end_at_stop(tab_position, text_width / 2.0),
            TabAlignment::Anchor => match anchor_position.filter(|a| !a.is_nan()) {
                Some(anchor) if anchor < self.position => {
                    self.position - (anchor - tab_position)
                }
                Some(_) => tab_position,
                None => self.end_at_stop(tab_position, text_width),
            },
        };
        log::trace!(
            "Resolved {:?} tab at {} (tab {}, cursor {}) to {}",
            self.alignment,
            self.position,
            tab_position,
            current_position,
            resolved
        );
        resolved
    }

    /// Shifts content so that `extent` past its start lands on the stop, unless the
    /// content already reaches it.
    fn end_at_stop(&self, tab_position: f32, extent: f32) -> f32 {
        if tab_position + extent < self.position {
            self.position - extent
        } else {
            tab_position
        }
    }
}

impl From<TabStopSpec> for TabStop {
    fn from(spec: TabStopSpec) -> Self {
        Self {
            position: spec.position,
            alignment: spec.alignment,
            leader: spec.leader,
            anchor_char: spec.anchor_char,
        }
    }
}

/// Rejects intervals that cannot form a grid, including ones that round to zero.
pub(crate) fn validate_interval(interval: f32) -> Result<f32, LayoutError> {
    if interval.is_finite() && to_thousandths(interval) > 0 {
        Ok(interval)
    } else {
        Err(LayoutError::InvalidConfiguration(format!(
            "tab interval must be a positive number, got {}",
            interval
        )))
    }
}
