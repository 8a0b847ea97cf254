//! Step sequencer for multi-step forms
//!
//! Moving backward is always allowed. Moving forward requires every step
//! being left behind to pass validation; the caller supplies the check.

use ratatui::layout::Rect;
use serde::{Deserialize, Serialize};

/// Where the step indicator is drawn relative to the form body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepperOrientation {
    #[default]
    Top,
    Left,
}

impl StepperOrientation {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Top => Self::Left,
            Self::Left => Self::Top,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Left => "left",
        }
    }
}

/// Current step, indicator orientation and hover state of a multi-step form
#[derive(Debug, Clone)]
pub struct StepSequencer {
    total_steps: usize,
    current_step: usize,
    orientation: StepperOrientation,
    hovered_step: Option<usize>,
    hovered_anchor: Option<Rect>,
}

impl StepSequencer {
    /// Create a sequencer positioned on step 1
    pub fn new(total_steps: usize) -> Self {
        Self {
            total_steps: total_steps.max(1),
            current_step: 1,
            orientation: StepperOrientation::default(),
            hovered_step: None,
            hovered_anchor: None,
        }
    }

    pub fn with_orientation(mut self, orientation: StepperOrientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn total_steps(&self) -> usize {
        self.total_steps
    }

    pub fn orientation(&self) -> StepperOrientation {
        self.orientation
    }

    pub fn hovered_step(&self) -> Option<usize> {
        self.hovered_step
    }

    pub fn hovered_anchor(&self) -> Option<Rect> {
        self.hovered_anchor
    }

    pub fn is_first_step(&self) -> bool {
        self.current_step == 1
    }

    pub fn is_last_step(&self) -> bool {
        self.current_step == self.total_steps
    }

    /// Validate the current step and move to the next one if it passes.
    ///
    /// Returns the validation outcome. The last step never moves.
    pub fn advance<F>(&mut self, mut validate: F) -> bool
    where
        F: FnMut(usize) -> bool,
    {
        let valid = validate(self.current_step);
        if valid && self.current_step < self.total_steps {
            self.current_step += 1;
            tracing::debug!(step = self.current_step, "Advanced step");
        }
        valid
    }

    /// Move to the previous step without validating
    pub fn retreat(&mut self) {
        if self.current_step > 1 {
            self.current_step -= 1;
            tracing::debug!(step = self.current_step, "Retreated step");
        }
    }

    /// Jump to `target`.
    ///
    /// Earlier steps are reached directly. For later steps each step from
    /// the current one up to `target - 1` is validated in order, and the
    /// sequencer stops on the first step that fails. Targets outside
    /// `1..=total_steps` are ignored.
    pub fn jump_to<F>(&mut self, target: usize, mut validate: F)
    where
        F: FnMut(usize) -> bool,
    {
        if target == 0 || target > self.total_steps {
            tracing::debug!(target, "Ignoring jump to step outside the form");
            return;
        }

        if target < self.current_step {
            self.current_step = target;
            tracing::debug!(step = target, "Jumped back");
            return;
        }

        for step in self.current_step..target {
            if !validate(step) {
                self.current_step = step;
                tracing::debug!(step, target, "Jump stopped on invalid step");
                return;
            }
        }
        self.current_step = target;
        tracing::debug!(step = target, "Jumped forward");
    }

    pub fn toggle_orientation(&mut self) {
        self.orientation = self.orientation.toggle();
    }

    pub fn show_tooltip(&mut self, step: usize, anchor: Rect) {
        self.hovered_step = Some(step);
        self.hovered_anchor = Some(anchor);
    }

    pub fn hide_tooltip(&mut self) {
        self.hovered_step = None;
        self.hovered_anchor = None;
    }
}
