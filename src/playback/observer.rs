//! Hooks invoked as the playback cursor moves

use crate::step::Step;

/// Receives playback events; every method defaults to doing nothing
pub trait StepObserver {
    /// A step became the current one (moving in either direction)
    fn on_step(&mut self, _step: &Step) {}

    /// `step_forward` was called at the end of the trace
    fn on_complete(&mut self) {}

    /// The controller dropped its trace
    fn on_reset(&mut self) {}
}

/// Observer that ignores everything
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentObserver;

impl StepObserver for SilentObserver {}
