//! Playback over a completed trace
//!
//! [`PlaybackController`] owns one [`Trace`] and a cursor. Everything a
//! renderer sees through [`PlaybackController::view`] is a function of the
//! trace and the cursor alone: running counters and the sorted set are read
//! from prefix tables built once in [`PlaybackController::load`], so moving
//! back and forth any number of times always shows the same state for the
//! same position.

pub mod observer;

pub use observer::{SilentObserver, StepObserver};

use crate::step::{Step, StepKind};
use crate::trace::Trace;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::trace;

/// Highlight category a renderer colours an index by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Highlight {
    Comparing,
    Swapping,
    Pivot,
    Merging,
    Selected,
    /// Every other index-bearing step kind
    Active,
}

impl Highlight {
    /// `None` for `sorted`, which feeds the sorted set instead
    pub fn for_kind(kind: StepKind) -> Option<Highlight> {
        match kind {
            StepKind::Compare => Some(Highlight::Comparing),
            StepKind::Swap => Some(Highlight::Swapping),
            StepKind::Pivot => Some(Highlight::Pivot),
            StepKind::Merge => Some(Highlight::Merging),
            StepKind::Select => Some(Highlight::Selected),
            StepKind::Sorted => None,
            _ => Some(Highlight::Active),
        }
    }
}

/// Result of [`PlaybackController::step_forward`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Moved,
    /// Already at the last step (or nothing loaded); the cursor did not move
    Complete,
}

/// Everything a renderer needs for the current position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View<'a> {
    pub snapshot: &'a [i64],
    pub highlights: FxHashMap<Highlight, Vec<usize>>,
    pub sorted: FxHashSet<usize>,
    pub description: &'a str,
    pub kind: Option<StepKind>,
    pub cursor: Option<usize>,
    pub total: usize,
    pub comparisons: usize,
    pub swaps: usize,
}

impl View<'_> {
    pub fn highlighted(&self, highlight: Highlight) -> &[usize] {
        self.highlights
            .get(&highlight)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Highlight for one array position, if any
    pub fn highlight_at(&self, index: usize) -> Option<Highlight> {
        self.highlights
            .iter()
            .find(|(_, indices)| indices.contains(&index))
            .map(|(h, _)| *h)
    }

    pub fn is_sorted(&self, index: usize) -> bool {
        self.sorted.contains(&index)
    }

    /// 1-based position for display, 0 before the first step
    pub fn position(&self) -> usize {
        self.cursor.map_or(0, |c| c + 1)
    }
}

pub struct PlaybackController {
    trace: Trace,
    /// `None` until the first step is applied
    cursor: Option<usize>,
    completed: bool,
    /// Running totals including step `k`
    comparisons_prefix: Vec<usize>,
    swaps_prefix: Vec<usize>,
    /// First step that marks each array index sorted
    sorted_at: Vec<Option<usize>>,
    observer: Box<dyn StepObserver>,
}

impl Default for PlaybackController {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaybackController {
    pub fn new() -> Self {
        Self::with_observer(Box::new(SilentObserver))
    }

    pub fn with_observer(observer: Box<dyn StepObserver>) -> Self {
        PlaybackController {
            trace: Trace::default(),
            cursor: None,
            completed: false,
            comparisons_prefix: Vec::new(),
            swaps_prefix: Vec::new(),
            sorted_at: Vec::new(),
            observer,
        }
    }

    /// Replace the trace and rewind to before the first step
    pub fn load(&mut self, trace: Trace) {
        let mut comparisons = 0;
        let mut swaps = 0;
        let mut sorted_at = vec![None; trace.input().len()];
        self.comparisons_prefix = Vec::with_capacity(trace.len());
        self.swaps_prefix = Vec::with_capacity(trace.len());

        for (pos, step) in trace.steps().iter().enumerate() {
            match step.kind {
                StepKind::Compare => comparisons += 1,
                StepKind::Swap => swaps += 1,
                StepKind::Sorted => {
                    for &index in &step.indices {
                        if let Some(slot) = sorted_at.get_mut(index) {
                            slot.get_or_insert(pos);
                        }
                    }
                }
                _ => {}
            }
            self.comparisons_prefix.push(comparisons);
            self.swaps_prefix.push(swaps);
        }

        trace!(steps = trace.len(), "trace loaded");
        self.sorted_at = sorted_at;
        self.trace = trace;
        self.cursor = None;
        self.completed = false;
    }

    /// Drop the trace entirely
    pub fn reset(&mut self) {
        self.load(Trace::default());
        self.observer.on_reset();
    }

    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    pub fn total(&self) -> usize {
        self.trace.len()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Set once `step_forward` has been called on the last step
    pub fn is_complete(&self) -> bool {
        self.completed
    }

    pub fn is_at_end(&self) -> bool {
        self.total() > 0 && self.cursor == Some(self.total() - 1)
    }

    pub fn step_forward(&mut self) -> Advance {
        let next = self.cursor.map_or(0, |c| c + 1);
        if next >= self.total() {
            if !self.completed {
                self.completed = true;
                self.observer.on_complete();
            }
            return Advance::Complete;
        }
        self.move_to(Some(next));
        Advance::Moved
    }

    /// Move back one step; returns `false` without moving at or before the
    /// first step
    pub fn step_backward(&mut self) -> bool {
        match self.cursor {
            Some(c) if c > 0 => {
                self.move_to(Some(c - 1));
                true
            }
            _ => false,
        }
    }

    /// Jump to `position`, clamped to the last step
    pub fn seek(&mut self, position: Option<usize>) {
        let last = self.total().checked_sub(1);
        let target = match (position, last) {
            (Some(p), Some(last)) => Some(p.min(last)),
            _ => None,
        };
        if target.is_some() {
            self.move_to(target);
        } else {
            self.cursor = None;
            self.completed = false;
        }
    }

    /// Back to the initial array, nothing applied
    pub fn rewind_to_start(&mut self) {
        self.seek(None);
    }

    pub fn jump_to_end(&mut self) {
        self.seek(self.total().checked_sub(1));
    }

    fn move_to(&mut self, position: Option<usize>) {
        self.cursor = position;
        self.completed = false;
        if let Some(step) = position.and_then(|p| self.trace.get(p)) {
            trace!(cursor = ?position, kind = %step.kind, "step applied");
            self.observer.on_step(step);
        }
    }

    pub fn current_step(&self) -> Option<&Step> {
        self.cursor.and_then(|c| self.trace.get(c))
    }

    /// Comparisons in `trace[0..=cursor]`
    pub fn comparisons_up_to(&self, cursor: Option<usize>) -> usize {
        cursor
            .and_then(|c| self.comparisons_prefix.get(c))
            .copied()
            .unwrap_or(0)
    }

    /// Swaps in `trace[0..=cursor]`
    pub fn swaps_up_to(&self, cursor: Option<usize>) -> usize {
        cursor
            .and_then(|c| self.swaps_prefix.get(c))
            .copied()
            .unwrap_or(0)
    }

    /// Indices marked sorted anywhere in `trace[0..=cursor]`
    pub fn sorted_up_to(&self, cursor: Option<usize>) -> FxHashSet<usize> {
        let Some(c) = cursor else {
            return FxHashSet::default();
        };
        self.sorted_at
            .iter()
            .enumerate()
            .filter(|(_, at)| at.is_some_and(|at| at <= c))
            .map(|(index, _)| index)
            .collect()
    }

    pub fn view(&self) -> View<'_> {
        let step = self.current_step();
        let mut highlights = FxHashMap::default();
        if let Some(step) = step {
            if let Some(highlight) = Highlight::for_kind(step.kind) {
                if !step.indices.is_empty() {
                    highlights.insert(highlight, step.indices.clone());
                }
            }
        }

        View {
            snapshot: step
                .map(|s| s.snapshot.as_slice())
                .unwrap_or(self.trace.input()),
            highlights,
            sorted: self.sorted_up_to(self.cursor),
            description: step.map(|s| s.description.as_str()).unwrap_or(""),
            kind: step.map(|s| s.kind),
            cursor: self.cursor,
            total: self.total(),
            comparisons: self.comparisons_up_to(self.cursor),
            swaps: self.swaps_up_to(self.cursor),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::produce_trace;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn loaded(algorithm: &str, input: &[i64]) -> PlaybackController {
        let mut controller = PlaybackController::new();
        controller.load(produce_trace(algorithm, input).expect("trace"));
        controller
    }

    #[derive(Default)]
    struct Recorded {
        steps: Vec<StepKind>,
        completions: usize,
        resets: usize,
    }

    struct Recorder(Rc<RefCell<Recorded>>);

    impl StepObserver for Recorder {
        fn on_step(&mut self, step: &Step) {
            self.0.borrow_mut().steps.push(step.kind);
        }
        fn on_complete(&mut self) {
            self.0.borrow_mut().completions += 1;
        }
        fn on_reset(&mut self) {
            self.0.borrow_mut().resets += 1;
        }
    }

    #[test]
    fn test_initial_view_shows_input() {
        let controller = loaded("bubble", &[5, 3, 8, 1]);
        let view = controller.view();
        assert_eq!(view.snapshot, &[5, 3, 8, 1]);
        assert_eq!(view.cursor, None);
        assert_eq!(view.position(), 0);
        assert!(view.highlights.is_empty());
        assert!(view.sorted.is_empty());
        assert_eq!((view.comparisons, view.swaps), (0, 0));
    }

    #[test]
    fn test_step_backward_before_start_is_noop() {
        let mut controller = loaded("bubble", &[2, 1]);
        assert!(!controller.step_backward());
        assert_eq!(controller.cursor(), None);

        controller.step_forward();
        assert!(!controller.step_backward());
        assert_eq!(controller.cursor(), Some(0));
    }

    #[test]
    fn test_step_forward_at_end_signals_completion() {
        let mut controller = loaded("selection", &[3, 1, 2]);
        controller.jump_to_end();
        let end = controller.cursor();
        assert!(!controller.is_complete());
        assert_eq!(controller.step_forward(), Advance::Complete);
        assert_eq!(controller.cursor(), end);
        assert!(controller.is_complete());
    }

    #[test]
    fn test_counters_are_idempotent_under_navigation() {
        let mut controller = loaded("bubble", &[4, 3, 2, 1]);
        for _ in 0..5 {
            controller.step_forward();
        }
        let before = (controller.view().comparisons, controller.view().swaps);
        for _ in 0..3 {
            controller.step_backward();
        }
        for _ in 0..3 {
            controller.step_forward();
        }
        let after = (controller.view().comparisons, controller.view().swaps);
        assert_eq!(before, after);
    }

    #[test]
    fn test_sorted_set_shrinks_when_stepping_back() {
        let mut controller = loaded("bubble", &[2, 1, 3]);
        controller.jump_to_end();
        assert_eq!(controller.view().sorted.len(), 3);
        controller.rewind_to_start();
        controller.step_forward();
        assert!(controller.view().sorted.is_empty());
    }

    #[test]
    fn test_highlights_follow_step_kind() {
        let mut controller = loaded("quick", &[2, 1]);
        controller.step_forward();
        assert_eq!(controller.view().highlighted(Highlight::Pivot), &[1]);
        controller.step_forward();
        let view = controller.view();
        assert_eq!(view.highlighted(Highlight::Comparing), &[0, 1]);
        assert_eq!(view.highlight_at(0), Some(Highlight::Comparing));
        assert!(view.highlighted(Highlight::Pivot).is_empty());
    }

    #[test]
    fn test_load_resets_cursor() {
        let mut controller = loaded("heap", &[3, 1, 2]);
        controller.jump_to_end();
        controller.load(produce_trace("merge", &[9, 8]).expect("trace"));
        assert_eq!(controller.cursor(), None);
        assert_eq!(controller.view().snapshot, &[9, 8]);
    }

    #[test]
    fn test_empty_trace_cannot_move() {
        let mut controller = loaded("nope", &[1, 2, 3]);
        assert_eq!(controller.total(), 0);
        assert_eq!(controller.step_forward(), Advance::Complete);
        assert!(!controller.step_backward());
        controller.jump_to_end();
        assert_eq!(controller.cursor(), None);
    }

    #[test]
    fn test_observer_sees_moves_completion_and_reset() {
        let log = Rc::new(RefCell::new(Recorded::default()));
        let mut controller = PlaybackController::with_observer(Box::new(Recorder(log.clone())));
        controller.load(produce_trace("bubble", &[1, 2]).expect("trace"));

        while controller.step_forward() == Advance::Moved {}
        controller.step_forward();
        controller.step_backward();
        controller.reset();

        let log = log.borrow();
        let total = 1 + 1 + 2; // compare, sorted(1), sweep
        assert_eq!(log.steps.len(), total + 1);
        assert_eq!(log.steps[0], StepKind::Compare);
        assert_eq!(log.completions, 1);
        assert_eq!(log.resets, 1);
    }

    #[test]
    fn test_seek_clamps() {
        let mut controller = loaded("insertion", &[3, 2, 1]);
        controller.seek(Some(10_000));
        assert!(controller.is_at_end());
        assert_eq!(controller.view().snapshot, &[1, 2, 3]);
    }
}
