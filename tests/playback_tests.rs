// Integration tests for the playback controller over produced traces

use std::cell::RefCell;
use std::rc::Rc;

use sortscope::algorithms::Algorithm;
use sortscope::playback::{Advance, Highlight, PlaybackController, StepObserver};
use sortscope::step::{Step, StepKind};
use sortscope::trace::{produce_trace_for, Trace};

fn loaded(algorithm: Algorithm, input: &[i64]) -> PlaybackController {
    let mut controller = PlaybackController::new();
    controller.load(produce_trace_for(algorithm, input).expect("trace production failed"));
    controller
}

#[test]
fn test_backward_at_start_is_noop() {
    let mut controller = loaded(Algorithm::Bubble, &[5, 3, 8, 1]);
    assert!(!controller.step_backward());
    assert_eq!(controller.cursor(), None);
    assert_eq!(controller.view().snapshot, &[5, 3, 8, 1][..]);
}

#[test]
fn test_forward_at_end_signals_completion() {
    let mut controller = loaded(Algorithm::Heap, &[4, 10, 3, 5, 1]);
    controller.jump_to_end();
    let last = controller.cursor();
    assert!(!controller.is_complete());

    assert_eq!(controller.step_forward(), Advance::Complete);
    assert_eq!(controller.cursor(), last);
    assert!(controller.is_complete());
    assert_eq!(controller.view().snapshot, &[1, 3, 4, 5, 10][..]);
}

#[test]
fn test_view_is_a_function_of_position() {
    let mut controller = loaded(Algorithm::Quick, &[7, 2, 9, 4, 4, 1, 8]);
    let total = controller.total();

    // Record the view at every position on a straight forward pass
    let mut expected = Vec::new();
    while controller.step_forward() == Advance::Moved {
        let view = controller.view();
        expected.push((
            view.snapshot.to_vec(),
            view.comparisons,
            view.swaps,
            view.sorted.clone(),
            view.highlights.clone(),
        ));
    }
    assert_eq!(expected.len(), total);

    // Revisit in a scrambled order
    for position in [total - 1, 0, total / 2, 3, total - 2, 1, total / 3] {
        controller.seek(Some(position));
        let view = controller.view();
        let (snapshot, comparisons, swaps, sorted, highlights) = &expected[position];
        assert_eq!(view.snapshot, snapshot.as_slice());
        assert_eq!(view.comparisons, *comparisons);
        assert_eq!(view.swaps, *swaps);
        assert_eq!(&view.sorted, sorted);
        assert_eq!(&view.highlights, highlights);
    }
}

#[test]
fn test_running_totals_match_trace_totals() {
    let mut controller = loaded(Algorithm::Selection, &[6, 5, 4, 3, 2, 1]);
    controller.jump_to_end();
    let view = controller.view();
    assert_eq!(view.comparisons, controller.trace().comparisons());
    assert_eq!(view.swaps, controller.trace().swaps());
    assert_eq!(view.sorted.len(), 6);
}

#[test]
fn test_sorted_markers_accumulate_and_highlights_do_not() {
    let mut controller = loaded(Algorithm::Bubble, &[3, 2, 1]);
    let mut sorted_before = 0;
    while controller.step_forward() == Advance::Moved {
        let view = controller.view();
        assert!(view.sorted.len() >= sorted_before);
        sorted_before = view.sorted.len();

        let step = controller.current_step().expect("cursor is on a step");
        match Highlight::for_kind(step.kind) {
            Some(highlight) => {
                assert_eq!(view.highlighted(highlight), step.indices.as_slice());
                assert_eq!(view.highlights.len(), 1);
            }
            None => assert!(view.highlights.is_empty()),
        }
    }
}

#[test]
fn test_empty_trace_disables_navigation() {
    let mut controller = PlaybackController::new();
    controller.load(Trace::empty(Some(Algorithm::Merge), &[]));
    assert_eq!(controller.step_forward(), Advance::Complete);
    assert!(!controller.step_backward());
    controller.jump_to_end();
    assert_eq!(controller.cursor(), None);
    assert_eq!(controller.view().total, 0);
}

#[derive(Default)]
struct Log {
    kinds: Vec<StepKind>,
    completions: usize,
    resets: usize,
}

struct Recorder(Rc<RefCell<Log>>);

impl StepObserver for Recorder {
    fn on_step(&mut self, step: &Step) {
        self.0.borrow_mut().kinds.push(step.kind);
    }

    fn on_complete(&mut self) {
        self.0.borrow_mut().completions += 1;
    }

    fn on_reset(&mut self) {
        self.0.borrow_mut().resets += 1;
    }
}

#[test]
fn test_observer_is_told_about_every_applied_step() {
    let log = Rc::new(RefCell::new(Log::default()));
    let mut controller = PlaybackController::with_observer(Box::new(Recorder(log.clone())));
    controller.load(produce_trace_for(Algorithm::Insertion, &[2, 1]).expect("trace production failed"));

    while controller.step_forward() == Advance::Moved {}
    controller.step_forward();
    controller.reset();

    let log = log.borrow();
    let expected: Vec<StepKind> = produce_trace_for(Algorithm::Insertion, &[2, 1])
        .expect("trace production failed")
        .steps()
        .iter()
        .map(|s| s.kind)
        .collect();
    assert_eq!(log.kinds, expected);
    assert_eq!(log.completions, 1);
    assert_eq!(log.resets, 1);
    assert_eq!(controller.total(), 0);
}
