// Integration tests for trace production across all algorithms

use sortscope::algorithms::Algorithm;
use sortscope::step::{Step, StepKind};
use sortscope::trace::{produce_trace, produce_trace_for, TraceError};

fn steps_of(algorithm: &str, input: &[i64]) -> Vec<Step> {
    produce_trace(algorithm, input)
        .expect("trace production failed")
        .steps()
        .to_vec()
}

fn count(steps: &[Step], kind: StepKind) -> usize {
    steps.iter().filter(|s| s.kind == kind).count()
}

/// Checks that every change between consecutive snapshots moves a single
/// element left past strictly larger values. Adjacent swaps and merge
/// rotations both have this shape, and equal values can never cross.
fn assert_equal_values_never_cross(input: &[i64], steps: &[Step]) {
    let mut prev = input.to_vec();
    for (pos, step) in steps.iter().enumerate() {
        let next = &step.snapshot;
        let first = (0..prev.len()).find(|&i| prev[i] != next[i]);
        let last = (0..prev.len()).rev().find(|&i| prev[i] != next[i]);
        if let (Some(d), Some(e)) = (first, last) {
            assert_eq!(next[d], prev[e], "step {} is not a left rotation", pos);
            assert_eq!(&next[d + 1..=e], &prev[d..e], "step {} is not a left rotation", pos);
            assert!(
                prev[d..e].iter().all(|&v| v > prev[e]),
                "step {} moved {} past an equal or smaller value",
                pos,
                prev[e]
            );
        }
        prev = next.clone();
    }
}

#[test]
fn test_bubble_sorts_example() {
    let steps = steps_of("bubble", &[5, 3, 8, 1]);
    assert_eq!(steps.last().map(|s| s.snapshot.clone()), Some(vec![1, 3, 5, 8]));
}

#[test]
fn test_bubble_on_sorted_input_only_compares_and_marks() {
    let steps = steps_of("bubble", &[1, 2, 3]);
    assert_eq!(count(&steps, StepKind::Swap), 0);
    assert!(steps
        .iter()
        .all(|s| s.kind == StepKind::Compare || s.kind == StepKind::Sorted));
}

#[test]
fn test_quick_on_equal_values_never_swaps() {
    let steps = steps_of("quick", &[3, 3, 3]);
    assert_eq!(count(&steps, StepKind::Swap), 0);

    let tail: Vec<&Step> = steps.iter().rev().take(3).collect();
    for (i, step) in tail.into_iter().rev().enumerate() {
        assert_eq!(step.kind, StepKind::Sorted);
        assert_eq!(step.indices, vec![i]);
    }
}

#[test]
fn test_radix_sorts_example() {
    let steps = steps_of("radix", &[170, 45, 75, 90]);
    assert_eq!(
        steps.last().map(|s| s.snapshot.clone()),
        Some(vec![45, 75, 90, 170])
    );
}

#[test]
fn test_heap_builds_before_swapping() {
    let steps = steps_of("heap", &[4, 10, 3, 5, 1]);
    assert_eq!(
        steps.last().map(|s| s.snapshot.clone()),
        Some(vec![1, 3, 4, 5, 10])
    );

    let first_build = steps.iter().position(|s| s.kind == StepKind::BuildHeap);
    let first_swap = steps.iter().position(|s| s.kind == StepKind::Swap);
    assert!(first_build.is_some());
    assert!(first_build < first_swap);
}

#[test]
fn test_merge_and_insertion_are_stable() {
    let input = [4, 2, 4, 1, 2, 4, 3, 1];
    for algorithm in ["merge", "insertion"] {
        let steps = steps_of(algorithm, &input);
        assert_equal_values_never_cross(&input, &steps);
        assert_eq!(
            steps.last().map(|s| s.snapshot.clone()),
            Some(vec![1, 1, 2, 2, 3, 4, 4, 4])
        );
    }
}

#[test]
fn test_every_algorithm_marks_every_index_sorted() {
    let input = [9, 4, 7, 1, 8, 2, 2, 6];
    for algorithm in Algorithm::ALL {
        let trace = produce_trace_for(algorithm, &input).expect("trace production failed");
        let mut marked: Vec<usize> = trace
            .steps()
            .iter()
            .filter(|s| s.kind == StepKind::Sorted)
            .flat_map(|s| s.indices.iter().copied())
            .collect();
        marked.sort_unstable();
        marked.dedup();
        assert_eq!(marked, (0..input.len()).collect::<Vec<_>>(), "{}", algorithm);
    }
}

#[test]
fn test_traces_are_deterministic() {
    let input = [15, 3, 9, 3, 27, 0, 11];
    for algorithm in Algorithm::ALL {
        let a = produce_trace_for(algorithm, &input);
        let b = produce_trace_for(algorithm, &input);
        assert_eq!(a, b, "{}", algorithm);
    }
}

#[test]
fn test_caller_input_is_untouched() {
    let input = vec![3, 1, 2];
    for algorithm in Algorithm::ALL {
        let trace = produce_trace_for(algorithm, &input).expect("trace production failed");
        assert_eq!(input, vec![3, 1, 2]);
        assert_eq!(trace.input(), &[3, 1, 2][..]);
    }
}

#[test]
fn test_invalid_requests() {
    let trace = produce_trace("shell", &[3, 1, 2]).expect("unknown id is not an error");
    assert!(trace.is_empty());
    assert_eq!(trace.algorithm(), None);

    let trace = produce_trace("merge", &[]).expect("empty input is not an error");
    assert!(trace.is_empty());
    assert_eq!(count(trace.steps(), StepKind::Sorted), 0);

    assert_eq!(
        produce_trace("radix", &[5, -2]),
        Err(TraceError::NegativeRadixInput {
            index: 1,
            value: -2
        })
    );
}

#[test]
fn test_statistics_totals() {
    let trace = produce_trace_for(Algorithm::Bubble, &[4, 3, 2, 1]).expect("trace production failed");
    assert_eq!(trace.comparisons(), 6);
    assert_eq!(trace.swaps(), 6);
    assert_eq!(trace.kind_counts().get(&StepKind::Sorted).copied(), Some(3 + 4));
}
