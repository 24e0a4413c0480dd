//! Selection sort

use super::{SortMachine, SortedSweep, StepBuffer};
use crate::step::StepKind;

enum Phase {
    Scan,
    Sweep(SortedSweep),
}

pub struct SelectionSort {
    arr: Vec<i64>,
    i: usize,
    j: usize,
    min_idx: usize,
    phase: Phase,
}

impl SelectionSort {
    pub fn new(arr: Vec<i64>) -> Self {
        SelectionSort {
            arr,
            i: 0,
            j: 1,
            min_idx: 0,
            phase: Phase::Scan,
        }
    }
}

impl SortMachine for SelectionSort {
    fn advance(&mut self, out: &mut StepBuffer) -> bool {
        if let Phase::Sweep(sweep) = &mut self.phase {
            return sweep.advance(&self.arr, out);
        }

        let n = self.arr.len();
        if n == 0 {
            self.phase = Phase::Sweep(SortedSweep::default());
            return true;
        }

        let arr = &mut self.arr;
        if self.i >= n - 1 {
            out.emit(StepKind::Sorted, vec![n - 1], arr, "Array is sorted");
            self.phase = Phase::Sweep(SortedSweep::default());
            return true;
        }

        if self.j < n {
            let (min_idx, j) = (self.min_idx, self.j);
            out.emit(
                StepKind::Compare,
                vec![min_idx, j],
                arr,
                format!("Comparing {} and {}", arr[min_idx], arr[j]),
            );
            if arr[j] < arr[min_idx] {
                self.min_idx = j;
                out.emit(
                    StepKind::Select,
                    vec![j],
                    arr,
                    format!("New minimum found: {}", arr[j]),
                );
            }
            self.j += 1;
            return true;
        }

        let (i, min_idx) = (self.i, self.min_idx);
        if min_idx != i {
            let (a, b) = (arr[i], arr[min_idx]);
            arr.swap(i, min_idx);
            out.emit(
                StepKind::Swap,
                vec![i, min_idx],
                arr,
                format!("Swapping {} and {}", a, b),
            );
        }
        out.emit(
            StepKind::Sorted,
            vec![i],
            arr,
            format!("Element {} is in correct position", arr[i]),
        );

        self.i += 1;
        self.min_idx = self.i;
        self.j = self.i + 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::test_support::*;
    use crate::algorithms::StepStream;
    use crate::step::Step;

    fn run(input: &[i64]) -> Vec<Step> {
        StepStream::new(SelectionSort::new(input.to_vec())).collect()
    }

    #[test]
    fn test_sorts_and_sweeps() {
        let input = [29, 10, 14, 37, 13];
        let steps = run(&input);
        assert_eq!(final_snapshot(&steps), vec![10, 13, 14, 29, 37]);
        assert_sorted_sweep(&steps, input.len());
        assert_permutation_everywhere(&steps, &input);
    }

    #[test]
    fn test_comparison_count_is_quadratic() {
        let steps = run(&[5, 4, 3, 2, 1, 0]);
        // n(n-1)/2 comparisons regardless of order
        assert_eq!(count(&steps, StepKind::Compare), 15);
    }

    #[test]
    fn test_no_swap_when_minimum_already_in_place() {
        let steps = run(&[1, 2, 3, 4]);
        assert_eq!(count(&steps, StepKind::Swap), 0);
        assert_eq!(count(&steps, StepKind::Select), 0);
    }

    #[test]
    fn test_select_follows_new_minimum() {
        let steps = run(&[3, 1, 2]);
        let select = steps
            .iter()
            .find(|s| s.kind == StepKind::Select)
            .expect("a new minimum is found");
        assert_eq!(select.indices, vec![1]);
    }

    #[test]
    fn test_single_element() {
        let steps = run(&[42]);
        // final sorted(n-1) followed by the sweep
        assert_eq!(steps.len(), 2);
        assert!(steps.iter().all(|s| s.indices == vec![0]));
    }
}
