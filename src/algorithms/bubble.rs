//! Bubble sort with early exit

use super::{SortMachine, SortedSweep, StepBuffer};
use crate::step::StepKind;

enum Phase {
    Scan,
    Sweep(SortedSweep),
}

pub struct BubbleSort {
    arr: Vec<i64>,
    pass: usize,
    j: usize,
    swapped: bool,
    phase: Phase,
}

impl BubbleSort {
    pub fn new(arr: Vec<i64>) -> Self {
        BubbleSort {
            arr,
            pass: 0,
            j: 0,
            swapped: false,
            phase: Phase::Scan,
        }
    }
}

impl SortMachine for BubbleSort {
    fn advance(&mut self, out: &mut StepBuffer) -> bool {
        if let Phase::Sweep(sweep) = &mut self.phase {
            return sweep.advance(&self.arr, out);
        }

        let n = self.arr.len();
        if n < 2 || self.pass >= n - 1 {
            self.phase = Phase::Sweep(SortedSweep::default());
            return true;
        }

        let arr = &mut self.arr;
        let j = self.j;
        if j < n - self.pass - 1 {
            out.emit(
                StepKind::Compare,
                vec![j, j + 1],
                arr,
                format!("Comparing {} and {}", arr[j], arr[j + 1]),
            );
            // Strict: equal neighbours stay put
            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
                self.swapped = true;
                out.emit(
                    StepKind::Swap,
                    vec![j, j + 1],
                    arr,
                    format!("Swapping {} and {}", arr[j + 1], arr[j]),
                );
            }
            self.j += 1;
            return true;
        }

        // End of a pass: the largest remaining value has bubbled into place
        let settled = n - 1 - self.pass;
        out.emit(
            StepKind::Sorted,
            vec![settled],
            arr,
            format!("Element {} is in correct position", arr[settled]),
        );

        if self.swapped {
            self.pass += 1;
            self.j = 0;
            self.swapped = false;
        } else {
            self.phase = Phase::Sweep(SortedSweep::default());
        }
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
        StepStream::new(BubbleSort::new(input.to_vec())).collect()
    }

    #[test]
    fn test_sorts_small_array() {
        let steps = run(&[5, 3, 8, 1]);
        assert_eq!(final_snapshot(&steps), vec![1, 3, 5, 8]);
        assert_sorted_sweep(&steps, 4);
        assert_permutation_everywhere(&steps, &[5, 3, 8, 1]);
    }

    #[test]
    fn test_sorted_input_never_swaps() {
        let steps = run(&[1, 2, 3]);
        assert_eq!(count(&steps, StepKind::Swap), 0);
        assert!(steps
            .iter()
            .all(|s| matches!(s.kind, StepKind::Compare | StepKind::Sorted)));
        // One pass of two comparisons, then early exit
        assert_eq!(count(&steps, StepKind::Compare), 2);
    }

    #[test]
    fn test_equal_values_do_not_swap() {
        let steps = run(&[2, 2, 2, 2]);
        assert_eq!(count(&steps, StepKind::Swap), 0);
    }

    #[test]
    fn test_reversed_input_swaps_every_pair() {
        let steps = run(&[4, 3, 2, 1]);
        assert_eq!(count(&steps, StepKind::Swap), 6);
        assert_eq!(count(&steps, StepKind::Compare), 6);
    }

    #[test]
    fn test_single_element() {
        let steps = run(&[7]);
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].kind, StepKind::Sorted);
    }
}
