//! Insertion sort
//!
//! The held key travels left with the gap: each `shift` moves the larger
//! neighbour one slot right and the key into the slot it vacated, so every
//! snapshot remains a permutation of the input. The closing `insert` marks
//! where the key came to rest.

use super::{SortMachine, SortedSweep, StepBuffer};
use crate::step::StepKind;

enum Phase {
    /// Pick up `arr[i]` as the next key
    Select,
    /// Key currently sits at `hole`
    Shift { key: i64, hole: usize },
    Sweep(SortedSweep),
}

pub struct InsertionSort {
    arr: Vec<i64>,
    i: usize,
    phase: Phase,
}

impl InsertionSort {
    pub fn new(arr: Vec<i64>) -> Self {
        InsertionSort {
            arr,
            i: 1,
            phase: Phase::Select,
        }
    }
}

impl SortMachine for InsertionSort {
    fn advance(&mut self, out: &mut StepBuffer) -> bool {
        let arr = &mut self.arr;
        match &mut self.phase {
            Phase::Sweep(sweep) => sweep.advance(arr, out),
            Phase::Select => {
                let i = self.i;
                if i >= arr.len() {
                    self.phase = Phase::Sweep(SortedSweep::default());
                    return true;
                }
                let key = arr[i];
                out.emit(
                    StepKind::Compare,
                    vec![i],
                    arr,
                    format!("Selecting element {} to insert", key),
                );
                self.phase = Phase::Shift { key, hole: i };
                true
            }
            Phase::Shift { key, hole } => {
                let (key, h) = (*key, *hole);
                // Strict: an equal neighbour stops the key, keeping the sort stable
                if h > 0 && arr[h - 1] > key {
                    out.emit(
                        StepKind::Compare,
                        vec![h - 1, h],
                        arr,
                        format!("Comparing {} and {}", arr[h - 1], key),
                    );
                    arr.swap(h - 1, h);
                    out.emit(
                        StepKind::Shift,
                        vec![h - 1, h],
                        arr,
                        format!("Shifting {} to position {}", arr[h], h),
                    );
                    *hole = h - 1;
                } else {
                    out.emit(
                        StepKind::Insert,
                        vec![h],
                        arr,
                        format!("Inserting {} at position {}", key, h),
                    );
                    self.i += 1;
                    self.phase = Phase::Select;
                }
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::test_support::*;
    use crate::algorithms::StepStream;
    use crate::step::Step;

    fn run(input: &[i64]) -> Vec<Step> {
        StepStream::new(InsertionSort::new(input.to_vec())).collect()
    }

    #[test]
    fn test_sorts_and_sweeps() {
        let input = [12, 11, 13, 5, 6];
        let steps = run(&input);
        assert_eq!(final_snapshot(&steps), vec![5, 6, 11, 12, 13]);
        assert_sorted_sweep(&steps, input.len());
        assert_permutation_everywhere(&steps, &input);
    }

    #[test]
    fn test_one_insert_per_key() {
        let steps = run(&[4, 3, 2, 1]);
        assert_eq!(count(&steps, StepKind::Insert), 3);
        assert_eq!(count(&steps, StepKind::Shift), 6);
    }

    #[test]
    fn test_shift_moves_larger_value_right() {
        let steps = run(&[2, 1]);
        let shift = steps
            .iter()
            .find(|s| s.kind == StepKind::Shift)
            .expect("1 < 2 forces a shift");
        assert_eq!(shift.indices, vec![0, 1]);
        assert_eq!(shift.snapshot, vec![1, 2]);
    }

    #[test]
    fn test_equal_keys_never_shift() {
        let steps = run(&[7, 7, 7]);
        assert_eq!(count(&steps, StepKind::Shift), 0);
        let inserts: Vec<_> = steps
            .iter()
            .filter(|s| s.kind == StepKind::Insert)
            .map(|s| s.indices.clone())
            .collect();
        assert_eq!(inserts, vec![vec![1], vec![2]]);
    }
}
