//! Quick sort with the Lomuto partition scheme
//!
//! The pivot is always the last element of the range. Values `<= pivot` are
//! gathered at the front, so a run of equal values never needs a swap.

use super::{SortMachine, SortedSweep, StepBuffer};
use crate::step::StepKind;

#[derive(Debug, Clone, Copy)]
struct Partition {
    low: usize,
    high: usize,
    pivot: i64,
    /// Next slot for a value that belongs left of the pivot
    store: usize,
    j: usize,
}

pub struct QuickSort {
    arr: Vec<i64>,
    /// Pending inclusive `(low, high)` ranges with at least two elements
    ranges: Vec<(usize, usize)>,
    active: Option<Partition>,
    sweep: Option<SortedSweep>,
}

impl QuickSort {
    pub fn new(arr: Vec<i64>) -> Self {
        let ranges = if arr.len() > 1 {
            vec![(0, arr.len() - 1)]
        } else {
            Vec::new()
        };
        QuickSort {
            arr,
            ranges,
            active: None,
            sweep: None,
        }
    }

    fn scan_next(&mut self, mut p: Partition, out: &mut StepBuffer) {
        let arr = &mut self.arr;

        if p.j < p.high {
            let j = p.j;
            out.emit(
                StepKind::Compare,
                vec![j, p.high],
                arr,
                format!("Comparing {} with pivot {}", arr[j], p.pivot),
            );
            if arr[j] <= p.pivot {
                if p.store != j {
                    let (a, b) = (arr[p.store], arr[j]);
                    arr.swap(p.store, j);
                    out.emit(
                        StepKind::Swap,
                        vec![p.store, j],
                        arr,
                        format!("Swapping {} and {}", a, b),
                    );
                }
                p.store += 1;
            }
            p.j += 1;
            self.active = Some(p);
            return;
        }

        let at = p.store;
        if at != p.high {
            arr.swap(at, p.high);
            out.emit(
                StepKind::Swap,
                vec![at, p.high],
                arr,
                format!("Placing pivot {} in correct position", p.pivot),
            );
        }
        out.emit(
            StepKind::Partition,
            vec![at],
            arr,
            format!("Pivot {} is now in correct position", p.pivot),
        );

        // Left range is processed first, so it goes on top
        if p.high >= at + 2 {
            self.ranges.push((at + 1, p.high));
        }
        if at >= p.low + 2 {
            self.ranges.push((p.low, at - 1));
        }
        self.active = None;
    }
}

impl SortMachine for QuickSort {
    fn advance(&mut self, out: &mut StepBuffer) -> bool {
        if let Some(sweep) = &mut self.sweep {
            return sweep.advance(&self.arr, out);
        }

        if let Some(p) = self.active {
            self.scan_next(p, out);
            return true;
        }

        match self.ranges.pop() {
            Some((low, high)) => {
                let pivot = self.arr[high];
                out.emit(
                    StepKind::Pivot,
                    vec![high],
                    &self.arr,
                    format!("Selecting pivot: {}", pivot),
                );
                self.active = Some(Partition {
                    low,
                    high,
                    pivot,
                    store: low,
                    j: low,
                });
            }
            None => self.sweep = Some(SortedSweep::default()),
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
        StepStream::new(QuickSort::new(input.to_vec())).collect()
    }

    #[test]
    fn test_sorts_and_sweeps() {
        let input = [10, 80, 30, 90, 40, 50, 70];
        let steps = run(&input);
        assert_eq!(final_snapshot(&steps), vec![10, 30, 40, 50, 70, 80, 90]);
        assert_sorted_sweep(&steps, input.len());
        assert_permutation_everywhere(&steps, &input);
    }

    #[test]
    fn test_equal_values_never_swap() {
        let steps = run(&[3, 3, 3]);
        assert_eq!(count(&steps, StepKind::Swap), 0);
        assert_sorted_sweep(&steps, 3);
    }

    #[test]
    fn test_one_pivot_per_partition() {
        let steps = run(&[5, 1, 4, 2, 3]);
        assert_eq!(
            count(&steps, StepKind::Pivot),
            count(&steps, StepKind::Partition)
        );
        let first_partition = steps
            .iter()
            .find(|s| s.kind == StepKind::Partition)
            .expect("at least one partition");
        // 3 is the first pivot and lands in the middle
        assert_eq!(first_partition.indices, vec![2]);
        assert_eq!(first_partition.snapshot[2], 3);
    }

    #[test]
    fn test_compares_against_pivot_slot() {
        let steps = run(&[2, 1]);
        let compare = &steps[1];
        assert_eq!(compare.kind, StepKind::Compare);
        assert_eq!(compare.indices, vec![0, 1]);
    }
}
