//! Top-down merge sort driven by an explicit work stack
//!
//! Ranges are inclusive `[left, right]` and split at `(left + right) / 2`.
//! Merging happens in place: while merging, the array holds
//!
//! ```text
//! [left, k)        placed output
//! [k, split)       rest of the left run
//! [split, right]   rest of the right run
//! ```
//!
//! Taking from the left run is a no-op on the array. Taking from the right run
//! rotates its head in front of the left run. Either way exactly one `merge`
//! step is recorded per placed element and snapshots stay permutations.

use super::{SortMachine, SortedSweep, StepBuffer};
use crate::step::StepKind;

#[derive(Debug, Clone, Copy)]
enum Task {
    Sort { left: usize, right: usize },
    Merge { left: usize, mid: usize, right: usize },
}

#[derive(Debug, Clone, Copy)]
struct ActiveMerge {
    k: usize,
    split: usize,
    right: usize,
}

pub struct MergeSort {
    arr: Vec<i64>,
    tasks: Vec<Task>,
    active: Option<ActiveMerge>,
    sweep: Option<SortedSweep>,
}

impl MergeSort {
    pub fn new(arr: Vec<i64>) -> Self {
        let tasks = match arr.len() {
            0 => Vec::new(),
            n => vec![Task::Sort {
                left: 0,
                right: n - 1,
            }],
        };
        MergeSort {
            arr,
            tasks,
            active: None,
            sweep: None,
        }
    }

    /// Place one element of the active merge
    fn place_next(&mut self, mut m: ActiveMerge, out: &mut StepBuffer) {
        let arr = &mut self.arr;
        let k = m.k;
        let left_empty = k == m.split;
        let right_empty = m.split > m.right;

        if !left_empty && !right_empty {
            out.emit(
                StepKind::Compare,
                vec![k, m.split],
                arr,
                format!("Comparing {} and {}", arr[k], arr[m.split]),
            );
            // Ties go left, which keeps equal values in input order
            if arr[k] > arr[m.split] {
                arr[k..=m.split].rotate_right(1);
                m.split += 1;
            }
            out.emit(
                StepKind::Merge,
                vec![k],
                arr,
                format!("Placing {} at position {}", arr[k], k),
            );
        } else {
            if left_empty {
                m.split += 1;
            }
            out.emit(
                StepKind::Merge,
                vec![k],
                arr,
                format!("Placing remaining {} at position {}", arr[k], k),
            );
        }

        m.k += 1;
        self.active = (m.k <= m.right).then_some(m);
    }
}

impl SortMachine for MergeSort {
    fn advance(&mut self, out: &mut StepBuffer) -> bool {
        if let Some(sweep) = &mut self.sweep {
            return sweep.advance(&self.arr, out);
        }

        if let Some(m) = self.active {
            self.place_next(m, out);
            return true;
        }

        match self.tasks.pop() {
            Some(Task::Sort { left, right }) => {
                if left < right {
                    let mid = (left + right) / 2;
                    out.emit(
                        StepKind::Divide,
                        vec![left, mid, right],
                        &self.arr,
                        format!("Dividing array from {} to {}", left, right),
                    );
                    // Popped in reverse: left half, right half, then the merge
                    self.tasks.push(Task::Merge { left, mid, right });
                    self.tasks.push(Task::Sort {
                        left: mid + 1,
                        right,
                    });
                    self.tasks.push(Task::Sort { left, right: mid });
                }
            }
            Some(Task::Merge { left, mid, right }) => {
                out.emit(
                    StepKind::Merge,
                    vec![left, right],
                    &self.arr,
                    format!("Merging subarrays from {} to {}", left, right),
                );
                self.active = Some(ActiveMerge {
                    k: left,
                    split: mid + 1,
                    right,
                });
            }
            None => self.sweep = Some(SortedSweep::default()),
        }
        true
    }
}
