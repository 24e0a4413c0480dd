//! Heap sort over a max-heap
//!
//! Sift-downs, extractions and the final root marker are queued as tasks on
//! an explicit stack; one task is processed per `advance`.

use super::{SortMachine, SortedSweep, StepBuffer};
use crate::step::StepKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Task {
    /// Sift `root` down within `arr[..size]`
    Sift { size: usize, root: usize },
    /// Move the maximum to `end`, then shrink the heap
    Extract { end: usize },
    /// Root is the last unsorted slot
    SettleRoot,
}

pub struct HeapSort {
    arr: Vec<i64>,
    tasks: Vec<Task>,
    announced: bool,
    sweep: Option<SortedSweep>,
}

impl HeapSort {
    pub fn new(arr: Vec<i64>) -> Self {
        let n = arr.len();
        let mut tasks = Vec::new();
        if n > 0 {
            tasks.push(Task::SettleRoot);
            tasks.push(Task::Extract { end: n - 1 });
            // Build phase runs roots n/2-1 down to 0, so 0 is pushed first
            tasks.extend((0..n / 2).map(|root| Task::Sift { size: n, root }));
        }
        HeapSort {
            arr,
            tasks,
            announced: false,
            sweep: None,
        }
    }

    fn sift(&mut self, size: usize, root: usize, out: &mut StepBuffer) {
        let arr = &mut self.arr;
        let left = 2 * root + 1;
        let right = 2 * root + 2;
        let mut largest = root;

        if left < size {
            out.emit(
                StepKind::Compare,
                vec![largest, left],
                arr,
                format!("Comparing {} with left child {}", arr[largest], arr[left]),
            );
            if arr[left] > arr[largest] {
                largest = left;
            }
        }

        if right < size {
            out.emit(
                StepKind::Compare,
                vec![largest, right],
                arr,
                format!("Comparing {} with right child {}", arr[largest], arr[right]),
            );
            if arr[right] > arr[largest] {
                largest = right;
            }
        }

        if largest != root {
            let (a, b) = (arr[root], arr[largest]);
            arr.swap(root, largest);
            out.emit(
                StepKind::Swap,
                vec![root, largest],
                arr,
                format!("Swapping {} and {}", a, b),
            );
            out.emit(
                StepKind::Heapify,
                vec![largest],
                arr,
                format!("Heapifying subtree rooted at {}", largest),
            );
            self.tasks.push(Task::Sift {
                size,
                root: largest,
            });
        }
    }

    fn extract(&mut self, end: usize, out: &mut StepBuffer) {
        if end == 0 {
            return;
        }
        let arr = &mut self.arr;
        let max = arr[0];
        arr.swap(0, end);
        out.emit(
            StepKind::Swap,
            vec![0, end],
            arr,
            format!("Moving max element {} to position {}", max, end),
        );
        out.emit(
            StepKind::Sorted,
            vec![end],
            arr,
            format!("Element {} is in correct position", arr[end]),
        );
        self.tasks.push(Task::Extract { end: end - 1 });
        self.tasks.push(Task::Sift { size: end, root: 0 });
    }
}

impl SortMachine for HeapSort {
    fn advance(&mut self, out: &mut StepBuffer) -> bool {
        if let Some(sweep) = &mut self.sweep {
            return sweep.advance(&self.arr, out);
        }

        if !self.announced {
            self.announced = true;
            if !self.arr.is_empty() {
                out.emit(StepKind::BuildHeap, vec![], &self.arr, "Building max heap");
            }
            return true;
        }

        match self.tasks.pop() {
            Some(Task::Sift { size, root }) => self.sift(size, root, out),
            Some(Task::Extract { end }) => self.extract(end, out),
            Some(Task::SettleRoot) => {
                out.emit(StepKind::Sorted, vec![0], &self.arr, "Array is sorted");
            }
            None => self.sweep = Some(SortedSweep::default()),
        }
        true
    }
}
