//! Instrumented sorting algorithms
//!
//! Each algorithm is written as a [`SortMachine`]: a resumable state machine
//! that owns a private copy of the input and performs one unit of work per
//! [`SortMachine::advance`] call, recording the steps that unit produced.
//! [`StepStream`] wraps a machine as an ordinary [`Iterator`] so a consumer
//! pulls steps one at a time and the machine only runs as far as needed.
//!
//! # Algorithms
//!
//! - [`bubble`]: adjacent compare/swap with early exit
//! - [`selection`]: minimum scan with a single swap per position
//! - [`insertion`]: stable right-to-left shifting of a held key
//! - [`merge`]: top-down, left-biased (stable) merge sort
//! - [`quick`]: Lomuto partition, last element as pivot
//! - [`heap`]: max-heap build followed by root extraction
//! - [`radix`]: LSD base-10 counting sort passes
//!
//! Recursive algorithms keep their pending sub-ranges on an explicit `Vec`
//! work stack, so stack depth does not grow with the input.
//!
//! Every machine finishes with a `sorted` marker for each index in
//! ascending order.

pub mod bubble;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod radix;
pub mod selection;

use crate::step::{Step, StepKind};
use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

pub use bubble::BubbleSort;
pub use heap::HeapSort;
pub use insertion::InsertionSort;
pub use merge::MergeSort;
pub use quick::QuickSort;
pub use radix::RadixSort;
pub use selection::SelectionSort;

/// Steps recorded by a machine but not yet handed to the consumer
#[derive(Debug, Default)]
pub struct StepBuffer {
    pending: VecDeque<Step>,
}

impl StepBuffer {
    pub fn new() -> Self {
        StepBuffer {
            pending: VecDeque::new(),
        }
    }

    /// Record a step, copying `arr` as its snapshot
    pub fn emit(
        &mut self,
        kind: StepKind,
        indices: Vec<usize>,
        arr: &[i64],
        description: impl Into<String>,
    ) {
        self.pending
            .push_back(Step::new(kind, indices, arr.to_vec(), description));
    }

    pub fn pop(&mut self) -> Option<Step> {
        self.pending.pop_front()
    }
}

/// A sorting algorithm that can be suspended between units of work
pub trait SortMachine {
    /// Perform the next unit of work, recording its steps into `out`.
    ///
    /// Returns `false` once the machine has finished; it then records nothing
    /// more.
    fn advance(&mut self, out: &mut StepBuffer) -> bool;
}

/// Pull-based iterator over the steps of a [`SortMachine`]
pub struct StepStream<M> {
    machine: M,
    buffer: StepBuffer,
    finished: bool,
}

impl<M: SortMachine> StepStream<M> {
    pub fn new(machine: M) -> Self {
        StepStream {
            machine,
            buffer: StepBuffer::new(),
            finished: false,
        }
    }
}

impl<M: SortMachine> Iterator for StepStream<M> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        loop {
            if let Some(step) = self.buffer.pop() {
                return Some(step);
            }
            if self.finished {
                return None;
            }
            self.finished = !self.machine.advance(&mut self.buffer);
        }
    }
}

/// Trailing pass that marks every index sorted, lowest index first
#[derive(Debug, Default)]
pub(crate) struct SortedSweep {
    next: usize,
}

impl SortedSweep {
    pub(crate) fn advance(&mut self, arr: &[i64], out: &mut StepBuffer) -> bool {
        if self.next >= arr.len() {
            return false;
        }
        out.emit(StepKind::Sorted, vec![self.next], arr, "Array is sorted");
        self.next += 1;
        true
    }
}

/// The seven supported algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
    Heap,
    Radix,
}

impl Algorithm {
    pub const ALL: [Algorithm; 7] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Heap,
        Algorithm::Radix,
    ];

    /// External identifier accepted by [`FromStr`]
    pub fn id(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Selection => "selection",
            Algorithm::Insertion => "insertion",
            Algorithm::Merge => "merge",
            Algorithm::Quick => "quick",
            Algorithm::Heap => "heap",
            Algorithm::Radix => "radix",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Quick => "Quick Sort",
            Algorithm::Heap => "Heap Sort",
            Algorithm::Radix => "Radix Sort",
        }
    }

    pub fn complexity(self) -> &'static str {
        match self {
            Algorithm::Bubble | Algorithm::Selection | Algorithm::Insertion => "O(n²)",
            Algorithm::Merge | Algorithm::Quick | Algorithm::Heap => "O(n log n)",
            Algorithm::Radix => "O(dn)",
        }
    }

    /// Whether equal values keep their input order
    pub fn is_stable(self) -> bool {
        matches!(
            self,
            Algorithm::Bubble | Algorithm::Insertion | Algorithm::Merge | Algorithm::Radix
        )
    }

    /// Next algorithm in [`Algorithm::ALL`], wrapping around
    pub fn next(self) -> Self {
        let pos = Self::ALL.iter().position(|a| *a == self).unwrap_or(0);
        Self::ALL[(pos + 1) % Self::ALL.len()]
    }

    /// Previous algorithm in [`Algorithm::ALL`], wrapping around
    pub fn prev(self) -> Self {
        let pos = Self::ALL.iter().position(|a| *a == self).unwrap_or(0);
        Self::ALL[(pos + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn pseudocode(self) -> &'static [&'static str] {
        match self {
            Algorithm::Bubble => &[
                "for i = 0 to n-2:",
                "  swapped = false",
                "  for j = 0 to n-i-2:",
                "    if arr[j] > arr[j+1]:",
                "      swap(arr[j], arr[j+1]); swapped = true",
                "  if not swapped: break",
            ],
            Algorithm::Selection => &[
                "for i = 0 to n-2:",
                "  min = i",
                "  for j = i+1 to n-1:",
                "    if arr[j] < arr[min]:",
                "      min = j",
                "  swap(arr[i], arr[min])",
            ],
            Algorithm::Insertion => &[
                "for i = 1 to n-1:",
                "  key = arr[i]; j = i-1",
                "  while j >= 0 and arr[j] > key:",
                "    arr[j+1] = arr[j]; j = j-1",
                "  arr[j+1] = key",
            ],
            Algorithm::Merge => &[
                "mergeSort(arr, left, right):",
                "  if left < right:",
                "    mid = (left + right) / 2",
                "    mergeSort(arr, left, mid)",
                "    mergeSort(arr, mid+1, right)",
                "    merge(arr, left, mid, right)",
                "merge: take the smaller head (left on ties)",
            ],
            Algorithm::Quick => &[
                "quickSort(arr, low, high):",
                "  if low < high:",
                "    pivot = arr[high]",
                "    for j = low to high-1:",
                "      if arr[j] <= pivot: swap into low side",
                "    place pivot after low side",
                "    quickSort(low, p-1); quickSort(p+1, high)",
            ],
            Algorithm::Heap => &[
                "heapSort(arr):",
                "  buildMaxHeap(arr)",
                "  heapify: compare node with children",
                "    swap with larger child",
                "    heapify(child)",
                "  for i = n-1 to 1:",
                "    swap(arr[0], arr[i]); heapify(arr, 0, i)",
            ],
            Algorithm::Radix => &[
                "radixSort(arr):",
                "  max = findMax(arr)",
                "  for exp = 1 while max/exp > 0, exp *= 10:",
                "    count digits (arr[i]/exp) % 10",
                "    place right-to-left into output",
                "    copy output back into arr",
            ],
        }
    }

    /// Pseudocode line that a step of `kind` corresponds to
    pub fn pseudocode_line(self, kind: StepKind) -> Option<usize> {
        use StepKind::*;
        match (self, kind) {
            (Algorithm::Bubble, Compare) => Some(3),
            (Algorithm::Bubble, Swap) => Some(4),
            (Algorithm::Selection, Compare) => Some(3),
            (Algorithm::Selection, Select) => Some(4),
            (Algorithm::Selection, Swap) => Some(5),
            (Algorithm::Insertion, Compare) => Some(2),
            (Algorithm::Insertion, Shift) => Some(3),
            (Algorithm::Insertion, Insert) => Some(4),
            (Algorithm::Merge, Divide) => Some(2),
            (Algorithm::Merge, Compare) | (Algorithm::Merge, Merge) => Some(6),
            (Algorithm::Quick, Pivot) => Some(2),
            (Algorithm::Quick, Compare) => Some(4),
            (Algorithm::Quick, Swap) => Some(4),
            (Algorithm::Quick, Partition) => Some(5),
            (Algorithm::Heap, BuildHeap) => Some(1),
            (Algorithm::Heap, Compare) => Some(2),
            (Algorithm::Heap, Swap) => Some(3),
            (Algorithm::Heap, Heapify) => Some(4),
            (Algorithm::Radix, Digit) => Some(2),
            (Algorithm::Radix, Count) => Some(3),
            (Algorithm::Radix, Distribute) => Some(4),
            _ => None,
        }
    }

    /// Lazy step sequence for sorting `input`.
    ///
    /// The input is copied; calling this again restarts from the beginning
    /// and yields an identical sequence.
    pub fn steps(self, input: &[i64]) -> Box<dyn Iterator<Item = Step>> {
        let arr = input.to_vec();
        match self {
            Algorithm::Bubble => Box::new(StepStream::new(BubbleSort::new(arr))),
            Algorithm::Selection => Box::new(StepStream::new(SelectionSort::new(arr))),
            Algorithm::Insertion => Box::new(StepStream::new(InsertionSort::new(arr))),
            Algorithm::Merge => Box::new(StepStream::new(MergeSort::new(arr))),
            Algorithm::Quick => Box::new(StepStream::new(QuickSort::new(arr))),
            Algorithm::Heap => Box::new(StepStream::new(HeapSort::new(arr))),
            Algorithm::Radix => Box::new(StepStream::new(RadixSort::new(arr))),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Error for an identifier outside the supported set
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown algorithm '{0}' (expected one of bubble, selection, insertion, merge, quick, heap, radix)")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Algorithm::ALL
            .into_iter()
            .find(|a| a.id().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}
