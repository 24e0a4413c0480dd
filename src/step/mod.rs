//! Step schema shared by every sorting algorithm
//!
//! A [`Step`] records one primitive operation together with a full copy of
//! the working array *after* that operation took effect. Steps never change
//! once emitted; a trace is just an ordered `Vec<Step>`.

use std::fmt;

/// The closed set of operations an algorithm can record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    Compare,
    Swap,
    Shift,
    Insert,
    Select,
    Pivot,
    Partition,
    Divide,
    Merge,
    BuildHeap,
    Heapify,
    Digit,
    Count,
    Distribute,
    Sorted,
}

impl StepKind {
    pub const ALL: [StepKind; 15] = [
        StepKind::Compare,
        StepKind::Swap,
        StepKind::Shift,
        StepKind::Insert,
        StepKind::Select,
        StepKind::Pivot,
        StepKind::Partition,
        StepKind::Divide,
        StepKind::Merge,
        StepKind::BuildHeap,
        StepKind::Heapify,
        StepKind::Digit,
        StepKind::Count,
        StepKind::Distribute,
        StepKind::Sorted,
    ];

    /// Kebab-case name used in descriptions and logs
    pub fn as_str(self) -> &'static str {
        match self {
            StepKind::Compare => "compare",
            StepKind::Swap => "swap",
            StepKind::Shift => "shift",
            StepKind::Insert => "insert",
            StepKind::Select => "select",
            StepKind::Pivot => "pivot",
            StepKind::Partition => "partition",
            StepKind::Divide => "divide",
            StepKind::Merge => "merge",
            StepKind::BuildHeap => "build-heap",
            StepKind::Heapify => "heapify",
            StepKind::Digit => "digit",
            StepKind::Count => "count",
            StepKind::Distribute => "distribute",
            StepKind::Sorted => "sorted",
        }
    }

    /// Whether a step of this kind may change the snapshot relative to the
    /// step before it.
    ///
    /// `Merge`, `Heapify` and `Distribute` only mutate on some of their
    /// occurrences (e.g. the opening `merge` marker or a buffer-only radix
    /// placement leave the array alone), so this is an upper bound.
    pub fn mutates_snapshot(self) -> bool {
        matches!(
            self,
            StepKind::Swap
                | StepKind::Shift
                | StepKind::Insert
                | StepKind::Merge
                | StepKind::BuildHeap
                | StepKind::Heapify
                | StepKind::Distribute
        )
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recorded operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub kind: StepKind,
    /// Positions in the working array this operation touches
    pub indices: Vec<usize>,
    /// Working array after the operation was applied
    pub snapshot: Vec<i64>,
    /// Human-readable annotation for the UI
    pub description: String,
}

impl Step {
    pub fn new(
        kind: StepKind,
        indices: Vec<usize>,
        snapshot: Vec<i64>,
        description: impl Into<String>,
    ) -> Self {
        Step {
            kind,
            indices,
            snapshot,
            description: description.into(),
        }
    }

    pub fn is(&self, kind: StepKind) -> bool {
        self.kind == kind
    }

    /// Rough number of bytes this step keeps alive
    pub fn estimated_size(&self) -> usize {
        std::mem::size_of::<Step>()
            + self.snapshot.len() * std::mem::size_of::<i64>()
            + self.indices.len() * std::mem::size_of::<usize>()
            + self.description.len()
    }
}
