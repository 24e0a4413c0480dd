//! Trace production
//!
//! [`produce_trace`] drives one algorithm to completion and retains every
//! step it emits, so playback can move freely in both directions. Retention
//! is bounded: inputs longer than [`TraceLimits::max_input_len`] are refused
//! and the retained snapshots are accounted against
//! [`TraceLimits::max_memory`].

pub mod errors;

pub use errors::TraceError;

use crate::algorithms::Algorithm;
use crate::constants::{MAX_INPUT_LEN, TRACE_MEMORY_LIMIT};
use crate::step::{Step, StepKind};
use rustc_hash::FxHashMap;
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, warn};

/// Bounds applied while a trace is collected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceLimits {
    pub max_input_len: usize,
    pub max_memory: usize,
}

impl Default for TraceLimits {
    fn default() -> Self {
        TraceLimits {
            max_input_len: MAX_INPUT_LEN,
            max_memory: TRACE_MEMORY_LIMIT,
        }
    }
}

/// The complete step sequence of one algorithm run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    algorithm: Option<Algorithm>,
    input: Vec<i64>,
    steps: Vec<Step>,
    memory: usize,
}

impl Trace {
    /// A trace with nothing to play
    pub fn empty(algorithm: Option<Algorithm>, input: &[i64]) -> Self {
        Trace {
            algorithm,
            input: input.to_vec(),
            steps: Vec::new(),
            memory: 0,
        }
    }

    /// `None` when the requested identifier was not recognised
    pub fn algorithm(&self) -> Option<Algorithm> {
        self.algorithm
    }

    /// The array as it was before any step
    pub fn input(&self) -> &[i64] {
        &self.input
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Array after the last step, or the input for an empty trace
    pub fn final_snapshot(&self) -> &[i64] {
        self.steps
            .last()
            .map(|s| s.snapshot.as_slice())
            .unwrap_or(self.input.as_slice())
    }

    pub fn count(&self, kind: StepKind) -> usize {
        self.steps.iter().filter(|s| s.kind == kind).count()
    }

    pub fn comparisons(&self) -> usize {
        self.count(StepKind::Compare)
    }

    pub fn swaps(&self) -> usize {
        self.count(StepKind::Swap)
    }

    /// Number of steps of each kind that occurs at least once
    pub fn kind_counts(&self) -> FxHashMap<StepKind, usize> {
        let mut counts = FxHashMap::default();
        for step in &self.steps {
            *counts.entry(step.kind).or_insert(0) += 1;
        }
        counts
    }

    /// Estimated bytes held by the retained steps
    pub fn memory_usage(&self) -> usize {
        self.memory
    }
}

/// Collects steps while enforcing the memory budget
struct TraceBuilder {
    steps: Vec<Step>,
    max_memory: usize,
    current_memory: usize,
}

impl TraceBuilder {
    fn new(max_memory: usize) -> Self {
        TraceBuilder {
            steps: Vec::new(),
            max_memory,
            current_memory: 0,
        }
    }

    fn push(&mut self, step: Step) -> Result<(), TraceError> {
        let size = step.estimated_size();
        if self.current_memory + size > self.max_memory {
            return Err(TraceError::MemoryLimitExceeded {
                used: self.current_memory,
                requested: size,
                limit: self.max_memory,
            });
        }
        self.current_memory += size;
        self.steps.push(step);
        Ok(())
    }
}

/// Drain `steps` into a builder, turning a panic inside the producer into
/// [`TraceError::Panicked`]. Nothing collected before a failure is returned.
fn collect(
    algorithm: Algorithm,
    steps: impl Iterator<Item = Step>,
    max_memory: usize,
) -> Result<TraceBuilder, TraceError> {
    let collected = panic::catch_unwind(AssertUnwindSafe(|| {
        let mut builder = TraceBuilder::new(max_memory);
        for step in steps {
            builder.push(step)?;
        }
        Ok::<_, TraceError>(builder)
    }));

    match collected {
        Ok(result) => result,
        Err(payload) => {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            warn!(%algorithm, %message, "trace production panicked");
            Err(TraceError::Panicked { algorithm, message })
        }
    }
}

/// Produce the trace for the algorithm named `algorithm_id`.
///
/// An unrecognised identifier or an empty input yields an empty trace and
/// runs nothing.
pub fn produce_trace(algorithm_id: &str, input: &[i64]) -> Result<Trace, TraceError> {
    match algorithm_id.parse::<Algorithm>() {
        Ok(algorithm) => produce_trace_for(algorithm, input),
        Err(e) => {
            warn!(algorithm = algorithm_id, "{}", e);
            Ok(Trace::empty(None, input))
        }
    }
}

/// [`produce_trace`] for an already-resolved algorithm, using default limits
pub fn produce_trace_for(algorithm: Algorithm, input: &[i64]) -> Result<Trace, TraceError> {
    produce_trace_with_limits(algorithm, input, &TraceLimits::default())
}

pub fn produce_trace_with_limits(
    algorithm: Algorithm,
    input: &[i64],
    limits: &TraceLimits,
) -> Result<Trace, TraceError> {
    if input.is_empty() {
        debug!(%algorithm, "empty input, nothing to trace");
        return Ok(Trace::empty(Some(algorithm), input));
    }

    if input.len() > limits.max_input_len {
        warn!(%algorithm, len = input.len(), "input rejected");
        return Err(TraceError::InputTooLarge {
            len: input.len(),
            limit: limits.max_input_len,
        });
    }

    if algorithm == Algorithm::Radix {
        if let Some((index, &value)) = input.iter().enumerate().find(|(_, v)| **v < 0) {
            warn!(index, value, "negative value rejected for radix sort");
            return Err(TraceError::NegativeRadixInput { index, value });
        }
    }

    let builder = collect(algorithm, algorithm.steps(input), limits.max_memory)?;

    debug!(
        %algorithm,
        len = input.len(),
        steps = builder.steps.len(),
        bytes = builder.current_memory,
        "trace produced"
    );

    Ok(Trace {
        algorithm: Some(algorithm),
        input: input.to_vec(),
        steps: builder.steps,
        memory: builder.current_memory,
    })
}
