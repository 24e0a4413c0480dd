//! LSD radix sort, base 10
//!
//! Each pass is a stable counting sort on one decimal digit. The output
//! buffer is never exposed: placements into it are recorded with the working
//! array unchanged, and the copy-back moves each buffered value into its slot
//! by exchanging it with wherever it currently sits.
//!
//! Values must be non-negative; the trace aggregator rejects anything else
//! before a machine is built.

use super::{SortMachine, SortedSweep, StepBuffer};
use crate::step::StepKind;

const RADIX: usize = 10;

enum Phase {
    Announce,
    PassStart,
    Count { i: usize },
    /// Right-to-left placement; `remaining` elements still to place
    Place { remaining: usize },
    CopyBack { i: usize },
    Sweep(SortedSweep),
}

pub struct RadixSort {
    arr: Vec<i64>,
    max: i64,
    digits: u32,
    pass: u32,
    exp: i64,
    counts: [usize; RADIX],
    output: Vec<i64>,
    phase: Phase,
}

/// Number of decimal digits in `max`; zero (and anything below) has one
pub fn decimal_digits(max: i64) -> u32 {
    let mut digits = 1;
    let mut rest = max / 10;
    while rest > 0 {
        digits += 1;
        rest /= 10;
    }
    digits
}

fn digit_of(value: i64, exp: i64) -> usize {
    (value / exp).rem_euclid(RADIX as i64) as usize
}

impl RadixSort {
    pub fn new(arr: Vec<i64>) -> Self {
        let max = arr.iter().copied().max().unwrap_or(0);
        let n = arr.len();
        RadixSort {
            arr,
            max,
            digits: decimal_digits(max),
            pass: 0,
            exp: 1,
            counts: [0; RADIX],
            output: vec![0; n],
            phase: Phase::Announce,
        }
    }
}

impl SortMachine for RadixSort {
    fn advance(&mut self, out: &mut StepBuffer) -> bool {
        let n = self.arr.len();
        let arr = &mut self.arr;

        match &mut self.phase {
            Phase::Sweep(sweep) => return sweep.advance(arr, out),
            Phase::Announce => {
                if n == 0 {
                    self.phase = Phase::Sweep(SortedSweep::default());
                    return true;
                }
                out.emit(
                    StepKind::Digit,
                    vec![],
                    arr,
                    format!(
                        "Maximum number is {}, sorting by {} digit{}",
                        self.max,
                        self.digits,
                        if self.digits == 1 { "" } else { "s" }
                    ),
                );
                self.phase = Phase::PassStart;
            }
            Phase::PassStart => {
                if self.pass >= self.digits {
                    self.phase = Phase::Sweep(SortedSweep::default());
                    return true;
                }
                out.emit(
                    StepKind::Digit,
                    vec![],
                    arr,
                    format!("Sorting by digit at position {}", self.pass + 1),
                );
                self.counts = [0; RADIX];
                self.phase = Phase::Count { i: 0 };
            }
            Phase::Count { i } => {
                let idx = *i;
                if idx < n {
                    let digit = digit_of(arr[idx], self.exp);
                    self.counts[digit] += 1;
                    out.emit(
                        StepKind::Count,
                        vec![idx],
                        arr,
                        format!("Counting digit {} for element {}", digit, arr[idx]),
                    );
                    *i += 1;
                } else {
                    // Frequencies become end positions
                    for d in 1..RADIX {
                        self.counts[d] += self.counts[d - 1];
                    }
                    self.phase = Phase::Place { remaining: n };
                }
            }
            Phase::Place { remaining } => {
                if *remaining > 0 {
                    let idx = *remaining - 1;
                    let digit = digit_of(arr[idx], self.exp);
                    self.counts[digit] -= 1;
                    let position = self.counts[digit];
                    self.output[position] = arr[idx];
                    out.emit(
                        StepKind::Distribute,
                        vec![idx, position],
                        arr,
                        format!(
                            "Placing {} at position {} based on digit {}",
                            arr[idx], position, digit
                        ),
                    );
                    *remaining -= 1;
                } else {
                    self.phase = Phase::CopyBack { i: 0 };
                }
            }
            Phase::CopyBack { i } => {
                let idx = *i;
                if idx < n {
                    let wanted = self.output[idx];
                    // arr[idx..] holds exactly the values of output[idx..]
                    let from = (idx..n).find(|&k| arr[k] == wanted).unwrap_or(idx);
                    arr.swap(idx, from);
                    let indices = if from == idx { vec![idx] } else { vec![idx, from] };
                    out.emit(
                        StepKind::Distribute,
                        indices,
                        arr,
                        "Updating array with sorted elements",
                    );
                    *i += 1;
                } else {
                    self.pass += 1;
                    self.exp = self.exp.saturating_mul(RADIX as i64);
                    self.phase = Phase::PassStart;
                }
            }
        }
        true
    }
}
