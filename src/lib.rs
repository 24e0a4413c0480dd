//! # Introduction
//!
//! sortscope runs a sorting algorithm to completion while recording every
//! comparison, swap and structural event as a [`step::Step`]. The recorded
//! [`trace::Trace`] is then navigated forward and backward through a
//! terminal UI built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Input → Algorithm (SortMachine) → StepStream → Trace → PlaybackController → TUI
//! ```
//!
//! 1. [`input`]: generated or user-entered arrays, validated.
//! 2. [`algorithms`]: seven sorting algorithms written as resumable state
//!    machines; each yields one step at a time through a lazy iterator.
//! 3. [`trace`]: drains an algorithm's steps into an immutable trace,
//!    bounded by input length and a memory budget.
//! 4. [`playback`]: a cursor over the trace; every displayed value is a
//!    function of the trace and the cursor.
//! 5. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Supported algorithms
//!
//! Bubble, selection, insertion, merge, quick (Lomuto partition), heap and
//! LSD radix sort (non-negative integers only).

pub mod algorithms;
pub mod constants;
pub mod input;
pub mod playback;
pub mod step;
pub mod trace;
pub mod ui;
