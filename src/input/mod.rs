//! Input arrays: generation and validation of user-entered values
//!
//! The sorting core trusts whatever it is given (apart from radix sort's
//! non-negative requirement); this module is where arrays coming from the
//! command line or the keyboard are checked.

use crate::constants::{ARRAY_SIZE_MAX, RANDOM_VALUE_MAX, VALUE_MAX, VALUE_MIN};
use rand::Rng;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Shape of a generated array
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArrayKind {
    #[default]
    Random,
    Reversed,
    NearlySorted,
}

impl ArrayKind {
    pub const ALL: [ArrayKind; 3] = [ArrayKind::Random, ArrayKind::Reversed, ArrayKind::NearlySorted];

    pub fn id(self) -> &'static str {
        match self {
            ArrayKind::Random => "random",
            ArrayKind::Reversed => "reversed",
            ArrayKind::NearlySorted => "nearly-sorted",
        }
    }

    pub fn next(self) -> Self {
        match self {
            ArrayKind::Random => ArrayKind::Reversed,
            ArrayKind::Reversed => ArrayKind::NearlySorted,
            ArrayKind::NearlySorted => ArrayKind::Random,
        }
    }
}

impl fmt::Display for ArrayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ArrayKind {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ArrayKind::ALL
            .into_iter()
            .find(|k| k.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| InputError::UnknownKind(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("array cannot be empty")]
    Empty,
    #[error("array has {count} values, at most {limit} allowed")]
    TooMany { count: usize, limit: usize },
    #[error("invalid number '{0}': use comma-separated integers between {min} and {max}", min = VALUE_MIN, max = VALUE_MAX)]
    InvalidNumber(String),
    #[error("unknown array kind '{0}' (expected random, reversed or nearly-sorted)")]
    UnknownKind(String),
}

/// Generate an array with the thread-local RNG
pub fn generate(kind: ArrayKind, size: usize) -> Vec<i64> {
    generate_with(kind, size, &mut rand::rng())
}

pub fn generate_with<R: Rng>(kind: ArrayKind, size: usize, rng: &mut R) -> Vec<i64> {
    match kind {
        ArrayKind::Random => (0..size)
            .map(|_| rng.random_range(1..=RANDOM_VALUE_MAX))
            .collect(),
        ArrayKind::Reversed => (1..=size as i64).rev().collect(),
        ArrayKind::NearlySorted => {
            let mut arr: Vec<i64> = (1..=size as i64).collect();
            // Disturb roughly a tenth of the positions
            for _ in 0..size / 10 {
                let a = rng.random_range(0..size);
                let b = rng.random_range(0..size);
                arr.swap(a, b);
            }
            arr
        }
    }
}

/// Parse `"5, 3, 8, 1"` into values, enforcing size and value bounds
pub fn parse_custom(text: &str) -> Result<Vec<i64>, InputError> {
    let tokens: Vec<&str> = text
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect();

    if tokens.is_empty() {
        return Err(InputError::Empty);
    }
    if tokens.len() > ARRAY_SIZE_MAX {
        return Err(InputError::TooMany {
            count: tokens.len(),
            limit: ARRAY_SIZE_MAX,
        });
    }

    tokens
        .into_iter()
        .map(|t| match t.parse::<i64>() {
            Ok(v) if (VALUE_MIN..=VALUE_MAX).contains(&v) => Ok(v),
            _ => Err(InputError::InvalidNumber(t.to_string())),
        })
        .collect()
}

pub fn is_sorted(values: &[i64]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}
