// module for the median calculator and its error type

use crate::sort::bubble_sort;
use crate::util::join_values;
use std::fmt;
use thiserror::Error;

/// errors the median calculator can signal
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MedianError {
    #[error("no median for an empty list")]
    EmptyInput,
}

/// compute the median of a slice of integers by sorting a private copy
/// and selecting the middle value(s). the caller's slice is never altered.
pub fn compute_median(input: &[i64]) -> Result<f64, MedianError> {
    if input.is_empty() {
        eprintln!("error: empty input given");
        return Err(MedianError::EmptyInput);
    }

    // local copy so the sort never touches the caller's data
    let mut working = input.to_vec();
    bubble_sort(&mut working);

    let n = working.len();
    if n % 2 == 0 {
        // average of the two middle values, divided in floating point to avoid truncation
        Ok((working[n / 2 - 1] as f64 + working[n / 2] as f64) / 2.0)
    } else {
        Ok(working[n / 2] as f64)
    }
}

/// per-case report pairing an input sequence with its computed median
#[derive(Debug)]
pub struct MedianReport<'a> {
    input: &'a [i64],
    median: f64,
}

impl<'a> MedianReport<'a> {
    pub fn new(input: &'a [i64], median: f64) -> Self {
        MedianReport { input, median }
    }
}

impl fmt::Display for MedianReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // format each line with consistent spacing (35 chars for the label)
        writeln!(f, "{:<35} {:>15}", "Values", join_values(self.input))?;
        write!(f, "{:<35} {:>15.2}", "Median", self.median)
    }
}
