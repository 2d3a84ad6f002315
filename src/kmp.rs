//! Knuth-Morris-Pratt substring search over arbitrary symbol slices.
//!
//! A byte [`Matcher`] (the default, and what `FromStr` builds) reports byte
//! offsets. [`Matcher::for_chars`] searches `char`s and reports character
//! positions.

use std::str::FromStr;

use crate::error::{Error, Result};

/// Computes the failure table (LPS array) of `pattern`.
///
/// `table[i]` is the length of the longest proper prefix of `pattern[..=i]`
/// that is also a suffix of it. An empty pattern yields an empty table.
pub fn build_failure_table<T: PartialEq>(pattern: &[T]) -> Vec<usize> {
    let m = pattern.len();
    let mut t = vec![0; m];

    let mut i = 1;
    let mut j = 0;
    while i < m {
        if pattern[i] == pattern[j] {
            j += 1;
            t[i] = j;
            i += 1;
        } else if j == 0 {
            t[i] = 0;
            i += 1;
        } else {
            j = t[j - 1];
        }
    }
    t
}

/// Returns the start of every occurrence of `pattern` in `text`, overlapping
/// occurrences included, in ascending order.
///
/// An empty pattern or an empty text never matches.
pub fn search_all<T: PartialEq>(text: &[T], pattern: &[T]) -> Vec<usize> {
    let table = build_failure_table(pattern);
    scan(text, pattern, &table, false, &mut |_: Step| {})
}

/// Returns the start of the first occurrence of `pattern` in `text`.
pub fn search_first<T: PartialEq>(text: &[T], pattern: &[T]) -> Option<usize> {
    let table = build_failure_table(pattern);
    scan(text, pattern, &table, true, &mut |_: Step| {}).first().copied()
}

/// Rejects patterns the reusable [`Matcher`] cannot be built from.
pub fn validate_input<T>(pattern: &[T]) -> Result<()> {
    if pattern.is_empty() {
        return Err(Error::InvalidArgument("Pattern cannot be empty"));
    }
    Ok(())
}

/// A single event of a scan, as reported to a [`StepObserver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// `text[text_idx]` was compared with `pattern[pattern_idx]`.
    Compare {
        text_idx: usize,
        pattern_idx: usize,
        matched: bool,
    },
    /// The pattern cursor fell back through the failure table.
    Fallback { from: usize, to: usize },
    /// A full occurrence starting at `start`.
    Match { start: usize },
}

/// Receives every [`Step`] of an observed search. Observers see the scan but
/// cannot influence it.
pub trait StepObserver {
    fn step(&mut self, step: Step);
}

impl<F: FnMut(Step)> StepObserver for F {
    fn step(&mut self, step: Step) {
        self(step)
    }
}

/// Logs each step at `TRACE` level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl StepObserver for TracingObserver {
    fn step(&mut self, step: Step) {
        match step {
            Step::Compare {
                text_idx,
                pattern_idx,
                matched,
            } => tracing::trace!(text_idx, pattern_idx, matched, "compare"),
            Step::Fallback { from, to } => tracing::trace!(from, to, "fallback"),
            Step::Match { start } => tracing::trace!(start, "match"),
        }
    }
}

/// A pattern together with its precomputed failure table, reusable across
/// any number of texts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matcher<T = u8> {
    pattern: Vec<T>,
    table: Vec<usize>,
}

impl<T: PartialEq + Clone> Matcher<T> {
    /// Fails with [`Error::InvalidArgument`] if `pattern` is empty.
    pub fn new(pattern: &[T]) -> Result<Self> {
        validate_input(pattern)?;
        let table = build_failure_table(pattern);
        tracing::debug!(len = pattern.len(), "built failure table");
        Ok(Self {
            pattern: pattern.to_vec(),
            table,
        })
    }
}

impl<T: PartialEq> Matcher<T> {
    pub fn search_all(&self, text: &[T]) -> Vec<usize> {
        scan(text, &self.pattern, &self.table, false, &mut |_: Step| {})
    }

    pub fn search_first(&self, text: &[T]) -> Option<usize> {
        scan(text, &self.pattern, &self.table, true, &mut |_: Step| {})
            .first()
            .copied()
    }

    /// Same result as [`Matcher::search_all`], reporting every step to
    /// `observer` along the way.
    pub fn search_observed(&self, text: &[T], observer: &mut impl StepObserver) -> Vec<usize> {
        scan(text, &self.pattern, &self.table, false, observer)
    }

    pub fn failure_table(&self) -> &[usize] {
        &self.table
    }

    pub fn pattern(&self) -> &[T] {
        &self.pattern
    }

    /// Length of the pattern; never zero.
    pub fn len(&self) -> usize {
        self.pattern.len()
    }
}

impl FromStr for Matcher<u8> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Matcher::new(s.as_bytes())
    }
}

impl TryFrom<&str> for Matcher<u8> {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl Matcher<char> {
    /// Matcher over the characters of `pattern`.
    pub fn for_chars(pattern: &str) -> Result<Self> {
        Matcher::new(&pattern.chars().collect::<Vec<_>>())
    }

    /// Character positions of every occurrence in `text`.
    pub fn search_str(&self, text: &str) -> Vec<usize> {
        self.search_all(&text.chars().collect::<Vec<_>>())
    }
}

fn scan<T: PartialEq>(
    text: &[T],
    pattern: &[T],
    table: &[usize],
    first_only: bool,
    observer: &mut impl StepObserver,
) -> Vec<usize> {
    let mut positions = vec![];
    let n = text.len();
    let m = pattern.len();
    if n == 0 || m == 0 || m > n {
        return positions;
    }

    let mut t_i = 0;
    let mut p_i = 0;
    while t_i < n {
        let matched = text[t_i] == pattern[p_i];
        observer.step(Step::Compare {
            text_idx: t_i,
            pattern_idx: p_i,
            matched,
        });

        if matched {
            t_i += 1;
            p_i += 1;
            if p_i == m {
                let start = t_i - p_i;
                observer.step(Step::Match { start });
                positions.push(start);
                if first_only {
                    break;
                }
                p_i = fall_back(table, p_i, observer);
            }
        } else if p_i == 0 {
            t_i += 1;
        } else {
            p_i = fall_back(table, p_i, observer);
        }
    }
    positions
}

fn fall_back(table: &[usize], p_i: usize, observer: &mut impl StepObserver) -> usize {
    let to = table[p_i - 1];
    observer.step(Step::Fallback { from: p_i, to });
    to
}

#[cfg(test)]
#[path = "kmp_tests.rs"]
mod tests;
