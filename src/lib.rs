//! Classic textbook algorithms: KMP substring search (with a reusable
//! matcher and a recursive file search built on it), binary search
//! variants, bubble sort, and stacks.

pub mod binary_search;
pub mod bubble_sort;
pub mod error;
pub mod kmp;
pub mod scan;
pub mod stack;

pub use error::{Error, Result};
pub use kmp::{build_failure_table, search_all, search_first, validate_input, Matcher};
