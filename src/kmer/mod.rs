//! K-mer enumeration and frequency counting.

pub mod enumerate;

pub use enumerate::{count_table, enumerate, enumerate_distinct, enumerate_naive, Emission, KmerError};
