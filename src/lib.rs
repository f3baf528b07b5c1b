//! Sliding-window k-mer enumeration with per-window occurrence counts.
//!
//! The core routine walks every length-k window of a sequence and pairs it
//! with the number of window positions sharing its content. Duplicated
//! substrings are emitted once per position by default; a distinct mode
//! deduplicates to first-occurrence order.

pub mod cli_main;
pub mod io;
pub mod kmer;
pub mod stats;
