// src/kmer/enumerate.rs
use ahash::{AHashMap, AHashSet};
use std::fmt;

/// A positional emission: the window's substring and the total number of
/// window positions in the sequence with identical content.
pub type Emission = (String, u32);

/// Errors produced by the k-mer enumerator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KmerError {
    /// The window length is unusable. k = 0 is rejected rather than
    /// producing n+1 empty-string windows.
    InvalidK(usize),
}

impl fmt::Display for KmerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KmerError::InvalidK(k) => write!(f, "invalid k-mer window length: {}", k),
        }
    }
}

impl std::error::Error for KmerError {}

/// Byte offsets of every character boundary in the sequence, including the
/// end. The window starting at character i with length k is the slice
/// between bounds i and i + k.
fn char_bounds(sequence: &str) -> Vec<usize> {
    let mut bounds: Vec<usize> = sequence.char_indices().map(|(i, _)| i).collect();
    bounds.push(sequence.len());
    bounds
}

/// Build the substring -> occurrence count table for every k-character
/// window of the sequence in a single pass.
///
/// Returns an empty table when the sequence is shorter than k characters or
/// k is 0. No alphabet validation is performed: windows are k-character
/// slices of the input, so any character content, multi-byte UTF-8
/// included, is counted as-is.
pub fn count_table(sequence: &str, k: usize) -> AHashMap<String, u32> {
    let mut counts = AHashMap::new();
    let bounds = char_bounds(sequence);
    let n = bounds.len() - 1;
    if k == 0 || n < k {
        return counts;
    }
    for i in 0..=n - k {
        *counts
            .entry(sequence[bounds[i]..bounds[i + k]].to_string())
            .or_insert(0) += 1;
    }
    counts
}

/// Enumerate every k-character window of the sequence in position order,
/// pairing each window with the total occurrence count of its content.
///
/// One emission per window position: a substring occurring at m positions
/// is emitted m times, each time with count m. For a sequence of n
/// characters the result has exactly `max(0, n - k + 1)` entries; a
/// sequence shorter than k yields an empty result, not an error.
///
/// Counts come from a pre-aggregated table, so the whole call is O(n*k)
/// rather than quadratic in the number of windows. The output is identical
/// to [`enumerate_naive`].
pub fn enumerate(sequence: &str, k: usize) -> Result<Vec<Emission>, KmerError> {
    if k == 0 {
        return Err(KmerError::InvalidK(k));
    }
    let bounds = char_bounds(sequence);
    let n = bounds.len() - 1;
    if n < k {
        return Ok(Vec::new());
    }

    let counts = count_table(sequence, k);
    let mut emissions = Vec::with_capacity(n - k + 1);
    for i in 0..=n - k {
        let window = &sequence[bounds[i]..bounds[i + k]];
        let count = counts.get(window).copied().unwrap_or(0);
        emissions.push((window.to_string(), count));
    }
    Ok(emissions)
}

/// Reference enumeration: recount each window's occurrences with a full
/// rescan of the window range.
///
/// Quadratic in the number of windows; kept as the reference algorithm and
/// cross-checked against [`enumerate`] in tests. Use [`enumerate`] for
/// anything beyond short sequences.
pub fn enumerate_naive(sequence: &str, k: usize) -> Result<Vec<Emission>, KmerError> {
    if k == 0 {
        return Err(KmerError::InvalidK(k));
    }
    let bounds = char_bounds(sequence);
    let n = bounds.len() - 1;
    if n < k {
        return Ok(Vec::new());
    }

    let last = n - k;
    let mut emissions = Vec::with_capacity(last + 1);
    for i in 0..=last {
        let window = &sequence[bounds[i]..bounds[i + k]];
        let count = (0..=last)
            .filter(|&j| &sequence[bounds[j]..bounds[j + k]] == window)
            .count() as u32;
        emissions.push((window.to_string(), count));
    }
    Ok(emissions)
}

/// Enumerate one emission per distinct substring, in order of first
/// occurrence, with the same total counts as the positional stream.
pub fn enumerate_distinct(sequence: &str, k: usize) -> Result<Vec<Emission>, KmerError> {
    if k == 0 {
        return Err(KmerError::InvalidK(k));
    }
    let bounds = char_bounds(sequence);
    let n = bounds.len() - 1;
    if n < k {
        return Ok(Vec::new());
    }

    let counts = count_table(sequence, k);
    let mut seen: AHashSet<&str> = AHashSet::with_capacity(counts.len());
    let mut emissions = Vec::with_capacity(counts.len());
    for i in 0..=n - k {
        let window = &sequence[bounds[i]..bounds[i + k]];
        if seen.insert(window) {
            let count = counts.get(window).copied().unwrap_or(0);
            emissions.push((window.to_string(), count));
        }
    }
    Ok(emissions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_emissions_with_repeat() {
        let emissions = enumerate("ATGCATGC", 4).unwrap();
        let expected = vec![
            ("ATGC".to_string(), 2),
            ("TGCA".to_string(), 1),
            ("GCAT".to_string(), 1),
            ("CATG".to_string(), 1),
            ("ATGC".to_string(), 2),
        ];
        assert_eq!(emissions, expected);
    }

    #[test]
    fn test_all_windows_identical() {
        let emissions = enumerate("AAAA", 2).unwrap();
        assert_eq!(emissions, vec![("AA".to_string(), 3); 3]);
    }

    #[test]
    fn test_empty_sequence_is_empty_result() {
        assert!(enumerate("", 3).unwrap().is_empty());
    }

    #[test]
    fn test_k_longer_than_sequence_is_empty_result() {
        assert!(enumerate("ACGT", 5).unwrap().is_empty());
    }

    #[test]
    fn test_k_zero_is_rejected() {
        assert_eq!(enumerate("AC", 0), Err(KmerError::InvalidK(0)));
        assert_eq!(enumerate_naive("AC", 0), Err(KmerError::InvalidK(0)));
        assert_eq!(enumerate_distinct("AC", 0), Err(KmerError::InvalidK(0)));
    }

    #[test]
    fn test_count_table_totals() {
        let counts = count_table("ATGCATGC", 4);
        assert_eq!(counts.len(), 4);
        assert_eq!(counts.get("ATGC"), Some(&2));
        assert_eq!(counts.get("TGCA"), Some(&1));
        // Total window positions accounted for
        assert_eq!(counts.values().sum::<u32>(), 5);
    }

    #[test]
    fn test_naive_matches_table_backed() {
        for (seq, k) in [
            ("ATGCATGC", 4),
            ("AAAA", 2),
            ("ACGT", 1),
            ("banana", 3),
            ("GATTACA", 7),
            ("", 1),
        ] {
            assert_eq!(enumerate(seq, k).unwrap(), enumerate_naive(seq, k).unwrap());
        }
    }

    #[test]
    fn test_distinct_first_occurrence_order() {
        let emissions = enumerate_distinct("ATGCATGC", 4).unwrap();
        let expected = vec![
            ("ATGC".to_string(), 2),
            ("TGCA".to_string(), 1),
            ("GCAT".to_string(), 1),
            ("CATG".to_string(), 1),
        ];
        assert_eq!(emissions, expected);
    }

    #[test]
    fn test_non_nucleotide_content_is_accepted() {
        let emissions = enumerate("banana", 3).unwrap();
        assert_eq!(emissions.len(), 4);
        assert_eq!(emissions[1], ("ana".to_string(), 2));
        assert_eq!(emissions[3], ("ana".to_string(), 2));
    }

    #[test]
    fn test_multibyte_characters_window_by_character() {
        // Windows cover k characters, not k bytes
        let emissions = enumerate("ééé", 2).unwrap();
        assert_eq!(emissions, vec![("éé".to_string(), 2); 2]);

        let counts = count_table("ééé", 2);
        assert_eq!(counts.get("éé"), Some(&2));
    }
}
