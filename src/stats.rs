use ahash::AHashMap;
use serde::Serialize;

use crate::io::fasta::FastaRecord;
use crate::kmer::enumerate::{count_table, KmerError};

/// Summary of the k-mer content of a set of FASTA records.
#[derive(Debug, Serialize)]
pub struct KmerStats {
    pub records: usize,
    pub total_windows: usize,
    pub distinct_kmers: usize,
    pub max_count: u32,
    pub most_frequent: Option<String>,
}

/// Aggregate k-mer counts across records and summarize them.
///
/// Each record is counted independently and the tables are merged, so a
/// k-mer spanning a record boundary is never counted.
pub fn calculate_kmer_stats(records: &[FastaRecord], k: usize) -> Result<KmerStats, KmerError> {
    if k == 0 {
        return Err(KmerError::InvalidK(k));
    }

    let mut merged: AHashMap<String, u32> = AHashMap::new();
    let mut total_windows = 0usize;

    for record in records {
        // Window positions are counted in characters, like the enumerator
        let chars = record.sequence.chars().count();
        if chars >= k {
            total_windows += chars - k + 1;
        }
        for (kmer, count) in count_table(&record.sequence, k) {
            *merged.entry(kmer).or_insert(0) += count;
        }
    }

    // Ties broken toward the lexicographically smallest k-mer
    let (most_frequent, max_count) = merged
        .iter()
        .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
        .map(|(kmer, &count)| (Some(kmer.clone()), count))
        .unwrap_or((None, 0));

    Ok(KmerStats {
        records: records.len(),
        total_windows,
        distinct_kmers: merged.len(),
        max_count,
        most_frequent,
    })
}
