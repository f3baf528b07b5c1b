use clap::Parser;
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

use kmerscan::cli_main::{Cli, Commands};
use kmerscan::io::fasta::read_fasta_records;
use kmerscan::io::report::EmissionWriter;
use kmerscan::kmer::enumerate::{enumerate, enumerate_distinct, enumerate_naive, Emission};
use kmerscan::stats::calculate_kmer_stats;

fn main() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Setting tracing default failed");

    let cli = Cli::parse();

    match cli.command {
        Commands::Count {
            input,
            sequence,
            k,
            distinct,
            naive,
            output,
            format,
            threads,
        } => {
            info!("Enumerating k-mers with k = {}", k);

            ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global()
                .ok(); // Ignore if already initialized

            // One sequence per FASTA record, or the literal from the flag
            let sequences: Vec<String> = match (input, sequence) {
                (Some(path), None) => match read_fasta_records(&path) {
                    Ok(records) => records.into_iter().map(|r| r.sequence).collect(),
                    Err(e) => {
                        eprintln!("Error reading FASTA input: {}", e);
                        return;
                    }
                },
                (None, Some(seq)) => vec![seq],
                _ => {
                    eprintln!("Error: provide exactly one of --input or --sequence");
                    return;
                }
            };

            // Each record is enumerated independently; collect() keeps
            // record order
            let results: Result<Vec<Vec<Emission>>, _> = sequences
                .par_iter()
                .map(|seq| {
                    if naive {
                        enumerate_naive(seq, k)
                    } else if distinct {
                        enumerate_distinct(seq, k)
                    } else {
                        enumerate(seq, k)
                    }
                })
                .collect();

            let emissions: Vec<Emission> = match results {
                Ok(per_record) => per_record.into_iter().flatten().collect(),
                Err(e) => {
                    eprintln!("Error during enumeration: {}", e);
                    return;
                }
            };

            let mut writer = match output {
                Some(path) => match EmissionWriter::create(&path) {
                    Ok(w) => w,
                    Err(e) => {
                        eprintln!("Error creating output file: {}", e);
                        return;
                    }
                },
                None => EmissionWriter::stdout(),
            };

            let written = match format.as_str() {
                "tsv" => writer.write_emissions(&emissions),
                "json" => writer.write_json(&emissions),
                _ => {
                    eprintln!("Unsupported format: {}", format);
                    return;
                }
            };

            if let Err(e) = written.and_then(|_| writer.finish()) {
                eprintln!("Error writing output: {}", e);
                return;
            }

            info!("Wrote {} emissions", emissions.len());
        }

        Commands::Stats { input, k, format } => {
            info!("Calculating k-mer statistics for: {}", input);

            let records = match read_fasta_records(&input) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("Error reading FASTA input: {}", e);
                    return;
                }
            };

            let stats = match calculate_kmer_stats(&records, k) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Error calculating statistics: {}", e);
                    return;
                }
            };

            match format.as_str() {
                "json" => {
                    println!("{}", serde_json::to_string_pretty(&stats).unwrap());
                }
                "tsv" => {
                    println!("records\ttotal_windows\tdistinct_kmers\tmax_count\tmost_frequent");
                    println!(
                        "{}\t{}\t{}\t{}\t{}",
                        stats.records,
                        stats.total_windows,
                        stats.distinct_kmers,
                        stats.max_count,
                        stats.most_frequent.as_deref().unwrap_or("-")
                    );
                }
                _ => eprintln!("Unsupported format: {}", format),
            }
        }
    }
}
