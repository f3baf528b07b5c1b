use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "kmerscan", version, about = "Sliding-window k-mer enumeration and frequency counting", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Enumerate k-mers with per-window occurrence counts
    Count {
        /// Input FASTA(.gz) file, one enumeration per record
        #[arg(short, long)]
        input: Option<String>,

        /// Literal sequence instead of a FASTA input
        #[arg(short, long)]
        sequence: Option<String>,

        /// K-mer window length
        #[arg(short, long)]
        k: usize,

        /// Emit one row per distinct k-mer instead of one per window position
        #[arg(long)]
        distinct: bool,

        /// Recount every window with a full rescan instead of the
        /// pre-aggregated table (reference algorithm, quadratic)
        #[arg(long, conflicts_with = "distinct")]
        naive: bool,

        /// Output file (.gz supported); defaults to stdout
        #[arg(short, long)]
        output: Option<String>,

        /// Output format: tsv or json
        #[arg(long, default_value = "tsv")]
        format: String,

        /// Number of threads to use
        #[arg(long, default_value_t = num_cpus::get())]
        threads: usize,
    },

    /// Summarize the k-mer content of a FASTA input
    Stats {
        /// Input FASTA(.gz) file
        #[arg(short, long)]
        input: String,

        /// K-mer window length
        #[arg(short, long)]
        k: usize,

        /// Output format: tsv or json
        #[arg(long, default_value = "tsv")]
        format: String,
    },
}
