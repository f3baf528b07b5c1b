// src/io/report.rs
use std::fs::File;
use std::io::{self, BufWriter, Write};
use flate2::write::GzEncoder;
use flate2::Compression;
use serde::Serialize;

use crate::kmer::Emission;

#[derive(Serialize)]
struct EmissionRow<'a> {
    kmer: &'a str,
    count: u32,
}

/// Writes the emission stream to stdout, a file, or a gzipped file.
pub enum EmissionWriter {
    Stdout(io::Stdout),
    Plain(BufWriter<File>),
    Compressed(BufWriter<GzEncoder<File>>),
}

impl EmissionWriter {
    pub fn stdout() -> Self {
        EmissionWriter::Stdout(io::stdout())
    }

    pub fn create(path: &str) -> io::Result<Self> {
        let file = File::create(path)?;
        if path.ends_with(".gz") {
            let encoder = GzEncoder::new(file, Compression::default());
            Ok(EmissionWriter::Compressed(BufWriter::new(encoder)))
        } else {
            Ok(EmissionWriter::Plain(BufWriter::new(file)))
        }
    }

    /// Write one emission in the reference rendering: substring, tab, count.
    pub fn write_emission(&mut self, kmer: &str, count: u32) -> io::Result<()> {
        match self {
            EmissionWriter::Stdout(w) => writeln!(w, "{}\t{}", kmer, count),
            EmissionWriter::Plain(w) => writeln!(w, "{}\t{}", kmer, count),
            EmissionWriter::Compressed(w) => writeln!(w, "{}\t{}", kmer, count),
        }
    }

    /// Write the whole stream as tab-separated lines, one per emission.
    pub fn write_emissions(&mut self, emissions: &[Emission]) -> io::Result<()> {
        for (kmer, count) in emissions {
            self.write_emission(kmer, *count)?;
        }
        Ok(())
    }

    /// Write the whole stream as a JSON array of {kmer, count} objects.
    pub fn write_json(&mut self, emissions: &[Emission]) -> io::Result<()> {
        let rows: Vec<EmissionRow> = emissions
            .iter()
            .map(|(kmer, count)| EmissionRow { kmer, count: *count })
            .collect();
        let text = serde_json::to_string_pretty(&rows)?;
        match self {
            EmissionWriter::Stdout(w) => writeln!(w, "{}", text),
            EmissionWriter::Plain(w) => writeln!(w, "{}", text),
            EmissionWriter::Compressed(w) => writeln!(w, "{}", text),
        }
    }

    /// Flush buffered output; for gzipped output this also writes the
    /// gzip trailer.
    pub fn finish(self) -> io::Result<()> {
        match self {
            EmissionWriter::Stdout(mut w) => w.flush(),
            EmissionWriter::Plain(mut w) => w.flush(),
            EmissionWriter::Compressed(w) => {
                let encoder = w.into_inner().map_err(|e| e.into_error())?;
                encoder.finish()?;
                Ok(())
            }
        }
    }
}
