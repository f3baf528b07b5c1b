// src/io/fasta.rs
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use flate2::read::MultiGzDecoder;

/// A single FASTA record: the header line (without the leading '>') and the
/// concatenated sequence, whitespace trimmed from each line.
#[derive(Debug, Clone)]
pub struct FastaRecord {
    pub header: String,
    pub sequence: String,
}

/// Open a FASTA file for reading, handles gzipped files automatically
pub fn open_fasta(path: &str) -> io::Result<Box<dyn BufRead>> {
    let file = File::open(path)?;
    if path.ends_with(".gz") {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Stream FASTA records for memory-efficient processing
///
/// Multi-line sequences are concatenated into a single string per record.
/// Lines before the first header are skipped. A read error from the
/// underlying stream is surfaced as an `Err` item.
pub fn stream_fasta_records<R: BufRead>(reader: R) -> impl Iterator<Item = io::Result<FastaRecord>> {
    let lines = reader.lines();
    FastaStreamParser { lines, pending: None }
}

/// Iterator adaptor to handle streaming FASTA parsing
pub struct FastaStreamParser<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    lines: I,
    pending: Option<String>,
}

impl<I> Iterator for FastaStreamParser<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    type Item = io::Result<FastaRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        let header = match self.pending.take() {
            Some(h) => h,
            None => loop {
                match self.lines.next() {
                    Some(Ok(line)) => {
                        if let Some(h) = line.strip_prefix('>') {
                            break h.to_string();
                        }
                    }
                    Some(Err(e)) => return Some(Err(e)),
                    None => return None,
                }
            },
        };

        let mut sequence = String::new();
        loop {
            match self.lines.next() {
                Some(Ok(line)) => {
                    if let Some(h) = line.strip_prefix('>') {
                        // Next record starts here
                        self.pending = Some(h.to_string());
                        break;
                    }
                    sequence.push_str(line.trim());
                }
                Some(Err(e)) => return Some(Err(e)),
                None => break,
            }
        }

        Some(Ok(FastaRecord { header, sequence }))
    }
}

/// Read all records of a FASTA(.gz) file into memory, in file order.
pub fn read_fasta_records(path: &str) -> io::Result<Vec<FastaRecord>> {
    let reader = open_fasta(path)?;
    stream_fasta_records(reader).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};

    #[test]
    fn test_stream_multiline_records() {
        let data = ">rec1 first\nATGC\nATGC\n>rec2\nAAAA\n";
        let records: Vec<_> = stream_fasta_records(Cursor::new(data))
            .collect::<io::Result<_>>()
            .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].header, "rec1 first");
        assert_eq!(records[0].sequence, "ATGCATGC");
        assert_eq!(records[1].header, "rec2");
        assert_eq!(records[1].sequence, "AAAA");
    }

    #[test]
    fn test_leading_junk_is_skipped() {
        let data = "; comment\n>rec\nACGT\n";
        let records: Vec<_> = stream_fasta_records(Cursor::new(data))
            .collect::<io::Result<_>>()
            .unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].sequence, "ACGT");
    }

    #[test]
    fn test_empty_input_yields_no_records() {
        assert!(stream_fasta_records(Cursor::new("")).next().is_none());
    }

    /// Reader that serves its data and then fails instead of reporting EOF
    struct FailingReader {
        data: &'static [u8],
        pos: usize,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.pos < self.data.len() {
                buf[0] = self.data[self.pos];
                self.pos += 1;
                Ok(1)
            } else {
                Err(io::Error::new(io::ErrorKind::Other, "read failed"))
            }
        }
    }

    #[test]
    fn test_mid_stream_read_error_is_surfaced() {
        let reader = BufReader::new(FailingReader {
            data: b">rec\nACGT\n",
            pos: 0,
        });
        let mut stream = stream_fasta_records(reader);

        // The error must come through as an item, not truncate the stream
        assert!(stream.next().unwrap().is_err());
    }
}
