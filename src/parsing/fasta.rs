//! FASTA corpus parser built on noodles.
//!
//! Reads every record into memory, stripping whitespace from sequence lines
//! and normalizing residues to uppercase. Supports both uncompressed and
//! gzip/bgzip compressed files.
//!
//! Supported extensions:
//! - `.fa`, `.fasta`, `.fna` (uncompressed)
//! - `.fa.gz`, `.fasta.gz`, `.fna.gz` (gzip compressed)
//! - `.fa.bgz`, `.fasta.bgz`, `.fna.bgz` (bgzip compressed)

use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::GzDecoder;
use noodles::fasta;
use thiserror::Error;
use tracing::warn;

use crate::core::alphabet::letter_index;
use crate::core::record::SeqRecord;

/// Maximum number of records allowed in a single corpus (DOS protection)
pub const MAX_RECORDS: usize = 100_000;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid FASTA format: {0}")]
    InvalidFormat(String),

    #[error("Too many records: {0} exceeds maximum allowed ({MAX_RECORDS})")]
    TooManyRecords(usize),
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Parse a FASTA file into an ordered corpus of records.
///
/// Records keep their parse order; the first record is the reference for
/// scoring. Sequence bytes are uppercased, whitespace is dropped, and any
/// remaining byte outside A-Z is skipped with a warning rather than used
/// to index letter containers.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read,
/// `ParseError::InvalidFormat` if no records are found or a definition line
/// lacks the `>` marker, or `ParseError::TooManyRecords` if the limit is
/// exceeded.
pub fn parse_fasta_file(path: &Path) -> Result<Vec<SeqRecord>, ParseError> {
    if is_gzipped(path) {
        let file = std::fs::File::open(path)?;
        let decoder = GzDecoder::new(file);
        let reader = BufReader::new(decoder);
        parse_fasta_reader(&mut fasta::io::Reader::new(reader))
    } else {
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        parse_fasta_reader(&mut fasta::io::Reader::new(reader))
    }
}

/// Parse a corpus from a noodles FASTA reader.
///
/// Definition lines are read raw rather than through the record iterator:
/// a bare `>` marker is a valid record with an empty identifier, which the
/// iterator's definition parser rejects.
pub fn parse_fasta_reader<R: BufRead>(
    reader: &mut fasta::io::Reader<R>,
) -> Result<Vec<SeqRecord>, ParseError> {
    let mut corpus = Vec::new();
    let mut definition = String::new();
    let mut sequence = Vec::new();

    loop {
        definition.clear();
        if reader.read_definition(&mut definition)? == 0 {
            break;
        }

        if corpus.len() >= MAX_RECORDS {
            return Err(ParseError::TooManyRecords(corpus.len()));
        }

        let id = match definition.strip_prefix('>') {
            Some(header) => header.trim_end().to_string(),
            None => {
                return Err(ParseError::InvalidFormat(format!(
                    "Expected '>' record marker, found: {definition}"
                )));
            }
        };

        sequence.clear();
        reader.read_sequence(&mut sequence)?;
        let residues = clean_residues(&id, &sequence);

        corpus.push(SeqRecord::new(id, residues));
    }

    if corpus.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No sequences found in FASTA file".to_string(),
        ));
    }

    Ok(corpus)
}

/// Normalize raw sequence bytes into validated uppercase residues.
///
/// Lowercase letters are uppercased, ASCII whitespace is dropped, and any
/// other byte is skipped with a warning naming the record and offset.
fn clean_residues(id: &str, raw: &[u8]) -> String {
    let mut residues = String::with_capacity(raw.len());

    for (offset, &byte) in raw.iter().enumerate() {
        let upper = byte.to_ascii_uppercase();
        if letter_index(upper).is_some() {
            residues.push(char::from(upper));
        } else if !byte.is_ascii_whitespace() {
            warn!(
                record = %id,
                offset,
                byte = %format!("0x{byte:02x}"),
                "skipping non-letter residue byte"
            );
        }
    }

    residues
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_fasta_file() {
        let fasta_content = b">Q1 first record\nAAAB\nBB\n>Q2\nZZZZ\n";

        let mut temp = NamedTempFile::with_suffix(".fa").unwrap();
        temp.write_all(fasta_content).unwrap();
        temp.flush().unwrap();

        let corpus = parse_fasta_file(temp.path()).unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus[0].id, "Q1 first record");
        assert_eq!(corpus[0].residues, "AAABBB"); // lines concatenated
        assert_eq!(corpus[1].id, "Q2");
        assert_eq!(corpus[1].residues, "ZZZZ");
    }

    #[test]
    fn test_parse_preserves_order() {
        let fasta_content = b">c\nCCC\n>a\nAAA\n>b\nBBB\n";

        let mut temp = NamedTempFile::with_suffix(".fa").unwrap();
        temp.write_all(fasta_content).unwrap();
        temp.flush().unwrap();

        let corpus = parse_fasta_file(temp.path()).unwrap();
        let ids: Vec<&str> = corpus.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["c", "a", "b"]);
    }

    #[test]
    fn test_parse_empty_fasta() {
        let mut temp = NamedTempFile::with_suffix(".fa").unwrap();
        temp.write_all(b"").unwrap();
        temp.flush().unwrap();

        let result = parse_fasta_file(temp.path());
        assert!(matches!(result, Err(ParseError::InvalidFormat(_))));
    }

    #[test]
    fn test_parse_missing_file() {
        let result = parse_fasta_file(Path::new("/no/such/corpus.fasta"));
        assert!(matches!(result, Err(ParseError::Io(_))));
    }

    #[test]
    fn test_too_many_records_message_names_limit() {
        let message = ParseError::TooManyRecords(MAX_RECORDS).to_string();
        assert!(message.contains(&MAX_RECORDS.to_string()));
    }

    #[test]
    fn test_clean_residues_uppercases() {
        assert_eq!(clean_residues("q", b"acgtACGT"), "ACGTACGT");
    }

    #[test]
    fn test_clean_residues_skips_non_letters() {
        // '*' (stop) and '-' (gap) must never reach letter indexing
        assert_eq!(clean_residues("q", b"MKV*LA-T"), "MKVLAT");
    }

    #[test]
    fn test_clean_residues_positions_track_retained_bytes() {
        let residues = clean_residues("q", b"A*B");
        let record = SeqRecord::new("q", residues);
        assert_eq!(record.positions_of(0), &[0]);
        assert_eq!(record.positions_of(1), &[1]);
    }

    #[test]
    fn test_parse_gzipped_fasta() {
        use flate2::write::GzEncoder;
        use flate2::Compression;

        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b">Q1\nAAAB\n").unwrap();
        let compressed = encoder.finish().unwrap();

        let mut temp = NamedTempFile::with_suffix(".fa.gz").unwrap();
        temp.write_all(&compressed).unwrap();
        temp.flush().unwrap();

        let corpus = parse_fasta_file(temp.path()).unwrap();
        assert_eq!(corpus.len(), 1);
        assert_eq!(corpus[0].residues, "AAAB");
    }

    #[test]
    fn test_parse_empty_header_tolerated() {
        let fasta_content = b">\nAAAA\n>Q2\nBBBB\n";

        let mut temp = NamedTempFile::with_suffix(".fa").unwrap();
        temp.write_all(fasta_content).unwrap();
        temp.flush().unwrap();

        // A bare marker is a record with an empty identifier
        let corpus = parse_fasta_file(temp.path()).unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus[0].id, "");
        assert_eq!(corpus[0].residues, "AAAA");
        assert_eq!(corpus[1].id, "Q2");
    }

    #[test]
    fn test_parse_missing_marker_rejected() {
        let mut temp = NamedTempFile::with_suffix(".fa").unwrap();
        temp.write_all(b"AAAA\n>Q1\nBBBB\n").unwrap();
        temp.flush().unwrap();

        let result = parse_fasta_file(temp.path());
        assert!(matches!(result, Err(ParseError::InvalidFormat(_))));
    }
}
