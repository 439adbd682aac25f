//! Inspect command - parse a corpus and summarize it without scoring.

use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::core::alphabet::{index_letter, letter_index, ALPHABET_SIZE};
use crate::core::record::SeqRecord;
use crate::parsing::fasta::parse_fasta_file;

/// Arguments for the inspect command
#[derive(Args)]
pub struct InspectArgs {
    /// FASTA corpus to inspect
    #[arg(required = true)]
    pub input: PathBuf,
}

/// Execute the inspect command
///
/// # Errors
///
/// Returns an error if the corpus cannot be parsed.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: InspectArgs, format: OutputFormat, _verbose: bool) -> anyhow::Result<()> {
    let corpus = parse_fasta_file(&args.input)?;
    let reference = &corpus[0];

    match format {
        OutputFormat::Text => print_text(&corpus, reference),
        OutputFormat::Json => print_json(&corpus, reference)?,
        OutputFormat::Tsv => print_tsv(&corpus),
    }

    Ok(())
}

fn print_text(corpus: &[SeqRecord], reference: &SeqRecord) {
    println!("Parsed {} sequences", corpus.len());
    println!("Reference: {}", reference.id);
    println!("Sequence length: {}", reference.len());

    let counts: Vec<String> = (0..ALPHABET_SIZE)
        .filter(|&i| reference.counts.get(i) > 0)
        .map(|i| format!("{}:{}", index_letter(i), reference.counts.get(i)))
        .collect();
    println!("Letter counts: {}", counts.join(" "));

    if let Some(idx) = letter_index(b'A') {
        let positions = reference.positions_of(idx);
        if !positions.is_empty() {
            println!("Positions for 'A': {positions:?}");
        }
    }
}

fn print_json(corpus: &[SeqRecord], reference: &SeqRecord) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "records": corpus.len(),
        "reference": {
            "id": reference.id,
            "length": reference.len(),
            "letter_counts": reference.counts,
        },
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv(corpus: &[SeqRecord]) {
    println!("id\tlength\tdistinct_letters");
    for record in corpus {
        let distinct = (0..ALPHABET_SIZE)
            .filter(|&i| record.counts.get(i) > 0)
            .count();
        println!("{}\t{}\t{}", record.id, record.len(), distinct);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_inspect_reads_reference() {
        let mut file = NamedTempFile::with_suffix(".fasta").unwrap();
        file.write_all(b">R first\nAABC\n>Q\nZZ\n").unwrap();
        file.flush().unwrap();

        let corpus = parse_fasta_file(file.path()).unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus[0].id, "R first");
        assert_eq!(corpus[0].counts.get(0), 2);
    }
}
