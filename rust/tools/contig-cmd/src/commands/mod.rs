//! Subcommand implementations and the input handling they share.

use std::fmt::{Debug, Display};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use contig_sequence::{ReadOutcome, Sequence, SequenceOptions};

pub mod edit;
pub mod show;

/// Element types a sequence can be read as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ElementKind {
    /// Signed 64-bit integers
    Int,
    /// 64-bit floating point numbers
    Float,
    /// Whitespace-free words
    Text,
}

/// Bounds shared by every element type the commands work with.
pub trait Element: Default + Clone + PartialEq + FromStr + Display + Debug {}

impl<T> Element for T where T: Default + Clone + PartialEq + FromStr + Display + Debug {}

/// Where the sequence comes from and how it is allocated.
#[derive(Args, Debug)]
pub struct SourceArgs {
    /// Input file in "<count> <e0> <e1> ..." format (defaults to stdin)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Element type of the sequence
    #[arg(short, long, value_enum, default_value_t = ElementKind::Int)]
    pub kind: ElementKind,

    /// JSON file with sequence options ("initial_capacity", "growth_step")
    #[arg(long)]
    pub options: Option<PathBuf>,

    /// Initial capacity, overrides the options file
    #[arg(long)]
    pub capacity: Option<usize>,

    /// Capacity growth step, overrides the options file
    #[arg(long)]
    pub growth_step: Option<usize>,
}

impl SourceArgs {
    /// Resolves the sequence options: defaults, then the options file, then flags.
    pub fn load_options(&self) -> Result<SequenceOptions> {
        let mut options = match &self.options {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read options file: {}", path.display()))?;
                serde_json::from_str::<SequenceOptions>(&text)
                    .with_context(|| format!("Invalid options file: {}", path.display()))?
            }
            None => SequenceOptions::default(),
        };
        if let Some(capacity) = self.capacity {
            options = options.with_initial_capacity(capacity);
        }
        if let Some(growth_step) = self.growth_step {
            options = options.with_growth_step(growth_step);
        }
        tracing::debug!(?options, "resolved sequence options");
        Ok(options)
    }

    /// Reads the sequence from the input file or stdin.
    ///
    /// A truncated read is not an error: the elements read so far are kept and a
    /// warning goes to stderr.
    pub fn read_sequence<T: Element>(&self) -> Result<Sequence<T>> {
        let options = self.load_options()?;
        let mut seq = Sequence::with_options(&options);
        let outcome = match &self.input {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("Failed to open input: {}", path.display()))?;
                read_into(&mut seq, BufReader::new(file))?
            }
            None => read_into(&mut seq, io::stdin().lock())?,
        };
        if !outcome.is_complete() {
            eprintln!(
                "warning: input stopped after {} of {} elements",
                outcome.read, outcome.requested
            );
        }
        Ok(seq)
    }
}

fn read_into<T: Element, R: BufRead>(seq: &mut Sequence<T>, reader: R) -> Result<ReadOutcome> {
    seq.read_from(reader)
        .context("Failed to read sequence input")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn source(options: Option<PathBuf>) -> SourceArgs {
        SourceArgs {
            input: None,
            kind: ElementKind::Int,
            options,
            capacity: None,
            growth_step: None,
        }
    }

    #[test]
    fn test_default_options() {
        let options = source(None).load_options().unwrap();
        assert_eq!(options, SequenceOptions::default());
    }

    #[test]
    fn test_options_file_and_overrides() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "initial_capacity": 3, "growth_step": 5 }}"#).unwrap();

        let mut args = source(Some(file.path().to_path_buf()));
        let options = args.load_options().unwrap();
        assert_eq!(options.initial_capacity, 3);
        assert_eq!(options.growth_step, 5);

        args.growth_step = Some(9);
        let options = args.load_options().unwrap();
        assert_eq!(options.initial_capacity, 3);
        assert_eq!(options.growth_step, 9);
    }

    #[test]
    fn test_invalid_options_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(source(Some(file.path().to_path_buf())).load_options().is_err());
    }

    #[test]
    fn test_read_sequence_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "3 4 5 6").unwrap();

        let mut args = source(None);
        args.input = Some(file.path().to_path_buf());
        args.capacity = Some(2);
        let seq = args.read_sequence::<i64>().unwrap();
        assert_eq!(seq.as_slice(), &[4, 5, 6]);
        assert_eq!(seq.capacity(), 102);
    }
}
