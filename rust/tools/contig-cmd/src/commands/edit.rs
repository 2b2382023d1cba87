//! Edit command implementation

use std::io::{self, Write};

use anyhow::{Context, Result, anyhow, bail};
use contig_sequence::Sequence;

use crate::commands::{Element, ElementKind, SourceArgs};

/// A single scripted operation, parsed from text such as `"insert_at 0 7"`.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation<T> {
    PushBack(T),
    PushFront(T),
    PopBack,
    PopFront,
    InsertAt(usize, T),
    ChangeAt(usize, T),
    RemoveAt(usize),
    RemoveAll(T),
    ChangeAll(T, T),
    Clear,
    Reserve(usize),
    Resize(usize),
    ShrinkToFit,
    Find(T),
    FindLast(T),
    Count(T),
}

impl<T: Element> Operation<T> {
    pub fn parse(text: &str) -> Result<Operation<T>> {
        let mut words = text.split_whitespace();
        let name = words.next().ok_or_else(|| anyhow!("empty operation"))?;
        let args: Vec<&str> = words.collect();

        let op = match (name, args.as_slice()) {
            ("push_back", [v]) => Operation::PushBack(value(v)?),
            ("push_front", [v]) => Operation::PushFront(value(v)?),
            ("pop_back", []) => Operation::PopBack,
            ("pop_front", []) => Operation::PopFront,
            ("insert_at", [i, v]) => Operation::InsertAt(index(i)?, value(v)?),
            ("change_at", [i, v]) => Operation::ChangeAt(index(i)?, value(v)?),
            ("remove_at", [i]) => Operation::RemoveAt(index(i)?),
            ("remove_all", [v]) => Operation::RemoveAll(value(v)?),
            ("change_all", [from, to]) => Operation::ChangeAll(value(from)?, value(to)?),
            ("clear", []) => Operation::Clear,
            ("reserve", [n]) => Operation::Reserve(index(n)?),
            ("resize", [n]) => Operation::Resize(index(n)?),
            ("shrink_to_fit", []) => Operation::ShrinkToFit,
            ("find", [v]) => Operation::Find(value(v)?),
            ("find_last", [v]) => Operation::FindLast(value(v)?),
            ("count", [v]) => Operation::Count(value(v)?),
            _ => bail!("unknown operation or wrong argument count: '{text}'"),
        };
        Ok(op)
    }

    /// Applies the operation to `seq`. Queries write their answer to `out`.
    pub fn apply(&self, seq: &mut Sequence<T>, out: &mut impl Write) -> Result<()> {
        match self {
            Operation::PushBack(v) => {
                seq.push_back(v.clone());
            }
            Operation::PushFront(v) => {
                seq.push_front(v.clone());
            }
            Operation::PopBack => {
                seq.pop_back();
            }
            Operation::PopFront => {
                seq.pop_front()?;
            }
            Operation::InsertAt(i, v) => {
                seq.insert_at(*i, v.clone())?;
            }
            Operation::ChangeAt(i, v) => {
                seq.change_at(*i, v.clone())?;
            }
            Operation::RemoveAt(i) => {
                seq.remove_at(*i)?;
            }
            Operation::RemoveAll(v) => {
                seq.remove_all(v);
            }
            Operation::ChangeAll(from, to) => {
                seq.change_all(from, to.clone());
            }
            Operation::Clear => seq.clear(),
            Operation::Reserve(n) => seq.reserve(*n),
            Operation::Resize(n) => seq.resize(*n),
            Operation::ShrinkToFit => seq.shrink_to_fit(),
            Operation::Find(v) => writeln!(out, "find {v}: {}", seq.find(v))?,
            Operation::FindLast(v) => writeln!(out, "find_last {v}: {}", seq.find_last(v))?,
            Operation::Count(v) => writeln!(out, "count {v}: {}", seq.count(v))?,
        }
        Ok(())
    }
}

/// Run the edit command
pub fn run(source: SourceArgs, ops: Vec<String>) -> Result<()> {
    match source.kind {
        ElementKind::Int => edit::<i64>(&source, &ops),
        ElementKind::Float => edit::<f64>(&source, &ops),
        ElementKind::Text => edit::<String>(&source, &ops),
    }
}

fn edit<T: Element>(source: &SourceArgs, ops: &[String]) -> Result<()> {
    // Parse everything up front so a typo does not leave a half-applied script.
    let ops = ops
        .iter()
        .map(|text| Operation::<T>::parse(text))
        .collect::<Result<Vec<_>>>()?;

    let mut seq = source.read_sequence::<T>()?;
    let mut out = io::stdout().lock();
    apply_all(&mut seq, &ops, &mut out)?;
    write!(out, "{seq}")?;
    Ok(())
}

fn apply_all<T: Element>(
    seq: &mut Sequence<T>,
    ops: &[Operation<T>],
    out: &mut impl Write,
) -> Result<()> {
    for (n, op) in ops.iter().enumerate() {
        tracing::debug!(step = n, ?op, "applying operation");
        op.apply(seq, out)
            .with_context(|| format!("Operation #{} ({op:?}) failed", n + 1))?;
    }
    Ok(())
}

fn value<T: Element>(text: &str) -> Result<T> {
    text.parse::<T>()
        .map_err(|_| anyhow!("invalid element value '{text}'"))
}

fn index(text: &str) -> Result<usize> {
    text.parse::<usize>()
        .with_context(|| format!("invalid index '{text}'"))
}
