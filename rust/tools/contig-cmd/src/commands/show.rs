//! Show command implementation

use anyhow::Result;

use crate::commands::{Element, ElementKind, SourceArgs};

/// Run the show command
pub fn run(source: SourceArgs) -> Result<()> {
    match source.kind {
        ElementKind::Int => show::<i64>(&source),
        ElementKind::Float => show::<f64>(&source),
        ElementKind::Text => show::<String>(&source),
    }
}

fn show<T: Element>(source: &SourceArgs) -> Result<()> {
    let seq = source.read_sequence::<T>()?;
    seq.print();
    Ok(())
}
