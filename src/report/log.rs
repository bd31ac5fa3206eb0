use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::ClassificationVerdict;
use crate::report::Summary;

/// Write one `NC-license detected: ...` line per verdict, then the summary.
/// An existing file is truncated.
pub fn write(path: &Path, verdicts: &[ClassificationVerdict], summary: &Summary) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let mut out = BufWriter::new(file);
    write_to(&mut out, verdicts, summary)?;
    out.flush()?;
    tracing::info!(path = %path.display(), "wrote log file");
    Ok(())
}

fn write_to<W: Write>(
    out: &mut W,
    verdicts: &[ClassificationVerdict],
    summary: &Summary,
) -> Result<()> {
    for verdict in verdicts {
        writeln!(out, "{}", verdict)?;
    }
    writeln!(out, "{}", summary)?;
    Ok(())
}
