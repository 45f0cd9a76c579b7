//! Output sinks for a rendered [`MacroSequence`].

use crate::errors::GenError;
use crate::generator::MacroSequence;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Writes the whole rendered text in one go and flushes.
///
/// # Errors
/// Returns `GenError::Io` if the writer fails.
pub fn write_to<W: Write>(seq: &MacroSequence, mut writer: W) -> Result<(), GenError> {
    let text = seq.render();
    writer.write_all(text.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Creates (or truncates) `path` and writes the sequence into it.
///
/// # Errors
/// Returns `GenError::Io` if the file cannot be created or written.
pub fn write_file(seq: &MacroSequence, path: &Path) -> Result<(), GenError> {
    let file = File::create(path).map_err(|e| GenError::Io(format!("{}: {e}", path.display())))?;
    write_to(seq, BufWriter::new(file))?;
    log::info!(
        "wrote {} definitions to {}",
        seq.explicit.len() + seq.recursive.len(),
        path.display()
    );
    Ok(())
}

/// # Errors
/// Returns `GenError::Io` if stdout is closed.
pub fn write_stdout(seq: &MacroSequence) -> Result<(), GenError> {
    let stdout = io::stdout();
    write_to(seq, stdout.lock())
}
