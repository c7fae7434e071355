//! Export boundary: render in memory, then write the file atomically

use super::{CardSink, RenderError};
use crate::core::{CardBatch, GridRank};
use crate::layout::plan_pages;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to render {sink}: {source}")]
    Render {
        sink: &'static str,
        #[source]
        source: RenderError,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A file written by [`export`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub path: PathBuf,
    pub pages: usize,
    pub bytes: usize,
    pub degraded_cells: usize,
}

/// Render `batch` through `sink` and write it into `dir`
///
/// The file name comes from the sink and the rank. Nothing is written unless
/// rendering succeeds, and the file appears under its final name only once it
/// is complete.
///
/// # Errors
/// Returns `ExportError` if rendering fails or the file cannot be written.
pub fn export<S: CardSink + ?Sized>(
    sink: &S,
    batch: &CardBatch,
    rank: GridRank,
    dir: &Path,
    on_page: &mut dyn FnMut(usize),
) -> Result<ExportedFile, ExportError> {
    let pages = plan_pages(batch, sink.mode());
    let rendered = sink
        .render_with_progress(&pages, rank, on_page)
        .map_err(|source| {
            error!(sink = sink.name(), error = %source, "render failed");
            ExportError::Render {
                sink: sink.name(),
                source,
            }
        })?;

    let path = dir.join(sink.file_name(rank));
    write_atomic(&path, &rendered.bytes).map_err(|source| {
        error!(path = %path.display(), error = %source, "export write failed");
        ExportError::Io {
            path: path.clone(),
            source,
        }
    })?;

    info!(
        path = %path.display(),
        pages = rendered.pages,
        bytes = rendered.bytes.len(),
        "exported {}",
        sink.name()
    );
    Ok(ExportedFile {
        path,
        pages: rendered.pages,
        bytes: rendered.bytes.len(),
        degraded_cells: rendered.degraded_cells,
    })
}

/// Write `bytes` to `path` through a temporary file in the same directory
///
/// Missing parent directories are created.
///
/// # Errors
/// Returns the underlying I/O error; the target is left untouched on failure.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(bytes)?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}
