//! Document writer bound to the lifetime of its output destination
//!
//! A [`DocumentWriter`] writes the preamble as soon as it is created and the
//! closing `\end{document}` exactly once when it is released, whether that
//! happens through [`DocumentWriter::close`], [`DocumentWriter::finish`] or
//! `Drop` on an early return, `?` or panic.

use crate::config::PreambleConfig;
use crate::error::{Result, TexwriteError};
use crate::list::ListBlock;
use crate::template::{CLOSING_MARKER, LATEX_HEADER};
use crate::title::Title;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, warn};

/// Writes a LaTeX document into an exclusively owned destination
///
/// The destination is `None` once the writer has been released; every write
/// after that point fails with [`TexwriteError::WriterClosed`].
#[derive(Debug)]
pub struct DocumentWriter<W: Write> {
    out: Option<W>,
}

impl DocumentWriter<BufWriter<File>> {
    /// Create (or truncate) the file at `path` and write the default preamble
    ///
    /// # Errors
    ///
    /// Returns [`TexwriteError::OpenFailed`] if the file cannot be created, or
    /// [`TexwriteError::IoError`] if the preamble cannot be written.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        Self::create_with_header(path.as_ref(), LATEX_HEADER)
    }

    /// Like [`DocumentWriter::create`] with a preamble rendered from `config`
    pub fn create_with(path: impl AsRef<Path>, config: &PreambleConfig) -> Result<Self> {
        config.validate()?;
        Self::create_with_header(path.as_ref(), &config.render())
    }

    fn create_with_header(path: &Path, header: &str) -> Result<Self> {
        let file = File::create(path).map_err(|source| TexwriteError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "opened document");

        Self::with_preamble(BufWriter::new(file), header)
    }
}

impl<W: Write> DocumentWriter<W> {
    /// Take ownership of `out` and write the default preamble into it
    pub fn new(out: W) -> Result<Self> {
        Self::with_preamble(out, LATEX_HEADER)
    }

    /// Take ownership of `out` and write `preamble` verbatim
    pub fn with_preamble(mut out: W, preamble: &str) -> Result<Self> {
        out.write_all(preamble.as_bytes())?;
        Ok(Self { out: Some(out) })
    }

    pub fn is_open(&self) -> bool {
        self.out.is_some()
    }

    /// Append `line` and a newline, without escaping
    pub fn write_line(&mut self, line: &str) -> Result<()> {
        let out = self.out.as_mut().ok_or(TexwriteError::WriterClosed)?;
        out.write_all(line.as_bytes())?;
        out.write_all(b"\n")?;
        Ok(())
    }

    /// Write the title declarations followed by `\maketitle`
    ///
    /// Meant to be called once, before the body.
    pub fn write_title(&mut self, title: &Title) -> Result<()> {
        if !self.is_open() {
            return Err(TexwriteError::WriterClosed);
        }

        for line in title.render_lines() {
            self.write_line(&line)?;
        }
        Ok(())
    }

    /// Open an `enumerate` list in the document body
    pub fn list(&mut self, enumerator: Option<&str>) -> Result<ListBlock<'_, W>> {
        ListBlock::open(self, enumerator)
    }

    /// Run `body` inside a list that is closed when `body` returns
    ///
    /// An error from `body` takes precedence over one from closing the list.
    pub fn with_list<T>(
        &mut self,
        enumerator: Option<&str>,
        body: impl FnOnce(&mut ListBlock<'_, W>) -> Result<T>,
    ) -> Result<T> {
        let mut list = self.list(enumerator)?;
        let value = body(&mut list);
        let closed = list.close();
        let value = value?;
        closed?;
        Ok(value)
    }

    /// Write the closing marker and release the destination
    ///
    /// Calling this again is a no-op.
    pub fn close(&mut self) -> Result<()> {
        match self.out.take() {
            Some(out) => Self::release(out).map(drop),
            None => Ok(()),
        }
    }

    /// Close the document and hand back the destination
    pub fn finish(mut self) -> Result<W> {
        let out = self.out.take().ok_or(TexwriteError::WriterClosed)?;
        Self::release(out)
    }

    fn release(mut out: W) -> Result<W> {
        out.write_all(CLOSING_MARKER.as_bytes())?;
        out.flush()?;
        debug!("closed document");
        Ok(out)
    }
}

impl<W: Write> Drop for DocumentWriter<W> {
    fn drop(&mut self) {
        if let Some(out) = self.out.take() {
            if let Err(e) = Self::release(out) {
                warn!("failed to close document on drop: {}", e);
            }
        }
    }
}

/// Create a document at `path`, run `body`, then close it
///
/// The document is closed on every path out of `body`. An error from `body`
/// takes precedence over one from closing.
///
/// # Examples
///
/// ```no_run
/// use texwrite_core::{write_document, Title};
///
/// # fn main() -> texwrite_core::Result<()> {
/// write_document("out.tex", |doc| {
///     doc.write_title(&Title::new("Ein Test").author("Michael Entrup"))?;
///     doc.with_list(None, |list| list.item("Dies ist ein Test."))
/// })?;
/// # Ok(())
/// # }
/// ```
pub fn write_document<T>(
    path: impl AsRef<Path>,
    body: impl FnOnce(&mut DocumentWriter<BufWriter<File>>) -> Result<T>,
) -> Result<T> {
    let mut doc = DocumentWriter::create(path)?;
    let value = body(&mut doc);
    let closed = doc.close();
    let value = value?;
    closed?;
    Ok(value)
}
