//! Nestable `enumerate` list blocks
//!
//! A [`ListBlock`] mutably borrows its parent (the document or an enclosing
//! list) for as long as it is alive, so a nested list always ends before
//! its parent can write again and end markers come out in reverse order of
//! the begin markers.

use crate::document::DocumentWriter;
use crate::error::{Result, TexwriteError};
use crate::template::{self, END_ENUMERATE};
use std::io::Write;
use tracing::{debug, warn};

/// An open `enumerate` environment
///
/// `\begin{enumerate}` is written on creation and `\end{enumerate}` on
/// [`ListBlock::close`] or drop, exactly once.
#[derive(Debug)]
pub struct ListBlock<'a, W: Write> {
    writer: &'a mut DocumentWriter<W>,
    depth: usize,
    active: bool,
}

impl<'a, W: Write> ListBlock<'a, W> {
    /// Open a top-level list in `writer`
    ///
    /// An empty `enumerator` is treated like `None`.
    ///
    /// # Errors
    ///
    /// Returns [`TexwriteError::WriterClosed`] if `writer` has been released.
    pub fn open(writer: &'a mut DocumentWriter<W>, enumerator: Option<&str>) -> Result<Self> {
        Self::open_at(writer, enumerator, 1)
    }

    fn open_at(
        writer: &'a mut DocumentWriter<W>,
        enumerator: Option<&str>,
        depth: usize,
    ) -> Result<Self> {
        if !writer.is_open() {
            return Err(TexwriteError::WriterClosed);
        }

        let enumerator = enumerator.filter(|label| !label.is_empty());
        writer.write_line(&template::begin_enumerate(enumerator))?;
        debug!(depth, ?enumerator, "opened list");

        Ok(Self {
            writer,
            depth,
            active: true,
        })
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Nesting level, 1 for a list directly in the document body
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Write `\item <text>`
    pub fn item(&mut self, text: &str) -> Result<()> {
        self.ensure_active()?;
        self.writer.write_line(&template::item_line(text))
    }

    /// Open a list nested inside this one
    ///
    /// This list cannot be written to until the nested one is dropped.
    pub fn nested(&mut self, enumerator: Option<&str>) -> Result<ListBlock<'_, W>> {
        self.ensure_active()?;
        ListBlock::open_at(&mut *self.writer, enumerator, self.depth + 1)
    }

    /// Run `body` inside a nested list that is closed when `body` returns
    pub fn with_nested<T>(
        &mut self,
        enumerator: Option<&str>,
        body: impl FnOnce(&mut ListBlock<'_, W>) -> Result<T>,
    ) -> Result<T> {
        let mut inner = self.nested(enumerator)?;
        let value = body(&mut inner);
        let closed = inner.close();
        let value = value?;
        closed?;
        Ok(value)
    }

    /// Write the end marker; calling this again is a no-op
    pub fn close(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }

        self.active = false;
        debug!(depth = self.depth, "closed list");
        self.writer.write_line(END_ENUMERATE)
    }

    fn ensure_active(&self) -> Result<()> {
        if self.active {
            Ok(())
        } else {
            Err(TexwriteError::ListClosed)
        }
    }
}

impl<W: Write> Drop for ListBlock<'_, W> {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            warn!(depth = self.depth, "failed to close list on drop: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::{CLOSING_MARKER, LATEX_HEADER};
    use texwrite_testkit::{FailingWriter, SharedBuffer};

    fn body(doc: DocumentWriter<Vec<u8>>) -> String {
        let output = String::from_utf8(doc.finish().unwrap()).unwrap();
        output
            .strip_prefix(LATEX_HEADER)
            .and_then(|rest| rest.strip_suffix(CLOSING_MARKER))
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_flat_list_without_enumerator() {
        let mut doc = DocumentWriter::new(Vec::new()).unwrap();
        {
            let mut list = doc.list(None).unwrap();
            list.item("one").unwrap();
            list.item("two").unwrap();
        }
        assert_eq!(
            body(doc),
            "\\begin{enumerate}\n\\item one\n\\item two\n\\end{enumerate}\n"
        );
    }

    #[test]
    fn test_flat_list_with_enumerator() {
        let mut doc = DocumentWriter::new(Vec::new()).unwrap();
        doc.with_list(Some("i."), |list| list.item("roman")).unwrap();
        assert_eq!(
            body(doc),
            "\\begin{enumerate}[i.]\n\\item roman\n\\end{enumerate}\n"
        );
    }

    #[test]
    fn test_empty_enumerator_means_default_numbering() {
        let mut doc = DocumentWriter::new(Vec::new()).unwrap();
        doc.with_list(Some(""), |_| Ok(())).unwrap();
        assert_eq!(body(doc), "\\begin{enumerate}\n\\end{enumerate}\n");
    }

    #[test]
    fn test_three_levels_close_in_reverse_order() {
        let mut doc = DocumentWriter::new(Vec::new()).unwrap();
        {
            let mut outer = doc.list(Some("A")).unwrap();
            outer.item("a1").unwrap();
            {
                let mut middle = outer.nested(Some("(a)")).unwrap();
                assert_eq!(middle.depth(), 2);
                middle.item("b1").unwrap();
                {
                    let mut inner = middle.nested(Some("i.")).unwrap();
                    assert_eq!(inner.depth(), 3);
                    inner.item("c1").unwrap();
                    inner.item("c2").unwrap();
                }
                middle.item("b2").unwrap();
            }
            outer.item("a2").unwrap();
        }

        assert_eq!(
            body(doc),
            concat!(
                "\\begin{enumerate}[A]\n",
                "\\item a1\n",
                "\\begin{enumerate}[(a)]\n",
                "\\item b1\n",
                "\\begin{enumerate}[i.]\n",
                "\\item c1\n",
                "\\item c2\n",
                "\\end{enumerate}\n",
                "\\item b2\n",
                "\\end{enumerate}\n",
                "\\item a2\n",
                "\\end{enumerate}\n",
            )
        );
    }

    #[test]
    fn test_item_after_close_fails() {
        let mut doc = DocumentWriter::new(Vec::new()).unwrap();
        {
            let mut list = doc.list(None).unwrap();
            list.close().unwrap();
            assert!(!list.is_active());

            assert!(matches!(list.item("late"), Err(TexwriteError::ListClosed)));
            assert!(matches!(list.nested(None), Err(TexwriteError::ListClosed)));
            list.close().unwrap();
        }
        assert_eq!(body(doc), "\\begin{enumerate}\n\\end{enumerate}\n");
    }

    #[test]
    fn test_open_on_closed_writer_fails() {
        let buffer = SharedBuffer::new();
        let mut doc = DocumentWriter::new(buffer.clone()).unwrap();
        doc.close().unwrap();

        let result = ListBlock::open(&mut doc, None);
        assert!(matches!(result, Err(TexwriteError::WriterClosed)));
        assert!(!buffer.contents().contains("\\begin{enumerate}"));
    }

    #[test]
    fn test_body_error_still_writes_end_marker() {
        let buffer = SharedBuffer::new();
        let mut doc = DocumentWriter::new(buffer.clone()).unwrap();

        let result: Result<()> = doc.with_list(None, |list| {
            list.item("kept")?;
            list.with_nested(Some("(a)"), |_| Err(TexwriteError::WriterClosed))
        });
        assert!(matches!(result, Err(TexwriteError::WriterClosed)));
        doc.close().unwrap();

        let output = buffer.contents();
        assert!(output.ends_with(concat!(
            "\\begin{enumerate}\n",
            "\\item kept\n",
            "\\begin{enumerate}[(a)]\n",
            "\\end{enumerate}\n",
            "\\end{enumerate}\n",
            "\n\\end{document}",
        )));
    }

    #[test]
    fn test_item_write_failure_propagates() {
        let budget = LATEX_HEADER.len() + "\\begin{enumerate}\n".len();
        let (sink, buffer) = FailingWriter::after(budget);
        let mut doc = DocumentWriter::new(sink).unwrap();

        let result = doc.with_list(None, |list| list.item("no room"));
        assert!(matches!(result, Err(TexwriteError::IoError(_))));
        assert!(buffer.contents().ends_with("\\begin{enumerate}\n"));
    }
}
