//! Sample document exercising the title block and nested lists

use crate::config::PreambleConfig;
use crate::document::DocumentWriter;
use crate::error::Result;
use crate::title::Title;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Output file used when no path is given
pub const DEFAULT_OUTPUT: &str = "test.tex";

const OUTER_ITEM: &str = "Dies ist ein Test.";
const INNER_ITEM: &str = "Ich bin ein Item.";
const INNER_ENUMERATOR: &str = "(a)";

#[derive(Debug, Clone)]
pub struct DemoOptions {
    /// Items in the outer list
    pub items: usize,
    /// Items in the list nested under each outer item
    pub inner_items: usize,
    pub preamble: PreambleConfig,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            items: 10,
            inner_items: 4,
            preamble: PreambleConfig::default(),
        }
    }
}

/// Write the sample document to `path`
pub fn write_demo(path: impl AsRef<Path>, options: &DemoOptions) -> Result<()> {
    let path = path.as_ref();
    debug!(path = %path.display(), items = options.items, "writing demo document");

    let mut doc = DocumentWriter::create_with(path, &options.preamble)?;
    write_demo_body(&mut doc, options)?;
    doc.close()
}

/// Write the title and nested lists of the sample document into `doc`
pub fn write_demo_body<W: Write>(doc: &mut DocumentWriter<W>, options: &DemoOptions) -> Result<()> {
    doc.write_title(&Title::new("Ein Test").author("Michael Entrup"))?;

    doc.with_list(None, |list| {
        for _ in 0..options.items {
            list.item(OUTER_ITEM)?;
            list.with_nested(Some(INNER_ENUMERATOR), |inner| {
                for _ in 0..options.inner_items {
                    inner.item(INNER_ITEM)?;
                }
                Ok(())
            })?;
        }
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = DemoOptions::default();
        assert_eq!(options.items, 10);
        assert_eq!(options.inner_items, 4);
    }

    #[test]
    fn test_demo_body_counts() {
        let mut doc = DocumentWriter::new(Vec::new()).unwrap();
        write_demo_body(&mut doc, &DemoOptions::default()).unwrap();
        let output = String::from_utf8(doc.finish().unwrap()).unwrap();

        assert_eq!(output.matches("\\item Dies ist ein Test.").count(), 10);
        assert_eq!(output.matches("\\item Ich bin ein Item.").count(), 40);
        assert_eq!(output.matches("\\begin{enumerate}[(a)]").count(), 10);
        assert_eq!(
            output.matches("\\begin{enumerate}").count(),
            output.matches("\\end{enumerate}").count()
        );
    }

    #[test]
    fn test_demo_without_items_writes_empty_list() {
        let options = DemoOptions {
            items: 0,
            ..DemoOptions::default()
        };
        let mut doc = DocumentWriter::new(Vec::new()).unwrap();
        write_demo_body(&mut doc, &options).unwrap();
        let output = String::from_utf8(doc.finish().unwrap()).unwrap();

        assert!(output.contains("\\maketitle\n\n\\begin{enumerate}\n\\end{enumerate}\n"));
    }
}
