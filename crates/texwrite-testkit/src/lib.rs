//! Test utilities for texwrite
//!
//! This crate provides shared testing utilities used across the texwrite workspace.

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;
use tempfile::TempDir;

/// Creates a temporary directory within `.tmp/` at the current directory
///
/// # Panics
///
/// Panics if the current directory cannot be determined or `.tmp/` cannot
/// be created.
///
/// # Examples
///
/// ```rust
/// use texwrite_testkit::temp_dir_in_workspace;
///
/// let temp = temp_dir_in_workspace();
/// let file_path = temp.path().join("out.tex");
/// std::fs::write(&file_path, "test data").unwrap();
/// // Cleanup happens automatically when temp is dropped
/// ```
pub fn temp_dir_in_workspace() -> TempDir {
    let workspace_root = std::env::current_dir().expect("Failed to get current directory");

    let tmp_base = workspace_root.join(".tmp");

    // Ensure .tmp/ exists
    std::fs::create_dir_all(&tmp_base).expect("Failed to create .tmp directory");

    TempDir::new_in(&tmp_base).expect("Failed to create temporary directory in .tmp/")
}

/// In-memory sink whose contents stay readable after the writer that owns a
/// clone of it has been dropped
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    bytes: Rc<RefCell<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.borrow()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Sink that accepts a fixed number of bytes and then fails every write
#[derive(Debug)]
pub struct FailingWriter {
    remaining: usize,
    sink: SharedBuffer,
}

impl FailingWriter {
    /// Returns the writer and a handle to the bytes it accepted
    pub fn after(budget: usize) -> (Self, SharedBuffer) {
        let sink = SharedBuffer::new();
        let writer = Self {
            remaining: budget,
            sink: sink.clone(),
        };
        (writer, sink)
    }
}

impl Write for FailingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.remaining == 0 {
            return Err(io::Error::other("write budget exhausted"));
        }

        let accepted = buf.len().min(self.remaining);
        self.remaining -= accepted;
        self.sink.write(&buf[..accepted])
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
