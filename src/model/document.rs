//! Document model - the text buffer of the focused document

use ropey::Rope;

/// Document state - the text buffer and its edit state
#[derive(Debug, Clone)]
pub struct Document {
    /// The text buffer
    pub buffer: Rope,
    /// Whether the buffer has unsaved changes
    pub is_modified: bool,
    /// Document revision counter (incremented on each whole-content replace)
    pub revision: u64,
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self::with_text("")
    }

    /// Create a document with initial text
    pub fn with_text(text: &str) -> Self {
        Self {
            buffer: Rope::from(text),
            is_modified: false,
            revision: 0,
        }
    }

    /// Full text content
    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    /// Replace the entire content as a single edit
    pub fn set_text(&mut self, text: &str) {
        self.buffer = Rope::from(text);
        self.is_modified = true;
        self.revision = self.revision.wrapping_add(1);
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
