//! Cell comments (notes)
//!
//! A comment is an annotation attached to one cell. The underlying spreadsheet
//! formats allow at most one comment per cell, so the worksheet stores them in
//! a map keyed by cell position.

/// A cell comment/note
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellComment {
    /// Author of the comment
    pub author: String,
    /// Comment text content
    pub text: String,
    /// Whether the comment box is visible by default
    pub visible: bool,
    /// The box the comment is drawn over, if placed explicitly
    pub anchor: Option<CommentAnchor>,
}

impl CellComment {
    /// Create a new comment with the given author and text
    ///
    /// # Example
    ///
    /// ```rust
    /// use sheetmark_core::CellComment;
    ///
    /// let comment = CellComment::new("John Doe", "Review this value");
    /// assert_eq!(comment.author, "John Doe");
    /// assert!(!comment.visible);
    /// ```
    pub fn new(author: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            text: text.into(),
            visible: false,
            anchor: None,
        }
    }

    /// Create a comment with just text (empty author)
    pub fn text_only(text: impl Into<String>) -> Self {
        Self {
            author: String::new(),
            text: text.into(),
            visible: false,
            anchor: None,
        }
    }

    /// Set whether the comment is visible by default
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Set the anchor box the comment is drawn over
    pub fn with_anchor(mut self, anchor: CommentAnchor) -> Self {
        self.anchor = Some(anchor);
        self
    }

    /// Check if this comment has an author
    pub fn has_author(&self) -> bool {
        !self.author.is_empty()
    }
}

impl Default for CellComment {
    fn default() -> Self {
        Self {
            author: String::new(),
            text: String::new(),
            visible: false,
            anchor: None,
        }
    }
}

impl std::fmt::Display for CellComment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.has_author() {
            write!(f, "[{}]: {}", self.author, self.text)
        } else {
            write!(f, "{}", self.text)
        }
    }
}

/// The rectangle a comment box spans, in cell coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CommentAnchor {
    /// First row the box covers
    pub first_row: u32,
    /// First column the box covers
    pub first_col: u16,
    /// Last row the box covers (inclusive)
    pub last_row: u32,
    /// Last column the box covers (inclusive)
    pub last_col: u16,
}

impl CommentAnchor {
    /// Create an anchor spanning the given cell rectangle
    pub fn new(first_row: u32, first_col: u16, last_row: u32, last_col: u16) -> Self {
        Self {
            first_row,
            first_col,
            last_row,
            last_col,
        }
    }
}
