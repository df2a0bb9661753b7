//! The intermediate tagged-tree representation of parsed XML.

/// One XML element as seen by the tree walker, before any semantic
/// interpretation.
///
/// A node carries either element children or leaf text, never meaningfully
/// both: when an element contains child elements, interleaved text is
/// insignificant whitespace in this protocol and is dropped by the walker.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TaggedNode {
    /// Element name. Empty for the synthetic document node returned by the
    /// walker, whose single child is the document root element.
    pub tag: String,
    /// Child elements, in document order.
    pub children: Vec<TaggedNode>,
    /// Trimmed text content, present only for leaf nodes.
    pub text: Option<String>,
}

impl TaggedNode {
    /// Create an element node with the given tag.
    #[must_use]
    pub fn element(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            children: Vec::new(),
            text: None,
        }
    }

    /// Create a leaf element holding trimmed text.
    #[must_use]
    pub fn leaf(tag: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            children: Vec::new(),
            text: Some(text.into()),
        }
    }

    /// Create the synthetic document node wrapping the root element.
    #[must_use]
    pub fn document(root: TaggedNode) -> Self {
        Self {
            tag: String::new(),
            children: vec![root],
            text: None,
        }
    }

    /// A node with no element children: its value is its text (or empty).
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}
