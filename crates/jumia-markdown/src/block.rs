//! Markdown block model
//!
//! One [`Block`] per direct child of the description container. The variant
//! set mirrors the element set the marketplace uses in its description
//! markup; anything else on the page never reaches this crate.

/// A block-level element of a product description.
///
/// All text is stored already trimmed; the adapter that builds blocks owns
/// text extraction, this crate only formats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// A bare text run sitting directly in the description container
    Text(String),

    /// Paragraph text
    Paragraph(String),

    /// Heading with level (1-6)
    Heading { level: u8, text: String },

    /// Table with one header row and zero or more body rows
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },

    /// Unordered list, one entry per item
    UnorderedList(Vec<String>),

    /// Ordered list, one entry per item, numbered from 1 when rendered
    OrderedList(Vec<String>),

    /// Block quote, one entry per visible text run
    Blockquote(Vec<String>),
}
