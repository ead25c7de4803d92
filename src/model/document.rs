//! Document-level types.
//!
//! A [`ParsedDocument`] is the neutral representation this crate consumes:
//! an ordered list of text blocks and tables, produced by whatever parser
//! handled the source format (word processor, HTML, PDF text layer).

use super::TableBlock;
use serde::{Deserialize, Serialize};

/// An already-parsed document: an ordered sequence of blocks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedDocument {
    /// Blocks in source order
    pub blocks: Vec<Block>,
}

impl ParsedDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    /// Add a block to the document.
    pub fn add_block(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Add a plain text block.
    pub fn add_text(&mut self, text: impl Into<String>) {
        self.blocks.push(Block::Text(TextBlock::new(text)));
    }

    /// Add a heading block.
    pub fn add_heading(&mut self, text: impl Into<String>) {
        self.blocks.push(Block::Text(TextBlock::heading(text)));
    }

    /// Add a table block.
    pub fn add_table(&mut self, table: TableBlock) {
        self.blocks.push(Block::Table(table));
    }

    /// Get the number of blocks.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Get the number of table blocks.
    pub fn table_count(&self) -> usize {
        self.tables().count()
    }

    /// Iterate over the table blocks in source order.
    pub fn tables(&self) -> impl Iterator<Item = &TableBlock> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Table(table) => Some(table),
            Block::Text(_) => None,
        })
    }

    /// Check if the document has any blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(|block| match block {
                Block::Text(text) => text.text.clone(),
                Block::Table(table) => table.plain_text(),
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// A single document block: either a paragraph of text or a table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A paragraph or heading
    Text(TextBlock),

    /// A table
    Table(TableBlock),
}

/// A paragraph of text with heading classification from the parser.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    /// The text content
    pub text: String,

    /// Whether the parser classified this paragraph as a heading
    pub is_heading: bool,
}

impl TextBlock {
    /// Create a plain (non-heading) text block.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_heading: false,
        }
    }

    /// Create a heading block.
    pub fn heading(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_heading: true,
        }
    }

    /// Check if the block is empty.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}
