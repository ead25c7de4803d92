//! Data model types.

mod contact;
mod document;
mod table;

pub use contact::ContactRecord;
pub use document::{Block, ParsedDocument, TextBlock};
pub use table::TableBlock;
