//! Document upload and listing components.

mod document_table;
mod upload_card;

pub use document_table::DocumentTable;
pub use upload_card::UploadCard;
