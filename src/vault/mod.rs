//! Vault export decoding

mod models;
mod parser;

pub use models::VaultEntry;
pub use parser::parse_entries;
