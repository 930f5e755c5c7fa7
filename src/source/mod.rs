//! Source resolution: where the vault export lives and how to read it

pub mod location;
pub mod resolver;

pub use location::SourceLocation;
pub use resolver::open;
