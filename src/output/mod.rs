// Thu Oct 15 2026 - Alex

pub mod error;
pub mod formatter;
pub mod writer;

pub use error::OutputError;
pub use formatter::{ClangFormat, Completion};
pub use writer::{unit_stem, write_class, write_classes, write_group, WrittenUnit};
