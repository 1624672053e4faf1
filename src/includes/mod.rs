// Thu Oct 15 2026 - Alex

pub mod naming;
pub mod resolver;
pub mod scanner;

pub use naming::{LibraryNaming, PatternNaming};
pub use resolver::{merge_includes, IncludeResolver, Side};
pub use scanner::{scan, TypeUse, Usage};
