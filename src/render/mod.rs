// Thu Oct 15 2026 - Alex

pub mod context;
pub mod declaration;
pub mod entities;
pub mod group;
pub mod implementation;
pub mod inline;

#[cfg(test)]
pub mod testing;

pub use context::{RenderContext, RenderOptions, BANNER};
pub use declaration::{declaration, declaration_with};
pub use entities::ClassEntity;
pub use group::ClassGroup;
pub use implementation::{implementation, implementation_with};
pub use inline::inline_class;
