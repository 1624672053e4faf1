// Thu Oct 15 2026 - Alex

pub mod access;
pub mod class;
pub mod constructor;
pub mod definition;
pub mod destructor;
pub mod entry;
pub mod error;
pub mod global;
pub mod include;
pub mod inheritance;
pub mod member;
pub mod method;
pub mod signature;

pub use access::{AccessLevel, AccessSpecifier};
pub use class::{Class, UnitKind};
pub use constructor::Constructor;
pub use definition::{Definition, DefinitionScope, EnumDefinition};
pub use destructor::Destructor;
pub use entry::{Entry, MemberSpec};
pub use error::ModelError;
pub use global::Global;
pub use include::Include;
pub use inheritance::{BaseClass, Inheritance};
pub use member::{AccessorSpec, AccessorStyle, Member, MemberOptions};
pub use method::{Method, MethodFlags};
pub use signature::{Parameters, Signature, TypeClassifier};

/// Return type that makes a method a "no value" procedure.
pub const VOID: &str = "void";
