// Thu Oct 15 2026 - Alex

pub mod config;
pub mod includes;
pub mod model;
pub mod named_args;
pub mod output;
pub mod parser;
pub mod render;
pub mod text;
pub mod ui;
pub mod utils;

pub use config::{GeneratorConfig, KnownClass};
pub use model::{Class, Member, Method, Parameters, Signature};
pub use named_args::NamedArgs;
pub use parser::{parse_class, ParseError};
pub use render::{declaration, implementation, inline_class, ClassGroup};
