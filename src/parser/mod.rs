// Thu Oct 15 2026 - Alex

pub mod class_parser;
pub mod enums;
pub mod error;
pub mod members;
pub mod statement;

pub use class_parser::{parse_class, Shape};
pub use enums::{parse_enum, parse_enum_blocks};
pub use error::ParseError;
pub use statement::{split_statements, Statement};
