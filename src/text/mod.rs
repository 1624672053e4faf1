// Thu Oct 15 2026 - Alex

pub mod brackets;
pub mod error;
pub mod layout;
pub mod names;
pub mod splitter;

pub use brackets::{find_from, matching_bracket};
pub use error::BracketError;
pub use layout::{block_body, dedent, indent};
pub use names::{capitalized, getter_name, member_name, plain_name, setter_name, uncapitalized};
pub use splitter::{split_top_level, Splitter};
