pub mod config;
pub mod core;
pub mod matcher;

pub use crate::core::compose::{compose, leading_of};
pub use crate::core::converter::eng_to_korean;
pub use crate::core::decompose::{decompose, Jamos};
pub use crate::core::keymap::korean_to_eng;
pub use config::{ConfigError, MatcherConfig};
pub use matcher::{find, find_from, normalize_query, HangulMatch, HangulMatcher, Query};
