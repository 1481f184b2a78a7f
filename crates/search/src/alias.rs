//! Mapping physical index names back to the alias clients use.
//!
//! Dated indices such as `orders_2024` sit behind an alias (`orders`). Hits
//! and multi-search items report the physical name; an [`IndexNormalizer`]
//! recovers the alias.

use std::fmt;
use std::sync::Arc;

use regex::Regex;

/// Removes a trailing `_<4-digit year>` suffix: `orders_2024` becomes
/// `orders`. Other names are returned unchanged.
pub fn strip_dated_suffix(index: &str) -> &str {
    let bytes = index.as_bytes();
    if bytes.len() < 5 {
        return index;
    }
    let split = bytes.len() - 5;
    let (head, tail) = bytes.split_at(split);
    if tail[0] == b'_' && tail[1..].iter().all(u8::is_ascii_digit) && !head.is_empty() {
        &index[..split]
    } else {
        index
    }
}

/// Maps a physical index name to its alias.
#[derive(Clone, Default)]
pub enum IndexNormalizer {
    /// [`strip_dated_suffix`].
    #[default]
    DatedSuffix,
    /// Removes every match of a pattern.
    Pattern(Regex),
    /// Leaves names untouched.
    Identity,
    Custom(Arc<dyn Fn(&str) -> String + Send + Sync>),
}

impl IndexNormalizer {
    /// Compiles `pattern`; matches are removed from index names.
    pub fn pattern(pattern: &str) -> Result<Self, regex::Error> {
        Ok(IndexNormalizer::Pattern(Regex::new(pattern)?))
    }

    pub fn custom(normalize: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        IndexNormalizer::Custom(Arc::new(normalize))
    }

    pub fn normalize(&self, index: &str) -> String {
        match self {
            IndexNormalizer::DatedSuffix => strip_dated_suffix(index).to_string(),
            IndexNormalizer::Pattern(pattern) => pattern.replace_all(index, "").into_owned(),
            IndexNormalizer::Identity => index.to_string(),
            IndexNormalizer::Custom(normalize) => normalize(index),
        }
    }
}

impl fmt::Debug for IndexNormalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexNormalizer::DatedSuffix => f.write_str("DatedSuffix"),
            IndexNormalizer::Pattern(pattern) => {
                f.debug_tuple("Pattern").field(&pattern.as_str()).finish()
            }
            IndexNormalizer::Identity => f.write_str("Identity"),
            IndexNormalizer::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}
