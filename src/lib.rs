//! A prefix tree (trie) map from sequences of symbols to values.
//!
//! Besides the usual map operations the trie supports prefix-scoped traversal, removal of every
//! key under a prefix and merging of two tries that moves shared structure instead of
//! re-inserting keys. Child order, key reconstruction and missing-key behaviour are chosen per
//! trie; see `trie::Trie`.

mod error;
pub mod trie;

pub use self::error::{Error, Result};
