//! Prefix tree with one level per key symbol.

mod iter;
mod map;
mod node;
mod policy;

pub use self::iter::{IntoIter, Iter, Keys, Values, ValuesMut};
pub use self::map::{SortedStringTrie, SortedTrie, StringTrie, Trie};
pub use self::policy::{
    AsSymbols, ChildMap, ChildOrder, InsertionOrder, KeyBuilder, Lexicographic, SeqKeys, StrKeys,
};
