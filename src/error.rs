use std::error;
use std::fmt;
use std::result;

/// Errors returned by strict trie operations.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// The key or prefix is not present in the trie.
    KeyNotFound,
    /// The trie holds no entries.
    EmptyTrie,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::KeyNotFound => write!(f, "key not found"),
            Error::EmptyTrie => write!(f, "trie is empty"),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
