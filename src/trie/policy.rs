use indexmap::IndexMap;
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::hash::Hash;
use std::iter::Cloned;
use std::slice;
use std::str::{Bytes, Chars};

/// A borrowed key that can be walked symbol by symbol.
///
/// Implemented for slices, arrays and vectors of symbols, and for strings as either `char` or
/// `u8` symbols.
pub trait AsSymbols<S> {
    type Iter<'a>: Iterator<Item = S>
    where
        Self: 'a;

    fn symbols(&self) -> Self::Iter<'_>;
}

impl<S: Clone> AsSymbols<S> for [S] {
    type Iter<'a> = Cloned<slice::Iter<'a, S>> where Self: 'a;

    fn symbols(&self) -> Self::Iter<'_> {
        self.iter().cloned()
    }
}

impl<S: Clone, const N: usize> AsSymbols<S> for [S; N] {
    type Iter<'a> = Cloned<slice::Iter<'a, S>> where Self: 'a;

    fn symbols(&self) -> Self::Iter<'_> {
        self.iter().cloned()
    }
}

impl<S: Clone> AsSymbols<S> for Vec<S> {
    type Iter<'a> = Cloned<slice::Iter<'a, S>> where Self: 'a;

    fn symbols(&self) -> Self::Iter<'_> {
        self.iter().cloned()
    }
}

impl AsSymbols<char> for str {
    type Iter<'a> = Chars<'a>;

    fn symbols(&self) -> Self::Iter<'_> {
        self.chars()
    }
}

impl AsSymbols<char> for String {
    type Iter<'a> = Chars<'a>;

    fn symbols(&self) -> Self::Iter<'_> {
        self.chars()
    }
}

impl AsSymbols<u8> for str {
    type Iter<'a> = Bytes<'a>;

    fn symbols(&self) -> Self::Iter<'_> {
        self.bytes()
    }
}

impl AsSymbols<u8> for String {
    type Iter<'a> = Bytes<'a>;

    fn symbols(&self) -> Self::Iter<'_> {
        self.bytes()
    }
}

impl<'b, S, Q> AsSymbols<S> for &'b Q
where
    Q: AsSymbols<S> + ?Sized,
{
    type Iter<'a> = Q::Iter<'a> where Self: 'a;

    fn symbols(&self) -> Self::Iter<'_> {
        (**self).symbols()
    }
}

/// Map from symbols to the children of a node.
///
/// Every operation on a single level goes through this trait, so lookups and insertions cost
/// whatever the backing map charges per symbol instead of a scan over the siblings.
pub trait ChildMap<S, N>: Default {
    type Iter<'a>: DoubleEndedIterator<Item = (&'a S, &'a N)>
    where
        Self: 'a,
        S: 'a,
        N: 'a;
    type IterMut<'a>: DoubleEndedIterator<Item = (&'a S, &'a mut N)>
    where
        Self: 'a,
        S: 'a,
        N: 'a;
    type IntoIter: DoubleEndedIterator<Item = (S, N)>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, symbol: &S) -> Option<&N>;

    fn get_mut(&mut self, symbol: &S) -> Option<&mut N>;

    fn get_or_insert_with<F>(&mut self, symbol: S, f: F) -> &mut N
    where
        F: FnOnce() -> N;

    fn insert(&mut self, symbol: S, node: N) -> Option<N>;

    /// Removes the child under `symbol` without disturbing the order of its siblings.
    fn remove(&mut self, symbol: &S) -> Option<N>;

    fn iter(&self) -> Self::Iter<'_>;

    fn iter_mut(&mut self) -> Self::IterMut<'_>;

    fn into_entries(self) -> Self::IntoIter;
}

impl<S, N> ChildMap<S, N> for IndexMap<S, N>
where
    S: Hash + Eq,
{
    type Iter<'a> = indexmap::map::Iter<'a, S, N>
    where
        Self: 'a,
        S: 'a,
        N: 'a;
    type IterMut<'a> = indexmap::map::IterMut<'a, S, N>
    where
        Self: 'a,
        S: 'a,
        N: 'a;
    type IntoIter = indexmap::map::IntoIter<S, N>;

    fn len(&self) -> usize {
        IndexMap::len(self)
    }

    fn get(&self, symbol: &S) -> Option<&N> {
        IndexMap::get(self, symbol)
    }

    fn get_mut(&mut self, symbol: &S) -> Option<&mut N> {
        IndexMap::get_mut(self, symbol)
    }

    fn get_or_insert_with<F>(&mut self, symbol: S, f: F) -> &mut N
    where
        F: FnOnce() -> N,
    {
        self.entry(symbol).or_insert_with(f)
    }

    fn insert(&mut self, symbol: S, node: N) -> Option<N> {
        IndexMap::insert(self, symbol, node)
    }

    fn remove(&mut self, symbol: &S) -> Option<N> {
        self.shift_remove(symbol)
    }

    fn iter(&self) -> Self::Iter<'_> {
        IndexMap::iter(self)
    }

    fn iter_mut(&mut self) -> Self::IterMut<'_> {
        IndexMap::iter_mut(self)
    }

    fn into_entries(self) -> Self::IntoIter {
        IntoIterator::into_iter(self)
    }
}

impl<S, N> ChildMap<S, N> for BTreeMap<S, N>
where
    S: Ord,
{
    type Iter<'a> = btree_map::Iter<'a, S, N>
    where
        Self: 'a,
        S: 'a,
        N: 'a;
    type IterMut<'a> = btree_map::IterMut<'a, S, N>
    where
        Self: 'a,
        S: 'a,
        N: 'a;
    type IntoIter = btree_map::IntoIter<S, N>;

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn get(&self, symbol: &S) -> Option<&N> {
        BTreeMap::get(self, symbol)
    }

    fn get_mut(&mut self, symbol: &S) -> Option<&mut N> {
        BTreeMap::get_mut(self, symbol)
    }

    fn get_or_insert_with<F>(&mut self, symbol: S, f: F) -> &mut N
    where
        F: FnOnce() -> N,
    {
        self.entry(symbol).or_insert_with(f)
    }

    fn insert(&mut self, symbol: S, node: N) -> Option<N> {
        BTreeMap::insert(self, symbol, node)
    }

    fn remove(&mut self, symbol: &S) -> Option<N> {
        BTreeMap::remove(self, symbol)
    }

    fn iter(&self) -> Self::Iter<'_> {
        BTreeMap::iter(self)
    }

    fn iter_mut(&mut self) -> Self::IterMut<'_> {
        BTreeMap::iter_mut(self)
    }

    fn into_entries(self) -> Self::IntoIter {
        IntoIterator::into_iter(self)
    }
}

/// Order in which the children of a node are kept and visited. The order picks the map that
/// stores the children.
pub trait ChildOrder<S> {
    type Map<N>: ChildMap<S, N>;
}

/// Children are visited in the order their symbols were first inserted. Symbols are hashed.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct InsertionOrder;

impl<S> ChildOrder<S> for InsertionOrder
where
    S: Hash + Eq,
{
    type Map<N> = IndexMap<S, N>;
}

/// Children are kept sorted by symbol, so traversal yields keys in lexicographic order.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Lexicographic;

impl<S> ChildOrder<S> for Lexicographic
where
    S: Ord,
{
    type Map<N> = BTreeMap<S, N>;
}

/// Rebuilds an owned key from the symbols on a root-to-node path.
pub trait KeyBuilder<S> {
    type Key;

    fn build(path: &[S]) -> Self::Key;
}

/// Keys are reconstructed as a `Vec` of symbols.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SeqKeys;

impl<S: Clone> KeyBuilder<S> for SeqKeys {
    type Key = Vec<S>;

    fn build(path: &[S]) -> Self::Key {
        path.to_vec()
    }
}

/// Keys are reconstructed by joining `char` symbols into a `String`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct StrKeys;

impl KeyBuilder<char> for StrKeys {
    type Key = String;

    fn build(path: &[char]) -> Self::Key {
        path.iter().collect()
    }
}
