use crate::error::{Error, Result};
use crate::trie::iter::{IntoIter, Iter, Keys, Values, ValuesMut};
use crate::trie::node::Node;
use crate::trie::policy::{
    AsSymbols, ChildMap, ChildOrder, InsertionOrder, KeyBuilder, Lexicographic, SeqKeys, StrKeys,
};
use log::{debug, trace};
use std::fmt;
use std::marker::PhantomData;
use std::mem;
use std::ops::{Index, IndexMut};
use std::sync::Arc;

type Factory<V> = Arc<dyn Fn() -> V + Send + Sync>;

/// A map from sequences of symbols to values implemented by a trie.
///
/// Every symbol of a key occupies one level of the tree, so lookups, insertions and removals cost
/// `O(|key|)` regardless of the number of entries. Nodes that no longer lead to a value are
/// pruned as soon as the value is removed. On top of the usual map operations the trie answers
/// prefix-scoped queries and merges with another trie by moving whole subtrees instead of
/// re-inserting every key.
///
/// The two trailing type parameters are policies:
///
/// - `O` decides how the children of a node are stored and in which order they are visited.
///   `InsertionOrder` hashes symbols and visits children in the order they were created,
///   `Lexicographic` keeps them in a `BTreeMap`, which makes every traversal yield keys in
///   lexicographic order.
/// - `B` decides how keys are rebuilt during traversal. `SeqKeys` yields a `Vec` of symbols,
///   `StrKeys` joins `char` symbols into a `String`.
///
/// A trie can also carry a default factory (see `with_default_factory`) which makes `fetch` insert
/// a fresh value instead of failing on a missing key.
///
/// # Examples
///
/// ```
/// use symbol_trie::trie::Trie;
///
/// let mut trie: Trie<&str, u32> = Trie::new();
/// trie.insert(&["usr", "bin"], 0);
/// trie.insert(&["usr", "lib"], 1);
/// trie.insert(&["etc"], 2);
///
/// assert_eq!(trie[&["usr", "lib"]], 1);
/// assert_eq!(trie.get(&["usr"]), None);
/// assert_eq!(trie.len(), 3);
///
/// assert_eq!(
///     trie.keys_prefix(&["usr"]).collect::<Vec<_>>(),
///     vec![vec!["usr", "bin"], vec!["usr", "lib"]],
/// );
///
/// assert_eq!(trie.remove(&["usr"]), Ok(2));
/// assert_eq!(trie.len(), 1);
/// ```
pub struct Trie<S, V, O = InsertionOrder, B = SeqKeys>
where
    O: ChildOrder<S>,
{
    root: Node<S, V, O>,
    len: usize,
    default_factory: Option<Factory<V>>,
    _marker: PhantomData<(O, B)>,
}

/// A trie whose traversals yield keys in lexicographic order.
pub type SortedTrie<S, V> = Trie<S, V, Lexicographic, SeqKeys>;

/// A trie keyed by strings, one `char` per level.
pub type StringTrie<V> = Trie<char, V, InsertionOrder, StrKeys>;

/// A trie keyed by strings whose traversals yield keys in lexicographic order.
pub type SortedStringTrie<V> = Trie<char, V, Lexicographic, StrKeys>;

impl<S, V, O, B> Trie<S, V, O, B>
where
    O: ChildOrder<S>,
{
    /// Constructs a new, empty `Trie<S, V, O, B>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use symbol_trie::trie::Trie;
    ///
    /// let trie: Trie<u8, u32> = Trie::new();
    /// assert!(trie.is_empty());
    /// ```
    pub fn new() -> Self {
        Trie {
            root: Node::new(),
            len: 0,
            default_factory: None,
            _marker: PhantomData,
        }
    }

    /// Constructs a new, empty trie that creates missing values with `factory` when they are
    /// accessed through `fetch`.
    ///
    /// # Examples
    ///
    /// ```
    /// use symbol_trie::trie::StringTrie;
    ///
    /// let mut trie = StringTrie::with_default_factory(Vec::new);
    /// trie.fetch("foo").unwrap().push(1);
    /// trie.fetch("foo").unwrap().push(2);
    /// assert_eq!(trie.get("foo"), Some(&vec![1, 2]));
    /// ```
    pub fn with_default_factory<F>(factory: F) -> Self
    where
        F: Fn() -> V + Send + Sync + 'static,
    {
        Trie {
            root: Node::new(),
            len: 0,
            default_factory: Some(Arc::new(factory)),
            _marker: PhantomData,
        }
    }

    /// Returns `true` if the trie was constructed with a default factory.
    pub fn has_default_factory(&self) -> bool {
        self.default_factory.is_some()
    }

    /// Returns the number of entries in the trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use symbol_trie::trie::StringTrie;
    ///
    /// let mut trie = StringTrie::new();
    /// trie.insert("foo", 1);
    /// assert_eq!(trie.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the trie holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the trie, removing all entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use symbol_trie::trie::StringTrie;
    ///
    /// let mut trie = StringTrie::new();
    /// trie.insert("foo", 1);
    /// trie.insert("foobar", 2);
    /// trie.clear();
    /// assert!(trie.is_empty());
    /// ```
    pub fn clear(&mut self) {
        debug!("clearing trie with {} entries", self.len);
        self.root = Node::new();
        self.len = 0;
    }

    /// Returns an iterator over the values of the trie in traversal order.
    ///
    /// # Examples
    ///
    /// ```
    /// use symbol_trie::trie::StringTrie;
    ///
    /// let mut trie = StringTrie::new();
    /// trie.insert("foo", 1);
    /// trie.insert("foobar", 2);
    /// assert_eq!(trie.values().collect::<Vec<_>>(), vec![&1, &2]);
    /// ```
    pub fn values(&self) -> Values<'_, S, V, O> {
        Values::new(Some(&self.root))
    }

    /// Returns a mutable iterator over the values of the trie in traversal order.
    ///
    /// # Examples
    ///
    /// ```
    /// use symbol_trie::trie::StringTrie;
    ///
    /// let mut trie = StringTrie::new();
    /// trie.insert("foo", 1);
    /// trie.insert("bar", 2);
    /// for value in trie.values_mut() {
    ///     *value *= 10;
    /// }
    /// assert_eq!(trie.get("bar"), Some(&20));
    /// ```
    pub fn values_mut(&mut self) -> ValuesMut<'_, S, V, O> {
        ValuesMut::new(Some(&mut self.root))
    }
}

impl<S, V, O, B> Trie<S, V, O, B>
where
    S: Clone,
    O: ChildOrder<S>,
    B: KeyBuilder<S>,
{
    /// Returns an iterator over the entries of the trie. A node's own entry is yielded before the
    /// entries below it and children are visited in the trie's child order.
    ///
    /// # Examples
    ///
    /// ```
    /// use symbol_trie::trie::StringTrie;
    ///
    /// let mut trie = StringTrie::new();
    /// trie.insert("foo", 1);
    /// trie.insert("foobar", 2);
    ///
    /// let mut iterator = trie.iter();
    /// assert_eq!(iterator.next(), Some((String::from("foo"), &1)));
    /// assert_eq!(iterator.next(), Some((String::from("foobar"), &2)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, S, V, O, B> {
        Iter::new(Vec::new(), Some(&self.root))
    }

    /// Returns an iterator over the keys of the trie in traversal order.
    ///
    /// # Examples
    ///
    /// ```
    /// use symbol_trie::trie::StringTrie;
    ///
    /// let mut trie = StringTrie::new();
    /// trie.insert("foo", 1);
    /// trie.insert("bar", 2);
    /// assert_eq!(trie.keys().collect::<Vec<_>>(), vec!["foo", "bar"]);
    /// ```
    pub fn keys(&self) -> Keys<'_, S, V, O, B> {
        Keys::new(self.iter())
    }
}

impl<S, V, O, B> Trie<S, V, O, B>
where
    O: ChildOrder<S>,
{
    fn subtrie<Q>(&self, prefix: &Q) -> Option<&Node<S, V, O>>
    where
        Q: AsSymbols<S> + ?Sized,
    {
        self.root.descend(prefix.symbols())
    }

    /// Inserts a key-value pair into the trie. If the key already exists, its value is replaced
    /// and the old value is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use symbol_trie::trie::StringTrie;
    ///
    /// let mut trie = StringTrie::new();
    /// assert_eq!(trie.insert("foo", 1), None);
    /// assert_eq!(trie.insert("foo", 2), Some(1));
    /// assert_eq!(trie.get("foo"), Some(&2));
    /// ```
    pub fn insert<Q>(&mut self, key: &Q, value: V) -> Option<V>
    where
        Q: AsSymbols<S> + ?Sized,
    {
        let node = self.root.descend_or_insert(key.symbols());
        let old_value = node.value.replace(value);
        if old_value.is_none() {
            self.len += 1;
        }
        old_value
    }

    /// Returns a reference to the value associated with `key`, or `None` if the key does not
    /// exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use symbol_trie::trie::StringTrie;
    ///
    /// let mut trie = StringTrie::new();
    /// trie.insert("foo", 1);
    /// assert_eq!(trie.get("foo"), Some(&1));
    /// assert_eq!(trie.get("fo"), None);
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        Q: AsSymbols<S> + ?Sized,
    {
        self.subtrie(key).and_then(|node| node.value.as_ref())
    }

    /// Returns a mutable reference to the value associated with `key`, or `None` if the key does
    /// not exist.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        Q: AsSymbols<S> + ?Sized,
    {
        self.root
            .descend_mut(key.symbols())
            .and_then(|node| node.value.as_mut())
    }

    /// Returns the value associated with `key`, or `default` if the key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use symbol_trie::trie::StringTrie;
    ///
    /// let mut trie = StringTrie::new();
    /// trie.insert("foo", 1);
    /// assert_eq!(trie.get_or("bar", &0), &0);
    /// ```
    pub fn get_or<'a, Q>(&'a self, key: &Q, default: &'a V) -> &'a V
    where
        Q: AsSymbols<S> + ?Sized,
    {
        self.get(key).unwrap_or(default)
    }

    /// Returns the value associated with `key`, failing with `Error::KeyNotFound` if the key does
    /// not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use symbol_trie::Error;
    /// use symbol_trie::trie::StringTrie;
    ///
    /// let mut trie = StringTrie::new();
    /// trie.insert("foo", 1);
    /// assert_eq!(trie.lookup("foo"), Ok(&1));
    /// assert_eq!(trie.lookup("bar"), Err(Error::KeyNotFound));
    /// ```
    pub fn lookup<Q>(&self, key: &Q) -> Result<&V>
    where
        Q: AsSymbols<S> + ?Sized,
    {
        self.get(key).ok_or(Error::KeyNotFound)
    }

    /// Returns a mutable reference to the value associated with `key`. If the key does not exist
    /// and the trie has a default factory, a value built by the factory is inserted and returned;
    /// without a factory this fails with `Error::KeyNotFound`.
    ///
    /// # Examples
    ///
    /// ```
    /// use symbol_trie::Error;
    /// use symbol_trie::trie::StringTrie;
    ///
    /// let mut counts = StringTrie::with_default_factory(|| 0);
    /// *counts.fetch("foo").unwrap() += 1;
    /// *counts.fetch("foo").unwrap() += 1;
    /// assert_eq!(counts.get("foo"), Some(&2));
    ///
    /// let mut strict: StringTrie<u32> = StringTrie::new();
    /// assert_eq!(strict.fetch("foo"), Err(Error::KeyNotFound));
    /// ```
    pub fn fetch<Q>(&mut self, key: &Q) -> Result<&mut V>
    where
        Q: AsSymbols<S> + ?Sized,
    {
        if !self.contains_key(key) {
            let value = match self.default_factory {
                Some(ref factory) => factory(),
                None => return Err(Error::KeyNotFound),
            };
            trace!("inserting default value for missing key");
            return Ok(self.set_default(key, value));
        }
        self.get_mut(key).ok_or(Error::KeyNotFound)
    }

    /// Checks if a key exists in the trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use symbol_trie::trie::StringTrie;
    ///
    /// let mut trie = StringTrie::new();
    /// trie.insert("foo", 1);
    /// assert!(trie.contains_key("foo"));
    /// assert!(!trie.contains_key("fo"));
    /// ```
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        Q: AsSymbols<S> + ?Sized,
    {
        self.get(key).is_some()
    }

    fn take_at(&mut self, symbols: &[S]) -> Option<V> {
        let node = self.root.descend_mut(symbols)?;
        let value = node.value.take()?;
        if node.is_empty() {
            self.root.detach(symbols);
        }
        self.len -= 1;
        Some(value)
    }

    /// Removes a key from the trie and returns its value. Nodes left without entries below them
    /// are pruned. Fails with `Error::KeyNotFound` and leaves the trie untouched if the key does
    /// not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use symbol_trie::Error;
    /// use symbol_trie::trie::StringTrie;
    ///
    /// let mut trie = StringTrie::new();
    /// trie.insert("foo", 1);
    /// assert_eq!(trie.delete("foo"), Ok(1));
    /// assert_eq!(trie.delete("foo"), Err(Error::KeyNotFound));
    /// ```
    pub fn delete<Q>(&mut self, key: &Q) -> Result<V>
    where
        Q: AsSymbols<S> + ?Sized,
    {
        let symbols = key.symbols().collect::<Vec<_>>();
        self.take_at(&symbols).ok_or(Error::KeyNotFound)
    }

    /// Removes a key from the trie and returns its value, or `None` if the key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use symbol_trie::trie::StringTrie;
    ///
    /// let mut trie = StringTrie::new();
    /// trie.insert("foo", 1);
    /// assert_eq!(trie.pop("foo"), Some(1));
    /// assert_eq!(trie.pop("foo"), None);
    /// ```
    pub fn pop<Q>(&mut self, key: &Q) -> Option<V>
    where
        Q: AsSymbols<S> + ?Sized,
    {
        self.delete(key).ok()
    }

    /// Returns a mutable reference to the value associated with `key`, inserting `default` first
    /// if the key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use symbol_trie::trie::StringTrie;
    ///
    /// let mut trie = StringTrie::new();
    /// assert_eq!(*trie.set_default("foo", 1), 1);
    /// assert_eq!(*trie.set_default("foo", 2), 1);
    /// ```
    pub fn set_default<Q>(&mut self, key: &Q, default: V) -> &mut V
    where
        Q: AsSymbols<S> + ?Sized,
    {
        let node = self.root.descend_or_insert(key.symbols());
        if node.value.is_none() {
            self.len += 1;
        }
        node.value.get_or_insert(default)
    }

    /// Merges `other` into the trie, consuming it. Subtrees of `other` whose first symbol is new
    /// at a node are moved over whole; shared paths are merged level by level. Values of `other`
    /// replace existing values for the same key. The default factory of `other` is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use symbol_trie::trie::StringTrie;
    ///
    /// let mut trie = StringTrie::new();
    /// trie.insert("a", 1);
    ///
    /// let mut other = StringTrie::new();
    /// other.insert("a", 2);
    /// other.insert("b", 3);
    ///
    /// trie.update(other);
    /// assert_eq!(trie.get("a"), Some(&2));
    /// assert_eq!(trie.get("b"), Some(&3));
    /// assert_eq!(trie.len(), 2);
    /// ```
    pub fn update(&mut self, other: Self) {
        let Trie { root, len, .. } = other;
        let (donated, overwritten) = self.root.merge(root);
        self.len += len - overwritten;
        debug!(
            "merged {} entries: {} subtrees donated, {} values overwritten",
            len, donated, overwritten,
        );
    }

    /// Removes every entry whose key starts with `prefix` and returns how many were removed.
    /// Fails with `Error::KeyNotFound` if no node exists at `prefix`.
    ///
    /// # Examples
    ///
    /// ```
    /// use symbol_trie::Error;
    /// use symbol_trie::trie::StringTrie;
    ///
    /// let mut trie = StringTrie::new();
    /// trie.insert("foo", 1);
    /// trie.insert("foobar", 2);
    /// trie.insert("bar", 3);
    ///
    /// assert_eq!(trie.remove("fo"), Ok(2));
    /// assert_eq!(trie.remove("fo"), Err(Error::KeyNotFound));
    /// assert_eq!(trie.len(), 1);
    /// ```
    pub fn remove<Q>(&mut self, prefix: &Q) -> Result<usize>
    where
        Q: AsSymbols<S> + ?Sized,
    {
        let symbols = prefix.symbols().collect::<Vec<_>>();
        let removed = if symbols.is_empty() {
            mem::take(&mut self.root)
        } else {
            self.root.detach(&symbols).ok_or(Error::KeyNotFound)?
        };
        let count = removed.count();
        self.len -= count;
        debug!("removed {} entries under prefix of length {}", count, symbols.len());
        Ok(count)
    }

    /// Returns an iterator over the values whose keys start with `prefix`. The iterator is empty
    /// if no key starts with `prefix`.
    ///
    /// # Examples
    ///
    /// ```
    /// use symbol_trie::trie::StringTrie;
    ///
    /// let mut trie = StringTrie::new();
    /// trie.insert("foo", 1);
    /// trie.insert("foobar", 2);
    /// trie.insert("bar", 3);
    /// assert_eq!(trie.values_prefix("foo").collect::<Vec<_>>(), vec![&1, &2]);
    /// assert_eq!(trie.values_prefix("baz").count(), 0);
    /// ```
    pub fn values_prefix<Q>(&self, prefix: &Q) -> Values<'_, S, V, O>
    where
        Q: AsSymbols<S> + ?Sized,
    {
        Values::new(self.subtrie(prefix))
    }
}

impl<S, V, O, B> Trie<S, V, O, B>
where
    S: Clone,
    O: ChildOrder<S>,
    B: KeyBuilder<S>,
{
    /// Removes and returns the first entry in traversal order. Fails with `Error::EmptyTrie` if
    /// the trie holds no entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use symbol_trie::Error;
    /// use symbol_trie::trie::StringTrie;
    ///
    /// let mut trie = StringTrie::new();
    /// trie.insert("foo", 1);
    /// assert_eq!(trie.pop_first(), Ok((String::from("foo"), 1)));
    /// assert_eq!(trie.pop_first(), Err(Error::EmptyTrie));
    /// ```
    pub fn pop_first(&mut self) -> Result<(B::Key, V)> {
        let mut symbols = Vec::new();
        let mut curr = &self.root;
        while curr.value.is_none() {
            let (symbol, child) = curr.edges.iter().next().ok_or(Error::EmptyTrie)?;
            symbols.push(symbol.clone());
            curr = child;
        }
        let value = self.take_at(&symbols).ok_or(Error::EmptyTrie)?;
        Ok((B::build(&symbols), value))
    }

    /// Returns an iterator over the entries whose keys start with `prefix`. Keys are yielded in
    /// full, prefix included. The iterator is empty if no key starts with `prefix`.
    ///
    /// # Examples
    ///
    /// ```
    /// use symbol_trie::trie::StringTrie;
    ///
    /// let mut trie = StringTrie::new();
    /// trie.insert("foo", 1);
    /// trie.insert("foobar", 2);
    /// trie.insert("bar", 3);
    /// assert_eq!(
    ///     trie.iter_prefix("foob").collect::<Vec<_>>(),
    ///     vec![(String::from("foobar"), &2)],
    /// );
    /// ```
    pub fn iter_prefix<Q>(&self, prefix: &Q) -> Iter<'_, S, V, O, B>
    where
        Q: AsSymbols<S> + ?Sized,
    {
        match self.subtrie(prefix) {
            Some(node) => Iter::new(prefix.symbols().collect(), Some(node)),
            None => Iter::new(Vec::new(), None),
        }
    }

    /// Returns an iterator over the keys that start with `prefix`.
    ///
    /// # Examples
    ///
    /// ```
    /// use symbol_trie::trie::StringTrie;
    ///
    /// let mut trie = StringTrie::new();
    /// trie.insert("foo", 1);
    /// trie.insert("foobar", 2);
    /// trie.insert("bar", 3);
    /// assert_eq!(trie.keys_prefix("fo").collect::<Vec<_>>(), vec!["foo", "foobar"]);
    /// ```
    pub fn keys_prefix<Q>(&self, prefix: &Q) -> Keys<'_, S, V, O, B>
    where
        Q: AsSymbols<S> + ?Sized,
    {
        Keys::new(self.iter_prefix(prefix))
    }
}

impl<S, V, B> Trie<S, V, Lexicographic, B>
where
    S: Clone + Ord,
    B: KeyBuilder<S>,
{
    /// Returns the lexicographically smallest key, or `None` if the trie is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use symbol_trie::trie::SortedStringTrie;
    ///
    /// let mut trie = SortedStringTrie::new();
    /// trie.insert("foobar", 1);
    /// trie.insert("foo", 2);
    /// assert_eq!(trie.min(), Some(String::from("foo")));
    /// ```
    pub fn min(&self) -> Option<B::Key> {
        self.keys().next()
    }

    /// Returns the lexicographically largest key, or `None` if the trie is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use symbol_trie::trie::SortedStringTrie;
    ///
    /// let mut trie = SortedStringTrie::new();
    /// trie.insert("foo", 1);
    /// trie.insert("foobar", 2);
    /// assert_eq!(trie.max(), Some(String::from("foobar")));
    /// ```
    pub fn max(&self) -> Option<B::Key> {
        let mut symbols = Vec::new();
        let mut curr = &self.root;
        while let Some((symbol, child)) = curr.edges.iter().next_back() {
            symbols.push(symbol.clone());
            curr = child;
        }
        curr.value.as_ref().map(|_| B::build(&symbols))
    }
}

impl<S, V, O, B> Default for Trie<S, V, O, B>
where
    O: ChildOrder<S>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S, V, O, B> Clone for Trie<S, V, O, B>
where
    S: Clone,
    V: Clone,
    O: ChildOrder<S>,
{
    fn clone(&self) -> Self {
        Trie {
            root: self.root.clone(),
            len: self.len,
            default_factory: self.default_factory.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, V, O, B> PartialEq for Trie<S, V, O, B>
where
    V: PartialEq,
    O: ChildOrder<S>,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.root.same_entries(&other.root)
    }
}

impl<S, V, O, B> Eq for Trie<S, V, O, B>
where
    V: Eq,
    O: ChildOrder<S>,
{
}

impl<S, V, O, B> fmt::Debug for Trie<S, V, O, B>
where
    S: Clone,
    V: fmt::Debug,
    O: ChildOrder<S>,
    B: KeyBuilder<S>,
    B::Key: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<S, V, O, B, K> FromIterator<(K, V)> for Trie<S, V, O, B>
where
    K: AsSymbols<S>,
    O: ChildOrder<S>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut trie = Self::new();
        trie.extend(iter);
        trie
    }
}

impl<S, V, O, B, K> Extend<(K, V)> for Trie<S, V, O, B>
where
    K: AsSymbols<S>,
    O: ChildOrder<S>,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in iter {
            self.insert(&key, value);
        }
    }
}

impl<S, V, O, B> IntoIterator for Trie<S, V, O, B>
where
    S: Clone,
    O: ChildOrder<S>,
    B: KeyBuilder<S>,
{
    type IntoIter = IntoIter<S, V, O, B>;
    type Item = (B::Key, V);

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.root)
    }
}

impl<'a, S, V, O, B> IntoIterator for &'a Trie<S, V, O, B>
where
    S: 'a + Clone,
    V: 'a,
    O: 'a + ChildOrder<S>,
    B: KeyBuilder<S>,
{
    type IntoIter = Iter<'a, S, V, O, B>;
    type Item = (B::Key, &'a V);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, S, V, O, B, Q> Index<&'a Q> for Trie<S, V, O, B>
where
    Q: AsSymbols<S> + ?Sized,
    O: ChildOrder<S>,
{
    type Output = V;

    fn index(&self, key: &Q) -> &Self::Output {
        self.get(key).expect("Error: key does not exist.")
    }
}

impl<'a, S, V, O, B, Q> IndexMut<&'a Q> for Trie<S, V, O, B>
where
    Q: AsSymbols<S> + ?Sized,
    O: ChildOrder<S>,
{
    fn index_mut(&mut self, key: &Q) -> &mut Self::Output {
        self.get_mut(key).expect("Error: key does not exist.")
    }
}

#[cfg(test)]
mod tests {
    use super::{SortedStringTrie, SortedTrie, StringTrie, Trie};
    use crate::error::Error;

    fn sample() -> Trie<&'static str, u32> {
        let mut trie: Trie<&'static str, u32> = Trie::new();
        trie.insert(&["a", "b"], 1);
        trie.insert(&["a", "c"], 2);
        trie.insert(&["x"], 3);
        trie
    }

    #[test]
    fn test_len_empty() {
        let trie: Trie<u8, u32> = Trie::new();
        assert_eq!(trie.len(), 0);
        assert!(trie.is_empty());
    }

    #[test]
    fn test_insert() {
        let mut trie = StringTrie::new();
        assert_eq!(trie.insert("aaaa", 0), None);
        assert_eq!(trie.insert("aabb", 1), None);
        assert_eq!(trie.insert("bb", 2), None);
        assert_eq!(trie.insert("bbbb", 3), None);

        assert_eq!(
            trie.iter().collect::<Vec<(String, &u32)>>(),
            vec![
                (String::from("aaaa"), &0),
                (String::from("aabb"), &1),
                (String::from("bb"), &2),
                (String::from("bbbb"), &3),
            ],
        );
    }

    #[test]
    fn test_insert_replace() {
        let mut trie = StringTrie::new();
        assert_eq!(trie.insert("a", 0), None);
        assert_eq!(trie.insert("a", 1), Some(0));
        assert_eq!(trie.get("a"), Some(&1));
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn test_empty_key() {
        let mut trie = StringTrie::new();
        trie.insert("", 0);
        trie.insert("a", 1);
        assert_eq!(trie.len(), 2);
        assert_eq!(trie.get(""), Some(&0));
        assert_eq!(trie.keys().collect::<Vec<_>>(), vec!["", "a"]);
        assert_eq!(trie.delete(""), Ok(0));
        assert_eq!(trie.len(), 1);
        assert_eq!(trie.get("a"), Some(&1));
    }

    #[test]
    fn test_round_trip() {
        let mut trie = StringTrie::new();
        trie.insert("abc", 7);
        assert_eq!(trie.lookup("abc"), Ok(&7));
        assert_eq!(trie.delete("abc"), Ok(7));
        assert!(!trie.contains_key("abc"));
        assert_eq!(trie.lookup("abc"), Err(Error::KeyNotFound));
    }

    #[test]
    fn test_delete_missing_leaves_trie_untouched() {
        let mut trie = StringTrie::new();
        trie.insert("abc", 1);
        assert_eq!(trie.delete("ab"), Err(Error::KeyNotFound));
        assert_eq!(trie.delete("abd"), Err(Error::KeyNotFound));
        assert_eq!(trie.len(), 1);
        assert_eq!(trie.get("abc"), Some(&1));
    }

    #[test]
    fn test_delete_prunes() {
        let mut trie: Trie<&str, u32> = Trie::new();
        trie.insert(&["a", "b", "c"], 1);
        assert_eq!(trie.delete(&["a", "b", "c"]), Ok(1));
        assert_eq!(trie.iter().count(), 0);
        assert!(trie.root.is_empty());

        trie.insert(&["x"], 2);
        assert_eq!(trie.len(), 1);
        assert_eq!(trie.root.edges.len(), 1);
    }

    #[test]
    fn test_delete_keeps_shared_prefix() {
        let mut trie = StringTrie::new();
        trie.insert("ab", 1);
        trie.insert("abcd", 2);
        trie.insert("abef", 3);
        assert_eq!(trie.delete("abcd"), Ok(2));
        assert_eq!(trie.keys().collect::<Vec<_>>(), vec!["ab", "abef"]);
        assert_eq!(trie.delete("ab"), Ok(1));
        assert_eq!(trie.keys().collect::<Vec<_>>(), vec!["abef"]);
        assert_eq!(trie.root.count(), 1);
    }

    #[test]
    fn test_pop() {
        let mut trie = StringTrie::new();
        trie.insert("a", 1);
        assert_eq!(trie.pop("a"), Some(1));
        assert_eq!(trie.pop("a"), None);
        assert_eq!(trie.pop("a").unwrap_or(9), 9);
    }

    #[test]
    fn test_get_or() {
        let trie = sample();
        assert_eq!(trie.get_or(&["a", "b"], &0), &1);
        assert_eq!(trie.get_or(&["a"], &0), &0);
    }

    #[test]
    fn test_get_mut() {
        let mut trie = sample();
        *trie.get_mut(&["x"]).unwrap() = 30;
        assert_eq!(trie.get(&["x"]), Some(&30));
        assert_eq!(trie.get_mut(&["a"]), None);
        assert_eq!(trie.get_mut(&["y"]), None);
    }

    #[test]
    fn test_set_default() {
        let mut trie = StringTrie::new();
        assert_eq!(*trie.set_default("a", 1), 1);
        assert_eq!(*trie.set_default("a", 2), 1);
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn test_pop_first() {
        let mut trie = sample();
        assert_eq!(trie.pop_first(), Ok((vec!["a", "b"], 1)));
        assert_eq!(trie.pop_first(), Ok((vec!["a", "c"], 2)));
        assert_eq!(trie.pop_first(), Ok((vec!["x"], 3)));
        assert_eq!(trie.pop_first(), Err(Error::EmptyTrie));
        assert!(trie.root.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut trie = sample();
        trie.clear();
        assert!(trie.is_empty());
        assert_eq!(trie.iter().count(), 0);
    }

    #[test]
    fn test_iter_prefix() {
        let trie = sample();
        assert_eq!(
            trie.iter_prefix(&["a"]).collect::<Vec<_>>(),
            vec![(vec!["a", "b"], &1), (vec!["a", "c"], &2)],
        );
        assert_eq!(trie.iter_prefix(&["y"]).count(), 0);
        assert_eq!(trie.iter_prefix(&[] as &[&str]).count(), 3);
    }

    #[test]
    fn test_values_prefix() {
        let trie = sample();
        assert_eq!(trie.values_prefix(&["a"]).collect::<Vec<_>>(), vec![&1, &2]);
        assert_eq!(trie.values_prefix(&["a", "b", "c"]).count(), 0);
    }

    #[test]
    fn test_remove() {
        let mut trie = sample();
        assert_eq!(trie.remove(&["a"]), Ok(2));
        assert_eq!(trie.len(), 1);
        assert_eq!(trie.len(), trie.iter().count());
        assert_eq!(trie.remove(&["a"]), Err(Error::KeyNotFound));
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn test_remove_prunes_ancestors() {
        let mut trie = StringTrie::new();
        trie.insert("abc", 1);
        trie.insert("abcd", 2);
        trie.insert("x", 3);
        assert_eq!(trie.remove("abc"), Ok(2));
        assert_eq!(trie.root.edges.len(), 1);
        assert_eq!(trie.keys().collect::<Vec<_>>(), vec!["x"]);
    }

    #[test]
    fn test_remove_empty_prefix() {
        let mut trie = sample();
        assert_eq!(trie.remove(&[] as &[&str]), Ok(3));
        assert!(trie.is_empty());
        trie.insert(&["q"], 1);
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn test_update() {
        let mut lhs: Trie<&str, u32> = Trie::new();
        lhs.insert(&["a"], 1);
        let mut rhs: Trie<&str, u32> = Trie::new();
        rhs.insert(&["a"], 2);
        rhs.insert(&["b"], 3);

        lhs.update(rhs);
        assert_eq!(lhs.len(), 2);
        assert_eq!(lhs.get(&["a"]), Some(&2));
        assert_eq!(lhs.get(&["b"]), Some(&3));
    }

    #[test]
    fn test_update_deep() {
        let mut lhs = StringTrie::new();
        lhs.insert("abc", 1);
        lhs.insert("abd", 2);
        let mut rhs = StringTrie::new();
        rhs.insert("ab", 3);
        rhs.insert("abd", 4);
        rhs.insert("abe", 5);
        rhs.insert("z", 6);

        lhs.update(rhs);
        assert_eq!(lhs.len(), 5);
        assert_eq!(lhs.len(), lhs.iter().count());
        assert_eq!(
            lhs.iter().collect::<Vec<_>>(),
            vec![
                (String::from("ab"), &3),
                (String::from("abc"), &1),
                (String::from("abd"), &4),
                (String::from("abe"), &5),
                (String::from("z"), &6),
            ],
        );
    }

    #[test]
    fn test_update_sorted() {
        let mut lhs = SortedStringTrie::new();
        lhs.insert("b", 1);
        lhs.insert("d", 2);
        let mut rhs = SortedStringTrie::new();
        rhs.insert("a", 3);
        rhs.insert("c", 4);
        rhs.insert("d", 5);

        lhs.update(rhs);
        assert_eq!(lhs.keys().collect::<Vec<_>>(), vec!["a", "b", "c", "d"]);
        assert_eq!(lhs.get("d"), Some(&5));
    }

    #[test]
    fn test_extend() {
        let mut trie = StringTrie::new();
        trie.insert("a", 0);
        trie.extend(vec![("a", 1), ("b", 2)]);
        assert_eq!(trie.len(), 2);
        assert_eq!(trie.get("a"), Some(&1));
    }

    #[test]
    fn test_sorted_order() {
        let mut trie = SortedStringTrie::new();
        trie.insert("dog", 0);
        trie.insert("cat", 1);
        trie.insert("cab", 2);
        assert_eq!(trie.keys().collect::<Vec<_>>(), vec!["cab", "cat", "dog"]);
        assert_eq!(trie.min(), Some(String::from("cab")));
        assert_eq!(trie.max(), Some(String::from("dog")));
    }

    #[test]
    fn test_sorted_prefix_before_extension() {
        let mut trie: SortedTrie<u8, u32> = SortedTrie::new();
        trie.insert("ab", 0);
        trie.insert("b", 1);
        trie.insert("a", 2);
        assert_eq!(
            trie.keys().collect::<Vec<_>>(),
            vec![b"a".to_vec(), b"ab".to_vec(), b"b".to_vec()],
        );
    }

    #[test]
    fn test_min_max_empty() {
        let trie: SortedStringTrie<u32> = SortedStringTrie::new();
        assert_eq!(trie.min(), None);
        assert_eq!(trie.max(), None);
    }

    #[test]
    fn test_insertion_order() {
        let mut trie = StringTrie::new();
        trie.insert("dog", 0);
        trie.insert("cat", 1);
        trie.insert("cab", 2);
        assert_eq!(trie.keys().collect::<Vec<_>>(), vec!["dog", "cat", "cab"]);
    }

    #[test]
    fn test_default_factory() {
        let mut trie: StringTrie<Vec<u32>> = StringTrie::with_default_factory(Vec::new);
        assert_eq!(trie.fetch("foo"), Ok(&mut Vec::new()));
        assert!(trie.contains_key("foo"));
        assert_eq!(trie.len(), 1);

        assert_eq!(trie.get("bar"), None);
        assert_eq!(trie.pop("bar"), None);
        assert!(!trie.contains_key("bar"));
    }

    #[test]
    fn test_fetch_without_factory() {
        let mut trie: StringTrie<u32> = StringTrie::new();
        assert_eq!(trie.fetch("foo"), Err(Error::KeyNotFound));
        assert!(trie.root.is_empty());
    }

    #[test]
    fn test_equality() {
        let mut lhs = StringTrie::new();
        lhs.insert("a", 1);
        lhs.insert("b", 2);
        let mut rhs = StringTrie::new();
        rhs.insert("b", 2);
        rhs.insert("a", 1);
        assert_eq!(lhs, rhs);

        rhs.insert("c", 3);
        assert_ne!(lhs, rhs);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut trie = sample();
        let copy = trie.clone();
        trie.insert(&["a", "d"], 4);
        trie.delete(&["x"]).unwrap();
        assert_eq!(copy.len(), 3);
        assert_eq!(copy.get(&["x"]), Some(&3));
        assert_eq!(copy.get(&["a", "d"]), None);
    }

    #[test]
    fn test_clone_deep_key() {
        let key = (0..200_000).collect::<Vec<u32>>();
        let mut trie: Trie<u32, u32> = Trie::new();
        trie.insert(&key, 1);
        trie.insert(&key[..10], 2);

        let copy = trie.clone();
        assert_eq!(copy.len(), 2);
        assert_eq!(copy.get(&key), Some(&1));
        assert!(copy == trie);
    }

    #[test]
    fn test_index() {
        let mut trie = StringTrie::new();
        trie.insert("a", 1);
        trie["a"] += 1;
        assert_eq!(trie["a"], 2);
    }

    #[test]
    #[should_panic]
    fn test_index_missing() {
        let trie: StringTrie<u32> = StringTrie::new();
        let _ = trie["a"];
    }

    #[test]
    fn test_into_iter() {
        let mut trie = StringTrie::new();
        trie.insert("a", 2);
        trie.insert("ab", 6);
        trie.insert("aa", 4);

        assert_eq!(
            trie.into_iter().collect::<Vec<(String, u32)>>(),
            vec![
                (String::from("a"), 2),
                (String::from("ab"), 6),
                (String::from("aa"), 4),
            ],
        );
    }

    #[test]
    fn test_from_iter() {
        let trie: StringTrie<u32> = vec![("b", 1), ("a", 2)].into_iter().collect();
        let copy: StringTrie<u32> = trie.clone().into_iter().collect();
        assert_eq!(trie, copy);
    }

    #[test]
    fn test_debug() {
        let mut trie = StringTrie::new();
        trie.insert("a", 1);
        assert_eq!(format!("{:?}", trie), "{\"a\": 1}");
    }
}
