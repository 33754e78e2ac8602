use crate::trie::node::Node;
use crate::trie::policy::{ChildMap, ChildOrder, KeyBuilder};
use std::marker::PhantomData;
use std::mem;

/// An iterator over the entries of a `Trie`.
///
/// Entries are yielded in depth-first preorder: the value of a node comes before the values of
/// its children, and children are visited in the trie's child order. Keys are rebuilt with the
/// trie's `KeyBuilder`.
pub struct Iter<'a, S, V, O, B>
where
    S: 'a,
    V: 'a,
    O: 'a + ChildOrder<S>,
{
    prefix: Vec<S>,
    stack: Vec<(usize, Option<&'a S>, &'a Node<S, V, O>)>,
    _marker: PhantomData<B>,
}

impl<'a, S, V, O, B> Iter<'a, S, V, O, B>
where
    O: ChildOrder<S>,
{
    pub(crate) fn new(prefix: Vec<S>, root: Option<&'a Node<S, V, O>>) -> Self {
        let depth = prefix.len();
        Iter {
            prefix,
            stack: root.into_iter().map(|node| (depth, None, node)).collect(),
            _marker: PhantomData,
        }
    }
}

impl<'a, S, V, O, B> Iterator for Iter<'a, S, V, O, B>
where
    S: 'a + Clone,
    V: 'a,
    O: 'a + ChildOrder<S>,
    B: KeyBuilder<S>,
{
    type Item = (B::Key, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((depth, symbol, node)) = self.stack.pop() {
            self.prefix.truncate(depth);
            if let Some(symbol) = symbol {
                self.prefix.push(symbol.clone());
            }

            let depth = self.prefix.len();
            self.stack.extend(
                node.edges
                    .iter()
                    .rev()
                    .map(|(symbol, child)| (depth, Some(symbol), child)),
            );

            if let Some(ref value) = node.value {
                return Some((B::build(&self.prefix), value));
            }
        }
        None
    }
}

/// An iterator over the keys of a `Trie`, in the same order as `Iter`.
pub struct Keys<'a, S, V, O, B>
where
    S: 'a,
    V: 'a,
    O: 'a + ChildOrder<S>,
{
    inner: Iter<'a, S, V, O, B>,
}

impl<'a, S, V, O, B> Keys<'a, S, V, O, B>
where
    O: ChildOrder<S>,
{
    pub(crate) fn new(inner: Iter<'a, S, V, O, B>) -> Self {
        Keys { inner }
    }
}

impl<'a, S, V, O, B> Iterator for Keys<'a, S, V, O, B>
where
    S: 'a + Clone,
    V: 'a,
    O: 'a + ChildOrder<S>,
    B: KeyBuilder<S>,
{
    type Item = B::Key;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }
}

/// An iterator over the values of a `Trie`.
///
/// Visits nodes in the same order as `Iter` but never rebuilds keys.
pub struct Values<'a, S, V, O>
where
    S: 'a,
    V: 'a,
    O: 'a + ChildOrder<S>,
{
    stack: Vec<&'a Node<S, V, O>>,
}

impl<'a, S, V, O> Values<'a, S, V, O>
where
    O: ChildOrder<S>,
{
    pub(crate) fn new(root: Option<&'a Node<S, V, O>>) -> Self {
        Values {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, S, V, O> Iterator for Values<'a, S, V, O>
where
    S: 'a,
    V: 'a,
    O: 'a + ChildOrder<S>,
{
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            self.stack
                .extend(node.edges.iter().rev().map(|(_, child)| child));
            if let Some(ref value) = node.value {
                return Some(value);
            }
        }
        None
    }
}

/// A mutable iterator over the values of a `Trie`.
pub struct ValuesMut<'a, S, V, O>
where
    S: 'a,
    V: 'a,
    O: 'a + ChildOrder<S>,
{
    stack: Vec<&'a mut Node<S, V, O>>,
}

impl<'a, S, V, O> ValuesMut<'a, S, V, O>
where
    O: ChildOrder<S>,
{
    pub(crate) fn new(root: Option<&'a mut Node<S, V, O>>) -> Self {
        ValuesMut {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, S, V, O> Iterator for ValuesMut<'a, S, V, O>
where
    S: 'a,
    V: 'a,
    O: 'a + ChildOrder<S>,
{
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            let Node { value, edges } = node;
            self.stack
                .extend(edges.iter_mut().rev().map(|(_, child)| child));
            if let Some(value) = value.as_mut() {
                return Some(value);
            }
        }
        None
    }
}

/// An owning iterator over the entries of a `Trie`, in the same order as `Iter`.
pub struct IntoIter<S, V, O, B>
where
    O: ChildOrder<S>,
{
    prefix: Vec<S>,
    stack: Vec<(usize, Option<S>, Node<S, V, O>)>,
    _marker: PhantomData<B>,
}

impl<S, V, O, B> IntoIter<S, V, O, B>
where
    O: ChildOrder<S>,
{
    pub(crate) fn new(root: Node<S, V, O>) -> Self {
        IntoIter {
            prefix: Vec::new(),
            stack: vec![(0, None, root)],
            _marker: PhantomData,
        }
    }
}

impl<S, V, O, B> Iterator for IntoIter<S, V, O, B>
where
    S: Clone,
    O: ChildOrder<S>,
    B: KeyBuilder<S>,
{
    type Item = (B::Key, V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((depth, symbol, mut node)) = self.stack.pop() {
            self.prefix.truncate(depth);
            if let Some(symbol) = symbol {
                self.prefix.push(symbol);
            }

            let depth = self.prefix.len();
            self.stack.extend(
                mem::take(&mut node.edges)
                    .into_entries()
                    .rev()
                    .map(|(symbol, child)| (depth, Some(symbol), child)),
            );

            if let Some(value) = node.value.take() {
                return Some((B::build(&self.prefix), value));
            }
        }
        None
    }
}
