use crate::trie::policy::{ChildMap, ChildOrder};
use std::borrow::Borrow;
use std::mem;

/// A single level of the trie.
///
/// `value` is the terminal slot: it holds the value of the key that ends at this node. Children
/// are keyed by symbol in the map chosen by the trie's `ChildOrder`.
pub struct Node<S, V, O>
where
    O: ChildOrder<S>,
{
    pub value: Option<V>,
    pub edges: O::Map<Node<S, V, O>>,
}

impl<S, V, O> Node<S, V, O>
where
    O: ChildOrder<S>,
{
    pub fn new() -> Self {
        Node {
            value: None,
            edges: Default::default(),
        }
    }

    /// Returns `true` if the node holds neither a value nor any children.
    pub fn is_empty(&self) -> bool {
        self.value.is_none() && self.edges.is_empty()
    }

    /// Follows `symbols` from this node without creating anything.
    pub fn descend<I>(&self, symbols: I) -> Option<&Self>
    where
        I: IntoIterator,
        I::Item: Borrow<S>,
    {
        let mut curr = self;
        for symbol in symbols {
            curr = curr.edges.get(symbol.borrow())?;
        }
        Some(curr)
    }

    pub fn descend_mut<I>(&mut self, symbols: I) -> Option<&mut Self>
    where
        I: IntoIterator,
        I::Item: Borrow<S>,
    {
        let mut curr = self;
        for symbol in symbols {
            curr = curr.edges.get_mut(symbol.borrow())?;
        }
        Some(curr)
    }

    /// Follows `symbols` from this node, creating every missing child on the way.
    pub fn descend_or_insert<I>(&mut self, symbols: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
    {
        let mut curr = self;
        for symbol in symbols {
            curr = curr.edges.get_or_insert_with(symbol, Node::new);
        }
        curr
    }

    /// Detaches the subtree at the end of a non-empty `symbols` path together with every ancestor
    /// that would be left empty without it. The nearest ancestor holding a value or another child
    /// keeps its remaining children. Returns `None` and changes nothing if the path is empty or
    /// does not exist.
    pub fn detach(&mut self, symbols: &[S]) -> Option<Self> {
        if symbols.is_empty() {
            return None;
        }

        let mut cut = 0;
        let mut curr = &*self;
        for (depth, symbol) in symbols.iter().enumerate() {
            if curr.value.is_some() || curr.edges.len() > 1 {
                cut = depth;
            }
            curr = curr.edges.get(symbol)?;
        }

        self.descend_mut(&symbols[..cut])?
            .edges
            .remove(&symbols[cut])
    }

    /// Counts the values stored in this subtree.
    pub fn count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if node.value.is_some() {
                count += 1;
            }
            stack.extend(node.edges.iter().map(|(_, child)| child));
        }
        count
    }

    /// Merges `other` into this node. Subtrees of `other` under symbols this node lacks are moved
    /// in whole; shared symbols are merged level by level. Returns the number of donated subtrees
    /// and the number of values of this node's subtree that were overwritten.
    pub fn merge(&mut self, other: Self) -> (usize, usize) {
        let mut donated = 0;
        let mut overwritten = 0;
        let mut stack = vec![(self, other)];

        while let Some((dst, mut src)) = stack.pop() {
            if let Some(value) = src.value.take() {
                if dst.value.replace(value).is_some() {
                    overwritten += 1;
                }
            }

            let mut shared: O::Map<Option<Self>> = Default::default();
            for (symbol, child) in mem::take(&mut src.edges).into_entries() {
                if dst.edges.get(&symbol).is_some() {
                    shared.insert(symbol, Some(child));
                } else {
                    dst.edges.insert(symbol, child);
                    donated += 1;
                }
            }
            if shared.is_empty() {
                continue;
            }

            for (symbol, child) in dst.edges.iter_mut() {
                if let Some(other) = shared.get_mut(symbol).and_then(Option::take) {
                    stack.push((child, other));
                }
            }
        }

        (donated, overwritten)
    }

    /// Structural equality that does not depend on the order of children.
    pub fn same_entries(&self, other: &Self) -> bool
    where
        V: PartialEq,
    {
        let mut stack = vec![(self, other)];
        while let Some((lhs, rhs)) = stack.pop() {
            if lhs.value != rhs.value || lhs.edges.len() != rhs.edges.len() {
                return false;
            }
            for (symbol, child) in lhs.edges.iter() {
                match rhs.edges.get(symbol) {
                    Some(other) => stack.push((child, other)),
                    None => return false,
                }
            }
        }
        true
    }
}

impl<S, V, O> Default for Node<S, V, O>
where
    O: ChildOrder<S>,
{
    fn default() -> Self {
        Self::new()
    }
}

// Copied level by level so that long keys cannot exhaust the stack.
impl<S, V, O> Clone for Node<S, V, O>
where
    S: Clone,
    V: Clone,
    O: ChildOrder<S>,
{
    fn clone(&self) -> Self {
        let mut root: Self = Node {
            value: self.value.clone(),
            edges: Default::default(),
        };
        let mut stack = vec![(&mut root, self)];

        while let Some((dst, src)) = stack.pop() {
            for (symbol, child) in src.edges.iter() {
                dst.edges.insert(symbol.clone(), Node {
                    value: child.value.clone(),
                    edges: Default::default(),
                });
            }
            // both maps now hold the same symbols in the same order
            for ((_, dst_child), (_, src_child)) in dst.edges.iter_mut().zip(src.edges.iter()) {
                stack.push((dst_child, src_child));
            }
        }

        root
    }
}

// Tear the tree down level by level so that long keys cannot exhaust the stack.
impl<S, V, O> Drop for Node<S, V, O>
where
    O: ChildOrder<S>,
{
    fn drop(&mut self) {
        let mut stack = mem::take(&mut self.edges)
            .into_entries()
            .map(|(_, child)| child)
            .collect::<Vec<_>>();
        while let Some(mut node) = stack.pop() {
            stack.extend(
                mem::take(&mut node.edges)
                    .into_entries()
                    .map(|(_, child)| child),
            );
        }
    }
}
