use crate::{Element, StackError};
use core::cmp::Ordering;
use core::fmt;
use tracing::debug;

pub struct Node<V> {
    pub val: V,
    pub(crate) next: Option<Box<Self>>,
}

impl<V> Node<V> {
    fn new(val: V, next: Option<Box<Self>>) -> Box<Self> {
        Box::new(Node { val, next })
    }
}

/// A LIFO stack of owned nodes.
///
/// Alongside the main chain the stack keeps a second, shorter chain of minimums: every
/// pushed value that is less than or equal to the current minimum is recorded on it, and
/// popping a value equal to the current minimum drops one entry. The head of that chain
/// is the minimum of everything on the stack. Only numeric elements are tracked; for
/// opaque elements the chain stays empty.
pub struct Stack<V> {
    head: Option<Box<Node<V>>>,
    len: usize,
    min: Option<Box<Node<V>>>,
}

impl<V> Stack<V> {
    pub fn new() -> Self {
        Stack {
            head: None,
            len: 0,
            min: None,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn top(&self) -> Option<&V> {
        self.head.as_deref().map(|node| &node.val)
    }

    /// Smallest value currently on the stack, in O(1).
    ///
    /// Always `None` for opaque elements.
    pub fn min(&self) -> Option<&V> {
        self.min.as_deref().map(|node| &node.val)
    }

    /// Walks the stack from the top down.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl<V> Stack<V>
where
    V: Element,
{
    /// Pushes `val` and returns a reference to it, now the top.
    pub fn push(&mut self, val: V) -> &V {
        let next = self.head.take();
        let head = self.head.insert(Node::new(val, next));
        self.len += 1;

        record_min(&mut self.min, &head.val);

        &head.val
    }

    /// Removes and returns the top value.
    ///
    /// # Panics
    ///
    /// Panics if the stack is empty. Check [`Stack::top`] or use [`Stack::try_pop`].
    pub fn pop(&mut self) -> V {
        match self.try_pop() {
            Some(val) => val,
            None => panic!("pop on an empty stack"),
        }
    }

    pub fn try_pop(&mut self) -> Option<V> {
        let node = self.head.take()?;
        let Node { val, next } = *node;

        self.head = next;
        self.len -= 1;

        release_min(&mut self.min, &val);

        Some(val)
    }

    /// Values from bottom to top; the last entry is the top.
    pub fn to_vec(&self) -> Vec<V> {
        let mut out: Vec<V> = self.iter().cloned().collect();
        out.reverse();
        out
    }

    pub fn into_vec(mut self) -> Vec<V> {
        let mut out = Vec::with_capacity(self.len);
        while let Some(val) = self.try_pop() {
            out.push(val);
        }
        out.reverse();
        out
    }

    /// Pushes every item of `items`, starting at index 0.
    pub fn extend_from_slice(&mut self, items: &[V]) {
        for item in items {
            self.push(item.clone());
        }
    }

    /// A new stack whose pop order is the reverse of this one's. `self` is untouched.
    pub fn reverse(&self) -> Stack<V> {
        let mut out = Stack::new();
        for val in self.iter() {
            out.push(val.clone());
        }
        out
    }

    /// Pushes `other`'s values onto `self` from `other`'s top down, so `other`'s bottom
    /// value ends up on top.
    pub fn append_reverse(&mut self, other: Option<&Stack<V>>) -> Result<(), StackError> {
        let other = other.ok_or(StackError::NilOperand {
            op: "append_reverse",
        })?;

        debug!(len = self.len, added = other.len, "append_reverse");

        for val in other.iter() {
            self.push(val.clone());
        }

        Ok(())
    }

    /// Places `other` on top of `self`, keeping `other`'s order: afterwards `self` pops
    /// `other`'s values first, in `other`'s own pop order.
    pub fn append(&mut self, other: Option<&Stack<V>>) -> Result<(), StackError> {
        let other = other.ok_or(StackError::NilOperand { op: "append" })?;

        self.append_reverse(Some(&other.reverse()))
    }
}

fn record_min<V: Element>(min: &mut Option<Box<Node<V>>>, val: &V) {
    if !V::KIND.is_numeric() {
        return;
    }

    let lower = match min.as_deref() {
        None => true,
        Some(current) => matches!(
            val.compare(&current.val),
            Some(Ordering::Less | Ordering::Equal)
        ),
    };

    if lower {
        let next = min.take();
        *min = Some(Node::new(val.clone(), next));
    }
}

fn release_min<V: Element>(min: &mut Option<Box<Node<V>>>, val: &V) {
    let is_min = min
        .as_deref()
        .is_some_and(|current| val.compare(&current.val) == Some(Ordering::Equal));

    if is_min {
        if let Some(node) = min.take() {
            *min = node.next;
        }
    }
}

impl<V> Default for Stack<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Element> Extend<V> for Stack<V> {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        for val in iter {
            self.push(val);
        }
    }
}

impl<V: Element> FromIterator<V> for Stack<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let mut stack = Stack::new();
        stack.extend(iter);
        stack
    }
}

impl<V: Element> Clone for Stack<V> {
    fn clone(&self) -> Self {
        self.to_vec().into_iter().collect()
    }
}

/// Equal when both stacks pop the same values in the same order.
impl<V: PartialEq> PartialEq for Stack<V> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<V: fmt::Debug> fmt::Debug for Stack<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let items: Vec<&V> = self.iter().collect();
        f.debug_list().entries(items.into_iter().rev()).finish()
    }
}

impl<V> Drop for Stack<V> {
    fn drop(&mut self) {
        let mut curr = self.head.take();
        while let Some(mut node) = curr {
            curr = node.next.take();
        }

        let mut curr = self.min.take();
        while let Some(mut node) = curr {
            curr = node.next.take();
        }
    }
}

pub struct Iter<'a, V> {
    next: Option<&'a Node<V>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next.take()?;
        self.next = node.next.as_deref();
        Some(&node.val)
    }
}

impl<'a, V> IntoIterator for &'a Stack<V> {
    type Item = &'a V;
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
