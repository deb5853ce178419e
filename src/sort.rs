//! Sorting a [`Stack`] so that repeated pops come out non-decreasing.
//!
//! `sort` drains into a `Vec` and leans on the slice sort: O(n log n) time, O(n) extra
//! space. `sort_n` is restricted to push, pop, top and len on the stack itself and one
//! auxiliary stack: O(n²) time, O(n) extra space.

use crate::{Element, Stack};
use core::cmp::Ordering;
use tracing::{debug, trace};

/// The operations `sort_n` is allowed to use.
pub trait Primitives {
    type Item;

    fn empty() -> Self;

    fn push(&mut self, item: Self::Item);

    /// Panics when empty.
    fn pop(&mut self) -> Self::Item;

    fn top(&self) -> Option<&Self::Item>;

    fn len(&self) -> usize;
}

impl<V: Element> Primitives for Stack<V> {
    type Item = V;

    fn empty() -> Self {
        Stack::new()
    }

    fn push(&mut self, item: V) {
        Stack::push(self, item);
    }

    fn pop(&mut self) -> V {
        Stack::pop(self)
    }

    fn top(&self) -> Option<&V> {
        Stack::top(self)
    }

    fn len(&self) -> usize {
        Stack::len(self)
    }
}

/// Sorts `stack` so the smallest item ends on top, using a single auxiliary stack.
///
/// The auxiliary stack is kept non-decreasing from bottom to top. Each item taken off
/// `stack` sinks into it: larger auxiliary entries are parked back on `stack`, the item
/// is pushed, and the parked entries return in their original order.
pub fn sort_n<S>(stack: &mut S)
where
    S: Primitives,
    S::Item: Element,
{
    if stack.top().is_none() {
        return;
    }

    let mut aux = S::empty();

    while let Some(top) = stack.top() {
        let val = top.clone();

        let mut parked = 0;
        while aux
            .top()
            .is_some_and(|a| a.compare(&val) == Some(Ordering::Greater))
        {
            stack.push(aux.pop());
            parked += 1;
        }

        aux.push(val);

        for _ in 0..parked {
            aux.push(stack.pop());
        }

        // the copy of `val` still sitting under the parked entries
        stack.pop();

        trace!(parked, remaining = stack.len(), "sort_n pass");
    }

    while aux.top().is_some() {
        stack.push(aux.pop());
    }
}

impl<V> Stack<V>
where
    V: Element,
{
    /// Sorts in O(n log n) so that popping yields a non-decreasing sequence.
    ///
    /// Returns `None`, leaving the stack untouched, when it is empty or its elements
    /// are not numeric.
    pub fn sort(&mut self) -> Option<&mut Self> {
        if self.is_empty() {
            return None;
        }

        if !V::KIND.is_numeric() {
            debug!(kind = %V::KIND, "sort skipped: elements are not numeric");
            return None;
        }

        debug!(len = self.len(), kind = %V::KIND, "sort");

        let mut items = Vec::with_capacity(self.len());
        while let Some(val) = self.try_pop() {
            items.push(val);
        }

        items.sort_unstable_by(|a, b| a.compare(b).unwrap_or(Ordering::Equal));

        // largest first, so the smallest lands on top
        self.extend(items.into_iter().rev());

        Some(self)
    }

    /// Sorts in place using only stack operations and one auxiliary stack, so that
    /// popping yields a non-decreasing sequence. Does nothing unless the elements are
    /// integers.
    pub fn sort_n(&mut self) {
        if !V::KIND.is_integer() {
            debug!(kind = %V::KIND, "sort_n skipped: elements are not integers");
            return;
        }

        debug!(len = self.len(), "sort_n");

        sort_n(self);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::Rng;
    use std::cell::Cell;

    thread_local! {
        static CREATED: Cell<usize> = const { Cell::new(0) };
    }

    /// Bottom to top, like `Stack::to_vec`. Counts how many are created.
    struct Counted(Vec<i32>);

    impl Primitives for Counted {
        type Item = i32;

        fn empty() -> Self {
            CREATED.with(|c| c.set(c.get() + 1));
            Counted(Vec::new())
        }

        fn push(&mut self, item: i32) {
            self.0.push(item);
        }

        fn pop(&mut self) -> i32 {
            self.0.pop().expect("pop on an empty stack")
        }

        fn top(&self) -> Option<&i32> {
            self.0.last()
        }

        fn len(&self) -> usize {
            self.0.len()
        }
    }

    fn drain<V: Element>(stack: &mut Stack<V>) -> Vec<V> {
        let mut out = vec![];
        while let Some(val) = stack.try_pop() {
            out.push(val);
        }
        out
    }

    fn is_non_decreasing<V: Element>(items: &[V]) -> bool {
        items
            .windows(2)
            .all(|w| w[0].compare(&w[1]) != Some(Ordering::Greater))
    }

    #[test]
    fn test_sort_n_pop_order() {
        let mut stack: Stack<i32> = [3, 1, 4, 1, 5].into_iter().collect();

        stack.sort_n();

        assert_eq!(stack.len(), 5);
        assert_eq!(stack.min(), Some(&1));
        assert_eq!(drain(&mut stack), vec![1, 1, 3, 4, 5]);
    }

    #[test]
    fn test_sort_n_single_auxiliary() {
        CREATED.with(|c| c.set(0));

        let mut stack = Counted(vec![9, -2, 7, 7, 0, 3, -2, 11]);
        sort_n(&mut stack);

        assert_eq!(CREATED.with(|c| c.get()), 1);
        assert_eq!(stack.0, vec![11, 9, 7, 7, 3, 0, -2, -2]);
    }

    #[test]
    fn test_sort_n_empty_allocates_nothing() {
        CREATED.with(|c| c.set(0));

        let mut stack = Counted(vec![]);
        sort_n(&mut stack);

        assert_eq!(CREATED.with(|c| c.get()), 0);
        assert!(stack.0.is_empty());
    }

    #[test]
    fn test_sort_n_skips_non_integers() {
        let mut floats: Stack<f64> = [2.0, 1.0, 3.0].into_iter().collect();
        floats.sort_n();
        assert_eq!(floats.to_vec(), vec![2.0, 1.0, 3.0]);

        let mut words: Stack<String> = ["b", "a"].iter().map(|s| s.to_string()).collect();
        words.sort_n();
        assert_eq!(words.to_vec(), vec!["b".to_string(), "a".to_string()]);
    }

    #[test]
    fn test_sort_pop_order() {
        let mut stack: Stack<i64> = [3, 1, 4, 1, 5].into_iter().collect();

        assert!(stack.sort().is_some());
        assert_eq!(stack.top(), Some(&1));
        assert_eq!(drain(&mut stack), vec![1, 1, 3, 4, 5]);
    }

    #[test]
    fn test_sort_floats() {
        let mut stack: Stack<f32> = [2.5, -1.0, 0.0, 2.5].into_iter().collect();

        let sorted = stack.sort().expect("floats are sortable");
        assert_eq!(sorted.min(), Some(&-1.0));

        assert_eq!(drain(&mut stack), vec![-1.0, 0.0, 2.5, 2.5]);
    }

    #[test]
    fn test_sort_unsupported() {
        let mut empty: Stack<i32> = Stack::new();
        assert!(empty.sort().is_none());

        let mut chars: Stack<char> = ['c', 'a', 'b'].into_iter().collect();
        assert!(chars.sort().is_none());
        assert_eq!(chars.to_vec(), vec!['c', 'a', 'b']);
    }

    #[test]
    fn test_sorts_random() {
        let mut rng = rand::thread_rng();

        for len in [1, 2, 17, 200] {
            let items: Vec<i32> = (0..len).map(|_| rng.gen_range(-20..20)).collect();
            let mut expected = items.clone();
            expected.sort();

            let mut fast: Stack<i32> = items.iter().copied().collect();
            fast.sort();
            let fast = drain(&mut fast);

            let mut slow: Stack<i32> = items.iter().copied().collect();
            slow.sort_n();
            assert_eq!(slow.min(), expected.first());
            let slow = drain(&mut slow);

            assert!(is_non_decreasing(&fast));
            assert_eq!(fast, expected);
            assert_eq!(slow, expected);
        }
    }
}
