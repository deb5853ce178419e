mod base;
mod element;
mod error;
mod sort;

pub use base::{Iter, Stack};
pub use element::{Element, ElementKind};
pub use error::StackError;
pub use sort::{sort_n, Primitives};

#[cfg(feature = "arbitrary")]
#[derive(Clone, Debug)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Operation<T> {
    Push { item: T },
    Pop,
    Top,
    Min,
    Append { items: Vec<T> },
    AppendReverse { items: Vec<T> },
    Reverse,
    Sort,
    SortN,
}
