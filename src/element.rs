use core::cmp::Ordering;
use core::fmt;

/// How a stack element takes part in ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Integer,
    Float,
    Opaque,
}

impl ElementKind {
    /// Integers and floats; the kinds the min-chain and `sort` understand.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ElementKind::Integer | ElementKind::Float)
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, ElementKind::Integer)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::Integer => write!(f, "integer"),
            ElementKind::Float => write!(f, "float"),
            ElementKind::Opaque => write!(f, "opaque"),
        }
    }
}

/// A value that can live on a [`Stack`](crate::Stack).
///
/// Numeric primitives report their kind and a total order. Anything else can opt in
/// with an empty impl; it is then stored and moved like any value but the stack keeps
/// no minimum for it and both sorts leave it alone.
pub trait Element: Clone {
    const KIND: ElementKind = ElementKind::Opaque;

    /// `None` for opaque elements.
    fn compare(&self, _other: &Self) -> Option<Ordering> {
        None
    }
}

macro_rules! integer_element {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                const KIND: ElementKind = ElementKind::Integer;

                fn compare(&self, other: &Self) -> Option<Ordering> {
                    Some(self.cmp(other))
                }
            }
        )*
    };
}

macro_rules! float_element {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                const KIND: ElementKind = ElementKind::Float;

                fn compare(&self, other: &Self) -> Option<Ordering> {
                    Some(self.total_cmp(other))
                }
            }
        )*
    };
}

integer_element!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
float_element!(f32, f64);

impl Element for bool {}
impl Element for char {}
impl Element for String {}
impl Element for &str {}
