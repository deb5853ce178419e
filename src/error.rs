/// Recoverable failures of stack operations.
///
/// Popping an empty stack is not represented here; it is a caller bug and panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum StackError {
    #[error("{op}: operand stack is absent")]
    NilOperand { op: &'static str },
}
