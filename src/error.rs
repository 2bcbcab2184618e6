use thiserror::Error;

/// Precondition violations, reported before any work is done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("input sequence must not be empty")]
    Empty,
    #[error("input sequence has {len} elements, at most {max} are supported")]
    TooLong { len: usize, max: usize },
}

pub(crate) fn non_empty<T>(seq: &[T]) -> Result<(), InputError> {
    if seq.is_empty() {
        Err(InputError::Empty)
    } else {
        Ok(())
    }
}
