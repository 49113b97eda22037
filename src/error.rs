/// A runtime sequence did not have the element count of the fixed-size
/// container it was converted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("shape mismatch: expected {expected} elements, got {actual}")]
pub struct ShapeError {
    pub expected: usize,
    pub actual: usize,
}

/// Why a vector could not be turned into a [`Normal`](crate::Normal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NormalizeError {
    #[error("cannot normalize a vector of zero length")]
    ZeroLength,
    #[error("cannot normalize a vector whose length is not finite")]
    NonFinite,
}

impl ShapeError {
    pub(crate) const fn check(expected: usize, actual: usize) -> Result<(), Self> {
        if expected == actual {
            Ok(())
        } else {
            Err(ShapeError { expected, actual })
        }
    }
}
