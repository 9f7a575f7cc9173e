use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    /// Values are drawn from `[0, size)` and stored as `i32`.
    #[error("dataset size {size} exceeds the representable value range of i32")]
    SizeOutOfRange { size: usize },
}
