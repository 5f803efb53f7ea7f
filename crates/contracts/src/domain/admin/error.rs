use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdminError {
    #[error("Category name cannot be empty")]
    EmptyCategoryName,

    #[error("Category '{0}' already exists")]
    DuplicateCategory(String),

    #[error("Deposit amount must be a positive whole number")]
    InvalidAmount,
}
