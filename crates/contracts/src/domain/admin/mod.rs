pub mod categories;
pub mod error;
pub mod staff;
pub mod transactions;

pub use categories::{slugify, CategoryBook, CategoryEntry};
pub use error::AdminError;
pub use staff::{payroll_total, sample_staff, StaffMember};
pub use transactions::{sample_transactions, Transaction, TransactionStatus, Wallet};
