use serde::{Deserialize, Serialize};

use super::error::AdminError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionStatus {
    Success,
    Pending,
}

impl TransactionStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            TransactionStatus::Success => "Success",
            TransactionStatus::Pending => "Pending",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            TransactionStatus::Success => "status-success",
            TransactionStatus::Pending => "status-pending",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub code: String,
    pub status: TransactionStatus,
    pub amount: u64,
}

/// Fixed demo transactions shown on the dashboard.
pub fn sample_transactions() -> Vec<Transaction> {
    vec![
        Transaction {
            code: "#TRX-001".to_string(),
            status: TransactionStatus::Success,
            amount: 120_000,
        },
        Transaction {
            code: "#TRX-002".to_string(),
            status: TransactionStatus::Pending,
            amount: 65_000,
        },
    ]
}

/// Mock balance topped up from the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet {
    pub balance: u64,
}

impl Wallet {
    /// Parse `amount` (digits, `.`/space thousands separators allowed) and
    /// add it to the balance. Returns the new balance.
    pub fn deposit(&mut self, amount: &str) -> Result<u64, AdminError> {
        let digits: String = amount
            .trim()
            .chars()
            .filter(|c| *c != '.' && *c != ' ')
            .collect();
        let value: u64 = digits.parse().map_err(|_| AdminError::InvalidAmount)?;
        if value == 0 {
            return Err(AdminError::InvalidAmount);
        }
        self.balance = self
            .balance
            .checked_add(value)
            .ok_or(AdminError::InvalidAmount)?;
        Ok(self.balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deposit_accepts_grouped_digits() {
        let mut wallet = Wallet::default();
        assert_eq!(wallet.deposit("50.000"), Ok(50_000));
        assert_eq!(wallet.deposit(" 25000 "), Ok(75_000));
    }

    #[test]
    fn test_deposit_rejects_garbage() {
        let mut wallet = Wallet::default();
        assert_eq!(wallet.deposit(""), Err(AdminError::InvalidAmount));
        assert_eq!(wallet.deposit("0"), Err(AdminError::InvalidAmount));
        assert_eq!(wallet.deposit("-5"), Err(AdminError::InvalidAmount));
        assert_eq!(wallet.deposit("ten"), Err(AdminError::InvalidAmount));
        assert_eq!(wallet.balance, 0);
    }
}
