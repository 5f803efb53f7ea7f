use serde::{Deserialize, Serialize};

/// Payment methods offered on the (mock) checkout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Qris,
    #[serde(rename = "gopay")]
    GoPay,
    Ovo,
    Dana,
    #[serde(rename = "shopeepay")]
    ShopeePay,
    BankTransfer,
    VirtualAccount,
}

impl PaymentMethod {
    pub fn code(&self) -> &'static str {
        match self {
            PaymentMethod::Qris => "qris",
            PaymentMethod::GoPay => "gopay",
            PaymentMethod::Ovo => "ovo",
            PaymentMethod::Dana => "dana",
            PaymentMethod::ShopeePay => "shopeepay",
            PaymentMethod::BankTransfer => "bank_transfer",
            PaymentMethod::VirtualAccount => "virtual_account",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::Qris => "QRIS",
            PaymentMethod::GoPay => "GoPay",
            PaymentMethod::Ovo => "OVO",
            PaymentMethod::Dana => "DANA",
            PaymentMethod::ShopeePay => "ShopeePay",
            PaymentMethod::BankTransfer => "Bank Transfer",
            PaymentMethod::VirtualAccount => "Virtual Account",
        }
    }

    pub fn all() -> Vec<PaymentMethod> {
        vec![
            PaymentMethod::Qris,
            PaymentMethod::GoPay,
            PaymentMethod::Ovo,
            PaymentMethod::Dana,
            PaymentMethod::ShopeePay,
            PaymentMethod::BankTransfer,
            PaymentMethod::VirtualAccount,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "qris" => Some(PaymentMethod::Qris),
            "gopay" => Some(PaymentMethod::GoPay),
            "ovo" => Some(PaymentMethod::Ovo),
            "dana" => Some(PaymentMethod::Dana),
            "shopeepay" => Some(PaymentMethod::ShopeePay),
            "bank_transfer" => Some(PaymentMethod::BankTransfer),
            "virtual_account" => Some(PaymentMethod::VirtualAccount),
            _ => None,
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
