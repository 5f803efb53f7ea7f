use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    pub name: String,
    pub role: String,
    pub email: String,
    #[serde(rename = "monthlySalary")]
    pub monthly_salary: u64,
}

impl StaffMember {
    fn new(name: &str, role: &str, email: &str, monthly_salary: u64) -> Self {
        Self {
            name: name.to_string(),
            role: role.to_string(),
            email: email.to_string(),
            monthly_salary,
        }
    }
}

/// Demo roster for the admin users and salary pages.
pub fn sample_staff() -> Vec<StaffMember> {
    vec![
        StaffMember::new("Admin", "Owner", "admin@pixeltopup.id", 0),
        StaffMember::new("Rina Putri", "Customer Support", "rina@pixeltopup.id", 5_500_000),
        StaffMember::new("Bagus Santoso", "Operations", "bagus@pixeltopup.id", 6_250_000),
        StaffMember::new("Dewi Lestari", "Finance", "dewi@pixeltopup.id", 7_000_000),
    ]
}

pub fn payroll_total(staff: &[StaffMember]) -> u64 {
    staff.iter().map(|s| s.monthly_salary).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payroll_total() {
        assert_eq!(payroll_total(&sample_staff()), 18_750_000);
        assert_eq!(payroll_total(&[]), 0);
    }
}
