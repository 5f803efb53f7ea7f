//! Rupiah formatting (`id-ID` grouping: `.` every three digits).

/// Group an integer with `.` separators: `115000` -> `115.000`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push('.');
        }
        result.push(c);
    }
    result
}

/// `Rp 115.000`
pub fn format_price(symbol: &str, value: u64) -> String {
    format!("{} {}", symbol, group_thousands(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1.000");
        assert_eq!(group_thousands(115_000), "115.000");
        assert_eq!(group_thousands(18_750_000), "18.750.000");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price("Rp", 25_000), "Rp 25.000");
        assert_eq!(format_price("IDR", 1_234_567), "IDR 1.234.567");
    }
}
