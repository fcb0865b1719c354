//! Number formatting for cards and tables (Slovak conventions).

/// Group thousands with a space: `1234567` -> `"1 234 567"`.
pub fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

/// Area with two decimals, a decimal comma and grouped thousands.
pub fn area(value: f64) -> String {
    let value = if value.is_finite() { value.max(0.0) } else { 0.0 };
    let cents = (value * 100.0).round() as u64;
    format!("{},{:02}", thousands(cents / 100), cents % 100)
}

/// Share of `part` in `total` as a percentage with one decimal.
pub fn percent(part: u64, total: u64) -> String {
    if total == 0 {
        return "0.0%".to_string();
    }
    format!("{:.1}%", part as f64 * 100.0 / total as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1_000), "1 000");
        assert_eq!(thousands(1_234_567), "1 234 567");
    }

    #[test]
    fn formats_area() {
        assert_eq!(area(0.0), "0,00");
        assert_eq!(area(1234.5), "1 234,50");
        assert_eq!(area(f64::NAN), "0,00");
    }

    #[test]
    fn formats_percent() {
        assert_eq!(percent(1, 3), "33.3%");
        assert_eq!(percent(0, 0), "0.0%");
    }
}
