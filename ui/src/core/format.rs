//! Formatting helpers for presenting prices and counts.

/// Render an amount of euro cents as `€12.34`.
pub fn format_eur(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{sign}€{}.{:02}", abs / 100, abs % 100)
}

/// `#3` style label for a physical unit.
pub fn format_unit_number(number: usize) -> String {
    format!("#{number}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euro_amounts_keep_two_decimals() {
        assert_eq!(format_eur(5559), "€55.59");
        assert_eq!(format_eur(16677), "€166.77");
        assert_eq!(format_eur(0), "€0.00");
        assert_eq!(format_eur(5), "€0.05");
    }

    #[test]
    fn negative_amounts_are_prefixed() {
        assert_eq!(format_eur(-120), "-€1.20");
    }
}
