//! Known currencies
//!
//! Static table offered when picking a currency. Settings may still hold a
//! code that is not listed here.

use std::fmt;

/// A currency the application knows how to label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Currency {
    pub code: &'static str,
    pub symbol: &'static str,
    pub name: &'static str,
}

/// All known currencies, in display order
#[rustfmt::skip]
pub const CURRENCIES: &[Currency] = &[
    Currency { code: "USD", symbol: "$", name: "US Dollar" },
    Currency { code: "EUR", symbol: "€", name: "Euro" },
    Currency { code: "GBP", symbol: "£", name: "British Pound" },
    Currency { code: "JPY", symbol: "¥", name: "Japanese Yen" },
    Currency { code: "AUD", symbol: "A$", name: "Australian Dollar" },
    Currency { code: "CAD", symbol: "C$", name: "Canadian Dollar" },
    Currency { code: "PHP", symbol: "₱", name: "Philippine Peso" },
    Currency { code: "THB", symbol: "฿", name: "Thai Baht" },
    Currency { code: "MYR", symbol: "RM", name: "Malaysian Ringgit" },
    Currency { code: "SGD", symbol: "S$", name: "Singapore Dollar" },
];

impl Currency {
    /// Find a currency by code (case-insensitive)
    pub fn find(code: &str) -> Option<&'static Currency> {
        let code = code.trim();
        CURRENCIES.iter().find(|c| c.code.eq_ignore_ascii_case(code))
    }

    /// All known currencies
    pub fn all() -> &'static [Currency] {
        CURRENCIES
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) {}", self.code, self.symbol, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find() {
        assert_eq!(Currency::find("EUR").unwrap().symbol, "€");
        assert_eq!(Currency::find(" thb ").unwrap().symbol, "฿");
        assert!(Currency::find("XYZ").is_none());
    }

    #[test]
    fn test_table() {
        assert_eq!(Currency::all().len(), 10);
        assert_eq!(Currency::all()[0].code, "USD");
    }

    #[test]
    fn test_display() {
        let gbp = Currency::find("GBP").unwrap();
        assert_eq!(gbp.to_string(), "GBP (£) British Pound");
    }
}
