use serde::Serialize;

/// A selectable display currency. Codes are labels only; amounts are never
/// converted between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Currency {
    pub code: &'static str,
    pub name: &'static str,
    pub flag: &'static str,
}

/// Currencies offered on the submission form. The first entry is the default.
pub const CURRENCIES: [Currency; 5] = [
    Currency {
        code: "USD",
        name: "US Dollar",
        flag: "🇺🇸",
    },
    Currency {
        code: "NGN",
        name: "Nigerian Naira",
        flag: "🇳🇬",
    },
    Currency {
        code: "EUR",
        name: "Euro",
        flag: "🇪🇺",
    },
    Currency {
        code: "GBP",
        name: "British Pound",
        flag: "🇬🇧",
    },
    Currency {
        code: "JPY",
        name: "Japanese Yen",
        flag: "🇯🇵",
    },
];

pub fn default_currency() -> &'static Currency {
    &CURRENCIES[0]
}

/// Exact catalog match, case-insensitive.
pub fn find_currency(code: &str) -> Option<&'static Currency> {
    let code = code.trim();
    CURRENCIES.iter().find(|c| c.code.eq_ignore_ascii_case(code))
}

/// Catalog entry for `code`, or the default when the code is unknown.
pub fn currency_or_default(code: &str) -> &'static Currency {
    find_currency(code).unwrap_or_else(default_currency)
}
