use std::fmt;

use serde::{Deserialize, Serialize};

/// Currencies the cash tracker can report in. The conversion table is a
/// closed set baked into the program, not configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    Rub,
    Usd,
    Eur,
}

impl Currency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Rub => "rub",
            Currency::Usd => "usd",
            Currency::Eur => "eur",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "rub" => Some(Currency::Rub),
            "usd" => Some(Currency::Usd),
            "eur" => Some(Currency::Eur),
            _ => None,
        }
    }

    /// Rubles per one unit of this currency.
    pub fn rate(&self) -> f64 {
        match self {
            Currency::Rub => 1.0,
            Currency::Usd => 62.91,
            Currency::Eur => 64.33,
        }
    }

    /// Label appended to amounts in user-facing messages.
    pub fn label(&self) -> &'static str {
        match self {
            Currency::Rub => "руб",
            Currency::Usd => "USD",
            Currency::Eur => "Euro",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCurrency(pub String);

impl fmt::Display for UnknownCurrency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown currency code: {}", self.0)
    }
}

impl std::error::Error for UnknownCurrency {}
