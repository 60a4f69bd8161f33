//! Money type for representing monetary values.
//!
//! Amounts are stored as integers in the smallest unit of the currency
//! (centimes for CHF, cents for EUR/USD). All arithmetic is integer
//! arithmetic; decimal strings from the commerce API are parsed digit by
//! digit and formatting happens only at display time. No floating point
//! anywhere.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::MoneyError;

/// Currencies the storefront can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    CHF,
    EUR,
    USD,
    GBP,
    JPY,
}

impl Currency {
    /// Get the currency code (e.g., "CHF").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::CHF => "CHF",
            Currency::EUR => "EUR",
            Currency::USD => "USD",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "CHF" => Some(Currency::CHF),
            "EUR" => Some(Currency::EUR),
            "USD" => Some(Currency::USD),
            "GBP" => Some(Currency::GBP),
            "JPY" => Some(Currency::JPY),
            _ => None,
        }
    }

    fn minor_units_per_major(&self) -> i64 {
        10_i64.pow(self.decimal_places())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// The amount is kept in the smallest currency unit (e.g., centimes), which
/// avoids the rounding drift of floating-point accumulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit (e.g., centimes).
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from minor units.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Parse a decimal amount string as sent by the commerce API.
    ///
    /// ```
    /// use ink_commerce::money::{Currency, Money};
    /// let price = Money::parse("12.50", Currency::CHF).unwrap();
    /// assert_eq!(price.amount_cents, 1250);
    /// ```
    ///
    /// Accepts an optional sign, an integer part and up to
    /// `decimal_places()` fraction digits ("12", "12.5" and "12.50" all
    /// parse for CHF; "12.505" does not).
    pub fn parse(amount: &str, currency: Currency) -> Result<Self, MoneyError> {
        let bad = || MoneyError::InvalidAmount(amount.to_string());

        let trimmed = amount.trim();
        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        let (int_part, frac_part) = match digits.split_once('.') {
            Some((i, f)) => (i, f),
            None => (digits, ""),
        };
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(bad());
        }
        let places = currency.decimal_places() as usize;
        if frac_part.len() > places {
            return Err(bad());
        }
        if !int_part.chars().all(|c| c.is_ascii_digit())
            || !frac_part.chars().all(|c| c.is_ascii_digit())
        {
            return Err(bad());
        }

        let int_value: i64 = if int_part.is_empty() {
            0
        } else {
            int_part.parse().map_err(|_| bad())?
        };
        // "5" with two decimal places means 50 minor units, not 5.
        let frac_scaled: i64 = if frac_part.is_empty() {
            0
        } else {
            let parsed: i64 = frac_part.parse().map_err(|_| bad())?;
            parsed * 10_i64.pow((places - frac_part.len()) as u32)
        };

        let cents = int_value
            .checked_mul(currency.minor_units_per_major())
            .and_then(|v| v.checked_add(frac_scaled))
            .ok_or(MoneyError::Overflow)?;

        Ok(Self::new(if negative { -cents } else { cents }, currency))
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_cents < 0
    }

    /// Format the bare amount (e.g., "49.99"), rounding nothing: the minor
    /// units are printed exactly.
    pub fn display_amount(&self) -> String {
        let places = self.currency.decimal_places() as usize;
        if places == 0 {
            return self.amount_cents.to_string();
        }
        let divisor = self.currency.minor_units_per_major() as u64;
        let abs = self.amount_cents.unsigned_abs();
        let sign = if self.amount_cents < 0 { "-" } else { "" };
        format!("{}{}.{:0places$}", sign, abs / divisor, abs % divisor)
    }

    /// Format for display the way the site prints prices: amount followed
    /// by the currency code (e.g., "12.50 CHF").
    pub fn display(&self) -> String {
        format!("{} {}", self.display_amount(), self.currency.code())
    }

    /// Add another amount of the same currency.
    pub fn try_add(&self, other: &Money) -> Result<Money, MoneyError> {
        if self.currency != other.currency {
            return Err(MoneyError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: other.currency.code().to_string(),
            });
        }
        let cents = self
            .amount_cents
            .checked_add(other.amount_cents)
            .ok_or(MoneyError::Overflow)?;
        Ok(Money::new(cents, self.currency))
    }

    /// Subtract another amount of the same currency.
    pub fn try_subtract(&self, other: &Money) -> Result<Money, MoneyError> {
        if self.currency != other.currency {
            return Err(MoneyError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: other.currency.code().to_string(),
            });
        }
        let cents = self
            .amount_cents
            .checked_sub(other.amount_cents)
            .ok_or(MoneyError::Overflow)?;
        Ok(Money::new(cents, self.currency))
    }

    /// Multiply by a scalar (e.g., a line quantity).
    pub fn checked_mul(&self, factor: i64) -> Result<Money, MoneyError> {
        let cents = self
            .amount_cents
            .checked_mul(factor)
            .ok_or(MoneyError::Overflow)?;
        Ok(Money::new(cents, self.currency))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
