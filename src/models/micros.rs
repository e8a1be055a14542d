use std::fmt;

pub(crate) const MICROS_PER_UNIT: i64 = 1_000_000;
const MICROS_PER_CENT: i64 = MICROS_PER_UNIT / 100;

/// A monetary amount in millionths of the account currency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Micros(pub i64);

impl Micros {
    pub fn to_currency(self) -> f64 {
        self.0 as f64 / MICROS_PER_UNIT as f64
    }

    /// Whole cents, rounded half away from zero.
    pub fn cents(self) -> i64 {
        let whole = self.0 / MICROS_PER_CENT;
        let rest = self.0 % MICROS_PER_CENT;
        if rest.abs() * 2 >= MICROS_PER_CENT {
            whole + self.0.signum()
        } else {
            whole
        }
    }
}

impl From<i64> for Micros {
    fn from(value: i64) -> Self {
        Micros(value)
    }
}

/// Renders the currency amount with exactly two decimals, no symbol.
impl fmt::Display for Micros {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cents = self.cents();
        let sign = if cents < 0 { "-" } else { "" };
        let abs = cents.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}
