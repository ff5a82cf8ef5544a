use std::fmt;

use chrono::{DateTime, Utc};
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

/// Number of fractional digits carried by every price and fee
pub const PRICE_SCALE: u32 = 2;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

pub const NOTES: &str = "auto";

/// Column names of the generated file, in the order [`TradeRecord`] serializes its fields
pub const HEADER: [&str; 9] = [
    "symbol",
    "side",
    "entry_time",
    "exit_time",
    "entry_price",
    "exit_price",
    "qty",
    "fees",
    "notes",
];

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Symbol {
    Aapl,
    Msft,
    Tsla,
    Nvda,
    Amzn,
    Goog,
    Meta,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Long,
    Short,
}

/// A UTC instant that serializes with second precision and a literal `Z` suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(DateTime<Utc>);

/// One simulated position. A trade is either fully closed (`exit_time` and `exit_price` both
/// present) or fully open (both absent).
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TradeRecord {
    pub symbol: Symbol,
    pub side: Side,
    pub entry_time: Timestamp,
    pub exit_time: Option<Timestamp>,
    pub entry_price: Decimal,
    pub exit_price: Option<Decimal>,
    pub qty: u32,
    pub fees: Decimal,
    pub notes: &'static str,
}

impl Symbol {
    pub const ALL: [Symbol; 7] = [
        Symbol::Aapl,
        Symbol::Msft,
        Symbol::Tsla,
        Symbol::Nvda,
        Symbol::Amzn,
        Symbol::Goog,
        Symbol::Meta,
    ];
}

impl Distribution<Symbol> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Symbol {
        Symbol::ALL[rng.gen_range(0..Symbol::ALL.len())]
    }
}

impl Distribution<Side> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Side {
        match rng.gen_range(0..2) {
            0 => Side::Long,
            _ => Side::Short,
        }
    }
}

impl Timestamp {
    #[must_use]
    pub fn instant(&self) -> DateTime<Utc> {
        self.0
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(instant: DateTime<Utc>) -> Self {
        Timestamp(instant)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_FORMAT))
    }
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl TradeRecord {
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.exit_time.is_none()
    }
}

/// Converts a whole number of cents into a price at [`PRICE_SCALE`]
#[must_use]
pub fn cents(amount: i64) -> Decimal {
    Decimal::new(amount, PRICE_SCALE)
}
