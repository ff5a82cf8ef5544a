//! Deterministic per-row trade synthesis.
//!
//! Every row owns its random stream: [`Synthesizer::synthesize`] seeds a fresh `ChaCha8Rng`
//! with the row index, so a row depends only on its index and the session start. Rows can be
//! produced in any order, or in parallel, and still come out byte-identical.

use std::ops::Range;

use chrono::{DateTime, Duration, TimeZone, Utc};
use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::trade::{cents, Side, Symbol, Timestamp, TradeRecord, NOTES};

/// 2024-01-01T09:30:00Z
const SESSION_START_SECS: i64 = 1_704_101_400;
/// 2024-03-10T06:59:59Z, one second before the US daylight saving switch
const DST_PROBE_SECS: i64 = 1_710_053_999;
const NANOS_PER_SEC: i64 = 1_000_000_000;

/// Every row whose index is a multiple of this is left open
pub const OPEN_TRADE_EVERY: u32 = 17;
/// Every row whose index is a multiple of this enters at `start + index / 2` minutes
pub const CLUSTER_EVERY: u32 = 50;
/// The single row pinned to the daylight saving boundary
pub const DST_PROBE_INDEX: u32 = 123;

pub const MAX_ENTRY_OFFSET_MINUTES: i64 = 1_200;
pub const MAX_HOLD_MINUTES: i64 = 360;
pub const QUANTITIES: [u32; 5] = [1, 2, 3, 5, 10];

const MIN_ENTRY_CENTS: i64 = 1_000;
const MAX_ENTRY_CENTS: i64 = 50_000;
const MOVE_DOWN_PERCENT: i64 = 8;
const MOVE_UP_PERCENT: i64 = 10;
const MIN_EXIT_CENTS: i64 = 1;
const MAX_FEES_CENTS: i64 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Synthesizer {
    start: DateTime<Utc>,
}

impl Default for Synthesizer {
    fn default() -> Self {
        Synthesizer::new(session_start())
    }
}

impl Synthesizer {
    #[must_use]
    pub fn new(start: DateTime<Utc>) -> Self {
        Synthesizer { start }
    }

    #[must_use]
    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Derives the trade for row `index`.
    ///
    /// The draws happen in a fixed order and all of them are taken even when an edge case
    /// overrides the drawn value, so that later fields stay stable.
    #[must_use]
    pub fn synthesize(&self, index: u32) -> TradeRecord {
        let mut rng = ChaCha8Rng::seed_from_u64(u64::from(index));

        let symbol: Symbol = rng.gen();
        let side: Side = rng.gen();

        let mut entry_time =
            self.start + Duration::minutes(rng.gen_range(0..=MAX_ENTRY_OFFSET_MINUTES));
        if index % CLUSTER_EVERY == 0 {
            entry_time = self.start + Duration::minutes(i64::from(index / 2));
            debug!("row {index} clustered at {}", Timestamp::from(entry_time));
        }
        if index == DST_PROBE_INDEX {
            entry_time = dst_probe();
            debug!("row {index} pinned to the DST boundary");
        }
        let open_trade = index % OPEN_TRADE_EVERY == 0;

        let entry_cents = rng.gen_range(MIN_ENTRY_CENTS..=MAX_ENTRY_CENTS);
        let move_cents = rng.gen_range(
            -(entry_cents * MOVE_DOWN_PERCENT / 100)..=entry_cents * MOVE_UP_PERCENT / 100,
        );
        let exit_cents = match side {
            Side::Long => entry_cents + move_cents,
            Side::Short => entry_cents - move_cents,
        }
        .max(MIN_EXIT_CENTS);

        let qty = QUANTITIES[rng.gen_range(0..QUANTITIES.len())];
        let fees_cents = rng.gen_range(0..MAX_FEES_CENTS);
        let exit_time = entry_time + Duration::minutes(rng.gen_range(1..=MAX_HOLD_MINUTES));

        let (exit_time, exit_price) = if open_trade {
            debug!("row {index} left open");
            (None, None)
        } else {
            (Some(Timestamp::from(exit_time)), Some(cents(exit_cents)))
        };

        TradeRecord {
            symbol,
            side,
            entry_time: Timestamp::from(entry_time),
            exit_time,
            entry_price: cents(entry_cents),
            exit_price,
            qty,
            fees: cents(fees_cents),
            notes: NOTES,
        }
    }

    pub fn trades(&self, indices: Range<u32>) -> impl Iterator<Item = TradeRecord> + '_ {
        indices.map(move |index| self.synthesize(index))
    }
}

/// The default session start, 2024-01-01T09:30:00Z
#[must_use]
pub fn session_start() -> DateTime<Utc> {
    Utc.timestamp_nanos(SESSION_START_SECS * NANOS_PER_SEC)
}

#[must_use]
pub fn dst_probe() -> DateTime<Utc> {
    Utc.timestamp_nanos(DST_PROBE_SECS * NANOS_PER_SEC)
}
