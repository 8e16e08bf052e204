//! Fixed-point and time units.
//!
//! Monetary amounts and fractions are carried in "ULPS" — unit of least
//! precision — with 10^18 ULPS to the whole unit, matching the decimal
//! convention of the deployed token contracts. A fraction of 100% is
//! therefore `Q18` and one percent is `Q16`.

use alloy_primitives::U256;

/// 10^18 — one whole unit in ULPS. Fractions scale against this.
pub const Q18: U256 = U256::from_limbs([1_000_000_000_000_000_000, 0, 0, 0]);

/// 10^16 — one percent in ULPS (`Q18 / 100`).
pub const Q16: U256 = U256::from_limbs([10_000_000_000_000_000, 0, 0, 0]);

/// Seconds per day. Bylaw durations are stored as whole day counts.
pub const DAY_IN_SECONDS: u64 = 86_400;

/// Convert a whole day count to seconds.
pub fn days_to_seconds(days: u64) -> U256 {
    U256::from(days) * U256::from(DAY_IN_SECONDS)
}
