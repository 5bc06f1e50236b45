//! Lenient parsing of the pair count

use crate::cooccurrence::PairLimit;
use tracing::warn;

/// Pairs written when no total is given or the given one is unusable
pub const DEFAULT_TOTAL: usize = 100;

/// The limit used when nothing was requested
pub fn default_limit() -> PairLimit {
    PairLimit::AtMost(DEFAULT_TOTAL)
}

/// Parse a requested total
///
/// A positive integer becomes an explicit limit. Anything else logs a
/// warning and falls back to the default, which never fails on a short pair
/// list.
pub fn parse_total(raw: &str) -> PairLimit {
    match raw.trim().parse::<i64>() {
        Ok(n) if n > 0 => PairLimit::Exactly(n as usize),
        _ => {
            warn!(
                total = raw,
                "please input a valid number, use default: {}", DEFAULT_TOTAL
            );
            default_limit()
        }
    }
}

/// Same rules as [`parse_total`] for a value already typed as an integer
pub fn total_from_int(n: i64) -> PairLimit {
    if n > 0 {
        PairLimit::Exactly(n as usize)
    } else {
        warn!(total = n, "total must be positive, use default: {}", DEFAULT_TOTAL);
        default_limit()
    }
}
