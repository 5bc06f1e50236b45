//! Pair extraction and ranking

use super::{CooccurrenceMatrix, SkuIndex};
use crate::error::{Result, SkuPairError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Two distinct SKUs and the number of times they shared an order
///
/// `count` is read from the double-counted matrix, so one shared order
/// contributes 2.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkuPair {
    pub sku1: String,
    pub sku2: String,
    pub count: u64,
}

/// How many ranked pairs to keep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairLimit {
    /// The caller asked for exactly this many; fewer available is an error
    Exactly(usize),
    /// Keep up to this many, fewer is fine
    AtMost(usize),
}

impl PairLimit {
    pub fn count(&self) -> usize {
        match self {
            Self::Exactly(n) | Self::AtMost(n) => *n,
        }
    }

    pub fn is_explicit(&self) -> bool {
        matches!(self, Self::Exactly(_))
    }
}

impl fmt::Display for PairLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exactly(n) => write!(f, "{}", n),
            Self::AtMost(n) => write!(f, "up to {}", n),
        }
    }
}

/// Every co-occurring pair from the upper triangle, in (i, j) order
///
/// Pairs that never shared an order (count 0) are omitted.
pub fn generate_pairs(matrix: &CooccurrenceMatrix, index: &SkuIndex) -> Vec<SkuPair> {
    let ids = index.ids();
    let dimension = matrix.dimension().min(ids.len());
    let mut pairs = Vec::new();

    for i in 0..dimension {
        for j in i + 1..dimension {
            let count = matrix.get(i, j);
            if count == 0 {
                continue;
            }
            pairs.push(SkuPair {
                sku1: ids[i].clone(),
                sku2: ids[j].clone(),
                count,
            });
        }
    }

    pairs
}

/// Rank pairs by descending count and keep the first `limit`
///
/// The sort is stable: pairs with equal counts keep their generation order,
/// i.e. ascending SKU positions.
pub fn rank_pairs(
    matrix: &CooccurrenceMatrix,
    index: &SkuIndex,
    limit: PairLimit,
) -> Result<Vec<SkuPair>> {
    rank(generate_pairs(matrix, index), limit)
}

/// Stable-sort already generated pairs by descending count and truncate
pub fn rank(mut pairs: Vec<SkuPair>, limit: PairLimit) -> Result<Vec<SkuPair>> {
    let keep = resolve_limit(limit, pairs.len())?;

    pairs.sort_by(|a, b| b.count.cmp(&a.count));
    pairs.truncate(keep);
    Ok(pairs)
}

fn resolve_limit(limit: PairLimit, available: usize) -> Result<usize> {
    match limit {
        PairLimit::Exactly(requested) if requested > available => {
            Err(SkuPairError::out_of_range(requested, available))
        }
        PairLimit::Exactly(requested) => Ok(requested),
        PairLimit::AtMost(n) => Ok(n.min(available)),
    }
}
