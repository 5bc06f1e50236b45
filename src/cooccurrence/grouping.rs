//! Contiguity check for order lines

use super::OrderLine;
use crate::error::{Result, SkuPairError};
use std::collections::HashMap;

/// Check that every order id occupies a single run of adjacent lines
///
/// Row numbers in the error are 1-based positions in `lines`; `first_row` is
/// where the order's earlier run started.
pub fn validate_grouping(lines: &[OrderLine]) -> Result<()> {
    let mut run_starts: HashMap<&str, usize> = HashMap::new();
    let mut previous: Option<&str> = None;

    for (position, line) in lines.iter().enumerate() {
        let order_id = line.order_id.as_str();
        if previous == Some(order_id) {
            continue;
        }
        if let Some(&first) = run_starts.get(order_id) {
            return Err(SkuPairError::Grouping {
                order_id: order_id.to_string(),
                first_row: first + 1,
                row: position + 1,
            });
        }
        run_starts.insert(order_id, position);
        previous = Some(order_id);
    }

    Ok(())
}
