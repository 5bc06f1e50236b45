//! Symmetric co-occurrence counts

use super::{OrderLine, SkuIndex};
use tracing::{trace, warn};

/// Summary of one accumulation pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccumulationStats {
    /// Orders with two or more lines, each counted into the matrix
    pub orders_counted: usize,
    /// Single-line orders, skipped
    pub orders_skipped: usize,
    /// Ordered pairs visited (sum of m² over counted orders of size m)
    pub pairs_visited: u64,
}

/// K×K matrix of co-occurrence counts, stored row-major
///
/// Every ordered pair (a, b) of an order's lines, including a line paired
/// with itself, adds 1 to both (a, b) and (b, a). Each cell of a pair that
/// shares one order therefore gains 2 and the matrix stays symmetric. The
/// diagonal is accumulated but nothing downstream reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CooccurrenceMatrix {
    dimension: usize,
    counts: Vec<u64>,
    stats: AccumulationStats,
}

impl CooccurrenceMatrix {
    pub fn zeroed(dimension: usize) -> Self {
        Self {
            dimension,
            counts: vec![0; dimension * dimension],
            stats: AccumulationStats::default(),
        }
    }

    /// Count every order in `lines` against `index`
    ///
    /// Lines sharing an order id must be adjacent. A line whose SKU is not
    /// in `index` is left out of its order's window.
    pub fn accumulate(lines: &[OrderLine], index: &SkuIndex) -> Self {
        let mut matrix = Self::zeroed(index.len());
        let mut window: Vec<usize> = Vec::new();

        let mut start = 0;
        while start < lines.len() {
            let order_id = &lines[start].order_id;
            let mut end = start + 1;
            while end < lines.len() && lines[end].order_id == *order_id {
                end += 1;
            }

            if end - start == 1 {
                matrix.stats.orders_skipped += 1;
                start = end;
                continue;
            }

            window.clear();
            for line in &lines[start..end] {
                match index.position(&line.sku) {
                    Some(position) => window.push(position),
                    None => warn!(sku = %line.sku, order_id = %order_id, "SKU missing from index"),
                }
            }

            trace!(order_id = %order_id, lines = end - start, "Counting order");
            matrix.count_window(&window);
            matrix.stats.orders_counted += 1;
            start = end;
        }

        matrix
    }

    fn count_window(&mut self, window: &[usize]) {
        let k = self.dimension;
        for &a in window {
            for &b in window {
                self.counts[a * k + b] += 1;
                self.counts[b * k + a] += 1;
            }
        }
        self.stats.pairs_visited += (window.len() * window.len()) as u64;
    }

    /// Count at (`i`, `j`); zero outside the matrix
    pub fn get(&self, i: usize, j: usize) -> u64 {
        if i >= self.dimension || j >= self.dimension {
            return 0;
        }
        self.counts[i * self.dimension + j]
    }

    /// Number of distinct SKUs (`K`)
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn stats(&self) -> AccumulationStats {
        self.stats
    }

    pub fn is_symmetric(&self) -> bool {
        (0..self.dimension)
            .all(|i| (i + 1..self.dimension).all(|j| self.get(i, j) == self.get(j, i)))
    }

    pub fn is_zero(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }
}
