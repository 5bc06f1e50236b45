//! The end-to-end batch run

use crate::cooccurrence::{
    generate_pairs, rank, validate_grouping, CooccurrenceMatrix, PairLimit, SkuIndex, SkuPair,
};
use crate::error::Result;
use crate::io::{RowSink, RowSource};
use std::time::Instant;
use tracing::{debug, info};

/// Options the pipeline itself consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineOptions {
    pub limit: PairLimit,
    pub validate_grouping: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            limit: crate::config::default_limit(),
            validate_grouping: false,
        }
    }
}

/// What a finished run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub rows_read: usize,
    pub distinct_skus: usize,
    pub orders_counted: usize,
    pub orders_skipped: usize,
    pub pairs_available: usize,
    pub pairs: Vec<SkuPair>,
}

impl RunSummary {
    pub fn pairs_written(&self) -> usize {
        self.pairs.len()
    }
}

/// Compute the ranked pairs without writing them
pub fn compute<S: RowSource + ?Sized>(source: &mut S, options: PipelineOptions) -> Result<RunSummary> {
    info!(source = %source.describe(), "1. read rows");
    let lines = source.read_lines()?;

    if options.validate_grouping {
        debug!("checking that order rows are contiguous");
        validate_grouping(&lines)?;
    }

    info!("2. build sku index");
    let index = SkuIndex::build(&lines);

    info!(rows = lines.len(), skus = index.len(), "3. count orders");
    let started = Instant::now();
    let matrix = CooccurrenceMatrix::accumulate(&lines, &index);
    let stats = matrix.stats();
    debug!(
        orders_counted = stats.orders_counted,
        orders_skipped = stats.orders_skipped,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "accumulated co-occurrence matrix"
    );

    info!("4. construct sku pairs");
    let candidates = generate_pairs(&matrix, &index);
    let pairs_available = candidates.len();

    info!(pairs = pairs_available, limit = %options.limit, "5. sort pairs");
    let pairs = rank(candidates, options.limit)?;

    Ok(RunSummary {
        rows_read: lines.len(),
        distinct_skus: index.len(),
        orders_counted: stats.orders_counted,
        orders_skipped: stats.orders_skipped,
        pairs_available,
        pairs,
    })
}

/// Read, count, rank and write
///
/// The sink is only called once every earlier step has succeeded, so an
/// error leaves the destination untouched.
pub fn run<S, K>(source: &mut S, sink: &mut K, options: PipelineOptions) -> Result<RunSummary>
where
    S: RowSource + ?Sized,
    K: RowSink + ?Sized,
{
    let summary = compute(source, options)?;

    info!(rows = summary.pairs_written(), destination = %sink.describe(), "6. save pairs");
    sink.write_pairs(&summary.pairs)?;

    info!(
        pairs_written = summary.pairs_written(),
        pairs_available = summary.pairs_available,
        "finished"
    );
    Ok(summary)
}
