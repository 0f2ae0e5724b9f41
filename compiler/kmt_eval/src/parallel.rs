//! Chunked execution of `map`, `reduce` and fused map-reduce.
//!
//! A sequence no longer than the chunk size is processed on the calling
//! thread. A longer one is split into `ceil(len / chunk_size)` contiguous
//! chunks run on the current rayon pool:
//!
//! - `map` writes each chunk into its own disjoint slice of one pre-sized
//!   buffer.
//! - `reduce` and `map_reduce` fold each chunk from the neutral element,
//!   then fold the partial results in chunk order with the same reducer.
//!   The reducer must be associative with that neutral element for the
//!   result to be independent of the chunk size.
//!
//! Chunks are scheduled in batches of [`BATCH_CHUNKS`]; a batch is folded
//! into the running result before the next one starts, so memory stays
//! bounded however many chunks a range has.
//!
//! If chunks fail, the error reported is the one from the lowest-index
//! failing chunk, so the outcome does not depend on scheduling. Chunks after
//! a known failure stop early. Cancellation wins over any other error.

use std::ops::Range;
use std::sync::atomic::{AtomicUsize, Ordering};

use kmt_ir::SourceSpan;
use kmt_types::NumberType;
use rayon::prelude::*;

use crate::cancel::CancellationToken;
use crate::errors::{EvalError, EvalResult, RuntimeErrorKind};
use crate::interpreter::{EvalContext, Lambda};
use crate::value::{ArraySequence, NumberValue, Sequence};

/// Elements processed between two cancellation checks.
const POLL_INTERVAL: usize = 1024;

/// Largest `map` result that is materialised.
const MAX_MATERIALIZED: usize = i32::MAX as usize;

/// Chunks run concurrently before their partial results are folded.
const BATCH_CHUNKS: usize = 256;

pub(crate) fn map(
    ctx: EvalContext<'_>,
    input: &Sequence,
    mapper: &Lambda<'_>,
    element: NumberType,
    span: SourceSpan,
) -> EvalResult<Sequence> {
    let len = input.len();
    let too_large = || EvalError::runtime(RuntimeErrorKind::TooLargeToMaterialize, span);
    if len > MAX_MATERIALIZED {
        return Err(too_large());
    }
    let mut data: Vec<f64> = Vec::new();
    data.try_reserve_exact(len).map_err(|_| too_large())?;
    data.resize(len, 0.0);

    let chunk_size = ctx.chunk_size;
    if len <= chunk_size {
        fill(ctx, &Poll::sequential(ctx.cancel), input, mapper, 0, &mut data)?;
    } else {
        tracing::debug!(
            len,
            chunks = len.div_ceil(chunk_size),
            numeric = mapper.is_numeric(),
            "parallel map"
        );
        let batch_len = chunk_size.saturating_mul(BATCH_CHUNKS);
        for (batch, block) in data.chunks_mut(batch_len).enumerate() {
            ctx.cancel.check()?;
            let first_failure = AtomicUsize::new(usize::MAX);
            let outcomes: Vec<EvalResult<()>> = block
                .par_chunks_mut(chunk_size)
                .enumerate()
                .map(|(n, slice)| {
                    let index = batch * BATCH_CHUNKS + n;
                    let poll = Poll::chunk(ctx.cancel, &first_failure, index);
                    let result = fill(ctx, &poll, input, mapper, index * chunk_size, slice);
                    poll.record(&result);
                    result
                })
                .collect();
            settle(outcomes)?;
        }
    }
    Ok(Sequence::Array(ArraySequence::new(element, data)))
}

pub(crate) fn reduce(
    ctx: EvalContext<'_>,
    input: &Sequence,
    neutral: NumberValue,
    reducer: &Lambda<'_>,
) -> EvalResult<NumberValue> {
    fold_chunks(ctx, input, neutral, reducer, |acc, item| {
        reducer.combine(ctx, acc, item)
    })
}

/// `reduce(map(input, mapper), neutral, reducer)` in one pass.
pub(crate) fn map_reduce(
    ctx: EvalContext<'_>,
    input: &Sequence,
    mapper: &Lambda<'_>,
    neutral: NumberValue,
    reducer: &Lambda<'_>,
) -> EvalResult<NumberValue> {
    fold_chunks(ctx, input, neutral, reducer, |acc, item| {
        let mapped = mapper.apply(ctx, item)?;
        reducer.combine(ctx, acc, mapped)
    })
}

fn fold_chunks<F>(
    ctx: EvalContext<'_>,
    input: &Sequence,
    neutral: NumberValue,
    reducer: &Lambda<'_>,
    step: F,
) -> EvalResult<NumberValue>
where
    F: Fn(NumberValue, NumberValue) -> EvalResult<NumberValue> + Sync,
{
    let len = input.len();
    let chunk_size = ctx.chunk_size;
    if len <= chunk_size {
        return fold_range(&Poll::sequential(ctx.cancel), input, 0..len, neutral, &step);
    }

    let chunks = len.div_ceil(chunk_size);
    tracing::debug!(len, chunks, numeric = reducer.is_numeric(), "parallel reduce");
    let mut acc = neutral;
    for batch in batches(chunks) {
        ctx.cancel.check()?;
        let first_failure = AtomicUsize::new(usize::MAX);
        let partials: Vec<EvalResult<NumberValue>> = batch
            .into_par_iter()
            .map(|index| {
                let start = index * chunk_size;
                let end = start.saturating_add(chunk_size).min(len);
                let poll = Poll::chunk(ctx.cancel, &first_failure, index);
                let result = fold_range(&poll, input, start..end, neutral, &step);
                poll.record(&result);
                result
            })
            .collect();
        for partial in settle(partials)? {
            acc = reducer.combine(ctx, acc, partial)?;
        }
    }
    Ok(acc)
}

/// Chunk indices `0..chunks`, in order, in runs of at most [`BATCH_CHUNKS`].
fn batches(chunks: usize) -> impl Iterator<Item = Range<usize>> {
    (0..chunks)
        .step_by(BATCH_CHUNKS)
        .map(move |start| start..start.saturating_add(BATCH_CHUNKS).min(chunks))
}

fn fill(
    ctx: EvalContext<'_>,
    poll: &Poll<'_>,
    input: &Sequence,
    mapper: &Lambda<'_>,
    offset: usize,
    out: &mut [f64],
) -> EvalResult<()> {
    for (n, slot) in out.iter_mut().enumerate() {
        if n % POLL_INTERVAL == 0 && !poll.keep_going()? {
            break;
        }
        *slot = mapper.apply(ctx, input.get_in_bounds(offset + n))?.as_f64();
    }
    Ok(())
}

fn fold_range<F>(
    poll: &Poll<'_>,
    input: &Sequence,
    range: Range<usize>,
    mut acc: NumberValue,
    step: &F,
) -> EvalResult<NumberValue>
where
    F: Fn(NumberValue, NumberValue) -> EvalResult<NumberValue>,
{
    for (n, index) in range.enumerate() {
        if n % POLL_INTERVAL == 0 && !poll.keep_going()? {
            break;
        }
        acc = step(acc, input.get_in_bounds(index))?;
    }
    Ok(acc)
}

/// Per-chunk view of the shared stop conditions.
struct Poll<'a> {
    cancel: &'a CancellationToken,
    /// Lowest failed chunk index so far, and this chunk's index.
    chunk: Option<(&'a AtomicUsize, usize)>,
}

impl<'a> Poll<'a> {
    fn sequential(cancel: &'a CancellationToken) -> Self {
        Poll {
            cancel,
            chunk: None,
        }
    }

    fn chunk(cancel: &'a CancellationToken, first_failure: &'a AtomicUsize, index: usize) -> Self {
        Poll {
            cancel,
            chunk: Some((first_failure, index)),
        }
    }

    /// `Err(Cancelled)` once cancelled; `Ok(false)` once an earlier chunk
    /// has failed and this chunk's work can no longer affect the outcome.
    fn keep_going(&self) -> EvalResult<bool> {
        self.cancel.check()?;
        Ok(match self.chunk {
            Some((first_failure, index)) => first_failure.load(Ordering::Relaxed) > index,
            None => true,
        })
    }

    fn record<T>(&self, result: &EvalResult<T>) {
        if let (Err(_), Some((first_failure, index))) = (result, self.chunk) {
            tracing::trace!(index, "chunk failed");
            first_failure.fetch_min(index, Ordering::Relaxed);
        }
    }
}

/// Collapse per-chunk outcomes, in chunk order, into one result.
fn settle<T>(outcomes: Vec<EvalResult<T>>) -> EvalResult<Vec<T>> {
    if outcomes
        .iter()
        .any(|outcome| matches!(outcome, Err(EvalError::Cancelled)))
    {
        return Err(EvalError::Cancelled);
    }
    outcomes.into_iter().collect()
}
