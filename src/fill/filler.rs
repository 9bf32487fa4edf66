use std::panic::{self, AssertUnwindSafe};

use anyhow::Context as _;

use rayon::prelude::*;

use crate::{
    fill::{
        config::{FillStrategy, FillThreading},
        partition::{Partition, plan_partitions, split_by_plan},
    },
    foundation::error::{SynthError, SynthResult},
};

type WorkerOutcome = (usize, Result<(), String>);

/// Fills flat buffers by fanning disjoint partitions out to worker threads and joining them.
///
/// With fewer than one worker the fill runs sequentially on the calling thread, in index order.
/// Otherwise the buffer is split by [`plan_partitions`] and every partition is written by its own
/// worker; the call returns only after every worker has finished.
///
/// Failures (an `Err` from the per-index function or a panic) are collected per worker. All
/// workers are joined first, then the lowest-indexed failure is returned as
/// [`SynthError::WorkerFailure`]. Buffer contents are unspecified after a failure.
pub struct PartitionedFiller {
    threading: FillThreading,
    pool: Option<rayon::ThreadPool>,
}

impl std::fmt::Debug for PartitionedFiller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PartitionedFiller")
            .field("threading", &self.threading)
            .field("pooled", &self.pool.is_some())
            .finish()
    }
}

impl PartitionedFiller {
    /// Thread-per-partition filler with `workers` partitions (`< 1` = sequential).
    pub fn new(workers: i32) -> Self {
        Self {
            threading: FillThreading::scoped(workers),
            pool: None,
        }
    }

    pub fn sequential() -> Self {
        Self::new(0)
    }

    /// Build a filler from config. A `Pool` strategy builds its rayon pool here, once.
    pub fn from_threading(threading: &FillThreading) -> SynthResult<Self> {
        threading.validate()?;
        let pool = match threading.strategy {
            FillStrategy::Scoped => None,
            FillStrategy::Pool { threads } => Some(build_thread_pool(threads)?),
        };
        Ok(Self {
            threading: *threading,
            pool,
        })
    }

    pub fn threading(&self) -> &FillThreading {
        &self.threading
    }

    pub fn workers(&self) -> i32 {
        self.threading.workers
    }

    /// Write `buf[i] = f(i)` for every index.
    pub fn fill<T, F>(&self, buf: &mut [T], f: F) -> SynthResult<()>
    where
        T: Send,
        F: Fn(usize) -> T + Sync,
    {
        self.try_fill(buf, |i| Ok(f(i)))
    }

    /// Fallible variant of [`fill`](Self::fill).
    ///
    /// On the sequential path the first error from `f` is returned unchanged and a panic is
    /// reported as a [`SynthError::WorkerFailure`] for worker 0.
    pub fn try_fill<T, F>(&self, buf: &mut [T], f: F) -> SynthResult<()>
    where
        T: Send,
        F: Fn(usize) -> SynthResult<T> + Sync,
    {
        self.run(buf, |part, slice| {
            for (offset, slot) in slice.iter_mut().enumerate() {
                *slot = f(part.start + offset)?;
            }
            Ok(())
        })
    }

    /// Replace every element with `f(element)`, partitioned like [`fill`](Self::fill).
    pub fn map_in_place<T, F>(&self, buf: &mut [T], f: F) -> SynthResult<()>
    where
        T: Copy + Send,
        F: Fn(T) -> T + Sync,
    {
        self.run(buf, |_, slice| {
            for v in slice.iter_mut() {
                *v = f(*v);
            }
            Ok(())
        })
    }

    #[tracing::instrument(skip_all, fields(len = buf.len(), workers = self.threading.workers))]
    fn run<T, W>(&self, buf: &mut [T], work: W) -> SynthResult<()>
    where
        T: Send,
        W: Fn(Partition, &mut [T]) -> SynthResult<()> + Sync,
    {
        self.threading.validate()?;
        let n = self.threading.partition_count();
        if n == 0 {
            let whole = Partition {
                worker: 0,
                start: 0,
                end: buf.len(),
            };
            return match panic::catch_unwind(AssertUnwindSafe(|| work(whole, buf))) {
                Ok(res) => res,
                Err(payload) => Err(SynthError::WorkerFailure {
                    worker: 0,
                    failed: 1,
                    message: panic_message(payload.as_ref()),
                }),
            };
        }

        let plan = plan_partitions(buf.len(), n);
        tracing::debug!(
            partitions = plan.len(),
            part_len = buf.len() / n,
            pooled = self.pool.is_some(),
            "partitioned fill"
        );
        let parts = split_by_plan(buf, &plan);
        let outcomes = match &self.pool {
            None => run_scoped(parts, &work),
            Some(pool) => run_pooled(pool, parts, &work),
        };
        aggregate(outcomes)
    }
}

/// Fill `buf` with `f(i)` using `workers` short-lived threads (`< 1` = sequential).
pub fn fill_partitioned<T, F>(buf: &mut [T], f: F, workers: i32) -> SynthResult<()>
where
    T: Send,
    F: Fn(usize) -> T + Sync,
{
    PartitionedFiller::new(workers).fill(buf, f)
}

fn run_worker<T, W>(work: &W, part: Partition, slice: &mut [T]) -> Result<(), String>
where
    W: Fn(Partition, &mut [T]) -> SynthResult<()>,
{
    tracing::trace!(
        worker = part.worker,
        start = part.start,
        end = part.end,
        "worker start"
    );
    match panic::catch_unwind(AssertUnwindSafe(|| work(part, slice))) {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => Err(e.to_string()),
        Err(payload) => Err(panic_message(payload.as_ref())),
    }
}

fn run_scoped<T, W>(parts: Vec<(Partition, &mut [T])>, work: &W) -> Vec<WorkerOutcome>
where
    T: Send,
    W: Fn(Partition, &mut [T]) -> SynthResult<()> + Sync,
{
    std::thread::scope(|s| {
        let handles: Vec<_> = parts
            .into_iter()
            .map(|(part, slice)| {
                let spawned = std::thread::Builder::new()
                    .name(format!("pixel-fill-{}", part.worker))
                    .spawn_scoped(s, move || run_worker(work, part, slice));
                (part.worker, spawned)
            })
            .collect();

        handles
            .into_iter()
            .map(|(worker, spawned)| {
                let outcome = match spawned {
                    Ok(handle) => handle
                        .join()
                        .unwrap_or_else(|payload| Err(panic_message(payload.as_ref()))),
                    Err(e) => Err(format!("failed to spawn worker thread: {e}")),
                };
                (worker, outcome)
            })
            .collect()
    })
}

fn run_pooled<T, W>(
    pool: &rayon::ThreadPool,
    parts: Vec<(Partition, &mut [T])>,
    work: &W,
) -> Vec<WorkerOutcome>
where
    T: Send,
    W: Fn(Partition, &mut [T]) -> SynthResult<()> + Sync,
{
    pool.install(|| {
        parts
            .into_par_iter()
            .map(|(part, slice)| (part.worker, run_worker(work, part, slice)))
            .collect()
    })
}

fn aggregate(outcomes: Vec<WorkerOutcome>) -> SynthResult<()> {
    let mut failed = 0usize;
    let mut first: Option<(usize, String)> = None;
    for (worker, outcome) in outcomes {
        if let Err(message) = outcome {
            failed += 1;
            if first.as_ref().is_none_or(|(w, _)| worker < *w) {
                first = Some((worker, message));
            }
        }
    }

    match first {
        None => Ok(()),
        Some((worker, message)) => {
            tracing::debug!(worker, failed, %message, "partitioned fill failed");
            Err(SynthError::WorkerFailure {
                worker,
                failed,
                message,
            })
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("worker panicked: {s}")
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("worker panicked: {s}")
    } else {
        "worker panicked".to_string()
    }
}

fn build_thread_pool(threads: Option<usize>) -> SynthResult<rayon::ThreadPool> {
    let mut builder = rayon::ThreadPoolBuilder::new().thread_name(|i| format!("pixel-pool-{i}"));
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    let pool = builder
        .build()
        .context("failed to build rayon thread pool")?;
    Ok(pool)
}

#[cfg(test)]
#[path = "../../tests/unit/fill/filler.rs"]
mod tests;
