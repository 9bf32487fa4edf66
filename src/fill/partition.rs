use std::ops::Range;

/// Contiguous half-open index range `[start, end)` owned by a single worker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Partition {
    pub worker: usize,
    pub start: usize,
    pub end: usize, // exclusive
}

impl Partition {
    pub fn len(self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(self) -> bool {
        self.start == self.end
    }

    pub fn range(self) -> Range<usize> {
        self.start..self.end
    }
}

/// Split `len` indices across `workers` partitions.
///
/// Every partition has `len / workers` indices except the last, which absorbs the remainder.
/// Returns an empty plan when `workers == 0`; callers treat that as the sequential path.
pub fn plan_partitions(len: usize, workers: usize) -> Vec<Partition> {
    if workers == 0 {
        return Vec::new();
    }
    let part_len = len / workers;
    (0..workers)
        .map(|worker| {
            let start = worker * part_len;
            let end = if worker == workers - 1 {
                len
            } else {
                start + part_len
            };
            Partition { worker, start, end }
        })
        .collect()
}

/// Carve `buf` into disjoint mutable slices following `plan`.
///
/// `plan` must come from [`plan_partitions`] for `buf.len()`.
pub(crate) fn split_by_plan<'a, T>(
    mut buf: &'a mut [T],
    plan: &[Partition],
) -> Vec<(Partition, &'a mut [T])> {
    let mut out = Vec::with_capacity(plan.len());
    for &part in plan {
        let (head, tail) = std::mem::take(&mut buf).split_at_mut(part.len());
        out.push((part, head));
        buf = tail;
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/fill/partition.rs"]
mod tests;
