use super::*;

fn assert_exact_cover(len: usize, workers: usize) {
    let plan = plan_partitions(len, workers);
    assert_eq!(plan.len(), workers);

    let mut next = 0;
    for (i, p) in plan.iter().enumerate() {
        assert_eq!(p.worker, i);
        assert_eq!(p.start, next, "gap or overlap at worker {i} (len={len}, n={workers})");
        assert!(p.end >= p.start);
        next = p.end;
    }
    assert_eq!(next, len);

    let total: usize = plan.iter().map(|p| p.len()).sum();
    assert_eq!(total, len);

    let last = plan.last().unwrap();
    assert_eq!(last.len(), len - (workers - 1) * (len / workers));
}

#[test]
fn partitions_cover_exactly_once() {
    for len in [0usize, 1, 2, 7, 10, 99, 100, 5000, 5001] {
        for workers in 1..=12 {
            assert_exact_cover(len, workers);
        }
    }
}

#[test]
fn remainder_goes_to_last_partition() {
    let plan = plan_partitions(5000, 7);
    assert!(plan[..6].iter().all(|p| p.len() == 714));
    assert_eq!(plan[6].len(), 5000 - 6 * 714);
    assert_eq!(plan[6].range(), 4284..5000);
}

#[test]
fn more_workers_than_items_leaves_leading_partitions_empty() {
    let plan = plan_partitions(3, 5);
    assert!(plan[..4].iter().all(|p| p.is_empty()));
    assert_eq!(plan[4].range(), 0..3);
}

#[test]
fn zero_workers_yields_empty_plan() {
    assert!(plan_partitions(10, 0).is_empty());
}

#[test]
fn split_by_plan_hands_out_matching_slices() {
    let mut buf: Vec<u32> = (0..10).collect();
    let plan = plan_partitions(buf.len(), 3);
    let parts = split_by_plan(&mut buf, &plan);
    let lens: Vec<usize> = parts.iter().map(|(_, s)| s.len()).collect();
    assert_eq!(lens, vec![3, 3, 4]);
    assert_eq!(parts[2].1[0], 6);
}
