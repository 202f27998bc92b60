//! Concurrency tests for cached annotations.
//!
//! Trees are shared between threads without synchronisation; the only race is
//! the first read of a cached annotation, which must be evaluated once and
//! observed identically by every reader.

#![cfg(feature = "arc")]

use lambars_fingertree::control::ConcurrentMemo;
use lambars_fingertree::persistent::{FingerTree, Measured, Sequence};
use lambars_fingertree::typeclass::Sum;
use rstest::rstest;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

const TRIALS: usize = 25;

/// An element that records how often it has been measured.
#[derive(Debug, Clone)]
struct Counted {
    weight: usize,
    measurements: Arc<AtomicUsize>,
}

struct CountingWeight;

impl Measured<Counted> for CountingWeight {
    type Measure = Sum<usize>;

    fn measure(element: &Counted) -> Sum<usize> {
        element.measurements.fetch_add(1, Ordering::SeqCst);
        Sum::new(element.weight)
    }
}

fn counted_tree(
    length: usize,
    measurements: &Arc<AtomicUsize>,
) -> FingerTree<Counted, CountingWeight> {
    (0..length)
        .map(|weight| Counted {
            weight,
            measurements: Arc::clone(measurements),
        })
        .collect()
}

fn measured_from_threads<T, F>(thread_count: usize, read: F) -> Vec<T>
where
    T: Send,
    F: Fn() -> T + Sync,
{
    let barrier = Barrier::new(thread_count);
    thread::scope(|scope| {
        let handles: Vec<_> = (0..thread_count)
            .map(|_| {
                scope.spawn(|| {
                    barrier.wait();
                    read()
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    })
}

// =============================================================================
// Tree annotations
// =============================================================================

#[rstest]
#[case(2, 10)]
#[case(4, 100)]
#[case(8, 1000)]
#[case(16, 3000)]
fn test_concurrent_measure_evaluates_each_annotation_once(
    #[case] thread_count: usize,
    #[case] length: usize,
) {
    let expected_weight = length * (length - 1) / 2;
    let expected = Sum::new(expected_weight);
    for _ in 0..TRIALS {
        let sequential_calls = Arc::new(AtomicUsize::new(0));
        let sequential = counted_tree(length, &sequential_calls);
        let before = sequential_calls.load(Ordering::SeqCst);
        assert_eq!(sequential.measure(), expected);
        let sequential_cost = sequential_calls.load(Ordering::SeqCst) - before;

        let concurrent_calls = Arc::new(AtomicUsize::new(0));
        let shared = counted_tree(length, &concurrent_calls);
        let before = concurrent_calls.load(Ordering::SeqCst);
        let observed = measured_from_threads(thread_count, || shared.measure());
        let concurrent_cost = concurrent_calls.load(Ordering::SeqCst) - before;

        assert!(observed.iter().all(|measure| *measure == expected));
        assert_eq!(concurrent_cost, sequential_cost);

        // Once published, the root annotation is never recomputed.
        let settled = concurrent_calls.load(Ordering::SeqCst);
        assert_eq!(shared.measure(), expected);
        assert_eq!(concurrent_calls.load(Ordering::SeqCst), settled);
    }
}

#[rstest]
fn test_readers_see_consistent_splits_of_shared_tree() {
    let shared: Sequence<usize> = (0..2000).collect();
    let observed = measured_from_threads(8, || {
        (0..2000)
            .step_by(97)
            .map(|index| shared.split_at(index).1.front().copied())
            .collect::<Vec<_>>()
    });
    let expected: Vec<Option<usize>> = (0..2000).step_by(97).map(Some).collect();
    assert!(observed.iter().all(|fronts| *fronts == expected));
}

#[rstest]
fn test_versions_built_on_other_threads_share_structure() {
    let base: Sequence<usize> = (0..500).collect();
    let versions: Vec<Sequence<usize>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|offset| {
                let base = &base;
                scope.spawn(move || base.push_front(offset).push_back(offset))
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });
    for (offset, version) in versions.iter().enumerate() {
        assert_eq!(version.len(), 502);
        assert_eq!(version.front(), Some(&offset));
        assert_eq!(version.back(), Some(&offset));
    }
    assert_eq!(base.len(), 500);
}

// =============================================================================
// ConcurrentMemo
// =============================================================================

#[rstest]
#[case(2)]
#[case(8)]
#[case(32)]
fn test_memo_runs_evaluation_once_under_race(#[case] thread_count: usize) {
    for trial in 0..TRIALS {
        let evaluations = AtomicUsize::new(0);
        let memo = ConcurrentMemo::new();
        let observed = measured_from_threads(thread_count, || {
            *memo.force_with(|| {
                evaluations.fetch_add(1, Ordering::SeqCst);
                trial * 7
            })
        });
        assert_eq!(evaluations.load(Ordering::SeqCst), 1);
        assert!(observed.iter().all(|value| *value == trial * 7));
        assert_eq!(memo.get(), Some(&(trial * 7)));
    }
}

#[rstest]
fn test_prepublished_memo_never_evaluates() {
    let memo = ConcurrentMemo::with_value(11);
    let observed = measured_from_threads(4, || *memo.force_with(|| unreachable!()));
    assert_eq!(observed, vec![11; 4]);
}
