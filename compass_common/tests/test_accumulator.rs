#![allow(unused)]

/// unit tests for the streaming value accumulator
/// run with "cargo test --test test_accumulator -- --nocapture"

use compass_common::accumulator::ValueAccumulator;

fn assert_close (a: f64, b: f64, eps: f64) {
    assert!( (a - b).abs() <= eps, "{} != {} (eps {})", a, b, eps);
}

#[test]
fn test_basic_stats () {
    println!("--- testing basic accumulation");
    let mut acc = ValueAccumulator::new();
    acc.accumulate( &[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);

    assert_eq!( acc.num_values(), 8);
    assert_eq!( acc.min(), 2.0);
    assert_eq!( acc.max(), 9.0);
    assert_close( acc.mean(), 5.0, 1e-12);
    assert_close( acc.var(), 4.0, 1e-12);
    assert_close( acc.stddev(), 2.0, 1e-12);
    assert_close( acc.rms(), (29.0f64).sqrt(), 1e-12);

    println!("mean={} var={} stddev={} rms={}", acc.mean(), acc.var(), acc.stddev(), acc.rms());
}

#[test]
fn test_empty_reports_zero () {
    let acc = ValueAccumulator::new();

    assert_eq!( acc.num_values(), 0);
    assert_eq!( acc.min(), 0.0);
    assert_eq!( acc.max(), 0.0);
    assert_eq!( acc.mean(), 0.0);
    assert_eq!( acc.var(), 0.0);
    assert_eq!( acc.stddev(), 0.0);
    assert_eq!( acc.rms(), 0.0);
}

#[test]
fn test_join_empty_is_noop () {
    println!("--- testing join with empty accumulator");
    let mut acc = ValueAccumulator::new();
    acc.accumulate( &[-3.5, 1.0, 42.0]);

    let n = acc.num_values();
    let (min,max,mean,var) = (acc.min(), acc.max(), acc.mean(), acc.var());

    acc.join( &ValueAccumulator::new());

    assert_eq!( acc.num_values(), n);
    assert_eq!( acc.min(), min);
    assert_eq!( acc.max(), max);
    assert_eq!( acc.mean(), mean);
    assert_eq!( acc.var(), var);
}

#[test]
fn test_join_into_empty () {
    let mut acc = ValueAccumulator::new();
    let mut other = ValueAccumulator::new();
    other.accumulate( &[-7.0, 3.0]);

    acc.join( &other);

    assert_eq!( acc.num_values(), 2);
    assert_eq!( acc.min(), -7.0); // not corrupted by the empty self placeholders
    assert_eq!( acc.max(), 3.0);
}

#[test]
fn test_join_partition_independence () {
    println!("--- testing join over partitions vs direct accumulation");
    let samples: Vec<f64> = (0..100).map( |i| (i as f64) * 0.37 - 12.0).collect();

    let mut direct = ValueAccumulator::new();
    direct.accumulate( &samples);

    // three uneven partitions, joined in different orders
    let (g1, rest) = samples.split_at(13);
    let (g2, g3) = rest.split_at(51);

    let mut a1 = ValueAccumulator::new(); a1.accumulate(g1);
    let mut a2 = ValueAccumulator::new(); a2.accumulate(g2);
    let mut a3 = ValueAccumulator::new(); a3.accumulate(g3);

    let mut joined_fwd = ValueAccumulator::new();
    joined_fwd.join(&a1); joined_fwd.join(&a2); joined_fwd.join(&a3);

    let mut joined_rev = ValueAccumulator::new();
    joined_rev.join(&a3); joined_rev.join(&a2); joined_rev.join(&a1);

    for joined in [&joined_fwd, &joined_rev] {
        assert_eq!( joined.num_values(), direct.num_values());
        assert_eq!( joined.min(), direct.min());
        assert_eq!( joined.max(), direct.max());
        assert_close( joined.mean(), direct.mean(), 1e-9);
        assert_close( joined.var(), direct.var(), 1e-9);
    }
}

#[test]
fn test_reset () {
    let mut acc = ValueAccumulator::new();
    acc.accumulate( &[1.0, 2.0, 3.0]);
    acc.reset();

    assert_eq!( acc.num_values(), 0);
    assert_eq!( acc.mean(), 0.0);
    assert_eq!( acc.max(), 0.0);
}

/// the raw `sum2/n - mean^2` difference can come out slightly negative for
/// near-constant samples with large offsets. The reference implementation fed
/// that straight into sqrt - we deliberately clamp to zero so that var() is
/// never negative and stddev() is never NaN
#[test]
fn test_var_clamped_nonnegative () {
    println!("--- testing variance clamping under cancellation");

    let candidates: [&[f64]; 4] = [
        &[10000000.1, 10000000.1, 10000000.1],
        &[0.1, 0.1, 0.1, 0.1, 0.1, 0.1, 0.1],
        &[1e8, 1e8 + 1.0],
        &[123456789.123, 123456789.123, 123456789.124],
    ];

    for samples in candidates {
        let mut acc = ValueAccumulator::new();
        acc.accumulate( samples);

        println!("samples={:?} var={} stddev={}", samples, acc.var(), acc.stddev());

        assert!( acc.var() >= 0.0);
        assert!( acc.stddev().is_finite());
    }
}
