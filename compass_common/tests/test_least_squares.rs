#![allow(unused)]

/// unit tests for the SVD based least-squares fit
/// run with "cargo test --test test_least_squares -- --nocapture"

use compass_common::least_squares::ols_fit;

#[test]
fn test_exact_fit () {
    println!("--- testing exact linear fit");
    let x: Vec<f64> = (1..=20).map( |i| i as f64 * 1000.0).collect();
    let y: Vec<f64> = x.iter().map( |&v| 2.0 * v + 5.0).collect();

    let (gain, bias) = ols_fit( &x, &y).unwrap();
    println!("gain={} bias={}", gain, bias);

    assert!( (gain - 2.0).abs() < 1e-6);
    assert!( (bias - 5.0).abs() < 1e-6);
}

#[test]
fn test_noisy_fit () {
    // deterministic +/- eps noise around y = 0.5*x - 3
    let x: Vec<f64> = (0..50).map( |i| i as f64).collect();
    let y: Vec<f64> = x.iter().enumerate()
        .map( |(i,&v)| 0.5 * v - 3.0 + if i % 2 == 0 { 0.01 } else { -0.01 })
        .collect();

    let (gain, bias) = ols_fit( &x, &y).unwrap();

    assert!( (gain - 0.5).abs() < 1e-3);
    assert!( (bias + 3.0).abs() < 2e-2);
}

#[test]
fn test_empty_is_none () {
    assert!( ols_fit( &[], &[]).is_none());
}

#[test]
#[should_panic(expected = "invariant violated")]
fn test_mismatched_lengths_are_fatal () {
    ols_fit( &[1.0, 2.0], &[1.0]);
}
