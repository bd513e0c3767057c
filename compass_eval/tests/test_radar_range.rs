#![allow(unused)]

/// unit tests for the radar range regression results
/// run with "cargo test --test test_radar_range -- --nocapture"

use std::sync::Arc;
use chrono::{DateTime,TimeDelta,TimeZone,Utc};

use compass_eval::CheckResult;
use compass_eval::detail::EvaluationDetail;
use compass_eval::requirement::Requirement;
use compass_eval::result::{SingleResult, PositionCounts};
use compass_eval::sector::SectorLayer;

fn ts (secs: i64)->DateTime<Utc> {
    Utc.with_ymd_and_hms( 2025, 6, 1, 12, 0, 0).unwrap() + TimeDelta::seconds( secs)
}

fn sector ()->SectorLayer { SectorLayer::new( "DOI", "fir") }

fn range_req ()->Arc<Requirement> {
    Arc::new( Requirement::max_value( "Radar Range", "RNG", "Position", 100000.0))
}

/// details with test range x and reference range 2x + 5
fn range_single (utn: u32, req: &Arc<Requirement>, tst_ranges: &[f64])->Arc<SingleResult> {
    let details: Vec<EvaluationDetail> = tst_ranges.iter().enumerate()
        .map( |(i,&tst)| EvaluationDetail::new( ts(i as i64), tst, Some( 2.0*tst + 5.0), true, true, ""))
        .collect();

    let n = tst_ranges.len() as u32;
    let counts = PositionCounts {
        num_pos: n, num_no_ref: 0, num_pos_inside: n, num_pos_outside: 0,
        num_passed: n, num_failed: 0,
    };
    Arc::new( SingleResult::position_radar_range( format!("utn{}", utn), req.clone(), sector(), utn, counts, details))
}

#[test]
fn test_single_regression_recovery () {
    println!("--- testing single target range regression");
    let req = range_req();

    let tst: Vec<f64> = (1..=20).map( |i| i as f64 * 1852.0).collect();
    let single = range_single( 1, &req, &tst);

    let gain = single.data().range_gain().unwrap();
    let bias = single.data().range_bias().unwrap();
    println!("gain = {} bias = {}", gain, bias);

    assert!( (gain - 2.0).abs() < 1e-6);
    assert!( (bias - 5.0).abs() < 1e-6);

    // scalar result is the mean range error of the contributing updates
    assert!( single.result().is_some());
    assert_eq!( single.accumulator().unwrap().num_values(), 20);
}

#[test]
fn test_joined_regression_over_concatenated_pairs () {
    println!("--- testing sector range regression over two targets");
    let req = range_req();

    let tst: Vec<f64> = (1..=20).map( |i| i as f64 * 1852.0).collect();

    // each target holds half of the pairs
    let a = range_single( 1, &req, &tst[..10]);
    let b = range_single( 2, &req, &tst[10..]);

    let mut joined = a.create_empty_joined( "sector1");
    joined.join( &a);
    joined.join( &b);

    let gain = joined.data().range_gain().unwrap();
    let bias = joined.data().range_bias().unwrap();
    println!("joined gain = {} bias = {}", gain, bias);

    assert!( (gain - 2.0).abs() < 1e-6);
    assert!( (bias - 5.0).abs() < 1e-6);

    assert_eq!( joined.accumulator().unwrap().num_values(), 20);
    assert!( joined.result().is_some());
}

#[test]
fn test_empty_regression_is_unknown () {
    let req = range_req();
    let single = range_single( 1, &req, &[]);

    assert!( single.result().is_none());
    assert!( single.data().range_gain().is_none());
    assert!( single.data().range_bias().is_none());
    assert_eq!( single.check_result(), CheckResult::Unknown);
}

#[test]
fn test_rejoin_preserves_regression () {
    let req = range_req();

    let tst: Vec<f64> = (1..=10).map( |i| i as f64 * 1000.0).collect();
    let a = range_single( 1, &req, &tst[..5]);
    let b = range_single( 2, &req, &tst[5..]);

    let mut joined = a.create_empty_joined( "sector1");
    joined.join( &a);
    joined.join( &b);

    let gain = joined.data().range_gain().unwrap();
    let bias = joined.data().range_bias().unwrap();

    joined.updates_to_use_changes();

    assert_eq!( joined.data().range_gain().unwrap(), gain);
    assert_eq!( joined.data().range_bias().unwrap(), bias);
}
