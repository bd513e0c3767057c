#![allow(unused)]

/// unit tests for the per-target result family
/// run with "cargo test --test test_single -- --nocapture"

use std::sync::Arc;
use chrono::{DateTime,TimeDelta,TimeZone,Utc};

use compass_eval::CheckResult;
use compass_eval::detail::EvaluationDetail;
use compass_eval::requirement::Requirement;
use compass_eval::result::{ResultData, SingleResult, PresentCounts, FalseCounts, CorrectCounts, PositionCounts};
use compass_eval::sector::SectorLayer;

fn ts (secs: i64)->DateTime<Utc> {
    Utc.with_ymd_and_hms( 2025, 6, 1, 12, 0, 0).unwrap() + TimeDelta::seconds( secs)
}

fn detail (secs: i64, value: f64, ref_value: Option<f64>, pos_inside: bool, check_passed: bool)->EvaluationDetail {
    EvaluationDetail::new( ts(secs), value, ref_value, pos_inside, check_passed, "")
}

fn sector ()->SectorLayer { SectorLayer::new( "DOI", "fir") }

#[test]
fn test_mode_a_present () {
    println!("--- testing Mode A presence probability");
    let req = Arc::new( Requirement::min_probability( "Mode A Present", "MA", "Mode A", 0.9));

    let counts = PresentCounts {
        num_updates: 10, num_no_ref_pos: 2, num_pos_inside: 6, num_pos_outside: 2,
        num_no_ref_val: 1, num_present: 4, num_missing: 1,
    };
    let single = SingleResult::mode_a_present( "utn7", req, sector(), 7, counts, Vec::new());

    let p = single.result().unwrap();
    println!("p_present = {}", p);

    assert!( (p - 5.0/6.0).abs() < 1e-12);
    assert_eq!( single.check_result(), CheckResult::Failed); // 0.8333 < 0.9
    assert_eq!( single.num_issues(), 1);
    assert_eq!( single.num_updates(), 6);
}

#[test]
fn test_mode_a_present_unusable () {
    // no updates with comparable codes -> no value, Unknown (never Failed)
    let req = Arc::new( Requirement::min_probability( "Mode A Present", "MA", "Mode A", 0.9));

    let counts = PresentCounts {
        num_updates: 3, num_no_ref_pos: 1, num_pos_inside: 0, num_pos_outside: 2,
        ..Default::default()
    };
    let single = SingleResult::mode_a_present( "utn7", req, sector(), 7, counts, Vec::new());

    assert!( single.result().is_none());
    assert!( !single.result_usable());
    assert!( !single.has_failed());
    assert_eq!( single.check_result(), CheckResult::Unknown);
    assert_eq!( single.check_result().to_string(), "Unknown");
}

#[test]
#[should_panic(expected = "invariant violated")]
fn test_counter_invariant_fatal () {
    let req = Arc::new( Requirement::min_probability( "Mode A Present", "MA", "Mode A", 0.9));

    // 5 - 1 != 2 + 1
    let counts = PresentCounts {
        num_updates: 5, num_no_ref_pos: 1, num_pos_inside: 2, num_pos_outside: 1,
        ..Default::default()
    };
    SingleResult::mode_a_present( "utn7", req, sector(), 7, counts, Vec::new());
}

#[test]
fn test_mode_c_correct () {
    let req = Arc::new( Requirement::min_probability( "Mode C Correct", "MC", "Mode C", 0.7));

    let counts = CorrectCounts {
        num_updates: 8, num_no_ref_pos: 2, num_no_ref_val: 1, num_pos_inside: 5, num_pos_outside: 1,
        num_correct: 3, num_not_correct: 1,
    };
    let single = SingleResult::mode_c_correct( "utn3", req, sector(), 3, counts, Vec::new());

    assert!( (single.result().unwrap() - 0.75).abs() < 1e-12);
    assert_eq!( single.check_result(), CheckResult::Passed);
}

#[test]
fn test_mode_a_false_is_max_probability () {
    // false-code probability has to stay below the threshold
    let req = Arc::new( Requirement::max_probability( "Mode A False", "MAF", "Mode A", 0.2));

    let counts = FalseCounts {
        num_updates: 10, num_no_ref_pos: 0, num_pos_inside: 10, num_pos_outside: 0,
        num_no_ref_val: 2, num_unknown: 1, num_correct: 6, num_false: 1,
    };
    let single = SingleResult::mode_a_false( "utn9", req, sector(), 9, counts, Vec::new());

    let p = single.result().unwrap();
    assert!( (p - 1.0/7.0).abs() < 1e-12);
    assert_eq!( single.check_result(), CheckResult::Passed); // 0.143 <= 0.2
}

#[test]
fn test_position_latency_accumulation () {
    println!("--- testing latency accumulation over details");
    let req = Arc::new( Requirement::max_value( "Position Latency", "LAT", "Position", 2.2));

    // one no-reference update - must not contribute a sample
    let details = vec![
        detail( 0, 1.5, Some(1.0), true, true),
        detail( 1, 99.0, None, true, false),
        detail( 2, 2.5, Some(1.0), true, false),
        detail( 3, 2.0, Some(1.0), true, true),
    ];
    let counts = PositionCounts {
        num_pos: 4, num_no_ref: 1, num_pos_inside: 3, num_pos_outside: 0,
        num_passed: 2, num_failed: 1,
    };
    let single = SingleResult::position_latency( "utn1", req, sector(), 1, counts, details);

    let acc = single.accumulator().unwrap();
    assert_eq!( acc.num_values(), 3);
    assert_eq!( acc.min(), 1.5);
    assert_eq!( acc.max(), 2.5);

    let mean = single.result().unwrap();
    println!("latency mean = {}", mean);
    assert!( (mean - 2.0).abs() < 1e-12);
    assert_eq!( single.check_result(), CheckResult::Passed);

    let period = single.time_period().unwrap();
    assert_eq!( period.begin(), ts(0));
    assert_eq!( period.end(), ts(3));
}

#[test]
#[should_panic(expected = "invariant violated")]
fn test_sample_count_mismatch_fatal () {
    let req = Arc::new( Requirement::max_value( "Position Latency", "LAT", "Position", 2.2));

    // two contributing details but three counted checks
    let details = vec![
        detail( 0, 1.5, Some(1.0), true, true),
        detail( 1, 2.5, Some(1.0), true, false),
    ];
    let counts = PositionCounts {
        num_pos: 2, num_no_ref: 0, num_pos_inside: 2, num_pos_outside: 0,
        num_passed: 2, num_failed: 1,
    };
    SingleResult::position_latency( "utn1", req, sector(), 1, counts, details);
}

#[test]
fn test_distance_rms () {
    let req = Arc::new( Requirement::max_value( "Position RMS", "RMS", "Position", 3.0));

    let details = vec![
        detail( 0, 3.0, Some(0.0), true, true),
        detail( 1, 4.0, Some(0.0), true, false),
    ];
    let counts = PositionCounts {
        num_pos: 2, num_no_ref: 0, num_pos_inside: 2, num_pos_outside: 0,
        num_passed: 1, num_failed: 1,
    };
    let single = SingleResult::position_distance_rms( "utn2", req, sector(), 2, counts, details);

    let rms = single.result().unwrap();
    assert!( (rms - 12.5f64.sqrt()).abs() < 1e-12);
    assert_eq!( single.check_result(), CheckResult::Failed); // 3.54 > 3.0
}

#[test]
fn test_create_empty_joined () {
    let req = Arc::new( Requirement::min_probability( "Mode A Present", "MA", "Mode A", 0.9));

    let counts = PresentCounts {
        num_updates: 2, num_no_ref_pos: 0, num_pos_inside: 2, num_pos_outside: 0,
        num_no_ref_val: 0, num_present: 2, num_missing: 0,
    };
    let single = SingleResult::mode_a_present( "utn7", req, sector(), 7, counts, Vec::new());

    let joined = single.create_empty_joined( "sector1");
    assert_eq!( joined.kind(), single.kind());
    assert_eq!( joined.num_single_results(), 0);
    assert!( joined.result().is_none());
    assert_eq!( joined.check_result(), CheckResult::Unknown);
}

#[test]
fn test_detail_table_rows () {
    let req = Arc::new( Requirement::max_value( "Position Latency", "LAT", "Position", 2.2));

    let details = vec![
        detail( 0, 1.5, Some(1.0), true, true),
        detail( 1, 9.9, None, true, false),
        detail( 2, 2.5, Some(1.0), true, false),
    ];
    let counts = PositionCounts {
        num_pos: 3, num_no_ref: 1, num_pos_inside: 2, num_pos_outside: 0,
        num_passed: 1, num_failed: 1,
    };
    let single = SingleResult::position_latency( "utn1", req, sector(), 1, counts, details);

    let rows = single.detail_table_rows();
    assert_eq!( rows.len(), 3);

    // running check counters: no-ref row does not advance them
    assert_eq!( rows[0][6], serde_json::json!(1)); // #CP after first
    assert_eq!( rows[1][5], serde_json::json!(0)); // #CF unchanged on no-ref
    assert_eq!( rows[2][5], serde_json::json!(1)); // #CF after failed check

    // per-target row shape
    let row = single.target_table_row();
    let headers = single.target_table_headers();
    assert_eq!( row.len(), headers.len());
    assert_eq!( row[0], serde_json::json!(1)); // UTN
    assert_eq!( *row.last().unwrap(), serde_json::json!("Passed"));
}
