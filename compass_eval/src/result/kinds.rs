/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */
#![allow(unused)]

use serde::{Serialize,Deserialize};
use serde_json::{json,Value as JsonValue};
use strum::Display;

use compass_common::{accumulator::ValueAccumulator, least_squares::ols_fit, macros::invariant};

use crate::detail::EvaluationDetail;

/// requirement kind tag of the result families
#[derive(Serialize,Deserialize,Debug,Clone,Copy,PartialEq,Eq,Hash,Display)]
pub enum ResultKind {
    ModeAPresent,
    ModeAFalse,
    ModeCCorrect,
    PositionAcross,
    PositionLatency,
    PositionDistanceRms,
    PositionRadarRange,
    Speed,
    TrackAngle,
}

fn round_to (v: f64, digits: i32)->f64 {
    let f = 10f64.powi( digits);
    (v * f).round() / f
}

/*
 * per-kind counter sets. All counters are pre-classified by the upstream
 * comparison step - results only validate and sum them.
 */

/// counters for Mode A code presence
#[derive(Serialize,Deserialize,Debug,Clone,Copy,Default,PartialEq)]
pub struct PresentCounts {
    pub num_updates: u32,
    pub num_no_ref_pos: u32,
    pub num_pos_inside: u32,
    pub num_pos_outside: u32,
    pub num_no_ref_val: u32, // inside, but no reference code to compare against
    pub num_present: u32,
    pub num_missing: u32,
}

impl PresentCounts {
    fn check (&self) {
        invariant!( self.num_no_ref_pos <= self.num_updates,
                    "no-reference count {} exceeds update count {}", self.num_no_ref_pos, self.num_updates);
        invariant!( self.num_updates - self.num_no_ref_pos == self.num_pos_inside + self.num_pos_outside,
                    "update counts inconsistent: {} - {} != {} + {}",
                    self.num_updates, self.num_no_ref_pos, self.num_pos_inside, self.num_pos_outside);
        invariant!( self.num_pos_inside == self.num_no_ref_val + self.num_present + self.num_missing,
                    "inside counts inconsistent: {} != {} + {} + {}",
                    self.num_pos_inside, self.num_no_ref_val, self.num_present, self.num_missing);
    }

    fn add (&mut self, o: &PresentCounts) {
        self.num_updates     += o.num_updates;
        self.num_no_ref_pos  += o.num_no_ref_pos;
        self.num_pos_inside  += o.num_pos_inside;
        self.num_pos_outside += o.num_pos_outside;
        self.num_no_ref_val  += o.num_no_ref_val;
        self.num_present     += o.num_present;
        self.num_missing     += o.num_missing;
    }

    fn result (&self)->Option<f64> {
        let total = self.num_no_ref_val + self.num_present + self.num_missing;
        if total == 0 { return None }

        Some( (self.num_no_ref_val + self.num_present) as f64 / total as f64)
    }
}

/// counters for Mode A code false classification
#[derive(Serialize,Deserialize,Debug,Clone,Copy,Default,PartialEq)]
pub struct FalseCounts {
    pub num_updates: u32,
    pub num_no_ref_pos: u32,
    pub num_pos_inside: u32,
    pub num_pos_outside: u32,
    pub num_no_ref_val: u32,
    pub num_unknown: u32, // reference code present but not comparable
    pub num_correct: u32,
    pub num_false: u32,
}

impl FalseCounts {
    fn check (&self) {
        invariant!( self.num_no_ref_pos <= self.num_updates,
                    "no-reference count {} exceeds update count {}", self.num_no_ref_pos, self.num_updates);
        invariant!( self.num_updates - self.num_no_ref_pos == self.num_pos_inside + self.num_pos_outside,
                    "update counts inconsistent: {} - {} != {} + {}",
                    self.num_updates, self.num_no_ref_pos, self.num_pos_inside, self.num_pos_outside);
        invariant!( self.num_pos_inside == self.num_no_ref_val + self.num_unknown + self.num_correct + self.num_false,
                    "inside counts inconsistent: {} != {} + {} + {} + {}",
                    self.num_pos_inside, self.num_no_ref_val, self.num_unknown, self.num_correct, self.num_false);
    }

    fn add (&mut self, o: &FalseCounts) {
        self.num_updates     += o.num_updates;
        self.num_no_ref_pos  += o.num_no_ref_pos;
        self.num_pos_inside  += o.num_pos_inside;
        self.num_pos_outside += o.num_pos_outside;
        self.num_no_ref_val  += o.num_no_ref_val;
        self.num_unknown     += o.num_unknown;
        self.num_correct     += o.num_correct;
        self.num_false       += o.num_false;
    }

    fn result (&self)->Option<f64> {
        let total = self.num_correct + self.num_false;
        if total == 0 { return None }

        Some( self.num_false as f64 / total as f64)
    }
}

/// counters for Mode C code correctness
#[derive(Serialize,Deserialize,Debug,Clone,Copy,Default,PartialEq)]
pub struct CorrectCounts {
    pub num_updates: u32,
    pub num_no_ref_pos: u32,
    pub num_no_ref_val: u32,
    pub num_pos_inside: u32,
    pub num_pos_outside: u32,
    pub num_correct: u32,
    pub num_not_correct: u32,
}

impl CorrectCounts {
    fn check (&self) {
        invariant!( self.num_no_ref_pos <= self.num_updates,
                    "no-reference count {} exceeds update count {}", self.num_no_ref_pos, self.num_updates);
        invariant!( self.num_updates - self.num_no_ref_pos == self.num_pos_inside + self.num_pos_outside,
                    "update counts inconsistent: {} - {} != {} + {}",
                    self.num_updates, self.num_no_ref_pos, self.num_pos_inside, self.num_pos_outside);
        invariant!( self.num_pos_inside == self.num_no_ref_val + self.num_correct + self.num_not_correct,
                    "inside counts inconsistent: {} != {} + {} + {}",
                    self.num_pos_inside, self.num_no_ref_val, self.num_correct, self.num_not_correct);
    }

    fn add (&mut self, o: &CorrectCounts) {
        self.num_updates     += o.num_updates;
        self.num_no_ref_pos  += o.num_no_ref_pos;
        self.num_no_ref_val  += o.num_no_ref_val;
        self.num_pos_inside  += o.num_pos_inside;
        self.num_pos_outside += o.num_pos_outside;
        self.num_correct     += o.num_correct;
        self.num_not_correct += o.num_not_correct;
    }

    fn result (&self)->Option<f64> {
        let total = self.num_correct + self.num_not_correct;
        if total == 0 { return None }

        Some( self.num_correct as f64 / total as f64)
    }
}

/// counters for the position result family (across, latency, distance RMS,
/// radar range)
#[derive(Serialize,Deserialize,Debug,Clone,Copy,Default,PartialEq)]
pub struct PositionCounts {
    pub num_pos: u32,
    pub num_no_ref: u32,
    pub num_pos_inside: u32,
    pub num_pos_outside: u32,
    pub num_passed: u32,
    pub num_failed: u32,
}

impl PositionCounts {
    fn check (&self) {
        invariant!( self.num_no_ref <= self.num_pos,
                    "no-reference count {} exceeds update count {}", self.num_no_ref, self.num_pos);
        invariant!( self.num_pos - self.num_no_ref == self.num_pos_inside + self.num_pos_outside,
                    "update counts inconsistent: {} - {} != {} + {}",
                    self.num_pos, self.num_no_ref, self.num_pos_inside, self.num_pos_outside);
    }

    fn add (&mut self, o: &PositionCounts) {
        self.num_pos         += o.num_pos;
        self.num_no_ref      += o.num_no_ref;
        self.num_pos_inside  += o.num_pos_inside;
        self.num_pos_outside += o.num_pos_outside;
        self.num_passed      += o.num_passed;
        self.num_failed      += o.num_failed;
    }

    fn prob (&self)->Option<f64> {
        let total = self.num_passed + self.num_failed;
        if total == 0 { return None }

        Some( self.num_passed as f64 / total as f64)
    }
}

/// counters for the speed / track angle result family (position family plus a
/// no-test-data count)
#[derive(Serialize,Deserialize,Debug,Clone,Copy,Default,PartialEq)]
pub struct SpeedCounts {
    pub num_pos: u32,
    pub num_no_ref: u32,
    pub num_pos_inside: u32,
    pub num_pos_outside: u32,
    pub num_no_tst_value: u32,
    pub num_passed: u32,
    pub num_failed: u32,
}

impl SpeedCounts {
    fn check (&self) {
        invariant!( self.num_no_ref <= self.num_pos,
                    "no-reference count {} exceeds update count {}", self.num_no_ref, self.num_pos);
        invariant!( self.num_pos - self.num_no_ref == self.num_pos_inside + self.num_pos_outside,
                    "update counts inconsistent: {} - {} != {} + {}",
                    self.num_pos, self.num_no_ref, self.num_pos_inside, self.num_pos_outside);
    }

    fn add (&mut self, o: &SpeedCounts) {
        self.num_pos          += o.num_pos;
        self.num_no_ref       += o.num_no_ref;
        self.num_pos_inside   += o.num_pos_inside;
        self.num_pos_outside  += o.num_pos_outside;
        self.num_no_tst_value += o.num_no_tst_value;
        self.num_passed       += o.num_passed;
        self.num_failed       += o.num_failed;
    }

    fn prob (&self)->Option<f64> {
        let total = self.num_passed + self.num_failed;
        if total == 0 { return None }

        Some( self.num_passed as f64 / total as f64)
    }
}

/// requirement-kind specific result payload: the counter set plus, for the
/// continuous valued kinds, the owned sample accumulator (and the raw range
/// pairs feeding the radar range regression).
///
/// This tagged variant replaces a virtual result class hierarchy - merge-driving
/// code works on [`ResultData`] without switching over requirement kinds.
#[derive(Debug,Clone)]
pub enum ResultData {
    ModeAPresent { counts: PresentCounts },
    ModeAFalse { counts: FalseCounts },
    ModeCCorrect { counts: CorrectCounts },
    PositionAcross { counts: PositionCounts, acc: ValueAccumulator },
    PositionLatency { counts: PositionCounts, acc: ValueAccumulator },
    PositionDistanceRms { counts: PositionCounts, acc: ValueAccumulator },
    PositionRadarRange { counts: PositionCounts, acc: ValueAccumulator,
                         ranges_tst: Vec<f64>, ranges_ref: Vec<f64>,
                         range_gain: Option<f64>, range_bias: Option<f64> },
    Speed { counts: SpeedCounts, acc: ValueAccumulator },
    TrackAngle { counts: SpeedCounts, acc: ValueAccumulator },
}

impl ResultData {
    pub fn kind (&self)->ResultKind {
        match self {
            ResultData::ModeAPresent {..} => ResultKind::ModeAPresent,
            ResultData::ModeAFalse {..} => ResultKind::ModeAFalse,
            ResultData::ModeCCorrect {..} => ResultKind::ModeCCorrect,
            ResultData::PositionAcross {..} => ResultKind::PositionAcross,
            ResultData::PositionLatency {..} => ResultKind::PositionLatency,
            ResultData::PositionDistanceRms {..} => ResultKind::PositionDistanceRms,
            ResultData::PositionRadarRange {..} => ResultKind::PositionRadarRange,
            ResultData::Speed {..} => ResultKind::Speed,
            ResultData::TrackAngle {..} => ResultKind::TrackAngle,
        }
    }

    /// fresh payload of the same kind - the hook behind createEmptyJoined
    pub fn empty_like (&self)->ResultData {
        match self {
            ResultData::ModeAPresent {..} => ResultData::ModeAPresent { counts: PresentCounts::default() },
            ResultData::ModeAFalse {..} => ResultData::ModeAFalse { counts: FalseCounts::default() },
            ResultData::ModeCCorrect {..} => ResultData::ModeCCorrect { counts: CorrectCounts::default() },
            ResultData::PositionAcross {..} =>
                ResultData::PositionAcross { counts: PositionCounts::default(), acc: ValueAccumulator::new() },
            ResultData::PositionLatency {..} =>
                ResultData::PositionLatency { counts: PositionCounts::default(), acc: ValueAccumulator::new() },
            ResultData::PositionDistanceRms {..} =>
                ResultData::PositionDistanceRms { counts: PositionCounts::default(), acc: ValueAccumulator::new() },
            ResultData::PositionRadarRange {..} =>
                ResultData::PositionRadarRange { counts: PositionCounts::default(), acc: ValueAccumulator::new(),
                                                 ranges_tst: Vec::new(), ranges_ref: Vec::new(),
                                                 range_gain: None, range_bias: None },
            ResultData::Speed {..} => ResultData::Speed { counts: SpeedCounts::default(), acc: ValueAccumulator::new() },
            ResultData::TrackAngle {..} => ResultData::TrackAngle { counts: SpeedCounts::default(), acc: ValueAccumulator::new() },
        }
    }

    /// fail fast on counter inconsistencies - they mean the upstream
    /// classification is broken
    pub fn check_invariants (&self) {
        match self {
            ResultData::ModeAPresent { counts } => counts.check(),
            ResultData::ModeAFalse { counts } => counts.check(),
            ResultData::ModeCCorrect { counts } => counts.check(),
            ResultData::PositionAcross { counts, .. }
            | ResultData::PositionLatency { counts, .. }
            | ResultData::PositionDistanceRms { counts, .. }
            | ResultData::PositionRadarRange { counts, .. } => counts.check(),
            ResultData::Speed { counts, .. } | ResultData::TrackAngle { counts, .. } => counts.check(),
        }
    }

    /// the continuous samples this kind extracts from a detail list, in detail
    /// order (empty for the discrete code kinds)
    pub fn detail_samples (&self, details: &[EvaluationDetail])->Vec<f64> {
        match self {
            ResultData::ModeAPresent {..} | ResultData::ModeAFalse {..} | ResultData::ModeCCorrect {..} => Vec::new(),

            // range error of each contributing update
            ResultData::PositionRadarRange {..} => {
                details.iter().filter( |d| d.contributes())
                    .filter_map( |d| d.ref_value.map( |r| d.value - r))
                    .collect()
            }

            _ => details.iter().filter( |d| d.contributes()).map( |d| d.value).collect()
        }
    }

    /// single-result side: feed the contributing detail values into the owned
    /// accumulator, in detail-list order (order matters for floating point
    /// reproducibility). Only called once, at result construction
    pub(crate) fn accumulate_details (&mut self, details: &[EvaluationDetail]) {
        let samples = self.detail_samples( details);

        match self {
            ResultData::ModeAPresent {..} | ResultData::ModeAFalse {..} | ResultData::ModeCCorrect {..} => {}

            ResultData::PositionAcross { counts, acc }
            | ResultData::PositionLatency { counts, acc }
            | ResultData::PositionDistanceRms { counts, acc } => {
                invariant!( samples.len() == (counts.num_passed + counts.num_failed) as usize,
                            "sample count {} does not match check counts {} + {}",
                            samples.len(), counts.num_passed, counts.num_failed);
                acc.accumulate( &samples);
            }

            ResultData::PositionRadarRange { counts, acc, ranges_tst, ranges_ref, .. } => {
                invariant!( samples.len() == (counts.num_passed + counts.num_failed) as usize,
                            "sample count {} does not match check counts {} + {}",
                            samples.len(), counts.num_passed, counts.num_failed);

                for d in details.iter().filter( |d| d.contributes()) {
                    if let Some(ref_range) = d.ref_value {
                        ranges_tst.push( d.value);
                        ranges_ref.push( ref_range);
                    }
                }

                acc.accumulate( &samples);
            }

            ResultData::Speed { counts, acc } | ResultData::TrackAngle { counts, acc } => {
                invariant!( samples.len() == (counts.num_passed + counts.num_failed) as usize,
                            "sample count {} does not match check counts {} + {}",
                            samples.len(), counts.num_passed, counts.num_failed);
                acc.accumulate( &samples);
            }
        }
    }

    /// recompute the derived scalar from the current counter/accumulator state.
    /// None means the result has no usable value (zero denominator / no samples).
    /// The radar range kind also refreshes its regression gain/bias here, over
    /// its current (possibly pooled) range pair lists
    pub(crate) fn compute_result (&mut self)->Option<f64> {
        match self {
            ResultData::ModeAPresent { counts } => counts.result(),
            ResultData::ModeAFalse { counts } => counts.result(),
            ResultData::ModeCCorrect { counts } => counts.result(),

            ResultData::PositionAcross { counts, .. } => counts.prob(),
            ResultData::Speed { counts, .. } | ResultData::TrackAngle { counts, .. } => counts.prob(),

            ResultData::PositionLatency { acc, .. } => {
                if acc.num_values() == 0 { None } else { Some( acc.mean()) }
            }
            ResultData::PositionDistanceRms { acc, .. } => {
                if acc.num_values() == 0 { None } else { Some( acc.rms()) }
            }

            ResultData::PositionRadarRange { acc, ranges_tst, ranges_ref, range_gain, range_bias, .. } => {
                *range_gain = None;
                *range_bias = None;

                if acc.num_values() == 0 { return None }

                invariant!( acc.num_values() == ranges_ref.len() && ranges_ref.len() == ranges_tst.len(),
                            "range pair count {} does not match accumulated sample count {}",
                            ranges_ref.len(), acc.num_values());

                if let Some((gain,bias)) = ols_fit( ranges_tst, ranges_ref) {
                    *range_gain = Some( gain);
                    *range_bias = Some( bias);
                }

                Some( acc.mean())
            }
        }
    }

    /// merge another payload of the same kind into self (counter sums,
    /// accumulator join, range pair concatenation). Kind mismatch is fatal
    pub(crate) fn join (&mut self, other: &ResultData) {
        match (self, other) {
            (ResultData::ModeAPresent { counts }, ResultData::ModeAPresent { counts: o }) => counts.add( o),
            (ResultData::ModeAFalse { counts }, ResultData::ModeAFalse { counts: o }) => counts.add( o),
            (ResultData::ModeCCorrect { counts }, ResultData::ModeCCorrect { counts: o }) => counts.add( o),

            (ResultData::PositionAcross { counts, acc }, ResultData::PositionAcross { counts: o, acc: oa })
            | (ResultData::PositionLatency { counts, acc }, ResultData::PositionLatency { counts: o, acc: oa })
            | (ResultData::PositionDistanceRms { counts, acc }, ResultData::PositionDistanceRms { counts: o, acc: oa }) => {
                counts.add( o);
                acc.join( oa);
            }

            (ResultData::PositionRadarRange { counts, acc, ranges_tst, ranges_ref, .. },
             ResultData::PositionRadarRange { counts: o, acc: oa, ranges_tst: o_tst, ranges_ref: o_ref, .. }) => {
                counts.add( o);
                acc.join( oa);
                ranges_tst.extend_from_slice( o_tst);
                ranges_ref.extend_from_slice( o_ref);
            }

            (ResultData::Speed { counts, acc }, ResultData::Speed { counts: o, acc: oa })
            | (ResultData::TrackAngle { counts, acc }, ResultData::TrackAngle { counts: o, acc: oa }) => {
                counts.add( o);
                acc.join( oa);
            }

            (s, o) => invariant!( false, "cannot join {} result data into {}", o.kind(), s.kind()),
        }
    }

    /// reset to the empty state of the same kind
    pub(crate) fn reset (&mut self) {
        *self = self.empty_like();
    }

    /// issues are the per-kind failure count (failed checks, missing or false codes)
    pub fn num_issues (&self)->u32 {
        match self {
            ResultData::ModeAPresent { counts } => counts.num_missing,
            ResultData::ModeAFalse { counts } => counts.num_false,
            ResultData::ModeCCorrect { counts } => counts.num_not_correct,
            ResultData::PositionAcross { counts, .. }
            | ResultData::PositionLatency { counts, .. }
            | ResultData::PositionDistanceRms { counts, .. }
            | ResultData::PositionRadarRange { counts, .. } => counts.num_failed,
            ResultData::Speed { counts, .. } | ResultData::TrackAngle { counts, .. } => counts.num_failed,
        }
    }

    /// the update count entering the result value denominator, as reported in
    /// overview tables
    pub fn num_updates (&self)->u32 {
        match self {
            ResultData::ModeAPresent { counts } => counts.num_no_ref_val + counts.num_present + counts.num_missing,
            ResultData::ModeAFalse { counts } => counts.num_correct + counts.num_false,
            ResultData::ModeCCorrect { counts } => counts.num_correct + counts.num_not_correct,
            ResultData::PositionAcross { counts, .. }
            | ResultData::PositionLatency { counts, .. }
            | ResultData::PositionDistanceRms { counts, .. }
            | ResultData::PositionRadarRange { counts, .. } => counts.num_passed + counts.num_failed,
            ResultData::Speed { counts, .. } | ResultData::TrackAngle { counts, .. } => counts.num_passed + counts.num_failed,
        }
    }

    pub fn accumulator (&self)->Option<&ValueAccumulator> {
        match self {
            ResultData::ModeAPresent {..} | ResultData::ModeAFalse {..} | ResultData::ModeCCorrect {..} => None,
            ResultData::PositionAcross { acc, .. }
            | ResultData::PositionLatency { acc, .. }
            | ResultData::PositionDistanceRms { acc, .. }
            | ResultData::PositionRadarRange { acc, .. } => Some( acc),
            ResultData::Speed { acc, .. } | ResultData::TrackAngle { acc, .. } => Some( acc),
        }
    }

    /// metric name used as header line of raw sample value exports, None for
    /// the discrete code kinds
    pub fn values_metric_name (&self)->Option<&'static str> {
        match self {
            ResultData::ModeAPresent {..} | ResultData::ModeAFalse {..} | ResultData::ModeCCorrect {..} => None,
            ResultData::PositionAcross {..} => Some("distance"),
            ResultData::PositionLatency {..} => Some("latency"),
            ResultData::PositionDistanceRms {..} => Some("distance"),
            ResultData::PositionRadarRange {..} => Some("distance"),
            ResultData::Speed {..} => Some("speed"),
            ResultData::TrackAngle {..} => Some("track angle"),
        }
    }

    pub fn range_gain (&self)->Option<f64> {
        if let ResultData::PositionRadarRange { range_gain, .. } = self { *range_gain } else { None }
    }

    pub fn range_bias (&self)->Option<f64> {
        if let ResultData::PositionRadarRange { range_bias, .. } = self { *range_bias } else { None }
    }

    //--- report table cells

    pub fn column_headers (&self)->Vec<&'static str> {
        match self {
            ResultData::ModeAPresent {..} =>
                vec!["#Up", "#NoRefPos", "#PosInside", "#PosOutside", "#NoRefId", "#Present", "#Missing"],
            ResultData::ModeAFalse {..} =>
                vec!["#Up", "#NoRefPos", "#PosInside", "#PosOutside", "#NoRefId", "#Unknown", "#Correct", "#False"],
            ResultData::ModeCCorrect {..} =>
                vec!["#Up", "#NoRefPos", "#NoRefC", "#PosInside", "#PosOutside", "#CMC", "#NCMC"],
            ResultData::PositionAcross {..} | ResultData::PositionLatency {..} | ResultData::PositionDistanceRms {..} =>
                vec!["#Pos", "#NoRef", "#PosInside", "#PosOutside", "DMin", "DMax", "DAvg", "DSDev", "#CF", "#CP"],
            ResultData::PositionRadarRange {..} =>
                vec!["#Pos", "#NoRef", "#PosInside", "#PosOutside", "DMin", "DMax", "DAvg", "DSDev", "Bias", "Gain", "#CF", "#CP"],
            ResultData::Speed {..} | ResultData::TrackAngle {..} =>
                vec!["#Pos", "#NoRef", "#PosInside", "#PosOutside", "#NoTst", "DMin", "DMax", "DAvg", "DSDev", "#CF", "#CP"],
        }
    }

    pub fn column_values (&self)->Vec<JsonValue> {
        match self {
            ResultData::ModeAPresent { counts } =>
                vec![ json!(counts.num_updates), json!(counts.num_no_ref_pos),
                      json!(counts.num_pos_inside), json!(counts.num_pos_outside),
                      json!(counts.num_no_ref_val), json!(counts.num_present), json!(counts.num_missing) ],

            ResultData::ModeAFalse { counts } =>
                vec![ json!(counts.num_updates), json!(counts.num_no_ref_pos),
                      json!(counts.num_pos_inside), json!(counts.num_pos_outside),
                      json!(counts.num_no_ref_val), json!(counts.num_unknown),
                      json!(counts.num_correct), json!(counts.num_false) ],

            ResultData::ModeCCorrect { counts } =>
                vec![ json!(counts.num_updates), json!(counts.num_no_ref_pos), json!(counts.num_no_ref_val),
                      json!(counts.num_pos_inside), json!(counts.num_pos_outside),
                      json!(counts.num_correct), json!(counts.num_not_correct) ],

            ResultData::PositionAcross { counts, acc }
            | ResultData::PositionLatency { counts, acc }
            | ResultData::PositionDistanceRms { counts, acc } =>
                vec![ json!(counts.num_pos), json!(counts.num_no_ref),
                      json!(counts.num_pos_inside), json!(counts.num_pos_outside),
                      json!(round_to( acc.min(), 2)), json!(round_to( acc.max(), 2)),
                      json!(round_to( acc.mean(), 2)), json!(round_to( acc.stddev(), 2)),
                      json!(counts.num_failed), json!(counts.num_passed) ],

            ResultData::PositionRadarRange { counts, acc, range_gain, range_bias, .. } =>
                vec![ json!(counts.num_pos), json!(counts.num_no_ref),
                      json!(counts.num_pos_inside), json!(counts.num_pos_outside),
                      json!(round_to( acc.min(), 2)), json!(round_to( acc.max(), 2)),
                      json!(round_to( acc.mean(), 2)), json!(round_to( acc.stddev(), 2)),
                      range_bias.map( |v| json!(round_to( v, 2))).unwrap_or( JsonValue::Null),
                      range_gain.map( |v| json!(round_to( v, 5))).unwrap_or( JsonValue::Null),
                      json!(counts.num_failed), json!(counts.num_passed) ],

            ResultData::Speed { counts, acc } | ResultData::TrackAngle { counts, acc } =>
                vec![ json!(counts.num_pos), json!(counts.num_no_ref),
                      json!(counts.num_pos_inside), json!(counts.num_pos_outside),
                      json!(counts.num_no_tst_value),
                      json!(round_to( acc.min(), 2)), json!(round_to( acc.max(), 2)),
                      json!(round_to( acc.mean(), 2)), json!(round_to( acc.stddev(), 2)),
                      json!(counts.num_failed), json!(counts.num_passed) ],
        }
    }
}
