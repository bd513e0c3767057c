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

use std::sync::{Arc, atomic::{AtomicBool,Ordering}};
use serde_json::{json,Value as JsonValue};
use tracing::debug;

use compass_common::{accumulator::ValueAccumulator, macros::invariant};

use crate::detail::{EvaluationDetail,EvaluationDetails};
use crate::requirement::Requirement;
use crate::sector::SectorLayer;
use crate::timeperiod::{TimePeriod,format_time};
use crate::result::{CheckResult, joined::JoinedResult, kinds::*};

/// unique target number of the evaluated track
pub type Utn = u32;

/// per-target evaluation result for one requirement and sector layer. Counters
/// and detail records are pre-classified by the upstream comparison step; the
/// constructor validates them, accumulates the contributing sample values in
/// detail order and derives the scalar result value.
///
/// Immutable after construction except for the use-in-aggregate toggle, which
/// is read by the owning sector result at merge time.
pub struct SingleResult {
    result_id: String,
    requirement: Arc<Requirement>,
    sector_layer: SectorLayer,
    utn: Utn,

    details: EvaluationDetails,
    time_period: Option<TimePeriod>,

    data: ResultData,
    result: Option<f64>,

    used: AtomicBool,
}

impl SingleResult {
    /*
     * per-kind constructors. These are the only places where the requirement
     * kind is spelled out - everything downstream dispatches on the data tag.
     */

    pub fn mode_a_present (result_id: impl ToString, requirement: Arc<Requirement>, sector_layer: SectorLayer,
                           utn: Utn, counts: PresentCounts, details: EvaluationDetails)->Self {
        Self::new( result_id, requirement, sector_layer, utn, ResultData::ModeAPresent { counts }, details)
    }

    pub fn mode_a_false (result_id: impl ToString, requirement: Arc<Requirement>, sector_layer: SectorLayer,
                         utn: Utn, counts: FalseCounts, details: EvaluationDetails)->Self {
        Self::new( result_id, requirement, sector_layer, utn, ResultData::ModeAFalse { counts }, details)
    }

    pub fn mode_c_correct (result_id: impl ToString, requirement: Arc<Requirement>, sector_layer: SectorLayer,
                           utn: Utn, counts: CorrectCounts, details: EvaluationDetails)->Self {
        Self::new( result_id, requirement, sector_layer, utn, ResultData::ModeCCorrect { counts }, details)
    }

    pub fn position_across (result_id: impl ToString, requirement: Arc<Requirement>, sector_layer: SectorLayer,
                            utn: Utn, counts: PositionCounts, details: EvaluationDetails)->Self {
        Self::new( result_id, requirement, sector_layer, utn,
                   ResultData::PositionAcross { counts, acc: ValueAccumulator::new() }, details)
    }

    pub fn position_latency (result_id: impl ToString, requirement: Arc<Requirement>, sector_layer: SectorLayer,
                             utn: Utn, counts: PositionCounts, details: EvaluationDetails)->Self {
        Self::new( result_id, requirement, sector_layer, utn,
                   ResultData::PositionLatency { counts, acc: ValueAccumulator::new() }, details)
    }

    pub fn position_distance_rms (result_id: impl ToString, requirement: Arc<Requirement>, sector_layer: SectorLayer,
                                  utn: Utn, counts: PositionCounts, details: EvaluationDetails)->Self {
        Self::new( result_id, requirement, sector_layer, utn,
                   ResultData::PositionDistanceRms { counts, acc: ValueAccumulator::new() }, details)
    }

    pub fn position_radar_range (result_id: impl ToString, requirement: Arc<Requirement>, sector_layer: SectorLayer,
                                 utn: Utn, counts: PositionCounts, details: EvaluationDetails)->Self {
        Self::new( result_id, requirement, sector_layer, utn,
                   ResultData::PositionRadarRange { counts, acc: ValueAccumulator::new(),
                                                    ranges_tst: Vec::new(), ranges_ref: Vec::new(),
                                                    range_gain: None, range_bias: None }, details)
    }

    pub fn speed (result_id: impl ToString, requirement: Arc<Requirement>, sector_layer: SectorLayer,
                  utn: Utn, counts: SpeedCounts, details: EvaluationDetails)->Self {
        Self::new( result_id, requirement, sector_layer, utn,
                   ResultData::Speed { counts, acc: ValueAccumulator::new() }, details)
    }

    pub fn track_angle (result_id: impl ToString, requirement: Arc<Requirement>, sector_layer: SectorLayer,
                        utn: Utn, counts: SpeedCounts, details: EvaluationDetails)->Self {
        Self::new( result_id, requirement, sector_layer, utn,
                   ResultData::TrackAngle { counts, acc: ValueAccumulator::new() }, details)
    }

    fn new (result_id: impl ToString, requirement: Arc<Requirement>, sector_layer: SectorLayer,
            utn: Utn, mut data: ResultData, details: EvaluationDetails)->Self {
        data.check_invariants();
        data.accumulate_details( &details);

        let result = data.compute_result();

        debug!("new {} result for utn {}: result {:?}", data.kind(), utn, result);

        let time_period = TimePeriod::from_details( &details);

        SingleResult {
            result_id: result_id.to_string(),
            requirement, sector_layer, utn,
            details, time_period,
            data, result,
            used: AtomicBool::new( true),
        }
    }

    //--- accessors

    #[inline] pub fn result_id (&self)->&str { self.result_id.as_str() }
    #[inline] pub fn requirement (&self)->&Arc<Requirement> { &self.requirement }
    #[inline] pub fn sector_layer (&self)->&SectorLayer { &self.sector_layer }
    #[inline] pub fn utn (&self)->Utn { self.utn }
    #[inline] pub fn details (&self)->&[EvaluationDetail] { self.details.as_slice() }
    #[inline] pub fn time_period (&self)->Option<TimePeriod> { self.time_period }
    #[inline] pub fn data (&self)->&ResultData { &self.data }
    #[inline] pub fn kind (&self)->ResultKind { self.data.kind() }
    #[inline] pub fn result (&self)->Option<f64> { self.result }
    #[inline] pub fn num_issues (&self)->u32 { self.data.num_issues() }
    #[inline] pub fn num_updates (&self)->u32 { self.data.num_updates() }

    pub fn accumulator (&self)->Option<&ValueAccumulator> { self.data.accumulator() }

    //--- the use-in-aggregate toggle

    pub fn is_used (&self)->bool { self.used.load( Ordering::Relaxed) }

    /// note this does not notify sector results holding this member - the owner
    /// of the toggle has to trigger updates_to_use_changes() on them afterwards
    pub fn set_used (&self, used: bool) { self.used.store( used, Ordering::Relaxed) }

    //--- requirement check

    pub fn result_usable (&self)->bool { self.result.is_some() }

    pub fn has_failed (&self)->bool {
        match self.result {
            Some(value) => !self.requirement.condition_passed( value),
            None => false,
        }
    }

    pub fn check_result (&self)->CheckResult {
        match self.result {
            Some(value) => {
                if self.requirement.condition_passed( value) { CheckResult::Passed } else { CheckResult::Failed }
            }
            None => CheckResult::Unknown,
        }
    }

    /// factory hook producing the matching empty sector (joined) result, so that
    /// generic aggregation code never switches over requirement kinds
    pub fn create_empty_joined (&self, result_id: impl ToString)->JoinedResult {
        JoinedResult::new_empty( result_id, self.requirement.clone(), self.sector_layer.clone(), self.data.empty_like())
    }

    /// the continuous samples this result contributed, in detail order (empty
    /// for the discrete code kinds). Used for pooled raw value exports
    pub fn sample_values (&self)->Vec<f64> {
        self.data.detail_samples( &self.details)
    }

    //--- report rows

    pub fn target_table_headers (&self)->Vec<&'static str> {
        let mut headers = vec!["UTN", "Begin", "End"];
        headers.extend( self.data.column_headers());
        headers.extend( ["Result", "Condition", "Condition Fulfilled"]);
        headers
    }

    /// per-target report row: identification, covered period, kind counters,
    /// result value and condition outcome. These are exactly the fields used in
    /// the aggregate comparison - there is no separate display-only computation
    pub fn target_table_row (&self)->Vec<JsonValue> {
        let mut row = vec![
            json!(self.utn),
            self.time_period.map( |p| json!(format_time( p.begin()))).unwrap_or( JsonValue::Null),
            self.time_period.map( |p| json!(format_time( p.end()))).unwrap_or( JsonValue::Null),
        ];
        row.extend( self.data.column_values());

        row.push( match self.result {
            Some(value) => json!(self.requirement.result_value_str( value)),
            None => JsonValue::Null,
        });
        row.push( json!(self.requirement.condition_str()));
        row.push( json!(self.check_result().to_string()));

        row
    }

    pub fn detail_table_headers ()->Vec<&'static str> {
        vec!["ToD", "NoRef", "PosInside", "Value", "CP", "#CF", "#CP", "Comment"]
    }

    /// per-update rows with running check counters, in detail order
    pub fn detail_table_rows (&self)->Vec<Vec<JsonValue>> {
        let mut num_failed = 0u32;
        let mut num_passed = 0u32;

        self.details.iter().map( |d| {
            if d.contributes() {
                if d.check_passed { num_passed += 1 } else { num_failed += 1 }
            }

            vec![ json!(format_time( d.timestamp)),
                  json!(!d.has_ref()),
                  json!(d.pos_inside),
                  json!(d.value),
                  json!(d.check_passed),
                  json!(num_failed),
                  json!(num_passed),
                  json!(d.comment) ]
        }).collect()
    }
}
