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

use std::io::Write;
use std::sync::Arc;
use serde_json::{json,Value as JsonValue};
use tracing::debug;

use compass_common::{accumulator::ValueAccumulator, macros::invariant};

use crate::errors::{Result,CompassEvalError};
use crate::requirement::Requirement;
use crate::sector::SectorLayer;
use crate::timeperiod::{TimePeriod,format_time};
use crate::result::{CheckResult, single::{SingleResult,Utn}, kinds::*};

/// sector-wide evaluation result for one requirement and sector layer, merging
/// the per-target results of all targets intersecting the sector. Aggregate
/// counters are summed, accumulators are joined and the derived scalar is
/// recomputed from the pooled state - never by averaging per-target values.
///
/// Members are registered in join order and accumulated strictly left-to-right
/// so that repeated runs produce bit-identical floating point results. The
/// accumulator merge has no inverse, hence any member use-toggle change requires
/// the full recomputation in updates_to_use_changes().
pub struct JoinedResult {
    result_id: String,
    requirement: Arc<Requirement>,
    sector_layer: SectorLayer,

    members: Vec<Arc<SingleResult>>,

    data: ResultData,
    result: Option<f64>,
    time_period: Option<TimePeriod>,

    num_targets: u32,
    num_failed_targets: u32,
}

impl JoinedResult {
    pub(crate) fn new_empty (result_id: impl ToString, requirement: Arc<Requirement>,
                             sector_layer: SectorLayer, data: ResultData)->Self {
        JoinedResult {
            result_id: result_id.to_string(),
            requirement, sector_layer,
            members: Vec::new(),
            data,
            result: None,
            time_period: None,
            num_targets: 0,
            num_failed_targets: 0,
        }
    }

    /// register a per-target result as member and - if its use toggle is set and
    /// it has a usable value - merge its counters, accumulator and range pairs
    /// into the aggregate, then recompute the pooled scalar. Joining a result of
    /// a different requirement kind is fatal
    pub fn join (&mut self, single: &Arc<SingleResult>) {
        invariant!( single.kind() == self.data.kind(),
                    "cannot join {} single result into {} sector result", single.kind(), self.data.kind());

        self.members.push( single.clone());
        self.accumulate_member( single.clone());
        self.update_result();
    }

    fn member_used (single: &SingleResult)->bool {
        single.is_used() && single.result_usable()
    }

    fn accumulate_member (&mut self, single: Arc<SingleResult>) {
        if !Self::member_used( &single) { return }

        self.num_targets += 1;
        if single.has_failed() { self.num_failed_targets += 1 }

        self.data.join( single.data());

        if let Some(period) = single.time_period() {
            match &mut self.time_period {
                Some(p) => p.extend( &period),
                None => self.time_period = Some( period),
            }
        }
    }

    /// full recomputation after member use toggles changed: reset all aggregate
    /// state, then replay the merge over every registered member in registration
    /// order. Calling this without toggle changes reproduces the identical state
    pub fn updates_to_use_changes (&mut self) {
        self.data.reset();
        self.result = None;
        self.time_period = None;
        self.num_targets = 0;
        self.num_failed_targets = 0;

        let members = self.members.clone();
        for single in members {
            self.accumulate_member( single);
        }

        self.update_result();
    }

    fn update_result (&mut self) {
        self.data.check_invariants();
        self.result = self.data.compute_result();

        debug!("{} sector result {}: {} targets ({} failed) -> result {:?}",
               self.data.kind(), self.result_id, self.num_targets, self.num_failed_targets, self.result);
    }

    //--- accessors

    #[inline] pub fn result_id (&self)->&str { self.result_id.as_str() }
    #[inline] pub fn requirement (&self)->&Arc<Requirement> { &self.requirement }
    #[inline] pub fn sector_layer (&self)->&SectorLayer { &self.sector_layer }
    #[inline] pub fn data (&self)->&ResultData { &self.data }
    #[inline] pub fn kind (&self)->ResultKind { self.data.kind() }
    #[inline] pub fn result (&self)->Option<f64> { self.result }
    #[inline] pub fn time_period (&self)->Option<TimePeriod> { self.time_period }
    #[inline] pub fn num_issues (&self)->u32 { self.data.num_issues() }
    #[inline] pub fn num_updates (&self)->u32 { self.data.num_updates() }
    #[inline] pub fn num_targets (&self)->u32 { self.num_targets }
    #[inline] pub fn num_failed_targets (&self)->u32 { self.num_failed_targets }

    pub fn accumulator (&self)->Option<&ValueAccumulator> { self.data.accumulator() }

    pub fn members (&self)->&[Arc<SingleResult>] { self.members.as_slice() }

    pub fn num_single_results (&self)->usize { self.members.len() }

    pub fn num_usable_single_results (&self)->usize {
        self.members.iter().filter( |m| Self::member_used( m)).count()
    }

    pub fn num_unusable_single_results (&self)->usize {
        self.members.iter().filter( |m| !Self::member_used( m)).count()
    }

    //--- requirement check (same semantics as the per-target results)

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

    //--- report rows

    pub fn overview_table_headers (&self)->Vec<&'static str> {
        vec!["Sector Layer", "Group", "Req.", "Id", "#Updates", "Result", "Condition", "Condition Fulfilled"]
    }

    /// one-line summary row for the requirement overview table
    pub fn overview_table_row (&self)->Vec<JsonValue> {
        vec![ json!(self.sector_layer.to_string()),
              json!(self.requirement.group_name()),
              json!(self.requirement.short_name()),
              json!(self.result_id),
              json!(self.data.num_updates()),
              match self.result {
                  Some(value) => json!(self.requirement.result_value_str( value)),
                  None => JsonValue::Null,
              },
              json!(self.requirement.condition_str()),
              json!(self.check_result().to_string()) ]
    }

    pub fn sector_table_headers (&self)->Vec<&'static str> {
        let mut headers = vec!["Sector Layer", "Begin", "End"];
        headers.extend( self.data.column_headers());
        headers.extend( ["Result", "Condition", "Condition Fulfilled"]);
        headers
    }

    /// per-sector report row, same shape as the per-target rows but over the
    /// pooled state. Exactly the fields used in the aggregate comparison
    pub fn sector_table_row (&self)->Vec<JsonValue> {
        let mut row = vec![
            json!(self.sector_layer.to_string()),
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

    //--- raw sample export

    /// write the pooled raw sample values as plain text: one metric name header
    /// line, then one value per line. Values are gathered from the used members
    /// in registration order, detail order within each member - the same samples
    /// that entered the pooled accumulator. Only defined for the continuous
    /// valued kinds
    pub fn export_values_csv<W: Write> (&self, w: &mut W)->Result<()> {
        let metric = self.data.values_metric_name()
            .ok_or_else( || CompassEvalError::ExportError( format!("no sample values for {} results", self.data.kind())))?;

        writeln!( w, "{}", metric)?;

        for single in &self.members {
            if !Self::member_used( single) { continue }

            for v in single.sample_values() {
                writeln!( w, "{}", v)?;
            }
        }

        Ok(())
    }
}
