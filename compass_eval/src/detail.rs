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

use chrono::{DateTime,Utc};
use serde::{Serialize,Deserialize};

/// single per-update observation, produced by the (external) correlation pipeline
/// and consumed once by exactly one per-target result. Never mutated afterwards.
///
/// `value` holds the test-system metric sample for this update (position error,
/// latency, speed difference, ..). `ref_value` holds the reference quantity the
/// sample was derived from; `None` means there was no reference for this update,
/// in which case the record contributes to the no-reference counts only - never
/// to pass/fail counts or sample accumulation. For radar range results `value`
/// and `ref_value` are the test and reference slant range.
#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct EvaluationDetail {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
    pub ref_value: Option<f64>,
    pub pos_inside: bool,
    pub check_passed: bool,
    pub comment: String,
}

pub type EvaluationDetails = Vec<EvaluationDetail>;

impl EvaluationDetail {
    pub fn new (timestamp: DateTime<Utc>, value: f64, ref_value: Option<f64>,
                pos_inside: bool, check_passed: bool, comment: impl ToString)->Self {
        EvaluationDetail { timestamp, value, ref_value, pos_inside, check_passed, comment: comment.to_string() }
    }

    #[inline] pub fn has_ref (&self)->bool { self.ref_value.is_some() }

    /// a detail contributes a sample to continuous aggregation iff it has a
    /// reference and lies inside the sector
    #[inline] pub fn contributes (&self)->bool { self.ref_value.is_some() && self.pos_inside }
}
