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
use strum::Display;

/// comparison direction of a requirement condition
#[derive(Serialize,Deserialize,Debug,Clone,Copy,PartialEq,Eq,Display)]
pub enum Comparison {
    #[strum(serialize = ">=")]
    AtLeast,

    #[strum(serialize = "<=")]
    AtMost,
}

/// threshold plus comparison direction
#[derive(Serialize,Deserialize,Debug,Clone,Copy,PartialEq)]
pub struct Condition {
    pub threshold: f64,
    pub comparison: Comparison,
}

impl Condition {
    pub fn passed (&self, value: f64)->bool {
        match self.comparison {
            Comparison::AtLeast => value >= self.threshold,
            Comparison::AtMost => value <= self.threshold,
        }
    }
}

/// requirement configuration as consumed by the evaluation core: reporting labels
/// plus the condition the derived result value is compared against. The full
/// requirement framework (config dialogs, per-update comparison logic) lives
/// upstream - results only need this narrow surface
#[derive(Serialize,Deserialize,Debug,Clone)]
pub struct Requirement {
    name: String,
    short_name: String,
    group_name: String,
    condition: Condition,
    prob_result: bool, // result values are probabilities, reported as percent
}

impl Requirement {
    /// "result must reach a minimum probability" style requirement (e.g. PD >= 0.9)
    pub fn min_probability (name: impl ToString, short_name: impl ToString, group_name: impl ToString, min_prob: f64)->Self {
        Requirement {
            name: name.to_string(), short_name: short_name.to_string(), group_name: group_name.to_string(),
            condition: Condition { threshold: min_prob, comparison: Comparison::AtLeast },
            prob_result: true,
        }
    }

    /// "result must stay below a maximum probability" style requirement (e.g. PFC <= 0.05)
    pub fn max_probability (name: impl ToString, short_name: impl ToString, group_name: impl ToString, max_prob: f64)->Self {
        Requirement {
            name: name.to_string(), short_name: short_name.to_string(), group_name: group_name.to_string(),
            condition: Condition { threshold: max_prob, comparison: Comparison::AtMost },
            prob_result: true,
        }
    }

    /// "result must stay below a maximum offset" style requirement (e.g. latency <= 2.5s)
    pub fn max_value (name: impl ToString, short_name: impl ToString, group_name: impl ToString, max_value: f64)->Self {
        Requirement {
            name: name.to_string(), short_name: short_name.to_string(), group_name: group_name.to_string(),
            condition: Condition { threshold: max_value, comparison: Comparison::AtMost },
            prob_result: false,
        }
    }

    #[inline] pub fn name (&self)->&str { self.name.as_str() }
    #[inline] pub fn short_name (&self)->&str { self.short_name.as_str() }
    #[inline] pub fn group_name (&self)->&str { self.group_name.as_str() }
    #[inline] pub fn condition (&self)->&Condition { &self.condition }

    pub fn condition_passed (&self, value: f64)->bool {
        self.condition.passed( value)
    }

    /// condition in report notation, e.g. ">= 0.9"
    pub fn condition_str (&self)->String {
        format!("{} {}", self.condition.comparison, self.condition.threshold)
    }

    /// result value in report notation - probabilities as percent with two
    /// decimals, plain values with two decimals
    pub fn result_value_str (&self, value: f64)->String {
        if self.prob_result {
            format!("{:.2}", value * 100.0)
        } else {
            format!("{:.2}", value)
        }
    }
}
