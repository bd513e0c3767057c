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

use chrono::{DateTime,TimeDelta,Utc};
use serde::{Serialize,Deserialize};
use compass_common::macros::invariant;

use crate::detail::EvaluationDetail;

/// closed time interval with begin <= end, used for the Begin/End columns of
/// report rows
#[derive(Serialize,Deserialize,Debug,Clone,Copy,PartialEq)]
pub struct TimePeriod {
    begin: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimePeriod {
    pub fn new (begin: DateTime<Utc>, end: DateTime<Utc>)->Self {
        invariant!( begin <= end, "time period ends before it begins: {} > {}", begin, end);
        TimePeriod { begin, end }
    }

    /// covered period of a detail list, None if the list is empty
    pub fn from_details (details: &[EvaluationDetail])->Option<TimePeriod> {
        let first = details.first()?;

        let mut begin = first.timestamp;
        let mut end = first.timestamp;

        for d in &details[1..] {
            if d.timestamp < begin { begin = d.timestamp }
            if d.timestamp > end { end = d.timestamp }
        }

        Some( TimePeriod { begin, end })
    }

    #[inline] pub fn begin (&self)->DateTime<Utc> { self.begin }
    #[inline] pub fn end (&self)->DateTime<Utc> { self.end }

    pub fn duration (&self)->TimeDelta { self.end - self.begin }

    /// widen self to also cover other
    pub fn extend (&mut self, other: &TimePeriod) {
        if other.begin < self.begin { self.begin = other.begin }
        if other.end > self.end { self.end = other.end }
    }
}

/// time-of-day formatting used in report rows
pub fn format_time (t: DateTime<Utc>)->String {
    t.format("%H:%M:%S%.3f").to_string()
}
