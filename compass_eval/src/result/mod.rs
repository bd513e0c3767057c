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

use strum::Display;

pub mod kinds;
pub mod single;
pub mod joined;

pub use kinds::{ResultKind, ResultData, PresentCounts, FalseCounts, CorrectCounts, PositionCounts, SpeedCounts};
pub use single::{SingleResult, Utn};
pub use joined::JoinedResult;

/// three-way outcome of checking a result value against its requirement
/// condition. Unknown means there was no usable value (zero denominator / no
/// samples) - it is distinct from Failed and must never be collapsed into it
#[derive(Debug,Clone,Copy,PartialEq,Eq,Display)]
pub enum CheckResult {
    Passed,
    Failed,
    Unknown,
}
