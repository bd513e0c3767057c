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

//! statistical evaluation core for ASTERIX surveillance data assessment: per-target
//! accumulation of pass/fail statistics against configurable requirements, merged
//! into sector-wide rollups with identical numerical semantics.
//!
//! The per-update classification (reference correlation, sector tests) and all
//! rendering of the produced report rows happen outside of this crate - inputs are
//! pre-classified [`detail::EvaluationDetail`] records and counters, outputs are
//! [`report::ReportTable`] rows and raw sample CSV streams.

pub mod errors;
pub mod detail;
pub mod timeperiod;
pub mod requirement;
pub mod sector;
pub mod result;
pub mod report;

pub use result::{CheckResult, ResultKind, SingleResult, JoinedResult, Utn};
