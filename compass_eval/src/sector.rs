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

use std::fmt;
use serde::{Serialize,Deserialize};

/// sector layer identification, used as an opaque grouping key for sector-wide
/// aggregation. The geometry behind it (inside/outside tests) is evaluated
/// upstream and enters this crate only through the per-detail pos_inside flag
#[derive(Serialize,Deserialize,Debug,Clone,PartialEq,Eq,Hash)]
pub struct SectorLayer {
    name: String,
    layer_name: String,
}

impl SectorLayer {
    pub fn new (name: impl ToString, layer_name: impl ToString)->Self {
        SectorLayer { name: name.to_string(), layer_name: layer_name.to_string() }
    }

    #[inline] pub fn name (&self)->&str { self.name.as_str() }
    #[inline] pub fn layer_name (&self)->&str { self.layer_name.as_str() }
}

impl fmt::Display for SectorLayer {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        write!(f, "{} {}", self.name, self.layer_name)
    }
}
