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

/// streaming accumulator for a bag of f64 samples, keeping running count, sum,
/// sum-of-squares and min/max. Derived statistics (mean, rms, var, stddev) are
/// computed from the running sums on access and hence are always current - there
/// is no separate finalize step.
///
/// `join` merges another accumulator by adding its running sums, which is
/// equivalent to having accumulated the other accumulator's raw samples directly.
/// Since the merge is sum-based it has no inverse - removing samples requires a
/// reset and re-accumulation by the owner.
#[derive(Serialize,Deserialize,Debug,Clone,Default)]
pub struct ValueAccumulator {
    num_values: usize,
    value_sum: f64,
    value_sum2: f64,
    value_min: f64,
    value_max: f64,
}

impl ValueAccumulator {
    pub fn new ()->Self {
        ValueAccumulator::default()
    }

    /// add a batch of samples. No-op on empty input
    pub fn accumulate (&mut self, values: &[f64]) {
        for &v in values {
            if self.num_values == 0 {
                self.value_min = v;
                self.value_max = v;
            } else {
                if v < self.value_min { self.value_min = v }
                if v > self.value_max { self.value_max = v }
            }

            self.value_sum += v;
            self.value_sum2 += v * v;
            self.num_values += 1;
        }
    }

    /// merge another accumulator into self. Joining an empty accumulator is a
    /// true no-op - its default min/max placeholders must not leak into self
    pub fn join (&mut self, other: &ValueAccumulator) {
        if other.num_values == 0 { return }

        if self.num_values == 0 {
            self.value_min = other.value_min;
            self.value_max = other.value_max;
        } else {
            if other.value_min < self.value_min { self.value_min = other.value_min }
            if other.value_max > self.value_max { self.value_max = other.value_max }
        }

        self.value_sum += other.value_sum;
        self.value_sum2 += other.value_sum2;
        self.num_values += other.num_values;
    }

    pub fn reset (&mut self) {
        *self = ValueAccumulator::default();
    }

    #[inline] pub fn num_values (&self)->usize { self.num_values }

    #[inline] pub fn min (&self)->f64 { if self.num_values == 0 { 0.0 } else { self.value_min } }
    #[inline] pub fn max (&self)->f64 { if self.num_values == 0 { 0.0 } else { self.value_max } }

    pub fn mean (&self)->f64 {
        if self.num_values == 0 { return 0.0 }
        self.value_sum / self.num_values as f64
    }

    pub fn rms (&self)->f64 {
        if self.num_values == 0 { return 0.0 }
        (self.value_sum2 / self.num_values as f64).sqrt()
    }

    /// sample variance from the running sums: sum2/n - mean^2. Cancellation can
    /// drive the raw difference slightly negative, so it is clamped to zero
    /// before anybody takes a sqrt of it
    pub fn var (&self)->f64 {
        if self.num_values == 0 { return 0.0 }

        let mean = self.value_sum / self.num_values as f64;
        let var = self.value_sum2 / self.num_values as f64 - mean * mean;

        if var < 0.0 { 0.0 } else { var }
    }

    pub fn stddev (&self)->f64 {
        self.var().sqrt()
    }
}
