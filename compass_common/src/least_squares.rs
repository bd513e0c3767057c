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

use nalgebra::{DMatrix,DVector};

use crate::macros::invariant;

/// ordinary least-squares fit of `y ≈ gain*x + bias`, solved via SVD of the
/// `[x 1]` design matrix. Returns `(gain, bias)`, or None if there are no
/// samples. Mismatched input lengths are an upstream bug and fatal
pub fn ols_fit (x: &[f64], y: &[f64])->Option<(f64,f64)> {
    invariant!( x.len() == y.len(), "least-squares sample lists differ in length: {} != {}", x.len(), y.len());

    let n = x.len();
    if n == 0 { return None }

    let mut a = DMatrix::<f64>::from_element( n, 2, 1.0);
    let mut b = DVector::<f64>::zeros( n);

    for i in 0..n {
        a[(i,0)] = x[i];
        b[i] = y[i];
    }

    let svd = a.svd( true, true);
    let sol = svd.solve( &b, f64::EPSILON).ok()?;

    Some( (sol[0], sol[1]))
}
