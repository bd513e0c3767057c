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

/// fatal internal-consistency check. A failed `invariant!` means the upstream
/// classification step produced inconsistent data - this is not a recoverable
/// condition and hence does not map into a Result. The panic message carries a
/// fixed prefix so that tests can assert on it with `#[should_panic(expected=..)]`
///
/// use like this:
/// ```should_panic
///     use compass_common::invariant;
///     let (n_in, n_out, n) = (3, 2, 6);
///     invariant!( n_in + n_out == n, "update counts inconsistent: {} + {} != {}", n_in, n_out, n);
/// ```
#[macro_export]
macro_rules! invariant {
    ( $cond:expr, $fmt:literal $(, $arg:expr )* ) => {
        if !($cond) {
            panic!( concat!( "invariant violated: ", $fmt) $(, $arg)* )
        }
    };
}
pub use invariant; // preserve 'macros' module across crates
