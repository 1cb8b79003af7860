// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Sizing formulas deriving the bit array length and hash count from intent.

use std::f64::consts::LN_2;

use crate::error::Error;

/// Computes the bit array length for `capacity` items at false positive rate `fpp`.
///
/// Formula: `m = -n * ln(p) / (ln(2)^2)`, truncated to an integer.
///
/// The result is not bounded above; extreme parameters yield very large arrays.
///
/// # Errors
///
/// Returns [`ErrorKind::InvalidParameter`](crate::error::ErrorKind::InvalidParameter)
/// if `fpp` is not in `(0.0, 1.0]`.
///
/// # Examples
///
/// ```
/// use bloomset::bloom::bit_array_size;
///
/// assert_eq!(bit_array_size(100, 0.01).unwrap(), 958);
/// assert_eq!(bit_array_size(100, 1.0).unwrap(), 0);
/// assert!(bit_array_size(100, 1.1).is_err());
/// ```
pub fn bit_array_size(capacity: u64, fpp: f64) -> Result<u64, Error> {
    // Written so that NaN is rejected too.
    if !(fpp > 0.0 && fpp <= 1.0) {
        return Err(
            Error::invalid_parameter("false positive rate must be in (0.0, 1.0]")
                .with_context("capacity", capacity)
                .with_context("fpp", fpp),
        );
    }

    let n = capacity as f64;
    let bits = -(n * fpp.ln()) / (LN_2 * LN_2);

    // `as` saturates, and -0.0 for fpp == 1.0 becomes 0.
    Ok(bits.trunc() as u64)
}

/// Computes the number of hash passes for `capacity` items over `num_bits` bits.
///
/// Formula: `k = floor(m * ln(2) / n)`, clamped to at least 1.
///
/// # Errors
///
/// Returns [`ErrorKind::InvalidParameter`](crate::error::ErrorKind::InvalidParameter)
/// if `capacity` is 0.
///
/// # Examples
///
/// ```
/// use bloomset::bloom::hash_function_count;
///
/// assert_eq!(hash_function_count(1000, 10_000).unwrap(), 6);
/// assert_eq!(hash_function_count(100, 100).unwrap(), 1);
/// assert!(hash_function_count(0, 100).is_err());
/// ```
pub fn hash_function_count(capacity: u64, num_bits: u64) -> Result<u32, Error> {
    if capacity == 0 {
        return Err(Error::invalid_parameter("capacity must be greater than 0")
            .with_context("capacity", capacity)
            .with_context("num_bits", num_bits));
    }

    let m = num_bits as f64;
    let n = capacity as f64;
    let k = (m * LN_2 / n).floor() as u32;

    Ok(k.max(1))
}
