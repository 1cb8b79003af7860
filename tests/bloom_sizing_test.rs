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

use bloomset::bloom::bit_array_size;
use bloomset::bloom::hash_function_count;
use bloomset::error::ErrorKind;
use googletest::assert_that;
use googletest::prelude::contains_substring;
use googletest::prelude::eq;
use googletest::prelude::ge;
use googletest::prelude::le;

#[test]
fn test_bit_array_size_matches_closed_form() {
    let ln2_squared = std::f64::consts::LN_2 * std::f64::consts::LN_2;
    for capacity in [1_u64, 7, 100, 1000, 12_345, 1_000_000] {
        for fpp in [0.5, 0.1, 0.01, 0.001, 1e-6] {
            let expected = -(capacity as f64) * f64::ln(fpp) / ln2_squared;
            let bits = bit_array_size(capacity, fpp).unwrap() as f64;
            assert_that!(bits, le(expected));
            assert_that!(bits, ge(expected - 1.0));
        }
    }
}

#[test]
fn test_bit_array_size_rejects_out_of_range_fpp() {
    for fpp in [0.0, -0.01, 1.1] {
        let err = bit_array_size(100, fpp).unwrap_err();
        assert_that!(err.kind(), eq(ErrorKind::InvalidParameter));
        assert_that!(err.message(), contains_substring("false positive rate"));
    }
}

#[test]
fn test_hash_function_count_is_at_least_one() {
    for capacity in [1_u64, 10, 1000, u64::MAX] {
        for num_bits in [0_u64, 1, 2, 10, 1000] {
            assert_that!(hash_function_count(capacity, num_bits).unwrap(), ge(1));
        }
    }
}

#[test]
fn test_hash_function_count_rejects_zero_capacity() {
    let err = hash_function_count(0, 1000).unwrap_err();
    assert_that!(err.kind(), eq(ErrorKind::InvalidParameter));
    assert_that!(err.message(), contains_substring("capacity"));
}

#[test]
fn test_sizing_chain() {
    let num_bits = bit_array_size(100, 0.01).unwrap();
    assert_eq!(num_bits, 958);
    assert_eq!(hash_function_count(100, num_bits).unwrap(), 6);
}
