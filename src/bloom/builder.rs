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

use crate::bloom::BloomFilter;
use crate::bloom::sizing::bit_array_size;
use crate::bloom::sizing::hash_function_count;
use crate::error::Error;
use crate::hash::DEFAULT_SEED;

/// Builder for creating [`BloomFilter`] instances.
///
/// # Examples
///
/// ```
/// use bloomset::bloom::BloomFilterBuilder;
///
/// let filter = BloomFilterBuilder::with_accuracy(10_000, 0.001)
///     .seed(42)
///     .build()
///     .unwrap();
/// assert_eq!(filter.seed(), 42);
/// assert_eq!(filter.capacity(), 10_000);
/// ```
#[derive(Debug, Clone)]
pub struct BloomFilterBuilder {
    capacity: u64,
    fpp: f64,
    seed: u32,
}

impl BloomFilterBuilder {
    /// Creates a builder for a filter holding up to `capacity` keys with false
    /// positive probability `fpp` once full.
    ///
    /// Parameters are validated by [`build()`](Self::build).
    pub fn with_accuracy(capacity: u64, fpp: f64) -> Self {
        BloomFilterBuilder {
            capacity,
            fpp,
            seed: DEFAULT_SEED,
        }
    }

    /// Sets a custom hash seed (default: 0).
    ///
    /// Filters with different seeds probe different positions for the same key.
    pub fn seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Sizes and allocates the Bloom filter.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidParameter`](crate::error::ErrorKind::InvalidParameter)
    /// if `capacity` is 0, `fpp` is outside `(0.0, 1.0]`, or the derived bit array
    /// length is 0 (for example `fpp == 1.0`). Nothing is allocated on failure.
    pub fn build(self) -> Result<BloomFilter, Error> {
        let BloomFilterBuilder {
            capacity,
            fpp,
            seed,
        } = self;

        if capacity == 0 {
            return Err(Error::invalid_parameter("capacity must be greater than 0")
                .with_context("capacity", capacity)
                .with_context("fpp", fpp));
        }

        let num_bits = bit_array_size(capacity, fpp)?;
        if num_bits == 0 {
            return Err(
                Error::invalid_parameter("capacity and fpp yield an empty bit array")
                    .with_context("capacity", capacity)
                    .with_context("fpp", fpp),
            );
        }
        let num_hashes = hash_function_count(capacity, num_bits)?;

        tracing::debug!(capacity, fpp, num_bits, num_hashes, seed, "sized bloom filter");

        Ok(BloomFilter::with_dimensions(
            capacity, fpp, seed, num_bits, num_hashes,
        ))
    }
}
