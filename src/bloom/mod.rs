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

//! Bloom filter implementation for probabilistic set membership testing.
//!
//! A Bloom filter answers "possibly present" or "definitely absent" for a key. It is
//! dimensioned once for a capacity and a target false positive rate; inserts beyond the
//! capacity are rejected so the advertised rate keeps holding.
//!
//! # Usage
//!
//! ```rust
//! use bloomset::bloom::BloomFilter;
//!
//! let mut filter = BloomFilter::new(100, 0.01).unwrap();
//!
//! filter.add("apple").unwrap();
//! filter.add("banana").unwrap();
//!
//! assert!(filter.contains("apple"));
//! assert_eq!(filter.size(), 2);
//! ```
//!
//! # Sizing Helpers
//!
//! ```rust
//! use bloomset::bloom::bit_array_size;
//! use bloomset::bloom::hash_function_count;
//!
//! let num_bits = bit_array_size(1000, 0.05).unwrap();
//! let num_hashes = hash_function_count(1000, num_bits).unwrap();
//! assert_eq!((num_bits, num_hashes), (6235, 4));
//! ```

mod builder;
mod sizing;
mod sketch;

pub use self::builder::BloomFilterBuilder;
pub use self::sizing::bit_array_size;
pub use self::sizing::hash_function_count;
pub use self::sketch::BloomFilter;
