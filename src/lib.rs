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

//! A fixed-capacity Bloom filter for approximate set membership.
//!
//! The filter is sized from a capacity and a target false positive rate, probes
//! `k` positions per key with a salted MurmurHash3, and rejects inserts once full.
//! See [`bloom`] for the filter and its sizing functions and [`Membership`] for the
//! structure-agnostic interface.

pub mod bloom;
pub mod error;

mod hash;
mod membership;

pub use self::membership::Membership;
