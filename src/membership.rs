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

//! A capability contract shared by approximate membership structures.

use crate::bloom::BloomFilter;
use crate::error::Error;

/// Insert, test, clear and count keys in an approximate membership structure.
///
/// The trait is object safe, so callers can hold a `Box<dyn Membership>` and swap the
/// backing structure without changing call sites.
///
/// # Examples
///
/// ```
/// use bloomset::Membership;
/// use bloomset::bloom::BloomFilter;
///
/// let mut set: Box<dyn Membership> = Box::new(BloomFilter::new(10, 0.01).unwrap());
/// set.add(b"apple").unwrap();
/// assert!(set.contains(b"apple"));
/// assert_eq!(set.size(), 1);
///
/// set.clear().unwrap();
/// assert_eq!(set.size(), 0);
/// ```
pub trait Membership {
    /// Records `key` as a member.
    fn add(&mut self, key: &[u8]) -> Result<(), Error>;

    /// Returns `false` if `key` is definitely absent and `true` if it may be present.
    fn contains(&self, key: &[u8]) -> bool;

    /// Forgets every key.
    fn clear(&mut self) -> Result<(), Error>;

    /// Returns the number of keys added since construction or the last clear.
    fn size(&self) -> u64;
}

impl Membership for BloomFilter {
    fn add(&mut self, key: &[u8]) -> Result<(), Error> {
        BloomFilter::add(self, key)
    }

    fn contains(&self, key: &[u8]) -> bool {
        BloomFilter::contains(self, key)
    }

    fn clear(&mut self) -> Result<(), Error> {
        BloomFilter::clear(self);
        Ok(())
    }

    fn size(&self) -> u64 {
        BloomFilter::size(self)
    }
}
