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

//! Salted hashing used to derive several bit positions from one hash primitive.
//!
//! Position `i` of a key is `murmur3(key || le32(i)) mod num_bits`. Varying only the
//! trailing four salt bytes decorrelates the positions without needing `k` distinct
//! hash functions.

use byteorder::ByteOrder;
use byteorder::LE;

mod murmurhash;

use self::murmurhash::murmur3_x64_64;

/// Seed used when none is configured. Zero keeps positions identical to a plain
/// murmur3 x64/128 digest of `key || salt`.
pub(crate) const DEFAULT_SEED: u32 = 0;

const SALT_LEN: usize = 4;

/// A key followed by a four byte little-endian salt slot.
///
/// The buffer is built once per key and only the salt bytes are rewritten for each
/// hash pass.
#[derive(Debug)]
pub(crate) struct SaltedKey {
    buf: Vec<u8>,
    key_len: usize,
}

impl SaltedKey {
    pub(crate) fn new(key: &[u8]) -> Self {
        let key_len = key.len();
        let mut buf = Vec::with_capacity(key_len + SALT_LEN);
        buf.extend_from_slice(key);
        buf.extend_from_slice(&[0; SALT_LEN]);
        SaltedKey { buf, key_len }
    }

    /// Returns the raw 64-bit hash of `key || le32(salt)`.
    pub(crate) fn hash(&mut self, salt: u32, seed: u32) -> u64 {
        LE::write_u32(&mut self.buf[self.key_len..], salt);
        murmur3_x64_64(&self.buf, seed)
    }

    /// Reduces the salted hash into `[0, num_bits)`.
    ///
    /// `num_bits` must be non-zero.
    pub(crate) fn index(&mut self, salt: u32, seed: u32, num_bits: u64) -> u64 {
        debug_assert!(num_bits > 0, "num_bits must be non-zero");
        self.hash(salt, seed) % num_bits
    }
}
