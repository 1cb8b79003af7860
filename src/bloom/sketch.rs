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

use crate::error::Error;
use crate::hash::SaltedKey;

/// A fixed-capacity Bloom filter for probabilistic set membership testing.
///
/// Provides fast membership queries with:
/// - No false negatives (inserted keys always return `true` until [`clear`](Self::clear))
/// - A false positive rate bounded by the configured target while at most
///   `capacity` keys are inserted
/// - Constant space usage
///
/// Inserts beyond `capacity` are rejected with
/// [`ErrorKind::CapacityExceeded`](crate::error::ErrorKind::CapacityExceeded).
///
/// Use [`BloomFilter::new`] or [`BloomFilterBuilder`](super::BloomFilterBuilder) to
/// construct instances.
#[derive(Debug, Clone, PartialEq)]
pub struct BloomFilter {
    /// Maximum number of keys (n)
    capacity: u64,
    /// Target false positive probability at full capacity (p)
    fpp: f64,
    /// Seed passed to the underlying hash
    seed: u32,
    /// Number of hash passes per key (k)
    num_hashes: u32,
    /// Total number of bits in the filter (m), never zero
    num_bits: u64,
    /// Count of bits set to 1
    num_bits_set: u64,
    /// Successful inserts since construction or the last clear
    num_items: u64,
    /// Bit array packed into u64 words
    /// Length = ceil(num_bits / 64)
    bit_array: Vec<u64>,
}

impl BloomFilter {
    /// Creates a filter dimensioned for `capacity` keys at false positive rate `fpp`.
    ///
    /// Shorthand for `BloomFilterBuilder::with_accuracy(capacity, fpp).build()`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidParameter`](crate::error::ErrorKind::InvalidParameter)
    /// if `capacity` is 0, `fpp` is outside `(0.0, 1.0]`, or the derived bit array
    /// would be empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomset::bloom::BloomFilter;
    ///
    /// let filter = BloomFilter::new(100, 0.01).unwrap();
    /// assert_eq!(filter.num_bits(), 958);
    /// assert_eq!(filter.num_hashes(), 6);
    /// assert!(BloomFilter::new(0, 0.01).is_err());
    /// ```
    pub fn new(capacity: u64, fpp: f64) -> Result<Self, Error> {
        super::BloomFilterBuilder::with_accuracy(capacity, fpp).build()
    }

    pub(super) fn with_dimensions(
        capacity: u64,
        fpp: f64,
        seed: u32,
        num_bits: u64,
        num_hashes: u32,
    ) -> Self {
        let num_words = num_bits.div_ceil(64) as usize;
        BloomFilter {
            capacity,
            fpp,
            seed,
            num_hashes,
            num_bits,
            num_bits_set: 0,
            num_items: 0,
            bit_array: vec![0u64; num_words],
        }
    }

    // ========================================================================
    // Update Operations
    // ========================================================================

    /// Inserts a key into the filter.
    ///
    /// After a successful insert, `contains(key)` returns `true` until the filter is
    /// cleared. Inserting a key that is already present still counts toward the
    /// capacity.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::CapacityExceeded`](crate::error::ErrorKind::CapacityExceeded)
    /// if the filter already holds `capacity` keys. The filter is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomset::bloom::BloomFilter;
    ///
    /// let mut filter = BloomFilter::new(2, 0.01).unwrap();
    /// filter.add("apple").unwrap();
    /// filter.add(b"banana").unwrap();
    /// assert!(filter.add("cherry").is_err());
    /// assert_eq!(filter.size(), 2);
    /// ```
    pub fn add<K: AsRef<[u8]> + ?Sized>(&mut self, key: &K) -> Result<(), Error> {
        if self.is_full() {
            tracing::debug!(
                capacity = self.capacity,
                "rejected insert into full bloom filter"
            );
            return Err(
                Error::capacity_exceeded("bloom filter has reached its capacity")
                    .with_context("capacity", self.capacity),
            );
        }

        let mut salted = SaltedKey::new(key.as_ref());
        for salt in 0..self.num_hashes {
            let bit_index = salted.index(salt, self.seed, self.num_bits);
            self.set_bit(bit_index);
        }
        self.num_items += 1;
        Ok(())
    }

    /// Resets the filter to its initial empty state, starting a new epoch.
    ///
    /// Clears all bits and the element count while preserving the allocation and
    /// configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomset::bloom::BloomFilter;
    ///
    /// let mut filter = BloomFilter::new(100, 0.01).unwrap();
    /// filter.add("apple").unwrap();
    ///
    /// filter.clear();
    /// assert!(filter.is_empty());
    /// assert!(!filter.contains("apple"));
    /// ```
    pub fn clear(&mut self) {
        self.bit_array.fill(0);
        self.num_bits_set = 0;
        self.num_items = 0;
    }

    // ========================================================================
    // Query Operations
    // ========================================================================

    /// Tests whether a key is possibly in the set.
    ///
    /// Returns:
    /// - `true`: Key was **possibly** inserted (or false positive)
    /// - `false`: Key was **definitely not** inserted
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomset::bloom::BloomFilter;
    ///
    /// let mut filter = BloomFilter::new(100, 0.01).unwrap();
    /// filter.add("apple").unwrap();
    ///
    /// assert!(filter.contains("apple"));
    /// ```
    pub fn contains<K: AsRef<[u8]> + ?Sized>(&self, key: &K) -> bool {
        if self.num_bits_set == 0 {
            return false;
        }

        let mut salted = SaltedKey::new(key.as_ref());
        (0..self.num_hashes).all(|salt| {
            let bit_index = salted.index(salt, self.seed, self.num_bits);
            self.get_bit(bit_index)
        })
    }

    /// Returns the bit position probed for `key` on hash pass `salt`.
    ///
    /// Positions are deterministic: equal keys, salts, seeds and bit counts always
    /// give equal positions, across instances. `add` and `contains` probe salts
    /// `0..num_hashes()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomset::bloom::BloomFilter;
    ///
    /// let f1 = BloomFilter::new(100, 0.01).unwrap();
    /// let f2 = BloomFilter::new(100, 0.01).unwrap();
    /// assert_eq!(f1.hash_index("apple", 3), f2.hash_index("apple", 3));
    /// assert!(f1.hash_index("apple", 3) < f1.num_bits());
    /// ```
    pub fn hash_index<K: AsRef<[u8]> + ?Sized>(&self, key: &K, salt: u32) -> u64 {
        SaltedKey::new(key.as_ref()).index(salt, self.seed, self.num_bits)
    }

    /// Returns the number of successful inserts since construction or the last clear.
    pub fn size(&self) -> u64 {
        self.num_items
    }

    /// Returns whether no key has been inserted since construction or the last clear.
    pub fn is_empty(&self) -> bool {
        self.num_items == 0
    }

    /// Returns whether further inserts will be rejected.
    pub fn is_full(&self) -> bool {
        self.num_items >= self.capacity
    }

    // ========================================================================
    // Statistics and Properties
    // ========================================================================

    /// Returns the maximum number of keys the filter accepts.
    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Returns the target false positive probability at full capacity.
    pub fn false_positive_rate(&self) -> f64 {
        self.fpp
    }

    /// Returns the total number of bits in the filter.
    pub fn num_bits(&self) -> u64 {
        self.num_bits
    }

    /// Returns the number of hash passes per key.
    pub fn num_hashes(&self) -> u32 {
        self.num_hashes
    }

    /// Returns the hash seed.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Returns the number of bits set to 1.
    ///
    /// Useful for monitoring filter saturation.
    pub fn bits_used(&self) -> u64 {
        self.num_bits_set
    }

    /// Returns the current load factor (fraction of bits set).
    ///
    /// Values near 0.5 indicate the filter is approaching its design load.
    pub fn load_factor(&self) -> f64 {
        self.num_bits_set as f64 / self.num_bits as f64
    }

    /// Estimates the current false positive probability.
    ///
    /// Based on the formula: `(1 - e^(-k*n/m))^k`
    /// where:
    /// - k = num_hashes
    /// - n = size
    /// - m = num_bits
    ///
    /// This assumes uniform bit distribution.
    pub fn estimated_fpp(&self) -> f64 {
        let k = self.num_hashes as f64;
        let n = self.num_items as f64;
        let m = self.num_bits as f64;
        (1.0 - (-k * n / m).exp()).powf(k)
    }

    // ========================================================================
    // Internal Helpers
    // ========================================================================

    fn get_bit(&self, bit_index: u64) -> bool {
        let word_index = (bit_index / 64) as usize;
        let mask = 1u64 << (bit_index % 64);
        (self.bit_array[word_index] & mask) != 0
    }

    /// Sets a single bit and updates the count if it wasn't already set.
    fn set_bit(&mut self, bit_index: u64) {
        let word_index = (bit_index / 64) as usize;
        let mask = 1u64 << (bit_index % 64);

        if (self.bit_array[word_index] & mask) == 0 {
            self.bit_array[word_index] |= mask;
            self.num_bits_set += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_new_dimensions() {
        let filter = BloomFilter::new(100, 0.01).unwrap();
        assert_eq!(filter.capacity(), 100);
        assert_eq!(filter.false_positive_rate(), 0.01);
        assert_eq!(filter.num_bits(), 958);
        assert_eq!(filter.num_hashes(), 6);
        assert_eq!(filter.bit_array.len(), 15);
        assert!(filter.is_empty());
        assert_eq!(filter.bits_used(), 0);
    }

    #[test]
    fn test_add_sets_at_most_k_bits() {
        let mut filter = BloomFilter::new(100, 0.01).unwrap();
        filter.add("apple").unwrap();
        assert!(filter.bits_used() >= 1);
        assert!(filter.bits_used() <= u64::from(filter.num_hashes()));
        assert_eq!(filter.size(), 1);
    }

    #[test]
    fn test_duplicate_add_counts_but_sets_no_new_bits() {
        let mut filter = BloomFilter::new(10, 0.01).unwrap();
        filter.add("apple").unwrap();
        let bits = filter.bits_used();
        let words = filter.bit_array.clone();

        filter.add("apple").unwrap();
        assert_eq!(filter.size(), 2);
        assert_eq!(filter.bits_used(), bits);
        assert_eq!(filter.bit_array, words);
    }

    #[test]
    fn test_add_probes_hash_index_positions() {
        let mut filter = BloomFilter::new(100, 0.01).unwrap();
        filter.add("banana").unwrap();
        for salt in 0..filter.num_hashes() {
            assert!(filter.get_bit(filter.hash_index("banana", salt)));
        }
    }

    #[test]
    fn test_rejected_add_leaves_state() {
        let mut filter = BloomFilter::new(1, 0.1).unwrap();
        filter.add("a").unwrap();
        let before = filter.clone();

        let err = filter.add("b").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CapacityExceeded);
        assert_eq!(err.context("capacity"), Some("1"));
        assert_eq!(filter, before);
    }

    #[test]
    fn test_clear_keeps_allocation() {
        let mut filter = BloomFilter::new(50, 0.05).unwrap();
        for i in 0..50 {
            filter.add(&format!("key-{i}")).unwrap();
        }
        assert!(filter.is_full());

        let words = filter.bit_array.len();

        filter.clear();
        assert!(filter.bit_array.iter().all(|&word| word == 0));
        assert_eq!(filter.bit_array.len(), words);
        assert_eq!(filter.size(), 0);
        assert_eq!(filter.bits_used(), 0);
        assert!(filter.add("again").is_ok());
    }

    #[test]
    fn test_statistics() {
        let mut filter = BloomFilter::new(1000, 0.01).unwrap();
        assert_eq!(filter.load_factor(), 0.0);
        assert_eq!(filter.estimated_fpp(), 0.0);

        for i in 0..1000 {
            filter.add(&i.to_string()).unwrap();
        }
        assert!(filter.load_factor() > 0.3 && filter.load_factor() < 0.7);
        let fpp = filter.estimated_fpp();
        assert!(fpp > 0.005 && fpp < 0.02, "estimated fpp {fpp}");
    }
}
