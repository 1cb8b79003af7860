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

/// Hashes `bytes` with MurmurHash3 x64/128 and returns the low 64-bit half.
///
/// With seed 0 this equals the `Sum64` of a streaming murmur3 128-bit digest.
pub(crate) fn murmur3_x64_64(bytes: &[u8], seed: u32) -> u64 {
    let (h1, _) = mur3::murmurhash3_x64_128(bytes, seed);
    h1
}
