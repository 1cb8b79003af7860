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

use bloomset::bloom::BloomFilter;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Bloom Filter Example ===\n");

    let mut filter = match BloomFilter::new(10, 0.01) {
        Ok(filter) => filter,
        Err(err) => {
            eprintln!("failed to create filter: {err}");
            return;
        }
    };
    println!(
        "Sized for {} keys at {:.2}% FPP: {} bits, {} hashes",
        filter.capacity(),
        filter.false_positive_rate() * 100.0,
        filter.num_bits(),
        filter.num_hashes()
    );

    for key in ["hello123", "hello456"] {
        match filter.add(key) {
            Ok(()) => println!("Added {key}!"),
            Err(err) => println!("Could not add {key}: {err}"),
        }
    }

    for key in ["hello123", "hello789"] {
        if filter.contains(key) {
            println!("{key} may be present!");
        } else {
            println!("{key} not present");
        }
    }

    println!("\nSize: {}, bits used: {}", filter.size(), filter.bits_used());
    println!("Estimated FPP: {:.6}", filter.estimated_fpp());
}
