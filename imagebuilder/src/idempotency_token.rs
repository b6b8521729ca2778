/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::sync::Mutex;

/// Formats 128 random bits as a version 4 UUID
///
/// The version nibble and the variant bits overwrite the corresponding input bits.
pub(crate) fn uuid_v4(input: u128) -> String {
    let mut out = String::with_capacity(36);
    // u4-aligned index into [input]
    let mut rnd_idx: u8 = 0;
    const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

    for str_idx in 0..36 {
        if str_idx == 8 || str_idx == 13 || str_idx == 18 || str_idx == 23 {
            out.push('-');
        // UUID version character
        } else if str_idx == 14 {
            out.push('4');
        } else {
            let mut dat: u8 = ((input >> (rnd_idx * 4)) & 0x0F) as u8;
            // UUID variant bits
            if str_idx == 19 {
                dat = (dat & 0b0011) | 0b1000;
            }
            rnd_idx += 1;
            out.push(HEX_CHARS[dat as usize] as char);
        }
    }
    out
}

/// Source of `clientToken` values for operations that carry an idempotency token
///
/// Closures returning a `String` implement this trait, which is useful to make tokens
/// deterministic in tests.
pub trait MakeIdempotencyToken: Send + Sync {
    fn make_idempotency_token(&self) -> String;
}

/// Random UUIDv4 tokens from a `fastrand` generator
pub fn default_provider() -> impl MakeIdempotencyToken {
    RandomTokens {
        rng: Mutex::new(fastrand::Rng::new()),
    }
}

struct RandomTokens {
    rng: Mutex<fastrand::Rng>,
}

impl MakeIdempotencyToken for RandomTokens {
    fn make_idempotency_token(&self) -> String {
        let input: u128 = self.rng.lock().unwrap().u128(..);
        uuid_v4(input)
    }
}

impl<T> MakeIdempotencyToken for T
where
    T: Fn() -> String + Send + Sync,
{
    fn make_idempotency_token(&self) -> String {
        self()
    }
}

#[cfg(test)]
mod test {
    use super::{default_provider, uuid_v4, MakeIdempotencyToken};
    use proptest::prelude::*;

    #[test]
    fn formats_known_inputs() {
        assert_eq!(uuid_v4(0), "00000000-0000-4000-8000-000000000000");
        assert_eq!(uuid_v4(u128::MAX), "ffffffff-ffff-4fff-bfff-ffffffffffff");
    }

    #[test]
    fn variant_nibble_is_10xx() {
        // input nibble 15 lands on the variant character
        assert_eq!(&uuid_v4(0xc_u128 << 60)[19..20], "8");
        assert_eq!(&uuid_v4(0x7_u128 << 60)[19..20], "b");
    }

    #[test]
    fn random_tokens_differ() {
        let provider = default_provider();
        assert_ne!(
            provider.make_idempotency_token(),
            provider.make_idempotency_token()
        );
    }

    proptest! {
        #[test]
        fn always_a_version_4_uuid(input: u128) {
            let uuid = uuid_v4(input);
            prop_assert_eq!(uuid.len(), 36);
            prop_assert_eq!(&uuid[14..15], "4");
            prop_assert!(["8", "9", "a", "b"].contains(&&uuid[19..20]));
            prop_assert_eq!(uuid.matches('-').count(), 4);
        }
    }
}
