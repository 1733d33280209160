//! SHAKE-based duplex sponge implementation
//!
//! This module implements a duplex sponge construction using SHAKE128.

use crate::duplex_sponge::{DuplexSpongeInterface, IV_LEN};
use alloc::vec;
use alloc::vec::Vec;
use sha3::digest::{ExtendableOutput, Update};
use sha3::Shake128;

const SHAKE128_RATE: usize = 168;

/// Duplex sponge construction using SHAKE128.
#[derive(Clone, Debug)]
pub struct ShakeDuplexSponge(Shake128);

impl DuplexSpongeInterface for ShakeDuplexSponge {
    fn new(iv: [u8; IV_LEN]) -> Self {
        let mut hasher = Shake128::default();
        hasher.update(&iv);
        hasher.update(&[0u8; SHAKE128_RATE - IV_LEN]);
        Self(hasher)
    }

    fn absorb(&mut self, input: &[u8]) {
        self.0.update(input);
    }

    fn squeeze(&mut self, length: usize) -> Vec<u8> {
        let mut output = vec![0u8; length];
        self.0.clone().finalize_xof_into(&mut output);
        output
    }
}
