//! Encoding and hashing of public transcripts for the Fiat-Shamir transform.

use core::marker::PhantomData;

use ff::PrimeField;
use group::prime::PrimeGroup;
use num_bigint::BigUint;

pub use crate::duplex_sponge::keccak::KeccakDuplexSponge;
pub use crate::duplex_sponge::shake::ShakeDuplexSponge;
use crate::duplex_sponge::{DuplexSpongeInterface, IV_LEN};
use crate::group::field_cardinality;

/// A trait defining the behavior of a domain-separated codec hashing, which is typically used for [`crate::traits::SigmaProtocol`]s.
///
/// A codec is identified by a protocol identifier, a session identifier and an
/// instance label. It is then incremented with successive prover messages ("absorb") and
/// outputs challenges ("squeeze").
///
/// The output is deterministic for a given set of inputs. Thus, both Prover and Verifier can
/// run the codec on their side and obtain the same challenge.
///
/// ## Minimal Implementation
/// Types implementing [`Codec`] must define:
/// - `new`
/// - `prover_message`
/// - `verifier_challenge`
pub trait Codec {
    type Challenge;

    /// Generates a codec bound to a protocol, a session and a statement.
    fn new(protocol_id: &[u8; IV_LEN], session_id: &[u8], instance_label: &[u8]) -> Self;

    /// Absorbs a prover message into the codec.
    fn prover_message(&mut self, data: &[u8]);

    /// Produces a scalar that can be used as a challenge from the codec.
    fn verifier_challenge(&mut self) -> Self::Challenge;
}

/// A byte-level Schnorr codec that works with any duplex sponge.
///
/// Variable-length inputs (session identifier and instance label) are absorbed
/// with an 8-byte big-endian length prefix so that distinct inputs cannot collide
/// by shifting bytes from one field into the next. Prover messages have a width
/// fixed by the group and are absorbed as they are.
#[derive(Clone)]
pub struct ByteSchnorrCodec<G, H>
where
    G: PrimeGroup,
    H: DuplexSpongeInterface,
{
    hasher: H,
    _marker: PhantomData<G>,
}

impl<G, H> Codec for ByteSchnorrCodec<G, H>
where
    G: PrimeGroup,
    H: DuplexSpongeInterface,
{
    type Challenge = G::Scalar;

    fn new(protocol_id: &[u8; IV_LEN], session_id: &[u8], instance_label: &[u8]) -> Self {
        let mut hasher = H::new(*protocol_id);
        absorb_len_prefixed(&mut hasher, session_id);
        absorb_len_prefixed(&mut hasher, instance_label);
        Self {
            hasher,
            _marker: PhantomData,
        }
    }

    fn prover_message(&mut self, data: &[u8]) {
        self.hasher.absorb(data);
    }

    fn verifier_challenge(&mut self) -> G::Scalar {
        derive_challenge::<G::Scalar, H>(&mut self.hasher)
    }
}

/// Type alias for a Keccak-based ByteSchnorrCodec.
pub type KeccakByteSchnorrCodec<G> = ByteSchnorrCodec<G, KeccakDuplexSponge>;

/// Type alias for a SHAKE-based ByteSchnorrCodec.
pub type ShakeCodec<G> = ByteSchnorrCodec<G, ShakeDuplexSponge>;

/// Pads a human-readable protocol name into a sponge initialization vector.
///
/// Names longer than [`IV_LEN`] are truncated.
pub const fn protocol_id(name: &[u8]) -> [u8; IV_LEN] {
    let mut iv = [0u8; IV_LEN];
    let mut i = 0;
    while i < name.len() && i < IV_LEN {
        iv[i] = name[i];
        i += 1;
    }
    iv
}

// `usize` is at most 64 bits wide on every supported target, so the prefix is exact.
fn length_to_bytes(x: usize) -> [u8; 8] {
    (x as u64).to_be_bytes()
}

fn absorb_len_prefixed<H: DuplexSpongeInterface>(sponge: &mut H, data: &[u8]) {
    sponge.absorb(&length_to_bytes(data.len()));
    sponge.absorb(data);
}

/// Squeezes 16 bytes more than a scalar needs and reduces modulo `q`, so the bias
/// of the result is below 2^-128.
fn derive_challenge<F: PrimeField, H: DuplexSpongeInterface>(sponge: &mut H) -> F {
    let scalar_byte_length = (F::NUM_BITS as usize).div_ceil(8);
    let uniform_bytes = sponge.squeeze(scalar_byte_length + 16);
    let scalar = BigUint::from_bytes_be(&uniform_bytes);
    let reduced = scalar % field_cardinality::<F>();

    // Horner evaluation in the field: exact since `reduced < q`, and independent
    // of the byte order of `F::Repr`.
    let base = F::from(256u64);
    reduced
        .to_bytes_be()
        .iter()
        .fold(F::ZERO, |acc, &digit| acc * base + F::from(u64::from(digit)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bls12_381::{G1Projective as G, Scalar};

    const ID: [u8; IV_LEN] = protocol_id(b"codec-tests");

    #[test]
    fn identical_inputs_give_identical_challenges() {
        let mut prover = KeccakByteSchnorrCodec::<G>::new(&ID, b"session", b"statement");
        let mut verifier = KeccakByteSchnorrCodec::<G>::new(&ID, b"session", b"statement");
        prover.prover_message(b"commitment");
        verifier.prover_message(b"commitment");
        assert_eq!(prover.verifier_challenge(), verifier.verifier_challenge());
    }

    #[test]
    fn length_prefix_separates_session_from_label() {
        let mut a = KeccakByteSchnorrCodec::<G>::new(&ID, b"ab", b"c");
        let mut b = KeccakByteSchnorrCodec::<G>::new(&ID, b"a", b"bc");
        assert_ne!(a.verifier_challenge(), b.verifier_challenge());
    }

    #[test]
    fn inputs_are_absorbed_with_eight_byte_length_prefixes() {
        let mut codec = KeccakByteSchnorrCodec::<G>::new(&ID, b"session", b"statement");
        codec.prover_message(b"commitment");

        let mut sponge = KeccakDuplexSponge::new(ID);
        sponge.absorb(&7u64.to_be_bytes());
        sponge.absorb(b"session");
        sponge.absorb(&9u64.to_be_bytes());
        sponge.absorb(b"statement");
        sponge.absorb(b"commitment");

        let expected: Scalar = derive_challenge::<Scalar, _>(&mut sponge);
        assert_eq!(codec.verifier_challenge(), expected);
        assert_eq!(length_to_bytes(0x1_0000_0000), [0, 0, 0, 1, 0, 0, 0, 0]);
    }

    #[test]
    fn sponges_disagree() {
        let mut keccak = KeccakByteSchnorrCodec::<G>::new(&ID, b"s", b"l");
        let mut shake = ShakeCodec::<G>::new(&ID, b"s", b"l");
        let c1: Scalar = keccak.verifier_challenge();
        let c2: Scalar = shake.verifier_challenge();
        assert_ne!(c1, c2);
    }

    #[test]
    fn protocol_id_is_zero_padded() {
        assert_eq!(&ID[..11], b"codec-tests");
        assert!(ID[11..].iter().all(|&b| b == 0));
    }
}
