//! Fiat-Shamir transformation for [`SigmaProtocol`]s.
//!
//! This module defines [`Nizk`], a generic non-interactive Sigma protocol wrapper,
//! based on applying the Fiat-Shamir heuristic using a codec.
//!
//! It transforms an interactive [`SigmaProtocol`] into a non-interactive one,
//! by deriving challenges deterministically from the public transcript
//! via a cryptographic sponge function (Codec):
//!
//! ```text
//! e = H(protocol id, session id, generators, images, commitment)
//! ```
//!
//! # Usage
//! This struct is generic over:
//! - `P`: the underlying Sigma protocol ([`SigmaProtocol`] trait).
//! - `C`: the codec deriving challenges ([`Codec`] trait).

use alloc::vec::Vec;
use core::marker::PhantomData;

use rand_core::{CryptoRng, RngCore};
use tracing::instrument;

use crate::codec::{Codec, KeccakByteSchnorrCodec};
use crate::errors::Error;
use crate::group::serialization::ensure_consumed;
use crate::schnorr_protocol::{ProofOfEquality, ProofOfKnowledge};
use crate::traits::SigmaProtocol;

/// A non-interactive proof `(commitment, response)`; the challenge is recomputed by the verifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NonInteractiveProof<C, R> {
    pub commitment: C,
    pub response: R,
}

/// A Fiat-Shamir transformation of a [`SigmaProtocol`] into a non-interactive proof.
///
/// [`Nizk`] wraps an interactive Sigma protocol `P`
/// and a hash-based codec `C`, to produce non-interactive proofs.
///
/// It manages the domain separation, proof generation, and proof verification.
///
/// # Type Parameters
/// - `P`: the Sigma protocol implementation.
/// - `C`: the codec used for Fiat-Shamir.
#[derive(Debug, Clone)]
pub struct Nizk<P, C> {
    /// Application-chosen bytes binding proofs to a context.
    pub session_id: Vec<u8>,
    /// Underlying interactive proof.
    pub interactive_proof: P,
    _codec: PhantomData<C>,
}

/// Non-interactive proof of knowledge of a discrete logarithm.
pub type NIProofOfKnowledge<G> = Nizk<ProofOfKnowledge<G>, KeccakByteSchnorrCodec<G>>;

/// Non-interactive proof of equality of two discrete logarithms.
pub type NIProofOfEquality<G> = Nizk<ProofOfEquality<G>, KeccakByteSchnorrCodec<G>>;

impl<P, C> Nizk<P, C>
where
    P: SigmaProtocol,
    C: Codec<Challenge = P::Challenge>,
{
    /// Constructs a new [`Nizk`] instance.
    ///
    /// # Parameters
    /// - `session_identifier`: Domain separation bytes (e.g., application name or context).
    /// - `interactive_proof`: An instance of the interactive Sigma protocol.
    pub fn new(session_identifier: &[u8], interactive_proof: P) -> Self {
        Self {
            session_id: session_identifier.to_vec(),
            interactive_proof,
            _codec: PhantomData,
        }
    }

    /// Derives the challenge for `commitment` from the public transcript.
    ///
    /// A pure function of the statement, the session identifier and the commitment:
    /// prover and verifier obtain the same value independently.
    pub fn challenge(&self, commitment: &P::Commitment) -> P::Challenge {
        let mut codec = C::new(
            &self.interactive_proof.protocol_identifier(),
            &self.session_id,
            &self.interactive_proof.instance_label(),
        );
        codec.prover_message(&self.interactive_proof.serialize_commitment(commitment));
        codec.verifier_challenge()
    }

    /// Generates a non-interactive proof.
    ///
    /// # Errors
    /// - Propagates [`SigmaProtocol::prover_commit`] failures on a malformed statement.
    #[instrument(skip_all, fields(session_len = self.session_id.len()))]
    pub fn prove(
        &self,
        witness: &P::Witness,
        rng: &mut (impl RngCore + CryptoRng),
    ) -> Result<NonInteractiveProof<P::Commitment, P::Response>, Error> {
        let (commitment, prover_state) = self.interactive_proof.prover_commit(witness, rng)?;
        let challenge = self.challenge(&commitment);
        let response = self
            .interactive_proof
            .prover_response(prover_state, &challenge);
        Ok(NonInteractiveProof {
            commitment,
            response,
        })
    }

    /// Verifies a non-interactive proof, recomputing its challenge.
    pub fn verify(&self, proof: &NonInteractiveProof<P::Commitment, P::Response>) -> bool {
        let challenge = self.challenge(&proof.commitment);
        self.interactive_proof
            .verifier(&proof.commitment, &challenge, &proof.response)
    }

    /// Encodes a proof as `commitment || response`.
    pub fn serialize_proof(
        &self,
        proof: &NonInteractiveProof<P::Commitment, P::Response>,
    ) -> Vec<u8> {
        let mut bytes = self.interactive_proof.serialize_commitment(&proof.commitment);
        bytes.extend(self.interactive_proof.serialize_response(&proof.response));
        bytes
    }

    /// Decodes a proof produced by [`Nizk::serialize_proof`].
    ///
    /// # Errors
    /// - [`Error::InvalidLength`] on missing or trailing bytes.
    /// - [`Error::InvalidPoint`] / [`Error::InvalidScalar`] on malformed fields.
    pub fn deserialize_proof(
        &self,
        data: &[u8],
    ) -> Result<NonInteractiveProof<P::Commitment, P::Response>, Error> {
        let mut cursor = data;
        let commitment = self.interactive_proof.deserialize_commitment(&mut cursor)?;
        let response = self.interactive_proof.deserialize_response(&mut cursor)?;
        ensure_consumed(cursor, data.len())?;
        Ok(NonInteractiveProof {
            commitment,
            response,
        })
    }

    /// Generates a serialized non-interactive proof.
    pub fn prove_batchable(
        &self,
        witness: &P::Witness,
        rng: &mut (impl RngCore + CryptoRng),
    ) -> Result<Vec<u8>, Error> {
        let proof = self.prove(witness, rng)?;
        Ok(self.serialize_proof(&proof))
    }

    /// Verifies a serialized non-interactive proof.
    ///
    /// # Returns
    /// - `Ok(true)` / `Ok(false)` for a well-formed encoding, accepted or rejected.
    ///
    /// # Errors
    /// - The decoding errors of [`Nizk::deserialize_proof`].
    pub fn verify_batchable(&self, narg_string: &[u8]) -> Result<bool, Error> {
        let proof = self.deserialize_proof(narg_string)?;
        Ok(self.verify(&proof))
    }
}
