//! Generic interface for 3-message Sigma protocols.
//!
//! This module defines the [`SigmaProtocol`] and [`SigmaProtocolSimulator`] traits,
//! used to describe interactive zero-knowledge proofs of knowledge,
//! such as Schnorr proofs, that follow the 3-message Sigma protocol structure.

use alloc::vec::Vec;

use rand_core::{CryptoRng, RngCore};

use crate::duplex_sponge::IV_LEN;
use crate::errors::Error;

/// A trait defining the behavior of a generic Sigma protocol.
///
/// A Sigma protocol is a 3-message proof protocol where a prover can convince
/// a verifier of knowledge of a witness for a given public statement
/// without revealing the witness.
///
/// ## Associated Types
/// - `Commitment`: The prover's initial commitment.
/// - `ProverState`: The prover's internal state needed to compute a response.
///   It is consumed by [`SigmaProtocol::prover_response`], so one commitment
///   yields at most one response.
/// - `Response`: The prover's response to a verifier's challenge.
/// - `Witness`: The prover's secret knowledge.
/// - `Challenge`: The verifier's challenge value.
///
/// ## Serialization
/// Each message has a fixed-width encoding, used both on the wire and as
/// Fiat-Shamir hash input.
///
/// ## Identification
/// To allow transcript hash binding and protocol distinction,
/// implementors must provide:
/// - `protocol_identifier` — A fixed byte identifier of the protocol.
/// - `instance_label` — A canonical encoding of the statement being proven.
pub trait SigmaProtocol {
    type Commitment;
    type ProverState;
    type Response;
    type Witness;
    type Challenge;

    /// First step of the protocol. Given the witness and RNG, this generates:
    /// - A public commitment to send to the verifier.
    /// - The internal state to use when computing the response.
    fn prover_commit(
        &self,
        witness: &Self::Witness,
        rng: &mut (impl RngCore + CryptoRng),
    ) -> Result<(Self::Commitment, Self::ProverState), Error>;

    /// Second step, on the verifier side: a challenge drawn independently of the commitment.
    fn verifier_challenge(&self, rng: &mut (impl RngCore + CryptoRng)) -> Self::Challenge;

    /// Computes the prover's response to a challenge, consuming the prover state.
    fn prover_response(&self, state: Self::ProverState, challenge: &Self::Challenge)
        -> Self::Response;

    /// Final step of the protocol: whether the commitment, challenge, and response
    /// form an accepting transcript for this statement.
    fn verifier(
        &self,
        commitment: &Self::Commitment,
        challenge: &Self::Challenge,
        response: &Self::Response,
    ) -> bool;

    /// Serializes a commitment to bytes.
    fn serialize_commitment(&self, commitment: &Self::Commitment) -> Vec<u8>;

    /// Serializes a challenge to bytes.
    fn serialize_challenge(&self, challenge: &Self::Challenge) -> Vec<u8>;

    /// Serializes a response to bytes.
    fn serialize_response(&self, response: &Self::Response) -> Vec<u8>;

    /// Deserializes a commitment from the front of `data`, advancing it.
    fn deserialize_commitment(&self, data: &mut &[u8]) -> Result<Self::Commitment, Error>;

    /// Deserializes a challenge from the front of `data`, advancing it.
    fn deserialize_challenge(&self, data: &mut &[u8]) -> Result<Self::Challenge, Error>;

    /// Deserializes a response from the front of `data`, advancing it.
    fn deserialize_response(&self, data: &mut &[u8]) -> Result<Self::Response, Error>;

    fn protocol_identifier(&self) -> [u8; IV_LEN];

    fn instance_label(&self) -> Vec<u8>;
}

/// A trait defining the behavior of a Sigma protocol for which simulation of transcripts is necessary.
///
/// Every Sigma protocol can be simulated; an accepting simulated transcript,
/// produced without the witness, is what honest-verifier zero-knowledge means.
///
/// ## Minimal Implementation
/// Types implementing [`SigmaProtocolSimulator`] must define:
/// - `simulate_response`
/// - `simulate_commitment`
/// - `simulate_transcript`
#[allow(clippy::type_complexity)]
pub trait SigmaProtocolSimulator: SigmaProtocol {
    /// Generates a random response.
    fn simulate_response(&self, rng: &mut (impl RngCore + CryptoRng)) -> Self::Response;

    /// Simulates a commitment for which (`commitment`, `challenge`, `response`) is a valid transcript.
    fn simulate_commitment(
        &self,
        challenge: &Self::Challenge,
        response: &Self::Response,
    ) -> Self::Commitment;

    /// Generates a full simulated proof transcript (commitment, challenge, response)
    /// without requiring knowledge of a witness.
    fn simulate_transcript(
        &self,
        rng: &mut (impl RngCore + CryptoRng),
    ) -> (Self::Commitment, Self::Challenge, Self::Response);
}
