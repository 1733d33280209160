//! The three-move exchange between an interactive prover and verifier.
//!
//! Each role is a small state machine whose transitions consume the previous
//! state, so that the compiler enforces the order `commit → challenge → respond`
//! and a commitment can be answered at most once:
//!
//! ```text
//! Prover::commit ──► Committed::respond
//!        │                  ▲
//!        ▼                  │
//! Verifier::challenge ──► Challenged::verify
//! ```

use alloc::vec::Vec;

use rand_core::{CryptoRng, RngCore};

use crate::errors::Error;
use crate::group::serialization::ensure_consumed;
use crate::traits::SigmaProtocol;

/// A full interactive transcript `(commitment, challenge, response)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InteractiveProof<C, E, R> {
    pub commitment: C,
    pub challenge: E,
    pub response: R,
}

/// Prover role, holding the statement and the witness.
pub struct Prover<'a, P: SigmaProtocol> {
    protocol: &'a P,
    witness: &'a P::Witness,
}

/// A prover that has sent its commitment and waits for the challenge.
pub struct Committed<'a, P: SigmaProtocol> {
    protocol: &'a P,
    state: P::ProverState,
}

/// Verifier role, holding only the statement.
pub struct Verifier<'a, P: SigmaProtocol> {
    protocol: &'a P,
}

/// A verifier that has received a commitment and issued its challenge.
pub struct Challenged<'a, P: SigmaProtocol> {
    protocol: &'a P,
    commitment: P::Commitment,
    challenge: P::Challenge,
}

impl<'a, P: SigmaProtocol> Prover<'a, P> {
    pub fn new(protocol: &'a P, witness: &'a P::Witness) -> Self {
        Self { protocol, witness }
    }

    /// Draws a fresh nonce and returns the commitment to send.
    pub fn commit(
        &self,
        rng: &mut (impl RngCore + CryptoRng),
    ) -> Result<(P::Commitment, Committed<'a, P>), Error> {
        let (commitment, state) = self.protocol.prover_commit(self.witness, rng)?;
        let committed = Committed {
            protocol: self.protocol,
            state,
        };
        Ok((commitment, committed))
    }
}

impl<P: SigmaProtocol> Committed<'_, P> {
    /// Answers the verifier's challenge. The nonce is consumed.
    pub fn respond(self, challenge: &P::Challenge) -> P::Response {
        self.protocol.prover_response(self.state, challenge)
    }
}

impl<'a, P: SigmaProtocol> Verifier<'a, P> {
    pub fn new(protocol: &'a P) -> Self {
        Self { protocol }
    }

    /// Records the commitment and draws a challenge independent of it.
    pub fn challenge(
        self,
        commitment: P::Commitment,
        rng: &mut (impl RngCore + CryptoRng),
    ) -> Challenged<'a, P> {
        let challenge = self.protocol.verifier_challenge(rng);
        Challenged {
            protocol: self.protocol,
            commitment,
            challenge,
        }
    }
}

impl<P: SigmaProtocol> Challenged<'_, P> {
    /// The challenge to send to the prover.
    pub fn challenge(&self) -> &P::Challenge {
        &self.challenge
    }

    /// Checks the prover's response against the recorded commitment and challenge.
    pub fn verify(self, response: &P::Response) -> bool {
        self.protocol.verifier(&self.commitment, &self.challenge, response)
    }

    /// The complete transcript, for later re-verification with [`verify()`](crate::interactive::verify).
    pub fn into_proof(
        self,
        response: P::Response,
    ) -> InteractiveProof<P::Commitment, P::Challenge, P::Response> {
        InteractiveProof {
            commitment: self.commitment,
            challenge: self.challenge,
            response,
        }
    }
}

/// Runs the whole exchange locally: commit, verifier-random challenge, respond.
pub fn prove<P: SigmaProtocol>(
    protocol: &P,
    witness: &P::Witness,
    rng: &mut (impl RngCore + CryptoRng),
) -> Result<InteractiveProof<P::Commitment, P::Challenge, P::Response>, Error> {
    let (commitment, committed) = Prover::new(protocol, witness).commit(&mut *rng)?;
    let challenged = Verifier::new(protocol).challenge(commitment, &mut *rng);
    let response = committed.respond(challenged.challenge());
    Ok(challenged.into_proof(response))
}

/// Checks an interactive transcript.
pub fn verify<P: SigmaProtocol>(
    protocol: &P,
    proof: &InteractiveProof<P::Commitment, P::Challenge, P::Response>,
) -> bool {
    protocol.verifier(&proof.commitment, &proof.challenge, &proof.response)
}

impl<C, E, R> InteractiveProof<C, E, R> {
    /// Encodes the transcript as `commitment || challenge || response`.
    pub fn to_bytes<P>(&self, protocol: &P) -> Vec<u8>
    where
        P: SigmaProtocol<Commitment = C, Challenge = E, Response = R>,
    {
        let mut bytes = protocol.serialize_commitment(&self.commitment);
        bytes.extend(protocol.serialize_challenge(&self.challenge));
        bytes.extend(protocol.serialize_response(&self.response));
        bytes
    }

    /// Decodes a transcript produced by [`InteractiveProof::to_bytes`].
    ///
    /// # Errors
    /// - [`Error::InvalidLength`] on missing or trailing bytes.
    /// - [`Error::InvalidPoint`] / [`Error::InvalidScalar`] on malformed fields.
    pub fn from_bytes<P>(protocol: &P, data: &[u8]) -> Result<Self, Error>
    where
        P: SigmaProtocol<Commitment = C, Challenge = E, Response = R>,
    {
        let mut cursor = data;
        let commitment = protocol.deserialize_commitment(&mut cursor)?;
        let challenge = protocol.deserialize_challenge(&mut cursor)?;
        let response = protocol.deserialize_response(&mut cursor)?;
        ensure_consumed(cursor, data.len())?;
        Ok(Self {
            commitment,
            challenge,
            response,
        })
    }
}
