//! Implementation of the Schnorr Sigma Protocol over a [`group::prime::PrimeGroup`].
//!
//! This module defines the [`DlogRelation`] structure, which implements a Sigma
//! protocol proving that one secret scalar `w` is the discrete logarithm of every
//! `h_i` in base `g_i`:
//!
//! - with `N = 1`, knowledge of a discrete logarithm (Schnorr);
//! - with `N = 2`, equality of two discrete logarithms (Chaum-Pedersen).
//!
//! Both share one nonce `r`, one challenge `e` and one response `z = r + e·w`;
//! the verifier checks `z·g_i == a_i + e·h_i` for every `i`.

use alloc::vec::Vec;
use core::array;

use ff::Field;
use group::prime::PrimeGroup;
use rand_core::{CryptoRng, RngCore};
use tracing::instrument;

use crate::codec::protocol_id;
use crate::duplex_sponge::IV_LEN;
use crate::errors::Error;
use crate::group::serialization::{
    deserialize_elements, deserialize_scalars, serialize_elements, serialize_scalars,
};
use crate::group::DlogGroup;
use crate::keys::{PublicKey, Witness};
use crate::traits::{SigmaProtocol, SigmaProtocolSimulator};

/// Statement that a single witness is the discrete logarithm of each image in
/// base of the corresponding generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DlogRelation<G: PrimeGroup, const N: usize> {
    generators: [G; N],
    images: [G; N],
}

/// Proof of knowledge of `w` such that `h = w·g`.
pub type ProofOfKnowledge<G> = DlogRelation<G, 1>;

/// Proof that `h1 = w·g1` and `h2 = w·g2` for the same `w`.
pub type ProofOfEquality<G> = DlogRelation<G, 2>;

/// Secret state kept by the prover between commitment and response.
///
/// Neither `Clone` nor `Copy`: answering two challenges with one nonce reveals the
/// witness, so the state is consumed by the single response it can produce.
pub struct ProverState<G: PrimeGroup> {
    nonce: G::Scalar,
    witness: G::Scalar,
}

impl<G: PrimeGroup> core::fmt::Debug for ProverState<G> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("ProverState(<redacted>)")
    }
}

impl<G: PrimeGroup> DlogRelation<G, 1> {
    /// The statement `h = w·g`.
    pub fn knowledge(generator: G, image: G) -> Self {
        Self::new([generator], [image])
    }
}

impl<G: PrimeGroup> DlogRelation<G, 2> {
    /// The statement `h1 = w·g1 ∧ h2 = w·g2`.
    pub fn equality(generators: [G; 2], images: [G; 2]) -> Self {
        Self::new(generators, images)
    }
}

impl<G: PrimeGroup, const N: usize> DlogRelation<G, N> {
    /// Builds the statement from raw points. Nothing is validated here: provers
    /// refuse invalid statements, verifiers reject them.
    pub fn new(generators: [G; N], images: [G; N]) -> Self {
        Self { generators, images }
    }

    /// The statement proven by the holder of `public_key` under `group`.
    pub fn from_public_key(group: &DlogGroup<G, N>, public_key: &PublicKey<G, N>) -> Self {
        Self::new(*group.generators(), *public_key.points())
    }

    pub fn generators(&self) -> &[G; N] {
        &self.generators
    }

    pub fn images(&self) -> &[G; N] {
        &self.images
    }

    /// Whether the statement has at least one equation and every generator and
    /// image is a usable group element.
    pub fn is_well_formed(&self) -> bool {
        let identity = |p: &G| bool::from(p.is_identity());
        N > 0 && !self.generators.iter().any(identity) && !self.images.iter().any(identity)
    }

    fn evaluate(&self, scalar: &G::Scalar) -> [G; N] {
        self.generators.map(|g| g * scalar)
    }
}

impl<G: PrimeGroup, const N: usize> SigmaProtocol for DlogRelation<G, N> {
    type Commitment = [G; N];
    type ProverState = ProverState<G>;
    type Response = G::Scalar;
    type Witness = Witness<G>;
    type Challenge = G::Scalar;

    /// Prover's first message: `a_i = r·g_i` for a fresh nonce `r`.
    ///
    /// # Errors
    /// - [`Error::InvalidGroup`] if there are no generators, or one is the identity.
    /// - [`Error::InvalidPoint`] if an image is the identity.
    #[instrument(skip_all, fields(relations = N))]
    fn prover_commit(
        &self,
        witness: &Self::Witness,
        rng: &mut (impl RngCore + CryptoRng),
    ) -> Result<(Self::Commitment, Self::ProverState), Error> {
        let group = DlogGroup::new(self.generators)?;
        if self.images.iter().any(|h| !group.is_valid_point(h)) {
            return Err(Error::InvalidPoint);
        }

        let nonce = group.random_scalar(rng);
        let commitment = self.evaluate(&nonce);
        let state = ProverState {
            nonce,
            witness: *witness.scalar(),
        };
        Ok((commitment, state))
    }

    /// A challenge drawn uniformly from `[0, q)`.
    fn verifier_challenge(&self, rng: &mut (impl RngCore + CryptoRng)) -> Self::Challenge {
        G::Scalar::random(&mut *rng)
    }

    /// `z = r + e·w mod q`.
    #[instrument(skip_all)]
    fn prover_response(
        &self,
        state: Self::ProverState,
        challenge: &Self::Challenge,
    ) -> Self::Response {
        let ProverState { nonce, witness } = state;
        nonce + witness * challenge
    }

    /// Accepts iff there is at least one equation, every generator and image is
    /// valid, and `z·g_i == a_i + e·h_i` for all `i`.
    ///
    /// Every check is evaluated and the results are AND-ed.
    fn verifier(
        &self,
        commitment: &Self::Commitment,
        challenge: &Self::Challenge,
        response: &Self::Response,
    ) -> bool {
        let well_formed = self.is_well_formed();
        let lhs = self.evaluate(response);
        let equations = lhs
            .iter()
            .zip(commitment.iter().zip(self.images.iter()))
            .fold(true, |acc, (z_g, (a, h))| {
                acc & (*z_g == *a + *h * challenge)
            });
        well_formed & equations
    }

    fn serialize_commitment(&self, commitment: &Self::Commitment) -> Vec<u8> {
        serialize_elements(commitment)
    }

    fn serialize_challenge(&self, challenge: &Self::Challenge) -> Vec<u8> {
        serialize_scalars(&[*challenge])
    }

    fn serialize_response(&self, response: &Self::Response) -> Vec<u8> {
        serialize_scalars(&[*response])
    }

    fn deserialize_commitment(&self, data: &mut &[u8]) -> Result<Self::Commitment, Error> {
        let elements = deserialize_elements::<G>(data, N)?;
        Ok(array::from_fn(|i| elements[i]))
    }

    fn deserialize_challenge(&self, data: &mut &[u8]) -> Result<Self::Challenge, Error> {
        let scalars = deserialize_scalars::<G::Scalar>(data, 1)?;
        Ok(scalars[0])
    }

    fn deserialize_response(&self, data: &mut &[u8]) -> Result<Self::Response, Error> {
        let scalars = deserialize_scalars::<G::Scalar>(data, 1)?;
        Ok(scalars[0])
    }

    fn protocol_identifier(&self) -> [u8; IV_LEN] {
        match N {
            1 => protocol_id(b"sigma-dlog/v1/proof-of-knowledge"),
            2 => protocol_id(b"sigma-dlog/v1/proof-of-equality"),
            _ => protocol_id(b"sigma-dlog/v1/dlog-relation"),
        }
    }

    /// Generators followed by images: `g, h` or `g1, g2, h1, h2`.
    fn instance_label(&self) -> Vec<u8> {
        serialize_elements(self.generators.iter().chain(self.images.iter()))
    }
}

impl<G: PrimeGroup, const N: usize> SigmaProtocolSimulator for DlogRelation<G, N> {
    fn simulate_response(&self, rng: &mut (impl RngCore + CryptoRng)) -> Self::Response {
        G::Scalar::random(&mut *rng)
    }

    /// `a_i = z·g_i − e·h_i`.
    fn simulate_commitment(
        &self,
        challenge: &Self::Challenge,
        response: &Self::Response,
    ) -> Self::Commitment {
        let response_image = self.evaluate(response);
        array::from_fn(|i| response_image[i] - self.images[i] * challenge)
    }

    fn simulate_transcript(
        &self,
        rng: &mut (impl RngCore + CryptoRng),
    ) -> (Self::Commitment, Self::Challenge, Self::Response) {
        let challenge = self.verifier_challenge(&mut *rng);
        let response = self.simulate_response(&mut *rng);
        let commitment = self.simulate_commitment(&challenge, &response);
        (commitment, challenge, response)
    }
}
