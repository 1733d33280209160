//! Explicit ownership of the material shared by one prover and its verifiers.

use alloc::vec::Vec;

use group::prime::PrimeGroup;
use rand_core::{CryptoRng, RngCore};

use crate::codec::KeccakByteSchnorrCodec;
use crate::errors::Error;
use crate::fiat_shamir::Nizk;
use crate::group::DlogGroup;
use crate::interactive::{Prover, Verifier};
use crate::keys::{self, PublicKey, Witness};
use crate::schnorr_protocol::DlogRelation;

/// A group, a witness, its public key, and the statement they define.
///
/// The witness stays inside the session; verifier-side handles only see the
/// statement.
#[derive(Clone, Debug)]
pub struct Session<G: PrimeGroup, const N: usize> {
    group: DlogGroup<G, N>,
    witness: Witness<G>,
    public_key: PublicKey<G, N>,
    relation: DlogRelation<G, N>,
}

impl<G: PrimeGroup, const N: usize> Session<G, N> {
    /// Generates a fresh key pair over `group`.
    ///
    /// # Errors
    /// - [`Error::InvalidGroup`] if the group's generators are invalid.
    pub fn generate(
        group: DlogGroup<G, N>,
        rng: &mut (impl RngCore + CryptoRng),
    ) -> Result<Self, Error> {
        let (witness, public_key) = keys::generate(&group, rng)?;
        Ok(Self::assemble(group, witness, public_key))
    }

    /// Wraps an existing witness.
    ///
    /// # Errors
    /// - [`Error::InvalidGroup`] if the group's generators are invalid.
    pub fn from_witness(group: DlogGroup<G, N>, witness: Witness<G>) -> Result<Self, Error> {
        group.validate()?;
        let public_key = PublicKey::derive(&group, &witness);
        Ok(Self::assemble(group, witness, public_key))
    }

    fn assemble(group: DlogGroup<G, N>, witness: Witness<G>, public_key: PublicKey<G, N>) -> Self {
        let relation = DlogRelation::from_public_key(&group, &public_key);
        Self {
            group,
            witness,
            public_key,
            relation,
        }
    }

    pub fn group(&self) -> &DlogGroup<G, N> {
        &self.group
    }

    pub fn public_key(&self) -> &PublicKey<G, N> {
        &self.public_key
    }

    pub fn relation(&self) -> &DlogRelation<G, N> {
        &self.relation
    }

    /// The interactive prover role.
    pub fn prover(&self) -> Prover<'_, DlogRelation<G, N>> {
        Prover::new(&self.relation, &self.witness)
    }

    /// The interactive verifier role.
    pub fn verifier(&self) -> Verifier<'_, DlogRelation<G, N>> {
        Verifier::new(&self.relation)
    }

    /// The non-interactive protocol for this statement, bound to `session_id`.
    pub fn nizk(&self, session_id: &[u8]) -> Nizk<DlogRelation<G, N>, KeccakByteSchnorrCodec<G>> {
        Nizk::new(session_id, self.relation)
    }

    /// Proves non-interactively and returns the encoded proof.
    pub fn prove_non_interactive(
        &self,
        session_id: &[u8],
        rng: &mut (impl RngCore + CryptoRng),
    ) -> Result<Vec<u8>, Error> {
        self.nizk(session_id).prove_batchable(&self.witness, rng)
    }
}
