//! The algebraic context shared by prover and verifier.
//!
//! A [`DlogGroup`] fixes a prime-order group `G` (through its type) together with
//! the `N` generators a statement is expressed over: one for proofs of knowledge,
//! two for proofs of equality.

/// Derivation of generators with unknown mutual discrete logarithms.
pub mod hash_to_group;

/// Implementation of batch serialization functions for scalars and points.
pub mod serialization;

use alloc::format;
use alloc::vec::Vec;
use core::array;

use ff::{Field, PrimeField};
use group::prime::PrimeGroup;
use num_bigint::BigUint;
use num_traits::identities::One;
use rand_core::{CryptoRng, RngCore};

use crate::errors::Error;
use hash_to_group::HashToGroup;

/// Order `q` of the scalar field `F`, as an integer.
pub fn field_cardinality<F: PrimeField>() -> BigUint {
    let bytes = (F::ZERO - F::ONE).to_repr();
    BigUint::from_bytes_le(bytes.as_ref()) + BigUint::one()
}

/// A prime-order group together with `N` validated generators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DlogGroup<G: PrimeGroup, const N: usize> {
    generators: [G; N],
}

impl<G: PrimeGroup> DlogGroup<G, 1> {
    /// The group with its conventional generator.
    pub fn standard() -> Self {
        Self {
            generators: [G::generator()],
        }
    }
}

impl<G: PrimeGroup, const N: usize> DlogGroup<G, N> {
    /// Builds a group context from caller-supplied generators.
    ///
    /// # Errors
    /// - [`Error::InvalidGroup`] if a generator is the identity or two generators coincide.
    pub fn new(generators: [G; N]) -> Result<Self, Error> {
        let group = Self { generators };
        group.validate()?;
        Ok(group)
    }

    /// Derives `N` generators by hashing `label` and an index into the group.
    ///
    /// Nobody, including the caller, learns the discrete logarithm of one generator
    /// with respect to another.
    pub fn from_label(label: &[u8]) -> Result<Self, Error>
    where
        G: HashToGroup,
    {
        let generators = array::from_fn(|i| {
            let mut msg = Vec::with_capacity(label.len() + 4);
            msg.extend_from_slice(label);
            msg.extend_from_slice(&(i as u32).to_be_bytes());
            G::hash_to_group(&msg)
        });
        Self::new(generators)
    }

    /// Checks the generators: there is at least one, none is the identity and
    /// all are pairwise distinct.
    pub fn validate(&self) -> Result<(), Error> {
        if N == 0 {
            return Err(Error::invalid_group("at least one generator is required"));
        }
        for (i, g) in self.generators.iter().enumerate() {
            if !self.is_valid_point(g) {
                return Err(Error::invalid_group(format!("generator {i} is the identity")));
            }
            if self.generators[..i].contains(g) {
                return Err(Error::invalid_group(format!("generator {i} is repeated")));
            }
        }
        Ok(())
    }

    /// The group order `q`.
    pub fn order(&self) -> BigUint {
        field_cardinality::<G::Scalar>()
    }

    /// The first generator.
    pub fn generator(&self) -> G {
        self.generators[0]
    }

    /// All generators, in statement order.
    pub fn generators(&self) -> &[G; N] {
        &self.generators
    }

    /// Whether `point` may stand as a generator or public key.
    ///
    /// Membership in the prime-order group is guaranteed by the type `G` and by
    /// [`GroupEncoding::from_bytes`](group::GroupEncoding::from_bytes) when decoding;
    /// what remains to reject is the identity, which carries no discrete logarithm
    /// relation at all.
    pub fn is_valid_point(&self, point: &G) -> bool {
        !bool::from(point.is_identity())
    }

    /// A scalar drawn uniformly from `[0, q)`.
    pub fn random_scalar(&self, rng: &mut (impl RngCore + CryptoRng)) -> G::Scalar {
        G::Scalar::random(rng)
    }

    /// A scalar drawn uniformly from `[1, q)`.
    pub fn random_nonzero_scalar(&self, rng: &mut (impl RngCore + CryptoRng)) -> G::Scalar {
        loop {
            let candidate = G::Scalar::random(&mut *rng);
            if !bool::from(candidate.is_zero()) {
                break candidate;
            }
        }
    }

    /// `scalar · g_i` for every generator.
    pub fn exponentiate(&self, scalar: &G::Scalar) -> [G; N] {
        self.generators.map(|g| g * scalar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bls12_381::{G1Projective as G, Scalar};
    use group::Group;

    #[test]
    fn order_matches_bls12_381_modulus() {
        let q = BigUint::parse_bytes(
            b"73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001",
            16,
        )
        .unwrap();
        assert_eq!(DlogGroup::<G, 1>::standard().order(), q);
    }

    #[test]
    fn identity_generator_is_rejected() {
        let result = DlogGroup::new([G::generator(), G::identity()]);
        assert!(matches!(result, Err(Error::InvalidGroup { .. })));
    }

    #[test]
    fn empty_generator_list_is_rejected() {
        let result = DlogGroup::<G, 0>::new([]);
        assert!(matches!(result, Err(Error::InvalidGroup { .. })));
    }

    #[test]
    fn repeated_generator_is_rejected() {
        let result = DlogGroup::new([G::generator(), G::generator()]);
        assert!(matches!(result, Err(Error::InvalidGroup { .. })));
    }

    #[test]
    fn exponentiate_uses_every_generator() {
        let g2 = G::generator() * Scalar::from(7u64);
        let group = DlogGroup::new([G::generator(), g2]).unwrap();
        let [h1, h2] = group.exponentiate(&Scalar::from(3u64));
        assert_eq!(h1, G::generator() * Scalar::from(3u64));
        assert_eq!(h2, G::generator() * Scalar::from(21u64));
    }
}
