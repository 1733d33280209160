//! Witnesses and public keys.

use alloc::vec::Vec;
use core::fmt;

use group::prime::PrimeGroup;
use rand_core::{CryptoRng, RngCore};
use tracing::instrument;

use crate::errors::Error;
use crate::group::serialization::{
    deserialize_elements, ensure_consumed, group_elt_serialized_len, serialize_elements,
};
use crate::group::DlogGroup;

/// The secret discrete logarithm `w` known to the prover.
///
/// The value is never printed and never serialized by this crate.
#[derive(Clone, PartialEq, Eq)]
pub struct Witness<G: PrimeGroup>(G::Scalar);

impl<G: PrimeGroup> Witness<G> {
    pub fn new(scalar: G::Scalar) -> Self {
        Self(scalar)
    }

    /// The secret scalar.
    pub fn scalar(&self) -> &G::Scalar {
        &self.0
    }
}

impl<G: PrimeGroup> fmt::Debug for Witness<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Witness(<redacted>)")
    }
}

/// The published images `h_i = w · g_i` of a witness, one per generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PublicKey<G: PrimeGroup, const N: usize> {
    points: [G; N],
}

impl<G: PrimeGroup, const N: usize> PublicKey<G, N> {
    /// Wraps points received from elsewhere; validity is checked at verification.
    pub fn from_points(points: [G; N]) -> Self {
        Self { points }
    }

    /// Recomputes the public key of `witness` under `group`.
    pub fn derive(group: &DlogGroup<G, N>, witness: &Witness<G>) -> Self {
        Self {
            points: group.exponentiate(witness.scalar()),
        }
    }

    pub fn points(&self) -> &[G; N] {
        &self.points
    }

    /// Concatenated fixed-width encodings of `h_1 .. h_N`.
    pub fn to_bytes(&self) -> Vec<u8> {
        serialize_elements(&self.points)
    }

    /// Decodes a public key.
    ///
    /// # Errors
    /// - [`Error::InvalidLength`] if `data` is not exactly `N` point encodings long.
    /// - [`Error::InvalidPoint`] if an encoding is not a group element, or is the identity.
    pub fn from_bytes(data: &[u8]) -> Result<Self, Error> {
        let expected = N * group_elt_serialized_len::<G>();
        if data.len() != expected {
            return Err(Error::InvalidLength {
                expected,
                actual: data.len(),
            });
        }
        let mut cursor = data;
        let points = deserialize_elements::<G>(&mut cursor, N)?;
        ensure_consumed(cursor, data.len())?;
        if points.iter().any(|p| bool::from(p.is_identity())) {
            return Err(Error::InvalidPoint);
        }
        let points: [G; N] = points.try_into().map_err(|_| Error::InvalidPoint)?;
        Ok(Self { points })
    }
}

/// Draws a fresh witness and derives its public key.
///
/// The witness is uniform over the non-zero scalars, so the public key is never
/// the identity.
///
/// # Errors
/// - [`Error::InvalidGroup`] if the group's generators are invalid.
#[instrument(skip_all, fields(generators = N))]
pub fn generate<G: PrimeGroup, const N: usize>(
    group: &DlogGroup<G, N>,
    rng: &mut (impl RngCore + CryptoRng),
) -> Result<(Witness<G>, PublicKey<G, N>), Error> {
    group.validate()?;
    let witness = Witness::new(group.random_nonzero_scalar(rng));
    let public_key = PublicKey::derive(group, &witness);
    Ok((witness, public_key))
}
