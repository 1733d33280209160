use group::prime::PrimeGroup;

/// Domain separation tag for generator derivation.
pub const GENERATOR_DST: &[u8] = b"sigma-dlog-v1-generators";

/// A group with a hash function onto its elements.
///
/// Points obtained this way have no known discrete logarithm relative to each
/// other, which is what a proof of equality needs from its two generators.
pub trait HashToGroup: PrimeGroup {
    /// Maps `msg` to a group element.
    fn hash_to_group(msg: &[u8]) -> Self;
}

#[cfg(feature = "ristretto")]
impl HashToGroup for curve25519_dalek::RistrettoPoint {
    fn hash_to_group(msg: &[u8]) -> Self {
        use sha2::{Digest, Sha512};

        let mut hasher = Sha512::new();
        hasher.update(GENERATOR_DST);
        hasher.update(msg);
        curve25519_dalek::RistrettoPoint::from_hash(hasher)
    }
}

#[cfg(feature = "bls12_381")]
impl HashToGroup for bls12_381::G1Projective {
    /// Try-and-increment over compressed x-coordinates, then cofactor clearing.
    fn hash_to_group(msg: &[u8]) -> Self {
        use bls12_381::G1Affine;
        use sha2::{Digest, Sha512};

        let mut counter = 0u32;
        loop {
            let digest = Sha512::new()
                .chain_update(GENERATOR_DST)
                .chain_update(msg)
                .chain_update(counter.to_be_bytes())
                .finalize();
            let mut bytes = [0u8; 48];
            bytes.copy_from_slice(&digest[..48]);
            // Compression flag set, infinity flag clear, sort flag from the digest.
            bytes[0] = (bytes[0] & 0x1f) | 0x80 | (digest[48] & 0x20);

            let candidate: Option<G1Affine> = G1Affine::from_compressed_unchecked(&bytes).into();
            if let Some(point) = candidate {
                let point = Self::from(point).clear_cofactor();
                if !bool::from(point.is_identity()) {
                    return point;
                }
            }
            counter += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::DlogGroup;
    use group::Group;

    #[cfg(feature = "ristretto")]
    #[test]
    fn labelled_generators_are_deterministic_and_distinct() {
        let a = DlogGroup::<curve25519_dalek::RistrettoPoint, 2>::from_label(b"test").unwrap();
        let b = DlogGroup::<curve25519_dalek::RistrettoPoint, 2>::from_label(b"test").unwrap();
        let c = DlogGroup::<curve25519_dalek::RistrettoPoint, 2>::from_label(b"other").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        let [g1, g2] = *a.generators();
        assert_ne!(g1, g2);
        assert_ne!(g1, curve25519_dalek::RistrettoPoint::generator());
    }

    #[cfg(feature = "bls12_381")]
    #[test]
    fn bls_generators_are_in_the_prime_order_subgroup() {
        use bls12_381::{G1Affine, G1Projective};

        let group = DlogGroup::<G1Projective, 2>::from_label(b"test").unwrap();
        for g in group.generators() {
            assert!(bool::from(G1Affine::from(g).is_torsion_free()));
            assert!(!bool::from(g.is_identity()));
        }
        assert_ne!(group.generators()[0], G1Projective::generator());
    }
}
