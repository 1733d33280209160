use bls12_381::G1Projective;
use curve25519_dalek::RistrettoPoint;
use group::Group;
use hex_literal::hex;
use rand::thread_rng;

use sigma_dlog::interactive::{self, InteractiveProof};
use sigma_dlog::keys::{self, PublicKey};
use sigma_dlog::{DlogGroup, Error, NIProofOfKnowledge, ProofOfEquality, ProofOfKnowledge};

const SESSION: &[u8] = b"serialization-tests";

fn bls_nipok() -> (NIProofOfKnowledge<G1Projective>, Vec<u8>) {
    let mut rng = thread_rng();
    let group = DlogGroup::<G1Projective, 1>::standard();
    let (witness, public_key) = keys::generate(&group, &mut rng).unwrap();
    let relation = ProofOfKnowledge::from_public_key(&group, &public_key);
    let nizk = NIProofOfKnowledge::new(SESSION, relation);
    let bytes = nizk.prove_batchable(&witness, &mut rng).unwrap();
    (nizk, bytes)
}

#[test]
fn non_interactive_proof_roundtrip() {
    let (nizk, bytes) = bls_nipok();
    assert_eq!(bytes.len(), 48 + 32);

    let proof = nizk.deserialize_proof(&bytes).unwrap();
    assert_eq!(nizk.serialize_proof(&proof), bytes);
    assert!(nizk.verify(&proof));
}

#[test]
fn interactive_proof_roundtrip() {
    let mut rng = thread_rng();
    let group = DlogGroup::<RistrettoPoint, 2>::from_label(b"serialization-tests").unwrap();
    let (witness, public_key) = keys::generate(&group, &mut rng).unwrap();
    let protocol = ProofOfEquality::from_public_key(&group, &public_key);
    let proof = interactive::prove(&protocol, &witness, &mut rng).unwrap();

    let bytes = proof.to_bytes(&protocol);
    assert_eq!(bytes.len(), 2 * 32 + 32 + 32);

    let decoded = InteractiveProof::from_bytes(&protocol, &bytes).unwrap();
    assert_eq!(decoded, proof);
    assert!(interactive::verify(&protocol, &decoded));
}

#[test]
fn truncated_proof_is_rejected() {
    let (nizk, bytes) = bls_nipok();
    assert_eq!(
        nizk.deserialize_proof(&bytes[..79]),
        Err(Error::InvalidLength {
            expected: 32,
            actual: 31
        })
    );
    assert!(matches!(
        nizk.verify_batchable(&bytes[..10]),
        Err(Error::InvalidLength { .. })
    ));
    assert!(matches!(
        nizk.verify_batchable(&[]),
        Err(Error::InvalidLength { .. })
    ));
}

#[test]
fn trailing_bytes_are_rejected() {
    let (nizk, mut bytes) = bls_nipok();
    bytes.push(0);
    assert_eq!(
        nizk.verify_batchable(&bytes),
        Err(Error::InvalidLength {
            expected: 80,
            actual: 81
        })
    );
}

#[test]
fn invalid_point_is_rejected() {
    let (nizk, mut bytes) = bls_nipok();
    bytes[..48].fill(0xff);
    assert_eq!(nizk.verify_batchable(&bytes), Err(Error::InvalidPoint));
}

#[test]
fn unreduced_scalar_is_rejected() {
    let (nizk, mut bytes) = bls_nipok();
    bytes[48..].fill(0xff);
    assert_eq!(nizk.verify_batchable(&bytes), Err(Error::InvalidScalar));
}

#[test]
fn non_canonical_ristretto_point_is_rejected() {
    let group = DlogGroup::<RistrettoPoint, 1>::standard();
    let protocol = ProofOfKnowledge::from_public_key(
        &group,
        &PublicKey::from_points([RistrettoPoint::generator()]),
    );
    let mut bytes = vec![0xffu8; 32];
    bytes.extend_from_slice(&[0u8; 64]);
    assert_eq!(
        InteractiveProof::from_bytes(&protocol, &bytes),
        Err(Error::InvalidPoint)
    );
}

#[test]
fn public_key_roundtrip() {
    let mut rng = thread_rng();
    let group = DlogGroup::<RistrettoPoint, 2>::from_label(b"serialization-tests").unwrap();
    let (_, public_key) = keys::generate(&group, &mut rng).unwrap();

    let bytes = public_key.to_bytes();
    assert_eq!(bytes.len(), 64);
    assert_eq!(PublicKey::<RistrettoPoint, 2>::from_bytes(&bytes), Ok(public_key));
}

#[test]
fn public_key_encoding_of_the_generator() {
    let public_key = PublicKey::from_points([RistrettoPoint::generator()]);
    assert_eq!(
        public_key.to_bytes(),
        hex!("e2f2ae0a6abc4e71a884a961c500515f58e30b6aa582dd8db6a65945e08d2d76")
    );
}

#[test]
fn public_key_rejects_identity_and_bad_lengths() {
    let identity = RistrettoPoint::identity();
    let bytes = PublicKey::from_points([identity]).to_bytes();
    assert_eq!(
        PublicKey::<RistrettoPoint, 1>::from_bytes(&bytes),
        Err(Error::InvalidPoint)
    );

    let generator = PublicKey::from_points([G1Projective::generator()]).to_bytes();
    assert_eq!(
        PublicKey::<G1Projective, 1>::from_bytes(&generator[..47]),
        Err(Error::InvalidLength {
            expected: 48,
            actual: 47
        })
    );
}
