use bls12_381::G1Projective;
use curve25519_dalek::RistrettoPoint;
use group::Group;
use rand::thread_rng;
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha20Rng;

use sigma_dlog::keys::{self, PublicKey, Witness};
use sigma_dlog::{DlogGroup, Error, NIProofOfEquality, ProofOfEquality, Session};

#[test]
fn generated_keys_satisfy_the_relation() {
    let mut rng = thread_rng();
    let group = DlogGroup::<RistrettoPoint, 2>::from_label(b"session-tests").unwrap();
    let (witness, public_key) = keys::generate(&group, &mut rng).unwrap();

    let [g1, g2] = *group.generators();
    assert_eq!(*public_key.points(), [g1 * witness.scalar(), g2 * witness.scalar()]);
    assert_eq!(PublicKey::derive(&group, &witness), public_key);
    assert!(public_key.points().iter().all(|h| group.is_valid_point(h)));
}

#[test]
fn key_generation_is_deterministic_under_a_seeded_rng() {
    let group = DlogGroup::<G1Projective, 1>::standard();
    let (w1, pk1) = keys::generate(&group, &mut ChaCha20Rng::seed_from_u64(7)).unwrap();
    let (w2, pk2) = keys::generate(&group, &mut ChaCha20Rng::seed_from_u64(7)).unwrap();
    assert_eq!(w1, w2);
    assert_eq!(pk1, pk2);
}

#[test]
fn witness_is_not_printed() {
    let mut rng = thread_rng();
    let group = DlogGroup::<G1Projective, 1>::standard();
    let session = Session::generate(group, &mut rng).unwrap();
    let (witness, _) = keys::generate(&group, &mut rng).unwrap();

    assert_eq!(format!("{witness:?}"), "Witness(<redacted>)");
    assert!(format!("{session:?}").contains("Witness(<redacted>)"));
}

#[test]
fn invalid_groups_are_refused() {
    let g = RistrettoPoint::generator();
    assert!(matches!(
        DlogGroup::new([g, g]),
        Err(Error::InvalidGroup { .. })
    ));
    assert!(matches!(
        DlogGroup::new([RistrettoPoint::identity()]),
        Err(Error::InvalidGroup { .. })
    ));
}

#[test]
fn interactive_session_flow() {
    let mut rng = thread_rng();
    let group = DlogGroup::<G1Projective, 2>::new([
        G1Projective::generator(),
        G1Projective::random(&mut rng),
    ])
    .unwrap();
    let session = Session::generate(group, &mut rng).unwrap();

    let (commitment, committed) = session.prover().commit(&mut rng).unwrap();
    let challenged = session.verifier().challenge(commitment, &mut rng);
    let response = committed.respond(challenged.challenge());
    assert!(challenged.verify(&response));
}

#[test]
fn non_interactive_session_flow() {
    let mut rng = thread_rng();
    let group = DlogGroup::<RistrettoPoint, 2>::from_label(b"session-tests").unwrap();
    let session = Session::generate(group, &mut rng).unwrap();
    let bytes = session.prove_non_interactive(b"login", &mut rng).unwrap();

    // A verifier that only learned the group and the public key.
    let relation = ProofOfEquality::from_public_key(&group, session.public_key());
    let verifier = NIProofOfEquality::new(b"login", relation);
    assert_eq!(verifier.verify_batchable(&bytes), Ok(true));

    let other_context = NIProofOfEquality::new(b"logout", relation);
    assert_eq!(other_context.verify_batchable(&bytes), Ok(false));
}

#[test]
fn session_from_existing_witness() {
    let mut rng = thread_rng();
    let group = DlogGroup::<RistrettoPoint, 1>::standard();
    let witness = Witness::<RistrettoPoint>::new(curve25519_dalek::Scalar::from(42u64));
    let session = Session::from_witness(group, witness).unwrap();

    assert_eq!(
        session.public_key().points()[0],
        RistrettoPoint::generator() * curve25519_dalek::Scalar::from(42u64)
    );
    let nizk = session.nizk(b"existing");
    let same_witness = Witness::new(curve25519_dalek::Scalar::from(42u64));
    let proof = nizk.prove_batchable(&same_witness, &mut rng).unwrap();
    assert_eq!(nizk.verify_batchable(&proof), Ok(true));
    assert_eq!(session.relation(), &nizk.interactive_proof);
}
