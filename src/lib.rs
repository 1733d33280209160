//! # sigma-dlog
//!
//! Sigma protocols for discrete logarithm statements over any prime-order group
//! implementing [`PrimeGroup`](::group::prime::PrimeGroup):
//!
//! | statement                         | interactive                      | Fiat-Shamir                        |
//! |-----------------------------------|----------------------------------|------------------------------------|
//! | `h = w·g`                         | [`ProofOfKnowledge`]             | [`NIProofOfKnowledge`]             |
//! | `h1 = w·g1 ∧ h2 = w·g2`           | [`ProofOfEquality`]              | [`NIProofOfEquality`]              |
//!
//! All four share one relation type, [`DlogRelation`], implementing
//! [`SigmaProtocol`]; the non-interactive forms wrap it in [`Nizk`], which
//! derives the challenge by hashing a fixed-width encoding of the statement and
//! the commitment with a Keccak duplex sponge.
//!
//! ```
//! # #[cfg(feature = "ristretto")] {
//! use curve25519_dalek::RistrettoPoint;
//! use sigma_dlog::{DlogGroup, Session};
//!
//! let mut rng = rand::thread_rng();
//! let group = DlogGroup::<RistrettoPoint, 2>::from_label(b"example").unwrap();
//! let session = Session::generate(group, &mut rng).unwrap();
//!
//! // Non-interactive proof of equality.
//! let proof = session.prove_non_interactive(b"example-session", &mut rng).unwrap();
//! assert!(session.nizk(b"example-session").verify_batchable(&proof).unwrap());
//!
//! // Interactive proof of equality.
//! let (commitment, committed) = session.prover().commit(&mut rng).unwrap();
//! let challenged = session.verifier().challenge(commitment, &mut rng);
//! let response = committed.respond(challenged.challenge());
//! assert!(challenged.verify(&response));
//! # }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod codec;
pub mod duplex_sponge;
pub mod errors;
pub mod fiat_shamir;
pub mod group;
pub mod interactive;
pub mod keys;
pub mod schnorr_protocol;
pub mod session;
pub mod traits;

pub use errors::Error;
pub use fiat_shamir::{NIProofOfEquality, NIProofOfKnowledge, NonInteractiveProof, Nizk};
pub use group::DlogGroup;
pub use interactive::InteractiveProof;
pub use keys::{PublicKey, Witness};
pub use schnorr_protocol::{DlogRelation, ProofOfEquality, ProofOfKnowledge};
pub use session::Session;
pub use traits::{SigmaProtocol, SigmaProtocolSimulator};
