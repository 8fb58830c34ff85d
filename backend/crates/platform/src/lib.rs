//! Platform - Cryptographic primitives shared by the backend crates
//!
//! Domain-agnostic building blocks:
//! - `password` - Argon2id hashing/verification with zeroized cleartext
//! - `crypto` - CSPRNG helpers

pub mod crypto;
pub mod password;
