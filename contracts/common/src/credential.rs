//! Secret comparison strategies used to gate record access.
//!
//! Contracts store a per-subject secret and ask a [`CredentialVerifier`]
//! whether a supplied value unlocks it. Only the comparison lives here;
//! storage of the secret stays with the owning contract.

use soroban_sdk::String;

/// Decides whether a supplied secret matches the stored one.
pub trait CredentialVerifier {
    fn verify(&self, stored: &String, supplied: &String) -> bool;
}

/// Byte-for-byte equality on the stored plaintext.
///
/// Case-sensitive, no trimming, no hashing. Not suitable for production
/// secrets.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlaintextVerifier;

impl CredentialVerifier for PlaintextVerifier {
    fn verify(&self, stored: &String, supplied: &String) -> bool {
        stored == supplied
    }
}
