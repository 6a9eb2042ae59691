//! Crypto module — the symmetric keystream transform.
//!
//! Not an authenticated cipher: there is no integrity tag and no
//! diffusion. Whether the right key was used is inferred downstream
//! from whether the deciphered bytes parse as records.

pub mod keystream;

pub use keystream::{decrypt, encrypt};
