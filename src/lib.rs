//! Two fixed key blobs, embedded as Base64 text and decoded on demand.
//!
//! [`get`] picks the PBES2-encrypted PKCS#8 blob when asked for the
//! encryption variant and the plain PKCS#1 RSA key otherwise. The
//! [`inspect`] module describes what came out; [`sample`] holds the typed
//! constants that travel with the blobs.

pub mod error;
pub mod inspect;
pub mod payload;
pub mod sample;

pub use error::{Error, Result};
pub use payload::{decode_mime, get, Variant};
