use crate::payload::Variant;

/// Everything the library can fail with.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The embedded text is not Base64 once whitespace is removed.
    #[error("failed to decode the {variant} payload: {source}")]
    Decode {
        variant: Variant,
        #[source]
        source: base64::DecodeError,
    },

    #[error("not a PKCS#1 RSA private key: {0}")]
    Pkcs1(#[from] rsa::pkcs1::Error),

    #[error("malformed DER: {0}")]
    Der(#[from] rsa::pkcs8::der::Error),

    #[error("RSA key rejected: {0}")]
    Rsa(#[from] rsa::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
