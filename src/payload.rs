//! The two embedded key blobs and the flag that picks between them.

use std::fmt;

use base64::prelude::*;
use log::debug;

use crate::error::{Error, Result};

/// PKCS#1 RSA private key, unwrapped standard Base64.
pub const PLAIN_KEY_BASE64: &str = concat!(
    "MIIBOgIBAAJBAL1/hJjtuMbjbVXo6wYT1SxiROOvwgffVSvOAk5aN2d4wYTC25k3",
    "sklfpdwxvkjh4iGB6/qC+0RbmiLwaXaQT0ECAwEAAQJAeAlQyza6t3HVDnhud/kU",
    "LftJvBjXhfkYkJj8qPlI40dn/Tnwe6mywfly6hOvAn4TRBsnB/Eln6hJLmCrDvZv",
    "yQIhAPf7Uma4/Aqgoz3SfPyz9TaQXyD5JSC3ej7cOH7b3hgTAiEAw6AYhc/UKh8i",
    "IAPYGK15ImVmXAlxmhFD6xCWx9bcTdsCIQDiqOayWZaWKCnNEh2H5PzW+LLasp9K",
    "/ilQV32UBmdD3QIgbafQFzHoO7Q37Lo655pVzHIKbozcoQAMkjc6TcqiswECIBvX",
    "LFj5jkNs4iSqphZo8eISUdol/9Zo/dkrHC41kbYJ",
);

/// PKCS#8 encrypted private key, MIME Base64 wrapped at 64 columns.
pub const ENCRYPTED_KEY_BASE64: &str = concat!(
    "MIIBvTBXBgkqhkiG9w0BBQ0wSjApBgkqhkiG9w0BBQwwHAQIT0gWHcAV1rACAggA\n",
    "MAwGCCqGSIb3DQIJBQAwHQYJYIZIAWUDBAEqBBBaZ0qE6fJsz9rDPoa2esruBIIB\n",
    "YF9QvKgDLA15MgXR8P73DRdrDJzEEoYe7bDtk+vnTzy6DNVwSfkgQLNLpKfnjPO3\n",
    "b1szG5md06Fai6Tuuc9kKDhaCWfGgw/xAeb4OEjWupyCUvmyWYBNqCC+DDQZb7cc\n",
    "ka4cuIRV7Ty0I/3AdGCZ/g4mDBozjtfLkLOvWzRuKXQYvGlPYd0HUWupKn2Sgduy\n",
    "rwKt43zq0j+t9UXMMFVYv7RZOzZruVcUkBKHoYDkgOl9OQ5tGE+atfhLZUVUKj4Q\n",
    "7F+o6mlTy0JHxv94oUadDXJCyzivdes2RxabPDJ+1gEfNW8ZRZtselC+Pdy+KBIt\n",
    "Ln3f3FEWXpWbNPRzhElOUUaNgRNOQrmxoE09QxWLt8L3soArRfWe732Nw7N9izpU\n",
    "uKmL72bzbpetDQu/sn49CEnWcFGCZQ9inSiEogF0e2ncxnKfthRKzpT3K5JGiqcM\n",
    "mbcMoz5WjLks//PgWcZ/l2o=\n",
);

/// Which of the two embedded payloads to hand out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Plain,
    Encrypted,
}

impl Variant {
    pub fn from_encryption(encryption: bool) -> Variant {
        if encryption {
            Variant::Encrypted
        } else {
            Variant::Plain
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Variant::Plain => "plain",
            Variant::Encrypted => "encrypted",
        }
    }

    /// The embedded text exactly as stored, line breaks included.
    pub fn encoded(self) -> &'static str {
        match self {
            Variant::Plain => PLAIN_KEY_BASE64,
            Variant::Encrypted => ENCRYPTED_KEY_BASE64,
        }
    }

    pub fn pem_label(self) -> &'static str {
        match self {
            Variant::Plain => "RSA PRIVATE KEY",
            Variant::Encrypted => "ENCRYPTED PRIVATE KEY",
        }
    }

    pub fn decode(self) -> Result<Vec<u8>> {
        let bytes = decode_mime(self.encoded()).map_err(|source| Error::Decode {
            variant: self,
            source,
        })?;
        debug!("Decoded {} payload into {} bytes", self, bytes.len());
        Ok(bytes)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Standard-alphabet Base64 decoding that ignores any whitespace in `text`.
///
/// Anything else outside the alphabet is an error; nothing is skipped or
/// substituted.
pub fn decode_mime(text: &str) -> std::result::Result<Vec<u8>, base64::DecodeError> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    BASE64_STANDARD.decode(compact)
}

/// Decoded payload B when `encryption` is set, payload A otherwise.
pub fn get(encryption: bool) -> Result<Vec<u8>> {
    Variant::from_encryption(encryption).decode()
}
