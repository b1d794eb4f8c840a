//! Describes a decoded payload without decrypting anything.

use log::debug;
use rsa::pkcs1::DecodeRsaPrivateKey;
use rsa::pkcs8::der::asn1::OctetStringRef;
use rsa::pkcs8::der::{pem, Reader, SliceReader};
use rsa::pkcs8::spki::AlgorithmIdentifierRef;
use rsa::pkcs8::{LineEnding, ObjectIdentifier};
use rsa::traits::PublicKeyParts;
use rsa::RsaPrivateKey;
use serde_json::{json, Value};
use sha2::{Digest, Sha256};

use crate::error::Result;
use crate::payload::Variant;

const PBES2: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.5.13");
const PBKDF2: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.5.12");
const AES_256_CBC: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.16.840.1.101.3.4.1.42");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub variant: Variant,
    pub length: usize,
    /// Lowercase hex SHA-256 of the decoded bytes
    pub sha256: String,
    pub details: Details,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Details {
    Rsa {
        modulus_bits: usize,
        public_exponent: String,
    },
    Encrypted {
        algorithm: ObjectIdentifier,
        kdf: Option<ObjectIdentifier>,
        cipher: Option<ObjectIdentifier>,
        ciphertext_len: usize,
    },
}

impl Report {
    pub fn to_json(&self) -> Value {
        let details = match &self.details {
            Details::Rsa {
                modulus_bits,
                public_exponent,
            } => json!({
                "format": "PKCS#1",
                "modulus_bits": modulus_bits,
                "public_exponent": public_exponent,
            }),
            Details::Encrypted {
                algorithm,
                kdf,
                cipher,
                ciphertext_len,
            } => json!({
                "format": "PKCS#8 encrypted",
                "algorithm": oid_name(algorithm),
                "kdf": kdf.as_ref().map(oid_name),
                "cipher": cipher.as_ref().map(oid_name),
                "ciphertext_len": ciphertext_len,
            }),
        };
        json!({
            "variant": self.variant.name(),
            "length": self.length,
            "sha256": self.sha256,
            "details": details,
        })
    }
}

fn oid_name(oid: &ObjectIdentifier) -> String {
    if *oid == PBES2 {
        "PBES2".to_string()
    } else if *oid == PBKDF2 {
        "PBKDF2".to_string()
    } else if *oid == AES_256_CBC {
        "AES-256-CBC".to_string()
    } else {
        oid.to_string()
    }
}

/// RFC 7468 armor with the variant's label. The bytes are not re-encoded.
pub fn to_pem(variant: Variant, bytes: &[u8]) -> Result<String> {
    let armored = pem::encode_string(variant.pem_label(), LineEnding::LF, bytes)
        .map_err(rsa::pkcs8::der::Error::from)?;
    Ok(armored)
}

pub fn inspect(variant: Variant, bytes: &[u8]) -> Result<Report> {
    let details = match variant {
        Variant::Plain => rsa_details(bytes)?,
        Variant::Encrypted => encrypted_details(bytes)?,
    };
    debug!("Inspected {} payload: {:?}", variant, details);
    Ok(Report {
        variant,
        length: bytes.len(),
        sha256: hex::encode(Sha256::digest(bytes)),
        details,
    })
}

fn rsa_details(der: &[u8]) -> Result<Details> {
    let key = RsaPrivateKey::from_pkcs1_der(der)?;
    key.validate()?;
    Ok(Details::Rsa {
        modulus_bits: key.n().bits(),
        public_exponent: key.e().to_string(),
    })
}

fn encrypted_details(der: &[u8]) -> Result<Details> {
    let mut reader = SliceReader::new(der)?;
    let (algorithm, ciphertext) = reader.sequence(|seq| {
        let algorithm: AlgorithmIdentifierRef<'_> = seq.decode()?;
        let ciphertext: OctetStringRef<'_> = seq.decode()?;
        Ok((algorithm, ciphertext))
    })?;
    let (algorithm, ciphertext) = reader.finish((algorithm, ciphertext))?;

    // PBES2 parameters: SEQUENCE { keyDerivationFunc, encryptionScheme }
    let (kdf, cipher) = match algorithm.parameters {
        Some(params) if algorithm.oid == PBES2 => {
            let mut inner = SliceReader::new(params.value())?;
            let kdf: AlgorithmIdentifierRef<'_> = inner.decode()?;
            let cipher: AlgorithmIdentifierRef<'_> = inner.decode()?;
            let (kdf, cipher) = inner.finish((kdf, cipher))?;
            (Some(kdf.oid), Some(cipher.oid))
        }
        _ => (None, None),
    };

    Ok(Details::Encrypted {
        algorithm: algorithm.oid,
        kdf,
        cipher,
        ciphertext_len: ciphertext.as_bytes().len(),
    })
}
