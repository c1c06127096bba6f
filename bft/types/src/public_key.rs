use {
    crate::{Addr, EncodedBytes, HashExt, KeyEncoder},
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
    std::fmt::{self, Display},
};

/// Raw public key bytes of a fixed length, in uppercase hex encoding.
pub type KeyBytes<const N: usize> = EncodedBytes<N, KeyEncoder>;

/// A validator's public key, tagged by signature scheme.
///
/// The canonical binary encoding is a one-byte scheme tag followed by the raw
/// key bytes:
///
/// | tag | scheme    | key bytes               |
/// | --- | --------- | ----------------------- |
/// | 0   | Ed25519   | 32                      |
/// | 1   | Secp256k1 | 33 (compressed SEC1)    |
#[derive(
    Serialize, Deserialize, BorshSerialize, BorshDeserialize, Debug, Clone, Copy, PartialEq, Eq, Hash,
)]
#[serde(rename_all = "snake_case")]
pub enum PublicKey {
    Ed25519(KeyBytes<32>),
    Secp256k1(KeyBytes<33>),
}

impl PublicKey {
    pub const ED25519_TAG: u8 = 0;
    pub const SECP256K1_TAG: u8 = 1;

    pub const fn ed25519(bytes: [u8; 32]) -> Self {
        Self::Ed25519(KeyBytes::from_inner(bytes))
    }

    pub const fn secp256k1(bytes: [u8; 33]) -> Self {
        Self::Secp256k1(KeyBytes::from_inner(bytes))
    }

    pub fn scheme(&self) -> &'static str {
        match self {
            PublicKey::Ed25519(_) => "ed25519",
            PublicKey::Secp256k1(_) => "secp256k1",
        }
    }

    pub fn tag(&self) -> u8 {
        match self {
            PublicKey::Ed25519(_) => Self::ED25519_TAG,
            PublicKey::Secp256k1(_) => Self::SECP256K1_TAG,
        }
    }

    /// The raw key bytes, without the scheme tag.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            PublicKey::Ed25519(bytes) => bytes.as_ref(),
            PublicKey::Secp256k1(bytes) => bytes.as_ref(),
        }
    }

    /// The canonical encoding: scheme tag followed by the raw key bytes.
    ///
    /// This is byte-for-byte the Borsh encoding of the key, built without
    /// going through a fallible writer.
    pub fn to_canonical_bytes(&self) -> Vec<u8> {
        let key = self.as_bytes();
        let mut bytes = Vec::with_capacity(1 + key.len());
        bytes.push(self.tag());
        bytes.extend_from_slice(key);
        bytes
    }

    /// Derive the validator address belonging to this key:
    ///
    /// ```plain
    /// address := ripemd160(tag | key_bytes)
    /// ```
    pub fn address(&self) -> Addr {
        Addr::from_inner(self.to_canonical_bytes().hash160().into_inner())
    }
}

impl Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PublicKey::Ed25519(bytes) => write!(f, "PubKeyEd25519{{{bytes}}}"),
            PublicKey::Secp256k1(bytes) => write!(f, "PubKeySecp256k1{{{bytes}}}"),
        }
    }
}

// ----------------------------------- tests -----------------------------------
