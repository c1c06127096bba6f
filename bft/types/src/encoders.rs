use data_encoding::{Encoding, HEXUPPER_PERMISSIVE};

/// Describes a scheme for encoding bytes to strings.
pub trait Encoder {
    const NAME: &'static str;
    const ENCODING: Encoding;
    const PREFIX: &'static str;
}

// The hex encoders below render uppercase and accept either case when parsing.

/// Binary encoder for validator addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AddrEncoder;

impl Encoder for AddrEncoder {
    const ENCODING: Encoding = HEXUPPER_PERMISSIVE;
    const NAME: &str = "Addr";
    const PREFIX: &str = "";
}

/// Binary encoder for hashes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HashEncoder;

impl Encoder for HashEncoder {
    const ENCODING: Encoding = HEXUPPER_PERMISSIVE;
    const NAME: &str = "Hash";
    const PREFIX: &str = "";
}

/// Binary encoder for raw public key bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KeyEncoder;

impl Encoder for KeyEncoder {
    const ENCODING: Encoding = HEXUPPER_PERMISSIVE;
    const NAME: &str = "Key";
    const PREFIX: &str = "";
}
