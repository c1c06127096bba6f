use crate::{AddrEncoder, EncodedBytes};

/// A validator address.
///
/// Addresses are 20 bytes, derived from the validator's public key (see
/// [`PublicKey::address`](crate::PublicKey::address)), and rendered as
/// uppercase hex without a prefix. The derived `Ord` is the unsigned
/// byte-wise lexicographic order used to break accumulator ties.
pub type Addr = EncodedBytes<20, AddrEncoder>;

impl Addr {
    pub const fn from_array(array: [u8; 20]) -> Self {
        Self::from_inner(array)
    }

    /// Generate a mock address for use in testing.
    pub const fn mock(index: u8) -> Self {
        let mut bytes = [0; 20];
        bytes[19] = index;
        Self::from_inner(bytes)
    }
}

// ----------------------------------- tests -----------------------------------
