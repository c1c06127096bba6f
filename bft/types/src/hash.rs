use crate::{EncodedBytes, HashEncoder};

/// A hash of a fixed length, in uppercase hex encoding.
pub type Hash<const N: usize> = EncodedBytes<N, HashEncoder>;

/// A 20-byte RIPEMD-160 digest. Addresses and the Merkle leaves of a
/// validator set are of this size.
pub type Hash160 = Hash<20>;

impl<const N: usize> Hash<N> {
    pub const fn from_array(array: [u8; N]) -> Self {
        Self::from_inner(array)
    }
}
