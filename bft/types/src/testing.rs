use crate::{Addr, PublicKey, Validator};

impl PublicKey {
    /// Generate a mock Ed25519 public key for use in testing. The bytes are
    /// not necessarily a valid curve point.
    pub const fn mock(index: u8) -> Self {
        Self::ed25519([index; 32])
    }
}

impl Validator {
    /// Generate a mock validator for use in testing, with address
    /// `Addr::mock(index)`.
    pub fn mock(index: u8, voting_power: u64, accum: i64) -> Self {
        Self::new(
            Addr::mock(index),
            PublicKey::mock(index),
            0,
            voting_power,
            accum,
        )
    }
}
