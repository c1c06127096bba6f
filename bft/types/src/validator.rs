use {
    crate::{Addr, BorshDeExt, Hash160, HashExt, PublicKey, StdResult},
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
    std::{
        cmp::Ordering,
        fmt::{self, Display},
    },
};

/// A member of the validator set.
///
/// The identity fields (`address` and `public_key`) are fixed at creation.
/// `accum` and `last_commit_height` are the only fields that change over the
/// lifetime of a validator; `accum` is driven by the proposer selection of the
/// enclosing validator set.
///
/// `Validator` implements neither `PartialOrd` nor `Ord`. Rank validators with
/// [`Validator::compare_accum`]; their encoded bytes carry no ordering.
#[derive(
    Serialize, Deserialize, BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq, Hash,
)]
pub struct Validator {
    address: Addr,
    #[serde(rename = "pub_key")]
    public_key: PublicKey,
    last_commit_height: u64,
    voting_power: u64,
    accum: i64,
}

impl Validator {
    pub fn new(
        address: Addr,
        public_key: PublicKey,
        last_commit_height: u64,
        voting_power: u64,
        accum: i64,
    ) -> Self {
        Self {
            address,
            public_key,
            last_commit_height,
            voting_power,
            accum,
        }
    }

    /// Create a validator at genesis, with the address derived from the key,
    /// no committed height and an empty accumulator.
    pub fn from_public_key(public_key: PublicKey, voting_power: u64) -> Self {
        Self::new(public_key.address(), public_key, 0, voting_power, 0)
    }

    pub fn address(&self) -> Addr {
        self.address
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    pub fn last_commit_height(&self) -> u64 {
        self.last_commit_height
    }

    pub fn voting_power(&self) -> u64 {
        self.voting_power
    }

    pub fn accum(&self) -> i64 {
        self.accum
    }

    pub fn set_accum(&mut self, accum: i64) {
        self.accum = accum;
    }

    pub fn accum_mut(&mut self) -> &mut i64 {
        &mut self.accum
    }

    pub fn set_last_commit_height(&mut self, height: u64) {
        self.last_commit_height = height;
    }

    /// Create an independent copy of the validator, so that the accumulator
    /// can be mutated without touching the canonical set entry.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Copy a validator that the caller expects to exist.
    ///
    /// ## Panics
    ///
    /// Panics if `validator` is `None`.
    pub fn copy_of(validator: Option<&Validator>) -> Self {
        match validator {
            Some(validator) => validator.copy(),
            None => panic!("cannot copy a nil validator"),
        }
    }

    /// Return whichever of `self` and `other` has the higher priority.
    ///
    /// The higher `accum` wins. On equal `accum`, the lexicographically
    /// smaller address wins. The result does not depend on argument order.
    ///
    /// ## Panics
    ///
    /// Panics if both validators have the same `accum` and the same address.
    /// Addresses are unique within a set, so this can only happen when a
    /// validator is compared against a copy of itself.
    pub fn compare_accum<'a>(&'a self, other: &'a Validator) -> &'a Validator {
        match self.accum.cmp(&other.accum) {
            Ordering::Greater => self,
            Ordering::Less => other,
            Ordering::Equal => match self.address.cmp(&other.address) {
                Ordering::Less => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(
                        accum = self.accum,
                        winner = %self.address,
                        loser = %other.address,
                        "Accumulator tie broken by address"
                    );

                    self
                },
                Ordering::Greater => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(
                        accum = self.accum,
                        winner = %other.address,
                        loser = %self.address,
                        "Accumulator tie broken by address"
                    );

                    other
                },
                Ordering::Equal => {
                    #[cfg(feature = "tracing")]
                    tracing::error!(
                        address = %self.address,
                        accum = self.accum,
                        "Validator compared against itself"
                    );

                    panic!(
                        "cannot compare identical validators: address {}, accum {}",
                        self.address, self.accum
                    );
                },
            },
        }
    }

    /// Same as [`Validator::compare_accum`], but the current leader may be
    /// absent, in which case `other` wins unconditionally.
    pub fn compare_accum_opt<'a>(
        current: Option<&'a Validator>,
        other: &'a Validator,
    ) -> &'a Validator {
        match current {
            Some(current) => current.compare_accum(other),
            None => other,
        }
    }

    /// Find the validator with the highest priority among the given ones.
    /// Returns `None` if there are none.
    ///
    /// Accumulators are only read, never updated.
    pub fn highest_accum<'a, I>(validators: I) -> Option<&'a Validator>
    where
        I: IntoIterator<Item = &'a Validator>,
    {
        validators.into_iter().fold(None, |leader, validator| {
            Some(Self::compare_accum_opt(leader, validator))
        })
    }

    /// The canonical binary encoding of the validator: the address, the
    /// public key (tag and key bytes), then `last_commit_height`,
    /// `voting_power` and `accum` as little-endian fixed-width integers.
    pub fn encode(&self) -> Vec<u8> {
        let public_key = self.public_key.to_canonical_bytes();

        let mut bytes = Vec::with_capacity(Addr::LENGTH + public_key.len() + 24);
        bytes.extend_from_slice(self.address.as_ref());
        bytes.extend_from_slice(&public_key);
        bytes.extend_from_slice(&self.last_commit_height.to_le_bytes());
        bytes.extend_from_slice(&self.voting_power.to_le_bytes());
        bytes.extend_from_slice(&self.accum.to_le_bytes());
        bytes
    }

    /// Decode a validator from its canonical encoding. The input must contain
    /// exactly one validator and nothing else.
    pub fn decode(bytes: &[u8]) -> StdResult<Self> {
        bytes.deserialize_borsh()
    }

    /// The RIPEMD-160 digest of the canonical encoding.
    ///
    /// Every field is covered, including `accum`, so the hash changes
    /// whenever the accumulator does.
    pub fn hash(&self) -> Hash160 {
        self.encode().hash160()
    }
}

impl Display for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Validator{{{} {} {} VP:{} A:{}}}",
            self.address, self.public_key, self.last_commit_height, self.voting_power, self.accum
        )
    }
}

/// Displays a validator that may be absent, as `nil-Validator` if it is.
pub struct DisplayValidator<'a>(pub Option<&'a Validator>);

impl Display for DisplayValidator<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(validator) => Display::fmt(validator, f),
            None => f.write_str("nil-Validator"),
        }
    }
}

// ----------------------------------- tests -----------------------------------
