use {
    crate::{StdError, StdResult},
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{de::DeserializeOwned, ser::Serialize},
};

// ----------------------------------- json ------------------------------------

/// JSON is the human-readable form, used for genesis files and RPC output.
pub trait JsonSerExt {
    fn to_json_string(&self) -> StdResult<String>;
}

impl<T> JsonSerExt for T
where
    T: Serialize,
{
    fn to_json_string(&self) -> StdResult<String> {
        serde_json::to_string(self).map_err(|err| StdError::serialize::<T, _>("json", err))
    }
}

pub trait JsonDeExt {
    fn deserialize_json<D>(self) -> StdResult<D>
    where
        D: DeserializeOwned;
}

impl<T> JsonDeExt for &T
where
    T: AsRef<[u8]> + ?Sized,
{
    fn deserialize_json<D>(self) -> StdResult<D>
    where
        D: DeserializeOwned,
    {
        serde_json::from_slice(self.as_ref())
            .map_err(|err| StdError::deserialize::<D, _>("json", err))
    }
}

// ----------------------------------- borsh -----------------------------------

/// Borsh is the canonical binary form. Fixed-width fields are written without
/// length prefixes, so a validator always encodes to the same bytes.
pub trait BorshSerExt {
    fn to_borsh_vec(&self) -> StdResult<Vec<u8>>;
}

impl<T> BorshSerExt for T
where
    T: BorshSerialize,
{
    fn to_borsh_vec(&self) -> StdResult<Vec<u8>> {
        borsh::to_vec(self).map_err(|err| StdError::serialize::<T, _>("borsh", err))
    }
}

/// Decoding must consume the whole input. Truncated input and trailing bytes
/// are both errors.
pub trait BorshDeExt {
    fn deserialize_borsh<D>(self) -> StdResult<D>
    where
        D: BorshDeserialize;
}

impl<T> BorshDeExt for &T
where
    T: AsRef<[u8]> + ?Sized,
{
    fn deserialize_borsh<D>(self) -> StdResult<D>
    where
        D: BorshDeserialize,
    {
        borsh::from_slice(self.as_ref()).map_err(|err| StdError::deserialize::<D, _>("borsh", err))
    }
}

// ----------------------------------- tests -----------------------------------
