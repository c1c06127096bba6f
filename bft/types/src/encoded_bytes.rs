use {
    crate::{Encoder, StdError, StdResult},
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{de, ser},
    std::{
        fmt::{self, Debug, Display},
        io,
        marker::PhantomData,
        ops::Deref,
        str::FromStr,
    },
};

/// A fixed-length byte array that encodes itself into a string with a
/// specific encoding scheme.
///
/// In the binary (Borsh) encoding the array is written as exactly `N` raw
/// bytes, without a length prefix, so that every value of a given type has
/// the same encoded size.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EncodedBytes<const N: usize, E>
where
    E: Encoder,
{
    bytes: [u8; N],
    encoder: PhantomData<E>,
}

impl<const N: usize, E> EncodedBytes<N, E>
where
    E: Encoder,
{
    pub const LENGTH: usize = N;

    pub const fn from_inner(bytes: [u8; N]) -> Self {
        Self {
            bytes,
            encoder: PhantomData,
        }
    }

    pub fn into_inner(self) -> [u8; N] {
        self.bytes
    }
}

impl<const N: usize, E> TryFrom<&[u8]> for EncodedBytes<N, E>
where
    E: Encoder,
{
    type Error = StdError;

    fn try_from(slice: &[u8]) -> StdResult<Self> {
        slice
            .try_into()
            .map(Self::from_inner)
            .map_err(|_| StdError::incorrect_length::<Self>(N, slice.len()))
    }
}

impl<const N: usize, E> TryFrom<Vec<u8>> for EncodedBytes<N, E>
where
    E: Encoder,
{
    type Error = StdError;

    fn try_from(vec: Vec<u8>) -> StdResult<Self> {
        vec.as_slice().try_into()
    }
}

impl<const N: usize, E> AsRef<[u8]> for EncodedBytes<N, E>
where
    E: Encoder,
{
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl<const N: usize, E> Deref for EncodedBytes<N, E>
where
    E: Encoder,
{
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.bytes
    }
}

impl<const N: usize, E> Display for EncodedBytes<N, E>
where
    E: Encoder,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", E::PREFIX, E::ENCODING.encode(&self.bytes))
    }
}

impl<const N: usize, E> Debug for EncodedBytes<N, E>
where
    E: Encoder,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}({}{})",
            E::NAME,
            E::PREFIX,
            E::ENCODING.encode(&self.bytes)
        )
    }
}

impl<const N: usize, E> FromStr for EncodedBytes<N, E>
where
    E: Encoder,
{
    type Err = StdError;

    fn from_str(s: &str) -> StdResult<Self> {
        let Some(stripped) = s.strip_prefix(E::PREFIX) else {
            return Err(StdError::deserialize::<Self, _>(
                E::NAME,
                format!("missing prefix: expecting `{}`", E::PREFIX),
            ));
        };

        E::ENCODING.decode(stripped.as_bytes())?.try_into()
    }
}

impl<const N: usize, E> ser::Serialize for EncodedBytes<N, E>
where
    E: Encoder,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de, const N: usize, E> de::Deserialize<'de> for EncodedBytes<N, E>
where
    E: Encoder,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_str(Visitor::<N, E>(PhantomData))
    }
}

struct Visitor<const N: usize, E>(PhantomData<E>);

impl<const N: usize, E> de::Visitor<'_> for Visitor<N, E>
where
    E: Encoder,
{
    type Value = EncodedBytes<N, E>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a {N}-byte array in {} encoding", E::NAME)
    }

    fn visit_str<Err>(self, value: &str) -> Result<Self::Value, Err>
    where
        Err: de::Error,
    {
        Self::Value::from_str(value).map_err(Err::custom)
    }
}

impl<const N: usize, E> BorshSerialize for EncodedBytes<N, E>
where
    E: Encoder,
{
    fn serialize<W>(&self, writer: &mut W) -> io::Result<()>
    where
        W: io::Write,
    {
        writer.write_all(&self.bytes)
    }
}

impl<const N: usize, E> BorshDeserialize for EncodedBytes<N, E>
where
    E: Encoder,
{
    fn deserialize_reader<R>(reader: &mut R) -> io::Result<Self>
    where
        R: io::Read,
    {
        let mut bytes = [0; N];
        reader.read_exact(&mut bytes)?;

        Ok(Self::from_inner(bytes))
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {
        crate::{
            BorshDeExt, BorshSerExt, EncodedBytes, HashEncoder, JsonDeExt, JsonSerExt, ResultExt,
        },
        std::str::FromStr,
    };

    type Bytes4 = EncodedBytes<4, HashEncoder>;

    #[test]
    fn borsh_has_no_length_prefix() {
        let bytes = Bytes4::from_inner([0xde, 0xad, 0xbe, 0xef]);

        bytes
            .to_borsh_vec()
            .should_succeed_and_equal(vec![0xde_u8, 0xad, 0xbe, 0xef])
            .deserialize_borsh::<Bytes4>()
            .should_succeed_and_equal(bytes);

        // too short
        [0xde_u8, 0xad]
            .deserialize_borsh::<Bytes4>()
            .should_fail_with_error("failed to deserialize! codec: borsh");
    }

    #[test]
    fn string_encoding() {
        let bytes = Bytes4::from_inner([0xde, 0xad, 0xbe, 0xef]);

        assert_eq!(bytes.to_string(), "DEADBEEF");
        assert_eq!(format!("{bytes:?}"), "Hash(DEADBEEF)");

        bytes
            .to_json_string()
            .should_succeed_and_equal("\"DEADBEEF\"")
            .deserialize_json::<Bytes4>()
            .should_succeed_and_equal(bytes);

        Bytes4::from_str("DEADBE").should_fail_with_error("incorrect length");
        Bytes4::from_str("deadbeef").should_succeed_and_equal(bytes);
        Bytes4::from_str("NOTHEX!!").should_fail();
    }
}
