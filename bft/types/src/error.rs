use {data_encoding::DecodeError, std::any::type_name};

#[derive(Debug, Clone, thiserror::Error)]
pub enum StdError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("incorrect length for {ty}: expecting {expect}, found {actual}")]
    IncorrectLength {
        ty: &'static str,
        expect: usize,
        actual: usize,
    },

    #[error("duplicate data found! type: {ty}, key: {key}")]
    DuplicateData { ty: &'static str, key: String },

    #[error("failed to serialize! codec: {codec}, type: {ty}, reason: {reason}")]
    Serialize {
        codec: &'static str,
        ty: &'static str,
        reason: String,
    },

    #[error("failed to deserialize! codec: {codec}, type: {ty}, reason: {reason}")]
    Deserialize {
        codec: &'static str,
        ty: &'static str,
        reason: String,
    },
}

impl StdError {
    pub fn incorrect_length<T>(expect: usize, actual: usize) -> Self {
        Self::IncorrectLength {
            ty: type_name::<T>(),
            expect,
            actual,
        }
    }

    pub fn duplicate_data<T, K>(key: K) -> Self
    where
        K: ToString,
    {
        Self::DuplicateData {
            ty: type_name::<T>(),
            key: key.to_string(),
        }
    }

    pub fn serialize<T, R>(codec: &'static str, reason: R) -> Self
    where
        R: ToString,
    {
        Self::Serialize {
            codec,
            ty: type_name::<T>(),
            reason: reason.to_string(),
        }
    }

    pub fn deserialize<T, R>(codec: &'static str, reason: R) -> Self
    where
        R: ToString,
    {
        Self::Deserialize {
            codec,
            ty: type_name::<T>(),
            reason: reason.to_string(),
        }
    }
}

pub type StdResult<T> = core::result::Result<T, StdError>;
