mod address;
mod encoded_bytes;
mod encoders;
mod error;
mod genesis;
mod hash;
mod hashers;
mod public_key;
mod result;
mod serializers;
mod validator;

pub use {
    address::*, encoded_bytes::*, encoders::*, error::*, genesis::*, hash::*, hashers::*,
    public_key::*, result::*, serializers::*, validator::*,
};

// ---------------------------------- testing ----------------------------------

#[cfg(not(target_arch = "wasm32"))]
mod testing;
