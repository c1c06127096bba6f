use crate::Hash160;

/// Data that can be hashed into a [`Hash160`].
pub trait HashExt {
    fn hash160(&self) -> Hash160;
}

impl<T> HashExt for T
where
    T: AsRef<[u8]> + ?Sized,
{
    fn hash160(&self) -> Hash160 {
        Hash160::from_array(bft_crypto::ripemd160(self.as_ref()))
    }
}

// ----------------------------------- tests -----------------------------------
