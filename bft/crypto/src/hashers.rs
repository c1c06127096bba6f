use {digest::Digest, ripemd::Ripemd160};

/// Hash the data with RIPEMD-160, producing a 20-byte digest.
pub fn ripemd160(data: &[u8]) -> [u8; 20] {
    let mut hasher = Ripemd160::new();
    hasher.update(data);
    hasher.finalize().into()
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {super::*, hex_literal::hex};

    #[test]
    fn hashing_known_vectors() {
        assert_eq!(
            ripemd160(b""),
            hex!("9c1185a5c5e9fc54612808977ee8f548b2258d31")
        );
        assert_eq!(
            ripemd160(b"abc"),
            hex!("8eb208f7e05d987a9b044a8e98c6b087f15a0bfc")
        );
        assert_eq!(
            ripemd160(b"message digest"),
            hex!("5d0689ef49d2fae572b881b123a85ffa21595f36")
        );
    }
}
