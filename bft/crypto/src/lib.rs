mod hashers;

pub use crate::hashers::ripemd160;
