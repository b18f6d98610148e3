// Adapters layer: concrete implementations of the domain ports (storage, decoding, rendering).

pub mod decode;
pub mod render;
pub mod storage;
