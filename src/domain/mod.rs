//! Domain layer: the pure TLV codec, checksum and rewrite policy, plus the
//! ports the application layer depends on.

pub mod amount;
pub mod checksum;
pub mod payload;
pub mod ports;
pub mod tlv;
