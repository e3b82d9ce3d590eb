pub mod constants;
pub mod decode;
pub mod encode;
mod range;

pub use constants::{BASE32_ALPHABET, BITS_PER_CHAR, LATITUDE_RANGE, LONGITUDE_RANGE, MAX_PRECISION};
pub use decode::{decode, decode_bbox};
pub use encode::{encode, encode_coord};
