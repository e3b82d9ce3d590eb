/// Standard geohash base-32 alphabet, indexed by 5-bit symbol value.
pub const BASE32_ALPHABET: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

/// Number of bits carried by each geohash character.
pub const BITS_PER_CHAR: usize = 5;

/// Maximum encode precision (characters). 12 characters is 60 interleaved bits.
pub const MAX_PRECISION: usize = 12;

/// Longitude interval [min, max]
pub const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);

/// Latitude interval [min, max]
pub const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);

/// Marker for bytes outside the alphabet in `DECODE_TABLE`.
pub(crate) const INVALID_SYMBOL: u8 = u8::MAX;

/// Byte -> 5-bit symbol lookup. Upper and lower case letters map to the same value.
pub(crate) const DECODE_TABLE: [u8; 256] = build_decode_table(BASE32_ALPHABET);

const fn build_decode_table(alphabet: &[u8; 32]) -> [u8; 256] {
    let mut table = [INVALID_SYMBOL; 256];
    let mut i = 0;
    while i < alphabet.len() {
        let ch = alphabet[i];
        table[ch.to_ascii_lowercase() as usize] = i as u8;
        table[ch.to_ascii_uppercase() as usize] = i as u8;
        i += 1;
    }
    table
}
