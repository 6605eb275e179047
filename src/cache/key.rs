//! Cache key derivation
//!
//! Maps a resource URL to the filename its bytes are stored under. The hash
//! must be stable across process runs so entries written by one run are found
//! by the next, and its output must be safe to use as a filename.

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x100_0000_01b3;

/// Derives a filesystem-safe cache key from a resource identifier
///
/// Computes a 64-bit FNV-1a hash over the UTF-8 bytes of the identifier and
/// renders it as 16 lowercase hex digits. Deterministic for a given input,
/// including across runs; collisions between distinct URLs are tolerated by
/// the store (last write wins for a key).
pub fn hash_key(identifier: &str) -> String {
    let mut hash = FNV_OFFSET_BASIS;
    for byte in identifier.as_bytes() {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    format!("{:016x}", hash)
}
