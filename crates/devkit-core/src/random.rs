use crate::error::{DevError, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;
use uuid::Uuid;

/// Byte count used by `dev rand bytes` when `--size` is omitted.
pub const DEFAULT_BYTE_SIZE: u32 = 64;

/// Generate a time-based (version 1) UUID.
///
/// The node id is random rather than a MAC address, so the multicast bit is
/// set as RFC 4122 requires for random nodes.
pub fn uuid1() -> Result<Uuid> {
    let mut node = [0u8; 6];
    fill_random(&mut node)?;
    node[0] |= 0x01;
    Ok(Uuid::now_v1(&node))
}

/// Fill `buf` from the operating system's RNG.
pub fn fill_random(buf: &mut [u8]) -> Result<()> {
    OsRng
        .try_fill_bytes(buf)
        .map_err(|e| DevError::Entropy(e.to_string()))
}

/// Standard padded base64.
pub fn encode_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}
