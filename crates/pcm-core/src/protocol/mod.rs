//! Protocol module - kernel conversation definitions.

pub mod message;

pub use message::Message;

use crc::{CRC_32_BZIP2, Crc};
use thiserror::Error;

/// CRC algorithm the flash kernels use: non-reflected CRC-32 with the
/// 0x04C11DB7 polynomial, matching the big-endian routine in the
/// kernel's read loop.
const CRC32: Crc<u32> = Crc::<u32>::new(&CRC_32_BZIP2);

/// CRC of an image slice, as the kernel would compute it for the same
/// bytes in flash.
pub fn compute_crc(data: &[u8]) -> u32 {
    CRC32.checksum(data)
}

#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("Response too short: expected at least {expected} bytes, got {actual}")]
    TooShort { expected: usize, actual: usize },

    #[error("Kernel refused the request: mode {mode:02X}, code {code:02X}")]
    Refused { mode: u8, code: u8 },

    #[error("Unexpected response: {0}")]
    Unexpected(String),
}

/// The handful of kernel messages the verifier needs, behind a trait
/// so it does not care which PCM family framed them.
pub trait KernelProtocol: Send + Sync {
    /// Build the CRC query for one flash range.
    fn crc_query(&self, address: u32, size: u32) -> Message;

    /// Extract the CRC value from a query response.
    ///
    /// The caller passes the range it asked about so implementations
    /// can reject replies for a different range.
    fn parse_crc_response(
        &self,
        message: &Message,
        address: u32,
        size: u32,
    ) -> Result<u32, ProtocolError>;

    /// Build the tool-present heartbeat that keeps the kernel awake.
    fn tool_present(&self) -> Message;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crc_check_value() {
        // Catalog check input for CRC-32/BZIP2.
        assert_eq!(compute_crc(b"123456789"), 0xFC89_1918);
    }

    #[test]
    fn test_crc_distinguishes_slices() {
        let image = [0u8; 64];
        assert_ne!(compute_crc(&image[..16]), compute_crc(&image[..32]));
    }
}
