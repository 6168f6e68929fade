//! Message framing for the vehicle bus.

use std::fmt;

/// One framed message on the vehicle bus.
///
/// The transport deals in whole frames. Priority and addressing bytes
/// are part of the payload; how they are laid out is the protocol
/// implementation's business, not the transport's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    data: Vec<u8>,
}

impl Message {
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl From<&[u8]> for Message {
    fn from(data: &[u8]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }
}

impl From<Vec<u8>> for Message {
    fn from(data: Vec<u8>) -> Self {
        Self { data }
    }
}

impl fmt::Display for Message {
    /// Space-separated hex, the way bus traces are usually read.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, byte) in self.data.iter().enumerate() {
            if index > 0 {
                write!(f, " ")?;
            }
            write!(f, "{:02X}", byte)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_hex() {
        let message = Message::new(vec![0x6C, 0x10, 0xF0, 0x3D]);
        assert_eq!(message.to_string(), "6C 10 F0 3D");
    }

    #[test]
    fn test_empty() {
        let message = Message::new(Vec::new());
        assert!(message.is_empty());
        assert_eq!(message.to_string(), "");
    }
}
