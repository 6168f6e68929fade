//! Vehicle transport abstraction.
//!
//! Defines the `VehicleTransport` trait for exchanging framed messages
//! with the PCM, allowing different implementations (serial pass-through,
//! J2534, mock, etc.).

use crate::protocol::Message;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Device not found: {0}")]
    NotFound(String),

    #[error("Failed to open device: {0}")]
    OpenFailed(String),

    #[error("Send failed: {0}")]
    SendFailed(String),

    #[error("Receive failed: {0}")]
    ReceiveFailed(String),

    #[error("No response within {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Device disconnected")]
    Disconnected,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Timeout classes that a transport maps onto device settings.
///
/// Different operations have very different response latencies; the
/// kernel's CRC routine in particular takes seconds per megabyte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeoutScenario {
    Minimum,
    ReadProperty,
    ReadCrc,
    ReadMemoryBlock,
    EraseMemoryBlock,
    WriteMemoryBlock,
    SendKernel,
    Maximum,
}

/// Abstract vehicle transport interface.
///
/// This trait enables:
/// - Pass-through implementations (serial, J2534)
/// - Mock implementation for unit testing
pub trait VehicleTransport: Send + Sync {
    /// Send one framed message to the vehicle bus.
    fn send(&self, message: &Message) -> Result<(), TransportError>;

    /// Receive the next message, waiting up to the current timeout.
    fn receive(&self) -> Result<Message, TransportError>;

    /// Select the timeout class for subsequent receives.
    fn set_timeout(&self, scenario: TimeoutScenario) -> Result<(), TransportError>;

    /// Discard any messages waiting in the receive queue.
    fn clear_queue(&self);

    /// Check if the underlying device is still usable.
    fn is_connected(&self) -> bool;
}
