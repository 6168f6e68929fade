//! PCM-Core: GM powertrain control module flashing primitives.
//!
//! This crate provides the offline half of a PCM flash tool: firmware
//! image identification, checksum validation, seed/key unlocking, the
//! OSID registry, and CRC verification of flash contents against a
//! local image.
//!
//! # Architecture
//!
//! The crate is organized into layers:
//!
//! - **Key**: Seed/key unlock algorithms (the OBD2 security handshake)
//! - **Identify**: Recognize hardware families from image signatures
//! - **Checksum**: Per-family segment sum validation
//! - **Registry**: Operating-system ID database with per-OS overrides
//! - **Verify**: Range-by-range CRC comparison against a live kernel
//! - **Transport**: Vehicle bus abstraction (mock included)
//! - **Protocol**: Message framing seam consumed by the verifier
//! - **Events**: Observer pattern for UI decoupling
//!
//! # Example
//!
//! ```no_run
//! use pcm_core::events::TracingObserver;
//! use pcm_core::{checksum, identify, registry};
//!
//! let image = std::fs::read("calibration.bin").expect("read image");
//! let observer = TracingObserver;
//!
//! let pcm_type = identify::identify(&image, &observer);
//! let osid = identify::read_osid(&image, pcm_type);
//! let info = registry::lookup(osid);
//! println!("{}: {}", osid, info.description);
//!
//! let report = checksum::validate(&image, pcm_type, &observer);
//! println!("checksums {}", if report.is_valid() { "good" } else { "BAD" });
//! ```

pub mod checksum;
pub mod config;
pub mod events;
pub mod identify;
pub mod key;
pub mod profile;
pub mod protocol;
pub mod registry;
pub mod transport;
pub mod verify;

// Re-exports for convenience
pub use checksum::{ChecksumFailure, ChecksumReport, SegmentSum};
pub use config::{DeviceType, ToolConfig};
pub use events::{NullObserver, PcmEvent, PcmObserver, TracingObserver};
pub use identify::{identify, read_osid};
pub use key::compute_key;
pub use profile::{HardwareProfile, PcmType};
pub use protocol::{KernelProtocol, Message, ProtocolError, compute_crc};
pub use registry::{OsidInfo, lookup};
pub use transport::{MockTransport, TimeoutScenario, TransportError, VehicleTransport};
pub use verify::{BlockType, CancelToken, CrcVerifier, MemoryRange};
