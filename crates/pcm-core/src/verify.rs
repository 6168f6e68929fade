//! Flash content verification.
//!
//! Compares a local image against what is actually in the module's
//! flash by asking the kernel to CRC each memory range. Nothing here
//! writes to the chip; this is the read-only half that decides whether
//! a write is needed and whether one succeeded.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use bitflags::bitflags;

use crate::events::{PcmEvent, PcmObserver};
use crate::profile::HardwareProfile;
use crate::protocol::{KernelProtocol, compute_crc};
use crate::transport::{TimeoutScenario, VehicleTransport};

/// Receive attempts per range after the first try comes back empty.
const MAX_RECEIVE_ATTEMPTS: u32 = 5;

bitflags! {
    /// Which kinds of flash blocks an operation touches.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct BlockType: u8 {
        const BOOT = 0x01;
        const PARAMETER = 0x02;
        const CALIBRATION = 0x04;
        const OPERATING_SYSTEM = 0x08;
        const ALL = 0xFF;
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.contains(Self::ALL) {
            return write!(f, "All");
        }

        let mut first = true;
        for (name, flag) in [
            ("Boot", Self::BOOT),
            ("Parameter", Self::PARAMETER),
            ("Calibration", Self::CALIBRATION),
            ("OperatingSystem", Self::OPERATING_SYSTEM),
        ] {
            if self.contains(flag) {
                if !first {
                    write!(f, ", ")?;
                }
                write!(f, "{name}")?;
                first = false;
            }
        }

        if first {
            write!(f, "Invalid")?;
        }
        Ok(())
    }
}

/// One flash block, with the CRC the image wants and the CRC the
/// module reports.
#[derive(Debug, Clone)]
pub struct MemoryRange {
    pub address: u32,
    pub size: u32,
    pub block_type: BlockType,
    pub desired_crc: u32,
    pub actual_crc: u32,
}

impl MemoryRange {
    pub fn new(address: u32, size: u32, block_type: BlockType) -> Self {
        Self {
            address,
            size,
            block_type,
            desired_crc: 0,
            actual_crc: 0,
        }
    }
}

/// Cooperative cancellation shared between a UI and a running
/// operation.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Runs the range-by-range CRC comparison against a live kernel.
pub struct CrcVerifier<'a> {
    image: &'a [u8],
    ranges: Vec<MemoryRange>,
    image_size: u32,
    transport: &'a dyn VehicleTransport,
    protocol: &'a dyn KernelProtocol,
    observer: &'a dyn PcmObserver,
}

impl<'a> CrcVerifier<'a> {
    pub fn new(
        image: &'a [u8],
        ranges: Vec<MemoryRange>,
        profile: &HardwareProfile,
        transport: &'a dyn VehicleTransport,
        protocol: &'a dyn KernelProtocol,
        observer: &'a dyn PcmObserver,
    ) -> Self {
        Self {
            image,
            ranges,
            image_size: profile.image_size as u32,
            transport,
            protocol,
            observer,
        }
    }

    /// The ranges, with whatever CRCs have been filled in so far.
    pub fn ranges(&self) -> &[MemoryRange] {
        &self.ranges
    }

    /// Compare CRCs from the file to CRCs from the PCM.
    ///
    /// Returns true when every range selected by `block_types` matches.
    /// A failed range is reported and skipped so the rest of the table
    /// still gets filled in.
    pub fn compare_ranges(&mut self, block_types: BlockType, cancel: &CancelToken) -> bool {
        self.user_message("Calculating CRCs from file.".to_string());
        self.calculate_desired_crcs();

        let mut success_for_all_ranges = true;

        let _ = self.transport.send(&self.protocol.tool_present());
        let _ = self.transport.set_timeout(TimeoutScenario::ReadCrc);

        self.user_message("Requesting CRCs from PCM.".to_string());
        self.user_message("\tRange\t\tFile CRC\t\tPCM CRC\tVerdict\tPurpose".to_string());

        for index in 0..self.ranges.len() {
            let (address, size, block_type, desired) = {
                let range = &self.ranges[index];
                (range.address, range.size, range.block_type, range.desired_crc)
            };
            let range_end = address + (size - 1);

            if (block_type & block_types).is_empty() || address >= self.image_size {
                self.user_message(format!(
                    "{address:06X}-{range_end:06X}\tnot needed\tnot needed\tn/a\t{block_type}"
                ));
                continue;
            }

            let _ = self.transport.send(&self.protocol.tool_present());
            self.transport.clear_queue();

            let query = self.protocol.crc_query(address, size);

            self.observer.on_event(&PcmEvent::Activity {
                description: format!("Processing CRC for range {address:06X}-{range_end:06X}"),
            });

            if cancel.is_cancelled() {
                return false;
            }

            let _ = self.transport.send(&self.protocol.tool_present());

            if self.transport.send(&query).is_err() {
                self.user_message(format!(
                    "CRC query failed reading range {address:08X} / {size:08X}"
                ));
                continue;
            }

            let mut response = self.transport.receive().ok();
            if response.is_none() {
                for _ in 0..MAX_RECEIVE_ATTEMPTS {
                    if cancel.is_cancelled() {
                        return false;
                    }
                    self.observer.on_event(&PcmEvent::DebugMessage {
                        message: format!(
                            "CRC read failed, re-trying {address:08X} / {size:08X}"
                        ),
                    });
                    response = self.transport.receive().ok();
                    if response.is_some() {
                        break;
                    }
                }
            }

            let actual = response
                .as_ref()
                .and_then(|message| self.protocol.parse_crc_response(message, address, size).ok());
            let Some(actual) = actual else {
                self.user_message(format!(
                    "Unable to get CRC for memory range {address:08X} / {size:08X}"
                ));
                success_for_all_ranges = false;
                continue;
            };

            self.transport.clear_queue();
            self.ranges[index].actual_crc = actual;

            let verdict = if desired == actual { "Same" } else { "Different" };
            self.user_message(format!(
                "{address:06X}-{range_end:06X}\t{desired:08X}\t{actual:08X}\t{verdict}\t{block_type}"
            ));
        }

        let _ = self.transport.send(&self.protocol.tool_present());

        for range in &self.ranges {
            if (range.block_type & block_types).is_empty() {
                continue;
            }
            if range.actual_crc != range.desired_crc {
                return false;
            }
        }

        self.transport.clear_queue();

        success_for_all_ranges
    }

    // P10 does not use the whole chip, so ranges past the usable image
    // keep a zero CRC and sit out the comparison.
    fn calculate_desired_crcs(&mut self) {
        for range in &mut self.ranges {
            if range.address < self.image_size {
                let start = range.address as usize;
                if let Some(data) = self.image.get(start..start + range.size as usize) {
                    range.desired_crc = compute_crc(data);
                }
            }
        }
    }

    fn user_message(&self, message: String) {
        self.observer.on_event(&PcmEvent::UserMessage { message });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::PcmType;
    use crate::protocol::{Message, ProtocolError};
    use crate::transport::MockTransport;
    use std::sync::Mutex;

    /// Captures user and debug messages in arrival order.
    struct Recorder(Mutex<Vec<String>>);

    impl Recorder {
        fn new() -> Self {
            Self(Mutex::new(Vec::new()))
        }

        fn messages(&self) -> Vec<String> {
            self.0.lock().unwrap().clone()
        }
    }

    impl PcmObserver for Recorder {
        fn on_event(&self, event: &PcmEvent) {
            let mut messages = self.0.lock().unwrap();
            match event {
                PcmEvent::UserMessage { message } | PcmEvent::DebugMessage { message } => {
                    messages.push(message.clone());
                }
                _ => {}
            }
        }
    }

    /// A minimal frame layout for exercising the verifier: queries are
    /// 0x3D frames, responses echo the range and carry the CRC.
    struct TestProtocol;

    impl KernelProtocol for TestProtocol {
        fn crc_query(&self, address: u32, size: u32) -> Message {
            let mut data = vec![0x3D, 0x02];
            data.extend_from_slice(&size.to_be_bytes()[1..]);
            data.extend_from_slice(&address.to_be_bytes()[1..]);
            Message::new(data)
        }

        fn parse_crc_response(
            &self,
            message: &Message,
            address: u32,
            size: u32,
        ) -> Result<u32, ProtocolError> {
            let bytes = message.as_bytes();
            if bytes.len() < 12 {
                return Err(ProtocolError::TooShort {
                    expected: 12,
                    actual: bytes.len(),
                });
            }
            let expected = crc_response(address, size, 0);
            if bytes[0..8] != expected.as_bytes()[0..8] {
                return Err(ProtocolError::Unexpected(
                    "response for a different range".to_string(),
                ));
            }
            Ok(u32::from_be_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]))
        }

        fn tool_present(&self) -> Message {
            Message::from(&[0x8C, 0xFE, 0xF0, 0x3F][..])
        }
    }

    fn crc_response(address: u32, size: u32, crc: u32) -> Message {
        let mut data = vec![0x7D, 0x02];
        data.extend_from_slice(&size.to_be_bytes()[1..]);
        data.extend_from_slice(&address.to_be_bytes()[1..]);
        data.extend_from_slice(&crc.to_be_bytes());
        Message::new(data)
    }

    fn test_image() -> Vec<u8> {
        (0..0x2000u32).map(|i| (i % 251) as u8).collect()
    }

    fn test_profile(image_size: usize) -> HardwareProfile {
        let mut profile = HardwareProfile::for_family(PcmType::P01_P59);
        profile.image_size = image_size;
        profile
    }

    fn test_ranges() -> Vec<MemoryRange> {
        vec![
            MemoryRange::new(0x0000, 0x1000, BlockType::CALIBRATION),
            MemoryRange::new(0x1000, 0x1000, BlockType::OPERATING_SYSTEM),
        ]
    }

    fn count_queries(transport: &MockTransport) -> usize {
        transport
            .get_sends()
            .iter()
            .filter(|message| message.as_bytes()[0] == 0x3D)
            .count()
    }

    #[test]
    fn test_matching_ranges_pass() {
        let image = test_image();
        let profile = test_profile(image.len());
        let transport = MockTransport::new();
        let recorder = Recorder::new();

        transport.queue_response(crc_response(0x0000, 0x1000, compute_crc(&image[..0x1000])));
        transport.queue_response(crc_response(0x1000, 0x1000, compute_crc(&image[0x1000..])));

        let mut verifier = CrcVerifier::new(
            &image,
            test_ranges(),
            &profile,
            &transport,
            &TestProtocol,
            &recorder,
        );
        assert!(verifier.compare_ranges(BlockType::ALL, &CancelToken::new()));

        assert_eq!(verifier.ranges()[0].actual_crc, verifier.ranges()[0].desired_crc);
        assert_eq!(verifier.ranges()[1].actual_crc, verifier.ranges()[1].desired_crc);
        assert!(transport.get_timeouts().contains(&TimeoutScenario::ReadCrc));

        let crc = compute_crc(&image[..0x1000]);
        let row = format!("000000-000FFF\t{crc:08X}\t{crc:08X}\tSame\tCalibration");
        assert!(recorder.messages().contains(&row), "{:?}", recorder.messages());
    }

    #[test]
    fn test_mismatched_range_fails() {
        let image = test_image();
        let profile = test_profile(image.len());
        let transport = MockTransport::new();
        let recorder = Recorder::new();

        transport.queue_response(crc_response(0x0000, 0x1000, compute_crc(&image[..0x1000])));
        transport.queue_response(crc_response(0x1000, 0x1000, 0x1234_5678));

        let mut verifier = CrcVerifier::new(
            &image,
            test_ranges(),
            &profile,
            &transport,
            &TestProtocol,
            &recorder,
        );
        assert!(!verifier.compare_ranges(BlockType::ALL, &CancelToken::new()));

        let different: Vec<_> = recorder
            .messages()
            .into_iter()
            .filter(|m| m.contains("\tDifferent\t"))
            .collect();
        assert_eq!(different.len(), 1);
    }

    #[test]
    fn test_out_of_filter_range_skipped() {
        let image = test_image();
        let profile = test_profile(image.len());
        let transport = MockTransport::new();
        let recorder = Recorder::new();

        transport.queue_response(crc_response(0x0000, 0x1000, compute_crc(&image[..0x1000])));

        let mut verifier = CrcVerifier::new(
            &image,
            test_ranges(),
            &profile,
            &transport,
            &TestProtocol,
            &recorder,
        );
        assert!(verifier.compare_ranges(BlockType::CALIBRATION, &CancelToken::new()));

        assert_eq!(count_queries(&transport), 1);
        let messages = recorder.messages();
        assert!(
            messages
                .iter()
                .any(|m| m == "001000-001FFF\tnot needed\tnot needed\tn/a\tOperatingSystem"),
            "{messages:?}"
        );
    }

    #[test]
    fn test_range_beyond_image_not_needed() {
        let image = test_image();
        // Usable image ends at 0x1000; the second range sits past it.
        let profile = test_profile(0x1000);
        let transport = MockTransport::new();
        let recorder = Recorder::new();

        transport.queue_response(crc_response(0x0000, 0x1000, compute_crc(&image[..0x1000])));

        let mut verifier = CrcVerifier::new(
            &image,
            test_ranges(),
            &profile,
            &transport,
            &TestProtocol,
            &recorder,
        );
        assert!(verifier.compare_ranges(BlockType::ALL, &CancelToken::new()));

        assert_eq!(count_queries(&transport), 1);
        assert!(
            recorder
                .messages()
                .iter()
                .any(|m| m.contains("not needed"))
        );
    }

    #[test]
    fn test_send_failure_reports_and_continues() {
        let image = test_image();
        let profile = test_profile(image.len());
        let transport = MockTransport::new();
        let recorder = Recorder::new();
        transport.refuse_sends(true);

        let mut verifier = CrcVerifier::new(
            &image,
            test_ranges(),
            &profile,
            &transport,
            &TestProtocol,
            &recorder,
        );
        assert!(!verifier.compare_ranges(BlockType::ALL, &CancelToken::new()));

        let failures: Vec<_> = recorder
            .messages()
            .into_iter()
            .filter(|m| m.starts_with("CRC query failed"))
            .collect();
        assert_eq!(failures.len(), 2);
    }

    #[test]
    fn test_unparseable_response_marks_failure() {
        let image = test_image();
        let profile = test_profile(image.len());
        let transport = MockTransport::new();
        let recorder = Recorder::new();

        transport.queue_response_bytes(&[0xFF]);
        transport.queue_response(crc_response(0x1000, 0x1000, compute_crc(&image[0x1000..])));

        let mut verifier = CrcVerifier::new(
            &image,
            test_ranges(),
            &profile,
            &transport,
            &TestProtocol,
            &recorder,
        );
        assert!(!verifier.compare_ranges(BlockType::ALL, &CancelToken::new()));

        assert!(
            recorder
                .messages()
                .contains(&"Unable to get CRC for memory range 00000000 / 00001000".to_string())
        );
        // The second range still got its answer.
        assert_eq!(
            verifier.ranges()[1].actual_crc,
            verifier.ranges()[1].desired_crc
        );
    }

    #[test]
    fn test_receive_retries_then_gives_up() {
        let image = test_image();
        let profile = test_profile(image.len());
        let transport = MockTransport::new();
        let recorder = Recorder::new();
        // Nothing queued: every receive times out.

        let mut verifier = CrcVerifier::new(
            &image,
            vec![MemoryRange::new(0x0000, 0x1000, BlockType::CALIBRATION)],
            &profile,
            &transport,
            &TestProtocol,
            &recorder,
        );
        assert!(!verifier.compare_ranges(BlockType::ALL, &CancelToken::new()));

        let retries: Vec<_> = recorder
            .messages()
            .into_iter()
            .filter(|m| m.starts_with("CRC read failed, re-trying"))
            .collect();
        assert_eq!(retries.len(), MAX_RECEIVE_ATTEMPTS as usize);
    }

    #[test]
    fn test_cancelled_token_aborts() {
        let image = test_image();
        let profile = test_profile(image.len());
        let transport = MockTransport::new();
        let cancel = CancelToken::new();
        cancel.cancel();

        let mut verifier = CrcVerifier::new(
            &image,
            test_ranges(),
            &profile,
            &transport,
            &TestProtocol,
            &crate::events::NullObserver,
        );
        assert!(!verifier.compare_ranges(BlockType::ALL, &cancel));
        assert_eq!(count_queries(&transport), 0);
    }

    #[test]
    fn test_block_type_display() {
        assert_eq!(BlockType::ALL.to_string(), "All");
        assert_eq!(BlockType::CALIBRATION.to_string(), "Calibration");
        assert_eq!(
            (BlockType::BOOT | BlockType::PARAMETER).to_string(),
            "Boot, Parameter"
        );
        assert_eq!(BlockType::empty().to_string(), "Invalid");
    }
}
