//! Firmware image checksum validation.
//!
//! Every PCM family protects its image with some flavor of 16-bit sum,
//! but no two families agree on where the segment boundaries live, where
//! the sums are stored, or which regions are left out of the walk. Each
//! family's layout is reproduced here exactly as the factory code
//! expects it.

use byteorder::{BigEndian, ByteOrder};
use thiserror::Error;

use crate::events::{PcmEvent, PcmObserver};
use crate::profile::PcmType;

/// Names of segments in P01 and P59 operating systems.
static SEGMENT_NAMES_P01_P59: [&str; 8] = [
    "Operating system",
    "Engine calibration",
    "Engine diagnostics.",
    "Transmission calibration",
    "Transmission diagnostics",
    "Fuel system",
    "System",
    "Speedometer",
];

/// Names of segments in P10 operating systems.
static SEGMENT_NAMES_P10: [&str; 5] = [
    "Operating system",
    "Engine calibration",
    "Transmission calibration",
    "System",
    "Speedometer",
];

/// Fixed E54 ranges: (start, end, stored-checksum address, name).
static E54_RANGES: [(u32, u32, u32, &str); 6] = [
    (0x20002, 0x6FFFF, 0x20000, "Operating System"),
    (0x8002, 0x19FFF, 0x8000, "Engine Calibration"),
    (0x1A002, 0x1C7FF, 0x1A000, "Engine Diagnostics"),
    (0x1C002, 0x1DFFF, 0x1C000, "Fuel"),
    (0x1E002, 0x1EFFF, 0x1E000, "System"),
    (0x1F002, 0x1FFEF, 0x1F000, "Speedometer"),
];

/// One P12 segment: the image holds a pointer to the stored sum and an
/// index of (start, end) block pairs to walk.
struct P12Segment {
    pointer: u32,
    offset: u32,
    index: u32,
    blocks: u32,
    name: &'static str,
}

static P12_SEGMENTS: [P12Segment; 8] = [
    P12Segment { pointer: 0x922, offset: 0x900, index: 0x94A, blocks: 2, name: "Boot Block" },
    P12Segment { pointer: 0x8022, offset: 0, index: 0x804A, blocks: 2, name: "Operating System" },
    P12Segment { pointer: 0x80C4, offset: 0, index: 0x80E4, blocks: 2, name: "Engine Calibration" },
    P12Segment { pointer: 0x80F7, offset: 0, index: 0x8117, blocks: 2, name: "Engine Diagnostics" },
    P12Segment { pointer: 0x812A, offset: 0, index: 0x814A, blocks: 2, name: "Transmission Calibration" },
    P12Segment { pointer: 0x815D, offset: 0, index: 0x817D, blocks: 2, name: "Transmission Diagnostics" },
    P12Segment { pointer: 0x805E, offset: 0, index: 0x807E, blocks: 2, name: "Speedometer" },
    P12Segment { pointer: 0x8091, offset: 0, index: 0x80B1, blocks: 2, name: "System" },
];

/// Hard failures that stop validation, as opposed to a segment whose
/// sum merely disagrees.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumFailure {
    #[error("Checksum table is corrupt.")]
    CorruptTable,

    #[error("Unable to locate the stored checksum address.")]
    SumAddressNotFound,

    #[error("Checksum validation is not supported for this image.")]
    Unsupported,
}

/// One row of the validation report.
#[derive(Debug, Clone)]
pub struct SegmentSum {
    pub name: &'static str,
    /// First summed address.
    pub start: u32,
    /// Last address covered by the walk.
    pub end: u32,
    pub stored: u32,
    pub computed: u32,
    pub valid: bool,
}

/// Outcome of walking an image's checksum layout.
#[derive(Debug, Clone)]
pub struct ChecksumReport {
    pub pcm_type: PcmType,
    pub segments: Vec<SegmentSum>,
    pub failure: Option<ChecksumFailure>,
}

impl ChecksumReport {
    /// True when every segment summed correctly and nothing failed.
    pub fn is_valid(&self) -> bool {
        self.failure.is_none() && self.segments.iter().all(|segment| segment.valid)
    }
}

/// Validate an image against its family's checksum layout.
///
/// Emits one tab-separated report row per segment through the observer
/// and returns the same rows as data.
pub fn validate(image: &[u8], pcm_type: PcmType, observer: &dyn PcmObserver) -> ChecksumReport {
    let mut report = ChecksumReport {
        pcm_type,
        segments: Vec::new(),
        failure: None,
    };

    match pcm_type {
        PcmType::P01_P59 => {
            print_header(observer, false);
            validate_table(image, 0x50C, &SEGMENT_NAMES_P01_P59, pcm_type, observer, &mut report);
        }
        PcmType::P10 => {
            print_header(observer, false);
            validate_table(image, 0x546, &SEGMENT_NAMES_P10, pcm_type, observer, &mut report);
        }
        // BlackBox uses the P01 table layout, five segments' worth.
        PcmType::BlackBox => {
            print_header(observer, false);
            validate_table(image, 0x2000C, &SEGMENT_NAMES_P01_P59[..5], pcm_type, observer, &mut report);
        }
        PcmType::E54 => {
            print_header(observer, false);
            validate_e54(image, observer, &mut report);
        }
        PcmType::P08 => {
            print_header(observer, false);
            validate_p08(image, observer, &mut report);
        }
        PcmType::P12 => {
            print_header(observer, false);
            validate_p12(image, observer, &mut report);
        }
        PcmType::P04 | PcmType::P04_Early | PcmType::P04_256k | PcmType::P05 => {
            print_header(observer, true);
            validate_p04(image, observer, &mut report);
        }
        PcmType::Undefined | PcmType::E60 => {
            fail(observer, &mut report, ChecksumFailure::Unsupported);
        }
    }

    report
}

// ============================================================
// Table-driven word sums (P01/P59, P10, BlackBox)
// ============================================================

fn validate_table(
    image: &[u8],
    table_address: u32,
    names: &'static [&'static str],
    pcm_type: PcmType,
    observer: &dyn PcmObserver,
    report: &mut ChecksumReport,
) {
    let length = image.len() as u32;

    for (index, &name) in names.iter().enumerate() {
        let entry = table_address + index as u32 * 8;
        let (Some(table_start), Some(end)) = (read_u32(image, entry), read_u32(image, entry + 4))
        else {
            return fail(observer, report, ChecksumFailure::CorruptTable);
        };

        // Most segments keep their stored sum in their first word, so
        // the walk starts two bytes in. The whole-image segment starts
        // at zero and keeps its sum off to the side instead.
        let checksum_address = if table_start == 0 {
            match pcm_type {
                PcmType::P01_P59 => 0x500,
                PcmType::P10 => 0x52A,
                _ => table_start,
            }
        } else {
            table_start
        };
        let start = if table_start == 0 { 0 } else { table_start + 2 };

        if start >= length || end >= length || checksum_address >= length {
            return fail(observer, report, ChecksumFailure::CorruptTable);
        }

        let Some(stored) = read_u16(image, checksum_address) else {
            return fail(observer, report, ChecksumFailure::CorruptTable);
        };
        let Some((sum, end)) = word_sum(image, pcm_type, start, end) else {
            return fail(observer, report, ChecksumFailure::CorruptTable);
        };
        let computed = sum.wrapping_neg();

        let row = SegmentSum {
            name,
            start,
            end,
            stored: stored.into(),
            computed: computed.into(),
            valid: stored == computed,
        };
        emit_row(observer, &row, false);
        report.segments.push(row);
    }
}

/// Big-endian words from `start` to `end` inclusive, with the family's
/// mid-walk address jumps. Returns the wrapped sum and the (possibly
/// clamped) final end address.
fn word_sum(image: &[u8], pcm_type: PcmType, start: u32, mut end: u32) -> Option<(u16, u32)> {
    let mut sum: u16 = 0;
    let mut address = start;

    while address <= end {
        match pcm_type {
            PcmType::P01_P59 => {
                // Step over the stored sum, then over the parameter block.
                if address == 0x500 {
                    address = 0x502;
                }
                if address == 0x4000 {
                    address = 0x20000;
                }
            }
            PcmType::P10 => match address {
                0x52A => address = 0x52C,
                0x4000 => address = 0x20000,
                // The table's last segment claims more than is summed.
                0x7FFFA => end = 0x7FFFA,
                _ => {}
            },
            _ => {}
        }

        sum = sum.wrapping_add(read_u16(image, address)?);
        address += 2;
    }

    Some((sum, end))
}

// ============================================================
// E54 fixed ranges
// ============================================================

fn validate_e54(image: &[u8], observer: &dyn PcmObserver, report: &mut ChecksumReport) {
    for &(start, end, checksum_address, name) in &E54_RANGES {
        let Some(stored) = read_u16(image, checksum_address) else {
            return fail(observer, report, ChecksumFailure::CorruptTable);
        };
        let Some((sum, end)) = word_sum(image, PcmType::E54, start, end) else {
            return fail(observer, report, ChecksumFailure::CorruptTable);
        };
        let computed = sum.wrapping_neg();

        let row = SegmentSum {
            name,
            start,
            end,
            stored: stored.into(),
            computed: computed.into(),
            valid: stored == computed,
        };
        emit_row(observer, &row, false);
        report.segments.push(row);
    }
}

// ============================================================
// P08 whole-file byte sum
// ============================================================

fn validate_p08(image: &[u8], observer: &dyn PcmObserver, report: &mut ChecksumReport) {
    let Some(stored) = read_u16(image, 0x8004) else {
        return fail(observer, report, ChecksumFailure::CorruptTable);
    };
    let Some(computed) = byte_sum_p08(image) else {
        return fail(observer, report, ChecksumFailure::CorruptTable);
    };

    // The byte sum is stored as-is; no two's complement here.
    let row = SegmentSum {
        name: "Whole File",
        start: 0,
        end: 0x7FFFB,
        stored: stored.into(),
        computed: computed.into(),
        valid: stored == computed,
    };
    emit_row(observer, &row, false);
    report.segments.push(row);
}

fn byte_sum_p08(image: &[u8]) -> Option<u16> {
    let mut sum: u16 = 0;
    let mut address: u32 = 0;

    while address <= 0x7FFFB {
        // The region between the calibration and the stored sum is not
        // summed.
        if address == 0x4000 {
            address = 0x8010;
        }
        sum = sum.wrapping_add(u16::from(*image.get(address as usize)?));
        address += 1;
    }

    Some(sum)
}

// ============================================================
// P12 indirect segment list
// ============================================================

fn validate_p12(image: &[u8], observer: &dyn PcmObserver, report: &mut ChecksumReport) {
    for segment in &P12_SEGMENTS {
        let Some(row) = sum_p12_segment(image, segment) else {
            return fail(observer, report, ChecksumFailure::CorruptTable);
        };
        emit_row(observer, &row, false);
        report.segments.push(row);
    }
}

fn sum_p12_segment(image: &[u8], segment: &P12Segment) -> Option<SegmentSum> {
    let sum_address = read_u32(image, segment.pointer)?;
    let stored = read_u16(image, sum_address.checked_add(segment.offset)?)?;

    let mut sum: u16 = 0;
    let mut first = 0;
    let mut last_end = 0;

    for block in 0..segment.blocks {
        let entry = segment.index + block * 8;
        let start = read_u32(image, entry)?;
        let end = read_u32(image, entry + 4)?;

        let mut address = start;
        while address <= end {
            sum = sum.wrapping_add(read_u16(image, address)?);
            address += 2;
        }

        if block == 0 {
            first = start;
        }
        last_end = end;
    }

    let computed = sum.wrapping_neg();
    Some(SegmentSum {
        name: segment.name,
        start: first,
        end: last_end,
        stored: stored.into(),
        computed: computed.into(),
        valid: stored == computed,
    })
}

// ============================================================
// P04 / P05 whole-file sum with a discovered sum address
// ============================================================

fn validate_p04(image: &[u8], observer: &dyn PcmObserver, report: &mut ChecksumReport) {
    let mut pass = whole_file_sum_p04(image, true, observer);

    // Early 512 KiB bins include the parameter block in the sum; when
    // the first pass disagrees, try again with the block included.
    let retry = matches!(&pass, Ok(row) if !row.valid && image.len() == 0x80000);
    if retry {
        pass = whole_file_sum_p04(image, false, observer);
    }

    match pass {
        Ok(row) => {
            emit_row(observer, &row, true);
            report.segments.push(row);
        }
        Err(failure) => fail(observer, report, failure),
    }
}

fn whole_file_sum_p04(
    image: &[u8],
    skip_param_block: bool,
    observer: &dyn PcmObserver,
) -> Result<SegmentSum, ChecksumFailure> {
    let length = image.len() as u32;
    let sum_address =
        find_p04_sum_address(image, observer).ok_or(ChecksumFailure::SumAddressNotFound)?;
    let stored = read_u32(image, sum_address).ok_or(ChecksumFailure::SumAddressNotFound)?;

    let ff_trailer = length == 0x80000 && image[0x7FFFE..] == [0xFF, 0xFF];

    let mut sum: u32 = 0;
    let mut address: u32 = 0;

    while address < length {
        // Neither the stored sum nor the OSID trailer is summed.
        if address == sum_address {
            address += 4;
        }
        if address == length - 6 {
            address += 4;
        }
        match length {
            0x80000 => {
                if address == 0x4000 && skip_param_block {
                    address += 0x4000;
                }
                // Some 1998s have a different signature and keep the
                // OSID two bytes lower.
                if address == 0x7FFF8 && ff_trailer {
                    address += 4;
                }
            }
            0x100000 => {
                if address == 0x4000 {
                    address += 0xC000;
                }
            }
            _ => {}
        }

        let Some(word) = read_u16(image, address) else {
            break;
        };
        sum = sum.wrapping_add(u32::from(word));
        address += 2;
    }

    Ok(SegmentSum {
        name: "Whole File",
        start: 0,
        end: length - 1,
        stored,
        computed: sum,
        valid: stored == sum,
    })
}

/// Find the stored-sum address by scanning for the code sequence that
/// loads it.
fn find_p04_sum_address(image: &[u8], observer: &dyn PcmObserver) -> Option<u32> {
    for (index, w) in image.windows(20).enumerate() {
        let (found, sum_address) = if image.len() == 0x100000 {
            (
                w[0] == 0xE0
                    && w[1] == 0x8A
                    && w[2] == 0xE0
                    && w[3] == 0x8A
                    && w[4] == 0x28
                    && w[5] == 0x38
                    && w[8] == 0x98
                    && w[9] == 0x82
                    && w[10] == 0xC6
                    && w[11] == 0x87,
                BigEndian::read_u32(&w[16..20]),
            )
        } else {
            (
                w[0] == 0x3C
                    && w[1] == 0x00
                    && w[2] == 0x00
                    && w[3] == 0xFF
                    && w[4] == 0xFF
                    && (w[5] == 0xC0 || w[5] == 0xC6)
                    && (w[6] == 0x82 || w[6] == 0x86)
                    && (w[7] == 0x94 || w[7] == 0x96 || w[7] == 0x98)
                    && (w[8] == 0x80 || w[8] == 0x83)
                    && (w[9] == 0x20 || w[9] == 0x26)
                    && w[10] == 0x39
                    && (w[15] == 0x2C || w[15] == 0x2E)
                    && (w[16] == 0x00 || w[16] == 0x03)
                    && w[17] == 0xE0
                    && (w[18] == 0x8E || w[18] == 0x8F)
                    && w[19] == 0xE0,
                BigEndian::read_u32(&w[11..15]),
            )
        };

        if found {
            observer.on_event(&PcmEvent::DebugMessage {
                message: format!(
                    "Pattern found at {:08X}, sum address {:08X}",
                    index, sum_address
                ),
            });
            return Some(sum_address);
        }
    }

    None
}

// ============================================================
// Shared helpers
// ============================================================

fn read_u16(image: &[u8], address: u32) -> Option<u16> {
    let offset = address as usize;
    image.get(offset..offset + 2).map(BigEndian::read_u16)
}

fn read_u32(image: &[u8], address: u32) -> Option<u32> {
    let offset = address as usize;
    image.get(offset..offset + 4).map(BigEndian::read_u32)
}

fn fail(observer: &dyn PcmObserver, report: &mut ChecksumReport, failure: ChecksumFailure) {
    observer.on_event(&PcmEvent::UserMessage {
        message: failure.to_string(),
    });
    report.failure = Some(failure);
}

fn print_header(observer: &dyn PcmObserver, wide: bool) {
    // The P04 whole-file sums are 32 bits, so those columns get an
    // extra tab to stay lined up.
    let header = if wide {
        "\tStart\tEnd\tStored\t\tNeeded\t\tVerdict\tSegment Name"
    } else {
        "\tStart\tEnd\tStored\tNeeded\tVerdict\tSegment Name"
    };
    observer.on_event(&PcmEvent::UserMessage {
        message: header.to_string(),
    });
}

fn emit_row(observer: &dyn PcmObserver, row: &SegmentSum, wide: bool) {
    let verdict = if row.valid { "Good" } else { "BAD" };
    let message = if wide {
        format!(
            "\t{:05X}\t{:05X}\t{:08X}\t{:08X}\t{}\t{}",
            row.start, row.end, row.stored, row.computed, verdict, row.name
        )
    } else {
        format!(
            "\t{:05X}\t{:05X}\t{:04X}\t{:04X}\t{}\t{}",
            row.start, row.end, row.stored, row.computed, verdict, row.name
        )
    };
    observer.on_event(&PcmEvent::UserMessage { message });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::NullObserver;
    use std::sync::Mutex;

    /// Captures user messages so tests can check the report layout.
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
            if let PcmEvent::UserMessage { message } = event {
                self.0.lock().unwrap().push(message.clone());
            }
        }
    }

    fn put_u16(image: &mut [u8], address: usize, value: u16) {
        image[address..address + 2].copy_from_slice(&value.to_be_bytes());
    }

    fn put_u32(image: &mut [u8], address: usize, value: u32) {
        image[address..address + 4].copy_from_slice(&value.to_be_bytes());
    }

    /// A P01 image whose eight table segments all sum correctly.
    fn p01_image() -> Vec<u8> {
        let mut image = vec![0u8; 0x80000];

        // Segment 0 covers the image head; its sum lives at 0x500.
        put_u32(&mut image, 0x50C, 0);
        put_u32(&mut image, 0x510, 0x4FE);
        put_u16(&mut image, 0x0, 0x0100);
        put_u16(&mut image, 0x500, 0xFF00);

        // Segments 1-7 store their sum in their first word.
        for segment in 1..8usize {
            let start = 0x30000 + segment * 0x100;
            put_u32(&mut image, 0x50C + segment * 8, start as u32);
            put_u32(&mut image, 0x510 + segment * 8, start as u32 + 0x10);
            put_u16(&mut image, start + 2, 0x1234);
            put_u16(&mut image, start + 4, 0x0001);
            put_u16(&mut image, start, 0x1235u16.wrapping_neg());
        }

        image
    }

    #[test]
    fn test_p01_table_all_good() {
        let image = p01_image();
        let report = validate(&image, PcmType::P01_P59, &NullObserver);

        assert!(report.is_valid());
        assert_eq!(report.segments.len(), 8);
        assert_eq!(report.segments[0].name, "Operating system");
        assert_eq!(report.segments[0].start, 0);
        assert_eq!(report.segments[1].start, 0x30102);
        assert!(report.segments.iter().all(|s| s.valid));
    }

    #[test]
    fn test_single_byte_corruption_flips_one_segment() {
        let mut image = p01_image();
        image[0x30103] ^= 0xFF;

        let report = validate(&image, PcmType::P01_P59, &NullObserver);
        assert!(!report.is_valid());
        let bad: Vec<_> = report.segments.iter().filter(|s| !s.valid).collect();
        assert_eq!(bad.len(), 1);
        assert_eq!(bad[0].name, "Engine calibration");
    }

    #[test]
    fn test_p01_walk_jumps_over_parameter_block() {
        let mut image = vec![0u8; 0x80000];

        // Segment 0 spans the 0x4000 jump; the walk must resume at
        // 0x20000 and skip both the stored word and the block between.
        put_u32(&mut image, 0x50C, 0);
        put_u32(&mut image, 0x510, 0x20002);
        for segment in 1..8usize {
            let start = 0x30000 + segment * 0x100;
            put_u32(&mut image, 0x50C + segment * 8, start as u32);
            put_u32(&mut image, 0x510 + segment * 8, start as u32 + 0x10);
        }

        put_u16(&mut image, 0x3FFE, 0x0002);
        put_u16(&mut image, 0x4000, 0xDEAD); // must not be summed
        put_u16(&mut image, 0x10000, 0xBEEF); // must not be summed
        put_u16(&mut image, 0x20000, 0x0030);
        // The walk also covers the table itself; the payload words plus
        // the table entries sum to 0x38D0.
        put_u16(&mut image, 0x500, 0x38D0u16.wrapping_neg());

        let report = validate(&image, PcmType::P01_P59, &NullObserver);
        assert!(report.segments[0].valid, "{:?}", report.segments[0]);
        assert!(report.is_valid());
    }

    #[test]
    fn test_corrupt_table_stops_validation() {
        let mut image = p01_image();
        // Segment 0's end lands beyond the image.
        put_u32(&mut image, 0x510, 0x90000);

        let recorder = Recorder::new();
        let report = validate(&image, PcmType::P01_P59, &recorder);

        assert_eq!(report.failure, Some(ChecksumFailure::CorruptTable));
        assert!(!report.is_valid());
        assert!(report.segments.is_empty());
        assert!(
            recorder
                .messages()
                .contains(&"Checksum table is corrupt.".to_string())
        );
    }

    #[test]
    fn test_e54_fixed_ranges() {
        let mut image = vec![0u8; 0x80000];
        put_u16(&mut image, 0x20002, 0x0005);
        put_u16(&mut image, 0x20000, 0x0005u16.wrapping_neg());

        let report = validate(&image, PcmType::E54, &NullObserver);
        assert!(report.is_valid());
        assert_eq!(report.segments.len(), 6);
        assert_eq!(report.segments[0].name, "Operating System");
        assert_eq!(report.segments[0].end, 0x6FFFF);
    }

    #[test]
    fn test_p08_byte_sum_skips_gap() {
        let mut image = vec![0u8; 0x80000];
        image[0x100] = 0x10;
        image[0x5000] = 0x55; // inside the unsummed gap
        image[0x9000] = 0x22;
        put_u16(&mut image, 0x8004, 0x0032);

        let recorder = Recorder::new();
        let report = validate(&image, PcmType::P08, &recorder);

        assert!(report.is_valid());
        assert_eq!(report.segments.len(), 1);
        let messages = recorder.messages();
        assert_eq!(
            messages[0],
            "\tStart\tEnd\tStored\tNeeded\tVerdict\tSegment Name"
        );
        assert_eq!(messages[1], "\t00000\t7FFFB\t0032\t0032\tGood\tWhole File");
    }

    #[test]
    fn test_p12_indirect_segments() {
        let mut image = vec![0u8; 0x100000];

        // Boot block: pointer at 0x922 leads to the sum, blocks at 0x94A.
        put_u32(&mut image, 0x922, 0x100);
        put_u16(&mut image, 0x100 + 0x900, 0x0007u16.wrapping_neg());
        put_u32(&mut image, 0x94A, 0x2000);
        put_u32(&mut image, 0x94E, 0x200E);
        put_u32(&mut image, 0x952, 0x3000);
        put_u32(&mut image, 0x956, 0x300E);
        put_u16(&mut image, 0x2000, 0x0007);

        // The other seven segments read all-zero pointers and blocks,
        // which sum to zero against a zero stored value.
        let report = validate(&image, PcmType::P12, &NullObserver);

        assert!(report.is_valid());
        assert_eq!(report.segments.len(), 8);
        assert_eq!(report.segments[0].name, "Boot Block");
        assert_eq!(report.segments[0].start, 0x2000);
        assert_eq!(report.segments[0].end, 0x300E);
    }

    /// Stamp the 256/512 KiB P04 search pattern with the given sum
    /// address baked into it.
    fn stamp_p04_pattern(image: &mut [u8], at: usize, sum_address: u32) {
        let mut pattern = [
            0x3C, 0x00, 0x00, 0xFF, 0xFF, 0xC0, 0x82, 0x94, 0x80, 0x20, 0x39, 0, 0, 0, 0, 0x2C,
            0x00, 0xE0, 0x8E, 0xE0,
        ];
        pattern[11..15].copy_from_slice(&sum_address.to_be_bytes());
        image[at..at + 20].copy_from_slice(&pattern);
    }

    // The pattern words at 0x1000 sum to 0x30A5F; everything else in a
    // zeroed image contributes nothing.
    const P04_PATTERN_SUM: u32 = 0x30A5F;

    #[test]
    fn test_p04_whole_file_sum() {
        let mut image = vec![0u8; 0x40000];
        stamp_p04_pattern(&mut image, 0x1000, 0x20000);
        put_u32(&mut image, 0x20000, P04_PATTERN_SUM);

        let recorder = Recorder::new();
        let report = validate(&image, PcmType::P04_256k, &recorder);

        assert!(report.is_valid());
        assert_eq!(report.segments.len(), 1);
        assert_eq!(report.segments[0].stored, P04_PATTERN_SUM);
        assert_eq!(report.segments[0].end, 0x3FFFF);
        // 32-bit sums get the wide columns.
        let messages = recorder.messages();
        assert_eq!(
            messages[0],
            "\tStart\tEnd\tStored\t\tNeeded\t\tVerdict\tSegment Name"
        );
        assert_eq!(
            messages[1],
            "\t00000\t3FFFF\t00030A5F\t00030A5F\tGood\tWhole File"
        );
    }

    #[test]
    fn test_p04_retry_includes_parameter_block() {
        let mut image = vec![0u8; 0x80000];
        stamp_p04_pattern(&mut image, 0x1000, 0x20000);
        // A word inside the parameter block; only the second pass sees it.
        put_u16(&mut image, 0x5000, 0x0123);
        put_u32(&mut image, 0x20000, P04_PATTERN_SUM + 0x0123);

        let recorder = Recorder::new();
        let report = validate(&image, PcmType::P04, &recorder);

        assert!(report.is_valid(), "{:?}", report.segments);
        // Only the final attempt reports a row.
        assert_eq!(recorder.messages().len(), 2);
    }

    #[test]
    fn test_p04_pattern_missing() {
        let image = vec![0u8; 0x40000];
        let report = validate(&image, PcmType::P04_256k, &NullObserver);

        assert_eq!(report.failure, Some(ChecksumFailure::SumAddressNotFound));
        assert!(!report.is_valid());
    }

    #[test]
    fn test_unsupported_families() {
        let image = vec![0u8; 0x80000];
        for pcm_type in [PcmType::Undefined, PcmType::E60] {
            let report = validate(&image, pcm_type, &NullObserver);
            assert_eq!(report.failure, Some(ChecksumFailure::Unsupported));
        }
    }
}
