//! Firmware image identification.
//!
//! Works out which PCM family produced an image by probing byte
//! signatures at family-specific offsets, then reads the operating
//! system ID from wherever that family keeps it.

use byteorder::{BigEndian, ByteOrder};

use crate::events::{PcmEvent, PcmObserver};
use crate::profile::PcmType;

/// One probe: the image must hold `expected` at `offset`.
struct Signature {
    offset: usize,
    expected: &'static [u8],
}

/// A candidate family. It matches when every probe of any one
/// signature set holds. Candidates are tried in table order and the
/// first match wins, so narrower rules must come first (an E54 also
/// looks like a P01).
struct Candidate {
    pcm_type: PcmType,
    label: &'static str,
    any_of: &'static [&'static [Signature]],
}

const CANDIDATES_256K: &[Candidate] = &[Candidate {
    pcm_type: PcmType::P04_256k,
    label: "P04 256Kb",
    any_of: &[&[Signature {
        offset: 0x3FFFE,
        expected: &[0xA5, 0x5A],
    }]],
}];

const CANDIDATES_512K: &[Candidate] = &[
    Candidate {
        pcm_type: PcmType::E54,
        label: "E54 512Kb",
        any_of: &[&[
            Signature {
                offset: 0x1FFFE,
                expected: &[0x4A, 0xFC],
            },
            Signature {
                offset: 0x7FFFC,
                expected: &[0x4A, 0xFC, 0x4A, 0xFC],
            },
            // Zeroes here keep a 98/99 BlackBox from passing as E54.
            Signature {
                offset: 0x3FFC,
                expected: &[0x00, 0x00, 0x00, 0x00],
            },
        ]],
    },
    Candidate {
        pcm_type: PcmType::BlackBox,
        label: "Vortec BlackBox 512Kb",
        any_of: &[&[
            Signature {
                offset: 0x1FFFE,
                expected: &[0x4A, 0xFC],
            },
            Signature {
                offset: 0x7FFFE,
                expected: &[0x4A, 0xFC],
            },
            Signature {
                offset: 0x20002,
                expected: &[0x00, 0x01],
            },
            Signature {
                offset: 0x2000A,
                expected: &[0x01, 0x00],
            },
        ]],
    },
    Candidate {
        pcm_type: PcmType::P01_P59,
        label: "P01 512Kb",
        any_of: &[&[
            Signature {
                offset: 0x1FFFE,
                expected: &[0x4A, 0xFC],
            },
            Signature {
                offset: 0x7FFFE,
                expected: &[0x4A, 0xFC],
            },
        ]],
    },
    Candidate {
        pcm_type: PcmType::P04,
        label: "P04 512Kb",
        // Most P04s end with the OSID then A5 5A; some 1998s end
        // with A5 5A FF FF instead.
        any_of: &[
            &[Signature {
                offset: 0x7FFFE,
                expected: &[0xA5, 0x5A],
            }],
            &[Signature {
                offset: 0x7FFFC,
                expected: &[0xA5, 0x5A, 0xFF, 0xFF],
            }],
        ],
    },
    Candidate {
        pcm_type: PcmType::P10,
        label: "P10 512Kb",
        any_of: &[&[
            Signature {
                offset: 0x17FFE,
                expected: &[0x55, 0x55],
            },
            Signature {
                offset: 0x7FFFC,
                expected: &[0xA5, 0x5A, 0xA5, 0xA5],
            },
        ]],
    },
    Candidate {
        pcm_type: PcmType::P08,
        label: "P08 512Kb",
        any_of: &[&[Signature {
            offset: 0x7FFFC,
            expected: &[0xA5, 0x5A, 0xA5, 0xA5],
        }]],
    },
];

const CANDIDATES_1M: &[Candidate] = &[
    Candidate {
        pcm_type: PcmType::P01_P59,
        label: "P59 1Mb",
        any_of: &[&[
            Signature {
                offset: 0x1FFFE,
                expected: &[0x4A, 0xFC],
            },
            Signature {
                offset: 0xFFFFE,
                expected: &[0x4A, 0xFC],
            },
        ]],
    },
    Candidate {
        pcm_type: PcmType::P05,
        label: "P05 1Mb",
        any_of: &[&[Signature {
            offset: 0xFFFFE,
            expected: &[0xA5, 0x5A],
        }]],
    },
    Candidate {
        pcm_type: PcmType::P12,
        label: "P12 1Mb",
        any_of: &[&[Signature {
            offset: 0xFFFF8,
            expected: &[0xAA, 0x55],
        }]],
    },
];

const CANDIDATES_2M: &[Candidate] = &[Candidate {
    pcm_type: PcmType::P12,
    label: "P12 2Mb",
    any_of: &[&[Signature {
        offset: 0x17FFF8,
        expected: &[0xAA, 0x55],
    }]],
}];

/// Determine the hardware family of a firmware image.
///
/// The image length gates which candidate table applies; within a
/// table, the first matching candidate wins.
pub fn identify(image: &[u8], observer: &dyn PcmObserver) -> PcmType {
    let candidates: &[Candidate] = match image.len() {
        0x40000 => {
            user_message(observer, "Identifying 256kb file.");
            CANDIDATES_256K
        }
        0x80000 => {
            user_message(observer, "Identifying 512kb file.");
            CANDIDATES_512K
        }
        0x100000 => {
            user_message(observer, "Identifying 1024Kb file.");
            CANDIDATES_1M
        }
        0x200000 => {
            user_message(observer, "Identifying 2048Kb file.");
            CANDIDATES_2M
        }
        other => {
            user_message(
                observer,
                &format!(
                    "Files must be 256k, 512k, 1024k or 2048k. This file is {} / {:X} bytes long.",
                    other, other
                ),
            );
            return PcmType::Undefined;
        }
    };

    for candidate in candidates {
        observer.on_event(&PcmEvent::DebugMessage {
            message: format!("Trying {}", candidate.label),
        });
        if matches(image, candidate) {
            user_message(observer, &format!("File is {}.", candidate.label));
            return candidate.pcm_type;
        }
    }

    observer.on_event(&PcmEvent::DebugMessage {
        message: "Unable to identify or validate bin image content".to_string(),
    });
    PcmType::Undefined
}

/// Read the operating system ID from its family-specific offset.
///
/// Returns 0 when the family is unknown or the offset is out of range.
pub fn read_osid(image: &[u8], pcm_type: PcmType) -> u32 {
    let offset = match pcm_type {
        PcmType::P01_P59 => 0x504,
        PcmType::P04 | PcmType::P04_Early | PcmType::P04_256k => match image.len() {
            0x40000 => 0x3FFFA,
            0x80000 => {
                // Some 1998 P04s end in FF FF and keep the OSID two
                // bytes earlier.
                if image_has(image, 0x7FFFE, &[0xFF, 0xFF]) {
                    0x7FFF8
                } else {
                    0x7FFFA
                }
            }
            _ => return 0,
        },
        PcmType::P05 => 0xFFFFA,
        PcmType::P08 => 0x8000,
        PcmType::P10 => 0x52E,
        PcmType::P12 => 0x8004,
        PcmType::E54 | PcmType::BlackBox => 0x20004,
        PcmType::Undefined | PcmType::E60 => return 0,
    };

    image
        .get(offset..offset + 4)
        .map(BigEndian::read_u32)
        .unwrap_or(0)
}

fn matches(image: &[u8], candidate: &Candidate) -> bool {
    candidate
        .any_of
        .iter()
        .any(|set| set.iter().all(|sig| image_has(image, sig.offset, sig.expected)))
}

fn image_has(image: &[u8], offset: usize, expected: &[u8]) -> bool {
    image
        .get(offset..offset + expected.len())
        .is_some_and(|window| window == expected)
}

fn user_message(observer: &dyn PcmObserver, message: &str) {
    observer.on_event(&PcmEvent::UserMessage {
        message: message.to_string(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::NullObserver;

    fn stamp(image: &mut [u8], offset: usize, bytes: &[u8]) {
        image[offset..offset + bytes.len()].copy_from_slice(bytes);
    }

    #[test]
    fn test_unsupported_length() {
        assert_eq!(identify(&[0u8; 1000], &NullObserver), PcmType::Undefined);
        assert_eq!(identify(&[], &NullObserver), PcmType::Undefined);
    }

    #[test]
    fn test_no_signature_match() {
        let image = vec![0u8; 0x80000];
        assert_eq!(identify(&image, &NullObserver), PcmType::Undefined);
    }

    #[test]
    fn test_p04_256k() {
        let mut image = vec![0u8; 0x40000];
        stamp(&mut image, 0x3FFFE, &[0xA5, 0x5A]);
        assert_eq!(identify(&image, &NullObserver), PcmType::P04_256k);
    }

    #[test]
    fn test_p01_512k() {
        let mut image = vec![0u8; 0x80000];
        stamp(&mut image, 0x1FFFE, &[0x4A, 0xFC]);
        stamp(&mut image, 0x7FFFE, &[0x4A, 0xFC]);
        assert_eq!(identify(&image, &NullObserver), PcmType::P01_P59);
    }

    #[test]
    fn test_e54_wins_over_p01() {
        // An E54 image carries the P01 end markers too; the extra
        // 4A FC pair at 0x7FFFC must send it down the E54 path.
        let mut image = vec![0u8; 0x80000];
        stamp(&mut image, 0x1FFFE, &[0x4A, 0xFC]);
        stamp(&mut image, 0x7FFFC, &[0x4A, 0xFC, 0x4A, 0xFC]);
        assert_eq!(identify(&image, &NullObserver), PcmType::E54);
    }

    #[test]
    fn test_blackbox_beats_p01() {
        let mut image = vec![0u8; 0x80000];
        stamp(&mut image, 0x1FFFE, &[0x4A, 0xFC]);
        stamp(&mut image, 0x7FFFE, &[0x4A, 0xFC]);
        stamp(&mut image, 0x20002, &[0x00, 0x01]);
        stamp(&mut image, 0x2000A, &[0x01, 0x00]);
        assert_eq!(identify(&image, &NullObserver), PcmType::BlackBox);
    }

    #[test]
    fn test_p04_512k_both_trailers() {
        let mut image = vec![0u8; 0x80000];
        stamp(&mut image, 0x7FFFE, &[0xA5, 0x5A]);
        assert_eq!(identify(&image, &NullObserver), PcmType::P04);

        let mut image = vec![0u8; 0x80000];
        stamp(&mut image, 0x7FFFC, &[0xA5, 0x5A, 0xFF, 0xFF]);
        assert_eq!(identify(&image, &NullObserver), PcmType::P04);
    }

    #[test]
    fn test_p10_beats_p08() {
        let mut image = vec![0u8; 0x80000];
        stamp(&mut image, 0x17FFE, &[0x55, 0x55]);
        stamp(&mut image, 0x7FFFC, &[0xA5, 0x5A, 0xA5, 0xA5]);
        assert_eq!(identify(&image, &NullObserver), PcmType::P10);

        // Without the P10 marker the same trailer means P08.
        let mut image = vec![0u8; 0x80000];
        stamp(&mut image, 0x7FFFC, &[0xA5, 0x5A, 0xA5, 0xA5]);
        assert_eq!(identify(&image, &NullObserver), PcmType::P08);
    }

    #[test]
    fn test_one_megabyte_families() {
        let mut image = vec![0u8; 0x100000];
        stamp(&mut image, 0x1FFFE, &[0x4A, 0xFC]);
        stamp(&mut image, 0xFFFFE, &[0x4A, 0xFC]);
        assert_eq!(identify(&image, &NullObserver), PcmType::P01_P59);

        let mut image = vec![0u8; 0x100000];
        stamp(&mut image, 0xFFFFE, &[0xA5, 0x5A]);
        assert_eq!(identify(&image, &NullObserver), PcmType::P05);

        let mut image = vec![0u8; 0x100000];
        stamp(&mut image, 0xFFFF8, &[0xAA, 0x55]);
        assert_eq!(identify(&image, &NullObserver), PcmType::P12);
    }

    #[test]
    fn test_two_megabyte_p12() {
        let mut image = vec![0u8; 0x200000];
        stamp(&mut image, 0x17FFF8, &[0xAA, 0x55]);
        assert_eq!(identify(&image, &NullObserver), PcmType::P12);
    }

    #[test]
    fn test_read_osid_p01() {
        let mut image = vec![0u8; 0x80000];
        stamp(&mut image, 0x504, &[0x00, 0xC0, 0x2A, 0x16]);
        assert_eq!(read_osid(&image, PcmType::P01_P59), 12593686);
    }

    #[test]
    fn test_read_osid_p04_trailer_variants() {
        // FF FF trailer moves the OSID two bytes down.
        let mut image = vec![0u8; 0x80000];
        stamp(&mut image, 0x7FFFE, &[0xFF, 0xFF]);
        stamp(&mut image, 0x7FFF8, &[0x00, 0x8E, 0xF9, 0x55]);
        assert_eq!(read_osid(&image, PcmType::P04), 9369941);

        let mut image = vec![0u8; 0x80000];
        stamp(&mut image, 0x7FFFA, &[0x00, 0x8E, 0xF9, 0x55]);
        assert_eq!(read_osid(&image, PcmType::P04), 9369941);
    }

    #[test]
    fn test_read_osid_undefined() {
        let image = vec![0u8; 0x80000];
        assert_eq!(read_osid(&image, PcmType::Undefined), 0);
        assert_eq!(read_osid(&image, PcmType::E60), 0);
    }
}
