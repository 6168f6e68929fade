//! Operating-system ID registry.
//!
//! A module's operating-system ID pins down its hardware family and,
//! for aftermarket operating systems, overrides the unlock algorithm
//! or flash size that the family defaults would pick.

use crate::profile::{HardwareProfile, PcmType};

mod table;

use table::OSID_GROUPS;

/// A group of operating-system IDs sharing hardware and overrides.
struct OsidGroup {
    hardware: PcmType,
    description: Option<&'static str>,
    key_algorithm: Option<u16>,
    image_size: Option<usize>,
    osids: &'static [u32],
}

/// What the registry knows about one operating system.
#[derive(Debug, Clone)]
pub struct OsidInfo {
    pub osid: u32,
    pub description: String,
    pub profile: HardwareProfile,
}

/// Look up an operating-system ID.
///
/// Unknown IDs come back as an undefined, unsupported profile rather
/// than an error, so callers can still report what they read.
pub fn lookup(osid: u32) -> OsidInfo {
    for group in OSID_GROUPS {
        if group.osids.contains(&osid) {
            let mut profile = HardwareProfile::for_family(group.hardware);
            if let Some(algorithm) = group.key_algorithm {
                profile.key_algorithm = algorithm;
            }
            if let Some(size) = group.image_size {
                profile.image_size = size;
            }
            let description = group.description.unwrap_or(profile.description).to_string();
            return OsidInfo {
                osid,
                description,
                profile,
            };
        }
    }

    OsidInfo {
        osid,
        description: format!("Unknown OSID: {osid}"),
        profile: HardwareProfile::for_family(PcmType::Undefined),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_p01_osid() {
        let info = lookup(12593358);
        assert_eq!(info.profile.pcm_type, PcmType::P01_P59);
        assert!(info.profile.is_supported);
        assert_eq!(info.profile.key_algorithm, 40);
        assert_eq!(info.description, "P01 Service No 12200411");
    }

    #[test]
    fn test_custom_os_overrides_key_algorithm() {
        let info = lookup(1251001);
        assert_eq!(info.profile.pcm_type, PcmType::P01_P59);
        assert_eq!(info.profile.key_algorithm, 3);
        assert_eq!(info.description, "VCM Suite 2 Bar");
    }

    #[test]
    fn test_custom_os_overrides_image_size() {
        let info = lookup(1273057);
        assert_eq!(info.profile.key_algorithm, 40);
        assert_eq!(info.profile.image_size, 0x100000);
    }

    #[test]
    fn test_e54_service_number() {
        let info = lookup(15063376);
        assert_eq!(info.profile.pcm_type, PcmType::E54);
        assert_eq!(info.description, "E54 Service No 9388505");
        assert_eq!(info.profile.key_algorithm, 54);
    }

    #[test]
    fn test_2mb_p12_size_override() {
        let info = lookup(12609805);
        assert_eq!(info.profile.pcm_type, PcmType::P12);
        assert_eq!(info.profile.image_size, 0x200000);
    }

    #[test]
    fn test_unknown_osid_is_unsupported() {
        let info = lookup(999);
        assert_eq!(info.profile.pcm_type, PcmType::Undefined);
        assert!(!info.profile.is_supported);
        assert!(info.description.contains("Unknown OSID"));
    }
}
