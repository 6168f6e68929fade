//! PCM hardware families and their flash profiles.

use std::fmt;

/// PCM hardware family.
///
/// Variant names follow GM service nomenclature, underscores included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(non_camel_case_types)]
pub enum PcmType {
    /// Unknown or unrecognized hardware.
    Undefined,
    /// 512 KiB P01 and 1 MiB P59, same board family.
    P01_P59,
    /// 1996/1997 256 KiB P04.
    P04_Early,
    /// 1998+ 512 KiB P04.
    P04,
    /// 256 KiB P04 as identified from an image signature.
    P04_256k,
    P05,
    P08,
    P10,
    P12,
    /// LB7 Duramax.
    E54,
    /// LLY Duramax.
    E60,
    /// 1996-2002 Vortec truck PCM.
    BlackBox,
}

impl fmt::Display for PcmType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PcmType::Undefined => "Undefined",
            PcmType::P01_P59 => "P01_P59",
            PcmType::P04_Early => "P04_Early",
            PcmType::P04 => "P04",
            PcmType::P04_256k => "P04_256k",
            PcmType::P05 => "P05",
            PcmType::P08 => "P08",
            PcmType::P10 => "P10",
            PcmType::P12 => "P12",
            PcmType::E54 => "E54",
            PcmType::E60 => "E60",
            PcmType::BlackBox => "BlackBox",
        };
        write!(f, "{}", name)
    }
}

/// Everything the flash tool knows about one hardware family.
///
/// OSID-specific overrides (description, key algorithm, image size)
/// are applied on top of this by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HardwareProfile {
    pub pcm_type: PcmType,
    pub description: &'static str,
    pub is_supported: bool,
    pub supports_read: bool,
    pub supports_write: bool,
    pub supports_slave_cpu_write: bool,
    pub supports_write_by_segment: bool,
    /// The flash sits behind a second CPU (P10, P12).
    pub has_slave_cpu: bool,
    /// A loader must run before the kernel can be uploaded.
    pub loader_required: bool,
    pub kernel_file: Option<&'static str>,
    pub kernel_base_address: u32,
    pub loader_file: Option<&'static str>,
    pub loader_base_address: u32,
    pub image_base_address: u32,
    pub image_size: usize,
    pub key_algorithm: u16,
    pub supports_checksum: bool,
    pub supports_flash_crc: bool,
    pub supports_flash_id: bool,
    pub supports_kernel_version: bool,
    pub kernel_max_block_size: usize,
}

impl HardwareProfile {
    /// Profile defaults for a hardware family.
    pub fn for_family(pcm_type: PcmType) -> Self {
        let base = Self {
            pcm_type,
            description: "Not Set",
            is_supported: false,
            supports_read: false,
            supports_write: false,
            supports_slave_cpu_write: false,
            supports_write_by_segment: false,
            has_slave_cpu: false,
            loader_required: false,
            kernel_file: None,
            kernel_base_address: 0,
            loader_file: None,
            loader_base_address: 0,
            image_base_address: 0,
            image_size: 0,
            key_algorithm: 0,
            supports_checksum: false,
            supports_flash_crc: false,
            supports_flash_id: false,
            supports_kernel_version: false,
            kernel_max_block_size: 4096,
        };

        match pcm_type {
            PcmType::Undefined => Self {
                description: "unknown",
                ..base
            },

            PcmType::P01_P59 => Self {
                description: "P01 512KiB or P59 1024KiB",
                is_supported: true,
                supports_read: true,
                supports_write: true,
                supports_slave_cpu_write: true,
                supports_write_by_segment: true,
                kernel_file: Some("Kernel-P01.bin"),
                kernel_base_address: 0xFF8000,
                // P01 size; the registry overrides to 1 MiB for P59 OSIDs.
                image_size: 512 * 1024,
                key_algorithm: 40,
                supports_checksum: true,
                supports_flash_crc: true,
                supports_flash_id: true,
                supports_kernel_version: true,
                ..base
            },

            // The 256 KiB generation, whether known by OSID or spotted
            // from the image signature.
            PcmType::P04_Early | PcmType::P04_256k => Self {
                description: "P04 1996/1997 256KiB V6",
                is_supported: true,
                supports_read: true,
                supports_write: true,
                supports_slave_cpu_write: true,
                loader_required: true,
                kernel_file: Some("Kernel-P04_Early.bin"),
                kernel_base_address: 0xFF8000,
                loader_file: Some("Loader-P04.bin"),
                loader_base_address: 0xFF9890,
                image_size: 256 * 1024,
                key_algorithm: 6,
                supports_checksum: true,
                supports_flash_crc: true,
                supports_flash_id: true,
                supports_kernel_version: true,
                ..base
            },

            PcmType::P04 => Self {
                description: "P04 1998+ 512KiB V6",
                is_supported: true,
                supports_read: true,
                supports_write: true,
                supports_slave_cpu_write: true,
                loader_required: true,
                kernel_file: Some("Kernel-P04.bin"),
                kernel_base_address: 0xFF8000,
                loader_file: Some("Loader-P04.bin"),
                loader_base_address: 0xFF9890,
                image_size: 512 * 1024,
                key_algorithm: 14,
                supports_checksum: true,
                supports_flash_crc: true,
                supports_flash_id: true,
                supports_kernel_version: true,
                ..base
            },

            // Recognized but not flashable yet.
            PcmType::P05 => Self {
                description: "P05",
                ..base
            },

            PcmType::P08 => Self {
                description: "P08 512KiB i4",
                is_supported: true,
                supports_read: true,
                supports_write: true,
                supports_slave_cpu_write: true,
                kernel_file: Some("Kernel-P08.bin"),
                kernel_base_address: 0xFFAC00,
                image_size: 512 * 1024,
                key_algorithm: 13,
                supports_checksum: true,
                supports_flash_crc: true,
                supports_flash_id: true,
                supports_kernel_version: true,
                ..base
            },

            PcmType::P10 => Self {
                description: "P10 1Mb",
                is_supported: true,
                supports_read: true,
                supports_write: true,
                supports_write_by_segment: true,
                has_slave_cpu: true,
                kernel_file: Some("Kernel-P10.bin"),
                kernel_base_address: 0xFFB800,
                image_size: 512 * 1024,
                key_algorithm: 66,
                supports_checksum: true,
                supports_flash_crc: true,
                supports_flash_id: true,
                supports_kernel_version: true,
                ..base
            },

            PcmType::P12 => Self {
                description: "P12 1Mb (Atlas I4/I5/I6)",
                is_supported: true,
                supports_read: true,
                supports_write: true,
                supports_write_by_segment: true,
                has_slave_cpu: true,
                kernel_file: Some("Kernel-P12.bin"),
                kernel_base_address: 0xFF2000,
                image_size: 1024 * 1024,
                key_algorithm: 91,
                supports_checksum: true,
                supports_flash_crc: true,
                supports_flash_id: true,
                supports_kernel_version: true,
                ..base
            },

            PcmType::E54 => Self {
                description: "E54",
                is_supported: true,
                supports_read: true,
                supports_write: true,
                supports_slave_cpu_write: true,
                supports_write_by_segment: true,
                kernel_file: Some("Kernel-E54.bin"),
                kernel_base_address: 0xFF9100,
                image_size: 512 * 1024,
                key_algorithm: 54,
                supports_checksum: true,
                supports_flash_crc: true,
                supports_flash_id: true,
                supports_kernel_version: true,
                ..base
            },

            PcmType::E60 => Self {
                description: "E60 LLY Duramax",
                image_size: 1024 * 1024,
                key_algorithm: 2,
                ..base
            },

            PcmType::BlackBox => Self {
                description: "Vortec BlackBox",
                is_supported: true,
                supports_read: true,
                supports_write: true,
                kernel_file: Some("Kernel-BlackBox.bin"),
                kernel_base_address: 0xFFC300,
                image_size: 512 * 1024,
                key_algorithm: 16,
                supports_checksum: true,
                supports_flash_crc: true,
                supports_flash_id: true,
                supports_kernel_version: true,
                ..base
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_p01_p59_profile() {
        let profile = HardwareProfile::for_family(PcmType::P01_P59);
        assert!(profile.is_supported);
        assert!(profile.supports_write_by_segment);
        assert_eq!(profile.kernel_file, Some("Kernel-P01.bin"));
        assert_eq!(profile.kernel_base_address, 0xFF8000);
        assert_eq!(profile.image_size, 512 * 1024);
        assert_eq!(profile.key_algorithm, 40);
    }

    #[test]
    fn test_p04_generations_share_a_profile() {
        let early = HardwareProfile::for_family(PcmType::P04_Early);
        let by_signature = HardwareProfile::for_family(PcmType::P04_256k);
        assert_eq!(early.kernel_file, by_signature.kernel_file);
        assert_eq!(early.image_size, 256 * 1024);
        assert!(early.loader_required);
        assert_eq!(early.loader_file, Some("Loader-P04.bin"));
        assert_eq!(early.loader_base_address, 0xFF9890);
    }

    #[test]
    fn test_unsupported_families() {
        assert!(!HardwareProfile::for_family(PcmType::P05).is_supported);
        assert!(!HardwareProfile::for_family(PcmType::E60).is_supported);
        let undefined = HardwareProfile::for_family(PcmType::Undefined);
        assert!(!undefined.is_supported);
        assert_eq!(undefined.description, "unknown");
    }

    #[test]
    fn test_block_size_is_uniform() {
        for pcm_type in [PcmType::P01_P59, PcmType::P12, PcmType::Undefined] {
            assert_eq!(
                HardwareProfile::for_family(pcm_type).kernel_max_block_size,
                4096
            );
        }
    }

    #[test]
    fn test_display_matches_service_names() {
        assert_eq!(PcmType::P01_P59.to_string(), "P01_P59");
        assert_eq!(PcmType::P04_256k.to_string(), "P04_256k");
        assert_eq!(PcmType::BlackBox.to_string(), "BlackBox");
    }
}
