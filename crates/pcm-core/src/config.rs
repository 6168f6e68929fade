//! Tool configuration.
//!
//! Where the flash tool finds its interface hardware. Saved between
//! runs so the user only picks a device once.

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Which kind of interface hardware carries the vehicle bus.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceType {
    #[default]
    Serial,
    J2534,
}

/// Configuration for the flash tool.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    /// Interface hardware class.
    pub device_type: DeviceType,
    /// Serial port name for pass-through devices.
    pub serial_port: Option<String>,
    /// Registered J2534 device name.
    pub j2534_device_name: Option<String>,
    /// CAN port name, for modules that talk CAN.
    pub can_port: Option<String>,
}

impl ToolConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ToolConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_round_trip() {
        let config = ToolConfig {
            device_type: DeviceType::J2534,
            serial_port: None,
            j2534_device_name: Some("GM MDI".to_string()),
            can_port: None,
        };

        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: ToolConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.device_type, DeviceType::J2534);
        assert_eq!(parsed.j2534_device_name.as_deref(), Some("GM MDI"));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let parsed: ToolConfig = toml::from_str("serial_port = \"COM4\"").unwrap();
        assert_eq!(parsed.device_type, DeviceType::Serial);
        assert_eq!(parsed.serial_port.as_deref(), Some("COM4"));
        assert!(parsed.can_port.is_none());
    }
}
