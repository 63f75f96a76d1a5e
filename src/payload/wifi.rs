//! Wi-Fi credential payload (WIFI-QR convention)

use crate::error::{Error, Result};
use crate::payload::FieldSet;
use std::fmt;

/// Wi-Fi security mode carried in the `T:` segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WifiSecurity {
    /// WPA/WPA2 personal (default when the field is unset)
    #[default]
    Wpa,
    /// Legacy WEP
    Wep,
    /// Open network; the `P:` segment is omitted entirely
    Nopass,
}

impl WifiSecurity {
    fn from_field(value: &str) -> Result<Self> {
        match value {
            "" | "WPA" => Ok(Self::Wpa),
            "WEP" => Ok(Self::Wep),
            "nopass" => Ok(Self::Nopass),
            other => Err(Error::Validation(format!(
                "Wi-Fi: unknown security mode '{other}' (expected WPA, WEP, or nopass)"
            ))),
        }
    }
}

impl fmt::Display for WifiSecurity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wpa => write!(f, "WPA"),
            Self::Wep => write!(f, "WEP"),
            Self::Nopass => write!(f, "nopass"),
        }
    }
}

/// A Wi-Fi network credential
///
/// Encodes to `WIFI:T:<sec>;S:<ssid>;P:<password>;H:<bool>;;`. The `H:`
/// segment is always emitted, even when the network is not hidden, since
/// scanners commonly expect it present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WifiCredential {
    /// Network name
    pub ssid: String,
    /// Network password; ignored when security is `nopass`
    pub password: String,
    /// Security mode
    pub security: WifiSecurity,
    /// Whether the network does not broadcast its SSID
    pub hidden: bool,
}

impl WifiCredential {
    /// Convert a field set (`ssid`, `password`, `security`, `hidden`) into a
    /// credential record
    pub fn from_fields(fields: &FieldSet) -> Result<Self> {
        let ssid = fields.trimmed("ssid");
        if ssid.is_empty() {
            return Err(Error::Validation("Wi-Fi: SSID is required".to_string()));
        }

        Ok(Self {
            ssid: ssid.to_string(),
            password: fields.value("password").to_string(),
            security: WifiSecurity::from_field(fields.trimmed("security"))?,
            hidden: fields.flag("hidden"),
        })
    }

    /// Serialize to the WIFI-QR string
    pub fn encode(&self) -> String {
        match self.security {
            WifiSecurity::Nopass => {
                format!("WIFI:T:nopass;S:{};H:{};;", self.ssid, self.hidden)
            }
            security => format!(
                "WIFI:T:{};S:{};P:{};H:{};;",
                security, self.ssid, self.password, self.hidden
            ),
        }
    }
}
