// SPDX-FileCopyrightText: 2026 har2doc contributors
//
// SPDX-License-Identifier: ISC

//! Configuration loading: masking rules and general toggles.

use serde::Deserialize;

use crate::masking::MaskingRule;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct GeneralConfig {
    /// Pass malformed declared-JSON bodies through instead of failing the
    /// entry.
    #[serde(default)]
    pub lenient_json: bool,
}

/// TOML configuration.
///
/// Masking rules are an array of tables so that their order in the file is
/// their application order:
///
/// ```toml
/// [general]
/// lenient_json = false
///
/// [[mask]]
/// find = "realpassword!@"
/// replace = "1q2w3e4r!@"
///
/// [[mask]]
/// find = "01012345678"
/// replace = "01000000000"
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default, rename = "mask")]
    pub masks: Vec<MaskingRule>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let s = std::fs::read_to_string(path.as_ref())?;
        Ok(toml::from_str(&s)?)
    }
}
