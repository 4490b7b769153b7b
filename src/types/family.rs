// src/types/family.rs

use std::fmt;

use serde::{Deserialize, Serialize};

/// Target image-model ecosystem an optimized prompt is written for.
/// Determines the instruction template, output language, and whether a
/// parameter suffix is appended locally after generation.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum ModelFamily {
    #[serde(rename = "nano-banana")]
    NanoBanana,
    #[serde(rename = "jimeng")]
    Jimeng,
    #[serde(rename = "midjourney")]
    Midjourney,
}

impl ModelFamily {
    pub fn wire_name(&self) -> &'static str {
        match self {
            ModelFamily::NanoBanana => "nano-banana",
            ModelFamily::Jimeng => "jimeng",
            ModelFamily::Midjourney => "midjourney",
        }
    }
}

impl fmt::Display for ModelFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Generation knobs sent along with a request. The flag fields (version,
/// stylize, chaos) only matter for Midjourney; the other families consult
/// aspect_ratio alone.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParameterSet {
    pub aspect_ratio: Option<String>,
    pub version: Option<String>,
    pub stylize: Option<String>,
    pub chaos: Option<String>,
    pub style: Option<String>,
    pub quality: Option<String>,
    pub style_reference: Option<String>,
}
