// src/postprocess.rs

use crate::types::{ModelFamily, ParameterSet};

/// Midjourney flag suffix assembled locally, never requested from the
/// backend. Flag order is fixed: --ar, --v, --stylize, --chaos.
pub fn midjourney_suffix(params: &ParameterSet) -> String {
    let mut flags: Vec<String> = Vec::new();
    if let Some(ref ar) = params.aspect_ratio {
        flags.push(format!("--ar {}", ar));
    }
    if let Some(ref v) = params.version {
        flags.push(format!("--v {}", v));
    }
    if let Some(ref s) = params.stylize {
        flags.push(format!("--stylize {}", s));
    }
    if let Some(ref c) = params.chaos {
        flags.push(format!("--chaos {}", c));
    }
    flags.join(" ")
}

/// Appends the parameter suffix to raw generated text for Midjourney;
/// other families pass through untouched. With no flags set, the text is
/// returned as-is rather than with a dangling separator.
pub fn apply_parameters(family: ModelFamily, raw_text: &str, params: &ParameterSet) -> String {
    if family != ModelFamily::Midjourney {
        return raw_text.to_string();
    }
    let suffix = midjourney_suffix(params);
    if suffix.is_empty() {
        raw_text.to_string()
    } else {
        format!("{} {}", raw_text, suffix)
    }
}
