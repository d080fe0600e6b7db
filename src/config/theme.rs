mod font_family;

pub use font_family::{FontFamilies, FontStack, GENERIC_FAMILIES};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Extensions;

/// Design tokens the build tool generates utilities from.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    /// Custom font-family tokens, each an ordered stack ending in a generic family.
    #[serde(default)]
    pub font_family: FontFamilies,

    /// Additive theme overrides, interpreted by the build tool.
    #[serde(default)]
    pub extend: Extensions,
}
