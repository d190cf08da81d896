// Editor configuration

use serde::{Deserialize, Serialize};

/// Preview title shown while the campaign title is empty
pub const DEFAULT_PREVIEW_TITLE: &str = "Buy more and save";

/// Preview description shown while the description is empty
pub const DEFAULT_PREVIEW_DESCRIPTION: &str = "Apply for all products in store";

/// Tunables for a new editing session
///
/// Every field has a default, so a partial JSON object is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    pub preview_title_placeholder: String,

    pub preview_description_placeholder: String,

    /// One empty tier is seeded per entry, in order
    pub seed_quantities: Vec<u32>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            preview_title_placeholder: DEFAULT_PREVIEW_TITLE.to_string(),
            preview_description_placeholder: DEFAULT_PREVIEW_DESCRIPTION.to_string(),
            seed_quantities: vec![1, 2],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: EditorConfig =
            serde_json::from_str(r#"{"seedQuantities":[5]}"#).unwrap();

        assert_eq!(config.seed_quantities, vec![5]);
        assert_eq!(config.preview_title_placeholder, DEFAULT_PREVIEW_TITLE);
        assert_eq!(
            config.preview_description_placeholder,
            DEFAULT_PREVIEW_DESCRIPTION
        );
    }
}
