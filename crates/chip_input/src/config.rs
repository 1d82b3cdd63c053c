use serde::Deserialize;

/// Markup contract of the chip editor: which fields get enhanced and how the
/// generated editor is labelled.
///
/// Every field has a default, so a TOML override only needs the keys it changes:
///
/// ```
/// let config = chip_input::ChipInputConfig::from_toml_str(r#"
///     target_class = "scopes-chip-input"
///     placeholder = "Add scope"
/// "#).unwrap();
/// assert_eq!(config.target_tag, "textarea");
/// assert_eq!(config.placeholder, "Add scope");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChipInputConfig {
    pub target_tag: String,
    pub target_class: String,
    /// Set to `"1"` on a field once an editor is attached to it.
    pub ready_attribute: String,
    /// Added to the backing field; the field stays in the form and is still submitted.
    pub hidden_class: String,
    pub editor_class: String,
    pub list_class: String,
    pub input_class: String,
    pub chip_class: String,
    pub remove_class: String,
    pub placeholder: String,
    pub remove_label: String,
    pub remove_glyph: String,
}

impl Default for ChipInputConfig {
    fn default() -> Self {
        Self {
            target_tag: "textarea".to_string(),
            target_class: "permissions-chip-input".to_string(),
            ready_attribute: "data-tag-input-ready".to_string(),
            hidden_class: "permission-chip-hidden".to_string(),
            editor_class: "permission-tag-editor".to_string(),
            list_class: "permission-chip-list".to_string(),
            input_class: "permission-chip-editor-input".to_string(),
            chip_class: "permission-tag-chip".to_string(),
            remove_class: "permission-tag-remove".to_string(),
            placeholder: "Type code and press Enter or comma".to_string(),
            remove_label: "Remove permission".to_string(),
            remove_glyph: "\u{d7}".to_string(),
        }
    }
}

impl ChipInputConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Names used to find or build markup must not be blank.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let names = [
            ("target_tag", &self.target_tag),
            ("target_class", &self.target_class),
            ("ready_attribute", &self.ready_attribute),
            ("hidden_class", &self.hidden_class),
            ("editor_class", &self.editor_class),
            ("list_class", &self.list_class),
            ("input_class", &self.input_class),
            ("chip_class", &self.chip_class),
            ("remove_class", &self.remove_class),
        ];
        for (field, value) in names {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyField(field));
            }
        }
        Ok(())
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Parse(toml::de::Error),
    EmptyField(&'static str),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Parse(err) => write!(f, "invalid chip input config: {err}"),
            ConfigError::EmptyField(field) => write!(f, "config field `{field}` must not be empty"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(err) => Some(err),
            ConfigError::EmptyField(_) => None,
        }
    }
}
