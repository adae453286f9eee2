use crate::record::Clock;
use crate::scanner::trim_line;
use derive_builder::Builder;
use std::path::PathBuf;

pub const DEFAULT_TARGET: &str = "src/globals.cpp";
pub const DEFAULT_MARKER: &str = "//APP VERSION";
pub const DEFAULT_DECLARATION: &str = "const char* APP_VERSION";

#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct StampConfig {
    #[builder(default = "PathBuf::from(DEFAULT_TARGET)")]
    pub target: PathBuf,
    #[builder(default = "DEFAULT_MARKER.to_string()")]
    pub marker: String,
    #[builder(default = "DEFAULT_DECLARATION.to_string()")]
    pub declaration: String,
    #[builder(default)]
    pub clock: Clock,
    #[builder(default)]
    pub dry_run: bool,
}

impl StampConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(marker) = &self.marker {
            check_pattern("marker", marker)?;
        }
        if let Some(declaration) = &self.declaration {
            check_pattern("declaration", declaration)?;
        }
        if let Some(target) = &self.target {
            if target.as_os_str().is_empty() {
                return Err("target path must not be empty".to_string());
            }
        }
        Ok(())
    }
}

/// File lines are trimmed before comparison, so a pattern with its own
/// surrounding whitespace could never match.
fn check_pattern(name: &str, value: &str) -> Result<(), String> {
    let trimmed = trim_line(value.as_bytes());
    if trimmed.is_empty() {
        return Err(format!("{name} must not be blank"));
    }
    if trimmed.len() != value.len() {
        return Err(format!("{name} must not have leading or trailing whitespace: {value:?}"));
    }
    Ok(())
}

impl Default for StampConfig {
    fn default() -> Self {
        Self {
            target: PathBuf::from(DEFAULT_TARGET),
            marker: DEFAULT_MARKER.to_string(),
            declaration: DEFAULT_DECLARATION.to_string(),
            clock: Clock::Local,
            dry_run: false,
        }
    }
}

impl StampConfig {
    /// Default settings aimed at `target`.
    pub fn for_target(target: impl Into<PathBuf>) -> Self {
        Self {
            target: target.into(),
            ..Self::default()
        }
    }
}
