use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Domains younger than this many days count as newly created.
    pub newly_created_threshold_days: u32,
    /// Indicator count at or above which the verdict flips to phishing.
    pub phishing_indicator_threshold: u32,
    /// Extra substrings to treat as suspicious tokens on top of the
    /// built-in list.
    pub extra_suspicious_tokens: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            newly_created_threshold_days: 180,
            phishing_indicator_threshold: 3,
            extra_suspicious_tokens: Vec::new(),
        }
    }
}

impl Config {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    pub fn to_file(&self, path: &str) -> anyhow::Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
