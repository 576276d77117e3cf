use anyhow::{Context, Result};

/// Generator configuration loaded from environment variables.
/// Every setting has a default, so an empty environment is valid.
#[derive(Debug, Clone)]
pub struct Config {
    pub rust_log: String,
    /// Column width for list items (hanging indent included).
    pub list_width: usize,
    /// Column width for the summary paragraph.
    pub summary_width: usize,
    /// Name of the LaTeX file holding the `\entry` / `\reference` macros.
    pub latex_preamble: String,
    /// Country prefix used in `tel:` links.
    pub phone_prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            rust_log: "warn".to_string(),
            list_width: 70,
            summary_width: 80,
            latex_preamble: "common_preamble.tex".to_string(),
            phone_prefix: "+1".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            rust_log: optional_env("RESUMEGEN_LOG").unwrap_or(defaults.rust_log),
            list_width: width_env("RESUMEGEN_LIST_WIDTH", defaults.list_width)?,
            summary_width: width_env("RESUMEGEN_SUMMARY_WIDTH", defaults.summary_width)?,
            latex_preamble: optional_env("RESUMEGEN_PREAMBLE").unwrap_or(defaults.latex_preamble),
            phone_prefix: optional_env("RESUMEGEN_PHONE_PREFIX").unwrap_or(defaults.phone_prefix),
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn width_env(key: &str, default: usize) -> Result<usize> {
    match optional_env(key) {
        None => Ok(default),
        Some(raw) => {
            let width = raw
                .trim()
                .parse::<usize>()
                .with_context(|| format!("{key} must be a positive integer, got '{raw}'"))?;
            anyhow::ensure!(width > 0, "{key} must be greater than zero");
            Ok(width)
        }
    }
}
