use crate::error::{Result, TexwriteError};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Preamble schema - document class and package list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PreambleConfig {
    #[serde(default)]
    pub document: DocumentClassConfig,
    #[serde(default = "default_packages")]
    pub packages: Vec<PackageConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocumentClassConfig {
    #[serde(default = "default_class")]
    pub class: String,
    #[serde(default = "default_class_options")]
    pub options: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PackageConfig {
    pub name: String,
    #[serde(default)]
    pub options: Option<String>,
}

impl PackageConfig {
    fn new(name: &str, options: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            options: options.map(str::to_string),
        }
    }
}

impl Default for PreambleConfig {
    fn default() -> Self {
        Self {
            document: DocumentClassConfig::default(),
            packages: default_packages(),
        }
    }
}

impl Default for DocumentClassConfig {
    fn default() -> Self {
        Self {
            class: default_class(),
            options: default_class_options(),
        }
    }
}

fn default_class() -> String {
    "scrartcl".to_string()
}

fn default_class_options() -> Vec<String> {
    vec![
        "fontsize=11pt".to_string(),
        "paper=a4".to_string(),
        "pagesize=auto".to_string(),
        "parskip=false".to_string(),
        "ngerman".to_string(),
    ]
}

fn default_packages() -> Vec<PackageConfig> {
    vec![
        PackageConfig::new("fontenc", Some("T1")),
        PackageConfig::new("inputenc", Some("utf8")),
        PackageConfig::new("graphicx", None),
        PackageConfig::new("enumerate", None),
        PackageConfig::new("babel", None),
        PackageConfig::new("lmodern", None),
        PackageConfig::new("microtype", None),
    ]
}

impl PreambleConfig {
    /// Parse a preamble config from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| TexwriteError::ConfigParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read a preamble config file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|source| TexwriteError::ConfigReadFailed {
                path: path.to_path_buf(),
                source,
            })?;

        Self::from_toml(&content)
    }

    /// Write this config as pretty TOML
    pub fn to_file(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| TexwriteError::ConfigSerializeError(e.to_string()))?;

        std::fs::write(path.as_ref(), content).map_err(TexwriteError::IoError)?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.document.class.trim().is_empty() {
            return Err(TexwriteError::ConfigInvalidValue {
                field: "document.class".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        if let Some(index) = self.packages.iter().position(|p| p.name.trim().is_empty()) {
            return Err(TexwriteError::ConfigInvalidValue {
                field: format!("packages[{}].name", index),
                reason: "must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Render the preamble text, ending with `\begin{document}` and a blank line
    ///
    /// The default config renders exactly [`crate::template::LATEX_HEADER`].
    pub fn render(&self) -> String {
        let mut out = String::new();

        // Writing into a String cannot fail
        if self.document.options.is_empty() {
            let _ = writeln!(out, r"\documentclass{{{}}}", self.document.class);
        } else {
            out.push_str("\\documentclass[\n");
            out.push('\t');
            out.push_str(&self.document.options.join(",\n\t"));
            let _ = writeln!(out, "\n]{{{}}}", self.document.class);
        }
        out.push('\n');

        if !self.packages.is_empty() {
            for package in &self.packages {
                match &package.options {
                    Some(options) => {
                        let _ = writeln!(out, r"\usepackage[{}]{{{}}}", options, package.name);
                    }
                    None => {
                        let _ = writeln!(out, r"\usepackage{{{}}}", package.name);
                    }
                }
            }
            out.push('\n');
        }

        out.push_str("\\begin{document}\n\n");
        out
    }
}
