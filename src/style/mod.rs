use anyhow::{Context, Result};
use image::Rgba;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::border::{BorderPalette, BAND_COUNT};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum StyleError {
    #[error("Style '{name}' defines {found} bands, expected {expected}")]
    BandCount {
        name: String,
        found: usize,
        expected: usize,
    },
}

/// A named border palette as written in a style YAML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Style {
    pub name: String,

    #[serde(default = "default_transparent")]
    pub transparent: [u8; 4],

    #[serde(default = "default_outline")]
    pub outline: [u8; 4],

    #[serde(default = "default_shadow")]
    pub shadow: [u8; 4],

    /// Darkest first; exactly seven entries
    pub bands: Vec<[u8; 4]>,
}

fn default_transparent() -> [u8; 4] {
    [0, 0, 0, 0]
}

fn default_outline() -> [u8; 4] {
    [0, 0, 0, 255]
}

fn default_shadow() -> [u8; 4] {
    [127, 127, 127, 100]
}

impl Style {
    /// Load style from filesystem path
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read style file: {}", path.display()))?;

        Self::parse(&content).with_context(|| format!("Invalid style file: {}", path.display()))
    }

    /// Load style by name, searching embedded styles first, then filesystem
    pub fn load_by_name(name: &str) -> Result<Self> {
        if let Ok(style) = Self::load_builtin(name) {
            return Ok(style);
        }

        for base_path in Self::style_search_paths() {
            let style_path = base_path.join(format!("{}.yaml", name));
            if style_path.exists() {
                return Self::load(&style_path);
            }
        }

        anyhow::bail!("Style '{}' not found in embedded styles or filesystem", name)
    }

    /// Treat `name_or_path` as a file if one exists there, otherwise as a style name
    pub fn resolve(name_or_path: &str) -> Result<Self> {
        let path = Path::new(name_or_path);
        if path.is_file() {
            Self::load(path)
        } else {
            Self::load_by_name(name_or_path)
        }
    }

    /// Load embedded builtin style
    pub fn load_builtin(name: &str) -> Result<Self> {
        let yaml = match name {
            "orange" => include_str!("../../styles/orange.yaml"),
            _ => anyhow::bail!("Unknown builtin style: {}. Available styles: orange", name),
        };

        Self::parse(yaml).with_context(|| format!("Failed to parse embedded style: {}", name))
    }

    fn parse(yaml: &str) -> Result<Self> {
        let style: Style = serde_yaml::from_str(yaml).context("Failed to parse style YAML")?;
        style.palette()?;
        Ok(style)
    }

    /// Get style search paths in order of priority
    fn style_search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("styles")];

        if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "pixelframe") {
            paths.push(proj_dirs.data_dir().join("styles"));
            paths.push(proj_dirs.config_dir().join("styles"));
        }

        paths
    }

    pub fn palette(&self) -> Result<BorderPalette, StyleError> {
        BorderPalette::try_from(self)
    }
}

impl TryFrom<&Style> for BorderPalette {
    type Error = StyleError;

    fn try_from(style: &Style) -> Result<Self, Self::Error> {
        let bands: [[u8; 4]; BAND_COUNT] =
            style.bands.as_slice().try_into().map_err(|_| StyleError::BandCount {
                name: style.name.clone(),
                found: style.bands.len(),
                expected: BAND_COUNT,
            })?;

        Ok(Self {
            transparent: Rgba(style.transparent),
            outline: Rgba(style.outline),
            shadow: Rgba(style.shadow),
            bands: bands.map(Rgba),
        })
    }
}

impl Default for Style {
    fn default() -> Self {
        let palette = BorderPalette::default();
        Style {
            name: "orange".to_string(),
            transparent: palette.transparent.0,
            outline: palette.outline.0,
            shadow: palette.shadow.0,
            bands: palette.bands.iter().map(|c| c.0).collect(),
        }
    }
}
