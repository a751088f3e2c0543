use anyhow::{anyhow, Context, Result};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::border::{self, BorderPalette};

/// A list of borders to render in one go.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    /// Style name or path, defaults to the builtin orange style
    #[serde(default)]
    pub style: Option<String>,

    /// Output directory, relative to the manifest file
    #[serde(default)]
    pub out_dir: Option<PathBuf>,

    pub borders: Vec<BorderSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BorderSpec {
    pub width: u32,
    pub height: u32,

    #[serde(default)]
    pub output: Option<String>,
}

impl BorderSpec {
    pub fn file_name(&self) -> String {
        self.output
            .clone()
            .unwrap_or_else(|| border::default_filename(self.width, self.height))
    }
}

/// Result of rendering one manifest entry.
#[derive(Debug)]
pub struct Outcome {
    pub spec: BorderSpec,
    pub result: Result<PathBuf>,
}

impl Manifest {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest: {}", path.display()))?;

        let manifest: Manifest = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse manifest YAML: {}", path.display()))?;

        Ok(manifest)
    }

    /// Where the manifest's files go: `override_dir` if given, else the
    /// manifest's `out_dir` resolved against `manifest_dir`.
    pub fn output_dir(&self, manifest_dir: &Path, override_dir: Option<&Path>) -> PathBuf {
        if let Some(dir) = override_dir {
            return dir.to_path_buf();
        }
        match &self.out_dir {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => manifest_dir.join(dir),
            None => manifest_dir.to_path_buf(),
        }
    }
}

/// Render every entry in parallel and write it under `out_dir`.
///
/// Entries fail independently; outcomes come back in manifest order. An entry
/// whose file was already claimed by an earlier entry fails without rendering.
pub fn run_batch(borders: &[BorderSpec], palette: &BorderPalette, out_dir: &Path) -> Result<Vec<Outcome>> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory: {}", out_dir.display()))?;

    let mut claimed: HashMap<PathBuf, usize> = HashMap::new();
    let targets: Vec<(PathBuf, Option<usize>)> = borders
        .iter()
        .enumerate()
        .map(|(index, spec)| {
            let path = out_dir.join(spec.file_name());
            let earlier = claimed.get(&path).copied();
            claimed.entry(path.clone()).or_insert(index);
            (path, earlier)
        })
        .collect();

    let outcomes = borders
        .par_iter()
        .zip(targets.par_iter())
        .map(|(spec, (path, earlier))| {
            let result = match earlier {
                Some(first) => Err(anyhow!(
                    "duplicate output {} (same file as entry {})",
                    path.display(),
                    first + 1
                )),
                None => render_one(spec, palette, path),
            };
            Outcome {
                spec: spec.clone(),
                result,
            }
        })
        .collect();

    Ok(outcomes)
}

fn render_one(spec: &BorderSpec, palette: &BorderPalette, path: &Path) -> Result<PathBuf> {
    let image = border::generate_border(spec.width, spec.height, palette)?;
    image
        .save(&path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_manifest_with_defaults() {
        let yaml = r#"
out_dir: ui
borders:
  - width: 600
    height: 400
  - width: 300
    height: 80
    output: button.png
"#;
        let manifest: Manifest = serde_yaml::from_str(yaml).unwrap();
        assert!(manifest.style.is_none());
        assert_eq!(manifest.borders.len(), 2);
        assert_eq!(manifest.borders[0].file_name(), "border_600x400.png");
        assert_eq!(manifest.borders[1].file_name(), "button.png");
    }

    #[test]
    fn output_dir_resolution() {
        let manifest: Manifest = serde_yaml::from_str("out_dir: ui\nborders: []\n").unwrap();
        let base = Path::new("/assets");
        assert_eq!(manifest.output_dir(base, None), PathBuf::from("/assets/ui"));
        assert_eq!(
            manifest.output_dir(base, Some(Path::new("/tmp/out"))),
            PathBuf::from("/tmp/out")
        );

        let bare: Manifest = serde_yaml::from_str("borders: []\n").unwrap();
        assert_eq!(bare.output_dir(base, None), PathBuf::from("/assets"));
    }
}
