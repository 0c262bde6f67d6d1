use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::info;
use trimquote_render::Artifact;

/// Write rendered quotes into `dir`, creating it if needed
pub fn write_artifacts(dir: &Path, artifacts: &[Artifact]) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    artifacts
        .iter()
        .map(|artifact| {
            let path = dir.join(&artifact.file_name);
            std::fs::write(&path, &artifact.bytes)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), bytes = artifact.bytes.len(), "Wrote quote");
            Ok(path)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use trimquote_render::QuoteFormat;

    #[test]
    fn test_writes_each_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("quotes");
        let artifacts = vec![
            Artifact {
                format: QuoteFormat::Text,
                file_name: "quote_a_2024-01-01.txt".to_string(),
                bytes: b"hello\n".to_vec(),
            },
            Artifact {
                format: QuoteFormat::Table,
                file_name: "quote_a_2024-01-01.csv".to_string(),
                bytes: b"Item,Cost\n".to_vec(),
            },
        ];

        let paths = write_artifacts(&out, &artifacts).unwrap();
        assert_eq!(paths.len(), 2);
        assert_eq!(std::fs::read(&paths[0]).unwrap(), b"hello\n");
        assert_eq!(std::fs::read(&paths[1]).unwrap(), b"Item,Cost\n");
    }
}
