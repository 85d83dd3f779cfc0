use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::debug;

use crate::StoreError;
use meridio_core::export::{ExportHandle, ExportWriter};

/// Writes export artifacts as CSV files under a base directory
pub struct FileExportWriter {
    base_dir: PathBuf,
}

impl FileExportWriter {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }
}

#[async_trait]
impl ExportWriter for FileExportWriter {
    async fn open(
        &self,
        name: &str,
    ) -> Result<Box<dyn ExportHandle>, Box<dyn std::error::Error + Send + Sync>> {
        // Artifact names must not escape the base directory
        if name.contains('/') || name.contains('\\') {
            return Err(Box::new(StoreError::InvalidName(name.to_string())));
        }

        let path = self.base_dir.join(name);
        let file = fs::File::create(&path).await?;
        debug!("opened export artifact {}", path.display());
        Ok(Box::new(FileExportHandle {
            writer: BufWriter::new(file),
        }))
    }
}

/// One open CSV artifact backed by a buffered file
pub struct FileExportHandle {
    writer: BufWriter<fs::File>,
}

#[async_trait]
impl ExportHandle for FileExportHandle {
    async fn write_row(
        &mut self,
        fields: &[String],
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let line = csv_line(fields);
        self.writer.write_all(line.as_bytes()).await?;
        Ok(())
    }

    async fn finish(
        self: Box<Self>,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut writer = self.writer;
        writer.flush().await?;
        Ok(())
    }
}

/// Render one CSV record. Fields containing a separator, quote or
/// whitespace are enclosed with inner quotes doubled; empty fields stay
/// bare.
fn csv_line(fields: &[String]) -> String {
    const NEEDS_QUOTING: &[char] = &[',', '"', ' ', '\t', '\n', '\r'];

    let mut out = String::new();
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        if field.contains(NEEDS_QUOTING) {
            out.push('"');
            out.push_str(&field.replace('"', "\"\""));
            out.push('"');
        } else {
            out.push_str(field);
        }
    }
    out.push('\n');
    out
}
