//! Document emitter
//!
//! Writes a [`GraphDocument`] as pretty-printed UTF-8 JSON. The document is
//! first written to a temporary file next to the target and then renamed
//! over it, so a failed run never leaves a truncated document behind.

use crate::graph::GraphDocument;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Errors raised while writing or reading a document
#[derive(Error, Debug)]
pub enum EmitError {
    /// I/O error
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type EmitResult<T> = Result<T, EmitError>;

/// Default file name of the output document
pub const DEFAULT_OUTPUT_PATH: &str = "similarity_graph.json";

/// Writes graph documents to a fixed path
#[derive(Debug, Clone)]
pub struct DocumentEmitter {
    path: PathBuf,
}

impl DocumentEmitter {
    pub fn new(path: impl AsRef<Path>) -> Self {
        DocumentEmitter {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize `document` to the configured path
    pub fn emit(&self, document: &GraphDocument) -> EmitResult<()> {
        let tmp_path = self.temp_path();
        debug!("Writing document to temporary file {:?}", tmp_path);

        if let Err(e) = self.write_to(&tmp_path, document) {
            // Best effort cleanup
            let _ = fs::remove_file(&tmp_path);
            return Err(e);
        }

        fs::rename(&tmp_path, &self.path).map_err(|source| {
            let _ = fs::remove_file(&tmp_path);
            EmitError::Io {
                path: self.path.clone(),
                source,
            }
        })?;

        info!(
            "Wrote similarity graph ({} nodes) to {:?}",
            document.node_count(),
            self.path
        );
        Ok(())
    }

    /// Read a document previously written by [`emit`](Self::emit)
    pub fn load(path: impl AsRef<Path>) -> EmitResult<GraphDocument> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| EmitError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&text)?)
    }

    fn write_to(&self, path: &Path, document: &GraphDocument) -> EmitResult<()> {
        let io_err = |source| EmitError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::create(path).map_err(io_err)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, document)?;
        writer.flush().map_err(io_err)?;
        writer.get_ref().sync_all().map_err(io_err)?;
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| DEFAULT_OUTPUT_PATH.into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{GraphNode, NodeIndex};
    use tempfile::TempDir;

    fn sample_document() -> GraphDocument {
        let mut a = GraphNode::article(NodeIndex::new(0), 0, "1.4", "Секция");
        let mut b = GraphNode::article(NodeIndex::new(1), 0, "1.9", "Секция");
        a.connect(NodeIndex::new(1));
        b.connect(NodeIndex::new(0));
        GraphDocument {
            articles: vec![a, b],
            sections: vec![GraphNode::section(NodeIndex::new(2), 0, "Секция", 2)],
            conferences: vec![GraphNode::conference(NodeIndex::new(3), "РИИ-2023", 2)],
        }
    }

    #[test]
    fn test_emit_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("graph.json");
        let emitter = DocumentEmitter::new(&path);

        let doc = sample_document();
        emitter.emit(&doc).unwrap();

        let loaded = DocumentEmitter::load(&path).unwrap();
        assert_eq!(loaded, doc);
        assert!(!dir.path().join("graph.json.tmp").exists());
    }

    #[test]
    fn test_output_is_readable_utf8_with_two_space_indent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("graph.json");
        DocumentEmitter::new(&path).emit(&sample_document()).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("РИИ-2023"));
        assert!(!text.contains("\\u"));
        assert!(text.starts_with("[\n  [\n    {\n      \"id\": 0,"));
    }

    #[test]
    fn test_unwritable_path_fails_without_partial_output() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("graph.json");
        let err = DocumentEmitter::new(&path).emit(&sample_document()).unwrap_err();
        assert!(matches!(err, EmitError::Io { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn test_emit_replaces_existing_document() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("graph.json");
        fs::write(&path, "old").unwrap();

        DocumentEmitter::new(&path).emit(&GraphDocument::default()).unwrap();
        assert_eq!(DocumentEmitter::load(&path).unwrap(), GraphDocument::default());
    }
}
