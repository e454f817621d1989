//! Similarity graph job
//!
//! One batch run: fetch rows, build records, build the graph, write the
//! document. Any failure aborts the run before the output path is touched.

use crate::config::{ConfigError, JobConfig, SourceConfig};
use crate::emit::{DocumentEmitter, EmitError};
use crate::graph::{GraphBuilder, GraphSummary, SimilarityGraph};
use crate::source::{
    ArticleRecord, ArticleSource, JsonFileSource, MySqlSource, SourceError,
};
use std::time::Instant;
use thiserror::Error;
use tracing::info;

/// Errors that abort a job
#[derive(Error, Debug)]
pub enum JobError {
    #[error("Data source error: {0}")]
    Source(#[from] SourceError),

    #[error("Output error: {0}")]
    Emit(#[from] EmitError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type JobResult<T> = Result<T, JobError>;

/// Open the data source described by the configuration
pub fn open_source(config: &SourceConfig) -> JobResult<Box<dyn ArticleSource>> {
    let source: Box<dyn ArticleSource> = match config {
        SourceConfig::Mysql(mysql) => Box::new(MySqlSource::connect_lazy(mysql)?),
        SourceConfig::Json { path } => Box::new(JsonFileSource::new(path)),
    };
    Ok(source)
}

/// A configured graph build
pub struct SimilarityJob {
    config: JobConfig,
    builder: GraphBuilder,
    emitter: DocumentEmitter,
}

impl SimilarityJob {
    pub fn new(config: JobConfig) -> JobResult<Self> {
        config.validate()?;
        let builder = GraphBuilder::new(config.link_config());
        let emitter = DocumentEmitter::new(&config.output_path);
        Ok(Self {
            config,
            builder,
            emitter,
        })
    }

    pub fn config(&self) -> &JobConfig {
        &self.config
    }

    /// Fetch and build without writing anything
    pub async fn build(&self, source: &dyn ArticleSource) -> JobResult<SimilarityGraph> {
        let filter = self.config.conference_filter();
        info!(
            "Fetching articles from {} source for {:?}",
            source.name(),
            filter.titles()
        );

        let started = Instant::now();
        let rows = source.fetch(&filter).await?;
        info!("Fetched {} rows in {:?}", rows.len(), started.elapsed());

        let records: Vec<ArticleRecord> = rows.into_iter().map(ArticleRecord::from_row).collect();

        let started = Instant::now();
        let graph = self.builder.build(&records);
        info!(
            "Scored {} article pairs in {:?}",
            graph.summary.pairs_evaluated,
            started.elapsed()
        );
        Ok(graph)
    }

    /// Full run: build, then write the document
    pub async fn run(&self, source: &dyn ArticleSource) -> JobResult<GraphSummary> {
        let graph = self.build(source).await?;
        self.emitter.emit(&graph.document)?;
        info!("Similarity graph written to {:?}", self.emitter.path());
        Ok(graph.summary)
    }
}
