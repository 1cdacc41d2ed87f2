use thiserror::Error;

/// Structured failures surfaced to the CLI. Structural anomalies inside
/// the pipeline (malformed spans, unclassified tables) are absorbed there
/// and never reach this taxonomy.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("no models extracted from any page")]
    EmptyResult,

    #[error("invalid product page url: {0}")]
    InvalidUrl(String),
}
