use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Desktop browser UA; the vendor site serves stripped-down markup to
/// unknown agents.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Politeness delay between page fetches, in milliseconds.
    pub delay_between_fetches_ms: u64,
    pub user_agent: String,
    /// Keep bare transceiver part numbers in the output.
    pub include_transceivers: bool,
    /// Tables with less text than this are navigation chrome.
    pub min_table_text_len: usize,
}

impl Config {
    /// Defaults overridable from the environment (`SPEC_SCRAPER_*`), e.g.
    /// `SPEC_SCRAPER_DELAY_BETWEEN_FETCHES_MS=3000`.
    pub fn load() -> Result<Self> {
        let settings = config::Config::builder()
            .set_default("delay_between_fetches_ms", 1500i64)?
            .set_default("user_agent", DEFAULT_USER_AGENT)?
            .set_default("include_transceivers", false)?
            .set_default("min_table_text_len", 100i64)?
            .add_source(config::Environment::with_prefix("SPEC_SCRAPER"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
