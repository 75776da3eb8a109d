pub mod case_studies;
pub mod config;
pub mod contact;
pub mod init;
pub mod posts;
pub mod seo;
pub mod serve;

use anyhow::Context;
use quezt_core::{config::Config, ContentStore};
use std::path::Path;

/// Config (defaults when uninitialized) and the content store it points at.
pub(crate) fn load_site(root: &Path) -> anyhow::Result<(Config, ContentStore)> {
    let config = Config::load_or_default(root).context("failed to load config")?;
    let store = config
        .content_store(root)
        .context("failed to load content")?;
    Ok((config, store))
}
