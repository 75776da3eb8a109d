use super::load_site;
use crate::output::print_json;
use quezt_core::sitemap;
use std::path::Path;

pub fn sitemap(root: &Path, json: bool) -> anyhow::Result<()> {
    let (config, store) = load_site(root)?;
    let today = chrono::Utc::now().date_naive();
    let entries = sitemap::entries(&store, &config.site.base_url, today);
    if json {
        return print_json(&entries);
    }
    print!("{}", sitemap::to_xml(&entries));
    Ok(())
}

pub fn robots(root: &Path) -> anyhow::Result<()> {
    let (config, _store) = load_site(root)?;
    print!("{}", sitemap::robots_txt(&config.site.base_url));
    Ok(())
}
