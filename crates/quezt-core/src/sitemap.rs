//! `sitemap.xml` and `robots.txt` generation from the content store.

use crate::store::ContentStore;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeFrequency {
    Weekly,
    Monthly,
}

impl ChangeFrequency {
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
        }
    }
}

impl fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: NaiveDate,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

/// All crawlable pages: home, the two index pages, every case study, every
/// post. Pages without their own date use `today`.
pub fn entries(store: &ContentStore, base_url: &str, today: NaiveDate) -> Vec<SitemapEntry> {
    let base = base_url.trim_end_matches('/');
    let page = |path: String, change_frequency, priority, last_modified| SitemapEntry {
        url: format!("{base}{path}"),
        last_modified,
        change_frequency,
        priority,
    };

    let mut out = vec![
        page(String::new(), ChangeFrequency::Weekly, 1.0, today),
        page("/case-studies".into(), ChangeFrequency::Weekly, 0.9, today),
        page("/blog".into(), ChangeFrequency::Weekly, 0.9, today),
    ];
    out.extend(store.case_studies.all().iter().map(|study| {
        page(
            format!("/case-studies/{}", study.id),
            ChangeFrequency::Monthly,
            0.8,
            today,
        )
    }));
    out.extend(store.posts.all().iter().map(|post| {
        page(
            format!("/blog/{}", post.id),
            ChangeFrequency::Monthly,
            0.7,
            post.date,
        )
    }));
    out
}

pub fn to_xml(entries: &[SitemapEntry]) -> String {
    let mut out = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for e in entries {
        out.push_str(&format!(
            "<url>\n<loc>{}</loc>\n<lastmod>{}</lastmod>\n<changefreq>{}</changefreq>\n<priority>{:.1}</priority>\n</url>\n",
            escape_xml(&e.url),
            e.last_modified.format("%Y-%m-%d"),
            e.change_frequency,
            e.priority,
        ));
    }
    out.push_str("</urlset>\n");
    out
}

pub fn robots_txt(base_url: &str) -> String {
    format!(
        "User-agent: *\nAllow: /\nDisallow: /api/\nDisallow: /admin/\n\nSitemap: {}/sitemap.xml\n",
        base_url.trim_end_matches('/')
    )
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
