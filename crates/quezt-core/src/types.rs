use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// RecordKind
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    BlogPost,
    CaseStudy,
}

impl RecordKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RecordKind::BlogPost => "blog post",
            RecordKind::CaseStudy => "case study",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ContentRecord
// ---------------------------------------------------------------------------

/// A record that can live in an ordered, slug-addressed [`Collection`].
///
/// [`Collection`]: crate::store::Collection
pub trait ContentRecord {
    const KIND: RecordKind;

    /// Stable identifier, also used as the URL slug.
    fn id(&self) -> &str;

    /// Grouping key used to pick related records.
    fn category(&self) -> &str;

    fn featured(&self) -> bool;
}

// ---------------------------------------------------------------------------
// BlogPost
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    /// Body text, kept verbatim. Rendering is the front-end's job.
    pub content: String,
    pub author: String,
    pub author_role: String,
    pub author_avatar: String,
    pub date: NaiveDate,
    pub read_time: String,
    pub category: String,
    pub image: String,
    #[serde(default)]
    pub featured: bool,
}

impl ContentRecord for BlogPost {
    const KIND: RecordKind = RecordKind::BlogPost;

    fn id(&self) -> &str {
        &self.id
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn featured(&self) -> bool {
        self.featured
    }
}

// ---------------------------------------------------------------------------
// CaseStudy
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseStudy {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub long_description: String,
    pub client: String,
    pub industry: String,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub metrics: Vec<Metric>,
    pub image: String,
    pub color: String,
    #[serde(default)]
    pub featured: bool,
}

impl ContentRecord for CaseStudy {
    const KIND: RecordKind = RecordKind::CaseStudy;

    fn id(&self) -> &str {
        &self.id
    }

    /// Case studies are grouped by industry.
    fn category(&self) -> &str {
        &self.industry
    }

    fn featured(&self) -> bool {
        self.featured
    }
}

// ---------------------------------------------------------------------------
// Site records
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dribbble: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    pub tagline: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    #[serde(default)]
    pub social: SocialLinks,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub name: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterGroup {
    pub title: String,
    pub links: Vec<NavLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Navigation {
    #[serde(default)]
    pub main: Vec<NavLink>,
    #[serde(default)]
    pub footer: Vec<FooterGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    #[serde(default)]
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessStep {
    pub number: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: u32,
    pub quote: String,
    pub author: String,
    pub role: String,
    pub company: String,
    pub avatar: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingTier {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub price_note: String,
    #[serde(default)]
    pub features: Vec<String>,
    pub cta: String,
    #[serde(default)]
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientLogo {
    pub name: String,
    pub logo: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_kind_display() {
        assert_eq!(RecordKind::BlogPost.to_string(), "blog post");
        assert_eq!(RecordKind::CaseStudy.to_string(), "case study");
    }

    #[test]
    fn case_study_category_is_industry() {
        let study = CaseStudy {
            id: "x".into(),
            title: "X".into(),
            subtitle: String::new(),
            description: String::new(),
            long_description: String::new(),
            client: String::new(),
            industry: "Finance".into(),
            services: vec![],
            metrics: vec![],
            image: String::new(),
            color: String::new(),
            featured: false,
        };
        assert_eq!(study.category(), "Finance");
    }

    #[test]
    fn blog_post_date_parses_from_iso_string() {
        let yaml = r#"
id: hello
title: Hello
excerpt: e
content: c
author: a
author_role: r
author_avatar: /a.png
date: "2024-01-15"
read_time: 1 min read
category: Engineering
image: /i.png
"#;
        let post: BlogPost = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(post.date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert!(!post.featured);
    }
}
