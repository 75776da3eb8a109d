//! Content store — the immutable set of records every page is rendered from.
//!
//! The built-in seed ships inside the binary (`content/seed.yaml`). A site can
//! point its config at another YAML file of the same shape; either way the
//! store is built once at start-up and only read afterwards.

use crate::error::{Result, SiteError};
use crate::paths;
use crate::types::{
    BlogPost, CaseStudy, ClientLogo, Company, ContentRecord, Faq, Navigation, PricingTier,
    ProcessStep, Service, Stat, Testimonial,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Raw YAML of the content compiled into the binary.
pub const SEED_YAML: &str = include_str!("../content/seed.yaml");

// ---------------------------------------------------------------------------
// Collection
// ---------------------------------------------------------------------------

/// Records of one kind in their fixed display order, indexed by id.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    items: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T: ContentRecord> Collection<T> {
    /// Build a collection, rejecting invalid slugs and duplicate ids.
    pub fn new(items: Vec<T>) -> Result<Self> {
        let mut index = HashMap::with_capacity(items.len());
        for (pos, item) in items.iter().enumerate() {
            paths::validate_slug(item.id())?;
            if index.insert(item.id().to_string(), pos).is_some() {
                return Err(SiteError::DuplicateId {
                    kind: T::KIND,
                    id: item.id().to_string(),
                });
            }
        }
        Ok(Self { items, index })
    }

    pub fn all(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(crate) fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }
}

// ---------------------------------------------------------------------------
// ContentSeed — on-disk shape
// ---------------------------------------------------------------------------

/// Raw content as written in YAML, before ids are checked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentSeed {
    pub company: Company,
    #[serde(default)]
    pub navigation: Navigation,
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub case_studies: Vec<CaseStudy>,
    #[serde(default)]
    pub process_steps: Vec<ProcessStep>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub pricing_tiers: Vec<PricingTier>,
    #[serde(default)]
    pub faqs: Vec<Faq>,
    #[serde(default)]
    pub blog_posts: Vec<BlogPost>,
    #[serde(default)]
    pub client_logos: Vec<ClientLogo>,
    #[serde(default)]
    pub stats: Vec<Stat>,
}

// ---------------------------------------------------------------------------
// ContentStore
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct ContentStore {
    pub company: Company,
    pub navigation: Navigation,
    pub services: Vec<Service>,
    pub case_studies: Collection<CaseStudy>,
    pub process_steps: Vec<ProcessStep>,
    pub testimonials: Vec<Testimonial>,
    pub pricing_tiers: Vec<PricingTier>,
    pub faqs: Vec<Faq>,
    pub posts: Collection<BlogPost>,
    pub client_logos: Vec<ClientLogo>,
    pub stats: Vec<Stat>,
}

impl ContentStore {
    pub fn from_seed(seed: ContentSeed) -> Result<Self> {
        Ok(Self {
            company: seed.company,
            navigation: seed.navigation,
            services: seed.services,
            case_studies: Collection::new(seed.case_studies)?,
            process_steps: seed.process_steps,
            testimonials: seed.testimonials,
            pricing_tiers: seed.pricing_tiers,
            faqs: seed.faqs,
            posts: Collection::new(seed.blog_posts)?,
            client_logos: seed.client_logos,
            stats: seed.stats,
        })
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let seed: ContentSeed = serde_yaml::from_str(yaml)?;
        Self::from_seed(seed)
    }

    /// The content compiled into the binary.
    pub fn seed() -> Result<Self> {
        Self::from_yaml(SEED_YAML)
    }

    /// Load content from a YAML file on disk.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_yaml(&data)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
