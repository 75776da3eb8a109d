use super::load_site;
use crate::output::{print_json, print_table};
use clap::Subcommand;
use quezt_core::types::CaseStudy;
use std::path::Path;

#[derive(Subcommand)]
pub enum CaseStudiesSubcommand {
    /// List case studies in display order
    List {
        /// Only featured case studies
        #[arg(long)]
        featured: bool,
        /// Maximum number of case studies
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show one case study
    Show { slug: String },
    /// Previous and next case studies in display order
    Adjacent { slug: String },
}

pub fn run(root: &Path, subcmd: CaseStudiesSubcommand, json: bool) -> anyhow::Result<()> {
    let (_config, store) = load_site(root)?;
    let studies = &store.case_studies;

    match subcmd {
        CaseStudiesSubcommand::List { featured, limit } => {
            let limit = limit.unwrap_or(usize::MAX);
            let selected: Vec<&CaseStudy> = if featured {
                studies.find_featured(limit)
            } else {
                studies.all().iter().take(limit).collect()
            };
            if json {
                return print_json(&selected);
            }
            if selected.is_empty() {
                println!("No case studies.");
                return Ok(());
            }
            let rows = selected
                .iter()
                .map(|s| {
                    vec![
                        s.id.clone(),
                        s.title.clone(),
                        s.industry.clone(),
                        if s.featured { "yes" } else { "" }.to_string(),
                    ]
                })
                .collect();
            print_table(&["ID", "TITLE", "INDUSTRY", "FEATURED"], rows);
            Ok(())
        }
        CaseStudiesSubcommand::Show { slug } => {
            let study = studies.find_by_id(&slug)?;
            if json {
                return print_json(study);
            }
            println!("{}: {}", study.title, study.subtitle);
            println!("Client: {} ({})", study.client, study.industry);
            println!("Services: {}", study.services.join(", "));
            for m in &study.metrics {
                println!("  {}: {}", m.label, m.value);
            }
            println!();
            println!("{}", study.long_description);
            Ok(())
        }
        CaseStudiesSubcommand::Adjacent { slug } => {
            // Unknown slugs are an error here rather than an empty pair.
            let study = studies.find_by_id(&slug)?;
            let adjacent = studies.find_adjacent(&study.id);
            if json {
                return print_json(&serde_json::json!({
                    "previous": adjacent.previous.map(|s| &s.id),
                    "next": adjacent.next.map(|s| &s.id),
                }));
            }
            println!(
                "previous: {}",
                adjacent.previous.map_or("-", |s| s.id.as_str())
            );
            println!("next:     {}", adjacent.next.map_or("-", |s| s.id.as_str()));
            Ok(())
        }
    }
}
