use super::load_site;
use crate::output::{print_json, print_table};
use clap::Subcommand;
use quezt_core::types::BlogPost;
use std::path::Path;

#[derive(Subcommand)]
pub enum PostsSubcommand {
    /// List posts in display order
    List {
        /// Only featured posts
        #[arg(long)]
        featured: bool,
        /// Maximum number of posts
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show one post
    Show { slug: String },
    /// Posts in the same category as the given one
    Related {
        slug: String,
        /// Maximum number of results
        #[arg(short, long, default_value_t = 2)]
        limit: usize,
    },
}

pub fn run(root: &Path, subcmd: PostsSubcommand, json: bool) -> anyhow::Result<()> {
    let (_config, store) = load_site(root)?;
    let posts = &store.posts;

    match subcmd {
        PostsSubcommand::List { featured, limit } => {
            let limit = limit.unwrap_or(usize::MAX);
            let selected: Vec<&BlogPost> = if featured {
                posts.find_featured(limit)
            } else {
                posts.all().iter().take(limit).collect()
            };
            list(&selected, json)
        }
        PostsSubcommand::Show { slug } => {
            let post = posts.find_by_id(&slug)?;
            if json {
                return print_json(post);
            }
            println!("{}", post.title);
            println!(
                "{} · {} · {} · {}",
                post.author, post.date, post.read_time, post.category
            );
            println!();
            println!("{}", post.content.trim_end());
            Ok(())
        }
        PostsSubcommand::Related { slug, limit } => {
            let post = posts.find_by_id(&slug)?;
            list(&posts.find_related(post, limit), json)
        }
    }
}

fn list(posts: &[&BlogPost], json: bool) -> anyhow::Result<()> {
    if json {
        return print_json(&posts);
    }
    if posts.is_empty() {
        println!("No posts.");
        return Ok(());
    }
    let rows = posts
        .iter()
        .map(|p| {
            vec![
                p.id.clone(),
                p.date.to_string(),
                p.category.clone(),
                if p.featured { "yes" } else { "" }.to_string(),
                p.title.clone(),
            ]
        })
        .collect();
    print_table(&["ID", "DATE", "CATEGORY", "FEATURED", "TITLE"], rows);
    Ok(())
}
