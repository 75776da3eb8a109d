mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::{
    case_studies::CaseStudiesSubcommand, config::ConfigSubcommand, contact::ContactSubcommand,
    posts::PostsSubcommand,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "quezt",
    about = "Quezt Labs site service: serve content and the contact form, query content",
    version,
    propagate_version = true
)]
struct Cli {
    /// Site root (default: auto-detect from .quezt/)
    #[arg(long, global = true, env = "QUEZT_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default .quezt/config.yaml
    Init,

    /// Serve the site API, contact form, sitemap and robots
    Serve {
        /// Port to listen on (0 = OS-assigned; default from config)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Query blog posts
    Posts {
        #[command(subcommand)]
        subcommand: PostsSubcommand,
    },

    /// Query case studies
    CaseStudies {
        #[command(subcommand)]
        subcommand: CaseStudiesSubcommand,
    },

    /// Run the contact form contract locally
    Contact {
        #[command(subcommand)]
        subcommand: ContactSubcommand,
    },

    /// Print sitemap.xml
    Sitemap,

    /// Print robots.txt
    Robots,

    /// Show or validate the site config
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Serve { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = match cli.command {
        Commands::Init => cmd::init::run(&root),
        Commands::Serve { port } => cmd::serve::run(&root, port),
        Commands::Posts { subcommand } => cmd::posts::run(&root, subcommand, cli.json),
        Commands::CaseStudies { subcommand } => {
            cmd::case_studies::run(&root, subcommand, cli.json)
        }
        Commands::Contact { subcommand } => cmd::contact::run(subcommand, cli.json),
        Commands::Sitemap => cmd::seo::sitemap(&root, cli.json),
        Commands::Robots => cmd::seo::robots(&root),
        Commands::Config { subcommand } => cmd::config::run(&root, subcommand, cli.json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
