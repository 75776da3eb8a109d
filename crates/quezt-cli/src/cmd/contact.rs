use crate::output::print_json;
use anyhow::Context;
use clap::Subcommand;
use quezt_core::contact;
use std::io::Read;

#[derive(Subcommand)]
pub enum ContactSubcommand {
    /// Run a raw request body through the contact form contract
    Check {
        /// JSON body, or `-` to read it from stdin
        body: String,
    },
}

pub fn run(subcmd: ContactSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        ContactSubcommand::Check { body } => check(&body, json),
    }
}

fn check(body: &str, json: bool) -> anyhow::Result<()> {
    let raw = if body == "-" {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .context("failed to read stdin")?;
        buf
    } else {
        body.as_bytes().to_vec()
    };

    let reply = contact::handle(&raw);
    if let contact::SubmissionReply::Failed(e) = &reply {
        tracing::warn!(error = %e, "body could not be decoded");
    }

    if json {
        return print_json(&serde_json::json!({
            "status": reply.status(),
            "body": reply.body(),
        }));
    }
    println!("{} {}", reply.status(), reply.body());
    Ok(())
}
