//! `eventra` terminal client.
//!
//! ```text
//! eventra ideas --skills "React, Figma" --job-role "Frontend Developer"
//! eventra roadmap --title "Campus Event Finder" --description "..." --skills "React" --job-role "Full Stack Developer"
//! eventra image --name "Hackathon 2024" --description "48 hours of building" --out banner.png
//! eventra chat
//! ```

use clap::{Parser, Subcommand};
use eventra::cli::{
    load_flows, CallableTrait, ChatCommand, IdeasCommand, ImageCommand, RoadmapCommand,
};
use eventra::forms::ai::{IdeaRequest, ImageRequest, RoadmapRequest};
use eventra::telemetry::{get_subscriber, init_subscriber};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "eventra",
    version,
    about = "Project ideas, roadmaps, event banners and the Eventra assistant from the terminal"
)]
struct Cli {
    /// Print raw JSON instead of formatted text
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Suggest portfolio project ideas for a job role
    Ideas {
        /// Comma separated skills, e.g. "React, Figma"
        #[arg(long)]
        skills: String,
        #[arg(long)]
        job_role: String,
    },
    /// Build a tech stack, architecture and step plan for a project
    Roadmap {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        skills: String,
        #[arg(long)]
        job_role: String,
    },
    /// Generate an event banner image
    Image {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: String,
        /// Write the decoded image to FILE instead of printing its data URI
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Chat with the Eventra assistant
    Chat,
}

fn get_command(cli: Cli) -> Box<dyn CallableTrait> {
    let json = cli.json;
    match cli.command {
        Commands::Ideas { skills, job_role } => Box::new(IdeasCommand {
            request: IdeaRequest { skills, job_role },
            json,
        }),
        Commands::Roadmap {
            title,
            description,
            skills,
            job_role,
        } => Box::new(RoadmapCommand {
            request: RoadmapRequest {
                project_title: title,
                project_description: description,
                user_skills: skills,
                job_role,
            },
            json,
        }),
        Commands::Image {
            name,
            description,
            out,
        } => Box::new(ImageCommand {
            request: ImageRequest {
                event_name: name,
                event_description: description,
            },
            out,
            json,
        }),
        Commands::Chat => Box::new(ChatCommand { json }),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("eventra-cli".into(), "warn".into(), std::io::stderr);
    init_subscriber(subscriber);

    let cli = Cli::parse();
    let flows = load_flows()?;
    get_command(cli).call(&flows).await?;

    Ok(())
}
