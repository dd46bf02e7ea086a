use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;

use schooldesk::cli;
use schooldesk::store::read_directory;
use schooldesk_config::{DeclarationConfig, JwtConfig};
use schooldesk_models::{DeclarationType, SchoolId, StudentId, UserId};

#[derive(Parser)]
#[command(name = "schooldesk-cli")]
#[command(about = "SchoolDesk CLI - Administrative tools for SchoolDesk", long_about = None)]
struct Cli {
    /// Tenant directory file (defaults to SEED_PATH)
    #[arg(short = 'd', long, env = "SEED_PATH")]
    directory: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a declaration for a student
    Render {
        #[arg(short = 's', long)]
        school: SchoolId,

        #[arg(long)]
        student: StudentId,

        /// enrollment, completion, transfer, tax or clearance
        #[arg(short = 't', long = "type")]
        declaration_type: DeclarationType,

        /// Date to print, YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Report missing templates and unknown placeholders
    CheckTemplates {
        #[arg(short = 's', long)]
        school: SchoolId,
    },
    /// List the permissions a role holds in a school
    Permissions {
        #[arg(short = 's', long)]
        school: SchoolId,

        /// Role label, e.g. "Secretário(a)"
        #[arg(short = 'r', long)]
        role: String,
    },
    /// Sign a development access token for a user
    IssueToken {
        #[arg(short = 'u', long)]
        user: UserId,
    },
}

fn main() {
    dotenv().ok();

    let args = Cli::parse();

    if let Err(e) = run(args) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn run(args: Cli) -> anyhow::Result<()> {
    let directory = read_directory(&args.directory)?;

    let output = match args.command {
        Commands::Render {
            school,
            student,
            declaration_type,
            date,
        } => {
            let today = date.unwrap_or_else(|| DeclarationConfig::from_env().today());
            cli::render(&directory, school, student, declaration_type, today)?
        }
        Commands::CheckTemplates { school } => cli::check_templates(&directory, school)?,
        Commands::Permissions { school, role } => cli::permissions(&directory, school, &role)?,
        Commands::IssueToken { user } => {
            cli::issue_token(&directory, user, &JwtConfig::from_env())?
        }
    };

    println!("{}", output.trim_end());
    Ok(())
}
