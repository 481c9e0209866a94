use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

mod directory;
mod feed;
mod filter;
mod models;
mod rank;
mod report;

use models::{Author, AuthorRole, StudentFilter, StudentRecord};

#[derive(Parser)]
#[command(name = "placement-leaderboard")]
#[command(about = "Student placement leaderboard and audit report tracker", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the bundled directory snapshot and seed feed
    Seed {
        #[arg(long, default_value = "data")]
        dir: PathBuf,
    },
    /// Merge student records from a CSV file into the snapshot
    Import {
        #[arg(long)]
        csv: PathBuf,
        #[arg(long, default_value = "data/students.json")]
        directory: PathBuf,
    },
    /// Print the leaderboard, optionally filtered
    Leaderboard {
        #[arg(long)]
        year: Option<String>,
        #[arg(long)]
        department: Option<String>,
        #[arg(long)]
        tech_stack: Option<String>,
        #[arg(long, default_value_t = 10)]
        limit: usize,
        #[arg(long, default_value = "data/students.json")]
        directory: PathBuf,
    },
    /// Generate a markdown audit report for one student
    Report {
        #[arg(long)]
        id: String,
        #[arg(long, default_value = "data/students.json")]
        directory: PathBuf,
        #[arg(long, default_value = "report.md")]
        out: PathBuf,
    },
    /// Add a discussion post to the community feed
    Post {
        #[arg(long)]
        author: String,
        #[arg(long)]
        content: String,
        #[arg(long, default_value = "data/feed.json")]
        feed: PathBuf,
    },
    /// Toggle a like on a community feed post
    Like {
        #[arg(long)]
        id: String,
        #[arg(long, default_value = "data/feed.json")]
        feed: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Seed { dir } => {
            directory::write_directory(&dir.join("students.json"), &directory::fallback_directory())
                .await?;
            feed::FeedStore::new(feed::seed_posts()?)
                .save(&dir.join("feed.json"))
                .await?;
            println!("Seed data written to {}.", dir.display());
        }
        Commands::Import { csv, directory } => {
            let inserted = directory::import_csv(&csv, &directory).await?;
            println!("Added {inserted} students from {}.", csv.display());
        }
        Commands::Leaderboard {
            year,
            department,
            tech_stack,
            limit,
            directory,
        } => {
            let students = directory::load_directory(&directory).await;
            let active = StudentFilter {
                year,
                department,
                tech_stack,
            };
            let filtered = filter::apply_filter(&students, &active);

            if filtered.is_empty() {
                let options = filter::filter_options(&students);
                println!("No students match these filters.");
                println!("Years: {}", options.years.join(", "));
                println!("Departments: {}", options.departments.join(", "));
                println!("Tech stacks: {}", options.tech_stacks.join(", "));
                return Ok(());
            }

            let board = rank::rank_students(&filtered);

            println!("Top performers:");
            for (position, student) in board.top.iter().enumerate() {
                println!(" {}. {}", position + 1, leaderboard_line(student));
            }

            if !board.rest.is_empty() {
                println!("Complete rankings:");
                for ranked in board.rest.iter().take(limit) {
                    println!(" {}. {}", ranked.rank, leaderboard_line(&ranked.student));
                }
            }
        }
        Commands::Report {
            id,
            directory,
            out,
        } => {
            let students = directory::load_directory(&directory).await;
            let student = students
                .iter()
                .find(|s| s.id == id)
                .with_context(|| format!("no student with id {id}"))?;
            let audit = report::audit_report(student);
            std::fs::write(&out, report::render_markdown(student, &audit))?;
            println!("Report written to {}.", out.display());
        }
        Commands::Post {
            author,
            content,
            feed,
        } => {
            let mut store = feed::FeedStore::load(&feed).await?;
            let post_id = store
                .add_post(
                    Author {
                        name: author,
                        department: String::new(),
                        year: String::new(),
                        role: AuthorRole::Student,
                    },
                    content,
                )
                .id
                .clone();
            store.save(&feed).await?;
            println!("Posted {post_id}.");
        }
        Commands::Like { id, feed } => {
            let mut store = feed::FeedStore::load(&feed).await?;
            if !store.toggle_like(&id) {
                anyhow::bail!("no post with id {id}");
            }
            store.save(&feed).await?;
            println!("Toggled like on {id}.");
        }
    }

    Ok(())
}

fn leaderboard_line(student: &StudentRecord) -> String {
    let placement = match &student.company {
        Some(company) => format!("{} at {company}", student.placement_status.label()),
        None => student.placement_status.label().to_string(),
    };
    format!(
        "{} ({}, {}) JRI {} [{}] {}",
        student.name,
        student.department,
        student.year,
        student.jri_score,
        rank::badge_tier(student.jri_score).label(),
        placement
    )
}
