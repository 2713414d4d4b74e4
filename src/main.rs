use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::bail;
use clap::{Parser, Subcommand};

mod completion;
mod data;
mod gpa;
mod models;
mod narrative;
mod recommend;
mod report;
mod strengths;

use narrative::NarrativeEngine;

#[derive(Parser)]
#[command(name = "elective-advisor")]
#[command(about = "Elective recommendations from student academic records", long_about = None)]
struct Cli {
    /// Enrollment table with per-course grades
    #[arg(long, default_value = "data/enrollment.csv")]
    enrollment: PathBuf,
    /// Term GPA history table
    #[arg(long, default_value = "data/term_history.csv")]
    terms: PathBuf,
    /// Elective catalog table
    #[arg(long, default_value = "data/elective_schedule.csv")]
    electives: PathBuf,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a student's strengths, GPA outlook, and completions
    Profile { query: String },
    /// Rank the top electives for a student
    Recommend { query: String },
    /// Print the advisory context handed to the narrative layer
    Context { query: String },
    /// Write a full advisory report with narrative
    Advise {
        query: String,
        #[arg(long, default_value = "advisory.md")]
        out: PathBuf,
    },
}

struct Advisory {
    context: models::AdvisoryContext,
    strengths: Vec<models::SubjectStrength>,
    outlook: models::GpaOutlook,
    completed: HashSet<String>,
}

fn run_analysis(dataset: &data::Dataset, query: &str) -> anyhow::Result<Advisory> {
    let Some(student) = data::find_student(query, &dataset.enrollment) else {
        bail!("no student matched the query; check the name and try again");
    };

    let courses = data::courses_for(&dataset.enrollment, &student.emplid);
    let terms = data::terms_for(&dataset.terms, &student.emplid);

    let strengths = strengths::profile_strengths(&courses);
    let outlook = gpa::resolve_gpa(&terms, student.cum_gpa.as_deref());
    let completed = completion::extract_completed(&courses);
    let recommendations = recommend::recommend_electives(
        &strengths,
        &completed,
        &dataset.electives,
        outlook.cumulative,
    );
    let context = report::build_context(student, &strengths, &outlook, &completed, &recommendations);

    Ok(Advisory {
        context,
        strengths,
        outlook,
        completed,
    })
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let dataset = data::load_dataset(&cli.enrollment, &cli.terms, &cli.electives)?;

    match cli.command {
        Commands::Profile { query } => {
            let advisory = run_analysis(&dataset, &query)?;
            let student = &advisory.context.student;
            println!("{} (ID {}, program {})", student.name, student.id, student.program);
            println!(
                "Cumulative GPA {:.2}, trend {}, average term GPA {:.2}",
                advisory.outlook.cumulative, advisory.outlook.trend, advisory.outlook.avg_term_gpa
            );
            println!("Completed courses on record: {}", advisory.completed.len());

            if advisory.strengths.is_empty() {
                println!("No graded coursework on record.");
            } else {
                println!("Strengths:");
                for strength in &advisory.strengths {
                    println!(
                        "- {}: {:.2} across {} courses ({})",
                        strength.subject,
                        strength.average,
                        strength.count,
                        strength.grades.join(", ")
                    );
                }
            }
        }
        Commands::Recommend { query } => {
            let advisory = run_analysis(&dataset, &query)?;

            if advisory.context.recommendations.is_empty() {
                println!("No eligible electives in the current catalog.");
                return Ok(());
            }

            println!("Top electives for {}:", advisory.context.student.name);
            for rec in &advisory.context.recommendations {
                let mut issues = String::new();
                if rec.capacity_issue {
                    issues.push_str(" [capacity]");
                }
                if rec.timing_issue {
                    issues.push_str(" [timing]");
                }
                println!(
                    "- {} {} ({}, {}) with {} at {} score {:.2}{}",
                    rec.course_id,
                    rec.title,
                    rec.subject,
                    rec.difficulty,
                    rec.instructor,
                    rec.schedule,
                    rec.score,
                    issues
                );
            }
        }
        Commands::Context { query } => {
            let advisory = run_analysis(&dataset, &query)?;
            println!("{}", serde_json::to_string_pretty(&advisory.context)?);
        }
        Commands::Advise { query, out } => {
            let advisory = run_analysis(&dataset, &query)?;
            let narrative = narrative::TemplateNarrative.compose(&query, &advisory.context)?;
            let report = report::build_report(&advisory.context, Some(&narrative));
            std::fs::write(&out, report)?;
            println!("Advisory written to {}.", out.display());
        }
    }

    Ok(())
}
