use anyhow::{Context, Result};
use catalog::{parse_student, Course, CourseCatalog, Grade, StudentProfile};
use clap::{Parser, Subcommand};
use colored::Colorize;
use rayon::prelude::*;
use recommender::{Recommender, ScoredCourse, DEFAULT_LIMIT};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

/// Course recommender - offline tools for the course catalog
#[derive(Parser)]
#[command(name = "course-recs")]
#[command(about = "Recommend courses from a static catalog by skill and interest overlap", long_about = None)]
struct Cli {
    /// Path to the JSON course catalog
    #[arg(short, long, default_value = "data/courses.json")]
    catalog: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend courses for one student
    Recommend {
        /// Student grade (integer or text)
        #[arg(long)]
        grade: Grade,

        /// Student group
        #[arg(long)]
        group: String,

        /// A skill label; repeat for several
        #[arg(long = "skill")]
        skills: Vec<String>,

        /// An interest label; repeat for several
        #[arg(long = "interest")]
        interests: Vec<String>,

        /// Number of ranked courses ahead of the mandatory course
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,

        /// Show the score of every eligible course
        #[arg(long)]
        explain: bool,
    },

    /// List catalog courses
    Courses {
        /// Only courses at this grade
        #[arg(long)]
        grade: Option<Grade>,

        /// Only courses offered to this group
        #[arg(long)]
        group: Option<String>,
    },

    /// Check catalog integrity
    Validate,

    /// Recommend for every student in a JSON file, in parallel
    Batch {
        /// JSON array of student objects (grade, group, skills, interests)
        #[arg(long)]
        students: PathBuf,

        /// Number of ranked courses ahead of the mandatory course
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let start = Instant::now();
    let catalog = CourseCatalog::load_from_file(&cli.catalog)
        .with_context(|| format!("Failed to load course catalog {}", cli.catalog.display()))?;
    info!("Loaded catalog in {:?}", start.elapsed());

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Recommend {
            grade,
            group,
            skills,
            interests,
            limit,
            explain,
        } => {
            let student = StudentProfile {
                grade,
                group: Some(group),
                skills,
                interests,
            };
            handle_recommend(&catalog, &student, limit, explain)?
        }
        Commands::Courses { grade, group } => {
            handle_courses(&catalog, grade.as_ref(), group.as_deref())
        }
        Commands::Validate => handle_validate(&catalog)?,
        Commands::Batch { students, limit } => handle_batch(&catalog, &students, limit)?,
    }

    Ok(())
}

/// Recommendations for one student plus the full ranking behind them
struct RecommendReport<'a> {
    recommendations: Vec<Course>,
    ranked: Vec<ScoredCourse<'a>>,
}

fn recommend_report<'a>(
    catalog: &'a CourseCatalog,
    student: &StudentProfile,
    limit: usize,
) -> Result<RecommendReport<'a>> {
    let recommender = Recommender::new().with_limit(limit);
    let recommendations = recommender.recommend(student, catalog.courses())?;
    let ranked = recommender.rank(student, catalog.courses());
    Ok(RecommendReport {
        recommendations,
        ranked,
    })
}

/// Handle the 'recommend' command
fn handle_recommend(
    catalog: &CourseCatalog,
    student: &StudentProfile,
    limit: usize,
    explain: bool,
) -> Result<()> {
    let RecommendReport {
        recommendations,
        ranked,
    } = recommend_report(catalog, student, limit)?;

    print_recommendations(&recommendations);

    if explain {
        println!("{}", "Eligible courses by score:".bold().blue());
        if ranked.is_empty() {
            println!("  (no eligible course shares a tag with the student)");
        }
        for (i, scored) in ranked.iter().enumerate() {
            let marker = if i < limit { "*".green() } else { " ".normal() };
            println!(
                "{} {} - score {} [{}]",
                marker,
                scored.course.label(),
                scored.score,
                scored.course.tags.join(", ")
            );
        }
    }
    Ok(())
}

/// Catalog courses at `grade` and offered to `group`, when given
fn select_courses<'a>(
    catalog: &'a CourseCatalog,
    grade: Option<&Grade>,
    group: Option<&str>,
) -> Vec<&'a Course> {
    catalog
        .courses()
        .iter()
        .filter(|course| grade.map_or(true, |g| &course.grade == g))
        .filter(|course| group.map_or(true, |g| course.offered_to(g)))
        .collect()
}

/// Handle the 'courses' command
fn handle_courses(catalog: &CourseCatalog, grade: Option<&Grade>, group: Option<&str>) {
    let courses = select_courses(catalog, grade, group);

    println!(
        "{}",
        format!("{} of {} courses:", courses.len(), catalog.len()).bold().blue()
    );
    for course in courses {
        let id = course
            .id
            .as_ref()
            .map(|id| id.to_string())
            .unwrap_or_else(|| "-".to_string());
        let mandatory = if course.mandatory {
            " (mandatory)".yellow().to_string()
        } else {
            String::new()
        };
        println!(
            "{} {}{} - id {} - grade {} - groups [{}] - tags [{}]",
            "•".green(),
            course.label(),
            mandatory,
            id,
            course.grade,
            course.group.join(", "),
            course.tags.join(", ")
        );
    }
}

/// What `validate` reports about a catalog that passed the checks
#[derive(Debug, PartialEq)]
struct CatalogSummary {
    courses: usize,
    groups: Vec<String>,
    tags: usize,
    mandatory: Option<String>,
}

fn catalog_summary(catalog: &CourseCatalog) -> Result<CatalogSummary> {
    catalog.validate().context("Catalog failed integrity checks")?;

    Ok(CatalogSummary {
        courses: catalog.len(),
        groups: catalog.groups().into_iter().map(str::to_string).collect(),
        tags: catalog.tags().len(),
        mandatory: catalog.mandatory_course().map(Course::label),
    })
}

/// Handle the 'validate' command
fn handle_validate(catalog: &CourseCatalog) -> Result<()> {
    let summary = catalog_summary(catalog)?;

    println!("{} Catalog is valid", "✓".green());
    println!("{}Courses: {}", "• ".cyan(), summary.courses);
    println!("{}Groups: {}", "• ".cyan(), summary.groups.join(", "));
    println!("{}Tags: {}", "• ".cyan(), summary.tags);
    if let Some(mandatory) = summary.mandatory {
        println!("{}Mandatory course: {}", "• ".cyan(), mandatory);
    }
    Ok(())
}

/// Outcome for one student of a batch, in input order
#[derive(Debug, Serialize)]
struct BatchResult {
    student: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    recommendations: Option<Vec<Course>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Handle the 'batch' command
fn handle_batch(catalog: &CourseCatalog, students_path: &Path, limit: usize) -> Result<()> {
    let content = std::fs::read_to_string(students_path)
        .with_context(|| format!("Failed to read {}", students_path.display()))?;
    let students: Vec<serde_json::Value> = serde_json::from_str(&content)
        .with_context(|| format!("{} is not a JSON array", students_path.display()))?;

    let start = Instant::now();
    let recommender = Recommender::new().with_limit(limit);
    let results = recommend_batch(&recommender, catalog.courses(), &students);
    info!(
        "Processed {} students in {:?}",
        results.len(),
        start.elapsed()
    );

    println!("{}", serde_json::to_string_pretty(&results)?);
    Ok(())
}

/// Validate and recommend every student concurrently; output keeps input order
fn recommend_batch(
    recommender: &Recommender,
    courses: &[Course],
    students: &[serde_json::Value],
) -> Vec<BatchResult> {
    students
        .par_iter()
        .enumerate()
        .map(|(index, raw)| {
            let outcome = parse_student(raw)
                .map_err(|e| format!("Invalid student data provided: {}", e))
                .and_then(|student| {
                    recommender
                        .recommend(&student, courses)
                        .map_err(|e| e.to_string())
                });
            match outcome {
                Ok(recommendations) => BatchResult {
                    student: index,
                    recommendations: Some(recommendations),
                    error: None,
                },
                Err(error) => BatchResult {
                    student: index,
                    recommendations: None,
                    error: Some(error),
                },
            }
        })
        .collect()
}

/// Helper function to format and print recommendations
fn print_recommendations(recommendations: &[Course]) {
    println!("{}", "Course Recommendations:".bold().blue());
    for (i, course) in recommendations.iter().enumerate() {
        let rank = (i + 1).to_string();
        let label = if course.mandatory {
            format!("{} {}", course.label(), "(mandatory)".yellow())
        } else {
            course.label()
        };
        println!("{}. {} [{}]", rank.green(), label, course.tags.join(", "));
        if let Some(description) = &course.description {
            println!("   {}", description.dimmed());
        }
    }
}
