//! Command-line interface for svlt.
//!
//! Provides commands for processing video URLs into learning packages,
//! browsing and deleting stored videos, taking quizzes and showing the
//! dashboard statistics.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::domain::{AnswerLetter, Grade, QuizAttemptRecord, QuizQuestion, QuizSession, VideoRecord};
use crate::generator::{validate_url, ContentGenerator};
use crate::library::LearningStore;
use crate::storage::FileStorage;

/// svlt - Smart video learning tool
#[derive(Parser, Debug)]
#[command(name = "svlt")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a learning package for a video URL and store it
    Process {
        /// Video URL (watch, youtu.be or embed link)
        url: String,
    },

    /// List stored videos
    Videos,

    /// Show a stored video
    Show {
        /// Video ID (prefix match)
        video_id: String,

        /// Also print the transcript and quiz
        #[arg(short, long)]
        full: bool,
    },

    /// Delete a stored video (its quiz history is kept)
    Delete {
        /// Video ID (exact)
        video_id: String,
    },

    /// Show the current video
    Current,

    /// Take the quiz for a stored video
    Quiz {
        /// Video ID (prefix match)
        video_id: String,

        /// Answers as letters, one per question (e.g. "ABCDABCDAB");
        /// prompts on stdin when omitted
        #[arg(short, long)]
        answers: Option<String>,
    },

    /// List quiz history
    Results {
        /// Only show attempts for this video
        #[arg(short, long)]
        video: Option<String>,
    },

    /// Show dashboard statistics
    Stats,

    /// Remove all stored videos, quiz history and the current video
    Clear {
        /// Confirm the removal
        #[arg(long)]
        yes: bool,
    },

    /// Show resolved configuration (debug)
    Config,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Process { url } => process_video(&url).await,
            Commands::Videos => list_videos(&open_store()?),
            Commands::Show { video_id, full } => show_video(&open_store()?, &video_id, full),
            Commands::Delete { video_id } => delete_video(&open_store()?, &video_id),
            Commands::Current => show_current(&open_store()?),
            Commands::Quiz { video_id, answers } => take_quiz(&open_store()?, &video_id, answers),
            Commands::Results { video } => list_results(&open_store()?, video.as_deref()),
            Commands::Stats => show_stats(&open_store()?),
            Commands::Clear { yes } => clear_all(&open_store()?, yes),
            Commands::Config => show_config(),
        }
    }
}

type Store = LearningStore<FileStorage>;

fn open_store() -> Result<Store> {
    let storage = FileStorage::open_default().context("Failed to open storage")?;
    tracing::debug!("Using storage at {}", storage.path().display());
    Ok(LearningStore::new(storage))
}

/// Find a stored video by ID prefix
fn find_video(store: &Store, prefix: &str) -> Result<VideoRecord> {
    store
        .get_all_videos()
        .into_iter()
        .find(|v| v.video_id.starts_with(prefix))
        .ok_or_else(|| anyhow::anyhow!("Video not found: {}", prefix))
}

/// Validate, generate and store a learning package
async fn process_video(url: &str) -> Result<()> {
    if !validate_url(url) {
        anyhow::bail!("Please enter a valid YouTube URL: {}", url);
    }

    let generator = ContentGenerator::from_config()?;
    let store = open_store()?;

    eprintln!("Processing {} ...", url);
    let package = generator.generate_package(url).await?;
    let video_id = package.video_id.clone();

    if !store.save_video(VideoRecord::from(package.clone())) {
        eprintln!("Warning: the learning package could not be saved");
    }
    store.set_current_video(&video_id);

    println!("Video: {}", video_id);
    println!();
    println!("Summary:");
    println!("  {}", package.summary);
    println!();
    println!("Key points:");
    for point in &package.key_points {
        println!("  - {}", point);
    }
    println!();
    println!(
        "Quiz: {} questions. Run 'svlt quiz {}' to take it.",
        package.quiz.len(),
        video_id
    );

    Ok(())
}

fn list_videos(store: &Store) -> Result<()> {
    let videos = store.get_all_videos();

    if videos.is_empty() {
        println!("No videos yet. Use 'svlt process <url>' to add one.");
        return Ok(());
    }

    println!("{:<16} {:<8} {:<8} {:<25}", "VIDEO ID", "POINTS", "QUIZ", "UPDATED");
    println!("{}", "-".repeat(60));

    for video in &videos {
        let updated = video
            .updated_at
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<16} {:<8} {:<8} {:<25}",
            video.video_id,
            video.key_points.len(),
            video.quiz.len(),
            updated
        );
    }

    println!("\nTotal: {} videos", videos.len());

    Ok(())
}

fn show_video(store: &Store, prefix: &str, full: bool) -> Result<()> {
    let video = find_video(store, prefix)?;
    let attempts = store.get_video_quiz_results(&video.video_id);

    println!("Video ID: {}", video.video_id);
    println!("URL: {}", video.source_url);
    if let Some(created) = video.created_at {
        println!("Created: {}", created);
    }
    if let Some(updated) = video.updated_at {
        println!("Updated: {}", updated);
    }
    println!("Quiz attempts: {}", attempts.len());
    println!();
    println!("Summary:\n  {}", video.summary);
    println!();
    println!("Key points:");
    for point in &video.key_points {
        println!("  - {}", point);
    }

    if full {
        println!();
        println!("Transcript:\n{}", video.transcript);
        println!();
        println!("Quiz:");
        for (i, question) in video.quiz.iter().enumerate() {
            println!("  {}. {}", i + 1, question.question);
            for (letter, option) in AnswerLetter::ALL.iter().zip(&question.options) {
                println!("     {}. {}", letter, option);
            }
        }
    } else {
        println!("\nUse --full to show transcript and quiz");
    }

    Ok(())
}

fn delete_video(store: &Store, video_id: &str) -> Result<()> {
    if store.get_video(video_id).is_none() {
        anyhow::bail!("Video not found: {}", video_id);
    }

    if !store.delete_video(video_id) {
        anyhow::bail!("Failed to delete video: {}", video_id);
    }

    println!("Deleted {}", video_id);
    Ok(())
}

fn show_current(store: &Store) -> Result<()> {
    match store.get_current_video() {
        Some(id) => println!("{}", id),
        None => println!("No current video"),
    }
    Ok(())
}

/// Parse a compact answer string like "AB CD" into letters
fn parse_answers(raw: &str) -> Result<Vec<AnswerLetter>> {
    raw.chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .map(|c| c.to_string().parse())
        .collect()
}

fn prompt_answer(question_no: usize, total: usize, question: &QuizQuestion) -> Result<AnswerLetter> {
    println!("\nQuestion {}/{}: {}", question_no, total, question.question);
    for (letter, option) in AnswerLetter::ALL.iter().zip(&question.options) {
        println!("  {}. {}", letter, option);
    }

    let stdin = io::stdin();
    loop {
        print!("Answer [A-D]: ");
        io::stdout().flush().context("Failed to flush stdout")?;

        let mut line = String::new();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .context("Failed to read answer from stdin")?;
        if read == 0 {
            anyhow::bail!("Quiz aborted: no more input");
        }

        match line.parse() {
            Ok(letter) => return Ok(letter),
            Err(e) => eprintln!("{}", e),
        }
    }
}

fn take_quiz(store: &Store, prefix: &str, answers: Option<String>) -> Result<()> {
    let video = find_video(store, prefix)?;
    if video.quiz.is_empty() {
        anyhow::bail!("Video {} has no quiz", video.video_id);
    }

    let scripted = answers.as_deref().map(parse_answers).transpose()?;
    if let Some(letters) = &scripted {
        if letters.len() != video.quiz.len() {
            anyhow::bail!(
                "Expected {} answers, got {}",
                video.quiz.len(),
                letters.len()
            );
        }
    }

    let mut session = QuizSession::new(&video.quiz);
    while let Some(question) = session.current_question() {
        let position = session.position();
        let letter = match &scripted {
            Some(letters) => letters[position],
            None => prompt_answer(position + 1, session.total(), question)?,
        };

        if session.answer(letter) == Some(false) && scripted.is_none() {
            println!("Incorrect. Correct answer: {}", question.correct_answer);
        }
    }

    let running_score = session.score();
    let total = session.total();
    let attempt = session
        .finish()
        .ok_or_else(|| anyhow::anyhow!("Quiz did not complete"))?;
    let grade = Grade::from_percentage(attempt.percentage);
    let percentage = attempt.percentage;

    if !store.save_quiz_result(&video.video_id, attempt) {
        eprintln!("Warning: the quiz result could not be saved");
    }

    println!("\nQuiz results for {}", video.video_id);
    println!("  Correct answers: {}/{}", running_score, total);
    println!("  Recorded: {:.1}%", percentage);
    println!("  {}", grade.message());

    Ok(())
}

fn print_result_row(result: &QuizAttemptRecord) {
    println!(
        "{:<16} {:<8} {:<10} {:<25}",
        result.video_id,
        format!("{}/{}", result.score, result.total_questions),
        format!("{:.1}%", result.percentage),
        result.completed_at.format("%Y-%m-%d %H:%M")
    );
}

fn list_results(store: &Store, video: Option<&str>) -> Result<()> {
    let results = match video {
        Some(id) => store.get_video_quiz_results(id),
        None => store.get_quiz_results(),
    };

    if results.is_empty() {
        println!("No quiz results yet");
        return Ok(());
    }

    println!("{:<16} {:<8} {:<10} {:<25}", "VIDEO ID", "SCORE", "PERCENT", "COMPLETED");
    println!("{}", "-".repeat(62));
    for result in &results {
        print_result_row(result);
    }

    Ok(())
}

fn show_stats(store: &Store) -> Result<()> {
    let stats = store.get_stats();

    println!("Videos processed: {}", stats.total_videos);
    println!("Quizzes taken:    {}", stats.total_quizzes);
    println!("Average score:    {:.2}", stats.average_score);

    Ok(())
}

fn clear_all(store: &Store, confirmed: bool) -> Result<()> {
    if !confirmed {
        anyhow::bail!("This removes all videos and quiz history. Re-run with --yes to confirm");
    }

    if !store.clear_all() {
        anyhow::bail!("Failed to clear storage");
    }

    println!("All data cleared");
    Ok(())
}

/// Show the resolved configuration (for debugging)
fn show_config() -> Result<()> {
    let cfg = crate::config::config()?;

    println!(
        "Config file: {}",
        cfg.config_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none - using defaults)".to_string())
    );
    println!();
    println!("Paths:");
    println!("  Home:    {}", cfg.home.display());
    println!("  Storage: {}", cfg.storage_path.display());
    println!();
    println!("Generator:");
    println!("  Latency: {}ms", cfg.generator.latency_ms);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_answers() {
        let letters = parse_answers("ab c,D").unwrap();
        assert_eq!(
            letters,
            vec![AnswerLetter::A, AnswerLetter::B, AnswerLetter::C, AnswerLetter::D]
        );
        assert!(parse_answers("ABX").is_err());
    }

    #[test]
    fn test_cli_parses_quiz_command() {
        let cli = Cli::try_parse_from(["svlt", "quiz", "abc", "--answers", "ABCD"]).unwrap();
        match cli.command {
            Commands::Quiz { video_id, answers } => {
                assert_eq!(video_id, "abc");
                assert_eq!(answers.as_deref(), Some("ABCD"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
