//! Countdown practice timer: tips banner, per-second countdown with
//! motivational checkpoints, completion banner, Ctrl-C elapsed report.

use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use chrono::Local;
use colored::Colorize;
use tracing::{debug, instrument};

use crate::config::Settings;

/// Problem difficulty selecting the countdown duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Custom(u32),
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Custom(_) => "Custom",
        }
    }

    /// Duration in minutes, resolving the presets against `settings`.
    pub fn minutes(&self, settings: &Settings) -> u32 {
        match self {
            Difficulty::Easy => settings.easy_minutes,
            Difficulty::Medium => settings.medium_minutes,
            Difficulty::Hard => settings.hard_minutes,
            Difficulty::Custom(minutes) => *minutes,
        }
    }
}

/// Render seconds as zero-padded `MM:SS`.
pub fn format_clock(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Motivational checkpoint marks during the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Checkpoint {
    Halfway,
    FiveMinutes,
    OneMinute,
}

impl Checkpoint {
    pub fn message(&self) -> &'static str {
        match self {
            Checkpoint::Halfway => "Halfway point! How's your solution looking?",
            Checkpoint::FiveMinutes => "5 minutes left! Time to wrap up!",
            Checkpoint::OneMinute => "1 MINUTE LEFT!",
        }
    }
}

/// Checkpoint firing at exactly `remaining` seconds, if any.
///
/// Halfway wins when the marks coincide (e.g. a 10-minute timer's halfway
/// point is also the 5-minutes mark).
pub fn checkpoint(remaining: u64, total: u64) -> Option<Checkpoint> {
    if remaining == total / 2 {
        Some(Checkpoint::Halfway)
    } else if remaining == 300 {
        Some(Checkpoint::FiveMinutes)
    } else if remaining == 60 {
        Some(Checkpoint::OneMinute)
    } else {
        None
    }
}

/// Outcome of a practice session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionReport {
    /// False when the timer was interrupted before running out.
    pub completed: bool,
    pub elapsed: Duration,
}

const TIPS: [&str; 4] = [
    "Read problem twice before coding",
    "Think about patterns first",
    "Start with brute force, then optimize",
    "Test with edge cases",
];

const SELF_EVALUATION: [&str; 4] = [
    "Did you solve the problem?",
    "Can you explain your solution?",
    "What would you do differently?",
    "Which pattern did you use?",
];

/// Run a practice countdown for `difficulty`.
///
/// Prints the tips banner, blocks on ENTER read from `start_gate`, then
/// counts down once per second. Setting `interrupted` (the Ctrl-C flag)
/// ends the session early; the caller decides how to report the elapsed
/// time.
#[instrument(skip(settings, interrupted, start_gate))]
pub fn run_session(
    difficulty: Difficulty,
    settings: &Settings,
    interrupted: Arc<AtomicBool>,
    mut start_gate: impl BufRead,
) -> io::Result<SessionReport> {
    let minutes = difficulty.minutes(settings);
    let total_seconds = u64::from(minutes) * 60;
    debug!("difficulty: {:?}, total_seconds: {}", difficulty, total_seconds);

    println!(
        "\n{}",
        format!("{} Problem Timer: {} minutes", difficulty.label(), minutes).bold()
    );
    println!("{}", "=".repeat(50));
    if settings.show_tips {
        println!("Tips:");
        for (i, tip) in TIPS.iter().enumerate() {
            println!("  {}. {}", i + 1, tip);
        }
        println!("{}", "=".repeat(50));
    }

    print!("\nPress ENTER to start timer...");
    io::stdout().flush()?;
    let mut line = String::new();
    start_gate.read_line(&mut line)?;

    let started_at = Local::now();
    let stopwatch = Instant::now();
    println!(
        "\n{}",
        format!("Timer started at {}", started_at.format("%H:%M:%S")).green()
    );
    println!("Focus mode: ON!\n");

    for remaining in (1..=total_seconds).rev() {
        if interrupted.load(Ordering::SeqCst) {
            return Ok(SessionReport {
                completed: false,
                elapsed: stopwatch.elapsed(),
            });
        }
        let clock = format_clock(remaining);
        match checkpoint(remaining, total_seconds) {
            Some(mark) => println!("\n{} - {}", clock.yellow().bold(), mark.message()),
            None => {
                print!("\r{} ", clock);
                io::stdout().flush()?;
            }
        }
        thread::sleep(Duration::from_secs(1));
    }

    if interrupted.load(Ordering::SeqCst) {
        return Ok(SessionReport {
            completed: false,
            elapsed: stopwatch.elapsed(),
        });
    }

    println!("\n\n{}", "TIME'S UP!".green().bold());
    println!("{}", "=".repeat(50));
    println!("Great job staying focused!");
    println!("\nSelf-evaluation:");
    for item in SELF_EVALUATION {
        println!("  - {}", item);
    }
    println!("{}", "=".repeat(50));

    Ok(SessionReport {
        completed: true,
        elapsed: stopwatch.elapsed(),
    })
}
