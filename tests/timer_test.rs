use std::io;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;

use rstest::rstest;

use prepkit::config::Settings;
use prepkit::timer::{checkpoint, format_clock, run_session, Checkpoint, Difficulty};
use prepkit::util::testing;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

#[rstest]
#[case(Difficulty::Easy, 15)]
#[case(Difficulty::Medium, 25)]
#[case(Difficulty::Hard, 35)]
#[case(Difficulty::Custom(20), 20)]
fn test_difficulty_minutes_from_defaults(#[case] difficulty: Difficulty, #[case] expected: u32) {
    let settings = Settings::default();
    assert_eq!(difficulty.minutes(&settings), expected);
}

#[rstest]
fn test_difficulty_presets_follow_settings() {
    let settings = Settings {
        easy_minutes: 10,
        medium_minutes: 20,
        hard_minutes: 30,
        show_tips: false,
    };
    assert_eq!(Difficulty::Easy.minutes(&settings), 10);
    assert_eq!(Difficulty::Hard.minutes(&settings), 30);
    // Custom ignores the presets
    assert_eq!(Difficulty::Custom(7).minutes(&settings), 7);
}

#[rstest]
#[case(Difficulty::Easy, "Easy")]
#[case(Difficulty::Medium, "Medium")]
#[case(Difficulty::Hard, "Hard")]
#[case(Difficulty::Custom(45), "Custom")]
fn test_difficulty_labels(#[case] difficulty: Difficulty, #[case] expected: &str) {
    assert_eq!(difficulty.label(), expected);
}

#[rstest]
#[case(0, "00:00")]
#[case(59, "00:59")]
#[case(60, "01:00")]
#[case(1499, "24:59")]
#[case(35 * 60, "35:00")]
fn test_format_clock(#[case] seconds: u64, #[case] expected: &str) {
    assert_eq!(format_clock(seconds), expected);
}

#[rstest]
fn test_checkpoints_for_25_minute_session() {
    let total = 25 * 60;
    assert_eq!(checkpoint(total / 2, total), Some(Checkpoint::Halfway));
    assert_eq!(checkpoint(300, total), Some(Checkpoint::FiveMinutes));
    assert_eq!(checkpoint(60, total), Some(Checkpoint::OneMinute));
    assert_eq!(checkpoint(total, total), None);
    assert_eq!(checkpoint(299, total), None);
    assert_eq!(checkpoint(1, total), None);
}

#[rstest]
fn test_coinciding_checkpoints_resolve_to_halfway() {
    // A 10-minute session puts the halfway point on the 5-minute mark
    assert_eq!(checkpoint(300, 600), Some(Checkpoint::Halfway));
    // A 2-minute session puts it on the 1-minute mark
    assert_eq!(checkpoint(60, 120), Some(Checkpoint::Halfway));
}

#[rstest]
fn test_interrupted_session_ends_early_with_completed_false() {
    let settings = Settings::default();
    let interrupted = Arc::new(AtomicBool::new(true));

    // Flag already set: the countdown must bail out on its first tick,
    // before sleeping a single second.
    let report = run_session(
        Difficulty::Custom(1),
        &settings,
        interrupted,
        io::empty(),
    )
    .unwrap();
    assert!(!report.completed);
    assert!(report.elapsed < Duration::from_secs(1));
}

#[rstest]
fn test_checkpoint_messages() {
    assert_eq!(
        Checkpoint::Halfway.message(),
        "Halfway point! How's your solution looking?"
    );
    assert_eq!(Checkpoint::FiveMinutes.message(), "5 minutes left! Time to wrap up!");
    assert_eq!(Checkpoint::OneMinute.message(), "1 MINUTE LEFT!");
}
