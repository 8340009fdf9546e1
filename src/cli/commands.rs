//! Command dispatch and the topic demo runners.
//!
//! Each demo runner prints its fixture inputs next to expected and actual
//! outputs with a pass/fail mark, like a printable worksheet.

use std::collections::VecDeque;
use std::fmt::Debug;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use clap::CommandFactory;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands, TimerArgs, Topic};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::Settings;
use crate::timer::{format_clock, run_session, Difficulty};
use crate::topics::linked_list::{merge_sorted, merge_sorted_iterative, ListNode};
use crate::topics::tree::BinaryTree;
use crate::topics::{arrays, hashing, heaps, recursion, stacks, strings};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Timer(args)) => _timer(args),
        Some(Commands::Demo { topic }) => _demo(*topic),
        Some(Commands::Topics) => _topics(),
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => _config_show(),
            ConfigCommands::Path => _config_path(),
        },
        Some(Commands::Completion { shell }) => _completion(*shell),
        None => Ok(()),
    }
}

#[instrument]
fn _timer(args: &TimerArgs) -> CliResult<()> {
    let settings = Settings::load()?;
    let difficulty = resolve_difficulty(args)?;
    debug!("difficulty: {:?}", difficulty);

    let interrupted = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&interrupted);
    ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst))?;

    let report = run_session(difficulty, &settings, interrupted, io::stdin().lock())?;
    if !report.completed {
        println!("\n\nTimer stopped manually");
        println!("Time elapsed: {}", format_clock(report.elapsed.as_secs()));
    }
    Ok(())
}

fn resolve_difficulty(args: &TimerArgs) -> CliResult<Difficulty> {
    if args.easy {
        return Ok(Difficulty::Easy);
    }
    if args.medium {
        return Ok(Difficulty::Medium);
    }
    if args.hard {
        return Ok(Difficulty::Hard);
    }
    let minutes = args
        .custom
        .ok_or_else(|| CliError::InvalidArgs("no timer duration given".to_string()))?;
    match u32::try_from(minutes) {
        Ok(minutes) if minutes > 0 => Ok(Difficulty::Custom(minutes)),
        _ => Err(CliError::InvalidArgs(
            "timer duration must be a positive number of minutes".to_string(),
        )),
    }
}

#[instrument]
fn _demo(topic: Option<Topic>) -> CliResult<()> {
    let topics: Vec<Topic> = match topic {
        Some(topic) => vec![topic],
        None => Topic::ALL.to_vec(),
    };
    for topic in topics {
        output::header(&format!("=== {} ===", topic.name()));
        match topic {
            Topic::Arrays => demo_arrays(),
            Topic::Strings => demo_strings(),
            Topic::Hashing => demo_hashing(),
            Topic::Stacks => demo_stacks(),
            Topic::Recursion => demo_recursion(),
            Topic::LinkedList => demo_linked_list(),
            Topic::Tree => demo_tree(),
            Topic::Heaps => demo_heaps(),
        }
        println!();
    }
    Ok(())
}

#[instrument]
fn _topics() -> CliResult<()> {
    for topic in Topic::ALL {
        output::info(&format!("{:<12} {}", topic.name(), topic.description()));
    }
    Ok(())
}

#[instrument]
fn _config_show() -> CliResult<()> {
    let settings = Settings::load()?;
    let rendered = toml::to_string_pretty(&settings)
        .map_err(|e| CliError::Config(config::ConfigError::Message(e.to_string())))?;
    output::info(&rendered);
    Ok(())
}

#[instrument]
fn _config_path() -> CliResult<()> {
    match Settings::global_config_path() {
        Some(path) => output::info(&path.display()),
        None => output::warning("no config directory available on this platform"),
    }
    Ok(())
}

fn _completion(shell: clap_complete::Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}

/// Print one fixture: pass/fail mark, invocation, actual vs expected.
fn check<T: PartialEq + Debug>(name: &str, actual: T, expected: T) {
    if actual == expected {
        output::success(&format!("{name} = {actual:?}"));
    } else {
        output::failure(&format!("{name} = {actual:?} (expected {expected:?})"));
    }
}

fn demo_arrays() {
    check(
        "running_sum([1, 2, 3, 4])",
        arrays::running_sum(&[1, 2, 3, 4]),
        vec![1, 3, 6, 10],
    );
    check(
        "pascal_triangle(5)",
        arrays::pascal_triangle(5),
        vec![
            vec![1],
            vec![1, 1],
            vec![1, 2, 1],
            vec![1, 3, 3, 1],
            vec![1, 4, 6, 4, 1],
        ],
    );
    check(
        "smaller_than_current([8, 1, 2, 2, 3])",
        arrays::smaller_than_current(&[8, 1, 2, 2, 3]),
        vec![4, 0, 1, 1, 3],
    );
    check(
        "defuse([5, 7, 1, 4], 3)",
        arrays::defuse(&[5, 7, 1, 4], 3),
        vec![12, 10, 16, 13],
    );
    check(
        "left_right_difference([10, 4, 8, 3])",
        arrays::left_right_difference(&[10, 4, 8, 3]),
        vec![-15, -1, 11, 22],
    );
    check(
        "highest_altitude([-5, 1, 5, 0, -7])",
        arrays::highest_altitude(&[-5, 1, 5, 0, -7]),
        1,
    );
    let mut nums = vec![0, 1, 0, 3, 12];
    arrays::move_zeroes(&mut nums);
    check("move_zeroes([0, 1, 0, 3, 12])", nums, vec![1, 3, 12, 0, 0]);
    check(
        "delete_minimums([5, 3, 2, 4, 1])",
        arrays::delete_minimums(&[5, 3, 2, 4, 1]),
        vec![1, 2, 3, 4, 5],
    );
}

fn demo_strings() {
    check(
        "reverse_words(\"tubby little cubby all stuffed with fluff\")",
        strings::reverse_words("tubby little cubby all stuffed with fluff"),
        "fluff with stuffed all cubby little tubby".to_string(),
    );
    check(
        "is_acronym([\"alice\", \"bob\", \"charlie\"], \"abc\")",
        strings::is_acronym(&["alice", "bob", "charlie"], "abc"),
        true,
    );
    check(
        "merge_alternately(\"ab\", \"pqrs\")",
        strings::merge_alternately("ab", "pqrs"),
        "apbqrs".to_string(),
    );
    check(
        "reverse_vowels(\"IceCreAm\")",
        strings::reverse_vowels("IceCreAm"),
        "AceCreIm".to_string(),
    );
    check("sum_of_digits(423)", strings::sum_of_digits(423), 9);
    check("count_digits(0)", strings::count_digits(0), 1);
}

fn demo_hashing() {
    check(
        "two_sum([2, 7, 11, 15], 9)",
        hashing::two_sum(&[2, 7, 11, 15], 9),
        Some((0, 1)),
    );
    check("two_sum([3, 2, 4], 6)", hashing::two_sum(&[3, 2, 4], 6), Some((1, 2)));
    check(
        "is_anagram(\"anagram\", \"nagaram\")",
        hashing::is_anagram("anagram", "nagaram"),
        true,
    );
    check(
        "contains_duplicate([1, 2, 3, 1])",
        hashing::contains_duplicate(&[1, 2, 3, 1]),
        true,
    );
    check(
        "longest_unique_substring(\"abcabcbb\")",
        hashing::longest_unique_substring("abcabcbb"),
        3,
    );
    check(
        "subarray_sum_equals_k([1, 1, 1], 2)",
        hashing::subarray_sum_equals_k(&[1, 1, 1], 2),
        2,
    );
}

fn demo_stacks() {
    check("is_balanced(\"()[]{}\")", stacks::is_balanced("()[]{}"), true);
    check("is_balanced(\"(]\")", stacks::is_balanced("(]"), false);
    check(
        "remove_adjacent_pairs(\"abbaca\")",
        stacks::remove_adjacent_pairs("abbaca"),
        "ca".to_string(),
    );
    check(
        "final_discounted_costs([8, 4, 6, 2, 3])",
        stacks::final_discounted_costs(&[8, 4, 6, 2, 3]),
        vec![4, 2, 4, 2, 3],
    );
    check(
        "interleave_queue([1, 2, 3, 4, 5, 6])",
        stacks::interleave_queue(VecDeque::from([1, 2, 3, 4, 5, 6])),
        VecDeque::from([1, 4, 2, 5, 3, 6]),
    );
    check("time_to_finish([2, 3, 2], 2)", stacks::time_to_finish(&[2, 3, 2], 2), 6);
}

fn demo_recursion() {
    check(
        "sum_recursive([5, 10, 15, 20, 25, 30])",
        recursion::sum_recursive(&[5, 10, 15, 20, 25, 30]),
        105,
    );
    check("num_squares(12)", recursion::num_squares(12), 3);
    check("fibonacci(8)", recursion::fibonacci(8), 21);
    check("power_of_four(-2)", recursion::power_of_four(-2), 0.0625);
    check("count_char(\"VXVYGA\", 'V')", recursion::count_char("VXVYGA", 'V'), 2);
    check(
        "eval_ternary(\"F?1:T?4:5\")",
        recursion::eval_ternary("F?1:T?4:5"),
        Ok('4'),
    );
    check(
        "eval_ternary(\"T?T?F:5:3\")",
        recursion::eval_ternary("T?T?F:5:3"),
        Ok('F'),
    );
}

fn demo_linked_list() {
    let a = ListNode::from_slice(&[1, 2, 4]);
    let b = ListNode::from_slice(&[1, 3, 4]);
    check(
        "merge_sorted(1 -> 2 -> 4, 1 -> 3 -> 4)",
        ListNode::to_vec(merge_sorted(a, b).as_deref()),
        vec![1, 1, 2, 3, 4, 4],
    );
    let a = ListNode::from_slice(&[1, 3]);
    let b = ListNode::from_slice(&[2, 4, 5]);
    check(
        "merge_sorted_iterative(1 -> 3, 2 -> 4 -> 5)",
        ListNode::to_vec(merge_sorted_iterative(a, b).as_deref()),
        vec![1, 2, 3, 4, 5],
    );
}

fn demo_heaps() {
    let mut heap = vec![6, 0, 2, 3, 5, 4, 8];
    heaps::percolate_down(&mut heap, 1);
    check(
        "percolate_down([6, _, 2, 3, 5, 4, 8], 1)",
        heap,
        vec![6, 2, 4, 3, 5, 6, 8],
    );
}

fn demo_tree() {
    let tree = BinaryTree::from_level_order(&[
        Some(3),
        Some(9),
        Some(20),
        None,
        None,
        Some(15),
        Some(7),
    ]);
    output::detail("tree [3, 9, 20, null, null, 15, 7]:");
    for line in tree.render().lines() {
        output::detail(&format!("  {line}"));
    }
    check("max_depth()", tree.max_depth(), 3);
    check("levels()", tree.levels(), vec![vec![3], vec![9, 20], vec![15, 7]]);
    check("postorder()", tree.postorder(), vec![9, 15, 7, 20, 3]);
    let same = BinaryTree::from_level_order(&[
        Some(3),
        Some(9),
        Some(20),
        None,
        None,
        Some(15),
        Some(7),
    ]);
    check("same_tree(rebuilt copy)", tree.same_tree(&same), true);
}
