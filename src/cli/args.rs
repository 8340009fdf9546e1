//! CLI argument definitions using clap

use clap::{ArgAction, ArgGroup, Args, Parser, Subcommand, ValueEnum};

/// Interview practice toolkit: topic-organized algorithm references and a practice timer
#[derive(Parser, Debug)]
#[command(name = "prepkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase logging verbosity (-d, -dd, -ddd)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Print author and version
    #[arg(long)]
    pub info: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a practice countdown timer
    Timer(TimerArgs),

    /// Print worked examples (expected vs actual) for a topic
    Demo {
        /// Topic to demonstrate (default: all)
        #[arg(value_enum)]
        topic: Option<Topic>,
    },

    /// List topic modules
    Topics,

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Timer duration flags, mutually exclusive and one required.
#[derive(Args, Debug)]
#[command(group(ArgGroup::new("duration").required(true)))]
pub struct TimerArgs {
    /// 15 minute timer for easy problems
    #[arg(long, group = "duration")]
    pub easy: bool,

    /// 25 minute timer for medium problems
    #[arg(long, group = "duration")]
    pub medium: bool,

    /// 35 minute timer for hard problems
    #[arg(long, group = "duration")]
    pub hard: bool,

    /// Custom timer in minutes
    #[arg(long, value_name = "MINUTES", group = "duration", allow_hyphen_values = true)]
    pub custom: Option<i64>,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show config path
    Path,
}

/// Topic modules available to `demo`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Arrays,
    Strings,
    Hashing,
    Stacks,
    Recursion,
    LinkedList,
    Tree,
    Heaps,
}

impl Topic {
    pub const ALL: [Topic; 8] = [
        Topic::Arrays,
        Topic::Strings,
        Topic::Hashing,
        Topic::Stacks,
        Topic::Recursion,
        Topic::LinkedList,
        Topic::Tree,
        Topic::Heaps,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Topic::Arrays => "arrays",
            Topic::Strings => "strings",
            Topic::Hashing => "hashing",
            Topic::Stacks => "stacks",
            Topic::Recursion => "recursion",
            Topic::LinkedList => "linked-list",
            Topic::Tree => "tree",
            Topic::Heaps => "heaps",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Topic::Arrays => "array and matrix scans, prefix sums, grid walks",
            Topic::Strings => "word games, two-pointer swaps, digit arithmetic",
            Topic::Hashing => "complement search, frequency counting, sliding windows",
            Topic::Stacks => "bracket matching, monotonic stacks, queue simulations",
            Topic::Recursion => "structural recursion, ternary expression evaluator",
            Topic::LinkedList => "owned-box lists and the sorted merge",
            Topic::Tree => "arena-based binary tree traversals and depth",
            Topic::Heaps => "array-backed min-heap percolation",
        }
    }
}
