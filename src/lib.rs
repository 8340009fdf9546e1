//! prepkit: interview practice toolkit.
//!
//! Topic-organized reference implementations of common interview problems
//! (hashing, arrays, strings, stacks and queues, recursion, linked lists,
//! binary trees) plus a countdown practice timer for timed drills.
//!
//! The library layer is pure: every topic function is a self-contained,
//! stateless algorithm documented with its literal input/output fixtures.
//! The binary wires the topics into a `demo` runner and exposes the timer.

pub mod cli;
pub mod config;
pub mod exitcode;
pub mod timer;
pub mod topics;
pub mod util;
