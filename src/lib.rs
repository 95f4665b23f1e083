//! # CS Fundamentals
//!
//! Small, self-contained exercises covering ownership-based data structures
//! and encapsulation without inheritance.
//!
//! ## Exercises
//!
//! 1. **Singly linked list** - `Box`-owned node chain with head insertion and lazy traversal
//! 2. **Queue** - FIFO queue over contiguous storage
//! 3. **Users** - Trait-based polymorphism in place of a class hierarchy
//! 4. **Banking** - Encapsulated accounts modelled as a tagged union
//!
//! ## Running Demos
//!
//! ```bash
//! cargo run --bin linked_list_demo
//! cargo run --bin queue_demo
//! cargo run --bin users_demo
//! cargo run --bin banking_demo -- demo.toml
//! ```
//!
//! ## Key Dependencies
//!
//! - `thiserror` - Derive macro for the per-exercise error types
//! - `serde` / `toml` / `serde_json` - Demo configuration and account statements
//! - `tracing` - Structured logging of state changes
//! - `colored` / `itertools` - Console rendering in the demos

pub mod banking;
pub mod config;
pub mod error;
pub mod linked_list;
pub mod logging;
pub mod queue;
pub mod users;

pub use error::{Error, Result};
pub use linked_list::LinkedList;
pub use queue::Queue;
