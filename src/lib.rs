//! # Clone Semantics Patterns in Rust
//!
//! This crate demonstrates the difference between shallow and deep copies
//! of an object graph:
//!
//! ## Pattern 1: Per-Field Copy Strategies
//! - `Shared<T>` handles (`Rc<RefCell<T>>`)
//! - `alias` (copy the handle) vs `reconstruct` (copy the value)
//! - `same_instance` identity checks
//!
//! ## Pattern 2: Shallow and Deep Clone Traits
//! - `ShallowClone`: duplicate primitive fields, alias sub-objects
//! - `DeepClone`: duplicate primitive fields, rebuild sub-objects
//!
//! ## Pattern 3: Entity Graphs
//! - `Person` owning a single `Address`
//! - `Library` owning an ordered, shared sequence of `Book`s
//!
//! ## Pattern 4: Checked Clone Capability
//! - `TryClone` models clone-as-opt-in with an `Unsupported` error
//! - The total traits above are the shape to prefer
//!
//! Run scenarios with: `cargo run --bin <scenario>`

pub mod fallible;
pub mod library;
pub mod person;
pub mod report;
pub mod strategy;
