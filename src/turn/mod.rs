//! Turn control: who plays which mark, and whose mark moves next.

pub mod controller;

pub use controller::{RoleAssignment, TurnController};
