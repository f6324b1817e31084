//! Command-line front end.
//!
//! | Module    | Purpose                              |
//! |-----------|--------------------------------------|
//! | `args`    | clap argument definitions            |
//! | `resolve` | `site`, `static` and `roots` output  |

pub mod args;
pub mod resolve;

pub use args::{Cli, Commands, ResolveArgs};
