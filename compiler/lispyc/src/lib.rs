//! Lispy driver - REPL and command-line front end.
//!
//! ```text
//! line of text
//!     │
//!     ▼
//! lispy_parse::parse ──► ParseNode ──(Err)──► diagnostic::render_parse_error
//!     │
//!     ▼
//! lispy_eval::evaluate ──► Value
//!     │
//!     ▼
//! lispy_eval::render_line ──► stdout
//! ```
//!
//! Each line is parsed, evaluated and printed before the next one is read.
//! Nothing carries over between lines.

pub mod config;
pub mod diagnostic;
pub mod repl;
mod tracing_setup;

pub use config::{Command, Invocation, ReplConfig};
pub use repl::{eval_line, run_eval, run_parse, run_repl, ReplStats};
pub use tracing_setup::init_tracing;
