//! CLI crate for voxline.
//!
//! [`parser::Cli`] defines the invocation surface, [`resolve`] turns raw
//! flags into pipeline inputs, and [`handlers`] run the commands. `main` is
//! the only composition root: the real speech adapters are wired to the
//! core pipeline there and nowhere else.

pub mod error;
pub mod handlers;
pub mod parser;
pub mod resolve;

pub use error::CliError;
pub use parser::Cli;
