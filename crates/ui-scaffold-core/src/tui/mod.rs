//! CLI commands using cliclack (Charm-style inline prompts)
//!
//! This module is optional and only available when the `tui` feature is enabled.

mod add;
mod diff;
mod init;
mod prompts;

pub use add::{run_add, AddArgs};
pub use diff::{run_diff, DiffArgs};
pub use init::{run_init, InitArgs};
pub use prompts::{report_error, ProjectArgs};
