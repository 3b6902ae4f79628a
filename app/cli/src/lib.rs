//! tfswap CLI — swap Terraform provider binaries in workspaces for local
//! development, with presets for repeat swaps.

pub use cmd::{Cli, Command};

pub mod cmd;
pub mod presets;
pub mod shell;
