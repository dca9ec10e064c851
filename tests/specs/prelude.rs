//! Shared helpers for CLI specs

use assert_cmd::Command;

/// A fresh invocation of the built binary
pub fn marinara() -> Command {
    Command::cargo_bin("marinara").expect("marinara binary should be built")
}
