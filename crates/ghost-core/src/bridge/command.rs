//! Commands understood by the native host.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Named command forwarded to the native host.
///
/// The wire form is SCREAMING_SNAKE_CASE (`SHUTDOWN_PC`, ...), which is
/// what the host registers its handlers under.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum HostCommand {
    ShutdownPc,
    RestartPc,
    MinimizeWindow,
    MaximizeWindow,
    CloseWindow,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_wire_names() {
        assert_eq!(HostCommand::ShutdownPc.to_string(), "SHUTDOWN_PC");
        assert_eq!(HostCommand::RestartPc.to_string(), "RESTART_PC");
        assert_eq!(HostCommand::MinimizeWindow.to_string(), "MINIMIZE_WINDOW");
        assert_eq!(HostCommand::MaximizeWindow.to_string(), "MAXIMIZE_WINDOW");
        assert_eq!(HostCommand::CloseWindow.to_string(), "CLOSE_WINDOW");
    }

    #[test]
    fn test_parse_wire_name() {
        assert_eq!(
            HostCommand::from_str("SHUTDOWN_PC").unwrap(),
            HostCommand::ShutdownPc
        );
        assert!(HostCommand::from_str("FORMAT_DISK").is_err());
    }
}
