//! REPL command parsing.

use std::str::FromStr;

use portal_core::application::ApplicationStatus;
use portal_core::page::Page;
use portal_core::view::Action;
use thiserror::Error;

/// Commands understood by the REPL, with their help text.
pub const COMMANDS: &[(&str, &str)] = &[
    ("go", "go <page>          open a page (home, login, register, dashboard, applications, users, profile, new-application)"),
    ("login", "login              sign in"),
    ("register", "register           create an account"),
    ("logout", "logout             sign out"),
    ("new", "new                submit a new insurance application"),
    ("approve", "approve <id>       mark an application as processed"),
    ("reject", "reject <id>        reject an application"),
    ("view", "view <id>          show application details"),
    ("delete-user", "delete-user <id>   delete a user"),
    ("yes", "yes                confirm the open dialog"),
    ("no", "no                 dismiss the open dialog"),
    ("refresh", "refresh            reload the current page"),
    ("help", "help               show this list"),
    ("quit", "quit | exit        leave the portal"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Go(Page),
    Login,
    Register,
    Logout,
    New,
    Approve(i64),
    Reject(i64),
    View(i64),
    DeleteUser(i64),
    Yes,
    No,
    Refresh,
    Help,
    Quit,
}

impl Command {
    /// The button action this command stands for. Dialog answers and REPL
    /// housekeeping have none.
    pub fn action(self) -> Option<Action> {
        let action = match self {
            Command::Go(page) => Action::Navigate { page },
            Command::Login => Action::Login,
            Command::Register => Action::Register,
            Command::Logout => Action::Logout,
            Command::New => Action::SubmitApplication,
            Command::Approve(application_id) => Action::ChangeStatus {
                application_id,
                status: ApplicationStatus::Processed,
            },
            Command::Reject(application_id) => Action::ChangeStatus {
                application_id,
                status: ApplicationStatus::Rejected,
            },
            Command::View(application_id) => Action::ViewApplication { application_id },
            Command::DeleteUser(user_id) => Action::DeleteUser { user_id },
            Command::Yes | Command::No | Command::Refresh | Command::Help | Command::Quit => {
                return None;
            }
        };
        Some(action)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command '{0}'. Type 'help' for the list of commands.")]
    Unknown(String),

    #[error("'{command}' needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("'{0}' is not a valid id")]
    InvalidId(String),

    #[error("Unknown page '{0}'")]
    UnknownPage(String),
}

fn id(command: &'static str, arg: Option<&str>) -> Result<i64, CommandError> {
    let raw = arg.ok_or(CommandError::MissingArgument {
        command,
        argument: "an id",
    })?;
    raw.trim_start_matches('#')
        .parse()
        .map_err(|_| CommandError::InvalidId(raw.to_string()))
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().unwrap_or_default().to_lowercase();
        let arg = words.next();

        match name.as_str() {
            "go" => {
                let page = arg.ok_or(CommandError::MissingArgument {
                    command: "go",
                    argument: "a page",
                })?;
                Page::from_str(page)
                    .map(Command::Go)
                    .map_err(|_| CommandError::UnknownPage(page.to_string()))
            }
            "login" => Ok(Command::Login),
            "register" => Ok(Command::Register),
            "logout" => Ok(Command::Logout),
            "new" => Ok(Command::New),
            "approve" => id("approve", arg).map(Command::Approve),
            "reject" => id("reject", arg).map(Command::Reject),
            "view" => id("view", arg).map(Command::View),
            "delete-user" => id("delete-user", arg).map(Command::DeleteUser),
            "yes" | "y" => Ok(Command::Yes),
            "no" | "n" => Ok(Command::No),
            "refresh" => Ok(Command::Refresh),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!("login".parse(), Ok(Command::Login));
        assert_eq!("  Logout ".parse(), Ok(Command::Logout));
        assert_eq!("y".parse(), Ok(Command::Yes));
        assert_eq!("exit".parse(), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_go() {
        assert_eq!(
            "go new-application".parse(),
            Ok(Command::Go(Page::NewApplication))
        );
        assert_eq!(
            "go settings".parse::<Command>(),
            Err(CommandError::UnknownPage("settings".to_string()))
        );
        assert!(matches!(
            "go".parse::<Command>(),
            Err(CommandError::MissingArgument { command: "go", .. })
        ));
    }

    #[test]
    fn test_parse_ids() {
        assert_eq!("approve 7".parse(), Ok(Command::Approve(7)));
        assert_eq!("view #12".parse(), Ok(Command::View(12)));
        assert_eq!("delete-user 5".parse(), Ok(Command::DeleteUser(5)));
        assert_eq!(
            "reject seven".parse::<Command>(),
            Err(CommandError::InvalidId("seven".to_string()))
        );
    }

    #[test]
    fn test_unknown_command_message() {
        let err = "dance".parse::<Command>().unwrap_err();
        assert!(err.to_string().starts_with("Unknown command 'dance'"));
    }

    #[test]
    fn test_button_commands_carry_the_button_action() {
        let actions = [
            Action::Navigate {
                page: Page::Applications,
            },
            Action::Logout,
            Action::SubmitApplication,
            Action::ChangeStatus {
                application_id: 3,
                status: ApplicationStatus::Rejected,
            },
            Action::DeleteUser { user_id: 9 },
        ];
        for action in actions {
            let command = crate::render::command_for(&action).unwrap();
            let parsed: Command = command.parse().unwrap();
            assert_eq!(parsed.action(), Some(action), "{}", command);
        }
        assert_eq!(Command::Refresh.action(), None);
    }

    #[test]
    fn test_every_command_has_help() {
        for (name, help) in COMMANDS {
            assert!(help.starts_with(name), "{}", name);
        }
    }
}
