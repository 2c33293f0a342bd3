//! Modal dialogs held by the router.

use serde::Serialize;

use crate::application::{Application, ApplicationStatus};

/// Work that runs only after the user confirms a dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PendingAction {
    ChangeStatus {
        application_id: i64,
        status: ApplicationStatus,
    },
    DeleteUser { user_id: i64 },
}

impl PendingAction {
    /// Question shown in the confirmation dialog.
    pub fn prompt(&self) -> String {
        match self {
            PendingAction::ChangeStatus {
                application_id,
                status,
            } => format!(
                "Change the status of application #{} to \"{}\"?",
                application_id, status
            ),
            PendingAction::DeleteUser { .. } => {
                "Are you sure you want to delete this user?".to_string()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Modal {
    Confirm {
        message: String,
        pending: PendingAction,
    },
    ApplicationDetails { application: Application },
}

impl Modal {
    pub fn confirm(pending: PendingAction) -> Self {
        Modal::Confirm {
            message: pending.prompt(),
            pending,
        }
    }

    pub fn pending(&self) -> Option<PendingAction> {
        match self {
            Modal::Confirm { pending, .. } => Some(*pending),
            Modal::ApplicationDetails { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalResponse {
    Confirm,
    Dismiss,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_modal_carries_prompt_and_action() {
        let action = PendingAction::ChangeStatus {
            application_id: 7,
            status: ApplicationStatus::Processed,
        };
        let modal = Modal::confirm(action);
        match &modal {
            Modal::Confirm { message, .. } => {
                assert_eq!(message, "Change the status of application #7 to \"processed\"?")
            }
            other => panic!("unexpected modal {:?}", other),
        }
        assert_eq!(modal.pending(), Some(action));
    }
}
