//! Dashboard: user header, role-specific statistics and recent applications.

use chrono::NaiveDate;
use portal_core::application::{Application, ApplicationStatus};
use portal_core::format;
use portal_core::user::{Role, SessionUser};
use portal_core::view::{
    Action, Block, Button, Cell, Column, ColumnKey, Icon, Row, StatCard, Table, UserCard, View,
};

use super::NO_APPLICATIONS;

/// Number of applications in the recent list.
pub const RECENT_LIMIT: usize = 5;

/// Fixed efficiency figure shown to managers.
pub const MANAGER_EFFICIENCY: &str = "85%";

/// Fixed turnover figure shown to admins.
pub const ADMIN_TURNOVER: &str = "1.2M ₽";

struct Counts {
    total: usize,
    in_progress: usize,
    processed: usize,
    rejected: usize,
}

impl Counts {
    fn of(applications: &[Application]) -> Self {
        let with = |status: ApplicationStatus| {
            applications.iter().filter(|a| a.status == status).count()
        };
        Self {
            total: applications.len(),
            in_progress: with(ApplicationStatus::InProgress),
            processed: with(ApplicationStatus::Processed),
            rejected: with(ApplicationStatus::Rejected),
        }
    }
}

/// Statistics cards for `role`.
///
/// The admin "users" card shows the first application's `client_id` (0 for
/// an empty list). It is not a user count; the figure is kept as the
/// portal has always shown it.
pub fn stats(role: Role, applications: &[Application]) -> Vec<StatCard> {
    let counts = Counts::of(applications);
    match role {
        Role::Client => vec![
            StatCard::new(Icon::FileAlt, counts.total, "Total applications"),
            StatCard::new(Icon::Clock, counts.in_progress, "In progress"),
            StatCard::new(Icon::CheckCircle, counts.processed, "Processed"),
            StatCard::new(Icon::TimesCircle, counts.rejected, "Rejected"),
        ],
        Role::Manager => vec![
            StatCard::new(Icon::Users, counts.total, "Applications in work"),
            StatCard::new(Icon::Clock, counts.in_progress, "Need attention"),
            StatCard::new(Icon::CheckCircle, counts.processed, "Completed"),
            StatCard::new(Icon::ChartLine, MANAGER_EFFICIENCY, "Efficiency"),
        ],
        Role::Admin => {
            let users = applications.first().map(|a| a.client_id).unwrap_or(0);
            vec![
                StatCard::new(Icon::FileAlt, counts.total, "Total applications"),
                StatCard::new(Icon::Users, users, "Users"),
                StatCard::new(Icon::CheckCircle, counts.processed, "Completed"),
                StatCard::new(Icon::RubleSign, ADMIN_TURNOVER, "Turnover"),
            ]
        }
    }
}

fn recent_table(role: Role, applications: &[Application]) -> Table {
    let staff = role != Role::Client;

    let mut columns = vec![
        Column::new(ColumnKey::Id, "ID"),
        Column::new(ColumnKey::InsuranceType, "Insurance type"),
    ];
    if staff {
        columns.push(Column::new(ColumnKey::Client, "Client"));
    }
    columns.push(Column::new(ColumnKey::Date, "Date"));
    columns.push(Column::new(ColumnKey::Status, "Status"));
    if staff {
        columns.push(Column::new(ColumnKey::Actions, "Actions"));
    }

    let rows = applications
        .iter()
        .take(RECENT_LIMIT)
        .map(|app| {
            let mut cells = vec![
                Cell::text(format!("#{}", app.id)),
                Cell::text(format::or_fallback(
                    app.insurance_name.as_deref(),
                    "Not specified",
                )),
            ];
            if staff {
                cells.push(Cell::text(format::or_fallback(
                    app.client_name.as_deref(),
                    "Not assigned",
                )));
            }
            cells.push(Cell::text(format::short_date(&app.created_at)));
            cells.push(Cell::Status { status: app.status });
            if staff {
                let mut buttons = vec![Button::outline(
                    "View",
                    Icon::Eye,
                    Action::ViewApplication {
                        application_id: app.id,
                    },
                )];
                if app.status.is_open() {
                    buttons.push(Button::primary(
                        "Mark processed",
                        Icon::Check,
                        Action::ChangeStatus {
                            application_id: app.id,
                            status: ApplicationStatus::Processed,
                        },
                    ));
                }
                cells.push(Cell::Actions { buttons });
            }
            Row { cells }
        })
        .collect();

    Table {
        caption: Some("Recent applications".to_string()),
        columns,
        rows,
    }
}

/// Renders the dashboard. `applications` is `None` when the fetch failed,
/// in which case only the header is shown.
pub fn render(user: &SessionUser, applications: Option<&[Application]>, today: NaiveDate) -> View {
    let mut view = View::new().push(Block::UserCard {
        card: UserCard {
            initial: user.initial(),
            full_name: user.full_name.clone(),
            role_name: user.role.display_name().to_string(),
            details: Vec::new(),
            date: Some(format::long_date(today)),
        },
    });

    if let Some(applications) = applications {
        view = view.push(Block::Stats {
            cards: stats(user.role, applications),
        });
        view = if applications.is_empty() {
            view.push(Block::Empty {
                text: NO_APPLICATIONS.to_string(),
            })
        } else {
            view.push(Block::Table {
                table: recent_table(user.role, applications),
            })
        };
    }

    view
}
