//! Application listing with role-dependent columns and actions.

use portal_core::application::{Application, ApplicationStatus};
use portal_core::format::{self, DASH};
use portal_core::page::Page;
use portal_core::user::Role;
use portal_core::view::{
    Action, Block, Button, ButtonStyle, Cell, Column, ColumnKey, Heading, Icon, Row, Table, View,
};

use super::NO_APPLICATIONS;

fn columns(role: Role) -> Vec<Column> {
    let mut columns = vec![
        Column::new(ColumnKey::Id, "ID"),
        Column::new(ColumnKey::InsuranceType, "Insurance type"),
    ];
    if role != Role::Client {
        columns.push(Column::new(ColumnKey::Client, "Client"));
    }
    if role == Role::Admin {
        columns.push(Column::new(ColumnKey::Manager, "Manager"));
    }
    columns.extend([
        Column::new(ColumnKey::Date, "Date"),
        Column::new(ColumnKey::Status, "Status"),
        Column::new(ColumnKey::Price, "Price"),
        Column::new(ColumnKey::Actions, "Actions"),
    ]);
    columns
}

fn actions(role: Role, app: &Application) -> Vec<Button> {
    let mut buttons = vec![Button::outline(
        "View",
        Icon::Eye,
        Action::ViewApplication {
            application_id: app.id,
        },
    )];
    if role.can_process_applications() && app.status.is_open() {
        buttons.push(Button::primary(
            "Mark processed",
            Icon::Check,
            Action::ChangeStatus {
                application_id: app.id,
                status: ApplicationStatus::Processed,
            },
        ));
        buttons.push(Button::danger(
            "Reject",
            Icon::Times,
            Action::ChangeStatus {
                application_id: app.id,
                status: ApplicationStatus::Rejected,
            },
        ));
    }
    buttons
}

fn row(role: Role, app: &Application) -> Row {
    let mut cells = vec![
        Cell::text(format!("#{}", app.id)),
        Cell::text(format::or_fallback(
            app.insurance_name.as_deref(),
            "Not specified",
        )),
    ];
    if role != Role::Client {
        cells.push(Cell::text(format::or_fallback(app.client_name.as_deref(), DASH)));
    }
    if role == Role::Admin {
        cells.push(Cell::text(format::or_fallback(
            app.manager_name.as_deref(),
            "Not assigned",
        )));
    }
    cells.push(Cell::text(format::short_date(&app.created_at)));
    cells.push(Cell::Status { status: app.status });
    cells.push(Cell::text(format::price(app.price)));
    cells.push(Cell::Actions {
        buttons: actions(role, app),
    });
    Row { cells }
}

/// Renders the listing. A missing list (failed fetch) renders like an
/// empty one.
pub fn render(role: Role, applications: Option<&[Application]>) -> View {
    let header_buttons = if role == Role::Client {
        vec![Button::to_page(
            "New application",
            Icon::PlusCircle,
            Page::NewApplication,
            ButtonStyle::Primary,
        )]
    } else {
        Vec::new()
    };

    let view = View::new().with_heading(Heading {
        icon: Icon::FileAlt,
        text: "Application management".to_string(),
        buttons: header_buttons,
    });

    match applications {
        Some(list) if !list.is_empty() => view.push(Block::Table {
            table: Table {
                caption: None,
                columns: columns(role),
                rows: list.iter().map(|app| row(role, app)).collect(),
            },
        }),
        _ => view.push(Block::Empty {
            text: NO_APPLICATIONS.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::application;

    fn sample() -> Vec<Application> {
        let mut priced = application(2, ApplicationStatus::Processed);
        priced.price = Some(15000.0);
        priced.insurance_name = None;
        priced.client_name = None;
        priced.manager_name = Some("Ivanov Ivan".to_string());
        vec![application(1, ApplicationStatus::InProgress), priced]
    }

    #[test]
    fn test_columns_per_role() {
        let client = render(Role::Client, Some(&sample()));
        let table = client.table().unwrap();
        assert!(!table.has_column(ColumnKey::Client));
        assert!(!table.has_column(ColumnKey::Manager));

        let manager = render(Role::Manager, Some(&sample()));
        let table = manager.table().unwrap();
        assert!(table.has_column(ColumnKey::Client));
        assert!(!table.has_column(ColumnKey::Manager));

        let admin = render(Role::Admin, Some(&sample()));
        assert_eq!(
            admin.table().unwrap().column_keys(),
            vec![
                ColumnKey::Id,
                ColumnKey::InsuranceType,
                ColumnKey::Client,
                ColumnKey::Manager,
                ColumnKey::Date,
                ColumnKey::Status,
                ColumnKey::Price,
                ColumnKey::Actions
            ]
        );
    }

    #[test]
    fn test_cell_fallbacks() {
        let view = render(Role::Admin, Some(&sample()));
        let table = view.table().unwrap();

        assert_eq!(table.cell_text(0, ColumnKey::Manager), Some("Not assigned"));
        assert_eq!(table.cell_text(0, ColumnKey::Price), Some(DASH));
        assert_eq!(table.cell_text(0, ColumnKey::Date), Some("01.05.2024"));

        assert_eq!(table.cell_text(1, ColumnKey::InsuranceType), Some("Not specified"));
        assert_eq!(table.cell_text(1, ColumnKey::Client), Some(DASH));
        assert_eq!(table.cell_text(1, ColumnKey::Manager), Some("Ivanov Ivan"));
        assert_eq!(table.cell_text(1, ColumnKey::Price), Some("15000 ₽"));
    }

    #[test]
    fn test_client_only_views() {
        let view = render(Role::Client, Some(&sample()));
        let table = view.table().unwrap();
        for row in &table.rows {
            let actions: Vec<Action> = row.actions().map(|b| b.action).collect();
            assert_eq!(actions.len(), 1);
            assert!(matches!(actions[0], Action::ViewApplication { .. }));
        }
        assert_eq!(view.heading.as_ref().unwrap().buttons.len(), 1);
    }

    #[test]
    fn test_staff_can_process_open_applications_only() {
        let view = render(Role::Manager, Some(&sample()));
        let table = view.table().unwrap();
        let open: Vec<Action> = table.rows[0].actions().map(|b| b.action).collect();
        assert_eq!(open.len(), 3);
        assert_eq!(
            open[2],
            Action::ChangeStatus {
                application_id: 1,
                status: ApplicationStatus::Rejected
            }
        );
        assert_eq!(table.rows[1].actions().count(), 1);
        assert!(view.heading.as_ref().unwrap().buttons.is_empty());
    }

    #[test]
    fn test_empty_and_missing_lists() {
        assert_eq!(render(Role::Admin, Some(&[])).empty_text(), Some(NO_APPLICATIONS));
        assert_eq!(render(Role::Admin, None).empty_text(), Some(NO_APPLICATIONS));
    }
}
