//! Admin user listing.

use portal_core::format::{self, DASH};
use portal_core::user::{Role, User};
use portal_core::view::{
    Action, Block, Button, Cell, Column, ColumnKey, Heading, Icon, Row, Table, View,
};

use super::NO_USERS;

fn row(user: &User) -> Row {
    Row {
        cells: vec![
            Cell::text(user.id.to_string()),
            Cell::text(user.full_name.clone()),
            Cell::text(user.username.clone()),
            Cell::text(user.email.clone()),
            Cell::text(user.role.display_name()),
            Cell::text(format::or_fallback(user.phone.as_deref(), DASH)),
            Cell::text(format::short_date(&user.created_at)),
            Cell::Actions {
                // Admin accounts cannot be deleted from the listing.
                buttons: vec![
                    Button::danger("Delete", Icon::Trash, Action::DeleteUser { user_id: user.id })
                        .disabled(user.role == Role::Admin),
                ],
            },
        ],
    }
}

pub fn render(users: Option<&[User]>) -> View {
    let view = View::new().with_heading(Heading {
        icon: Icon::Users,
        text: "User management".to_string(),
        buttons: Vec::new(),
    });

    match users {
        Some(list) if !list.is_empty() => view.push(Block::Table {
            table: Table {
                caption: None,
                columns: vec![
                    Column::new(ColumnKey::Id, "ID"),
                    Column::new(ColumnKey::FullName, "Full name"),
                    Column::new(ColumnKey::Username, "Username"),
                    Column::new(ColumnKey::Email, "Email"),
                    Column::new(ColumnKey::Role, "Role"),
                    Column::new(ColumnKey::Phone, "Phone"),
                    Column::new(ColumnKey::Registered, "Registered"),
                    Column::new(ColumnKey::Actions, "Actions"),
                ],
                rows: list.iter().map(row).collect(),
            },
        }),
        _ => view.push(Block::Empty {
            text: NO_USERS.to_string(),
        }),
    }
}
