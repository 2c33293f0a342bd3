//! Terminal rendering of the router's screen.

use colored::{ColoredString, Colorize};
use portal_application::Screen;
use portal_core::application::{Application, ApplicationStatus, InsuranceType};
use portal_core::format;
use portal_core::modal::Modal;
use portal_core::notification::{Notification, NotificationKind, NotificationPhase};
use portal_core::view::{
    Action, Block, Button, ButtonStyle, Cell, Chrome, FieldKind, Form, Table, View,
};

/// REPL command that performs `action`, if one exists.
pub fn command_for(action: &Action) -> Option<String> {
    match action {
        Action::Navigate { page } => Some(format!("go {}", page)),
        Action::Login => Some("login".to_string()),
        Action::Register => Some("register".to_string()),
        Action::Logout => Some("logout".to_string()),
        Action::SubmitApplication => Some("new".to_string()),
        Action::ViewApplication { application_id } => Some(format!("view {}", application_id)),
        Action::ChangeStatus {
            application_id,
            status: ApplicationStatus::Processed,
        } => Some(format!("approve {}", application_id)),
        Action::ChangeStatus {
            application_id,
            status: ApplicationStatus::Rejected,
        } => Some(format!("reject {}", application_id)),
        Action::ChangeStatus { .. } => None,
        Action::DeleteUser { user_id } => Some(format!("delete-user {}", user_id)),
    }
}

fn button(button: &Button) -> String {
    match command_for(&button.action) {
        Some(command) if button.enabled => {
            let label = match button.style {
                ButtonStyle::Primary => button.label.bright_blue().bold(),
                ButtonStyle::Outline => button.label.normal(),
                ButtonStyle::Danger => button.label.red(),
            };
            format!("[{}: {}]", label, command.bright_cyan())
        }
        _ => format!("[{}]", button.label).bright_black().to_string(),
    }
}

fn buttons(buttons: &[Button]) -> String {
    buttons.iter().map(button).collect::<Vec<_>>().join(" ")
}

fn status_colored(status: ApplicationStatus, text: &str) -> ColoredString {
    match status {
        ApplicationStatus::InProgress => text.yellow(),
        ApplicationStatus::Processed => text.green(),
        ApplicationStatus::Rejected => text.red(),
    }
}

fn status(status: ApplicationStatus) -> ColoredString {
    status_colored(status, &status.to_string())
}

pub fn chrome(chrome: &Chrome) -> String {
    let links: Vec<String> = chrome
        .links
        .iter()
        .map(|link| {
            if link.active {
                format!("[{}]", link.label).bold().underline().to_string()
            } else {
                link.label.clone()
            }
        })
        .collect();
    format!(
        "{}  |  {}  |  {}",
        chrome.brand.bright_magenta().bold(),
        links.join("  "),
        buttons(&chrome.buttons)
    )
}

pub fn banner(notification: &Notification, phase: NotificationPhase) -> String {
    let text = match notification.kind {
        NotificationKind::Success => format!("[ok] {}", notification.message).green(),
        NotificationKind::Error => format!("[error] {}", notification.message).red(),
        NotificationKind::Info => format!("[info] {}", notification.message).blue(),
    };
    match phase {
        NotificationPhase::Visible => text.to_string(),
        NotificationPhase::Leaving => text.dimmed().to_string(),
    }
}

fn cell_text(cell: &Cell) -> String {
    match cell {
        Cell::Text { text } => text.clone(),
        Cell::Status { status } => status.to_string(),
        Cell::Actions { buttons } => buttons
            .iter()
            .filter(|b| b.enabled)
            .filter_map(|b| command_for(&b.action))
            .collect::<Vec<_>>()
            .join(", "),
    }
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.chars().count());
    format!("{}{}", text, " ".repeat(fill))
}

pub fn table(table: &Table) -> Vec<String> {
    let mut widths: Vec<usize> = table.columns.iter().map(|c| c.label.chars().count()).collect();
    let texts: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|row| row.cells.iter().map(cell_text).collect())
        .collect();
    for row in &texts {
        for (i, text) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(i) {
                *width = (*width).max(text.chars().count());
            }
        }
    }

    let mut lines = Vec::new();
    if let Some(caption) = &table.caption {
        lines.push(caption.bold().to_string());
    }
    let header: Vec<String> = table
        .columns
        .iter()
        .zip(&widths)
        .map(|(c, w)| pad(&c.label, *w))
        .collect();
    lines.push(header.join("  ").bold().to_string());

    for (row, row_texts) in table.rows.iter().zip(&texts) {
        let cells: Vec<String> = row
            .cells
            .iter()
            .zip(row_texts)
            .zip(&widths)
            .map(|((cell, text), w)| {
                let padded = pad(text, *w);
                match cell {
                    Cell::Status { status } => status_colored(*status, &padded).to_string(),
                    Cell::Actions { .. } => padded.bright_cyan().to_string(),
                    Cell::Text { .. } => padded,
                }
            })
            .collect();
        lines.push(cells.join("  ").trim_end().to_string());
    }
    lines
}

fn form(form: &Form) -> Vec<String> {
    let mut lines = Vec::new();
    for field in form.visible_fields() {
        let marker = if field.required { "*" } else { " " };
        let mut line = format!("  {}{}", field.label, marker);
        if let FieldKind::Select { options } = &field.kind {
            let choices: Vec<String> = options
                .iter()
                .filter(|o| !o.value.is_empty())
                .map(|o| format!("{}={}", o.value, o.label))
                .collect();
            line.push_str(&format!(" ({})", choices.join(", ")));
        }
        lines.push(line);
    }
    let mut actions = form.secondary.clone();
    actions.push(form.submit.clone());
    lines.push(buttons(&actions));
    lines
}

pub fn view(view: &View) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(heading) = &view.heading {
        let mut title = format!("== {} ==", heading.text).bold().to_string();
        if !heading.buttons.is_empty() {
            title = format!("{}  {}", title, buttons(&heading.buttons));
        }
        lines.push(title);
    }

    for block in &view.blocks {
        match block {
            Block::Hero {
                title,
                subtitle,
                buttons: hero,
            } => {
                lines.push(title.bold().to_string());
                lines.push(subtitle.clone());
                lines.push(buttons(hero));
            }
            Block::Features { cards } => {
                for card in cards {
                    lines.push(format!("  * {}: {}", card.title.bold(), card.text));
                }
            }
            Block::UserCard { card } => {
                lines.push(format!(
                    "({}) {}, {}",
                    card.initial.bright_magenta().bold(),
                    card.full_name.bold(),
                    card.role_name
                ));
                for (_, detail) in &card.details {
                    lines.push(format!("    {}", detail));
                }
                if let Some(date) = &card.date {
                    lines.push(format!("    {}", date.bright_black()));
                }
            }
            Block::Stats { cards } => {
                let stats: Vec<String> = cards
                    .iter()
                    .map(|c| format!("{} {}", c.value.bold(), c.label))
                    .collect();
                lines.push(stats.join("   "));
            }
            Block::Table { table: t } => lines.extend(table(t)),
            Block::Empty { text } => lines.push(text.bright_black().italic().to_string()),
            Block::Form { form: f } => lines.extend(form(f)),
            Block::Buttons {
                title,
                buttons: list,
            } => {
                if let Some(title) = title {
                    lines.push(title.bold().to_string());
                }
                lines.push(buttons(list));
            }
            Block::Note { text } => lines.push(text.bright_black().to_string()),
            Block::Link {
                prompt,
                label,
                page,
            } => lines.push(format!(
                "{} {}: {}",
                prompt,
                label,
                format!("go {}", page).bright_cyan()
            )),
        }
    }
    lines
}

fn application_details(app: &Application) -> Vec<String> {
    let insurance = app
        .insurance_name
        .clone()
        .or_else(|| InsuranceType::find(app.insurance_type_id).map(|t| t.name.to_string()));
    let mut lines = vec![
        format!("Application #{}", app.id).bold().to_string(),
        format!(
            "  Insurance: {}",
            format::or_fallback(insurance.as_deref(), "Not specified")
        ),
        format!("  Status:    {}", status(app.status)),
        format!("  Created:   {}", format::short_date(&app.created_at)),
        format!("  Price:     {}", format::price(app.price)),
    ];
    if let Some(client) = &app.client_name {
        lines.push(format!("  Client:    {}", client));
    }
    if let Some(manager) = &app.manager_name {
        lines.push(format!("  Manager:   {}", manager));
    }
    if let Some(details) = app.details_text() {
        lines.push(format!("  Details:   {}", details));
    }
    lines.push(format!("  {}", "(press 'no' to close)".bright_black()));
    lines
}

pub fn modal(modal: &Modal) -> Vec<String> {
    match modal {
        Modal::Confirm { message, .. } => vec![format!(
            "{} {}",
            message.bright_yellow(),
            "(yes / no)".bright_black()
        )],
        Modal::ApplicationDetails { application } => application_details(application),
    }
}

/// Full screen: chrome, banner, content and any open dialog.
pub fn screen(screen: &Screen) -> String {
    let mut lines = vec![chrome(&screen.chrome), String::new()];
    if let Some((notification, phase)) = &screen.banner {
        lines.push(banner(notification, *phase));
        lines.push(String::new());
    }
    lines.extend(view(&screen.content));
    if let Some(open) = &screen.modal {
        lines.push(String::new());
        lines.extend(modal(open));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_core::page::Page;
    use portal_core::view::{Column, ColumnKey, Icon, NavLink, Row};
    use std::time::{Duration, Instant};

    fn plain() {
        colored::control::set_override(false);
    }

    fn application(id: i64, status: ApplicationStatus) -> Application {
        Application {
            id,
            insurance_type_id: 2,
            insurance_name: None,
            client_id: 3,
            client_name: Some("Petrov Petr".to_string()),
            manager_name: None,
            status,
            price: Some(15000.0),
            created_at: "2024-05-02 11:30:00".to_string(),
            details: serde_json::Value::Null,
        }
    }

    #[test]
    fn test_commands_for_actions() {
        assert_eq!(
            command_for(&Action::Navigate {
                page: Page::NewApplication
            })
            .as_deref(),
            Some("go new-application")
        );
        assert_eq!(
            command_for(&Action::ChangeStatus {
                application_id: 4,
                status: ApplicationStatus::Rejected
            })
            .as_deref(),
            Some("reject 4")
        );
        assert_eq!(
            command_for(&Action::ChangeStatus {
                application_id: 4,
                status: ApplicationStatus::InProgress
            }),
            None
        );
    }

    #[test]
    fn test_chrome_marks_active_link() {
        plain();
        let chrome = Chrome {
            brand: "Strahovochka".to_string(),
            links: vec![
                NavLink {
                    label: "Home".to_string(),
                    icon: Icon::Home,
                    page: Page::Home,
                    active: false,
                },
                NavLink {
                    label: "Login".to_string(),
                    icon: Icon::SignIn,
                    page: Page::Login,
                    active: true,
                },
            ],
            buttons: vec![Button::primary("Log in", Icon::SignIn, Action::Login)],
        };
        assert_eq!(
            super::chrome(&chrome),
            "Strahovochka  |  Home  [Login]  |  [Log in: login]"
        );
    }

    #[test]
    fn test_table_aligns_columns_and_lists_commands() {
        plain();
        let table = Table {
            caption: None,
            columns: vec![
                Column::new(ColumnKey::Id, "ID"),
                Column::new(ColumnKey::Status, "Status"),
                Column::new(ColumnKey::Actions, "Actions"),
            ],
            rows: vec![Row {
                cells: vec![
                    Cell::text("#12"),
                    Cell::Status {
                        status: ApplicationStatus::InProgress,
                    },
                    Cell::Actions {
                        buttons: vec![
                            Button::outline(
                                "View",
                                Icon::Eye,
                                Action::ViewApplication { application_id: 12 },
                            ),
                            Button::danger("Delete", Icon::Trash, Action::DeleteUser { user_id: 1 })
                                .disabled(true),
                        ],
                    },
                ],
            }],
        };
        let lines = super::table(&table);
        assert_eq!(lines[0].trim_end(), "ID   Status       Actions");
        assert_eq!(lines[1], "#12  in progress  view 12");
    }

    #[test]
    fn test_disabled_button_has_no_command() {
        plain();
        let disabled =
            Button::danger("Delete", Icon::Trash, Action::DeleteUser { user_id: 1 }).disabled(true);
        assert_eq!(button(&disabled), "[Delete]");
    }

    #[test]
    fn test_banner_prefix_by_kind() {
        plain();
        let notification = Notification::new(
            NotificationKind::Error,
            "Server error",
            Instant::now(),
            Duration::from_secs(5),
        );
        assert_eq!(
            banner(&notification, NotificationPhase::Visible),
            "[error] Server error"
        );
    }

    #[test]
    fn test_details_modal() {
        plain();
        let lines = modal(&Modal::ApplicationDetails {
            application: application(7, ApplicationStatus::Processed),
        });
        assert_eq!(lines[0], "Application #7");
        assert!(lines.contains(&"  Insurance: Car - OSAGO".to_string()));
        assert!(lines.contains(&"  Price:     15000 ₽".to_string()));
        assert!(lines.contains(&"  Created:   02.05.2024".to_string()));
    }

    #[test]
    fn test_confirm_modal_asks_yes_no() {
        plain();
        let lines = modal(&Modal::confirm(
            portal_core::modal::PendingAction::DeleteUser { user_id: 3 },
        ));
        assert_eq!(
            lines,
            vec!["Are you sure you want to delete this user? (yes / no)".to_string()]
        );
    }
}
