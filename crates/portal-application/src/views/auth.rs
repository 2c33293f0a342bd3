//! Login and registration pages.

use portal_core::page::Page;
use portal_core::user::{Manager, Role};
use portal_core::view::{
    Action, Block, Button, Field, FieldKind, Form, FormId, Heading, Icon, SelectOption, View,
};

/// Credentials of the seeded demo accounts, shown under the login form.
pub const DEMO_USERS_HINT: &str = "Demo users: Administrator admin / password123, \
Manager manager1 / password123, Client client1 / password123";

pub fn login() -> View {
    let form = Form {
        id: FormId::Login,
        fields: vec![
            Field::new("username", "Username", FieldKind::Text).with_icon(Icon::User),
            Field::new("password", "Password", FieldKind::Password).with_icon(Icon::Lock),
        ],
        submit: Button::primary("Log in", Icon::SignIn, Action::Login),
        secondary: Vec::new(),
    };

    View::new()
        .with_heading(Heading {
            icon: Icon::SignIn,
            text: "Sign in".to_string(),
            buttons: Vec::new(),
        })
        .push(Block::Form { form })
        .push(Block::Link {
            prompt: "No account?".to_string(),
            label: "Register".to_string(),
            page: Page::Register,
        })
        .push(Block::Note {
            text: DEMO_USERS_HINT.to_string(),
        })
}

/// Registration form. The manager selector lists `managers` and is shown
/// only while `role` is client.
pub fn register(managers: &[Manager], role: Role) -> View {
    let role_options = vec![
        SelectOption::new(Role::Client, Role::Client.display_name()),
        SelectOption::new(Role::Manager, Role::Manager.display_name()),
    ];
    let manager_options = std::iter::once(SelectOption::new("", "Choose a manager"))
        .chain(managers.iter().map(|m| SelectOption::new(m.id, m.label())))
        .collect();

    let form = Form {
        id: FormId::Register,
        fields: vec![
            Field::new("full_name", "Full name", FieldKind::Text).with_icon(Icon::IdCard),
            Field::new("username", "Username", FieldKind::Text).with_icon(Icon::User),
            Field::new("email", "Email", FieldKind::Email).with_icon(Icon::Envelope),
            Field::new("phone", "Phone", FieldKind::Phone).with_icon(Icon::Phone),
            Field::new("password", "Password", FieldKind::Password).with_icon(Icon::Lock),
            Field::new(
                "role",
                "Role",
                FieldKind::Select {
                    options: role_options,
                },
            )
            .with_icon(Icon::UserTag),
            Field::new(
                "manager_id",
                "Manager (if any)",
                FieldKind::Select {
                    options: manager_options,
                },
            )
            .with_icon(Icon::UserTie)
            .optional()
            .visible(role == Role::Client),
        ],
        submit: Button::primary("Sign up", Icon::UserPlus, Action::Register),
        secondary: Vec::new(),
    };

    View::new()
        .with_heading(Heading {
            icon: Icon::UserPlus,
            text: "Registration".to_string(),
            buttons: Vec::new(),
        })
        .push(Block::Form { form })
        .push(Block::Link {
            prompt: "Already have an account?".to_string(),
            label: "Sign in".to_string(),
            page: Page::Login,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn managers() -> Vec<Manager> {
        vec![Manager {
            id: 2,
            full_name: "Ivanov Ivan".to_string(),
            email: "manager@example.com".to_string(),
        }]
    }

    #[test]
    fn test_login_form_and_hint() {
        let view = login();
        let form = view.form().unwrap();
        assert_eq!(form.id, FormId::Login);
        assert!(form.field("username").is_some());
        assert!(form.field("password").is_some());
        assert!(view.blocks.iter().any(|b| matches!(
            b,
            Block::Note { text } if text.contains("client1 / password123")
        )));
    }

    #[test]
    fn test_manager_selector_lists_managers() {
        let view = register(&managers(), Role::Client);
        let field = view.form().unwrap().field("manager_id").unwrap();
        assert!(field.visible);
        assert!(!field.required);
        let labels: Vec<&str> = field.options().iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["Choose a manager", "Ivanov Ivan (manager@example.com)"]);
        assert_eq!(field.options()[1].value, "2");
    }

    #[test]
    fn test_manager_selector_hidden_for_manager_role() {
        let view = register(&managers(), Role::Manager);
        let form = view.form().unwrap();
        assert!(!form.field("manager_id").unwrap().visible);
        assert_eq!(form.visible_fields().count(), 6);
    }

    #[test]
    fn test_role_selector_offers_client_and_manager_only() {
        let view = register(&[], Role::Client);
        let values: Vec<&str> = view
            .form()
            .unwrap()
            .field("role")
            .unwrap()
            .options()
            .iter()
            .map(|o| o.value.as_str())
            .collect();
        assert_eq!(values, vec!["client", "manager"]);
    }
}
