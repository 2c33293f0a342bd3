use portal_core::page::Page;
use portal_core::user::SessionUser;
use portal_core::view::{
    Action, Block, Button, ButtonStyle, Heading, Icon, UserCard, View,
};

pub fn render(user: &SessionUser) -> View {
    let mut details = vec![(Icon::Envelope, user.email.clone())];
    if let Some(phone) = user.phone.as_deref().filter(|p| !p.is_empty()) {
        details.push((Icon::Phone, phone.to_string()));
    }

    View::new()
        .with_heading(Heading {
            icon: Icon::User,
            text: "My profile".to_string(),
            buttons: Vec::new(),
        })
        .push(Block::UserCard {
            card: UserCard {
                initial: user.initial(),
                full_name: user.full_name.clone(),
                role_name: user.role.display_name().to_string(),
                details,
                date: None,
            },
        })
        .push(Block::Buttons {
            title: Some("Actions".to_string()),
            buttons: vec![
                Button::to_page("Back", Icon::ArrowLeft, Page::Dashboard, ButtonStyle::Outline),
                Button::danger("Log out", Icon::SignOut, Action::Logout),
            ],
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::session_user;
    use portal_core::user::Role;

    #[test]
    fn test_phone_shown_only_when_present() {
        let mut user = session_user(Role::Client);
        let view = render(&user);
        let Block::UserCard { card } = &view.blocks[0] else {
            panic!("expected user card");
        };
        assert_eq!(card.details.len(), 1);

        user.phone = Some("+7 900 111 22 33".to_string());
        let view = render(&user);
        let Block::UserCard { card } = &view.blocks[0] else {
            panic!("expected user card");
        };
        assert_eq!(card.details[1], (Icon::Phone, "+7 900 111 22 33".to_string()));
    }

    #[test]
    fn test_back_and_logout_actions() {
        let view = render(&session_user(Role::Manager));
        let actions: Vec<Action> = view.buttons().iter().map(|b| b.action).collect();
        assert_eq!(
            actions,
            vec![Action::Navigate { page: Page::Dashboard }, Action::Logout]
        );
    }
}
