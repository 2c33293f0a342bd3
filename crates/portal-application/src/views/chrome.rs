use portal_core::page::Page;
use portal_core::user::{Role, SessionUser};
use portal_core::view::{Action, Button, ButtonStyle, Chrome, Icon, NavLink};

pub const BRAND: &str = "Strahovochka";

fn link(label: &str, icon: Icon, page: Page, active: Page) -> NavLink {
    NavLink {
        label: label.to_string(),
        icon,
        page,
        active: page == active,
    }
}

/// Builds the header for the current user with `active` highlighted.
pub fn render(user: Option<&SessionUser>, active: Page) -> Chrome {
    let (links, buttons) = match user {
        Some(user) => {
            let mut links = vec![
                link("Dashboard", Icon::Tachometer, Page::Dashboard, active),
                link("Applications", Icon::FileAlt, Page::Applications, active),
            ];
            if user.role == Role::Admin {
                links.push(link("Users", Icon::Users, Page::Users, active));
            }
            if user.role == Role::Client {
                links.push(link(
                    "New application",
                    Icon::PlusCircle,
                    Page::NewApplication,
                    active,
                ));
            }
            links.push(link("Profile", Icon::User, Page::Profile, active));
            (
                links,
                vec![Button::outline("Log out", Icon::SignOut, Action::Logout)],
            )
        }
        None => (
            vec![
                link("Home", Icon::Home, Page::Home, active),
                link("Login", Icon::SignIn, Page::Login, active),
                link("Register", Icon::UserPlus, Page::Register, active),
            ],
            vec![
                Button::to_page("Login", Icon::SignIn, Page::Login, ButtonStyle::Outline),
                Button::to_page("Register", Icon::UserPlus, Page::Register, ButtonStyle::Primary),
            ],
        ),
    };

    Chrome {
        brand: BRAND.to_string(),
        links,
        buttons,
    }
}
