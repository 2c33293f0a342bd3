use portal_core::page::Page;
use portal_core::view::{Block, Button, ButtonStyle, Feature, Icon, View};

fn feature(icon: Icon, title: &str, text: &str) -> Feature {
    Feature {
        icon,
        title: title.to_string(),
        text: text.to_string(),
    }
}

/// Landing page. The hero buttons depend on whether someone is signed in.
pub fn render(authenticated: bool) -> View {
    let buttons = if authenticated {
        vec![Button::to_page(
            "Go to dashboard",
            Icon::Tachometer,
            Page::Dashboard,
            ButtonStyle::Primary,
        )]
    } else {
        vec![
            Button::to_page(
                "Get insured",
                Icon::FileSignature,
                Page::Register,
                ButtonStyle::Primary,
            ),
            Button::to_page(
                "Personal account",
                Icon::UserCheck,
                Page::Login,
                ButtonStyle::Outline,
            ),
        ]
    };

    View::new()
        .push(Block::Hero {
            title: "Reliable protection for you and your property".to_string(),
            subtitle: "Comprehensive insurance solutions with a personal approach".to_string(),
            buttons,
        })
        .push(Block::Features {
            cards: vec![
                feature(
                    Icon::Home,
                    "Home insurance",
                    "Protection against fire, flooding and other unforeseen events",
                ),
                feature(
                    Icon::Car,
                    "Car insurance",
                    "OSAGO and KASKO for complete protection of your car",
                ),
                feature(
                    Icon::Headset,
                    "24/7 support",
                    "Our managers are always ready to help you",
                ),
                feature(
                    Icon::Bolt,
                    "Fast processing",
                    "Get insured online in just 15 minutes",
                ),
            ],
        })
}
