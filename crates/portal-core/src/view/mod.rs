//! Typed view-model tree.
//!
//! Page renderers return these structures instead of markup. A front end
//! walks the tree and draws it; tests inspect it directly.
//!
//! # Module Structure
//!
//! - `table`: Tabular listings with typed columns and per-row actions
//! - `form`: Input forms and their fields

mod form;
mod table;

pub use form::{Field, FieldKind, Form, FormId, SelectOption};
pub use table::{Cell, Column, ColumnKey, Row, Table};

use serde::Serialize;
use strum::Display;

use crate::application::ApplicationStatus;
use crate::page::Page;

/// Iconography intent of a visual element. Front ends pick the glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Icon {
    ShieldAlt,
    Home,
    Car,
    Headset,
    Bolt,
    Tachometer,
    FileAlt,
    FileSignature,
    Users,
    User,
    UserCheck,
    UserPlus,
    UserTag,
    UserTie,
    IdCard,
    PlusCircle,
    SignIn,
    SignOut,
    Lock,
    Envelope,
    Phone,
    Clock,
    CheckCircle,
    TimesCircle,
    ChartLine,
    RubleSign,
    Eye,
    Check,
    Times,
    Trash,
    ArrowLeft,
    PaperPlane,
}

/// What happens when a button or link is activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    Navigate { page: Page },
    Login,
    Register,
    Logout,
    SubmitApplication,
    ViewApplication { application_id: i64 },
    ChangeStatus {
        application_id: i64,
        status: ApplicationStatus,
    },
    DeleteUser { user_id: i64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonStyle {
    Primary,
    Outline,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Button {
    pub label: String,
    pub icon: Icon,
    pub action: Action,
    pub style: ButtonStyle,
    pub enabled: bool,
}

impl Button {
    pub fn new(label: impl Into<String>, icon: Icon, action: Action, style: ButtonStyle) -> Self {
        Self {
            label: label.into(),
            icon,
            action,
            style,
            enabled: true,
        }
    }

    pub fn primary(label: impl Into<String>, icon: Icon, action: Action) -> Self {
        Self::new(label, icon, action, ButtonStyle::Primary)
    }

    pub fn outline(label: impl Into<String>, icon: Icon, action: Action) -> Self {
        Self::new(label, icon, action, ButtonStyle::Outline)
    }

    pub fn danger(label: impl Into<String>, icon: Icon, action: Action) -> Self {
        Self::new(label, icon, action, ButtonStyle::Danger)
    }

    /// Shorthand for a button that navigates to a page.
    pub fn to_page(label: impl Into<String>, icon: Icon, page: Page, style: ButtonStyle) -> Self {
        Self::new(label, icon, Action::Navigate { page }, style)
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.enabled = !disabled;
        self
    }
}

/// A navigation link in the header.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavLink {
    pub label: String,
    pub icon: Icon,
    pub page: Page,
    pub active: bool,
}

/// Header region: brand, navigation links and auth buttons.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chrome {
    pub brand: String,
    pub links: Vec<NavLink>,
    pub buttons: Vec<Button>,
}

impl Chrome {
    pub fn link(&self, page: Page) -> Option<&NavLink> {
        self.links.iter().find(|l| l.page == page)
    }

    pub fn active_page(&self) -> Option<Page> {
        self.links.iter().find(|l| l.active).map(|l| l.page)
    }
}

/// One card of the dashboard statistics grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatCard {
    pub icon: Icon,
    pub value: String,
    pub label: String,
}

impl StatCard {
    pub fn new(icon: Icon, value: impl ToString, label: impl Into<String>) -> Self {
        Self {
            icon,
            value: value.to_string(),
            label: label.into(),
        }
    }
}

/// A marketing card on the home page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feature {
    pub icon: Icon,
    pub title: String,
    pub text: String,
}

/// Page title with optional header buttons.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Heading {
    pub icon: Icon,
    pub text: String,
    pub buttons: Vec<Button>,
}

/// Avatar block used by the dashboard and the profile page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserCard {
    pub initial: String,
    pub full_name: String,
    pub role_name: String,
    pub details: Vec<(Icon, String)>,
    pub date: Option<String>,
}

/// Building blocks of a page's content region.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Hero {
        title: String,
        subtitle: String,
        buttons: Vec<Button>,
    },
    Features { cards: Vec<Feature> },
    UserCard { card: UserCard },
    Stats { cards: Vec<StatCard> },
    Table { table: Table },
    Empty { text: String },
    Form { form: Form },
    Buttons { title: Option<String>, buttons: Vec<Button> },
    Note { text: String },
    Link { prompt: String, label: String, page: Page },
}

/// The content region of a page.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct View {
    pub heading: Option<Heading>,
    pub blocks: Vec<Block>,
}

impl View {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_heading(mut self, heading: Heading) -> Self {
        self.heading = Some(heading);
        self
    }

    pub fn push(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }

    /// Statistics cards, if the view has a stats block.
    pub fn stats(&self) -> Option<&[StatCard]> {
        self.blocks.iter().find_map(|b| match b {
            Block::Stats { cards } => Some(cards.as_slice()),
            _ => None,
        })
    }

    /// First table of the view.
    pub fn table(&self) -> Option<&Table> {
        self.blocks.iter().find_map(|b| match b {
            Block::Table { table } => Some(table),
            _ => None,
        })
    }

    pub fn form(&self) -> Option<&Form> {
        self.blocks.iter().find_map(|b| match b {
            Block::Form { form } => Some(form),
            _ => None,
        })
    }

    /// Text of the first empty-state block.
    pub fn empty_text(&self) -> Option<&str> {
        self.blocks.iter().find_map(|b| match b {
            Block::Empty { text } => Some(text.as_str()),
            _ => None,
        })
    }

    /// All buttons reachable from the view, in display order.
    pub fn buttons(&self) -> Vec<&Button> {
        let mut out: Vec<&Button> = Vec::new();
        if let Some(heading) = &self.heading {
            out.extend(heading.buttons.iter());
        }
        for block in &self.blocks {
            match block {
                Block::Hero { buttons, .. } | Block::Buttons { buttons, .. } => {
                    out.extend(buttons.iter())
                }
                Block::Table { table } => out.extend(table.rows.iter().flat_map(|r| r.actions())),
                Block::Form { form } => {
                    out.extend(form.secondary.iter());
                    out.push(&form.submit);
                }
                _ => {}
            }
        }
        out
    }
}
