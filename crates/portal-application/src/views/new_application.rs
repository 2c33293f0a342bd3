use portal_core::application::INSURANCE_CATALOGUE;
use portal_core::page::Page;
use portal_core::view::{
    Action, Block, Button, ButtonStyle, Field, FieldKind, Form, FormId, Heading, Icon,
    SelectOption, View,
};

pub fn render() -> View {
    let options = std::iter::once(SelectOption::new("", "Choose a type"))
        .chain(
            INSURANCE_CATALOGUE
                .iter()
                .map(|t| SelectOption::new(t.id, t.name)),
        )
        .collect();

    let form = Form {
        id: FormId::NewApplication,
        fields: vec![
            Field::new("insurance_type_id", "Insurance type", FieldKind::Select { options })
                .with_icon(Icon::ShieldAlt),
            Field::new("details", "Additional information", FieldKind::TextArea)
                .with_icon(Icon::FileAlt),
        ],
        submit: Button::primary("Submit application", Icon::PaperPlane, Action::SubmitApplication),
        secondary: vec![Button::to_page(
            "Back",
            Icon::ArrowLeft,
            Page::Applications,
            ButtonStyle::Outline,
        )],
    };

    View::new()
        .with_heading(Heading {
            icon: Icon::PlusCircle,
            text: "New insurance application".to_string(),
            buttons: Vec::new(),
        })
        .push(Block::Form { form })
}
