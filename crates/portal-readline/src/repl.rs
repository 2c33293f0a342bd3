use std::collections::BTreeMap;

use anyhow::Result;
use colored::Colorize;
use portal_application::{Dispatch, Router};
use portal_core::forms::{LoginForm, NewApplicationForm, RegisterForm};
use portal_core::modal::ModalResponse;
use portal_core::page::Page;
use portal_core::user::Role;
use portal_core::view::{Field, FieldKind, FormId};
use rustyline::Editor;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;

use crate::commands::{COMMANDS, Command};
use crate::helper::ReplHelper;
use crate::render;

/// Raw form input keyed by field name.
type FormValues = BTreeMap<&'static str, String>;

fn take(values: &mut FormValues, name: &str) -> String {
    values.remove(name).unwrap_or_default()
}

fn login_form(mut values: FormValues) -> LoginForm {
    LoginForm {
        username: take(&mut values, "username"),
        password: take(&mut values, "password"),
    }
}

fn register_form(mut values: FormValues) -> RegisterForm {
    RegisterForm {
        username: take(&mut values, "username"),
        password: take(&mut values, "password"),
        full_name: take(&mut values, "full_name"),
        email: take(&mut values, "email"),
        phone: take(&mut values, "phone"),
        role: take(&mut values, "role"),
        manager_id: take(&mut values, "manager_id"),
    }
}

fn new_application_form(mut values: FormValues) -> NewApplicationForm {
    NewApplicationForm {
        insurance_type_id: take(&mut values, "insurance_type_id"),
        details: take(&mut values, "details"),
    }
}

fn page_of(form: FormId) -> Page {
    match form {
        FormId::Login => Page::Login,
        FormId::Register => Page::Register,
        FormId::NewApplication => Page::NewApplication,
    }
}

fn print_help() {
    println!("{}", "Commands:".bold());
    for (_, help) in COMMANDS {
        println!("  {}", help);
    }
}

/// Interactive front end driving a [`Router`].
pub struct Repl {
    router: Router,
    editor: Editor<ReplHelper, DefaultHistory>,
}

impl Repl {
    pub fn new(router: Router) -> Result<Self> {
        let mut editor = Editor::new()?;
        editor.set_helper(Some(ReplHelper::new()));
        Ok(Self { router, editor })
    }

    pub async fn run(&mut self) -> Result<()> {
        println!("{}", "=== Strahovochka ===".bright_magenta().bold());
        println!(
            "{}",
            "Type 'help' for the list of commands or 'quit' to exit.".bright_black()
        );

        self.router.start().await;
        self.show().await;

        loop {
            let prompt = match self.router.session().role().await {
                Some(role) => format!("{}>> ", role),
                None => ">> ".to_string(),
            };
            match self.editor.readline(&prompt) {
                Ok(line) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        continue;
                    }
                    let _ = self.editor.add_history_entry(trimmed);

                    match trimmed.parse::<Command>() {
                        Ok(Command::Quit) => {
                            println!("{}", "Goodbye!".bright_green());
                            break;
                        }
                        Ok(Command::Help) => print_help(),
                        Ok(command) => {
                            tracing::debug!(?command, "command");
                            self.execute(command).await?;
                            self.show().await;
                        }
                        Err(e) => println!("{}", e.to_string().yellow()),
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
                }
                Err(ReadlineError::Eof) => {
                    println!("{}", "CTRL-D detected. Exiting...".bright_green());
                    break;
                }
                Err(err) => {
                    tracing::error!(error = %err, "readline failed");
                    return Err(err.into());
                }
            }
        }
        Ok(())
    }

    async fn show(&self) {
        let screen = self.router.screen().await;
        println!("\n{}\n", render::screen(&screen));
    }

    async fn execute(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Yes => self.router.respond_modal(ModalResponse::Confirm).await,
            Command::No => self.router.respond_modal(ModalResponse::Dismiss).await,
            Command::Refresh => self.router.refresh().await,
            command => {
                let Some(action) = command.action() else {
                    return Ok(());
                };
                if let Dispatch::NeedsInput(form) = self.router.dispatch(action).await {
                    self.submit(form).await?;
                }
            }
        }
        Ok(())
    }

    /// Opens the form's page, collects its fields and submits them.
    async fn submit(&mut self, form: FormId) -> Result<()> {
        let page = page_of(form);
        if self.router.current_page().await != page {
            self.router.navigate(page).await;
        }

        let screen = self.router.screen().await;
        if screen.content.form().map(|f| f.id) != Some(form) {
            // A guard sent us elsewhere.
            return Ok(());
        }
        println!("\n{}\n", render::screen(&screen));

        let Some(values) = self.fill(form).await? else {
            println!("{}", "Cancelled".bright_black());
            return Ok(());
        };
        match form {
            FormId::Login => self.router.login(&login_form(values)).await,
            FormId::Register => self.router.register(&register_form(values)).await,
            FormId::NewApplication => {
                self.router
                    .submit_application(&new_application_form(values))
                    .await
            }
        }
        Ok(())
    }

    /// Prompts for every visible field. `None` when the user cancels.
    ///
    /// The form is re-read after each answer because the role selector
    /// changes which fields are visible.
    async fn fill(&mut self, form: FormId) -> Result<Option<FormValues>> {
        let mut values = FormValues::new();
        let mut index = 0;
        loop {
            let screen = self.router.screen().await;
            let Some(field) = screen
                .content
                .form()
                .filter(|f| f.id == form)
                .and_then(|f| f.fields.get(index))
            else {
                break;
            };
            index += 1;
            if !field.visible {
                continue;
            }

            let Some(value) = self.prompt(field)? else {
                return Ok(None);
            };
            if field.name == "role" {
                if let Ok(role) = value.trim().parse::<Role>() {
                    self.router.select_register_role(role).await;
                }
            }
            values.insert(field.name, value);
        }
        Ok(Some(values))
    }

    fn prompt(&mut self, field: &Field) -> Result<Option<String>> {
        if let FieldKind::Select { options } = &field.kind {
            for option in options.iter().filter(|o| !o.value.is_empty()) {
                println!("  {} {}", option.value.bright_cyan(), option.label);
            }
        }
        let marker = if field.required { "" } else { " (optional)" };
        match self.editor.readline(&format!("{}{}: ", field.label, marker)) {
            Ok(line) => Ok(Some(line)),
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}
