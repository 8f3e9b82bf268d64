//! The event modal: prompts for each form field, then submits.

use anyhow::Result;
use dialoguer::{Confirm, Input, Select};
use owo_colors::OwoColorize;
use weekcal_core::event::{Category, Modality, Weekday};
use weekcal_core::reconciler::{Reconciler, SaveOutcome};
use weekcal_core::view::{CalendarView, Page};

use crate::render::Render;

/// Walk the user through the open modal until the form saves or they back out.
///
/// Field prompts start from whatever the form holds, so a rejected submit
/// keeps what was typed. Backing out closes the modal without touching the
/// store.
pub fn run(reconciler: &mut Reconciler, page: &mut Page) -> Result<Option<SaveOutcome>> {
    println!("{}", page.modal.title.bold());

    loop {
        prompt_fields(reconciler, page)?;

        let submit = Confirm::new()
            .with_prompt("  Save?")
            .default(true)
            .interact()?;
        if !submit {
            page.close_modal();
            println!("{}", "  Discarded".dimmed());
            return Ok(None);
        }

        match reconciler.save(page) {
            Ok(outcome) => return Ok(Some(outcome)),
            Err(errors) => {
                eprintln!("{}", errors.render());
            }
        }
    }
}

fn prompt_fields(reconciler: &Reconciler, page: &mut Page) -> Result<()> {
    page.form.name = prompt_text("  Name", &page.form.name)?;
    page.form.weekday = prompt_choice("  Weekday", &Weekday::ALL, &page.form.weekday)?;
    page.form.time = prompt_text("  Time (HH:MM)", &page.form.time)?;

    let modality_label = prompt_choice("  Modality", &Modality::ALL, &page.form.modality)?;
    let modality: Modality = modality_label.parse().unwrap_or_default();
    reconciler.select_modality(page, modality);

    if page.form.toggle.location.visible {
        page.form.location = prompt_text("  Location", &page.form.location)?;
    }
    if page.form.toggle.remote_url.visible {
        page.form.remote_url = prompt_text("  Remote URL", &page.form.remote_url)?;
    }

    page.form.category = prompt_choice("  Category", &Category::ALL, &page.form.category)?;
    page.form.attendees = prompt_text("  Attendees (skip)", &page.form.attendees)?;
    Ok(())
}

/// Free-text field. Empty input is allowed here; requiredness is checked on
/// submit, like every other field.
fn prompt_text(prompt: &str, current: &str) -> Result<String> {
    let value = Input::<String>::new()
        .with_prompt(prompt)
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}

/// Select field over an enum's values, starting on the current one.
fn prompt_choice<T: ToString>(prompt: &str, options: &[T], current: &str) -> Result<String> {
    let items: Vec<String> = options.iter().map(ToString::to_string).collect();
    let default = items.iter().position(|item| item == current).unwrap_or(0);

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(default)
        .interact()?;
    Ok(items[selection].clone())
}
