//! Interactive session: the whole page lives for as long as this runs.

use anyhow::Result;
use dialoguer::Select;
use owo_colors::OwoColorize;
use tracing::debug;
use weekcal_core::config::WeekcalConfig;
use weekcal_core::reconciler::{Reconciler, SaveOutcome};
use weekcal_core::view::Page;

use super::form;
use crate::render::Render;

#[derive(Clone, Copy)]
enum Action {
    Create,
    Edit,
    Show,
    List,
    Quit,
}

impl Action {
    const ALL: [Action; 5] = [
        Action::Create,
        Action::Edit,
        Action::Show,
        Action::List,
        Action::Quit,
    ];

    fn label(&self) -> &'static str {
        match self {
            Action::Create => "Create event",
            Action::Edit => "Edit event",
            Action::Show => "Show week",
            Action::List => "List events",
            Action::Quit => "Quit",
        }
    }
}

pub fn run(config: &WeekcalConfig) -> Result<()> {
    let mut reconciler = Reconciler::new(config.palette());
    let mut page = Page::new();
    reconciler.init(&mut page);

    println!("{}", "weekcal".bold());
    println!("{}", "Events are kept until you quit.".dimmed());

    loop {
        println!();
        let labels: Vec<&str> = Action::ALL.iter().map(Action::label).collect();
        let choice = Select::new()
            .with_prompt("What next?")
            .items(&labels)
            .default(0)
            .interact()?;

        let action = Action::ALL[choice];
        debug!(action = action.label(), "session action");

        match action {
            Action::Create => {
                reconciler.start_create(&mut page);
                let outcome = form::run(&mut reconciler, &mut page)?;
                report(&reconciler, outcome);
            }
            Action::Edit => {
                let Some(index) = pick_event(&reconciler)? else {
                    continue;
                };
                if reconciler.start_edit(&mut page, index) {
                    let outcome = form::run(&mut reconciler, &mut page)?;
                    report(&reconciler, outcome);
                }
            }
            Action::Show => println!("{}", page.board.render()),
            Action::List => list(&reconciler),
            Action::Quit => {
                debug!(events = reconciler.state().store().len(), "session ended");
                return Ok(());
            }
        }
    }
}

/// Choosing an event here stands in for clicking its card.
fn pick_event(reconciler: &Reconciler) -> Result<Option<usize>> {
    let store = reconciler.state().store();
    if store.is_empty() {
        println!("{}", "No events yet".dimmed());
        return Ok(None);
    }

    let items: Vec<String> = store.iter().map(|(i, e)| format!("#{} {}", i, e)).collect();
    let selection = Select::new()
        .with_prompt("  Event")
        .items(&items)
        .default(0)
        .interact_opt()?;
    Ok(selection)
}

fn list(reconciler: &Reconciler) {
    let store = reconciler.state().store();
    if store.is_empty() {
        println!("{}", "No events yet".dimmed());
        return;
    }

    for (index, event) in store.iter() {
        let place = event
            .location()
            .or(event.remote_url())
            .unwrap_or_default();
        println!(
            "  {} {} {} {}",
            format!("#{}", index).dimmed(),
            event.name.bold(),
            format!("{} {}", event.weekday, event.time_label()),
            format!("[{}] {}", event.category, place).dimmed()
        );
    }
}

fn report(reconciler: &Reconciler, outcome: Option<SaveOutcome>) {
    let Some(outcome) = outcome else {
        return;
    };
    if let SaveOutcome::Ignored(index) = outcome {
        println!("{}", format!("  Event #{} no longer exists; nothing saved", index).yellow());
        return;
    }
    let Some(event) = reconciler.state().store().get(outcome.index()) else {
        return;
    };

    let verb = match outcome {
        SaveOutcome::Updated(_) => "Updated",
        _ => "Created",
    };
    println!("{}", format!("  {}: {}", verb, event.name).green());
}
