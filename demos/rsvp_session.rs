//! RSVP Session
//!
//! Drives a form through a realistic sequence of adapter events and prints
//! what a presentation layer would render after each submit.
//!
//! Key concepts:
//! - Events are applied in delivery order
//! - Every failing field is reported on the same submit
//! - The guest name only matters once "Yes" is chosen
//! - Editing after acceptance leaves the old summary on screen
//!
//! Run with: RUST_LOG=rsvp_form=debug cargo run --example rsvp_session

use rsvp_form::{FieldKey, Form, FormError, FormEvent, GuestChoice, SideEffect, SubmitOutcome};
use tracing_subscriber::{fmt, EnvFilter};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("rsvp_form=debug"));
    fmt().with_env_filter(filter).init();
}

fn change(name: &str, value: &str) -> FormEvent {
    FormEvent::FieldChange {
        name: name.to_string(),
        value: value.to_string(),
    }
}

fn render(form: &mut Form) {
    for effect in form.drain_effects() {
        match effect {
            SideEffect::ScrollToTop => println!("  [scroll to top]"),
        }
    }

    if let Some(summary) = form.summary() {
        println!("  Form Summary");
        for entry in summary.entries() {
            println!("    {}: {}", entry.label, entry.value);
        }
    }

    for (key, message) in form.errors().messages() {
        println!("  {:<10} {}", key.label(), message);
    }
    println!("  phase: {}\n", form.phase().name());
}

fn main() -> Result<(), FormError> {
    init_tracing();

    println!("=== RSVP Session ===\n");
    let mut form = Form::new();

    println!("Submit an empty form:");
    form.dispatch(FormEvent::Submit)?;
    render(&mut form);

    println!("Fill in the basics with a typo in the email:");
    for event in [
        change("name", "Ada"),
        change("email", "ada-at-example.com"),
        change("age", "30"),
        FormEvent::GuestChoice(GuestChoice::Yes),
        FormEvent::Submit,
    ] {
        form.dispatch(event)?;
    }
    render(&mut form);

    println!("Fix the email and name the guest:");
    form.dispatch(change("email", "ada@example.com"))?;
    form.dispatch(change("guestName", "Bob"))?;
    if let Some(SubmitOutcome::Accepted(summary)) = form.dispatch(FormEvent::Submit)? {
        println!("  accepted {} entries", summary.entries().len());
    }
    render(&mut form);

    println!("Edit after acceptance (summary stays until the next submit):");
    form.dispatch(change("name", "Ada Lovelace"))?;
    println!(
        "  summary name still {:?}",
        form.summary().map(|s| s.get(FieldKey::Name))
    );
    render(&mut form);

    println!("An adapter bug is reported, not swallowed:");
    if let Err(err) = form.dispatch(change("nickname", "Addie")) {
        println!("  error: {err}\n");
    }

    println!("View as JSON:\n  {}", form.view().to_json()?);

    println!("\n=== Session Complete ===");
    Ok(())
}
