//! Interactive Example - a terminal form bound to the engine
//!
//! This example wires the engine to a raw-mode terminal:
//! - Tab/Shift+Tab cycle fields, typing edits the focused field
//! - Every keystroke feeds the full input text through update_field
//! - A spark-signals effect redraws whenever any control changes
//! - Enter submits once the form is valid, Esc cancels
//!
//! Run with: cargo run --example interactive

use std::collections::HashMap;
use std::io::{Write, stdout};
use std::rc::Rc;

use crossterm::{
    cursor::MoveTo,
    event::{Event, KeyCode, KeyEventKind, KeyModifiers, read},
    execute,
    terminal::{Clear, ClearType, disable_raw_mode, enable_raw_mode},
};
use spark_signals::{Signal, effect, signal};

use spark_form::{Entity, FieldConfig, FormEngine, FormFactory, formatter, validator};

const FIELDS: [&str; 3] = ["name", "age", "birthday"];

fn draw(form: &FormEngine, active: usize) -> std::io::Result<()> {
    let mut out = stdout();
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;

    write!(out, "spark-form Interactive Example\r\n")?;
    write!(
        out,
        "Tab: next field  Enter: submit  Esc: cancel\r\n\r\n"
    )?;

    for (i, key) in FIELDS.iter().enumerate() {
        // Reading the control inside the render effect subscribes it
        let control = form.control(key);
        let marker = if i == active { ">" } else { " " };
        let pristine = if control.is_pristine { " (pristine)" } else { "" };
        write!(
            out,
            "{marker} {key:>8}: [{}]{pristine}\r\n",
            control.display_value
        )?;
        for error in &control.errors {
            write!(out, "             ! {error}\r\n")?;
        }
    }

    write!(
        out,
        "\r\nForm status: {}\r\n",
        if form.is_valid() { "VALID" } else { "INVALID" }
    )?;
    write!(out, "Entity: {:?}\r\n", form.entity())?;
    out.flush()
}

fn edit_active(form: &FormEngine, active: &Signal<usize>, edit: impl FnOnce(&mut String)) {
    let key = FIELDS[active.get()];
    // Start from the normalized display text, not a separate edit buffer
    let mut text = form.control(key).display_value.clone();
    edit(&mut text);
    form.update_field(key, &text);
}

fn run(form: &FormEngine, active: &Signal<usize>) -> std::io::Result<Option<Entity>> {
    loop {
        let Event::Key(key) = read()? else { continue };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key.code {
            KeyCode::Esc => return Ok(None),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Ok(None);
            }
            KeyCode::Tab => {
                active.set((active.get() + 1) % FIELDS.len());
            }
            KeyCode::BackTab => {
                active.set((active.get() + FIELDS.len() - 1) % FIELDS.len());
            }
            KeyCode::Enter => {
                if form.is_valid() {
                    return Ok(Some(form.entity()));
                }
            }
            KeyCode::Backspace => edit_active(form, active, |text| {
                text.pop();
            }),
            KeyCode::Char(c) => edit_active(form, active, |text| text.push(c)),
            _ => {}
        }
    }
}

fn main() -> std::io::Result<()> {
    let factory = FormFactory::with_defaults();

    let config = HashMap::from([
        (
            "name".to_string(),
            FieldConfig::with_validators(formatter::TEXT, [validator::REQUIRED]),
        ),
        (
            "age".to_string(),
            FieldConfig::with_validators(formatter::NUMBER, [validator::NUMERIC]),
        ),
        (
            "birthday".to_string(),
            FieldConfig::with_validators(formatter::DATE, [validator::ISO_DATE]),
        ),
    ]);

    let form = Rc::new(factory.create(config, &Entity::new()));
    let active = signal(0usize);

    enable_raw_mode()?;

    // Render effect: draw() reads the control signals, the validity, and the
    // active-field signal, so any of them changing repaints the form
    let _stop = effect({
        let form = form.clone();
        let active = active.clone();
        move || {
            let _ = draw(&form, active.get());
        }
    });

    let outcome = run(&form, &active);

    disable_raw_mode()?;
    execute!(stdout(), Clear(ClearType::All), MoveTo(0, 0))?;

    match outcome? {
        Some(entity) => println!("Submitted: {entity:?}"),
        None => println!("Cancelled."),
    }
    Ok(())
}
