//! Line-oriented terminal host.
//!
//! Each command becomes the click a browser would deliver to the table, so the
//! controller sees the same input either way.

use std::io::Write;

use event_list_client::EventsApi;
use event_list_core::events::{ControlKind, EventId, FormInput};
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::controller::{Controller, Outcome};
use crate::dom::{Click, RowContent, TableBody};

const HELP: &str = "\
Commands:
  add                           open an empty add-event row
  fill <row> <name> <start> <end>
                                type into a form row (use - for an empty field)
  save <row>                    click save on a form row
  cancel <row>                  click cancel on a form row
  edit <id>                     edit the event's row inline
  delete <id>                   delete the event
  reload                        fetch the list again
  help                          show this help
  quit                          exit";

/// A parsed terminal command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalCommand {
    Add,
    Fill { row: usize, input: FormInput },
    Save { row: usize },
    Cancel { row: usize },
    Edit { id: String },
    Delete { id: String },
    Reload,
    Help,
    Quit,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown command: {0} (try `help`)")]
    Unknown(String),
    #[error("Usage: {0}")]
    Usage(&'static str),
}

/// Parses one input line.
pub fn parse_command(line: &str) -> Result<TerminalCommand, ParseError> {
    let mut words = line.split_whitespace();
    let Some(name) = words.next() else {
        return Err(ParseError::Usage("help"));
    };
    let args: Vec<&str> = words.collect();

    let command = match (name, args.as_slice()) {
        ("add", []) => TerminalCommand::Add,
        ("fill", [row, name @ .., start, end]) if !name.is_empty() => TerminalCommand::Fill {
            row: parse_row(row, "fill <row> <name> <start> <end>")?,
            input: FormInput::new(
                blank_dash(&name.join(" ")),
                blank_dash(start),
                blank_dash(end),
            ),
        },
        ("fill", _) => return Err(ParseError::Usage("fill <row> <name> <start> <end>")),
        ("save", [row]) => TerminalCommand::Save {
            row: parse_row(row, "save <row>")?,
        },
        ("save", _) => return Err(ParseError::Usage("save <row>")),
        ("cancel", [row]) => TerminalCommand::Cancel {
            row: parse_row(row, "cancel <row>")?,
        },
        ("cancel", _) => return Err(ParseError::Usage("cancel <row>")),
        ("edit", [id]) => TerminalCommand::Edit { id: id.to_string() },
        ("edit", _) => return Err(ParseError::Usage("edit <id>")),
        ("delete", [id]) => TerminalCommand::Delete { id: id.to_string() },
        ("delete", _) => return Err(ParseError::Usage("delete <id>")),
        ("reload", []) => TerminalCommand::Reload,
        ("help", _) => TerminalCommand::Help,
        ("quit" | "exit", _) => TerminalCommand::Quit,
        (other, _) => return Err(ParseError::Unknown(other.to_string())),
    };
    Ok(command)
}

fn parse_row(value: &str, usage: &'static str) -> Result<usize, ParseError> {
    value.parse().map_err(|_| ParseError::Usage(usage))
}

fn blank_dash(value: &str) -> String {
    if value == "-" {
        String::new()
    } else {
        value.to_string()
    }
}

/// Runs one command against the controller and describes what happened.
pub async fn execute<A: EventsApi>(
    controller: &mut Controller<A>,
    command: TerminalCommand,
) -> String {
    match command {
        TerminalCommand::Add => describe(&controller.open_add_form()),
        TerminalCommand::Fill { row, input } => match controller.fill_form(row, input) {
            Ok(()) => format!("Filled row {row}."),
            Err(e) => e.to_string(),
        },
        TerminalCommand::Save { row } => {
            click_form(controller, row, [ControlKind::SaveNew, ControlKind::SaveEdit]).await
        }
        TerminalCommand::Cancel { row } => {
            click_form(controller, row, [ControlKind::CancelNew, ControlKind::CancelEdit]).await
        }
        TerminalCommand::Edit { id } => click_row(controller, &id, ControlKind::Edit).await,
        TerminalCommand::Delete { id } => click_row(controller, &id, ControlKind::Delete).await,
        TerminalCommand::Reload => describe(&controller.init().await),
        TerminalCommand::Help => HELP.to_string(),
        TerminalCommand::Quit => String::new(),
    }
}

async fn click_form<A: EventsApi>(
    controller: &mut Controller<A>,
    row: usize,
    candidates: [ControlKind; 2],
) -> String {
    let controls = controller.view().controls_at(row);
    match candidates.into_iter().find(|kind| controls.contains(kind)) {
        Some(kind) => describe(&controller.click(Click::new(row, kind)).await),
        None => format!("Row {row} is not a form."),
    }
}

async fn click_row<A: EventsApi>(
    controller: &mut Controller<A>,
    id: &str,
    control: ControlKind,
) -> String {
    match controller.view().body().position_of(&EventId::from(id)) {
        Some(row) => describe(&controller.click(Click::new(row, control)).await),
        None => format!("No row with id {id}."),
    }
}

/// Human-readable summary of an outcome.
pub fn describe(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Loaded { count } => format!("Loaded {count} event(s)."),
        Outcome::FormOpened { row } => format!("Add form opened in row {row}."),
        Outcome::Discarded => "Add form discarded.".to_string(),
        Outcome::Created(record) => format!("Created event {}.", record.id),
        Outcome::Deleted(id) => format!("Deleted event {id}."),
        Outcome::Editing(id) => format!("Editing event {id}."),
        Outcome::Updated(id) => format!("Updated event {id}."),
        Outcome::Rejected(failure) => failure.to_string(),
        Outcome::Failed { operation, status } => match status {
            Some(status) => format!("{operation:?} failed with status {status}."),
            None => format!("{operation:?} failed."),
        },
        Outcome::Ignored => "Nothing to do.".to_string(),
    }
}

/// Draws the table body as text.
pub fn render_table(body: &TableBody) -> String {
    if body.is_empty() {
        return "No events found.".to_string();
    }
    let mut output = format!(
        "{:>3}  {:<8}  {:<24}  {:<12}  {:<12}\n",
        "#", "ID", "NAME", "START", "END"
    );
    output.push_str(&"-".repeat(66));
    for (index, row) in body.rows().iter().enumerate() {
        let id = row.element_id.as_deref().unwrap_or("(new)");
        let cells = match &row.content {
            RowContent::Display(model) => model.cells.clone(),
            RowContent::Form(form) => [
                format!("[{}]", form.inputs.name),
                format!("[{}]", form.inputs.start),
                format!("[{}]", form.inputs.end),
            ],
        };
        let controls: Vec<String> = row
            .controls()
            .iter()
            .map(|control| format!("{} {}", control.kind.label(), control.kind.css_class()))
            .collect();
        output.push_str(&format!(
            "\n{:>3}  {:<8}  {:<24}  {:<12}  {:<12}  {}",
            index,
            id,
            cells[0],
            cells[1],
            cells[2],
            controls.join("  ")
        ));
    }
    output
}

/// Loads the list, then reads commands until `quit` or end of input.
pub async fn run<A, R, W>(
    controller: &mut Controller<A>,
    reader: R,
    writer: &mut W,
) -> std::io::Result<()>
where
    A: EventsApi,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let outcome = controller.init().await;
    writeln!(writer, "{}", describe(&outcome))?;
    writeln!(writer, "{}", render_table(controller.view().body()))?;

    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let command = match parse_command(&line) {
            Ok(TerminalCommand::Quit) => break,
            Ok(command) => command,
            Err(e) => {
                writeln!(writer, "{e}")?;
                continue;
            }
        };
        let show_table = command != TerminalCommand::Help;
        let message = execute(controller, command).await;
        writeln!(writer, "{message}")?;
        if show_table {
            writeln!(writer, "{}", render_table(controller.view().body()))?;
        }
        writer.flush()?;
    }
    Ok(())
}
