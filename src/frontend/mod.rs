//! Line-oriented terminal front end.
//!
//! Reads one command per line, applies it to the controller and redraws. While
//! a submission is in flight the loop keeps reading input and also watches for
//! the outcome, so the form stays editable and the submit control stays
//! disabled until the request resolves.

pub mod command;
pub mod render;

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::editor::view::{ListAction, render_course_list};
use crate::error::SubmitError;
use crate::models::{Direction, SubmissionStatus};
use crate::services::FormController;

pub use command::{Command, HELP, ParseCommandError};

enum Next {
    Line(Option<String>),
    Resolved(SubmissionStatus),
}

enum Flow {
    Continue,
    Quit,
}

pub async fn run<R, W>(controller: &mut FormController, input: R, out: &mut W) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    writeln!(out, "{}\n", render::render_form(controller))?;

    loop {
        let next = if controller.can_submit() {
            Next::Line(lines.next_line().await?)
        } else {
            // an outcome that is already in wins over the next line
            tokio::select! {
                biased;
                status = controller.resolve() => Next::Resolved(status),
                line = lines.next_line() => Next::Line(line?),
            }
        };

        match next {
            Next::Resolved(status) => {
                debug!("submission resolved: {:?}", status);
                writeln!(out, "{}\n", render::render_form(controller))?;
            }
            Next::Line(Some(line)) => {
                if line.trim().is_empty() {
                    continue;
                }
                match line.parse::<Command>() {
                    Ok(command) => {
                        if let Flow::Quit = dispatch(controller, command, out).await? {
                            controller.cancel_submission().await;
                            break;
                        }
                    }
                    Err(e) => writeln!(out, "! {} (type `help`)", e)?,
                }
            }
            Next::Line(None) => {
                // Input closed: let a pending request finish before leaving.
                if !controller.can_submit() {
                    controller.resolve().await;
                    writeln!(out, "{}\n", render::render_form(controller))?;
                }
                break;
            }
        }
    }

    Ok(())
}

async fn dispatch<W: Write>(
    controller: &mut FormController,
    command: Command,
    out: &mut W,
) -> std::io::Result<Flow> {
    match command {
        Command::Quit => return Ok(Flow::Quit),
        Command::Help => writeln!(out, "{}", HELP)?,
        Command::Show => writeln!(out, "{}\n", render::render_form(controller))?,
        Command::SetField(field, value) => controller.set_field(field, value),
        Command::Reason(text) => controller.set_reason(text),
        Command::Advisor(id) => {
            if let Err(e) = controller.select_advisor(&id) {
                writeln!(out, "! {}", e.user_message())?;
            }
        }
        Command::AddRow(direction) => {
            controller.apply_list_action(direction, ListAction::Add);
            print_list(controller, direction, out)?;
        }
        Command::Edit {
            direction,
            ordinal,
            field,
            value,
        } => {
            let action = render_course_list(direction, controller.courses(direction))
                .row(ordinal)
                .map(|row| row.change_action(field, value));
            apply_row_action(controller, direction, ordinal, action, out)?;
        }
        Command::Remove { direction, ordinal } => {
            let action = render_course_list(direction, controller.courses(direction))
                .row(ordinal)
                .map(|row| row.remove_action());
            apply_row_action(controller, direction, ordinal, action, out)?;
        }
        Command::Submit => match controller.submit() {
            Ok(payload) => {
                debug!("payload: {:?}", payload);
                writeln!(out, "{}", render::SUBMITTING_LABEL)?;
            }
            Err(e) => writeln!(out, "! {}", e.user_message())?,
        },
        Command::Cancel => {
            let pending = !controller.can_submit();
            if controller.cancel_submission().await {
                writeln!(out, "{}", SubmitError::Cancelled.user_message())?;
            } else if pending {
                // the request finished before the cancel arrived
                writeln!(out, "{}\n", render::render_form(controller))?;
            } else {
                writeln!(out, "! nothing to cancel")?;
            }
        }
        Command::Clear => {
            controller.reset();
            writeln!(out, "{}\n", render::render_form(controller))?;
        }
    }
    Ok(Flow::Continue)
}

fn apply_row_action<W: Write>(
    controller: &mut FormController,
    direction: Direction,
    ordinal: usize,
    action: Option<ListAction>,
    out: &mut W,
) -> std::io::Result<()> {
    match action {
        Some(action) => {
            controller.apply_list_action(direction, action);
            print_list(controller, direction, out)
        }
        None => writeln!(out, "! no row {} in the {} list", ordinal, direction.as_str()),
    }
}

fn print_list<W: Write>(
    controller: &FormController,
    direction: Direction,
    out: &mut W,
) -> std::io::Result<()> {
    writeln!(out, "{}", render_course_list(direction, controller.courses(direction)))
}
