use crate::commands::{self, birthdays, contacts, CommandResult, Context};
use addrbook_core::CoreError;
use anyhow::Result;
use chrono::NaiveDate;
use std::io::{BufRead, Write};
use tracing::debug;

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";
pub const FAREWELL: &str = "Good bye!";
pub const INVALID_COMMAND: &str = "Invalid command.";

pub type Clock = fn() -> Result<NaiveDate, CoreError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput<'a> {
    pub command: String,
    pub args: Vec<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Reply(String),
    Exit,
}

/// Splits a line on whitespace; the lower-cased first token is the command.
pub fn parse_input(line: &str) -> Option<ParsedInput<'_>> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next()?.to_lowercase();
    Some(ParsedInput {
        command,
        args: tokens.collect(),
    })
}

pub fn dispatch(ctx: &mut Context<'_>, clock: Clock, input: &ParsedInput<'_>) -> Result<Step> {
    let args = input.args.as_slice();
    let result = match input.command.as_str() {
        "close" | "exit" => return Ok(Step::Exit),
        "hello" => commands::hello(),
        "add" => contacts::add_contact(ctx, args),
        "change" => contacts::change_contact(ctx, args),
        "phone" => contacts::show_phone(ctx, args),
        "all" => contacts::show_all(ctx),
        "add-birthday" => birthdays::add_birthday(ctx, args),
        "show-birthday" => birthdays::show_birthday(ctx, args),
        "birthdays" => birthdays::upcoming(ctx, clock()?),
        _ => return Ok(Step::Reply(INVALID_COMMAND.to_string())),
    };
    Ok(Step::Reply(render(result)))
}

fn render(result: CommandResult) -> String {
    match result {
        Ok(reply) => reply,
        Err(err) => {
            debug!(error = ?err, "command rejected");
            err.to_string()
        }
    }
}

/// Runs the prompt loop until `close`/`exit` or end of input.
pub fn run<R, W>(ctx: &mut Context<'_>, clock: Clock, mut input: R, mut output: W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{WELCOME}")?;
    let mut buf = Vec::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            debug!("end of input");
            writeln!(output)?;
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        let Some(parsed) = parse_input(&line) else {
            continue;
        };
        debug!(command = %parsed.command, args = parsed.args.len(), "dispatch");
        match dispatch(ctx, clock, &parsed)? {
            Step::Reply(reply) => writeln!(output, "{reply}")?,
            Step::Exit => break,
        }
    }
    output.flush()?;
    Ok(())
}
