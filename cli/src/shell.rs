//! Interactive session over the two controllers.
//!
//! A plain line is the draft and the line terminator is the Enter key, so an
//! empty line triggers the "please type something" notice. Lines starting
//! with `:` are commands.

use std::io::Write;

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use todolist_core::{CreationController, Key, ListController, StatusFilter, TodoId, TodoService};

use crate::render::render;

const HELP: &str = "\
type text and press Enter to add a todo
:filter all|pending|completed   change the view
:toggle <n>                     flip todo #n between pending and completed
:delete <n>                     delete todo #n
:reload                         fetch the list again
:help                           this text
:quit                           leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Submit(String),
    Filter(StatusFilter),
    Toggle(usize),
    Delete(usize),
    Reload,
    Help,
    Quit,
}

pub fn parse_line(line: &str) -> Result<Command, String> {
    let Some(rest) = line.strip_prefix(':') else {
        return Ok(Command::Submit(line.to_string()));
    };
    let mut parts = rest.split_whitespace();
    let name = parts.next().unwrap_or("");
    let arg = parts.next();
    match (name, arg) {
        ("filter", Some(f)) => f.parse().map(Command::Filter).map_err(|e| format!("{e}")),
        ("toggle", Some(n)) => parse_index(n).map(Command::Toggle),
        ("delete", Some(n)) => parse_index(n).map(Command::Delete),
        ("reload", None) => Ok(Command::Reload),
        ("help", None) => Ok(Command::Help),
        ("quit" | "q", None) => Ok(Command::Quit),
        _ => Err(format!("unknown command `{line}` (try :help)")),
    }
}

fn parse_index(raw: &str) -> Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("`{raw}` is not a todo number")),
    }
}

/// Id of the `n`-th (1-based) visible todo.
fn visible_id(list: &ListController, n: usize) -> Option<TodoId> {
    list.visible().get(n.checked_sub(1)?).map(|item| item.id)
}

pub async fn run<S, R, W>(service: &S, input: R, out: &mut W) -> Result<()>
where
    S: TodoService,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut list = ListController::new();
    let mut creation = CreationController::new();
    if let Err(e) = list.load(service).await {
        writeln!(out, "! {}", e.notice())?;
    }
    write!(out, "{}> ", render(&list))?;
    out.flush()?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let command = match parse_line(&line) {
            Ok(command) => command,
            Err(msg) => {
                write!(out, "! {msg}\n> ")?;
                out.flush()?;
                continue;
            }
        };
        let outcome = match command {
            Command::Quit => break,
            Command::Help => {
                writeln!(out, "{HELP}")?;
                Ok(())
            }
            Command::Submit(text) => {
                creation.update_draft(text);
                match creation.key_to(Key::Enter, service, &mut list).await {
                    Some(result) => result.map(|_| ()),
                    None => Ok(()),
                }
            }
            Command::Filter(filter) => {
                list.set_filter(filter);
                Ok(())
            }
            Command::Reload => list.load(service).await,
            Command::Toggle(n) => match visible_id(&list, n) {
                Some(id) => list.toggle_status(service, id).await,
                None => {
                    writeln!(out, "! no todo #{n}")?;
                    Ok(())
                }
            },
            Command::Delete(n) => match visible_id(&list, n) {
                Some(id) => list.delete_item(service, id).await,
                None => {
                    writeln!(out, "! no todo #{n}")?;
                    Ok(())
                }
            },
        };
        if let Err(e) = outcome {
            writeln!(out, "! {}", e.notice())?;
        }
        write!(out, "{}> ", render(&list))?;
        out.flush()?;
    }
    Ok(())
}
