// shell.rs — Line-oriented front end for the goal screen.
//
// Reads commands from any BufRead and writes the rendered screen to any
// Write, so tests can drive it with in-memory buffers. While the entry form
// is open every line is entry text; otherwise lines are commands.

use std::io::{BufRead, Write};

use anyhow::Context;
use cg_goal::{GoalError, GoalId, GoalListManager, MemorySink};

use crate::render;

/// A parsed list-mode command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add,
    Toggle(usize),
    Delete(usize),
    List,
    Help,
    Quit,
    Invalid(String),
}

impl Command {
    /// Parse a line typed while the entry form is hidden.
    pub fn parse(line: &str) -> Command {
        let mut parts = line.split_whitespace();
        let Some(word) = parts.next() else {
            return Command::List;
        };
        let arg = parts.next();
        if let Some(extra) = parts.next() {
            return Command::Invalid(format!("unexpected argument: {} (h for help)", extra));
        }
        match word.to_lowercase().as_str() {
            "a" | "add" => Command::Add,
            "t" | "toggle" => parse_position(arg).map_or_else(Command::Invalid, Command::Toggle),
            "d" | "delete" => parse_position(arg).map_or_else(Command::Invalid, Command::Delete),
            "l" | "list" => Command::List,
            "h" | "help" | "?" => Command::Help,
            "q" | "quit" | "exit" => Command::Quit,
            other => Command::Invalid(format!("unknown command: {} (h for help)", other)),
        }
    }
}

fn parse_position(arg: Option<&str>) -> Result<usize, String> {
    let arg = arg.ok_or_else(|| "missing goal number".to_string())?;
    match arg.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("not a goal number: {}", arg)),
    }
}

/// Lines that dismiss the entry form instead of submitting it.
fn is_cancel(line: &str) -> bool {
    matches!(line.trim(), ":cancel" | ":huy" | ":hủy")
}

enum Flow {
    Continue,
    Quit,
}

/// Interactive goal screen over a reader/writer pair.
pub struct GoalShell<R, W> {
    manager: GoalListManager,
    activity: MemorySink,
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> GoalShell<R, W> {
    pub fn new(mut manager: GoalListManager, reader: R, writer: W) -> Self {
        let activity = MemorySink::new();
        manager.add_sink(Box::new(activity.clone()));
        Self {
            manager,
            activity,
            reader,
            writer,
        }
    }

    /// Run until `quit` or end of input.
    pub fn run(&mut self) -> anyhow::Result<()> {
        self.write(&render::screen(&self.manager))?;
        loop {
            self.prompt()?;
            let mut line = String::new();
            let read = self
                .reader
                .read_line(&mut line)
                .context("failed to read input")?;
            if read == 0 {
                tracing::debug!("end of input");
                break;
            }
            let line = line.trim_end_matches(['\n', '\r']);
            if let Flow::Quit = self.handle_line(line)? {
                break;
            }
        }
        self.writer.flush().context("failed to flush output")?;
        Ok(())
    }

    fn handle_line(&mut self, line: &str) -> anyhow::Result<Flow> {
        if self.manager.is_entry_open() {
            self.handle_entry(line)?;
            return Ok(Flow::Continue);
        }

        match Command::parse(line) {
            Command::Add => {
                self.manager.open_entry();
                self.write(&render::entry_form(&self.manager))?;
                self.activity.drain();
            }
            Command::Toggle(n) => match self.id_at(n) {
                Some(id) => {
                    self.manager.toggle_completed(&id);
                    self.redraw()?;
                }
                None => self.out_of_range(n)?,
            },
            Command::Delete(n) => match self.id_at(n) {
                Some(id) => {
                    self.manager.remove_goal(&id);
                    self.redraw()?;
                }
                None => self.out_of_range(n)?,
            },
            Command::List => self.redraw()?,
            Command::Help => self.write(&render::help())?,
            Command::Quit => return Ok(Flow::Quit),
            Command::Invalid(msg) => self.write(&format!("  {}\n", msg))?,
        }
        Ok(Flow::Continue)
    }

    fn handle_entry(&mut self, line: &str) -> anyhow::Result<()> {
        if is_cancel(line) {
            self.manager.cancel_entry();
            return self.redraw();
        }

        self.manager.set_pending_input(line);
        match self.manager.submit_goal() {
            Ok(_) => self.redraw(),
            Err(GoalError::Validation { .. }) => {
                self.activity.drain();
                self.write(&render::entry_form(&self.manager))
            }
            Err(e) => Err(e.into()),
        }
    }

    fn id_at(&self, position: usize) -> Option<GoalId> {
        self.manager
            .goals()
            .get(position.checked_sub(1)?)
            .map(|g| g.id().clone())
    }

    fn out_of_range(&mut self, n: usize) -> anyhow::Result<()> {
        let total = self.manager.len();
        self.write(&format!("  no goal #{} (list has {})\n", n, total))
    }

    /// Screen plus a status line describing what just happened.
    fn redraw(&mut self) -> anyhow::Result<()> {
        let mut out = render::screen(&self.manager);
        if let Some(event) = self.activity.drain().last() {
            out.push_str(&format!("  > {}\n", render::describe(event, &self.manager)));
        }
        self.write(&out)
    }

    fn prompt(&mut self) -> anyhow::Result<()> {
        let prompt = if self.manager.is_entry_open() {
            "+ "
        } else {
            "> "
        };
        self.write(prompt)?;
        self.writer.flush().context("failed to flush output")
    }

    fn write(&mut self, text: &str) -> anyhow::Result<()> {
        self.writer
            .write_all(text.as_bytes())
            .context("failed to write output")
    }
}
