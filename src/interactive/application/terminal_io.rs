use anyhow::{Result, bail};
use crossterm::event::{self, Event};
use crossterm::{execute, terminal::SetTitle};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;
use std::rc::Rc;
use std::thread;
use std::time::Duration;

/// Where terminal input events come from.
pub trait EventSource {
    /// Waits up to `timeout` for the next event.
    fn next_event(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

pub struct CrosstermEventSource;

impl EventSource for CrosstermEventSource {
    fn next_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }
}

/// Replays a fixed script. `None` entries are idle ticks that wait out the
/// timeout; running past the end is an error.
#[derive(Default)]
pub struct ScriptedEventSource {
    script: VecDeque<Option<Event>>,
}

impl ScriptedEventSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: Event) -> &mut Self {
        self.script.push_back(Some(event));
        self
    }

    pub fn idle(&mut self, ticks: usize) -> &mut Self {
        self.script.extend(std::iter::repeat_n(None, ticks));
        self
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl EventSource for ScriptedEventSource {
    fn next_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        match self.script.pop_front() {
            Some(Some(event)) => Ok(Some(event)),
            Some(None) => {
                thread::sleep(timeout);
                Ok(None)
            }
            None => bail!("Event script exhausted"),
        }
    }
}

/// Receives window title changes.
pub trait TitleSink {
    fn set_title(&mut self, title: &str) -> Result<()>;
}

/// Sets the title of the hosting terminal window.
pub struct TerminalTitle;

impl TitleSink for TerminalTitle {
    fn set_title(&mut self, title: &str) -> Result<()> {
        execute!(io::stdout(), SetTitle(title))?;
        Ok(())
    }
}

/// Keeps every title it is given; clones share the same history.
#[derive(Clone, Default)]
pub struct RecordedTitles {
    titles: Rc<RefCell<Vec<String>>>,
}

impl RecordedTitles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all(&self) -> Vec<String> {
        self.titles.borrow().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.titles.borrow().last().cloned()
    }
}

impl TitleSink for RecordedTitles {
    fn set_title(&mut self, title: &str) -> Result<()> {
        self.titles.borrow_mut().push(title.to_string());
        Ok(())
    }
}
