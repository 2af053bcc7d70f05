//! Background input sampler.
//!
//! Blocks on the terminal's event stream on its own thread and publishes the
//! latest decoded command into a [`Mailbox`]. The game loop may miss commands
//! that are overwritten before it samples; only the most recent intent counts.

use std::io;
use std::thread::{self, JoinHandle};

use anyhow::Result;
use crossterm::event::{self, Event};

use crate::mailbox::Mailbox;
use crate::map::{map_key_event, KeyInput};
use crate::types::Command;

/// Blocking source of terminal events.
pub trait EventSource: Send + 'static {
    fn next_event(&mut self) -> Result<Event>;
}

impl<F> EventSource for F
where
    F: FnMut() -> Result<Event> + Send + 'static,
{
    fn next_event(&mut self) -> Result<Event> {
        self()
    }
}

/// Reads events from the process terminal via crossterm.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalEvents;

impl EventSource for TerminalEvents {
    fn next_event(&mut self) -> Result<Event> {
        Ok(event::read()?)
    }
}

pub struct InputSampler<E> {
    source: E,
    mailbox: Mailbox<Command>,
    /// Last decoded command, re-sent on unrecognized key presses.
    last: Option<Command>,
}

impl<E: EventSource> InputSampler<E> {
    pub fn new(source: E, mailbox: Mailbox<Command>) -> Self {
        Self {
            source,
            mailbox,
            last: None,
        }
    }

    /// Decode one event and publish the resulting command.
    ///
    /// Every key press publishes: a recognized key publishes its own command,
    /// any other key re-publishes the last recognized one. Non-key events and
    /// key releases publish nothing. Returns what was published.
    pub fn handle_event(&mut self, event: Event) -> Option<Command> {
        let Event::Key(key) = event else {
            return None;
        };
        match map_key_event(key) {
            KeyInput::Released => return None,
            KeyInput::Mapped(command) => self.last = Some(command),
            KeyInput::Unmapped => {}
        }
        let command = self.last?;
        if let Some(dropped) = self.mailbox.publish(command) {
            tracing::trace!(dropped = dropped.as_str(), "unsampled command overwritten");
        }
        Some(command)
    }

    /// Sample until the event source fails.
    ///
    /// A failing source means the terminal is gone, so `Quit` is published to
    /// let the game loop tear down.
    pub fn run(mut self) {
        tracing::debug!("input sampler started");
        loop {
            match self.source.next_event() {
                Ok(event) => {
                    self.handle_event(event);
                }
                Err(err) => {
                    tracing::error!(error = %err, "event source failed; requesting quit");
                    self.mailbox.publish(Command::Quit);
                    break;
                }
            }
        }
        tracing::debug!("input sampler stopped");
    }

    /// Run the sampler on its own thread.
    ///
    /// The game never joins it; process exit ends it.
    pub fn spawn(self) -> io::Result<JoinHandle<()>> {
        thread::Builder::new()
            .name("input-sampler".to_string())
            .spawn(move || self.run())
    }
}
