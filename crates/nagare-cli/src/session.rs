use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use nagare_core::AppInfo;
use nagare_core::game::{GameEngine, PlayError, Standing};
use nagare_core::model::card::Card;
use tracing::{Level, event};

use crate::command::{Command, parse_card, parse_command};
use crate::render::{describe_event, field_line, hand_line, help_text, results_table};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    Finished(Vec<Standing>),
    /// The player typed `quit` or input ran out before the game ended.
    Quit,
}

/// Drives one game from text commands on `input`, writing the transcript to `output`.
pub struct Session<R, W> {
    engine: GameEngine,
    input: R,
    output: W,
    json_events: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(engine: GameEngine, input: R, output: W) -> Self {
        Self {
            engine,
            input,
            output,
            json_events: false,
        }
    }

    /// Print events as JSON lines instead of sentences.
    pub fn json_events(mut self, enabled: bool) -> Self {
        self.json_events = enabled;
        self
    }

    pub fn run(&mut self) -> Result<SessionOutcome> {
        self.welcome()?;
        self.engine.resolve_opponents();
        self.flush_events()?;
        if self.engine.is_ended() {
            return self.finish();
        }
        self.show_table()?;

        loop {
            writeln!(self.output, "Enter a command")?;
            let Some(line) = self.read_line()? else {
                return Ok(SessionOutcome::Quit);
            };

            match parse_command(&line) {
                Err(err) => writeln!(self.output, "{err}")?,
                Ok(Command::Help) => writeln!(self.output, "{}", help_text())?,
                Ok(Command::Hand) => self.show_hand()?,
                Ok(Command::Field) => self.show_field()?,
                Ok(Command::Quit) => return Ok(SessionOutcome::Quit),
                Ok(Command::Pass) => self.act(GameEngine::submit_pass)?,
                Ok(Command::Put(card)) => {
                    let card = match card {
                        Some(card) => card,
                        None => match self.prompt_card()? {
                            Some(card) => card,
                            None => return Ok(SessionOutcome::Quit),
                        },
                    };
                    self.act(|engine| engine.submit_play(card))?;
                }
            }

            if self.engine.is_ended() {
                return self.finish();
            }
        }
    }

    fn welcome(&mut self) -> Result<()> {
        let names: Vec<&str> = self.engine.players().iter().map(|p| p.name()).collect();
        writeln!(
            self.output,
            "Welcome to {}. {}.",
            AppInfo::name(),
            AppInfo::tagline()
        )?;
        writeln!(self.output, "Players: {}", names.join(", "))?;
        writeln!(self.output, "Game seed: {}", self.engine.seed())?;
        writeln!(self.output, "{}", help_text())?;
        Ok(())
    }

    fn act(&mut self, intent: impl FnOnce(&mut GameEngine) -> Result<(), PlayError>) -> Result<()> {
        match intent(&mut self.engine) {
            Ok(()) => {
                self.flush_events()?;
                if !self.engine.is_ended() {
                    writeln!(self.output, "Your turn")?;
                    self.show_table()?;
                }
            }
            Err(err) => {
                event!(
                    target: "nagare::session",
                    Level::DEBUG,
                    %err,
                    "intent rejected"
                );
                writeln!(self.output, "{err}")?;
            }
        }
        Ok(())
    }

    fn prompt_card(&mut self) -> Result<Option<Card>> {
        loop {
            writeln!(self.output, "Which card? (e.g. d4)")?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match parse_card(&line) {
                Ok(card) => return Ok(Some(card)),
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }

    fn flush_events(&mut self) -> Result<()> {
        for event in self.engine.take_events() {
            if self.json_events {
                let line = serde_json::to_string(&event).context("encoding event")?;
                writeln!(self.output, "{line}")?;
            } else {
                writeln!(self.output, "{}", describe_event(&event, self.engine.players()))?;
            }
        }
        Ok(())
    }

    fn show_table(&mut self) -> Result<()> {
        self.show_field()?;
        self.show_hand()
    }

    fn show_field(&mut self) -> Result<()> {
        writeln!(self.output, "{}", field_line(self.engine.field_card()))?;
        Ok(())
    }

    fn show_hand(&mut self) -> Result<()> {
        let line = hand_line(self.engine.human_hand().unwrap_or(&[]));
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<SessionOutcome> {
        let ranking = self.engine.ranking().unwrap_or_default();
        writeln!(self.output, "The game is over.")?;
        writeln!(self.output, "{}", results_table(&ranking))?;
        self.output.flush()?;
        Ok(SessionOutcome::Finished(ranking))
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("reading from input")?;
        if read == 0 {
            Ok(None)
        } else {
            Ok(Some(line))
        }
    }
}
