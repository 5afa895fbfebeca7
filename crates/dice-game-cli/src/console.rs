//! Line-oriented console player.
//!
//! Every prompt is a numbered menu plus `X - exit` and `? - help`. Invalid
//! input re-asks the same question; help prints the probability table and
//! then re-asks too, so the round resumes exactly where it was.

use dice_game_core::{Aborted, DieId, DieOption, DrawRequest, Participant, RoundEvent};
use std::fmt;
use std::io::{BufRead, Write};
use tracing::warn;

/// Ranges above this are typed in rather than listed
const MENU_LIMIT: usize = 20;

pub struct Console<R, W> {
    input: R,
    output: W,
    help: String,
}

enum Selection {
    Item(usize),
    Help,
    Exit,
    Invalid,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, help: String) -> Self {
        Self {
            input,
            output,
            help,
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    fn say(&mut self, args: fmt::Arguments<'_>) {
        if let Err(e) = self.output.write_fmt(args).and_then(|_| self.output.flush()) {
            warn!(error = %e, "failed to write to console");
        }
    }

    fn read_selection(&mut self, items: usize) -> Result<Selection, Aborted> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => return Err(Aborted),
            Ok(_) => {}
            Err(e) => {
                warn!(error = %e, "failed to read from console");
                return Err(Aborted);
            }
        }
        let selection = match line.trim() {
            "x" | "X" => Selection::Exit,
            "?" => Selection::Help,
            other => match other.parse::<usize>() {
                Ok(n) if n < items => Selection::Item(n),
                _ => Selection::Invalid,
            },
        };
        Ok(selection)
    }

    /// Show a menu until the player picks an item or exits
    fn menu(&mut self, items: &[String]) -> Result<usize, Aborted> {
        self.prompt(items, items.len())
    }

    /// Ask for a number in `0..count` without listing every value
    fn ask_number(&mut self, count: usize) -> Result<usize, Aborted> {
        self.prompt(&[], count)
    }

    fn prompt(&mut self, items: &[String], count: usize) -> Result<usize, Aborted> {
        loop {
            if items.is_empty() {
                self.say(format_args!(
                    "Enter a number from 0 to {}\n",
                    count.saturating_sub(1)
                ));
            }
            for (i, item) in items.iter().enumerate() {
                self.say(format_args!("{} - {}\n", i, item));
            }
            self.say(format_args!("X - exit\n? - help\nYour selection: "));

            match self.read_selection(count)? {
                Selection::Item(n) => return Ok(n),
                Selection::Exit => return Err(Aborted),
                Selection::Help => {
                    let help = std::mem::take(&mut self.help);
                    self.say(format_args!("{}\n", help));
                    self.help = help;
                }
                Selection::Invalid => {
                    self.say(format_args!(
                        "Invalid selection, enter a number from 0 to {}, X or ?.\n",
                        count.saturating_sub(1)
                    ));
                }
            }
        }
    }
}

impl<R: BufRead, W: Write> Participant for Console<R, W> {
    fn contribute(&mut self, request: &DrawRequest) -> Result<u32, Aborted> {
        self.say(format_args!(
            "Let's determine {}.\n\
             I selected a random value in the range 0..{}\n\
             (HMAC={}).\n\
             Add your number modulo {}.\n",
            request.purpose,
            request.range - 1,
            request.commitment,
            request.range
        ));
        let range = request.range as usize;
        let index = if range <= MENU_LIMIT {
            let items: Vec<String> = (0..range).map(|n| n.to_string()).collect();
            self.menu(&items)?
        } else {
            self.ask_number(range)?
        };
        Ok(index as u32)
    }

    fn choose_die(&mut self, options: &[DieOption<'_>]) -> Result<DieId, Aborted> {
        self.say(format_args!("Choose your dice:\n"));
        let items: Vec<String> = options.iter().map(|o| o.die.to_string()).collect();
        let index = self.menu(&items)?;
        Ok(options[index].id)
    }

    fn observe(&mut self, event: &RoundEvent<'_>) {
        self.say(format_args!("{}\n", event));
        if let RoundEvent::DrawRevealed { draw, .. } = event {
            self.say(format_args!(
                "The fair number generation result is {} + {} = {} (mod {}).\n",
                draw.value(),
                draw.contribution(),
                draw.result(),
                draw.range()
            ));
        }
    }
}
