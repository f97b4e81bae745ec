use sapper_core::{Action, Coord, Coord2};
use std::io::{self, BufRead, Write};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Choice {
    Flag,
    Remove,
    Assert,
    Quit,
}

impl Choice {
    fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'f' => Some(Self::Flag),
            'r' => Some(Self::Remove),
            'a' => Some(Self::Assert),
            'q' => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Reads player actions line by line. Running out of input counts as quitting.
pub struct Prompt<R> {
    input: R,
    line: String,
}

impl<R: BufRead> Prompt<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            line: String::new(),
        }
    }

    /// Asks until a valid action comes in. Coordinates are only accepted inside `size`.
    pub fn next_action(&mut self, size: Coord2, out: &mut impl Write) -> io::Result<Action> {
        let Some(choice) = self.read_choice(out)? else {
            return Ok(Action::Quit);
        };
        if choice == Choice::Quit {
            return Ok(Action::Quit);
        }
        let Some(coords) = self.read_coords(size, out)? else {
            return Ok(Action::Quit);
        };

        Ok(match choice {
            Choice::Flag => Action::Flag(coords),
            Choice::Remove => Action::Unflag(coords),
            Choice::Assert => Action::Assert(coords),
            Choice::Quit => Action::Quit,
        })
    }

    fn read_choice(&mut self, out: &mut impl Write) -> io::Result<Option<Choice>> {
        loop {
            let prompt = "\n[F]lag a mine, [R]emove a flag, [A]ssert square bomb-free, [Q]uit: ";
            if !self.ask(prompt, out)? {
                return Ok(None);
            }
            writeln!(out)?;

            let choice = self.line.trim_start().chars().next().and_then(Choice::from_char);
            match choice {
                Some(choice) => return Ok(Some(choice)),
                None => log::debug!("Ignoring choice {:?}", self.line.trim()),
            }
        }
    }

    fn read_coords(
        &mut self,
        (width, height): Coord2,
        out: &mut impl Write,
    ) -> io::Result<Option<Coord2>> {
        loop {
            if !self.ask(&format!("Enter valid x coordinate 0-{}: ", width - 1), out)? {
                return Ok(None);
            }
            let x = self.line.trim().parse::<Coord>();

            if !self.ask(&format!("Enter valid y coordinate 0-{}: ", height - 1), out)? {
                return Ok(None);
            }
            let y = self.line.trim().parse::<Coord>();

            match (x, y) {
                (Ok(x), Ok(y)) if x < width && y < height => return Ok(Some((x, y))),
                _ => log::debug!("Coordinates rejected, asking again"),
            }
        }
    }

    /// Writes `prompt` and reads the answer into `self.line`. False at end of input.
    fn ask(&mut self, prompt: &str, out: &mut impl Write) -> io::Result<bool> {
        write!(out, "{prompt}")?;
        out.flush()?;

        self.line.clear();
        Ok(self.input.read_line(&mut self.line)? > 0)
    }
}
