//! Interactive menu session
//!
//! Reads choices from any `BufRead` and writes prompts and results to any
//! `Write`, so the same loop serves stdin/stdout and scripted tests.
//! End of input is treated like choosing "Exit".

use crate::render;
use anyhow::Result;
use futureskills_core::profiles::parse_rating;
use futureskills_core::{OrientationEngine, Profile, ProfileStore};
use std::io::{BufRead, Write};

const BANNER: &str = "\
========= Future Skills Lab =========
1. Register a new profile
2. List registered profiles
3. Career recommendations
4. Improvement tracks
5. Exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Register,
    ListProfiles,
    Recommend,
    Improve,
    Exit,
}

impl MenuChoice {
    fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Register),
            "2" => Some(MenuChoice::ListProfiles),
            "3" => Some(MenuChoice::Recommend),
            "4" => Some(MenuChoice::Improve),
            "5" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// One user's session: the engine, the profiles registered so far, and the terminal
pub struct MenuSession<'a, R: BufRead, W: Write> {
    engine: OrientationEngine<'a>,
    store: ProfileStore<'a>,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> MenuSession<'a, R, W> {
    pub fn new(engine: OrientationEngine<'a>, input: R, output: W) -> Self {
        let store = ProfileStore::new(engine.registry());
        Self {
            engine,
            store,
            input,
            output,
        }
    }

    pub fn profiles(&self) -> &[Profile] {
        self.store.list()
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the menu until the user exits or input ends
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "{}", BANNER)?;
            let Some(line) = self.prompt("Choose an option: ")? else {
                break;
            };

            let flow = match MenuChoice::parse(&line) {
                Some(MenuChoice::Register) => self.register()?,
                Some(MenuChoice::ListProfiles) => {
                    render::write_profile_list(&mut self.output, self.store.list())?;
                    Flow::Continue
                }
                Some(MenuChoice::Recommend) => self.recommend()?,
                Some(MenuChoice::Improve) => self.improve()?,
                Some(MenuChoice::Exit) => {
                    writeln!(
                        self.output,
                        "Exiting... thank you for using Future Skills Lab!"
                    )?;
                    Flow::Exit
                }
                None => {
                    writeln!(self.output, "Invalid option. Please try again.")?;
                    writeln!(self.output)?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                break;
            }
        }
        self.output.flush()?;
        Ok(())
    }

    /// Prints `message` and reads one trimmed line; `None` at end of input
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn register(&mut self) -> Result<Flow> {
        let Some(name) = self.prompt("Enter your name: ")? else {
            return Ok(Flow::Exit);
        };
        if name.is_empty() {
            writeln!(self.output, "Name cannot be empty.")?;
            return Ok(Flow::Continue);
        }

        let mut profile = Profile::new(&name);
        writeln!(self.output)?;
        writeln!(self.output, "Competency intake for {}:", name)?;

        let registry = self.engine.registry();
        for competency in registry.list() {
            let level = loop {
                let question = format!("Rate your level in '{}' (1-5): ", competency.name);
                let Some(answer) = self.prompt(&question)? else {
                    log::info!("[MENU] Input ended during intake for '{}'", name);
                    return Ok(Flow::Exit);
                };
                match parse_rating(&answer) {
                    Ok(level) => break level,
                    Err(e) => {
                        log::debug!("[MENU] Rejected rating: {}", e);
                        writeln!(
                            self.output,
                            "Invalid input. Please enter a number between 1 and 5."
                        )?;
                    }
                }
            };
            profile.rate(&competency.name, level);
        }

        match self.store.add(profile) {
            Ok(stored) => {
                writeln!(self.output)?;
                writeln!(
                    self.output,
                    "Profile '{}' registered successfully!",
                    stored.name
                )?;
            }
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(Flow::Continue)
    }

    /// Lists profiles and asks for one by number; `Err(flow)` when nothing usable was picked
    fn pick_profile(&mut self, empty_message: &str, question: &str) -> Result<Result<usize, Flow>> {
        if self.store.is_empty() {
            writeln!(self.output, "{}", empty_message)?;
            writeln!(self.output)?;
            return Ok(Err(Flow::Continue));
        }
        render::write_profile_list(&mut self.output, self.store.list())?;

        let Some(answer) = self.prompt(question)? else {
            return Ok(Err(Flow::Exit));
        };
        let picked = answer
            .parse::<usize>()
            .ok()
            .and_then(|position| self.store.get(position).ok().map(|_| position));

        match picked {
            Some(position) => Ok(Ok(position)),
            None => {
                writeln!(self.output, "Invalid profile.")?;
                writeln!(self.output)?;
                Ok(Err(Flow::Continue))
            }
        }
    }

    fn recommend(&mut self) -> Result<Flow> {
        let position = match self.pick_profile(
            "Register a profile before requesting recommendations.",
            "Enter the profile number to see recommendations: ",
        )? {
            Ok(position) => position,
            Err(flow) => return Ok(flow),
        };

        let profile = self.store.get(position)?;
        let limit = self.engine.config().recommendation_limit;
        let recommendations = self.engine.top_recommendations(profile, limit);
        render::write_recommendations(&mut self.output, profile, &recommendations)?;
        Ok(Flow::Continue)
    }

    fn improve(&mut self) -> Result<Flow> {
        let position = match self.pick_profile(
            "Register a profile before requesting improvement tracks.",
            "Enter the profile number to see improvement tracks: ",
        )? {
            Ok(position) => position,
            Err(flow) => return Ok(flow),
        };

        let profile = self.store.get(position)?;
        let threshold = self.engine.config().weak_threshold;
        let suggestions = self.engine.suggest_improvements(profile, threshold);
        render::write_suggestions(&mut self.output, profile, threshold, &suggestions)?;
        Ok(Flow::Continue)
    }
}
