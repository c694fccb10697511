//! REPL Commands
//!
//! The command table and one handler per command. Handlers write their
//! output to a caller-supplied writer and fetch through the cache-first
//! [`PokeApiClient`].

use std::io::Write;

use tracing::info;

use crate::api::PokeApiClient;
use crate::error::{PokedexError, Result};
use crate::models::Pokemon;
use crate::repl::Session;

pub const GOODBYE: &str = "Closing the Pokedex... Goodbye!";

/// What the loop should do after a command ran
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Map,
    Mapb,
    Explore,
    Catch,
    Inspect,
    Pokedex,
}

impl Command {
    /// Every command, in the order `help` lists them
    pub const ALL: [Command; 8] = [
        Command::Help,
        Command::Exit,
        Command::Map,
        Command::Mapb,
        Command::Explore,
        Command::Catch,
        Command::Inspect,
        Command::Pokedex,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Exit => "exit",
            Command::Map => "map",
            Command::Mapb => "mapb",
            Command::Explore => "explore",
            Command::Catch => "catch",
            Command::Inspect => "inspect",
            Command::Pokedex => "pokedex",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Command::Help => "Displays a help message",
            Command::Exit => "Exit the Pokedex",
            Command::Map => "Displays the next 20 location areas",
            Command::Mapb => "Displays the previous 20 location areas",
            Command::Explore => "Display a list of all the Pokemon in the given location",
            Command::Catch => "Try to catch the given Pokemon",
            Command::Inspect => "Display information on the given Pokemon",
            Command::Pokedex => "Display the Pokemon names in your Pokedex",
        }
    }

    /// Looks a command up by its (already lowercased) name.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.name() == name)
    }

    /// Runs the command with the words that followed its name.
    pub async fn execute<W: Write>(
        self,
        args: &[String],
        session: &mut Session,
        client: &PokeApiClient,
        out: &mut W,
    ) -> Result<Flow> {
        match self {
            Command::Help => help(out)?,
            Command::Exit => {
                writeln!(out, "{}", GOODBYE)?;
                return Ok(Flow::Exit);
            }
            Command::Map => map_next(session, client, out).await?,
            Command::Mapb => map_previous(session, client, out).await?,
            Command::Explore => explore(self.argument(args)?, client, out).await?,
            Command::Catch => catch(self.argument(args)?, session, client, out).await?,
            Command::Inspect => inspect(self.argument(args)?, session, out)?,
            Command::Pokedex => pokedex(session, out)?,
        }
        Ok(Flow::Continue)
    }

    fn argument(self, args: &[String]) -> Result<&str> {
        args.first()
            .map(String::as_str)
            .ok_or(PokedexError::MissingArgument {
                command: self.name(),
            })
    }
}

/// Catch rule: roll `r` in `0..base_experience` and escape when
/// `r < base_experience / 3`. Zero base experience always catches.
pub fn catch_succeeds(base_experience: u32, roll: u32) -> bool {
    base_experience == 0 || roll >= base_experience / 3
}

fn help<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Welcome to the Pokedex!")?;
    writeln!(out, "Usage:")?;
    writeln!(out)?;
    for command in Command::ALL {
        writeln!(out, "{}: {}", command.name(), command.description())?;
    }
    Ok(())
}

async fn map_next<W: Write>(
    session: &mut Session,
    client: &PokeApiClient,
    out: &mut W,
) -> Result<()> {
    let Some(url) = session.next.clone() else {
        writeln!(out, "you're on the last page")?;
        return Ok(());
    };
    show_page(&url, session, client, out).await
}

async fn map_previous<W: Write>(
    session: &mut Session,
    client: &PokeApiClient,
    out: &mut W,
) -> Result<()> {
    let Some(url) = session.previous.clone() else {
        writeln!(out, "you're on the first page")?;
        return Ok(());
    };
    show_page(&url, session, client, out).await
}

async fn show_page<W: Write>(
    url: &str,
    session: &mut Session,
    client: &PokeApiClient,
    out: &mut W,
) -> Result<()> {
    let page = client.location_areas(url).await?;
    for area in &page.results {
        writeln!(out, "{}", area.name)?;
    }
    session.set_page_links(page.next, page.previous);
    Ok(())
}

async fn explore<W: Write>(area: &str, client: &PokeApiClient, out: &mut W) -> Result<()> {
    let area = client.location_area(area).await?;

    writeln!(out, "Exploring {}...", area.name)?;
    if area.pokemon_encounters.is_empty() {
        writeln!(out, "No Pokemon found here")?;
    }
    for name in area.pokemon_names() {
        writeln!(out, " - {}", name)?;
    }
    Ok(())
}

async fn catch<W: Write>(
    name: &str,
    session: &mut Session,
    client: &PokeApiClient,
    out: &mut W,
) -> Result<()> {
    let pokemon = client.pokemon(name).await?;
    writeln!(out, "Throwing a Pokeball at {}...", pokemon.name)?;

    let base_experience = pokemon.base_experience.unwrap_or(0);
    let roll = session.roll(base_experience);
    if !catch_succeeds(base_experience, roll) {
        writeln!(out, "{} escaped!", pokemon.name)?;
        return Ok(());
    }

    info!(pokemon = %pokemon.name, base_experience, roll, "Pokemon caught");
    writeln!(out, "{} was caught!", pokemon.name)?;
    writeln!(out, "You may now inspect it with the inspect command.")?;
    session.record_catch(pokemon);
    Ok(())
}

fn inspect<W: Write>(name: &str, session: &Session, out: &mut W) -> Result<()> {
    match session.caught(name) {
        Some(pokemon) => describe(pokemon, out),
        None => {
            writeln!(out, "you have not caught that pokemon")?;
            Ok(())
        }
    }
}

fn describe<W: Write>(pokemon: &Pokemon, out: &mut W) -> Result<()> {
    writeln!(out, "Name: {}", pokemon.name)?;
    writeln!(out, "Height: {}", pokemon.height)?;
    writeln!(out, "Weight: {}", pokemon.weight)?;
    writeln!(out, "Stats:")?;
    for stat in &pokemon.stats {
        writeln!(out, "  -{}: {}", stat.stat.name, stat.base_stat)?;
    }
    writeln!(out, "Types:")?;
    for kind in &pokemon.types {
        writeln!(out, "  - {}", kind.kind.name)?;
    }
    Ok(())
}

fn pokedex<W: Write>(session: &Session, out: &mut W) -> Result<()> {
    writeln!(out, "Your Pokedex:")?;
    for pokemon in session.pokedex() {
        writeln!(out, " - {}", pokemon.name)?;
    }
    Ok(())
}
