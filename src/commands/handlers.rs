//! Command Handlers
//!
//! One function per command. Handlers never print; they return the lines
//! to show and let the REPL write them.

use tracing::{debug, info};

use super::registry::{CommandContext, CommandFuture, Reply};
use crate::error::PokedexError;
use crate::models::LocationAreaPage;

// == Catch Roll ==
/// Base experience is divided by this to get the catch threshold.
pub const CATCH_DIVISOR: f64 = 1000.0;

/// Whether a roll of `draw` in `[0, 1)` catches a creature.
///
/// The attempt succeeds when `draw <= base_experience / 1000`.
pub fn catch_succeeds(base_experience: u32, draw: f64) -> bool {
    draw <= f64::from(base_experience) / CATCH_DIVISOR
}

// == Help ==
pub fn help(ctx: CommandContext<'_>) -> CommandFuture<'_> {
    Box::pin(async move {
        let mut lines = vec![
            "Welcome to the Pokedex!".to_string(),
            "Usage:".to_string(),
            String::new(),
        ];
        lines.extend(
            ctx.registry
                .iter()
                .map(|command| format!("{}: {}", command.name, command.description)),
        );
        Ok(Reply::lines(lines))
    })
}

// == Exit ==
pub fn exit(_ctx: CommandContext<'_>) -> CommandFuture<'_> {
    Box::pin(async move {
        Ok(Reply::exit(vec![
            "Closing the Pokedex... Goodbye!".to_string()
        ]))
    })
}

// == Map ==
/// Shows the next page. The first call shows the first page; once a page
/// without a `next` cursor has been shown, further calls fail.
pub fn map(ctx: CommandContext<'_>) -> CommandFuture<'_> {
    Box::pin(async move {
        let session = ctx.session;
        if session.paged && session.next.is_none() {
            return Err(PokedexError::LastPage);
        }

        let page = session
            .client
            .list_locations(session.next.as_deref())
            .await?;
        session.record_page(&page);
        Ok(Reply::lines(location_names(&page)))
    })
}

// == Map Back ==
pub fn mapb(ctx: CommandContext<'_>) -> CommandFuture<'_> {
    Box::pin(async move {
        let session = ctx.session;
        let Some(previous) = session.previous.as_deref() else {
            return Err(PokedexError::FirstPage);
        };

        let page = session.client.list_locations(Some(previous)).await?;
        session.record_page(&page);
        Ok(Reply::lines(location_names(&page)))
    })
}

// == Explore ==
pub fn explore(ctx: CommandContext<'_>) -> CommandFuture<'_> {
    Box::pin(async move {
        let area = required_arg(ctx.arg, "explore", "area")?;
        let names = ctx.session.client.list_encounters(area).await?;

        let mut lines = vec![format!("Exploring {area}..."), "Found Pokemon:".to_string()];
        lines.extend(names.iter().map(|name| format!(" - {name}")));
        Ok(Reply::lines(lines))
    })
}

// == Catch ==
pub fn catch(ctx: CommandContext<'_>) -> CommandFuture<'_> {
    Box::pin(async move {
        let name = required_arg(ctx.arg, "catch", "pokemon")?;
        let session = ctx.session;
        let pokemon = session.client.get_creature(name).await?;

        let mut lines = vec![format!("Throwing a Pokeball at {name}...")];
        let draw = session.roll();
        let base_experience = pokemon.base_experience();
        debug!(draw, base_experience, "catch roll");

        if catch_succeeds(base_experience, draw) {
            info!(pokemon = %pokemon.name, "caught");
            lines.push(format!("{name} was caught!"));
            lines.push("You may now inspect it with the inspect command.".to_string());
            session.record_catch(name, pokemon);
        } else {
            lines.push(format!("{name} escaped!"));
        }
        Ok(Reply::lines(lines))
    })
}

// == Inspect ==
pub fn inspect(ctx: CommandContext<'_>) -> CommandFuture<'_> {
    Box::pin(async move {
        let name = required_arg(ctx.arg, "inspect", "pokemon")?;
        let caught = ctx
            .session
            .pokedex
            .get(name)
            .ok_or_else(|| PokedexError::NotCaught(name.to_string()))?;
        let pokemon = &caught.pokemon;

        let mut lines = vec![
            format!("Name: {}", pokemon.name),
            format!("Height: {}", pokemon.height),
            format!("Weight: {}", pokemon.weight),
            "Stats:".to_string(),
        ];
        lines.extend(
            pokemon
                .stats
                .iter()
                .map(|stat| format!("  -{}: {}", stat.stat.name, stat.base_stat)),
        );
        lines.push("Types:".to_string());
        lines.extend(
            pokemon
                .types
                .iter()
                .map(|kind| format!("  - {}", kind.kind.name)),
        );
        lines.push(format!("Caught at: {}", caught.caught_at.to_rfc3339()));
        Ok(Reply::lines(lines))
    })
}

// == Pokedex ==
pub fn pokedex(ctx: CommandContext<'_>) -> CommandFuture<'_> {
    Box::pin(async move {
        if ctx.session.pokedex.is_empty() {
            return Ok(Reply::lines(vec![
                "Your Pokedex is empty. Try catching something!".to_string(),
            ]));
        }

        let mut lines = vec!["Your Pokedex:".to_string()];
        lines.extend(ctx.session.pokedex.keys().map(|name| format!(" - {name}")));
        Ok(Reply::lines(lines))
    })
}

// == Helpers ==
fn location_names(page: &LocationAreaPage) -> Vec<String> {
    page.results.iter().map(|area| area.name.clone()).collect()
}

fn required_arg<'a>(
    arg: &'a str,
    command: &'static str,
    argument: &'static str,
) -> Result<&'a str, PokedexError> {
    if arg.is_empty() {
        Err(PokedexError::MissingArgument { command, argument })
    } else {
        Ok(arg)
    }
}
