//! Interactive browsing: one catalog load, then line commands read from stdin.
//!
//! The load runs as a spawned task while the loop waits on it together with
//! Ctrl-C. Interrupting closes the session, so the load result, when it finally
//! arrives, is never applied. After the load every command only changes the
//! control state and re-renders from the in-memory collection.

use super::commands::with_loading;
use super::render::{print_messages, render_detail, render_help, render_listing};
use super::styles::{names, POKEDEX_THEME};
use console::Term;
use pokedex::api::{CmdMessage, PokedexApi};
use pokedex::controls::{ControlAction, ControlState, SortDirection, SortKey};
use pokedex::error::{PokedexError, Result};
use pokedex::model::PokemonType;
use pokedex::session::Session;
use pokedex::source::CatalogSource;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

pub const HELP: &[(&str, &str)] = &[
    ("search <text>", "Filter by name (no text clears the search)"),
    ("type <name|all>", "Filter by type"),
    ("sort <key>", "Sort by name, height, weight or base-experience"),
    ("asc | desc | toggle", "Set or flip the sort direction"),
    ("first | prev | next | last", "Move between pages"),
    ("page <n>", "Jump to page n"),
    ("show <row>", "Details of the Pokémon on that row of the page"),
    ("help", "Show this list"),
    ("quit", "Leave"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Control(ControlAction),
    Show(usize),
    Redraw,
    Help,
    Quit,
}

/// Parses one input line. An empty line redraws the current page.
pub fn parse_line(line: &str) -> std::result::Result<BrowseCommand, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_lowercase().as_str() {
        "" => BrowseCommand::Redraw,
        "search" | "s" => BrowseCommand::Control(ControlAction::Search(rest.to_string())),
        "type" | "t" => {
            let kind = match rest.to_lowercase().as_str() {
                "" | "all" => None,
                name => Some(name.parse::<PokemonType>()?),
            };
            BrowseCommand::Control(ControlAction::FilterType(kind))
        }
        "sort" => BrowseCommand::Control(ControlAction::SortBy(rest.parse::<SortKey>()?)),
        "asc" => BrowseCommand::Control(ControlAction::SetDirection(SortDirection::Asc)),
        "desc" => BrowseCommand::Control(ControlAction::SetDirection(SortDirection::Desc)),
        "toggle" => BrowseCommand::Control(ControlAction::ToggleDirection),
        "first" => BrowseCommand::Control(ControlAction::FirstPage),
        "prev" | "p" => BrowseCommand::Control(ControlAction::PrevPage),
        "next" | "n" => BrowseCommand::Control(ControlAction::NextPage),
        "last" => BrowseCommand::Control(ControlAction::LastPage),
        "page" | "g" => BrowseCommand::Control(ControlAction::GoToPage(number(rest, "page")?)),
        "show" | "v" => BrowseCommand::Show(number(rest, "row")?),
        "help" | "?" => BrowseCommand::Help,
        "quit" | "q" | "exit" => BrowseCommand::Quit,
        other => return Err(format!("Unknown command: {}. Type \"help\" for commands.", other)),
    };
    Ok(command)
}

fn number(text: &str, what: &str) -> std::result::Result<usize, String> {
    text.parse()
        .map_err(|_| format!("Expected a {} number, got \"{}\"", what, text))
}

fn prompt() {
    print!("{} ", POKEDEX_THEME.apply(names::PROMPT, ">", Term::stdout().features().colors_supported()));
    let _ = std::io::stdout().flush();
}

fn show_page(session: &Session) {
    if let Some(page) = session.page() {
        println!("{}", render_listing(&page, session.controls()));
    }
}

/// Runs a browse session until `quit`, end of input, or Ctrl-C.
pub async fn run<S>(api: &PokedexApi<S>, controls: ControlState, page: usize) -> Result<()>
where
    S: CatalogSource + Clone + 'static,
{
    let mut session = Session::with_controls(controls);
    let mut load = api.spawn_load();

    let outcome = with_loading(async {
        tokio::select! {
            joined = &mut load => Some(joined),
            _ = tokio::signal::ctrl_c() => None,
        }
    })
    .await;

    let outcome = match outcome {
        Some(joined) => {
            joined.map_err(|err| PokedexError::Api(format!("Catalog load task failed: {}", err)))?
        }
        None => {
            debug!("interrupted while loading; closing session");
            session.close();
            return Ok(());
        }
    };
    session.resolve(outcome);

    if let Some(message) = session.state().error() {
        return Err(PokedexError::IndexFetch(message.to_string()));
    }
    if page > 1 {
        session.apply(ControlAction::GoToPage(page));
    }

    show_page(&session);
    print!("{}", render_help(HELP));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        prompt();
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = tokio::signal::ctrl_c() => None,
        };
        let Some(line) = line else {
            break;
        };

        match parse_line(&line) {
            Ok(BrowseCommand::Control(action)) => {
                session.apply(action);
                show_page(&session);
            }
            Ok(BrowseCommand::Redraw) => show_page(&session),
            Ok(BrowseCommand::Show(row)) => match session.row(row).and_then(|p| p.id()) {
                Some(id) => match with_loading(api.view_pokemon(id)).await {
                    Ok(result) => {
                        if let Some(detail) = &result.detail {
                            print!("{}", render_detail(detail));
                        }
                        print_messages(&result.messages);
                    }
                    Err(err) => print_messages(&[CmdMessage::error(err.to_string())]),
                },
                None => print_messages(&[CmdMessage::warning(format!(
                    "No row {} on this page.",
                    row
                ))]),
            },
            Ok(BrowseCommand::Help) => print!("{}", render_help(HELP)),
            Ok(BrowseCommand::Quit) => break,
            Err(message) => print_messages(&[CmdMessage::error(message)]),
        }
    }

    session.close();
    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn control(line: &str) -> ControlAction {
        match parse_line(line) {
            Ok(BrowseCommand::Control(action)) => action,
            other => panic!("expected a control action for {:?}, got {:?}", line, other),
        }
    }

    #[test]
    fn parses_filters() {
        assert_eq!(control("search Char"), ControlAction::Search("Char".into()));
        assert_eq!(control("search"), ControlAction::Search(String::new()));
        assert_eq!(control("  s   mr mime "), ControlAction::Search("mr mime".into()));
        assert_eq!(
            control("type Fire"),
            ControlAction::FilterType(Some(PokemonType::Fire))
        );
        assert_eq!(control("type all"), ControlAction::FilterType(None));
        assert_eq!(control("t"), ControlAction::FilterType(None));
    }

    #[test]
    fn parses_sorting() {
        assert_eq!(control("sort weight"), ControlAction::SortBy(SortKey::Weight));
        assert_eq!(
            control("sort base-experience"),
            ControlAction::SortBy(SortKey::BaseExperience)
        );
        assert_eq!(control("desc"), ControlAction::SetDirection(SortDirection::Desc));
        assert_eq!(control("ASC"), ControlAction::SetDirection(SortDirection::Asc));
        assert_eq!(control("toggle"), ControlAction::ToggleDirection);
    }

    #[test]
    fn parses_navigation() {
        assert_eq!(control("first"), ControlAction::FirstPage);
        assert_eq!(control("p"), ControlAction::PrevPage);
        assert_eq!(control("next"), ControlAction::NextPage);
        assert_eq!(control("last"), ControlAction::LastPage);
        assert_eq!(control("page 7"), ControlAction::GoToPage(7));
    }

    #[test]
    fn parses_session_commands() {
        assert_eq!(parse_line("show 3"), Ok(BrowseCommand::Show(3)));
        assert_eq!(parse_line(""), Ok(BrowseCommand::Redraw));
        assert_eq!(parse_line("?"), Ok(BrowseCommand::Help));
        assert_eq!(parse_line("quit"), Ok(BrowseCommand::Quit));
        assert_eq!(parse_line("q"), Ok(BrowseCommand::Quit));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse_line("type plasma").is_err());
        assert!(parse_line("sort speed").is_err());
        assert!(parse_line("page two").is_err());
        assert!(parse_line("show").is_err());
        assert!(parse_line("dance").unwrap_err().contains("Unknown command: dance"));
    }
}
