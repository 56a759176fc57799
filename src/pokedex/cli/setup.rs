use clap::{Args, Parser, Subcommand};
use pokedex::controls::{ControlState, SortDirection, SortKey};
use pokedex::model::PokemonType;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(
    name = "pokedex",
    bin_name = "pokedex",
    version = get_version(),
    disable_help_subcommand = true
)]
#[command(about = "Browse the Pokémon catalog from the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Catalog API base URL (overrides the configured one)
    #[arg(long, global = true, value_name = "URL", help_heading = "Options")]
    pub base_url: Option<String>,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print one page of the catalog
    #[command(alias = "ls", display_order = 1)]
    List(ListArgs),

    /// Browse the catalog interactively
    #[command(alias = "b", display_order = 2)]
    Browse(ListArgs),

    /// Show the details of one Pokémon
    #[command(alias = "v", display_order = 3)]
    Show {
        /// Numeric id (e.g. 25)
        id: u32,
    },

    /// List the types accepted by --type
    #[command(display_order = 4)]
    Types,

    /// Get or set configuration
    #[command(display_order = 5)]
    Config {
        /// Config key (api-base-url, index-limit, max-concurrent-requests, request-timeout-secs)
        key: Option<String>,
        /// New value ("none" clears optional keys)
        value: Option<String>,
    },
}

/// Listing controls shared by `list` and `browse`.
#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Only Pokémon whose name contains this text (case-insensitive)
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only Pokémon of this type (see `pokedex types`)
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub kind: Option<PokemonType>,

    /// Sort key: name, height, weight, base-experience
    #[arg(long, value_name = "KEY", default_value = "name")]
    pub sort: SortKey,

    /// Sort in descending order
    #[arg(long)]
    pub desc: bool,

    /// Page to show
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,
}

impl Default for ListArgs {
    fn default() -> Self {
        Self {
            search: None,
            kind: None,
            sort: SortKey::Name,
            desc: false,
            page: 1,
        }
    }
}

impl ListArgs {
    /// Control state for these arguments, on page 1. The requested page is applied
    /// once the catalog is loaded and the page count is known.
    pub fn controls(&self) -> ControlState {
        let mut controls = ControlState::new();
        if let Some(search) = &self.search {
            controls.set_search(search);
        }
        controls.set_type_filter(self.kind);
        controls.set_sort_key(self.sort);
        if self.desc {
            controls.set_sort_direction(SortDirection::Desc);
        }
        controls
    }

    pub fn page(&self) -> usize {
        self.page as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn no_command_means_default_list() {
        let cli = parse(&["pokedex"]);
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn list_flags_become_controls() {
        let cli = parse(&[
            "pokedex", "list", "--search", "Char", "--type", "FIRE", "--sort", "weight", "--desc",
            "--page", "2",
        ]);
        let Some(Commands::List(args)) = cli.command else {
            panic!("expected list");
        };
        let controls = args.controls();
        assert_eq!(controls.search_query(), "char");
        assert_eq!(controls.type_filter(), Some(PokemonType::Fire));
        assert_eq!(controls.sort_key(), SortKey::Weight);
        assert_eq!(controls.sort_direction(), SortDirection::Desc);
        assert_eq!(controls.current_page(), 1);
        assert_eq!(args.page(), 2);
    }

    #[test]
    fn global_flags_work_after_the_subcommand() {
        let cli = parse(&["pokedex", "show", "25", "-v", "--base-url", "http://127.0.0.1:9"]);
        assert!(cli.verbose);
        assert_eq!(cli.base_url.as_deref(), Some("http://127.0.0.1:9"));
        assert!(matches!(cli.command, Some(Commands::Show { id: 25 })));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(Cli::try_parse_from(["pokedex", "list", "--type", "plasma"]).is_err());
        assert!(Cli::try_parse_from(["pokedex", "list", "--sort", "speed"]).is_err());
        assert!(Cli::try_parse_from(["pokedex", "list", "--page", "0"]).is_err());
        assert!(Cli::try_parse_from(["pokedex", "show", "pikachu"]).is_err());
    }

    #[test]
    fn config_takes_optional_key_and_value() {
        let cli = parse(&["pokedex", "config", "index-limit", "151"]);
        match cli.command {
            Some(Commands::Config { key, value }) => {
                assert_eq!(key.as_deref(), Some("index-limit"));
                assert_eq!(value.as_deref(), Some("151"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
