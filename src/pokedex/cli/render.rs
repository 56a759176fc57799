//! # Rendering
//!
//! Turns library results into styled terminal text through the templates in
//! [`super::templates`].
//!
//! Layout calculations (column widths, truncation, padding, stat bars) stay in Rust
//! because they need Unicode-aware width handling. Templates only decide which
//! named style each piece gets. Colors are applied when stdout supports them; the
//! `*_with_color` variants force the choice and are what the tests use.

use super::styles::{names, type_style, POKEDEX_THEME};
use super::templates::{
    DETAIL_TEMPLATE, HELP_TEMPLATE, LISTING_TEMPLATE, TEXT_LIST_TEMPLATE, TYPES_TEMPLATE,
};
use colored::Colorize;
use console::Term;
use minijinja::{Environment, Error, Value};
use pokedex::api::{CmdMessage, MessageLevel};
use pokedex::controls::ControlState;
use pokedex::model::{PokemonDetail, PokemonType};
use pokedex::pipeline::ListingPage;
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const POSITION_WIDTH: usize = 5;
pub const NAME_WIDTH: usize = 20;
pub const TYPES_WIDTH: usize = 18;
pub const NUMBER_WIDTH: usize = 6;
pub const STAT_NAME_WIDTH: usize = 18;
pub const STAT_BAR_UNIT: u32 = 10;
pub const UNKNOWN_VALUE: &str = "?";

#[derive(Serialize)]
struct TypeTag {
    name: String,
    style: &'static str,
}

/// A right-aligned numeric column; unknown values get their own style.
#[derive(Serialize)]
struct NumberCell {
    text: String,
    style: &'static str,
}

#[derive(Serialize)]
struct RowData {
    position: String,
    name: String,
    name_pad: String,
    types: Vec<TypeTag>,
    types_pad: String,
    height: NumberCell,
    weight: NumberCell,
    experience: NumberCell,
    id: String,
}

#[derive(Serialize)]
struct ButtonData {
    label: String,
    style: &'static str,
}

#[derive(Serialize)]
struct ListingData {
    summary: String,
    header: String,
    rows: Vec<RowData>,
    buttons: Vec<ButtonData>,
}

#[derive(Serialize)]
struct AbilityData {
    name: String,
    hidden: bool,
}

#[derive(Serialize)]
struct StatData {
    name: String,
    value: String,
    bar: String,
}

#[derive(Serialize)]
struct DetailData {
    name: String,
    number: String,
    types: Vec<TypeTag>,
    image: String,
    image_style: &'static str,
    height: String,
    weight: String,
    experience: String,
    abilities: Vec<AbilityData>,
    stats: Vec<StatData>,
}

#[derive(Serialize)]
struct TextListData {
    lines: Vec<String>,
    empty_message: String,
}

#[derive(Serialize)]
struct TypesData {
    types: Vec<TypeTag>,
}

#[derive(Serialize)]
struct HelpEntry {
    usage: String,
    pad: String,
    about: String,
}

#[derive(Serialize)]
struct HelpData {
    commands: Vec<HelpEntry>,
}

fn stdout_colors() -> bool {
    Term::stdout().features().colors_supported()
}

fn environment(use_color: bool) -> Result<Environment<'static>, Error> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);

    env.add_filter("style", move |value: Value, name: String| -> String {
        POKEDEX_THEME.apply(&name, &value.to_string(), use_color)
    });
    // Styles each tag with its own style and joins them with single spaces.
    env.add_filter("tags", move |tags: Vec<Value>| -> Result<String, Error> {
        let mut styled = Vec::with_capacity(tags.len());
        for tag in tags {
            let name = tag.get_attr("name")?.to_string();
            let style = tag.get_attr("style")?.to_string();
            styled.push(POKEDEX_THEME.apply(&style, &name, use_color));
        }
        Ok(styled.join(" "))
    });

    env.add_template("listing", LISTING_TEMPLATE)?;
    env.add_template("detail", DETAIL_TEMPLATE)?;
    env.add_template("text_list", TEXT_LIST_TEMPLATE)?;
    env.add_template("types", TYPES_TEMPLATE)?;
    env.add_template("help", HELP_TEMPLATE)?;
    Ok(env)
}

fn render_template<T: Serialize>(name: &str, data: &T, use_color: bool) -> Result<String, Error> {
    let env = environment(use_color)?;
    let template = env.get_template(name)?;
    template.render(data)
}

/// Renders one listing page: summary line, table, pagination bar.
pub fn render_listing(page: &ListingPage, controls: &ControlState) -> String {
    render_listing_with_color(page, controls, stdout_colors())
}

pub fn render_listing_with_color(
    page: &ListingPage,
    controls: &ControlState,
    use_color: bool,
) -> String {
    let first = page.first_position();
    let rows = page
        .entries
        .iter()
        .enumerate()
        .map(|(offset, pokemon)| {
            let name = truncate_to_width(&capitalize(&pokemon.name), NAME_WIDTH);
            let types = type_tags(pokemon.types.as_deref().unwrap_or_default());
            let types_width = tags_width(&types);
            RowData {
                position: format!("{:>width$}", format!("{}.", first + offset), width = POSITION_WIDTH),
                name_pad: padding(&name, NAME_WIDTH),
                name,
                types_pad: " ".repeat(TYPES_WIDTH.saturating_sub(types_width)),
                types,
                height: number_cell(pokemon.height),
                weight: number_cell(pokemon.weight),
                experience: number_cell(pokemon.base_experience),
                id: pokemon.id().map(|id| format!("#{}", id)).unwrap_or_default(),
            }
        })
        .collect();

    let data = ListingData {
        summary: summary(page, controls),
        header: format!(
            "{:>pw$}  {:<nw$}  {:<tw$}  {:>w$}  {:>w$}  {:>w$}  {}",
            "#",
            "Name",
            "Types",
            "Height",
            "Weight",
            "XP",
            "ID",
            pw = POSITION_WIDTH,
            nw = NAME_WIDTH,
            tw = TYPES_WIDTH,
            w = NUMBER_WIDTH,
        ),
        rows,
        buttons: pagination_buttons(page),
    };

    render_template("listing", &data, use_color).unwrap_or_else(|e| format!("Render error: {}\n", e))
}

fn summary(page: &ListingPage, controls: &ControlState) -> String {
    let shown = if page.is_empty() {
        format!("Showing 0 of {} Pokémon", page.total_matches)
    } else {
        let first = page.first_position();
        format!(
            "Showing {}-{} of {} Pokémon",
            first,
            first + page.entries.len() - 1,
            page.total_matches
        )
    };
    let mut parts = vec![
        shown,
        format!("page {}/{}", page.current_page, page.total_pages),
        format!(
            "sorted by {} ({})",
            controls.sort_key().label(),
            controls.sort_direction().label()
        ),
    ];
    if let Some(kind) = controls.type_filter() {
        parts.push(format!("type: {}", kind));
    }
    if !controls.search_query().is_empty() {
        parts.push(format!("search: \"{}\"", controls.search_query()));
    }
    parts.join(" · ")
}

fn pagination_buttons(page: &ListingPage) -> Vec<ButtonData> {
    let nav = |label: &str, disabled: bool| ButtonData {
        label: format!("[{}]", label),
        style: if disabled { names::DISABLED } else { names::BUTTON },
    };

    let mut buttons = vec![nav("First", page.first_disabled()), nav("Prev", page.prev_disabled())];
    buttons.extend(page.window.iter().map(|&number| {
        if number == page.current_page {
            ButtonData {
                label: format!("[{}]", number),
                style: names::CURRENT,
            }
        } else {
            ButtonData {
                label: number.to_string(),
                style: names::BUTTON,
            }
        }
    }));
    buttons.push(nav("Next", page.next_disabled()));
    buttons.push(nav("Last", page.last_disabled()));
    buttons
}

/// Renders the detail view of one Pokémon.
pub fn render_detail(detail: &PokemonDetail) -> String {
    render_detail_with_color(detail, stdout_colors())
}

pub fn render_detail_with_color(detail: &PokemonDetail, use_color: bool) -> String {
    let (image, image_style) = match &detail.image_url {
        Some(url) => (url.clone(), names::MUTED),
        None => ("none".to_string(), names::UNKNOWN),
    };
    let data = DetailData {
        name: capitalize(&detail.name),
        number: format!("#{:03}", detail.id),
        types: type_tags(&detail.types),
        image,
        image_style,
        height: detail.height.to_string(),
        weight: detail.weight.to_string(),
        experience: detail
            .base_experience
            .map(|xp| xp.to_string())
            .unwrap_or_else(|| UNKNOWN_VALUE.to_string()),
        abilities: detail
            .abilities
            .iter()
            .map(|ability| AbilityData {
                name: ability.name.clone(),
                hidden: ability.is_hidden,
            })
            .collect(),
        stats: detail
            .stats
            .iter()
            .map(|stat| StatData {
                name: format!("{:<width$}", stat.name, width = STAT_NAME_WIDTH),
                value: format!("{:>4}", stat.base_stat),
                bar: stat_bar(stat.base_stat),
            })
            .collect(),
    };

    render_template("detail", &data, use_color).unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// Renders every known type name in its badge color.
pub fn render_types() -> String {
    render_types_with_color(stdout_colors())
}

pub fn render_types_with_color(use_color: bool) -> String {
    let data = TypesData {
        types: PokemonType::ALL
            .iter()
            .map(|kind| TypeTag {
                name: kind.as_str().to_string(),
                style: kind.as_str(),
            })
            .collect(),
    };
    render_template("types", &data, use_color).unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// Renders `(usage, description)` pairs as an aligned command list.
pub fn render_help(commands: &[(&str, &str)]) -> String {
    render_help_with_color(commands, stdout_colors())
}

pub fn render_help_with_color(commands: &[(&str, &str)], use_color: bool) -> String {
    let usage_width = commands.iter().map(|(usage, _)| usage.width()).max().unwrap_or(0) + 2;
    let data = HelpData {
        commands: commands
            .iter()
            .map(|(usage, about)| HelpEntry {
                usage: usage.to_string(),
                pad: padding(usage, usage_width),
                about: about.to_string(),
            })
            .collect(),
    };
    render_template("help", &data, use_color).unwrap_or_else(|e| format!("Render error: {}\n", e))
}

pub fn render_text_list(lines: &[String], empty_message: &str) -> String {
    render_text_list_with_color(lines, empty_message, stdout_colors())
}

pub fn render_text_list_with_color(lines: &[String], empty_message: &str, use_color: bool) -> String {
    let data = TextListData {
        lines: lines.to_vec(),
        empty_message: empty_message.to_string(),
    };
    render_template("text_list", &data, use_color).unwrap_or_else(|_| format!("{}\n", empty_message))
}

pub fn print_messages(messages: &[CmdMessage]) {
    let use_color = stdout_colors();
    for message in messages {
        println!("{}", format_message(message, use_color));
    }
}

fn format_message(message: &CmdMessage, use_color: bool) -> String {
    if !use_color {
        return message.content.clone();
    }
    let styled = match message.level {
        MessageLevel::Info => message.content.dimmed(),
        MessageLevel::Success => message.content.green(),
        MessageLevel::Warning => message.content.yellow(),
        MessageLevel::Error => message.content.red(),
    };
    styled.to_string()
}

fn type_tags(types: &[String]) -> Vec<TypeTag> {
    types
        .iter()
        .map(|name| TypeTag {
            name: name.clone(),
            style: type_style(name),
        })
        .collect()
}

fn tags_width(tags: &[TypeTag]) -> usize {
    let names: usize = tags.iter().map(|tag| tag.name.width()).sum();
    names + tags.len().saturating_sub(1)
}

fn number_cell(value: Option<u32>) -> NumberCell {
    match value {
        Some(n) => NumberCell {
            text: format!("{:>width$}", n, width = NUMBER_WIDTH),
            style: names::NUMBER,
        },
        None => NumberCell {
            text: format!("{:>width$}", UNKNOWN_VALUE, width = NUMBER_WIDTH),
            style: names::UNKNOWN,
        },
    }
}

fn stat_bar(base_stat: u32) -> String {
    "█".repeat(base_stat.div_ceil(STAT_BAR_UNIT) as usize)
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn padding(text: &str, width: usize) -> String {
    " ".repeat(width.saturating_sub(text.width()))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
