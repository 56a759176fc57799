use crate::commands::{CmdMessage, CmdResult};
use crate::controls::ControlState;
use crate::model::Pokemon;
use crate::pipeline;

pub fn run(collection: &[Pokemon], controls: &ControlState) -> CmdResult {
    let page = pipeline::run(collection, controls);
    let mut result = CmdResult::default();

    if page.total_matches == 0 {
        result.add_message(CmdMessage::info("No Pokémon found."));
    } else if page.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "Page {} is out of range (1-{}).",
            page.current_page, page.total_pages
        )));
    }

    result.with_page(page)
}
