mod form;
mod format;
mod header;
mod output;
mod overlays;

pub(super) use form::draw_form;
pub(super) use header::{draw_footer, draw_header, draw_notice};
pub(super) use output::draw_output;
pub(super) use overlays::{draw_help_popup, draw_terminal_too_small};
