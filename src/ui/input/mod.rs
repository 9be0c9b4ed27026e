mod form;
mod help;

pub(super) use form::handle_form_key;
pub(super) use help::handle_help_key;
