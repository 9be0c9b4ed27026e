/// Minimum terminal width required (columns)
pub(super) const MIN_TERMINAL_WIDTH: u16 = 60;
/// Minimum terminal height required (rows)
pub(super) const MIN_TERMINAL_HEIGHT: u16 = 18;

/// Rows taken by the form card: borders, description, spacer, six fields.
pub(super) const FORM_HEIGHT: u16 = 10;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum InputMode {
    Form,
    Help,
}
