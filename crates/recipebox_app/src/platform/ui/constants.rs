pub(crate) const HEART_FILLED: &str = "❤";
pub(crate) const HEART_EMPTY: &str = "♡";

pub(crate) const HELP_LINE: &str = "type to search | Up/Down select | Enter details | \
Ctrl-H favorite | Ctrl-F favorites only | Ctrl-S sort | Ctrl-Q quit";
