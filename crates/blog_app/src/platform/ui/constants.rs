pub const RULE_WIDTH: usize = 60;
pub const BULLET: &str = "  • ";
pub const QUOTE_BAR: &str = "  │ ";
pub const MAJOR_UNDERLINE: char = '=';
pub const MINOR_UNDERLINE: char = '-';
