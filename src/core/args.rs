//! Command line option scanning.
//!
//! Every token is checked against every recognized flag name, so flags may sit
//! anywhere in the argument list (including after interpreter or binary paths)
//! and unrecognized tokens are ignored.

const FLAG_PREFIX: &str = "--";

/// Flags the scanner recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    Filter,
    Count,
}

impl Flag {
    pub const ALL: [Flag; 2] = [Flag::Filter, Flag::Count];

    pub fn name(self) -> &'static str {
        match self {
            Flag::Filter => "filter",
            Flag::Count => "count",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OptionValue {
    #[default]
    Absent,
    /// Flag given without `=value`.
    Flag,
    Value(String),
}

impl OptionValue {
    /// An empty `=` value counts as not given.
    pub fn is_set(&self) -> bool {
        match self {
            OptionValue::Absent => false,
            OptionValue::Flag => true,
            OptionValue::Value(value) => !value.is_empty(),
        }
    }

    /// Text form of the value; a bare flag reads as `"true"`.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            OptionValue::Absent => None,
            OptionValue::Flag => Some("true"),
            OptionValue::Value(value) => Some(value),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    pub filter: OptionValue,
    pub count: OptionValue,
}

/// The command selected by a set of options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Filter(String),
    Count,
}

impl Options {
    fn slot_mut(&mut self, flag: Flag) -> &mut OptionValue {
        match flag {
            Flag::Filter => &mut self.filter,
            Flag::Count => &mut self.count,
        }
    }

    /// Filter takes precedence over count.
    pub fn command(&self) -> Option<Command> {
        if self.filter.is_set() {
            let pattern = self.filter.as_text().unwrap_or_default();
            Some(Command::Filter(pattern.to_string()))
        } else if self.count.is_set() {
            Some(Command::Count)
        } else {
            None
        }
    }
}

fn extract_value(token: &str) -> OptionValue {
    match token.split('=').nth(1) {
        Some(value) => OptionValue::Value(value.to_string()),
        None => OptionValue::Flag,
    }
}

pub fn parse_args<I, S>(tokens: I) -> Options
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = Options::default();

    for token in tokens {
        let token = token.as_ref();
        for flag in Flag::ALL {
            if token.contains(&format!("{}{}", FLAG_PREFIX, flag.name())) {
                *options.slot_mut(flag) = extract_value(token);
            }
        }
    }

    options
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_filter_argument() {
        let options = parse_args(["node", "app.js", "--filter=test"]);
        assert_eq!(options.filter, OptionValue::Value("test".to_string()));
        assert_eq!(options.count, OptionValue::Absent);
    }

    #[test]
    fn test_parse_count_argument() {
        let options = parse_args(["node", "app.js", "--count"]);
        assert_eq!(options.filter, OptionValue::Absent);
        assert_eq!(options.count, OptionValue::Flag);
    }

    #[test]
    fn test_parse_all_arguments() {
        let options = parse_args(["node", "app.js", "--filter=test", "--count"]);
        assert_eq!(options.filter, OptionValue::Value("test".to_string()));
        assert_eq!(options.count, OptionValue::Flag);
    }

    #[test]
    fn test_no_arguments() {
        let options = parse_args(["node", "app.js"]);
        assert_eq!(options, Options::default());
        assert_eq!(parse_args(Vec::<String>::new()), Options::default());
        assert_eq!(options.command(), None);
    }

    #[test]
    fn test_last_token_wins() {
        let options = parse_args(["--filter=a", "--filter=b"]);
        assert_eq!(options.filter, OptionValue::Value("b".to_string()));

        let options = parse_args(["--filter=a", "--filter"]);
        assert_eq!(options.filter, OptionValue::Flag);
    }

    #[test]
    fn test_only_second_equals_segment_is_kept() {
        let options = parse_args(["--filter=a=b"]);
        assert_eq!(options.filter, OptionValue::Value("a".to_string()));
    }

    #[test]
    fn test_flag_name_matched_as_substring() {
        let options = parse_args(["x--countries", "prefix--filter=ab"]);
        assert_eq!(options.count, OptionValue::Flag);
        assert_eq!(options.filter, OptionValue::Value("ab".to_string()));
    }

    #[test]
    fn test_unknown_tokens_ignored() {
        let options = parse_args(["--verbose", "-c", "filter", "count=3"]);
        assert_eq!(options, Options::default());
    }

    #[test]
    fn test_command_precedence() {
        let options = parse_args(["--filter=z", "--count"]);
        assert_eq!(options.command(), Some(Command::Filter("z".to_string())));

        let options = parse_args(["--count=anything"]);
        assert_eq!(options.command(), Some(Command::Count));
    }

    #[test]
    fn test_empty_value_is_not_set() {
        let options = parse_args(["--filter=", "--count"]);
        assert_eq!(options.filter, OptionValue::Value(String::new()));
        assert_eq!(options.command(), Some(Command::Count));

        assert_eq!(parse_args(["--filter="]).command(), None);
    }

    #[test]
    fn test_bare_filter_flag_reads_as_true() {
        let options = parse_args(["--filter"]);
        assert_eq!(options.command(), Some(Command::Filter("true".to_string())));
    }
}
