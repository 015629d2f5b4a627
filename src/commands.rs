use combine::error::ParseError;
use combine::parser::char::{char, digit, space, spaces, string};
use combine::parser::repeat::{count_min_max, many};
use combine::parser::token::{any, eof};
use combine::{
    attempt, look_ahead,
    parser::choice::choice,
    stream::position,
    EasyParser, Parser, Stream,
};
use log::debug;

/// Commands accepted by the command bar on the home view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum HomeCommand {
    /// Append the text to the selected date. Blank text is ignored.
    Add(String),
    New,
    Goto { year: i32, month: u32, day: u32 },
    Today,
    Quit,
}

/// Matches only at the end of the word: `a` must not match `abc`.
fn boundary<Input>() -> impl Parser<Input, Output = ()>
where
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    look_ahead(space().map(|_| ()).or(eof()))
}

fn keyword<Input>(long: &'static str, short: char) -> impl Parser<Input, Output = ()>
where
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    attempt(string(long).map(|_| ()).skip(boundary()))
        .or(attempt(char(short).map(|_| ()).skip(boundary())))
}

fn number<Input>(digits: usize) -> impl Parser<Input, Output = u32>
where
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    // At most four digits, always fits.
    count_min_max(digits, digits, digit()).map(|s: String| s.parse().unwrap_or_default())
}

fn command<Input>() -> impl Parser<Input, Output = HomeCommand>
where
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    let add = keyword("add", 'a')
        .with(spaces())
        .with(many(any()))
        .map(HomeCommand::Add);
    let goto = keyword("goto", 'g')
        .with(spaces())
        .with((number(4), char('-'), number(2), char('-'), number(2)))
        .map(|(year, _, month, _, day)| HomeCommand::Goto {
            year: year as i32,
            month,
            day,
        });
    let new = keyword("new", 'n').map(|_| HomeCommand::New);
    let today = keyword("today", 't').map(|_| HomeCommand::Today);
    let quit = keyword("quit", 'q').map(|_| HomeCommand::Quit);

    spaces()
        .with(choice((add, goto, new, today, quit)))
        .skip(spaces())
        .skip(eof())
}

/// The command word is case-insensitive; the rest of the line is kept as typed.
fn normalize(input: &str) -> String {
    let trimmed = input.trim_start();
    let split = trimmed
        .find(char::is_whitespace)
        .unwrap_or(trimmed.len());
    let (head, tail) = trimmed.split_at(split);
    format!("{}{}", head.to_lowercase(), tail)
}

pub(crate) fn parse_home_command(input: &str) -> Option<HomeCommand> {
    let normalized = normalize(input);
    let mut parser = command();
    let parsed = match parser.easy_parse(position::Stream::new(normalized.as_str())) {
        Ok((out, _)) => Some(out),
        Err(e) => {
            debug!("Could not parse command {input:?}: {e}");
            None
        }
    };
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_keeps_text_as_typed() {
        assert_eq!(
            parse_home_command("add Buy Milk"),
            Some(HomeCommand::Add("Buy Milk".to_string()))
        );
        assert_eq!(
            parse_home_command("A  call  Mom"),
            Some(HomeCommand::Add("call  Mom".to_string()))
        );
    }

    #[test]
    fn add_without_text_parses_empty() {
        assert_eq!(
            parse_home_command("add"),
            Some(HomeCommand::Add(String::new()))
        );
    }

    #[test]
    fn goto_parses_fixed_width_date() {
        assert_eq!(
            parse_home_command("goto 2024-01-05"),
            Some(HomeCommand::Goto {
                year: 2024,
                month: 1,
                day: 5
            })
        );
        assert_eq!(
            parse_home_command("G 1999-12-31 "),
            Some(HomeCommand::Goto {
                year: 1999,
                month: 12,
                day: 31
            })
        );
        assert_eq!(parse_home_command("goto 2024-1-5"), None);
        assert_eq!(parse_home_command("goto tomorrow"), None);
    }

    #[test]
    fn short_and_long_words() {
        for (input, expected) in [
            ("new", HomeCommand::New),
            ("n", HomeCommand::New),
            ("today", HomeCommand::Today),
            (" T ", HomeCommand::Today),
            ("quit", HomeCommand::Quit),
            ("Q", HomeCommand::Quit),
        ] {
            assert_eq!(parse_home_command(input), Some(expected), "{input}");
        }
    }

    #[test]
    fn unknown_words_are_rejected() {
        assert_eq!(parse_home_command(""), None);
        assert_eq!(parse_home_command("nope"), None);
        assert_eq!(parse_home_command("today later"), None);
        assert_eq!(parse_home_command("added"), None);
    }
}
