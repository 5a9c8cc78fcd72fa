//! Line-oriented word lists.
//!
//! One word per line, `\n` or `\r\n` terminated. The line ending after the last word is
//! optional. A `\r` anywhere but right before the `\n` belongs to the word. Words are
//! kept as raw bytes, checking that they are UTF-8 is left to
//! [`crate::letters::try_common_letters`].

use nom::bytes::complete::take_till;
use nom::character::complete::char;
use nom::combinator::eof;
use nom::multi::separated_list0;
use nom::sequence::terminated;
use nom::{Finish, IResult, Parser};

fn line(input: &[u8]) -> IResult<&[u8], &[u8]> {
    let (input, line) = take_till(|b: u8| b == b'\n')(input)?;
    Ok((input, line.strip_suffix(b"\r").unwrap_or(line)))
}

pub fn word_list(input: &[u8]) -> IResult<&[u8], Vec<&[u8]>> {
    terminated(separated_list0(char('\n'), line), eof)
        .map(|mut words: Vec<&[u8]>| {
            // The final line ending leaves an empty line behind, as does empty input.
            if words.last().map_or(false, |w| w.is_empty()) {
                words.pop();
            }
            words
        })
        .parse(input)
}

pub fn nom_error_to_lossy(e: nom::error::Error<&[u8]>) -> nom::error::Error<String> {
    let nom::error::Error { input, code } = e;
    nom::error::Error {
        input: String::from_utf8_lossy(input).into_owned(),
        code,
    }
}

// The error keeps the unparsed remainder, which has to be owned to cross a `?`.
pub fn parse_word_list(input: &[u8]) -> Result<Vec<&[u8]>, nom::error::Error<String>> {
    match word_list(input).finish() {
        Ok((_rest, words)) => Ok(words),
        Err(e) => Err(nom_error_to_lossy(e)),
    }
}
