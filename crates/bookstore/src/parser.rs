//! Catalog file parser using nom
//!
//! File format:
//! ```text
//! # comment
//! 1 | Harry Potter | JK Rowling | 1980
//! 2 | King Athur   | Ham Hames  | 1940
//! ```
//!
//! Blank lines and `#` comments are skipped. Fields are trimmed.

use nom::{
    bytes::complete::take_till1,
    character::complete::{char, digit1, space0},
    combinator::{all_consuming, map, map_res, opt, recognize},
    sequence::{delimited, pair, tuple},
    IResult,
};

use crate::book::{Book, BookId};
use crate::error::{Error, Result};

/// Field separator
const SEPARATOR: char = '|';

fn separator(input: &str) -> IResult<&str, char> {
    delimited(space0, char(SEPARATOR), space0)(input)
}

fn id(input: &str) -> IResult<&str, BookId> {
    map_res(digit1, str::parse::<BookId>)(input)
}

fn text(input: &str) -> IResult<&str, &str> {
    map(take_till1(|c| c == SEPARATOR), str::trim_end)(input)
}

fn year(input: &str) -> IResult<&str, i32> {
    map_res(recognize(pair(opt(char('-')), digit1)), str::parse::<i32>)(input)
}

/// Parse one catalog record
///
/// The whole line must be consumed.
pub fn parse_record(input: &str) -> IResult<&str, Book> {
    let record = tuple((id, separator, text, separator, text, separator, year));

    all_consuming(map(
        delimited(space0, record, space0),
        |(id, _, title, _, author, _, year)| Book::new(id, title, author, year),
    ))(input)
}

/// Parse a whole catalog, failing on the first malformed line
pub fn parse_catalog(input: &str) -> Result<Vec<Book>> {
    let mut books = Vec::new();

    for (idx, line) in input.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let (_, book) = parse_record(line).map_err(|_| {
            Error::Parse(format!(
                "line {}: expected `id | title | author | year`, got {:?}",
                idx + 1,
                trimmed
            ))
        })?;
        books.push(book);
    }

    Ok(books)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_record() {
        let (rest, book) = parse_record("1 | Harry Potter | JK Rowling | 1980").unwrap();

        assert!(rest.is_empty());
        assert_eq!(book, Book::new(1, "Harry Potter", "JK Rowling", 1980));
    }

    #[test]
    fn test_parse_record_tight_and_padded() {
        let (_, tight) = parse_record("2|Cops|Officer Toodles|1990").unwrap();
        let (_, padded) = parse_record("  2 |   Cops\t|  Officer Toodles  | 1990  ").unwrap();

        assert_eq!(tight, padded);
        assert_eq!(padded.title, "Cops");
        assert_eq!(padded.author, "Officer Toodles");
    }

    #[test]
    fn test_parse_record_negative_year() {
        let (_, book) = parse_record("3 | The Republic | Plato | -375").unwrap();
        assert_eq!(book.year, -375);
    }

    #[test]
    fn test_parse_record_rejects_bad_lines() {
        assert!(parse_record("x | Title | Author | 1900").is_err());
        assert!(parse_record("1 | | Author | 1900").is_err());
        assert!(parse_record("1 | Title | Author").is_err());
        assert!(parse_record("1 | Title | Author | 1900 | extra").is_err());
        assert!(parse_record("1 | Title | Author | nineteen").is_err());
    }

    #[test]
    fn test_parse_catalog_skips_comments_and_blanks() {
        let input = "# books\n\n1 | A | B | 1\r\n   \n# more\n2 | C | D | 2\n";
        let books = parse_catalog(input).unwrap();

        assert_eq!(books.len(), 2);
        assert_eq!(books[0].id, 1);
        assert_eq!(books[1].title, "C");
    }

    #[test]
    fn test_parse_catalog_reports_line() {
        let input = "1 | A | B | 1\n\n3 | broken\n";
        let err = parse_catalog(input).unwrap_err();

        match err {
            Error::Parse(msg) => assert!(msg.starts_with("line 3:"), "{}", msg),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_parse_catalog_empty() {
        assert!(parse_catalog("").unwrap().is_empty());
    }
}
