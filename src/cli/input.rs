//! Input: parsing one line of barren land coordinates.

use crate::error::InputError;
use crate::field::{Point, Rect};

/// What a line typed at the prompt asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Carve a rectangle from its bottom-left and top-right corners.
    Barren {
        /// Bottom-left corner.
        bottom: Point,
        /// Top-right corner.
        top: Point,
    },
    /// No more barren land; run the analysis.
    Analyse,
}

/// Parse a line of four whitespace-separated integers.
///
/// A blank line means the user is done. The first two integers are the
/// bottom-left corner and the last two the top-right corner; corners in
/// any other order are rejected here, before the field sees them.
pub fn parse_line(line: &str) -> Result<Command, InputError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(Command::Analyse);
    }
    let [x1, y1, x2, y2] = tokens[..] else {
        return Err(InputError::TokenCount(tokens.len()));
    };

    let bottom = Point::new(parse_int(x1)?, parse_int(y1)?);
    let top = Point::new(parse_int(x2)?, parse_int(y2)?);

    if !Rect::is_bottom_left_to_top_right(bottom, top) {
        return Err(InputError::InvertedCorners { bottom, top });
    }
    Ok(Command::Barren { bottom, top })
}

fn parse_int(token: &str) -> Result<i32, InputError> {
    token
        .parse()
        .map_err(|_| InputError::NotAnInteger(token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_line_analyses() {
        assert_eq!(parse_line(""), Ok(Command::Analyse));
        assert_eq!(parse_line("   \t "), Ok(Command::Analyse));
    }

    #[test]
    fn test_valid_line() {
        assert_eq!(
            parse_line("  48 192   351 207 "),
            Ok(Command::Barren {
                bottom: Point::new(48, 192),
                top: Point::new(351, 207),
            })
        );
    }

    #[test]
    fn test_top_corner_uses_last_two_tokens() {
        assert_eq!(
            parse_line("1 2 3 4"),
            Ok(Command::Barren {
                bottom: Point::new(1, 2),
                top: Point::new(3, 4),
            })
        );
    }

    #[test]
    fn test_wrong_token_count() {
        assert_eq!(parse_line("1 2 3"), Err(InputError::TokenCount(3)));
        assert_eq!(parse_line("1 2 3 4 5"), Err(InputError::TokenCount(5)));
    }

    #[test]
    fn test_not_an_integer() {
        assert_eq!(
            parse_line("1 2 three 4"),
            Err(InputError::NotAnInteger("three".to_string()))
        );
        assert!(matches!(
            parse_line("1 2 3 4.5"),
            Err(InputError::NotAnInteger(_))
        ));
    }

    #[test]
    fn test_inverted_corners() {
        assert!(matches!(
            parse_line("28 2 20 7"),
            Err(InputError::InvertedCorners { .. })
        ));
        assert!(matches!(
            parse_line("1 25 16 16"),
            Err(InputError::InvertedCorners { .. })
        ));
    }

    #[test]
    fn test_negative_values_reach_the_field() {
        // bounds are the field's concern, not the parser's
        assert_eq!(
            parse_line("-1 3 4 5"),
            Ok(Command::Barren {
                bottom: Point::new(-1, 3),
                top: Point::new(4, 5),
            })
        );
    }
}
