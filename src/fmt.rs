//! Pattern-based date formatting with Latin or Persian output.
//!
//! Patterns are built from run-length tokens:
//!
//! * `yyyy` - the full year
//! * `mm` / `m` - month number, zero-padded or bare
//! * `M` - month name
//! * `dd` / `d` - day of month, zero-padded or bare
//! * ` `, `/`, `-` - literal separators, repeated as written
//!
//! Any other character is rejected when the formatter is built. The bare
//! `m` and `d` tokens refuse to render values below 10, since that would
//! silently change the width the pattern promised.

use std::fmt::Write;

use thiserror::Error;

use crate::date::JalaliDate;

/// Output language for formatted dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// Latin digits and transliterated month names.
    #[default]
    English,
    /// Eastern Arabic-Indic digits and Persian month names.
    Persian,
}

/// Errors raised while parsing a pattern or applying it to a date.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PatternError {
    /// The pattern contains a character with no assigned meaning.
    #[error("unsupported pattern character `{0}`")]
    UnsupportedCharacter(char),
    /// A field letter was repeated a number of times that has no meaning,
    /// for example `yy` or `mmm`.
    #[error("`{letter}` repeated {count} times has no meaning")]
    InvalidTokenLength {
        /// The repeated field letter.
        letter: char,
        /// How many times it appeared.
        count: usize,
    },
    /// A bare `m` or `d` met a value below 10, which it cannot render
    /// without changing width.
    #[error("single `{letter}` cannot format the value {value}")]
    FieldWidthMismatch {
        /// The offending field letter.
        letter: char,
        /// The value that did not fit.
        value: i32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Year,
    MonthNumber { padded: bool },
    MonthName,
    Day { padded: bool },
    Separator { ch: char, count: usize },
}

/// A compiled date pattern.
///
/// # Example
///
/// ```
/// use jalali_calendar::{JalaliDate, JalaliDateFormatter, Language};
///
/// let date = JalaliDate::new(1370, 11, 28)?;
/// let latin = JalaliDateFormatter::new("yyyy/mm/dd")?;
/// assert_eq!(date.format(&latin)?, "1370/11/28");
///
/// let persian = JalaliDateFormatter::with_language("yyyy/mm/dd", Language::Persian)?;
/// assert_eq!(date.format(&persian)?, "۱۳۷۰/۱۱/۲۸");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct JalaliDateFormatter {
    fields: Vec<Field>,
    language: Language,
}

impl JalaliDateFormatter {
    /// Compiles a pattern with English output.
    pub fn new(pattern: &str) -> Result<JalaliDateFormatter, PatternError> {
        Self::with_language(pattern, Language::English)
    }

    /// Compiles a pattern with the given output language.
    ///
    /// # Arguments
    ///
    /// * `pattern` - The pattern string, see the module docs for tokens
    /// * `language` - Digit set and month-name language of the output
    ///
    /// # Returns
    ///
    /// The compiled formatter, or the first problem found in the pattern
    pub fn with_language(
        pattern: &str,
        language: Language,
    ) -> Result<JalaliDateFormatter, PatternError> {
        let fields = parse_pattern(pattern)?;
        Ok(JalaliDateFormatter { fields, language })
    }

    /// Renders a date with this pattern.
    ///
    /// With Persian output and a month-name field in the pattern, the
    /// fields are emitted in reverse order so the line reads naturally
    /// right to left; digits are always mapped to the Persian set.
    pub fn format(&self, date: &JalaliDate) -> Result<String, PatternError> {
        let mut result = String::new();

        let reversed = self.language == Language::Persian
            && self.fields.iter().any(|f| *f == Field::MonthName);
        if reversed {
            for field in self.fields.iter().rev() {
                self.apply(&mut result, *field, date)?;
            }
        } else {
            for field in &self.fields {
                self.apply(&mut result, *field, date)?;
            }
        }

        if self.language == Language::Persian {
            result = result.chars().map(to_persian_digit).collect();
        }
        Ok(result)
    }

    fn apply(
        &self,
        out: &mut String,
        field: Field,
        date: &JalaliDate,
    ) -> Result<(), PatternError> {
        match field {
            Field::Year => {
                // Infallible for String.
                let _ = write!(out, "{}", date.year());
            }
            Field::MonthNumber { padded } => {
                push_numeric(out, 'm', date.month().number(), padded)?;
            }
            Field::Day { padded } => {
                push_numeric(out, 'd', date.day(), padded)?;
            }
            Field::MonthName => {
                out.push_str(match self.language {
                    Language::English => date.month().name_english(),
                    Language::Persian => date.month().name_persian(),
                });
            }
            Field::Separator { ch, count } => {
                for _ in 0..count {
                    out.push(ch);
                }
            }
        }
        Ok(())
    }
}

fn push_numeric(
    out: &mut String,
    letter: char,
    value: i32,
    padded: bool,
) -> Result<(), PatternError> {
    if padded {
        let _ = write!(out, "{value:02}");
    } else if value < 10 {
        return Err(PatternError::FieldWidthMismatch { letter, value });
    } else {
        let _ = write!(out, "{value}");
    }
    Ok(())
}

fn parse_pattern(pattern: &str) -> Result<Vec<Field>, PatternError> {
    let chars: Vec<char> = pattern.chars().collect();
    let mut fields = Vec::new();
    let mut pos = 0;

    while pos < chars.len() {
        let cur = chars[pos];
        let start = pos;
        while pos < chars.len() && chars[pos] == cur {
            pos += 1;
        }
        let count = pos - start;

        let field = match cur {
            'y' => {
                if count != 4 {
                    return Err(PatternError::InvalidTokenLength { letter: 'y', count });
                }
                Field::Year
            }
            'm' => match count {
                1 => Field::MonthNumber { padded: false },
                2 => Field::MonthNumber { padded: true },
                _ => return Err(PatternError::InvalidTokenLength { letter: 'm', count }),
            },
            'M' => {
                if count != 1 {
                    return Err(PatternError::InvalidTokenLength { letter: 'M', count });
                }
                Field::MonthName
            }
            'd' => match count {
                1 => Field::Day { padded: false },
                2 => Field::Day { padded: true },
                _ => return Err(PatternError::InvalidTokenLength { letter: 'd', count }),
            },
            ' ' | '/' | '-' => Field::Separator { ch: cur, count },
            other => return Err(PatternError::UnsupportedCharacter(other)),
        };
        fields.push(field);
    }
    Ok(fields)
}

fn to_persian_digit(ch: char) -> char {
    match ch {
        '0' => '\u{06F0}',
        '1' => '\u{06F1}',
        '2' => '\u{06F2}',
        '3' => '\u{06F3}',
        '4' => '\u{06F4}',
        '5' => '\u{06F5}',
        '6' => '\u{06F6}',
        '7' => '\u{06F7}',
        '8' => '\u{06F8}',
        '9' => '\u{06F9}',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: i32, d: i32) -> JalaliDate {
        JalaliDate::new(y, m, d).unwrap()
    }

    #[test]
    fn english_numeric_patterns() {
        let f = JalaliDateFormatter::new("yyyy/mm/dd").unwrap();
        assert_eq!(f.format(&date(1370, 11, 28)).unwrap(), "1370/11/28");
        assert_eq!(f.format(&date(1394, 5, 6)).unwrap(), "1394/05/06");

        let f = JalaliDateFormatter::new("yyyy-mm-dd").unwrap();
        assert_eq!(f.format(&date(1370, 11, 28)).unwrap(), "1370-11-28");
    }

    #[test]
    fn month_name_in_english() {
        let f = JalaliDateFormatter::new("yyyy M dd").unwrap();
        assert_eq!(f.format(&date(1370, 11, 28)).unwrap(), "1370 Bahman 28");
    }

    #[test]
    fn persian_digits_without_month_name_keep_field_order() {
        let f = JalaliDateFormatter::with_language("yyyy/mm/dd", Language::Persian).unwrap();
        assert_eq!(f.format(&date(1370, 11, 28)).unwrap(), "۱۳۷۰/۱۱/۲۸");
        assert_eq!(f.format(&date(1394, 5, 6)).unwrap(), "۱۳۹۴/۰۵/۰۶");
    }

    #[test]
    fn persian_month_name_reverses_field_order() {
        let f = JalaliDateFormatter::with_language("yyyy/M/dd", Language::Persian).unwrap();
        assert_eq!(f.format(&date(1370, 11, 28)).unwrap(), "۲۸/بهمن/۱۳۷۰");
    }

    #[test]
    fn bare_tokens_refuse_small_values() {
        let f = JalaliDateFormatter::new("yyyy/m/d").unwrap();
        assert_eq!(f.format(&date(1370, 11, 28)).unwrap(), "1370/11/28");
        assert_eq!(
            f.format(&date(1394, 5, 28)),
            Err(PatternError::FieldWidthMismatch {
                letter: 'm',
                value: 5,
            })
        );
        assert_eq!(
            f.format(&date(1394, 11, 6)),
            Err(PatternError::FieldWidthMismatch {
                letter: 'd',
                value: 6,
            })
        );
    }

    #[test]
    fn invalid_patterns_fail_at_construction() {
        assert_eq!(
            JalaliDateFormatter::new("yy/mm/dd").unwrap_err(),
            PatternError::InvalidTokenLength {
                letter: 'y',
                count: 2,
            }
        );
        assert_eq!(
            JalaliDateFormatter::new("yyyy.mm.dd").unwrap_err(),
            PatternError::UnsupportedCharacter('.')
        );
        assert_eq!(
            JalaliDateFormatter::new("yyyy/MM/dd").unwrap_err(),
            PatternError::InvalidTokenLength {
                letter: 'M',
                count: 2,
            }
        );
        // Letters outside the token set are rejected rather than skipped.
        assert_eq!(
            JalaliDateFormatter::new("yyyy x dd").unwrap_err(),
            PatternError::UnsupportedCharacter('x')
        );
    }

    #[test]
    fn repeated_separators_are_kept() {
        let f = JalaliDateFormatter::new("yyyy--mm  dd").unwrap();
        assert_eq!(f.format(&date(1370, 11, 28)).unwrap(), "1370--11  28");
    }
}
