//! 80-column FITS header cards.

use disk_common::{DiskError, DiskResult};

/// Length of one header card in bytes.
pub const CARD_LEN: usize = 80;

/// Longest string value that fits on a single card.
const MAX_STRING_LEN: usize = 68;

/// A keyword value.
#[derive(Debug, Clone, PartialEq)]
pub enum CardValue {
    Logical(bool),
    Integer(i64),
    Real(f64),
    Text(String),
}

/// One header card: keyword, value and optional comment.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub keyword: String,
    pub value: Option<CardValue>,
    pub comment: Option<String>,
}

impl Card {
    pub fn logical(keyword: &str, value: bool) -> Self {
        Self::with_value(keyword, CardValue::Logical(value))
    }

    pub fn integer(keyword: &str, value: i64) -> Self {
        Self::with_value(keyword, CardValue::Integer(value))
    }

    pub fn real(keyword: &str, value: f64) -> Self {
        Self::with_value(keyword, CardValue::Real(value))
    }

    pub fn text(keyword: &str, value: impl Into<String>) -> Self {
        Self::with_value(keyword, CardValue::Text(value.into()))
    }

    /// The END card that terminates a header.
    pub fn end() -> Self {
        Self {
            keyword: "END".to_string(),
            value: None,
            comment: None,
        }
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    fn with_value(keyword: &str, value: CardValue) -> Self {
        Self {
            keyword: keyword.to_string(),
            value: Some(value),
            comment: None,
        }
    }

    /// Render the card as exactly 80 ASCII bytes.
    ///
    /// Fixed-format layout: keyword in columns 1-8, `= ` in 9-10, numeric and
    /// logical values right-justified to column 30, strings quoted from
    /// column 11. Comments are truncated to fit.
    pub fn to_bytes(&self) -> DiskResult<[u8; CARD_LEN]> {
        validate_keyword(&self.keyword)?;

        let mut text = format!("{:<8}", self.keyword);
        if let Some(value) = &self.value {
            text.push_str("= ");
            text.push_str(&format_value(&self.keyword, value)?);
        }
        if text.len() > CARD_LEN {
            return Err(DiskError::fits(format!(
                "value for {} does not fit on one card",
                self.keyword
            )));
        }
        if let Some(comment) = &self.comment {
            if !comment.is_ascii() {
                return Err(DiskError::fits(format!(
                    "comment for {} is not ASCII",
                    self.keyword
                )));
            }
            text.push_str(" / ");
            text.push_str(comment);
        }
        // Only the comment can run past the card.
        text.truncate(CARD_LEN);

        let mut card = [b' '; CARD_LEN];
        card[..text.len()].copy_from_slice(text.as_bytes());
        Ok(card)
    }
}

fn validate_keyword(keyword: &str) -> DiskResult<()> {
    let valid = !keyword.is_empty()
        && keyword.len() <= 8
        && keyword
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit() || b == b'-' || b == b'_');
    if valid {
        Ok(())
    } else {
        Err(DiskError::fits(format!("invalid keyword '{}'", keyword)))
    }
}

fn format_value(keyword: &str, value: &CardValue) -> DiskResult<String> {
    let formatted = match value {
        CardValue::Logical(b) => format!("{:>20}", if *b { "T" } else { "F" }),
        CardValue::Integer(n) => format!("{:>20}", n),
        CardValue::Real(v) => {
            if !v.is_finite() {
                return Err(DiskError::fits(format!(
                    "{} = {} cannot be stored in a header",
                    keyword, v
                )));
            }
            format!("{:>20}", format!("{:.12E}", v))
        }
        CardValue::Text(s) => {
            // Quotes are escaped by doubling; the limit applies to the escaped text.
            let escaped = s.replace('\'', "''");
            if !s.is_ascii() || escaped.len() > MAX_STRING_LEN {
                return Err(DiskError::fits(format!(
                    "string value for {} must be ASCII and at most {} characters once quotes are escaped",
                    keyword, MAX_STRING_LEN
                )));
            }
            // Strings are padded to 8 characters.
            format!("'{:<8}'", escaped)
        }
    };
    Ok(formatted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(card: &Card) -> String {
        String::from_utf8(card.to_bytes().unwrap().to_vec()).unwrap()
    }

    #[test]
    fn test_logical_card_layout() {
        let text = render(&Card::logical("SIMPLE", true));
        assert_eq!(text.len(), 80);
        assert_eq!(&text[..10], "SIMPLE  = ");
        assert_eq!(&text[29..30], "T");
        assert!(text[30..].trim().is_empty());
    }

    #[test]
    fn test_integer_right_justified() {
        let text = render(&Card::integer("NAXIS1", 256));
        assert_eq!(&text[..30], "NAXIS1  =                  256");
    }

    #[test]
    fn test_real_value_parses_back() {
        let text = render(&Card::real("INCLIN", 60.0).comment("deg"));
        let value: f64 = text[10..30].trim().parse().unwrap();
        assert_eq!(value, 60.0);
        assert!(text.contains(" / deg"));
    }

    #[test]
    fn test_text_value_quoted() {
        let text = render(&Card::text("BUNIT", "arcsec"));
        assert_eq!(&text[..20], "BUNIT   = 'arcsec  '");
    }

    #[test]
    fn test_end_card() {
        let text = render(&Card::end());
        assert_eq!(text.trim_end(), "END");
    }

    #[test]
    fn test_rejects_bad_keyword_and_infinite_real() {
        assert!(Card::integer("toolongkey", 1).to_bytes().is_err());
        assert!(Card::integer("lower", 1).to_bytes().is_err());
        assert!(Card::real("RMAX", f64::INFINITY).to_bytes().is_err());
    }

    #[test]
    fn test_quoted_text_at_limit_keeps_closing_quote() {
        // 58 characters + 5 quotes escaped to 10 = 68, exactly the limit.
        let value = format!("{}{}", "a".repeat(58), "'".repeat(5));
        let text = render(&Card::text("OBJECT", value));
        assert_eq!(text.len(), 80);
        assert!(text.ends_with(&format!("{}'", "'".repeat(10))));
        assert_eq!(&text[..11], "OBJECT  = '");
    }

    #[test]
    fn test_quoted_text_over_limit_rejected() {
        let value = format!("{}{}", "a".repeat(59), "'".repeat(9));
        let err = Card::text("OBJECT", value).to_bytes().unwrap_err();
        assert_eq!(err.kind(), "Fits");

        let value = format!("{}{}", "a".repeat(58), "'".repeat(10));
        assert!(Card::text("OBJECT", value).to_bytes().is_err());

        assert!(Card::text("OBJECT", "b".repeat(69)).to_bytes().is_err());
        assert!(Card::text("OBJECT", "b".repeat(68)).to_bytes().is_ok());
    }

    #[test]
    fn test_long_comment_truncated() {
        let card = Card::integer("NAXIS", 2).comment("x".repeat(100));
        assert_eq!(card.to_bytes().unwrap().len(), 80);
    }
}
