//! Command parsing and indicator request normalization.
//!
//! Turns the raw text of a `/rsi btc [1d]` style message plus its
//! `bot_command` entity into a fully populated [`IndicatorRequest`].

use telegram_client::MessageEntity;
use thiserror::Error;

/// Interval used when the command carries none.
const DEFAULT_INTERVAL: &str = "1d";

/// Quote asset appended to symbols given without one.
const DEFAULT_QUOTE: &str = "USDT";

/// A normalized request for one indicator fetch.
///
/// All fields are populated: `indicator` is a validated member of the
/// supported set, `symbol` always contains a `/` separator and `interval`
/// is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorRequest {
    pub indicator: String,
    pub symbol: String,
    pub interval: String,
}

impl IndicatorRequest {
    /// Reply text for a fetched indicator value, e.g. `RSI BTC/USDT 1d 27.510000`.
    pub fn reply_text(&self, value: f64) -> String {
        format!(
            "{} {} {} {:.6}",
            self.indicator.to_uppercase(),
            self.symbol.to_uppercase(),
            self.interval,
            value
        )
    }
}

/// Command parse errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unsupported indicator: {0}")]
    UnsupportedIndicator(String),

    #[error("Missing symbol argument")]
    MissingSymbol,

    #[error("Malformed command entity: offset={offset} length={length}")]
    MalformedEntity { offset: usize, length: usize },
}

/// Parse a bot-command message into an [`IndicatorRequest`].
///
/// `entity` is the platform-supplied `bot_command` entity for `text`. A
/// malformed entity (nonzero offset, zero length, or a range outside the
/// text) is a caller bug and surfaces as [`ParseError::MalformedEntity`]
/// rather than an out-of-bounds slice.
pub fn parse_indicator_request(
    text: &str,
    entity: &MessageEntity,
    supported: &[String],
) -> Result<IndicatorRequest, ParseError> {
    let malformed = ParseError::MalformedEntity {
        offset: entity.offset,
        length: entity.length,
    };

    if entity.offset != 0 || entity.length < 1 || !text.starts_with('/') {
        return Err(malformed);
    }

    // Command word without the leading marker. `get` keeps an entity that
    // overruns the text (or splits a UTF-8 character) from panicking.
    let indicator = text.get(1..entity.length).ok_or(malformed)?;

    if !supported.iter().any(|s| s == indicator) {
        return Err(ParseError::UnsupportedIndicator(indicator.to_string()));
    }

    // Everything past the command word and its separating space. A command
    // that runs to the end of the text leaves nothing here.
    let remainder = text.get(entity.length + 1..).unwrap_or("");
    if remainder.is_empty() {
        return Err(ParseError::MissingSymbol);
    }

    let tokens: Vec<&str> = remainder.split(' ').collect();

    let symbol = tokens[0];
    if symbol.is_empty() {
        return Err(ParseError::MissingSymbol);
    }

    // Exactly two tokens carry an explicit interval; anything else keeps
    // the first token as the symbol and falls back to the default.
    let interval = match tokens.as_slice() {
        [_, interval] if !interval.is_empty() => *interval,
        _ => DEFAULT_INTERVAL,
    };

    Ok(IndicatorRequest {
        indicator: indicator.to_string(),
        symbol: normalize_symbol(symbol),
        interval: interval.to_string(),
    })
}

/// Append the default quote asset to a symbol lacking a base/quote separator.
///
/// Idempotent: symbols already containing `/` pass through unchanged.
pub fn normalize_symbol(symbol: &str) -> String {
    if symbol.contains('/') {
        symbol.to_string()
    } else {
        format!("{}/{}", symbol, DEFAULT_QUOTE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command_entity(length: usize) -> MessageEntity {
        MessageEntity {
            kind: "bot_command".into(),
            offset: 0,
            length,
        }
    }

    fn supported() -> Vec<String> {
        vec!["rsi".into()]
    }

    #[test]
    fn test_symbol_without_quote_gets_default() {
        let request =
            parse_indicator_request("/rsi btc", &command_entity(4), &supported()).unwrap();

        assert_eq!(
            request,
            IndicatorRequest {
                indicator: "rsi".into(),
                symbol: "btc/USDT".into(),
                interval: "1d".into(),
            }
        );
    }

    #[test]
    fn test_explicit_symbol_and_interval_unchanged() {
        let request =
            parse_indicator_request("/rsi eth/usd 4h", &command_entity(4), &supported()).unwrap();

        assert_eq!(
            request,
            IndicatorRequest {
                indicator: "rsi".into(),
                symbol: "eth/usd".into(),
                interval: "4h".into(),
            }
        );
    }

    #[test]
    fn test_interval_defaults_with_single_argument() {
        let request =
            parse_indicator_request("/rsi sol/USDT", &command_entity(4), &supported()).unwrap();
        assert_eq!(request.interval, "1d");
        assert_eq!(request.symbol, "sol/USDT");
    }

    #[test]
    fn test_extra_tokens_keep_first_as_symbol() {
        let request =
            parse_indicator_request("/rsi btc 4h extra", &command_entity(4), &supported()).unwrap();
        assert_eq!(request.symbol, "btc/USDT");
        assert_eq!(request.interval, "1d");
    }

    #[test]
    fn test_unsupported_indicator() {
        let result = parse_indicator_request("/macd btc", &command_entity(5), &supported());
        assert_eq!(
            result,
            Err(ParseError::UnsupportedIndicator("macd".into()))
        );
    }

    #[test]
    fn test_unsupported_regardless_of_remainder() {
        let result = parse_indicator_request("/macd eth/usd 4h", &command_entity(5), &supported());
        assert!(matches!(result, Err(ParseError::UnsupportedIndicator(_))));
    }

    #[test]
    fn test_missing_symbol() {
        let result = parse_indicator_request("/rsi", &command_entity(4), &supported());
        assert_eq!(result, Err(ParseError::MissingSymbol));
    }

    #[test]
    fn test_missing_symbol_with_trailing_space() {
        let result = parse_indicator_request("/rsi ", &command_entity(4), &supported());
        assert_eq!(result, Err(ParseError::MissingSymbol));
    }

    #[test]
    fn test_entity_length_out_of_bounds() {
        let result = parse_indicator_request("/rsi btc", &command_entity(50), &supported());
        assert_eq!(
            result,
            Err(ParseError::MalformedEntity {
                offset: 0,
                length: 50
            })
        );
    }

    #[test]
    fn test_entity_with_nonzero_offset() {
        let entity = MessageEntity {
            kind: "bot_command".into(),
            offset: 3,
            length: 4,
        };
        let result = parse_indicator_request("hi /rsi btc", &entity, &supported());
        assert!(matches!(result, Err(ParseError::MalformedEntity { .. })));
    }

    #[test]
    fn test_text_without_command_marker() {
        let result = parse_indicator_request("rsi btc", &command_entity(4), &supported());
        assert!(matches!(result, Err(ParseError::MalformedEntity { .. })));
    }

    #[test]
    fn test_entity_length_off_char_boundary() {
        // 'é' is two bytes; an entity length slicing into it must not panic.
        let result = parse_indicator_request("/résumé btc", &command_entity(3), &supported());
        assert!(matches!(result, Err(ParseError::MalformedEntity { .. })));
    }

    #[test]
    fn test_injectable_command_set() {
        let commands = vec!["rsi".to_string(), "macd".to_string()];
        let request = parse_indicator_request("/macd btc", &command_entity(5), &commands).unwrap();
        assert_eq!(request.indicator, "macd");
    }

    #[test]
    fn test_command_validation_is_case_sensitive() {
        let result = parse_indicator_request("/RSI btc", &command_entity(4), &supported());
        assert_eq!(result, Err(ParseError::UnsupportedIndicator("RSI".into())));
    }

    #[test]
    fn test_normalize_symbol_idempotent() {
        let once = normalize_symbol("btc");
        let twice = normalize_symbol(&once);
        assert_eq!(once, "btc/USDT");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_reply_text_format() {
        let request = IndicatorRequest {
            indicator: "rsi".into(),
            symbol: "btc/USDT".into(),
            interval: "1d".into(),
        };
        assert_eq!(request.reply_text(27.51), "RSI BTC/USDT 1d 27.510000");
    }
}
