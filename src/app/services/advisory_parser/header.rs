//! Bulletin header decoding
//!
//! The first three tokens of every report are the bulletin code, the issuing
//! office and the issuance time, optionally followed by a three character
//! correction code.

use super::tokens::TokenBuffer;
use crate::app::models::{Bulletin, Code};
use crate::constants::{BULLETIN_TYPES, CORRECTION_TOKEN_LEN, MIN_BULLETIN_CODE_LEN};
use crate::{Error, Result};

/// Decoded header fields
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    pub bulletin: Bulletin,
    pub issuer: String,
    /// Raw issuance time token
    pub time: String,
    pub correction: Option<String>,
}

/// Decode a bulletin code such as `WSCN31`
pub fn parse_bulletin(value: &str) -> Result<Bulletin> {
    if value.len() < MIN_BULLETIN_CODE_LEN || !value.is_ascii() {
        return Err(Error::malformed_header(format!(
            "bulletin code '{}' is too short",
            value
        )));
    }

    let type_code = &value[..2];
    let kind = BULLETIN_TYPES
        .iter()
        .find(|(code, _)| *code == type_code)
        .map(|(code, kind)| Code::new(*code, *kind))
        .ok_or_else(|| {
            Error::malformed_header(format!("unknown bulletin type '{}'", type_code))
        })?;

    let number = value[4..].parse::<u32>().map_err(|_| {
        Error::malformed_header(format!("bulletin sequence in '{}' is not numeric", value))
    })?;

    Ok(Bulletin {
        repr: value.to_string(),
        kind,
        country: value[2..4].to_string(),
        number,
    })
}

/// Consume the header tokens from the front of the buffer
///
/// The buffer is left untouched when decoding fails.
pub fn parse_header(tokens: &mut TokenBuffer) -> Result<Header> {
    if tokens.len() < 3 {
        return Err(Error::malformed_header(format!(
            "expected at least 3 header tokens, found {}",
            tokens.len()
        )));
    }

    let bulletin = parse_bulletin(tokens.get(0).unwrap_or_default())?;
    let has_correction = tokens.len() > 3
        && tokens
            .get(3)
            .is_some_and(|token| token.len() == CORRECTION_TOKEN_LEN);

    let mut consumed = tokens.take_prefix(if has_correction { 4 } else { 3 });
    let correction = has_correction.then(|| consumed.remove(3));
    let time = consumed.remove(2);
    let issuer = consumed.remove(1);

    Ok(Header {
        bulletin,
        issuer,
        time,
        correction,
    })
}
