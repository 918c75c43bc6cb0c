//! Region name decoding

use super::tokens::TokenBuffer;
use crate::constants::{FROM_MARKER, REGION_MARKERS};

/// Consume the region name from the front of the buffer
///
/// The name runs through the first `FIR` or `CTA` marker, or up to a `FROM`
/// marker which stays in the buffer for the boundary pass. Without any marker
/// the name is the run of leading two letter state codes. Returns an empty
/// string when neither form is present.
pub fn parse_region(tokens: &mut TokenBuffer) -> String {
    let name_end = match tokens.first_index(REGION_MARKERS) {
        Some(index) if tokens.get(index) == Some(FROM_MARKER) => index,
        Some(index) => index + 1,
        None => tokens
            .as_slice()
            .iter()
            .take_while(|token| token.len() == 2)
            .count(),
    };
    tokens.take_prefix(name_end).join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fir_region_includes_marker() {
        let mut tokens = TokenBuffer::from_text("RJJJ FUKUOKA FIR EMBD TS");
        assert_eq!(parse_region(&mut tokens), "RJJJ FUKUOKA FIR");
        assert_eq!(tokens.join(), "EMBD TS");
    }

    #[test]
    fn test_from_marker_stays_in_stream() {
        let mut tokens = TokenBuffer::from_text("NE OH FROM 20E ROD TO CVG");
        assert_eq!(parse_region(&mut tokens), "NE OH");
        assert_eq!(tokens.join(), "FROM 20E ROD TO CVG");
    }

    #[test]
    fn test_state_list_fallback() {
        let mut tokens = TokenBuffer::from_text("MN WI IA SEV TURB");
        assert_eq!(parse_region(&mut tokens), "MN WI IA");
        assert_eq!(tokens.join(), "SEV TURB");
    }

    #[test]
    fn test_no_region() {
        let mut tokens = TokenBuffer::from_text("SEV TURB");
        assert_eq!(parse_region(&mut tokens), "");
        assert_eq!(tokens.len(), 2);
    }
}
