//! Hex text parsing for frame and code arguments.

use knxcemi_frame::MessageCode;

use crate::exit::{CliError, CliResult, DATA_INVALID, USAGE};

/// Decode hex text, ignoring whitespace and `:`/`-` separators.
pub fn parse_hex(input: &str) -> CliResult<Vec<u8>> {
    let digits: String = input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':' && *c != '-')
        .collect();
    let digits = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
        .unwrap_or(&digits);

    hex::decode(digits)
        .map_err(|err| CliError::new(DATA_INVALID, format!("invalid hex {input:?}: {err}")))
}

/// Parse a message code given as a name, `0x` hex or decimal.
pub fn parse_code(input: &str) -> CliResult<MessageCode> {
    let input = input.trim();
    if let Some(code) = MessageCode::from_name(input) {
        return Ok(code);
    }

    let parsed = match input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
    {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => input.parse::<u8>(),
    };

    parsed
        .map(MessageCode)
        .map_err(|_| CliError::new(USAGE, format!("invalid message code: {input}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_accepts_separators() {
        assert_eq!(parse_hex("2b 01:02-03").unwrap(), vec![0x2B, 0x01, 0x02, 0x03]);
        assert_eq!(parse_hex("0x2B0102").unwrap(), vec![0x2B, 0x01, 0x02]);
        assert_eq!(parse_hex("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn parse_hex_rejects_bad_input() {
        assert_eq!(parse_hex("2b0").unwrap_err().code, DATA_INVALID);
        assert_eq!(parse_hex("zz").unwrap_err().code, DATA_INVALID);
    }

    #[test]
    fn parse_code_forms() {
        assert_eq!(parse_code("LBusmonInd").unwrap(), MessageCode::L_BUSMON_IND);
        assert_eq!(parse_code("0x2e").unwrap(), MessageCode::L_DATA_CON);
        assert_eq!(parse_code("17").unwrap(), MessageCode::L_DATA_REQ);
        assert_eq!(parse_code("0xfc").unwrap(), MessageCode(0xFC));
    }

    #[test]
    fn parse_code_rejects_out_of_range() {
        assert_eq!(parse_code("256").unwrap_err().code, USAGE);
        assert_eq!(parse_code("LPollData").unwrap_err().code, USAGE);
    }
}
