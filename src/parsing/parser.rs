//! Tokenizing and validating normalized input.

use super::error::{ParseError, ParseResult};
use super::normalize::normalize;
use crate::models::{mask_prefix_len, SubnetSpec, MAX_LENGTH};
use std::net::Ipv4Addr;
use std::str::FromStr;

const FORMAT_HINT: &str = "Expected 'IP/CIDR' or 'IP MASK', \
    e.g. '192.168.1.10/24' or '192.168.1.10 255.255.255.0'.";

/// Parse free-form input into a validated [`SubnetSpec`].
///
/// Accepts `IP/PREFIX` and `IP MASK`, with `-` or `:` allowed in place of
/// either separator.
///
/// # Examples
/// ```
/// use subnet_explain::parsing::parse_subnet;
/// let spec = parse_subnet("192.168.1.10 255.255.255.0").unwrap();
/// assert_eq!(spec.to_string(), "192.168.1.10/24");
/// ```
pub fn parse_subnet(input: &str) -> ParseResult<SubnetSpec> {
    let normalized = normalize(input);
    log::debug!("normalize({input:?}) -> {normalized:?}");

    let (ip_token, mask_token) = tokenize(input, &normalized)?;
    let addr = parse_ip(ip_token)?;
    let prefix = parse_mask_or_prefix(input, mask_token)?;

    SubnetSpec::new(addr, prefix)
}

/// Split normalized input into `(ip, mask-or-prefix)`.
///
/// Splits on `/` when present, otherwise on whitespace. `input` is only used
/// for the error message.
pub fn tokenize<'a>(input: &str, normalized: &'a str) -> ParseResult<(&'a str, &'a str)> {
    let tokens: Vec<&str> = if normalized.contains('/') {
        normalized.split('/').collect()
    } else {
        normalized.split_whitespace().collect()
    };

    match tokens[..] {
        [ip, mask] if !ip.is_empty() && !mask.is_empty() => Ok((ip, mask)),
        _ => Err(ParseError::bad_format(input, FORMAT_HINT)),
    }
}

/// Validate a dotted-quad address token.
pub fn parse_ip(token: &str) -> ParseResult<Ipv4Addr> {
    Ipv4Addr::from_str(token).map_err(|_| ParseError::InvalidIpAddress {
        token: token.to_string(),
    })
}

/// Validate the second token and return the prefix length it stands for.
pub fn parse_mask_or_prefix(input: &str, token: &str) -> ParseResult<u8> {
    if token.contains('.') {
        let mask = Ipv4Addr::from_str(token).map_err(|_| ParseError::InvalidSubnetMask {
            token: token.to_string(),
        })?;
        return mask_prefix_len(mask).ok_or_else(|| ParseError::NonContiguousMask {
            token: token.to_string(),
        });
    }

    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::bad_format(
            input,
            format!("'{token}' is neither a netmask nor a prefix length."),
        ));
    }

    match token.parse::<u8>() {
        Ok(prefix) if prefix <= MAX_LENGTH => Ok(prefix),
        _ => Err(ParseError::PrefixOutOfRange {
            token: token.to_string(),
        }),
    }
}
