//! DNS record validators.
//!
//! [`RecordType`] is the discriminator that selects which content rule
//! applies. Only address records are checked here:
//!
//! | Type | Content rule |
//! |---|---|
//! | `A` | parses as an IP address and is written with `.` |
//! | `AAAA` | parses as an IP address and is written with `:` |
//! | anything else | not checked |
//!
//! The separator check is what keeps an IPv6 literal out of an `A` record:
//! the parser accepts both families.

use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// RECORD TYPE
// ============================================================================

/// Supported DNS record types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    Aaaa,
    Cname,
    Txt,
    Srv,
    Loc,
    Mx,
    Ns,
    Spf,
}

impl RecordType {
    /// Every supported type, in the order they are listed to users.
    pub const ALL: [Self; 9] = [
        Self::A,
        Self::Aaaa,
        Self::Cname,
        Self::Txt,
        Self::Srv,
        Self::Loc,
        Self::Mx,
        Self::Ns,
        Self::Spf,
    ];

    /// The wire name of the type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Cname => "CNAME",
            Self::Txt => "TXT",
            Self::Srv => "SRV",
            Self::Loc => "LOC",
            Self::Mx => "MX",
            Self::Ns => "NS",
            Self::Spf => "SPF",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when text does not name a supported record type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown record type {0:?}")]
pub struct UnknownRecordType(pub String);

impl FromStr for RecordType {
    type Err = UnknownRecordType;

    /// Exact, case-sensitive match on the wire name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|record_type| record_type.as_str() == s)
            .ok_or_else(|| UnknownRecordType(s.to_owned()))
    }
}

// ============================================================================
// ADDRESS CONTENT
// ============================================================================

fn is_ip_written_with(input: &str, separator: char) -> bool {
    input.parse::<IpAddr>().is_ok() && input.contains(separator)
}

crate::validator! {
    /// Validates `A` record content: an IP address in dotted IPv4 form.
    pub Ipv4Content for str;
    rule(input) { is_ip_written_with(input, '.') }
    error(input) { ValidationError::invalid_address("A", "IPv4", input) }
    fn ipv4_content();
}

crate::validator! {
    /// Validates `AAAA` record content: an IP address in colon IPv6 form.
    pub Ipv6Content for str;
    rule(input) { is_ip_written_with(input, ':') }
    error(input) { ValidationError::invalid_address("AAAA", "IPv6", input) }
    fn ipv6_content();
}

/// Validates record content against the rule selected by `record_type`.
///
/// Types other than `A` and `AAAA`, including text that is not a known type,
/// pass unchecked.
///
/// # Examples
///
/// ```
/// use edgeconf_validator::validators::validate_record_name;
///
/// assert!(validate_record_name("A", "192.168.1.1").is_ok());
/// assert!(validate_record_name("A", "::1").is_err());
/// assert!(validate_record_name("AAAA", "::1").is_ok());
/// assert!(validate_record_name("CNAME", "anything.example.com").is_ok());
/// ```
pub fn validate_record_name(record_type: &str, value: &str) -> Result<(), ValidationError> {
    match record_type.parse::<RecordType>() {
        Ok(RecordType::A) => Ipv4Content.validate(value),
        Ok(RecordType::Aaaa) => Ipv6Content.validate(value),
        _ => Ok(()),
    }
}

// ============================================================================
// TESTS
// ============================================================================
