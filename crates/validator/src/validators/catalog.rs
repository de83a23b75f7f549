//! Typed validators for every catalogued attribute.
//!
//! Each factory returns a ready-to-use validator over a process-wide
//! allowed-value set. The sets are listed in the order users see them in
//! error messages.

use std::borrow::Cow;
use std::sync::LazyLock;

use indexmap::IndexSet;

use super::membership::OneOf;
use super::range::Max;
use super::record::RecordType;

/// Longest accepted TTL, in seconds (one year).
pub const MAX_TTL: i64 = 31_536_000;

/// Allowed page-rule statuses.
pub const PAGE_RULE_STATUSES: &[&str] = &["active", "paused"];

/// Allowed cache levels.
pub const CACHE_LEVELS: &[&str] = &["bypass", "basic", "simplified", "aggressive", "cache_everything"];

/// Allowed forwarding (redirect) status codes.
pub const FORWARD_STATUS_CODES: &[i64] = &[301, 302];

/// Allowed values of an on/off toggle.
pub const ON_OFF: &[&str] = &["on", "off"];

/// Allowed rocket-loader modes.
pub const ROCKET_LOADER_MODES: &[&str] = &["off", "manual", "automatic"];

/// Allowed security levels.
pub const SECURITY_LEVELS: &[&str] = &["essentially_off", "low", "medium", "high", "under_attack"];

/// Allowed SSL modes.
pub const SSL_MODES: &[&str] = &["off", "flexible", "full", "strict"];

fn lookup<T: Copy + std::hash::Hash + Eq>(values: &[T]) -> IndexSet<T> {
    values.iter().copied().collect()
}

static RECORD_TYPE_SET: LazyLock<IndexSet<&'static str>> =
    LazyLock::new(|| RecordType::ALL.iter().map(|t| t.as_str()).collect());
static PAGE_RULE_STATUS_SET: LazyLock<IndexSet<&'static str>> =
    LazyLock::new(|| lookup(PAGE_RULE_STATUSES));
static CACHE_LEVEL_SET: LazyLock<IndexSet<&'static str>> = LazyLock::new(|| lookup(CACHE_LEVELS));
static FORWARD_STATUS_CODE_SET: LazyLock<IndexSet<i64>> =
    LazyLock::new(|| lookup(FORWARD_STATUS_CODES));
static ON_OFF_SET: LazyLock<IndexSet<&'static str>> = LazyLock::new(|| lookup(ON_OFF));
static ROCKET_LOADER_SET: LazyLock<IndexSet<&'static str>> =
    LazyLock::new(|| lookup(ROCKET_LOADER_MODES));
static SECURITY_LEVEL_SET: LazyLock<IndexSet<&'static str>> =
    LazyLock::new(|| lookup(SECURITY_LEVELS));
static SSL_MODE_SET: LazyLock<IndexSet<&'static str>> = LazyLock::new(|| lookup(SSL_MODES));

/// DNS record type: A, AAAA, CNAME, TXT, SRV, LOC, MX, NS or SPF.
#[must_use]
pub fn record_type() -> OneOf<&'static str> {
    OneOf::new("Record type", &RECORD_TYPE_SET)
}

/// Page-rule status: active or paused.
#[must_use]
pub fn page_rule_status() -> OneOf<&'static str> {
    OneOf::new("Page rule status", &PAGE_RULE_STATUS_SET)
}

/// Cache level.
#[must_use]
pub fn cache_level() -> OneOf<&'static str> {
    OneOf::new("Cache level", &CACHE_LEVEL_SET)
}

/// Forwarding status code: 301 or 302.
#[must_use]
pub fn forward_status_code() -> OneOf<i64> {
    OneOf::new("Forwarding status code", &FORWARD_STATUS_CODE_SET)
}

/// On/off toggle. Toggles have no descriptive name of their own, so the
/// attribute key doubles as the label.
#[must_use]
pub fn on_off(label: impl Into<Cow<'static, str>>) -> OneOf<&'static str> {
    OneOf::new(label, &ON_OFF_SET)
}

/// Rocket-loader mode.
#[must_use]
pub fn rocket_loader() -> OneOf<&'static str> {
    OneOf::new("Rocket loader", &ROCKET_LOADER_SET)
}

/// Security level.
#[must_use]
pub fn security_level() -> OneOf<&'static str> {
    OneOf::new("Security level", &SECURITY_LEVEL_SET)
}

/// SSL mode.
#[must_use]
pub fn ssl_mode() -> OneOf<&'static str> {
    OneOf::new("SSL mode", &SSL_MODE_SET)
}

/// Cache TTL, capped at [`MAX_TTL`]. No lower bound is enforced.
#[must_use]
pub fn ttl() -> Max<i64> {
    Max::new("Cache TTL", MAX_TTL)
}
