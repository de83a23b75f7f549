//! Property-based tests for edgeconf-validator.

use edgeconf_validator::hooks;
use edgeconf_validator::prelude::{
    CACHE_LEVELS, FORWARD_STATUS_CODES, MAX_TTL, SSL_MODES, Validate, cache_level,
    forward_status_code, is_one_of, is_true, on_off, record_type, security_level, ssl_mode, ttl,
    validate_record_name,
};
use proptest::prelude::*;

// ============================================================================
// IDEMPOTENCY: validate(x) == validate(x)
// ============================================================================

proptest! {
    #[test]
    fn cache_level_idempotent(s in ".*") {
        let v = cache_level();
        prop_assert_eq!(v.validate(&*s), v.validate(&*s));
    }

    #[test]
    fn ttl_idempotent(n in any::<i64>()) {
        let v = ttl();
        prop_assert_eq!(v.validate(&n), v.validate(&n));
    }

    #[test]
    fn forward_status_code_idempotent(n in any::<i64>()) {
        let v = forward_status_code();
        prop_assert_eq!(v.validate(&n), v.validate(&n));
    }

    #[test]
    fn is_true_idempotent(b in any::<bool>()) {
        let v = is_true();
        prop_assert_eq!(v.validate(&b), v.validate(&b));
    }

    #[test]
    fn on_off_idempotent(s in ".{0,12}") {
        let v = on_off("always_online");
        prop_assert_eq!(v.validate(&*s), v.validate(&*s));
    }

    #[test]
    fn record_type_idempotent(s in "[A-Za-z]{0,6}") {
        let v = record_type();
        prop_assert_eq!(v.validate(&*s), v.validate(&*s));
    }

    #[test]
    fn security_level_idempotent(s in ".{0,16}") {
        let v = security_level();
        prop_assert_eq!(v.validate(&*s), v.validate(&*s));
    }

    #[test]
    fn hooks_idempotent(s in ".{0,12}", n in any::<i64>()) {
        prop_assert_eq!(
            hooks::validate_page_rule_status(&s, "status"),
            hooks::validate_page_rule_status(&s, "status")
        );
        prop_assert_eq!(
            hooks::validate_rocket_loader(&s, "rocket_loader"),
            hooks::validate_rocket_loader(&s, "rocket_loader")
        );
        prop_assert_eq!(hooks::validate_ssl(&s, "ssl"), hooks::validate_ssl(&s, "ssl"));
        prop_assert_eq!(hooks::validate_ttl(n, "ttl"), hooks::validate_ttl(n, "ttl"));
    }

    #[test]
    fn record_name_idempotent(t in "A|AAAA|CNAME|.{0,5}", s in ".{0,40}") {
        prop_assert_eq!(validate_record_name(&t, &s), validate_record_name(&t, &s));
    }
}

// ============================================================================
// MEMBERSHIP: passes iff the value is in the allowed set
// ============================================================================

proptest! {
    #[test]
    fn cache_level_passes_iff_member(s in "[a-z_]{0,20}") {
        let expected = CACHE_LEVELS.contains(&s.as_str());
        prop_assert_eq!(cache_level().validate(&*s).is_ok(), expected);
    }

    #[test]
    fn ssl_mode_passes_iff_member(s in "(off|flexible|full|strict|Off|FULL| full|strict )") {
        let expected = SSL_MODES.contains(&s.as_str());
        prop_assert_eq!(ssl_mode().validate(&*s).is_ok(), expected);
    }

    #[test]
    fn forward_status_code_is_exactly_301_or_302(code in any::<i64>()) {
        let expected = code == 301 || code == 302;
        prop_assert_eq!(forward_status_code().validate(&code).is_ok(), expected);
        prop_assert_eq!(FORWARD_STATUS_CODES.contains(&code), expected);
    }

    #[test]
    fn forward_status_code_near_range(code in 290_i64..320) {
        prop_assert_eq!(
            forward_status_code().validate(&code).is_ok(),
            matches!(code, 301 | 302)
        );
    }

    #[test]
    fn is_one_of_agrees_with_contains(
        allowed in prop::collection::vec(any::<i64>(), 1..8),
        value in any::<i64>(),
    ) {
        prop_assert_eq!(
            is_one_of("Value", &allowed, &value).is_ok(),
            allowed.contains(&value)
        );
    }

    #[test]
    fn rejection_message_lists_every_allowed_value(s in "[A-Z]{1,8}") {
        let error = cache_level().validate(&*s).unwrap_err();
        for level in CACHE_LEVELS {
            let quoted = format!("{level:?}");
            prop_assert!(error.message.contains(&quoted));
        }
    }
}

// ============================================================================
// TTL: inclusive ceiling, no floor
// ============================================================================

proptest! {
    #[test]
    fn ttl_passes_iff_at_most_ceiling(n in any::<i64>()) {
        prop_assert_eq!(ttl().validate(&n).is_ok(), n <= MAX_TTL);
    }

    #[test]
    fn ttl_has_no_lower_bound(n in i64::MIN..=0) {
        prop_assert!(ttl().validate(&n).is_ok());
    }

    #[test]
    fn ttl_error_reports_actual(n in (MAX_TTL + 1)..=i64::MAX) {
        let error = ttl().validate(&n).unwrap_err();
        let actual = n.to_string();
        prop_assert_eq!(error.param("actual"), Some(actual.as_str()));
    }
}

// ============================================================================
// BOOLEAN FLAGS AND HOOKS
// ============================================================================

proptest! {
    #[test]
    fn is_true_passes_iff_true(b in any::<bool>()) {
        prop_assert_eq!(is_true().validate(&b).is_ok(), b);
    }

    #[test]
    fn hooks_never_warn(s in ".{0,20}", n in any::<i64>(), b in any::<bool>()) {
        for outcome in [
            hooks::validate_ssl(&s, "ssl"),
            hooks::validate_on_off(&s, "always_online"),
            hooks::validate_ttl(n, "edge_cache_ttl"),
            hooks::validate_is_true(b, "disable_apps"),
        ] {
            prop_assert!(outcome.warnings.is_empty());
            prop_assert!(outcome.errors.len() <= 1);
        }
    }

    #[test]
    fn hook_errors_carry_the_key(key in "[a-z_]{1,16}", s in "[A-Z]{1,6}") {
        let outcome = hooks::validate_security_level(&s, &key);
        prop_assert_eq!(outcome.errors.len(), 1);
        prop_assert_eq!(outcome.errors.errors()[0].field.as_deref(), Some(key.as_str()));
    }
}

// ============================================================================
// RECORD CONTENT
// ============================================================================

proptest! {
    #[test]
    fn any_ipv4_passes_a_record(octets in any::<[u8; 4]>()) {
        let addr = std::net::Ipv4Addr::from(octets).to_string();
        prop_assert!(validate_record_name("A", &addr).is_ok());
        prop_assert!(validate_record_name("AAAA", &addr).is_err());
    }

    #[test]
    fn plain_ipv6_passes_aaaa_record(segments in any::<[u16; 8]>()) {
        let addr = std::net::Ipv6Addr::from(segments);
        // Mapped and compatible forms render with a dotted tail.
        prop_assume!(!addr.to_string().contains('.'));
        let addr = addr.to_string();
        prop_assert!(validate_record_name("AAAA", &addr).is_ok());
        prop_assert!(validate_record_name("A", &addr).is_err());
    }

    #[test]
    fn other_types_never_fail(
        t in "(CNAME|TXT|SRV|LOC|MX|NS|SPF|PTR|a|aaaa)",
        s in ".{0,40}",
    ) {
        prop_assert!(validate_record_name(&t, &s).is_ok());
    }
}
