use crate::config::ValidationConfig;
use crate::errors::TitleSentinelError;
use crate::models::{EventPayload, Issue, PullRequest};
use crate::outcome::{RuleViolation, ValidationOutcome};
use crate::{failure_guidance, validate, TitleSentinel};
use proptest::prelude::*;

fn pull_request_payload(title: &str) -> EventPayload {
    EventPayload {
        issue: None,
        pull_request: Some(PullRequest {
            number: Some(123),
            title: title.to_string(),
        }),
    }
}

fn issue_payload(title: &str) -> EventPayload {
    EventPayload {
        issue: Some(Issue {
            number: Some(42),
            title: title.to_string(),
        }),
        pull_request: None,
    }
}

#[test]
fn test_all_rules_pass() {
    let config = ValidationConfig {
        pattern: "^(fix|feat|chore):".to_string(),
        min_length: 5,
        max_length: 0,
        allowed_prefixes: Vec::new(),
        prefix_case_sensitive: false,
    };

    let sentinel = TitleSentinel::new(config).expect("pattern should compile");
    let outcome = sentinel.validate(&pull_request_payload("fix: correct off-by-one"));

    assert_eq!(outcome, ValidationOutcome::Pass);
}

#[test]
fn test_pattern_mismatch() {
    let config = ValidationConfig {
        pattern: "^(fix|feat|chore):".to_string(),
        ..ValidationConfig::default()
    };

    let sentinel = TitleSentinel::new(config).expect("pattern should compile");
    let outcome = sentinel.validate(&pull_request_payload("update"));

    assert_eq!(
        outcome,
        ValidationOutcome::Fail(RuleViolation::PatternMismatch {
            title: "update".to_string(),
            pattern: "^(fix|feat|chore):".to_string(),
        })
    );
}

#[test]
fn test_too_short() {
    let config = ValidationConfig {
        pattern: ".*".to_string(),
        min_length: 5,
        ..ValidationConfig::default()
    };

    let sentinel = TitleSentinel::new(config).expect("pattern should compile");
    let outcome = sentinel.validate(&issue_payload("ab"));

    assert_eq!(
        outcome,
        ValidationOutcome::Fail(RuleViolation::TooShort {
            title: "ab".to_string(),
            length: 2,
            min_length: 5,
        })
    );
}

#[test]
fn test_too_long() {
    let title = "feat: add very long title exceeding limit";
    let config = ValidationConfig {
        pattern: ".*".to_string(),
        min_length: 0,
        max_length: 10,
        ..ValidationConfig::default()
    };

    let sentinel = TitleSentinel::new(config).expect("pattern should compile");
    let outcome = sentinel.validate(&pull_request_payload(title));

    assert_eq!(
        outcome,
        ValidationOutcome::Fail(RuleViolation::TooLong {
            title: title.to_string(),
            length: title.chars().count(),
            max_length: 10,
        })
    );
}

#[test]
fn test_case_sensitive_prefix_pass() {
    let config = ValidationConfig {
        pattern: ".*".to_string(),
        allowed_prefixes: vec!["feat:".to_string(), "fix:".to_string()],
        prefix_case_sensitive: true,
        ..ValidationConfig::default()
    };

    let sentinel = TitleSentinel::new(config).expect("pattern should compile");
    let outcome = sentinel.validate(&pull_request_payload("feat: add thing"));

    assert_eq!(outcome, ValidationOutcome::Pass);
}

#[test]
fn test_prefix_mismatch() {
    let config = ValidationConfig {
        allowed_prefixes: vec!["feat:".to_string(), "fix:".to_string()],
        prefix_case_sensitive: true,
        ..ValidationConfig::default()
    };

    let sentinel = TitleSentinel::new(config).expect("pattern should compile");
    let outcome = sentinel.validate(&pull_request_payload("docs: update README"));

    assert_eq!(
        outcome,
        ValidationOutcome::Fail(RuleViolation::PrefixMismatch {
            title: "docs: update README".to_string(),
            allowed_prefixes: vec!["feat:".to_string(), "fix:".to_string()],
        })
    );
}

#[test]
fn test_case_insensitive_prefix_comparison() {
    let config = ValidationConfig {
        allowed_prefixes: vec!["FEAT:".to_string()],
        prefix_case_sensitive: false,
        ..ValidationConfig::default()
    };

    let sentinel = TitleSentinel::new(config).expect("pattern should compile");

    assert_eq!(
        sentinel.validate(&pull_request_payload("feat: lower case title")),
        ValidationOutcome::Pass
    );
    assert!(!sentinel
        .validate(&pull_request_payload("docs: unrelated"))
        .is_pass());
}

#[test]
fn test_empty_payload_is_no_title() {
    let sentinel =
        TitleSentinel::new(ValidationConfig::default()).expect("pattern should compile");
    let outcome = sentinel.validate(&EventPayload::default());

    assert_eq!(outcome, ValidationOutcome::Fail(RuleViolation::NoTitle));
}

#[test]
fn test_no_title_wins_over_every_rule() {
    // Even a config that would reject any title reports the missing title
    // first.
    let config = ValidationConfig {
        pattern: "impossible-pattern-xyz".to_string(),
        min_length: 100,
        max_length: 1,
        allowed_prefixes: vec!["nope:".to_string()],
        prefix_case_sensitive: true,
    };

    let sentinel = TitleSentinel::new(config).expect("pattern should compile");
    let outcome = sentinel.validate(&EventPayload::default());

    assert_eq!(outcome, ValidationOutcome::Fail(RuleViolation::NoTitle));
}

#[test]
fn test_first_failing_gate_wins() {
    // The title fails both the pattern rule and the minimum length rule;
    // only the pattern failure is reported.
    let config = ValidationConfig {
        pattern: "^(fix|feat|chore):".to_string(),
        min_length: 50,
        ..ValidationConfig::default()
    };

    let sentinel = TitleSentinel::new(config).expect("pattern should compile");
    let outcome = sentinel.validate(&pull_request_payload("update"));

    assert_eq!(outcome.violation().map(RuleViolation::rule), Some("pattern"));
}

#[test]
fn test_min_length_checked_before_max_length_and_prefix() {
    let config = ValidationConfig {
        pattern: ".*".to_string(),
        min_length: 10,
        max_length: 3,
        allowed_prefixes: vec!["feat:".to_string()],
        prefix_case_sensitive: true,
    };

    let sentinel = TitleSentinel::new(config).expect("pattern should compile");
    let outcome = sentinel.validate(&pull_request_payload("docs"));

    assert_eq!(
        outcome.violation().map(RuleViolation::rule),
        Some("min-length")
    );
}

#[test]
fn test_invalid_pattern_is_a_configuration_error() {
    let config = ValidationConfig {
        pattern: "[unclosed".to_string(),
        ..ValidationConfig::default()
    };

    let result = TitleSentinel::new(config);
    assert!(matches!(
        result,
        Err(TitleSentinelError::InvalidPattern(_))
    ));
}

#[test]
fn test_validate_free_function_matches_engine() {
    let config = ValidationConfig {
        pattern: "^feat:".to_string(),
        ..ValidationConfig::default()
    };
    let payload = pull_request_payload("feat: add thing");

    let from_free_fn = validate(&payload, &config).expect("pattern should compile");
    let from_engine = TitleSentinel::new(config)
        .expect("pattern should compile")
        .validate(&payload);

    assert_eq!(from_free_fn, from_engine);
}

#[test]
fn test_validate_free_function_surfaces_pattern_errors() {
    let config = ValidationConfig {
        pattern: "(".to_string(),
        ..ValidationConfig::default()
    };

    let result = validate(&EventPayload::default(), &config);
    assert!(matches!(
        result,
        Err(TitleSentinelError::InvalidPattern(_))
    ));
}

#[test]
fn test_failure_guidance_names_the_violation_and_the_rule() {
    let config = ValidationConfig {
        allowed_prefixes: vec!["feat:".to_string(), "fix:".to_string()],
        prefix_case_sensitive: false,
        ..ValidationConfig::default()
    };
    let violation = RuleViolation::PrefixMismatch {
        title: "update".to_string(),
        allowed_prefixes: config.allowed_prefixes.clone(),
    };

    let guidance = failure_guidance(&violation, &config);
    assert!(guidance.contains("did not match any of the prefixes"));
    assert!(guidance.contains("feat:, fix:"));
    assert!(guidance.contains("case-insensitive"));
}

#[test]
fn test_failure_guidance_for_length_violations_names_both_numbers() {
    let config = ValidationConfig {
        min_length: 5,
        ..ValidationConfig::default()
    };
    let violation = RuleViolation::TooShort {
        title: "ab".to_string(),
        length: 2,
        min_length: 5,
    };

    let guidance = failure_guidance(&violation, &config);
    assert!(guidance.contains("at least 5 characters"));
    assert!(guidance.contains("it has 2"));
}

proptest! {
    #[test]
    fn test_validation_is_idempotent(title in ".*", min in 0usize..100, max in 0usize..100) {
        let config = ValidationConfig {
            pattern: String::new(),
            min_length: min,
            max_length: max,
            allowed_prefixes: vec!["feat:".to_string()],
            prefix_case_sensitive: false,
        };
        let payload = pull_request_payload(&title);

        let first = validate(&payload, &config).unwrap();
        let second = validate(&payload, &config).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_empty_prefix_list_never_reports_prefix_mismatch(title in ".+") {
        let config = ValidationConfig::default();
        let outcome = validate(&pull_request_payload(&title), &config).unwrap();

        prop_assert!(outcome.violation().map(RuleViolation::rule) != Some("prefix"));
    }

    #[test]
    fn test_unbounded_max_length_never_reports_too_long(title in ".+") {
        let config = ValidationConfig {
            max_length: 0,
            ..ValidationConfig::default()
        };
        let outcome = validate(&pull_request_payload(&title), &config).unwrap();

        prop_assert!(outcome.violation().map(RuleViolation::rule) != Some("max-length"));
    }

    #[test]
    fn test_validation_never_panics(title in ".*") {
        let config = ValidationConfig {
            pattern: "^(fix|feat|chore):".to_string(),
            min_length: 5,
            max_length: 72,
            allowed_prefixes: vec!["feat:".to_string(), "fix:".to_string()],
            prefix_case_sensitive: false,
        };

        let _ = validate(&pull_request_payload(&title), &config).unwrap();
    }
}
