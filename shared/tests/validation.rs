mod common;

use chrono::{Duration, Utc};
use common::{encode_token, payload_with_roles, token_with_roles};
use shared::validation::{
    check_issued, verdict, EXPIRED_NOTICE, NETWORK_ISSUE_NOTICE, REJECTED_NOTICE,
    UNDECODABLE_NOTICE, VALIDATION_INTERVAL_MILLIS,
};
use shared::{SessionAction, TokenError, TokenStorage, Transition, Verdict};

#[test]
fn test_ok_status_with_fresh_token_is_valid() {
    let now = Utc::now();
    let token = token_with_roles(&["student", "teacher"], now);

    match verdict(200, &token, now) {
        Verdict::Valid(claims) => {
            assert_eq!(claims.role_names(), vec!["student", "teacher"]);
        }
        other => panic!("expected a valid verdict, got {other:?}"),
    }
}

#[test]
fn test_ok_status_with_expiring_token_is_expired() {
    let now = Utc::now();
    let token = encode_token(&payload_with_roles(&["student"], now, Duration::seconds(45)));

    assert!(matches!(verdict(200, &token, now), Verdict::Expired));
}

#[test]
fn test_ok_status_with_garbage_token_is_undecodable() {
    let result = verdict(200, "not-a-jwt", Utc::now());
    assert!(matches!(
        result,
        Verdict::Undecodable(TokenError::Malformed { .. })
    ));
}

#[test]
fn test_client_and_server_errors_are_rejections() {
    let now = Utc::now();
    let token = token_with_roles(&["student"], now);

    for status in [400, 401, 403, 404, 500, 502, 599] {
        match verdict(status, &token, now) {
            Verdict::Rejected(code) => assert_eq!(code, status),
            other => panic!("status={status}, expected a rejection, got {other:?}"),
        }
    }
}

#[test]
fn test_other_statuses_are_inconclusive() {
    let now = Utc::now();
    let token = token_with_roles(&["student"], now);

    for status in [0, 204, 302, 600] {
        assert!(
            matches!(verdict(status, &token, now), Verdict::Inconclusive(code) if code == status),
            "status={status}"
        );
    }
}

#[test]
fn test_validation_interval_is_five_minutes() {
    assert_eq!(VALIDATION_INTERVAL_MILLIS, 300_000);
}

#[test]
fn test_valid_verdict_logs_in_and_keeps_token() -> anyhow::Result<()> {
    let now = Utc::now();
    let token = token_with_roles(&["teacher"], now);

    let transition = verdict(200, &token, now)
        .into_transition(token.clone())
        .ok_or_else(|| anyhow::anyhow!("valid verdict must change the session"))?;

    match &transition.action {
        SessionAction::Login { token: logged, claims } => {
            assert_eq!(logged, &token);
            assert_eq!(claims.role_names(), vec!["teacher"]);
        }
        other => panic!("expected a login action, got {other:?}"),
    }
    assert_eq!(transition.token_storage, TokenStorage::Keep);
    assert_eq!(transition.notice, None);
    Ok(())
}

#[test]
fn test_failed_verdicts_log_out_and_remove_token() -> anyhow::Result<()> {
    let now = Utc::now();
    let fresh = token_with_roles(&["student"], now);
    let expiring = encode_token(&payload_with_roles(&["student"], now, Duration::seconds(10)));

    let cases = [
        (verdict(401, &fresh, now), REJECTED_NOTICE),
        (verdict(500, &fresh, now), REJECTED_NOTICE),
        (verdict(200, &expiring, now), EXPIRED_NOTICE),
        (verdict(200, "a.b", now), UNDECODABLE_NOTICE),
    ];

    for (verdict, notice) in cases {
        let transition = verdict
            .into_transition(fresh.clone())
            .ok_or_else(|| anyhow::anyhow!("notice={notice}, expected a transition"))?;
        assert_eq!(
            transition,
            Transition {
                action: SessionAction::Logout,
                token_storage: TokenStorage::Remove,
                notice: Some(notice),
            }
        );
    }
    Ok(())
}

#[test]
fn test_network_failure_keeps_token_for_next_check() {
    let transition = Transition::network_failure();

    assert_eq!(transition.action, SessionAction::LogoutNetworkIssue);
    assert_eq!(transition.token_storage, TokenStorage::Keep);
    assert_eq!(transition.notice, Some(NETWORK_ISSUE_NOTICE));
}

#[test]
fn test_inconclusive_verdict_leaves_session_alone() {
    let now = Utc::now();
    let token = token_with_roles(&["student"], now);

    assert_eq!(verdict(302, &token, now).into_transition(token), None);
}

#[test]
fn test_issued_token_already_expired_is_refused() {
    let now = Utc::now();
    let stale = encode_token(&payload_with_roles(&["admin"], now, Duration::hours(-2)));

    assert!(matches!(check_issued(&stale, now), Verdict::Expired));
    assert_eq!(
        check_issued(&stale, now).into_transition(stale).and_then(|t| t.notice),
        Some(EXPIRED_NOTICE)
    );
}

#[test]
fn test_issued_fresh_token_is_accepted() {
    let now = Utc::now();
    let token = token_with_roles(&["admin", "examhead"], now);

    match check_issued(&token, now) {
        Verdict::Valid(claims) => assert_eq!(claims.role_names(), vec!["admin", "examhead"]),
        other => panic!("expected a valid verdict, got {other:?}"),
    }
}
