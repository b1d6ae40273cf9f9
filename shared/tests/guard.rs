mod common;

use chrono::Utc;
use common::{claims_with_roles, token_with_roles};
use shared::{Access, GuardOutcome, Role, RoleGuard, SessionAction, SessionState};

fn logged_in(roles: &[&str]) -> anyhow::Result<SessionState> {
    let now = Utc::now();
    let token = token_with_roles(roles, now);
    let claims = claims_with_roles(roles, now)?;
    Ok(SessionState::default().reduce(SessionAction::Login { token, claims }))
}

#[test]
fn test_logged_out_is_redirected_from_every_protected_access() {
    let state = SessionState::default();

    for access in [
        Access::Authenticated,
        Access::Role(RoleGuard::OnlyStudent),
        Access::Role(RoleGuard::OnlyTeacher),
        Access::Role(RoleGuard::OnlyAdminOrExamHead),
    ] {
        assert!(access.is_protected());
        assert_eq!(access.evaluate(&state), GuardOutcome::RedirectToLogin);
    }
}

#[test]
fn test_public_access_always_renders() -> anyhow::Result<()> {
    assert!(!Access::Public.is_protected());
    assert_eq!(
        Access::Public.evaluate(&SessionState::default()),
        GuardOutcome::Render
    );
    assert_eq!(
        Access::Public.evaluate(&logged_in(&["student"])?),
        GuardOutcome::Render
    );
    Ok(())
}

#[test]
fn test_authenticated_renders_for_any_role() -> anyhow::Result<()> {
    for roles in [&["student"][..], &["teacher"][..], &[][..]] {
        let state = logged_in(roles)?;
        assert_eq!(Access::Authenticated.evaluate(&state), GuardOutcome::Render);
    }
    Ok(())
}

#[test]
fn test_role_guards_permit_only_their_roles() -> anyhow::Result<()> {
    let cases = [
        ("student", RoleGuard::OnlyStudent, GuardOutcome::Render),
        ("teacher", RoleGuard::OnlyStudent, GuardOutcome::Forbidden),
        ("teacher", RoleGuard::OnlyTeacher, GuardOutcome::Render),
        ("admin", RoleGuard::OnlyTeacher, GuardOutcome::Forbidden),
        ("admin", RoleGuard::OnlyAdminOrExamHead, GuardOutcome::Render),
        ("ExamHead", RoleGuard::OnlyAdminOrExamHead, GuardOutcome::Render),
        ("student", RoleGuard::OnlyAdminOrExamHead, GuardOutcome::Forbidden),
        ("librarian", RoleGuard::OnlyStudent, GuardOutcome::Forbidden),
    ];

    for (role, guard, expected) in cases {
        let state = logged_in(&[role])?;
        assert_eq!(
            Access::Role(guard).evaluate(&state),
            expected,
            "role={role}, guard={guard:?}"
        );
    }
    Ok(())
}

#[test]
fn test_role_guard_follows_current_role_not_all_roles() -> anyhow::Result<()> {
    let state = logged_in(&["teacher", "admin"])?;
    let guard = Access::Role(RoleGuard::OnlyAdminOrExamHead);

    // The first granted role is the current one
    assert_eq!(guard.evaluate(&state), GuardOutcome::Forbidden);

    let state = state.reduce(SessionAction::SwitchRole("admin".to_string()));
    assert_eq!(guard.evaluate(&state), GuardOutcome::Render);
    Ok(())
}

#[test]
fn test_logged_in_without_roles_is_forbidden_from_role_pages() -> anyhow::Result<()> {
    let state = logged_in(&[])?;
    assert_eq!(
        Access::Role(RoleGuard::OnlyStudent).evaluate(&state),
        GuardOutcome::Forbidden
    );
    Ok(())
}

#[test]
fn test_permitted_roles() {
    assert_eq!(RoleGuard::OnlyStudent.permitted_roles(), &[Role::Student]);
    assert_eq!(RoleGuard::OnlyTeacher.permitted_roles(), &[Role::Teacher]);
    assert_eq!(
        RoleGuard::OnlyAdminOrExamHead.permitted_roles(),
        &[Role::Admin, Role::ExamHead]
    );
    assert!(RoleGuard::OnlyAdminOrExamHead.permits(Role::ExamHead));
    assert!(!RoleGuard::OnlyAdminOrExamHead.permits(Role::Teacher));
}

#[test]
fn test_role_names() {
    assert_eq!(Role::from_name("EXAMHEAD"), Some(Role::ExamHead));
    assert_eq!(Role::from_name(" teacher "), Some(Role::Teacher));
    assert_eq!(Role::from_name("librarian"), None);
    assert_eq!(Role::ExamHead.label(), "Exam Head");
}
