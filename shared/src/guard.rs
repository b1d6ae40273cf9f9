use crate::role::Role;
use crate::session::SessionState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleGuard {
    OnlyStudent,
    OnlyTeacher,
    OnlyAdminOrExamHead,
}

impl RoleGuard {
    pub fn permitted_roles(&self) -> &'static [Role] {
        match self {
            RoleGuard::OnlyStudent => &[Role::Student],
            RoleGuard::OnlyTeacher => &[Role::Teacher],
            RoleGuard::OnlyAdminOrExamHead => &[Role::Admin, Role::ExamHead],
        }
    }

    pub fn permits(&self, role: Role) -> bool {
        self.permitted_roles().contains(&role)
    }
}

/// What a route demands from the session before its page is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Authenticated,
    Role(RoleGuard),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    Render,
    RedirectToLogin,
    Forbidden,
}

impl Access {
    pub fn evaluate(&self, state: &SessionState) -> GuardOutcome {
        match self {
            Access::Public => GuardOutcome::Render,
            _ if !state.is_logged => GuardOutcome::RedirectToLogin,
            Access::Authenticated => GuardOutcome::Render,
            Access::Role(guard) => match state.current_role() {
                Some(role) if guard.permits(role) => GuardOutcome::Render,
                _ => GuardOutcome::Forbidden,
            },
        }
    }

    pub fn is_protected(&self) -> bool {
        !matches!(self, Access::Public)
    }
}
