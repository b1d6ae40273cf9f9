use crate::claims::Claims;
use crate::role::Role;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Roles {
    pub has_multi_roles: bool,
    pub current_role: Option<String>,
    pub all_roles: Vec<String>,
}

impl Roles {
    pub fn from_names(names: Vec<String>) -> Self {
        Roles {
            has_multi_roles: names.len() > 1,
            current_role: names.first().cloned(),
            all_roles: names,
        }
    }
}

impl From<&Claims> for Roles {
    fn from(claims: &Claims) -> Self {
        Roles::from_names(claims.role_names())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    Login { token: String, claims: Claims },
    Logout,
    LogoutNetworkIssue,
    SwitchRole(String),
}

/// In-memory login state. Only the token outlives a page reload.
///
/// `is_logged` implies `token` and `decoded_token` are set; the only way to
/// get there is [`SessionAction::Login`], which carries both.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    pub is_logged: bool,
    pub token: Option<String>,
    pub decoded_token: Option<Claims>,
    pub roles: Roles,
}

impl SessionState {
    pub fn reduce(self, action: SessionAction) -> SessionState {
        match action {
            SessionAction::Login { token, claims } => {
                let mut roles = Roles::from(&claims);
                // A re-validated session keeps the role the user switched to
                if let Some(current) = self.roles.current_role {
                    if self.is_logged && roles.all_roles.contains(&current) {
                        roles.current_role = Some(current);
                    }
                }
                SessionState {
                    is_logged: true,
                    token: Some(token),
                    decoded_token: Some(claims),
                    roles,
                }
            }
            SessionAction::Logout | SessionAction::LogoutNetworkIssue => SessionState::default(),
            SessionAction::SwitchRole(name) => {
                if !self.is_logged || !self.roles.all_roles.contains(&name) {
                    return self;
                }
                let mut state = self;
                state.roles.current_role = Some(name);
                state
            }
        }
    }

    pub fn current_role(&self) -> Option<Role> {
        self.roles
            .current_role
            .as_deref()
            .and_then(Role::from_name)
    }

    pub fn bearer_token(&self) -> Option<&str> {
        if self.is_logged {
            self.token.as_deref()
        } else {
            None
        }
    }
}
