use serde::{Deserialize, Serialize};

/// Backend role identifier as stored on the session.
///
/// `OnlineCustomer` is issued to accounts created through the web shop;
/// it shares the customer dashboard with walk-in customers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Role {
    Manager,
    Cashier,
    Customer,
    OnlineCustomer,
}

impl Role {
    /// Resolve a role id; `None` for ids the dashboard does not know.
    pub fn from_id(id: i32) -> Option<Self> {
        match id {
            1 => Some(Role::Manager),
            2 => Some(Role::Cashier),
            3 => Some(Role::Customer),
            4 => Some(Role::OnlineCustomer),
            _ => None,
        }
    }

    pub fn id(&self) -> i32 {
        match self {
            Role::Manager => 1,
            Role::Cashier => 2,
            Role::Customer => 3,
            Role::OnlineCustomer => 4,
        }
    }

    /// The dashboard a user with this role lands on.
    pub fn dashboard(&self) -> DashboardKind {
        match self {
            Role::Manager => DashboardKind::Admin,
            Role::Cashier => DashboardKind::Cashier,
            Role::Customer | Role::OnlineCustomer => DashboardKind::Customer,
        }
    }
}

/// The three dashboard compositions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DashboardKind {
    Admin,
    Cashier,
    Customer,
}

impl DashboardKind {
    pub fn title(&self) -> &'static str {
        match self {
            DashboardKind::Admin => "Main Manager Dashboard",
            DashboardKind::Cashier => "Cashier Dashboard",
            DashboardKind::Customer => "Customer Dashboard",
        }
    }

    /// Upper-case label for the header role badge.
    pub fn role_label(&self) -> &'static str {
        match self {
            DashboardKind::Admin => "MAIN MANAGER",
            DashboardKind::Cashier => "CASHIER",
            DashboardKind::Customer => "CUSTOMER",
        }
    }
}

/// Body of `GET /api/auth/me`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    #[serde(default)]
    pub logged_in: bool,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub role_id: Option<i32>,
}

impl SessionInfo {
    /// The logged-in user, if the session is live and names one.
    ///
    /// A session without a role id is treated as a walk-in customer,
    /// matching the backend's own default.
    pub fn into_user(self) -> Option<SessionUser> {
        if !self.logged_in {
            return None;
        }
        let username = self.username.filter(|u| !u.trim().is_empty())?;
        let display_name = self
            .full_name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| username.clone());
        Some(SessionUser {
            username,
            display_name,
            role_id: self.role_id.unwrap_or(Role::Customer.id()),
        })
    }
}

/// The current user as the dashboard sees it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionUser {
    pub username: String,
    pub display_name: String,
    pub role_id: i32,
}

impl SessionUser {
    pub fn role(&self) -> Option<Role> {
        Role::from_id(self.role_id)
    }
}

/// Credentials posted to `/api/auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Body of `/api/auth/login`, successful or not.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub role_id: Option<i32>,
    #[serde(default)]
    pub email: Option<String>,
}

impl LoginResponse {
    /// Project a successful login onto the session user it establishes.
    pub fn into_user(self) -> Option<SessionUser> {
        SessionInfo {
            logged_in: self.success,
            username: self.username,
            full_name: self.full_name,
            role_id: self.role_id,
        }
        .into_user()
    }
}

/// Minimum password length accepted by the registration form.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Account details posted to `/api/auth/register`.
///
/// The backend reads these keys from a plain map, so they stay snake_case.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RegisterRequest {
    pub user_id: String,
    pub full_name: String,
    pub email: String,
    pub contact_number: String,
    pub password: String,
}

impl RegisterRequest {
    /// Check the form before it is sent; returns the first problem found.
    pub fn validate(&self, confirm_password: &str) -> Result<(), String> {
        let required = [
            (&self.user_id, "User ID"),
            (&self.full_name, "Full name"),
            (&self.email, "Email"),
            (&self.contact_number, "Contact number"),
            (&self.password, "Password"),
        ];
        if let Some((_, name)) = required.iter().find(|(v, _)| v.trim().is_empty()) {
            return Err(format!("{name} is required"));
        }
        if !self.email.contains('@') {
            return Err("Enter a valid email address".to_string());
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters"
            ));
        }
        if self.password != confirm_password {
            return Err("Passwords do not match".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn role_ids_map_to_dashboards() {
        assert_eq!(Role::from_id(1).map(|r| r.dashboard()), Some(DashboardKind::Admin));
        assert_eq!(Role::from_id(2).map(|r| r.dashboard()), Some(DashboardKind::Cashier));
        assert_eq!(Role::from_id(3).map(|r| r.dashboard()), Some(DashboardKind::Customer));
        assert_eq!(Role::from_id(4).map(|r| r.dashboard()), Some(DashboardKind::Customer));
    }

    #[test]
    fn unknown_role_ids_resolve_to_none() {
        assert_eq!(Role::from_id(0), None);
        assert_eq!(Role::from_id(5), None);
        assert_eq!(Role::from_id(-1), None);
    }

    #[test]
    fn role_id_roundtrip() {
        for role in [Role::Manager, Role::Cashier, Role::Customer, Role::OnlineCustomer] {
            assert_eq!(Role::from_id(role.id()), Some(role));
        }
    }

    #[test]
    fn session_info_deserializes_from_me_json() {
        let json = r#"{"loggedIn":true,"username":"cashier01","fullName":"Nimal Perera","roleId":2}"#;
        let info: SessionInfo = serde_json::from_str(json).unwrap();
        let user = info.into_user().unwrap();
        assert_eq!(
            user,
            SessionUser {
                username: "cashier01".into(),
                display_name: "Nimal Perera".into(),
                role_id: 2,
            }
        );
    }

    #[test]
    fn logged_out_session_has_no_user() {
        let info: SessionInfo = serde_json::from_str(r#"{"loggedIn":false}"#).unwrap();
        assert_eq!(info.into_user(), None);
    }

    #[test]
    fn session_without_username_has_no_user() {
        let info = SessionInfo {
            logged_in: true,
            username: Some("  ".into()),
            ..SessionInfo::default()
        };
        assert_eq!(info.into_user(), None);
    }

    #[test]
    fn display_name_falls_back_to_username() {
        let info = SessionInfo {
            logged_in: true,
            username: Some("amal".into()),
            full_name: None,
            role_id: Some(3),
        };
        assert_eq!(info.into_user().unwrap().display_name, "amal");
    }

    #[test]
    fn missing_role_defaults_to_customer() {
        let info = SessionInfo {
            logged_in: true,
            username: Some("amal".into()),
            full_name: None,
            role_id: None,
        };
        assert_eq!(info.into_user().unwrap().role(), Some(Role::Customer));
    }

    #[test]
    fn failed_login_yields_no_user() {
        let json = r#"{"success":false,"message":"Invalid username or password"}"#;
        let resp: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.message.as_deref(), Some("Invalid username or password"));
        assert_eq!(resp.into_user(), None);
    }

    #[test]
    fn successful_login_yields_user() {
        let json = r#"{"success":true,"sessionId":"abc","username":"admin","roleId":1,"fullName":"Store Manager","email":"m@syos.lk"}"#;
        let resp: LoginResponse = serde_json::from_str(json).unwrap();
        let user = resp.into_user().unwrap();
        assert_eq!(user.role(), Some(Role::Manager));
        assert_eq!(user.display_name, "Store Manager");
    }

    fn valid_registration() -> RegisterRequest {
        RegisterRequest {
            user_id: "kasun".into(),
            full_name: "Kasun Silva".into(),
            email: "kasun@example.com".into(),
            contact_number: "0771234567".into(),
            password: "secret1".into(),
        }
    }

    #[test]
    fn registration_accepts_valid_form() {
        assert_eq!(valid_registration().validate("secret1"), Ok(()));
    }

    #[test]
    fn registration_reports_first_missing_field() {
        let mut req = valid_registration();
        req.full_name = String::new();
        req.email = String::new();
        assert_eq!(req.validate("secret1"), Err("Full name is required".into()));
    }

    #[test]
    fn registration_rejects_short_or_mismatched_passwords() {
        let mut req = valid_registration();
        req.password = "abc".into();
        assert!(req.validate("abc").unwrap_err().contains("at least 6"));

        let req = valid_registration();
        assert_eq!(req.validate("other1"), Err("Passwords do not match".into()));
    }

    #[test]
    fn registration_serializes_snake_case_keys() {
        let json = serde_json::to_value(valid_registration()).unwrap();
        assert_eq!(json["user_id"], "kasun");
        assert_eq!(json["contact_number"], "0771234567");
    }
}
