//! Persisted login session and role model.
//!
//! DESIGN
//! ======
//! The session is exactly what the backend returned from login. Fields the
//! console does not read are kept in `extra` so re-saving never drops them,
//! and unknown role strings survive as `Role::Other`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Role carried by a session. Serialized as the backend's wire string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Role {
    /// `"isTenant"`: a store owner viewing their own dashboard.
    Tenant,
    /// `"isAdmin"`: a platform administrator viewing all tenants.
    Admin,
    /// Any other role string; treated as unrecognized by route guards.
    Other(String),
}

impl Role {
    pub const TENANT: &'static str = "isTenant";
    pub const ADMIN: &'static str = "isAdmin";

    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            Self::TENANT => Self::Tenant,
            Self::ADMIN => Self::Admin,
            other => Self::Other(other.to_owned()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Tenant => Self::TENANT,
            Self::Admin => Self::ADMIN,
            Self::Other(raw) => raw,
        }
    }

    /// Sidebar heading for the main layout.
    #[must_use]
    pub fn panel_name(&self) -> &'static str {
        match self {
            Self::Tenant => "UserPanel",
            Self::Admin => "AdminPanel",
            Self::Other(_) => "",
        }
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

/// Login response persisted in `localStorage` as the proof of authentication.
///
/// `tenantId` stays in `extra` exactly as the backend sent it (string,
/// number, `null` or absent); read it through [`Session::tenant_id`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub email: String,
    pub role: Role,
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

const TENANT_ID_KEY: &str = "tenantId";

fn default_token_type() -> String {
    "Bearer".to_owned()
}

impl Session {
    /// Value for the `Authorization` header: `"<tokenType> <accessToken>"`.
    #[must_use]
    pub fn authorization(&self) -> String {
        format!("{} {}", self.token_type, self.access_token)
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Tenant this session is scoped to. Numeric ids read as strings.
    #[must_use]
    pub fn tenant_id(&self) -> Option<String> {
        match self.extra.get(TENANT_ID_KEY)? {
            serde_json::Value::String(id) => Some(id.clone()),
            serde_json::Value::Number(id) => Some(id.to_string()),
            _ => None,
        }
    }
}
