use serde::{Deserialize, Serialize};

/// Role of a department member.
///
/// The wire protocol carries the role as a plain string on reads and as an
/// `is_admin` boolean on writes; both mappings live here so no caller ever
/// compares role strings by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemberRole {
    Owner,
    Admin,
    Member,
}

impl MemberRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberRole::Owner => "Owner",
            MemberRole::Admin => "Admin",
            MemberRole::Member => "Member",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Owner" => Some(MemberRole::Owner),
            "Admin" => Some(MemberRole::Admin),
            "Member" => Some(MemberRole::Member),
            _ => None,
        }
    }

    /// The boolean the role-update endpoint expects.
    pub fn is_admin_flag(&self) -> bool {
        matches!(self, MemberRole::Admin)
    }

    pub fn from_admin_flag(is_admin: bool) -> Self {
        if is_admin {
            MemberRole::Admin
        } else {
            MemberRole::Member
        }
    }

    /// Roles the editor may assign. Owner is never offered.
    pub fn assignable() -> [MemberRole; 2] {
        [MemberRole::Admin, MemberRole::Member]
    }
}

impl std::fmt::Display for MemberRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub email: String,
    pub name: String,

    #[serde(rename = "avatar_url", default)]
    pub avatar_url: String,

    pub role: MemberRole,
}

impl Member {
    /// The owner row is suppressed at render time; the list itself keeps it.
    pub fn is_owner(&self) -> bool {
        self.role == MemberRole::Owner
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetMemberAdminRequest {
    pub is_admin: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_flag_mapping() {
        assert!(MemberRole::Admin.is_admin_flag());
        assert!(!MemberRole::Member.is_admin_flag());
        assert!(!MemberRole::Owner.is_admin_flag());
        assert_eq!(MemberRole::from_admin_flag(true), MemberRole::Admin);
        assert_eq!(MemberRole::from_admin_flag(false), MemberRole::Member);
    }

    #[test]
    fn test_role_strings_round() {
        for role in [MemberRole::Owner, MemberRole::Admin, MemberRole::Member] {
            assert_eq!(MemberRole::from_str(role.as_str()), Some(role));
        }
        assert_eq!(MemberRole::from_str("owner"), None);
    }

    #[test]
    fn test_assignable_excludes_owner() {
        assert!(!MemberRole::assignable().contains(&MemberRole::Owner));
    }

    #[test]
    fn test_member_wire_format() {
        let json = r#"{
            "email": "x@y.com",
            "name": "X",
            "avatar_url": "/media/avatars/x.png",
            "role": "Owner"
        }"#;
        let m: Member = serde_json::from_str(json).unwrap();
        assert!(m.is_owner());
        assert_eq!(m.email, "x@y.com");
    }
}
