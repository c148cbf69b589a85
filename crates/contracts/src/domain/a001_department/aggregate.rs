use crate::domain::a002_member::Member;
use anyhow::bail;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DepartmentId(pub i64);

impl DepartmentId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    pub fn as_string(&self) -> String {
        self.0.to_string()
    }

    pub fn from_string(s: &str) -> anyhow::Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            bail!("empty department id");
        }
        Ok(Self(s.parse::<i64>()?))
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// A node in the organization hierarchy. Owns members and shared libraries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: i64,
    pub name: String,

    #[serde(rename = "parent_group_id", default)]
    pub parent_group_id: Option<i64>,
}

/// One element of the breadcrumb chain, ordered root-first on the wire.
/// The current department itself is not part of the chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AncestorGroup {
    pub id: i64,
    pub name: String,
}

/// Response of the group-info endpoint when hierarchy data is requested:
/// members, direct subgroups, ancestor chain and the display name in one
/// payload so the view can replace its snapshot atomically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentInfo {
    pub id: i64,
    pub name: String,

    #[serde(default)]
    pub members: Vec<Member>,

    #[serde(default)]
    pub groups: Vec<Department>,

    #[serde(rename = "ancestor_groups", default)]
    pub ancestor_groups: Vec<AncestorGroup>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddMemberRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddDepartmentRequest {
    pub name: String,

    #[serde(rename = "parent_group", skip_serializing_if = "Option::is_none")]
    pub parent_group: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_department_id_from_string() {
        assert_eq!(DepartmentId::from_string("42").unwrap().value(), 42);
        assert_eq!(DepartmentId::from_string(" 7 ").unwrap().value(), 7);
        assert!(DepartmentId::from_string("").is_err());
        assert!(DepartmentId::from_string("abc").is_err());
    }

    #[test]
    fn test_department_info_deserializes_hierarchy() {
        let json = r#"{
            "id": 42,
            "name": "B",
            "members": [],
            "groups": [{"id": 43, "name": "C", "parent_group_id": 42}],
            "ancestor_groups": [{"id": 1, "name": "A"}]
        }"#;
        let info: DepartmentInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.name, "B");
        assert_eq!(info.groups.len(), 1);
        assert_eq!(
            info.ancestor_groups,
            vec![AncestorGroup {
                id: 1,
                name: "A".to_string()
            }]
        );
    }
}
