use anyhow::Context;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LibraryId(pub Uuid);

impl LibraryId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }

    pub fn as_string(&self) -> String {
        self.0.to_string()
    }

    pub fn from_string(s: &str) -> anyhow::Result<Self> {
        Uuid::parse_str(s)
            .map(LibraryId::new)
            .with_context(|| format!("invalid library id: {s}"))
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// A shared storage container associated with a department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Library {
    pub id: LibraryId,
    pub name: String,

    /// Size in bytes.
    #[serde(default)]
    pub size: u64,

    #[serde(default)]
    pub encrypted: bool,

    /// Access mode of the share, "rw" or "r".
    #[serde(default = "default_permission")]
    pub permission: String,
}

fn default_permission() -> String {
    "rw".to_string()
}

impl Library {
    /// Icon key for the row, chosen by the library's attributes.
    pub fn icon_name(&self) -> &'static str {
        if self.encrypted {
            "library-encrypted"
        } else if self.permission == "r" {
            "library-readonly"
        } else {
            "library"
        }
    }

    pub fn is_read_only(&self) -> bool {
        self.permission == "r"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryListResponse {
    pub libraries: Vec<Library>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLibraryRequest {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn library(encrypted: bool, permission: &str) -> Library {
        Library {
            id: LibraryId::new_v4(),
            name: "docs".to_string(),
            size: 1024,
            encrypted,
            permission: permission.to_string(),
        }
    }

    #[test]
    fn test_icon_by_attributes() {
        assert_eq!(library(true, "rw").icon_name(), "library-encrypted");
        assert_eq!(library(false, "r").icon_name(), "library-readonly");
        assert_eq!(library(false, "rw").icon_name(), "library");
        // Encryption wins over permission.
        assert_eq!(library(true, "r").icon_name(), "library-encrypted");
    }

    #[test]
    fn test_library_id_from_string() {
        let id = LibraryId::new_v4();
        assert_eq!(
            LibraryId::from_string(&id.as_string()).unwrap(),
            id
        );
        assert!(LibraryId::from_string("not-a-uuid").is_err());
    }

    #[test]
    fn test_list_response_preserves_order() {
        let json = r#"{"libraries": [
            {"id": "5dd0c3b7-2f0a-4c52-88a7-dcbd0a497ba1", "name": "a", "size": 1},
            {"id": "0e3f6ae2-9c5a-4f0d-9a39-77c29f2f7d55", "name": "b", "size": 2}
        ]}"#;
        let resp: LibraryListResponse = serde_json::from_str(json).unwrap();
        let names: Vec<&str> = resp.libraries.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}
