use contracts::domain::a001_department::{AncestorGroup, Department, DepartmentInfo};
use contracts::domain::a002_member::Member;
use contracts::domain::a003_library::Library;
use leptos::prelude::*;

/// One breadcrumb segment, root-first.
///
/// `target` is the group to select when the segment is a link: an id, or
/// the empty string for the departments root. Plain-text segments (the
/// root label with nothing selected, the current department's name) have
/// no target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BreadcrumbSegment {
    pub label: String,
    pub target: Option<String>,
}

/// Snapshot held by the department item view.
///
/// Created on mount from the URL and wholesale-replaced on every mutation;
/// nothing survives unmount. The two delete-dialog flags are independent
/// booleans, not one enum: opening one leaves the other untouched and
/// cancel clears both.
#[derive(Clone, Debug, Default)]
pub struct DepartmentItemState {
    pub group_id: Option<String>,
    pub group_name: String,
    pub members: Vec<Member>,
    pub subgroups: Vec<Department>,
    pub ancestor_groups: Vec<AncestorGroup>,
    pub libraries: Vec<Library>,
    pub deleted_member: Option<Member>,
    pub deleted_library: Option<Library>,
    pub show_delete_member_dialog: bool,
    pub show_delete_library_dialog: bool,
    pub is_item_frozen: bool,
}

impl DepartmentItemState {
    pub fn open_delete_member_dialog(&mut self, member: Member) {
        self.deleted_member = Some(member);
        self.show_delete_member_dialog = true;
    }

    pub fn open_delete_library_dialog(&mut self, library: Library) {
        self.deleted_library = Some(library);
        self.show_delete_library_dialog = true;
    }

    /// Targets stay behind; the flags alone gate rendering.
    pub fn cancel_dialogs(&mut self) {
        self.show_delete_member_dialog = false;
        self.show_delete_library_dialog = false;
    }

    /// Replace name, members, subgroups and ancestor chain in one update.
    pub fn apply_info(&mut self, info: DepartmentInfo) {
        self.group_name = info.name;
        self.members = info.members;
        self.subgroups = info.groups;
        self.ancestor_groups = info.ancestor_groups;
    }

    pub fn apply_libraries(&mut self, libraries: Vec<Library>) {
        self.libraries = libraries;
    }

    pub fn clear_selection(&mut self) {
        self.group_id = None;
        self.group_name.clear();
        self.members.clear();
        self.subgroups.clear();
        self.ancestor_groups.clear();
        self.libraries.clear();
    }

    /// A department whose only member is its owner renders the empty-state
    /// message instead of the member table. The owner stays in the data.
    pub fn members_table_is_empty(&self) -> bool {
        self.members.len() == 1 && self.members[0].is_owner()
    }

    /// Breadcrumb segments: root label, ancestors root-first, then the
    /// current department's name as plain text when one is selected.
    pub fn breadcrumb(&self) -> Vec<BreadcrumbSegment> {
        let selected = self.group_id.is_some();
        let mut segments = Vec::with_capacity(self.ancestor_groups.len() + 2);

        segments.push(BreadcrumbSegment {
            label: "Departments".to_string(),
            target: selected.then(String::new),
        });

        for ancestor in &self.ancestor_groups {
            segments.push(BreadcrumbSegment {
                label: ancestor.name.clone(),
                target: Some(ancestor.id.to_string()),
            });
        }

        if selected {
            segments.push(BreadcrumbSegment {
                label: self.group_name.clone(),
                target: None,
            });
        }

        segments
    }
}

/// Hover gating for member rows: while the table is frozen (a role edit in
/// flight) enter/leave must not change the highlight.
pub fn hover_transition(is_frozen: bool, entering: bool) -> Option<bool> {
    if is_frozen {
        None
    } else {
        Some(entering)
    }
}

pub fn create_state() -> RwSignal<DepartmentItemState> {
    RwSignal::new(DepartmentItemState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_member::MemberRole;
    use contracts::domain::a003_library::LibraryId;

    fn member(email: &str, role: MemberRole) -> Member {
        Member {
            email: email.to_string(),
            name: email.split('@').next().unwrap_or(email).to_string(),
            avatar_url: String::new(),
            role,
        }
    }

    fn library(name: &str) -> Library {
        Library {
            id: LibraryId::new_v4(),
            name: name.to_string(),
            size: 0,
            encrypted: false,
            permission: "rw".to_string(),
        }
    }

    #[test]
    fn test_owner_only_department_counts_as_empty() {
        let mut state = DepartmentItemState::default();
        state.members = vec![member("owner@y.com", MemberRole::Owner)];
        assert!(state.members_table_is_empty());

        state.members.push(member("x@y.com", MemberRole::Member));
        assert!(!state.members_table_is_empty());

        state.members = vec![];
        assert!(!state.members_table_is_empty());

        state.members = vec![member("x@y.com", MemberRole::Admin)];
        assert!(!state.members_table_is_empty());
    }

    #[test]
    fn test_breadcrumb_with_selection() {
        let mut state = DepartmentItemState::default();
        state.group_id = Some("42".to_string());
        state.group_name = "B".to_string();
        state.ancestor_groups = vec![AncestorGroup {
            id: 1,
            name: "A".to_string(),
        }];

        assert_eq!(
            state.breadcrumb(),
            vec![
                BreadcrumbSegment {
                    label: "Departments".to_string(),
                    target: Some(String::new()),
                },
                BreadcrumbSegment {
                    label: "A".to_string(),
                    target: Some("1".to_string()),
                },
                BreadcrumbSegment {
                    label: "B".to_string(),
                    target: None,
                },
            ]
        );
    }

    #[test]
    fn test_breadcrumb_without_selection() {
        let state = DepartmentItemState::default();
        assert_eq!(
            state.breadcrumb(),
            vec![BreadcrumbSegment {
                label: "Departments".to_string(),
                target: None,
            }]
        );
    }

    #[test]
    fn test_breadcrumb_ancestors_keep_wire_order() {
        let mut state = DepartmentItemState::default();
        state.group_id = Some("9".to_string());
        state.group_name = "leaf".to_string();
        state.ancestor_groups = vec![
            AncestorGroup {
                id: 1,
                name: "root".to_string(),
            },
            AncestorGroup {
                id: 5,
                name: "mid".to_string(),
            },
        ];

        let breadcrumb = state.breadcrumb();
        let labels: Vec<&str> = breadcrumb
            .iter()
            .map(|s| s.label.as_str())
            .collect();
        assert_eq!(labels, vec!["Departments", "root", "mid", "leaf"]);
        // Only the final segment is plain text.
        let breadcrumb = state.breadcrumb();
        let plain: Vec<&str> = breadcrumb
            .iter()
            .filter(|s| s.target.is_none())
            .map(|s| s.label.as_str())
            .collect();
        assert_eq!(plain, vec!["leaf"]);
    }

    #[test]
    fn test_delete_dialog_flags_are_independent() {
        let mut state = DepartmentItemState::default();
        state.open_delete_member_dialog(member("x@y.com", MemberRole::Member));
        assert!(state.show_delete_member_dialog);
        assert!(!state.show_delete_library_dialog);

        // Opening the other dialog does not touch the first flag.
        state.open_delete_library_dialog(library("docs"));
        assert!(state.show_delete_member_dialog);
        assert!(state.show_delete_library_dialog);

        state.cancel_dialogs();
        assert!(!state.show_delete_member_dialog);
        assert!(!state.show_delete_library_dialog);
        // Cancel keeps the targets; the flags gate rendering.
        assert!(state.deleted_member.is_some());
        assert!(state.deleted_library.is_some());
    }

    #[test]
    fn test_hover_is_ignored_while_frozen() {
        assert_eq!(hover_transition(true, true), None);
        assert_eq!(hover_transition(true, false), None);
        assert_eq!(hover_transition(false, true), Some(true));
        assert_eq!(hover_transition(false, false), Some(false));
    }

    #[test]
    fn test_apply_info_replaces_snapshot() {
        let mut state = DepartmentItemState::default();
        state.group_name = "old".to_string();
        state.members = vec![member("gone@y.com", MemberRole::Member)];

        state.apply_info(DepartmentInfo {
            id: 42,
            name: "B".to_string(),
            members: vec![member("owner@y.com", MemberRole::Owner)],
            groups: vec![],
            ancestor_groups: vec![AncestorGroup {
                id: 1,
                name: "A".to_string(),
            }],
        });

        assert_eq!(state.group_name, "B");
        assert_eq!(state.members.len(), 1);
        assert_eq!(state.ancestor_groups.len(), 1);
    }

    #[test]
    fn test_apply_libraries_preserves_order() {
        let mut state = DepartmentItemState::default();
        state.apply_libraries(vec![library("b"), library("a"), library("c")]);
        let names: Vec<&str> = state.libraries.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }
}
