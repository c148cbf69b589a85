//! Location parsing for the admin panel.

/// Extract the department id from an admin URL.
///
/// The id is the path segment following the `groups/` marker:
/// `.../org/departmentadmin/groups/42/` -> `Some("42")`. Returns `None`
/// when the marker is absent or the segment is empty; the view treats
/// that as "no department selected".
pub fn group_id_from_href(href: &str) -> Option<String> {
    let idx = href.find("groups/")?;
    let rest = &href[idx + "groups/".len()..];
    let id = rest.split(['/', '?', '#']).next().unwrap_or("");
    if id.is_empty() {
        None
    } else {
        Some(id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_with_trailing_slash() {
        assert_eq!(
            group_id_from_href("https://x.test/org/departmentadmin/groups/42/"),
            Some("42".to_string())
        );
    }

    #[test]
    fn test_id_without_trailing_slash() {
        assert_eq!(
            group_id_from_href("https://x.test/org/departmentadmin/groups/42"),
            Some("42".to_string())
        );
    }

    #[test]
    fn test_id_with_query() {
        assert_eq!(
            group_id_from_href("https://x.test/org/departmentadmin/groups/42?tab=members"),
            Some("42".to_string())
        );
    }

    #[test]
    fn test_marker_absent() {
        assert_eq!(group_id_from_href("https://x.test/org/departmentadmin/"), None);
        assert_eq!(group_id_from_href(""), None);
    }

    #[test]
    fn test_marker_with_empty_segment() {
        assert_eq!(group_id_from_href("https://x.test/org/departmentadmin/groups/"), None);
    }
}
