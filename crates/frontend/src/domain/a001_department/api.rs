//! REST surface of the department admin API.
//!
//! All operations are scoped to an org id, which callers pull from
//! [`crate::system::org_context::OrgContext`].

use crate::shared::api_utils::api_url;
use contracts::domain::a001_department::{AddDepartmentRequest, AddMemberRequest, DepartmentInfo};
use contracts::domain::a002_member::SetMemberAdminRequest;
use contracts::domain::a003_library::{CreateLibraryRequest, Library, LibraryListResponse};
use gloo_net::http::Request;

fn groups_base(org_id: &str) -> String {
    api_url(&format!("/api/v2.1/org/{}/admin/groups", org_id))
}

fn group_base(org_id: &str, group_id: &str) -> String {
    format!("{}/{}", groups_base(org_id), group_id)
}

/// Libraries shared with the department.
pub async fn list_department_libraries(
    org_id: &str,
    group_id: &str,
) -> Result<Vec<Library>, String> {
    let url = format!("{}/libraries/", group_base(org_id, group_id));

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: LibraryListResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data.libraries)
}

/// Department info. With `with_ancestors` the response also carries the
/// direct subgroups and the root-first ancestor chain.
pub async fn get_department_info(
    org_id: &str,
    group_id: &str,
    with_ancestors: bool,
) -> Result<DepartmentInfo, String> {
    let url = format!(
        "{}/?return_ancestors={}",
        group_base(org_id, group_id),
        with_ancestors
    );

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: DepartmentInfo = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}

/// Flip a member between Admin and Member.
pub async fn set_member_admin(
    org_id: &str,
    group_id: &str,
    email: &str,
    is_admin: bool,
) -> Result<(), String> {
    let url = format!(
        "{}/members/{}/",
        group_base(org_id, group_id),
        urlencoding::encode(email)
    );

    let response = Request::put(&url)
        .json(&SetMemberAdminRequest { is_admin })
        .map_err(|e| format!("Request failed: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    Ok(())
}

pub async fn add_department_member(
    org_id: &str,
    group_id: &str,
    email: &str,
) -> Result<(), String> {
    let url = format!("{}/members/", group_base(org_id, group_id));

    let response = Request::post(&url)
        .json(&AddMemberRequest {
            email: email.to_string(),
        })
        .map_err(|e| format!("Request failed: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    Ok(())
}

pub async fn delete_department_member(
    org_id: &str,
    group_id: &str,
    email: &str,
) -> Result<(), String> {
    let url = format!(
        "{}/members/{}/",
        group_base(org_id, group_id),
        urlencoding::encode(email)
    );

    let response = Request::delete(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    Ok(())
}

pub async fn create_department_library(
    org_id: &str,
    group_id: &str,
    name: &str,
) -> Result<(), String> {
    let url = format!("{}/libraries/", group_base(org_id, group_id));

    let response = Request::post(&url)
        .json(&CreateLibraryRequest {
            name: name.to_string(),
        })
        .map_err(|e| format!("Request failed: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    Ok(())
}

pub async fn delete_department_library(
    org_id: &str,
    group_id: &str,
    library_id: &str,
) -> Result<(), String> {
    let url = format!("{}/libraries/{}/", group_base(org_id, group_id), library_id);

    let response = Request::delete(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    Ok(())
}

/// Create a department, optionally nested under `parent_group`.
pub async fn add_department(
    org_id: &str,
    name: &str,
    parent_group: Option<i64>,
) -> Result<(), String> {
    let url = format!("{}/", groups_base(org_id));

    let response = Request::post(&url)
        .json(&AddDepartmentRequest {
            name: name.to_string(),
            parent_group,
        })
        .map_err(|e| format!("Request failed: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    Ok(())
}
