//! Create Project - Model Layer
//!
//! API calls used by the dialog

use crate::shared::api_error::ApiError;
use crate::shared::api_utils::{api_url, api_url_with_query};
use contracts::domain::a001_project::{CreateProjectRequest, ProjectCreatedResponse};
use gloo_net::http::{Method, Request, RequestBuilder};

/// Ask the server whether a project with this exact name exists.
///
/// `Ok(true)` on 200, `Ok(false)` on 404; any other status is an error.
pub async fn check_project_exists(name: &str) -> Result<bool, ApiError> {
    let url = api_url_with_query("/api/projects", "project_name", name);
    let response = RequestBuilder::new(&url)
        .method(Method::HEAD)
        .send()
        .await?;

    match response.status() {
        200 => Ok(true),
        404 => Ok(false),
        status => Err(ApiError::Status(status)),
    }
}

/// Create a project. Conflicts and validation failures come back as
/// `ApiError::Status(409)` and `ApiError::Status(400)`.
///
/// Any success status counts as created; the new id is `None` when the body
/// could not be read.
pub async fn create_project(request: &CreateProjectRequest) -> Result<Option<String>, ApiError> {
    let response = Request::post(&api_url("/api/projects"))
        .json(request)?
        .send()
        .await?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    Ok(created_id(response.json::<ProjectCreatedResponse>().await.map_err(ApiError::from)))
}

fn created_id(body: Result<ProjectCreatedResponse, ApiError>) -> Option<String> {
    match body {
        Ok(created) => Some(created.id),
        Err(e) => {
            log::warn!("create project: unreadable 2xx body: {}", e);
            None
        }
    }
}
