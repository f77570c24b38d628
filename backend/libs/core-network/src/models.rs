use serde::{Deserialize, Serialize};

/// User record as returned by the API surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiUserDto {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    pub is_active: bool,
}

/// Post record as returned by the API surface
///
/// Only `id` and `title` participate in snapshot checksums; the body is
/// opaque to the feed pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiPostDto {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
}

/// A single request handed to a `NetworkClient`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkRequest {
    pub path: String,
    pub method: String,
    pub body: Option<String>,
}

impl NetworkRequest {
    /// Build a GET request with no body.
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method: "GET".to_string(),
            body: None,
        }
    }
}

/// Response returned by a `NetworkClient`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkResponse {
    pub code: u16,
    pub body: Option<String>,
}

impl NetworkResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            code: 200,
            body: Some(body.into()),
        }
    }

    pub fn status(code: u16) -> Self {
        Self { code, body: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_request_has_no_body() {
        let request = NetworkRequest::get("/users/1");
        assert_eq!(request.path, "/users/1");
        assert_eq!(request.method, "GET");
        assert_eq!(request.body, None);
    }

    #[test]
    fn test_user_dto_decodes_without_email() {
        let dto: ApiUserDto =
            serde_json::from_str(r#"{"id":4,"name":"User-4","is_active":true}"#).unwrap();
        assert_eq!(dto.id, 4);
        assert_eq!(dto.email, None);
    }

    #[test]
    fn test_post_dto_decodes_without_body() {
        let dto: ApiPostDto =
            serde_json::from_str(r#"{"id":400,"user_id":4,"title":"t"}"#).unwrap();
        assert_eq!(dto.user_id, 4);
        assert_eq!(dto.body, None);
    }
}
