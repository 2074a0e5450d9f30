pub enum ApiPath {
    Static(&'static str),
    Dynamic(String),
}

impl ApiPath {
    pub fn as_str(&self) -> &str {
        match self {
            ApiPath::Static(s) => s,
            ApiPath::Dynamic(s) => s.as_str(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum BackendApiPost {
    Generate,
    Create,
    Get,
    ListByUser,
}

impl BackendApiPost {
    /// Route path; `id` fills the `{id}` or `{user_id}` segment, `None` keeps the axum placeholder.
    pub fn path(&self, id: Option<&str>) -> ApiPath {
        match self {
            BackendApiPost::Generate => ApiPath::Static("/v1/posts/generate"),
            BackendApiPost::Create => ApiPath::Static("/v1/posts"),
            BackendApiPost::Get => {
                let id = id.unwrap_or("{id}");
                ApiPath::Dynamic(format!("/v1/posts/{}", id))
            }
            BackendApiPost::ListByUser => {
                let user_id = id.unwrap_or("{user_id}");
                ApiPath::Dynamic(format!("/v1/users/{}/posts", user_id))
            }
        }
    }
}

pub fn all_backend_api_paths() -> Vec<String> {
    [
        BackendApiPost::Generate,
        BackendApiPost::Create,
        BackendApiPost::Get,
        BackendApiPost::ListByUser,
    ]
    .iter()
    .map(|post| format!("/api{}", post.path(None).as_str()))
    .collect()
}
