use poem_openapi::Object;

#[derive(Debug, Clone, Object)]
pub struct SuggestionsResponse {
    /// Past queries, oldest first
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Object)]
pub struct QueryRequest {
    /// Text currently typed in the search field
    pub query: String,
}

#[derive(Debug, Clone, Object)]
pub struct QueryResponse {
    pub query: String,
}
