use axum::response::Html;

pub const INDEX_HTML: &str = include_str!("index.html");

/// `GET /`
pub async fn handle_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
