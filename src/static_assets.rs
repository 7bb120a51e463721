use axum::extract::Path;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use include_dir::{Dir, include_dir};
use mime_guess::from_path;

// The canvas client ships inside the binary.
static CLIENT_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/static");

/// Serves the client entry point.
pub async fn serve_index() -> Response {
    serve_embedded("index.html")
}

/// Serves any other embedded client asset by path.
pub async fn serve_static_file(Path(path): Path<String>) -> Response {
    serve_embedded(&path)
}

fn serve_embedded(path: &str) -> Response {
    match CLIENT_DIR.get_file(path) {
        Some(file) => {
            let mime_type = from_path(path).first_or_octet_stream().to_string();
            (
                [(header::CONTENT_TYPE, mime_type)],
                file.contents().to_vec(),
            )
                .into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
