//! Serve the built site from public/ when it exists. API paths are never
//! served from disk.

use std::fs;

use super::routes::HttpResponse;

/// Try to serve a static file. Returns None when static serving is not
/// available or the path belongs to the API.
pub fn try_serve_static(method: &str, path: &str) -> Option<HttpResponse> {
    if method != "GET" {
        return None;
    }
    if path.starts_with("/api") || path == "/" {
        return None;
    }

    let path = path.split('?').next().unwrap_or(path).trim_start_matches('/');
    if path.contains("..") {
        return None;
    }

    let base = std::env::current_dir().ok()?;
    let public = base.join("public").canonicalize().ok().or_else(|| {
        let d = base.join("dist");
        d.canonicalize().ok()
    })?;

    let file_path = public.join(path);
    if !file_path.starts_with(&public) || !file_path.is_file() {
        return None;
    }

    let content_type = content_type_for_path(path);
    if !is_text_content_type(content_type) {
        return None;
    }
    let body = fs::read_to_string(&file_path).ok()?;

    Some(HttpResponse {
        status_code: 200,
        status_text: "OK",
        content_type,
        body,
    })
}

fn content_type_for_path(path: &str) -> &'static str {
    if path.ends_with(".html") {
        "text/html; charset=utf-8"
    } else if path.ends_with(".js") {
        "application/javascript; charset=utf-8"
    } else if path.ends_with(".css") {
        "text/css; charset=utf-8"
    } else if path.ends_with(".json") {
        "application/json; charset=utf-8"
    } else if path.ends_with(".csv") {
        "text/csv; charset=utf-8"
    } else {
        "application/octet-stream"
    }
}

fn is_text_content_type(ct: &str) -> bool {
    ct.starts_with("text/")
        || ct.starts_with("application/javascript")
        || ct.starts_with("application/json")
}
