use crate::data::export_csv::{export_table, ExportError};
use crate::data::registry::DataRegistry;
use crate::server::api;
use crate::server::static_files;

pub struct HttpResponse {
    pub status_code: u16,
    pub status_text: &'static str,
    pub content_type: &'static str,
    pub body: String,
}

impl HttpResponse {
    pub fn to_http_string(&self) -> String {
        format!(
            "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            self.status_code,
            self.status_text,
            self.content_type,
            self.body.len(),
            self.body
        )
    }
}

pub fn route_request(registry: &DataRegistry, method: &str, path: &str) -> HttpResponse {
    if let Some(response) = static_files::try_serve_static(method, path) {
        return response;
    }
    if method != "GET" {
        return error_response(405, "Method Not Allowed", "Only GET is supported");
    }

    let route = path.split('?').next().unwrap_or(path);
    match route {
        "/" => HttpResponse {
            status_code: 200,
            status_text: "OK",
            content_type: "text/html; charset=utf-8",
            body: index_html(),
        },
        "/api/health" => respond(api::health_payload()),
        "/api/stats" => respond(api::stats_payload(registry)),
        "/api/data/version" => respond(api::data_version_payload(registry)),
        "/api/nationalities" => respond(api::nationalities_payload(registry)),
        "/api/courts" => respond(api::courts_payload(registry)),
        "/api/judges" => respond(api::judges_payload(registry)),
        "/api/appeals" => respond(api::appeals_payload(registry)),
        "/api/border-encounters" => respond(api::border_encounters_payload(registry)),
        "/api/drug-seizures" => respond(api::drug_seizures_payload(registry)),
        "/api/bonds" => respond(api::bonds_payload(registry)),
        "/api/wait-times" => respond(api::wait_times_payload(registry)),
        "/api/custody" => respond(api::custody_payload(registry)),
        "/api/gender" => respond(api::gender_payload(registry)),
        "/api/languages" => respond(api::languages_payload(registry)),
        "/api/case-types" => respond(api::case_types_payload(registry)),
        "/api/outcomes" => respond(api::outcomes_payload(registry)),
        "/api/yearly-trends" => respond(api::yearly_trends_payload(registry)),
        route if route.starts_with("/api/nationalities/") => {
            let slug = tail_segment(route, "/api/nationalities/");
            respond(api::nationality_detail_payload(registry, slug))
        }
        route if route.starts_with("/api/courts/") => {
            let slug = tail_segment(route, "/api/courts/");
            respond(api::court_detail_payload(registry, slug))
        }
        route if route.starts_with("/api/judges/") => {
            let slug = tail_segment(route, "/api/judges/");
            respond(api::judge_detail_payload(registry, slug))
        }
        route if route.starts_with("/api/top/") => {
            let category = tail_segment(route, "/api/top/");
            let n = parse_query_n(path).unwrap_or(api::DEFAULT_TOP_N);
            respond(api::top_payload(registry, category, n))
        }
        route if route.starts_with("/api/export/") => {
            let table = tail_segment(route, "/api/export/").trim_end_matches(".csv");
            export_response(registry, table)
        }
        _ => error_response(404, "Not Found", "Route not found"),
    }
}

fn tail_segment<'a>(route: &'a str, prefix: &str) -> &'a str {
    route
        .trim_start_matches(prefix)
        .split('/')
        .next()
        .unwrap_or("")
}

/// Parse `n=<count>` from the query string.
fn parse_query_n(path: &str) -> Option<usize> {
    let query = path.split('?').nth(1)?;
    query
        .split('&')
        .find_map(|pair| pair.trim().strip_prefix("n="))
        .and_then(|value| value.parse::<usize>().ok())
}

fn respond(result: Result<String, api::ApiError>) -> HttpResponse {
    match result {
        Ok(payload) => HttpResponse {
            status_code: 200,
            status_text: "OK",
            content_type: "application/json",
            body: payload,
        },
        Err(api::ApiError::NotFound(message)) => error_response(404, "Not Found", message),
        Err(err) => error_response(500, "Internal Server Error", &err.to_string()),
    }
}

fn export_response(registry: &DataRegistry, table: &str) -> HttpResponse {
    match export_table(registry, table) {
        Ok(csv) => HttpResponse {
            status_code: 200,
            status_text: "OK",
            content_type: "text/csv; charset=utf-8",
            body: csv,
        },
        Err(ExportError::UnknownTable(_)) => {
            error_response(404, "Not Found", "Unknown export table")
        }
        Err(ExportError::NotAvailable(_)) => {
            error_response(404, "Not Found", "Dataset not available")
        }
        Err(err) => error_response(500, "Internal Server Error", &err.to_string()),
    }
}

fn error_response(status_code: u16, status_text: &'static str, message: &str) -> HttpResponse {
    HttpResponse {
        status_code,
        status_text,
        content_type: "application/json",
        body: format!(
            "{{\n  \"status\": \"error\",\n  \"message\": {}\n}}",
            serde_json::to_string(message).unwrap_or_else(|_| "\"Unknown error\"".to_string())
        ),
    }
}

fn index_html() -> String {
    r##"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width,initial-scale=1" />
  <title>Docket API Console</title>
  <style>
    body { font-family: Georgia, serif; max-width: 860px; margin: 24px auto; padding: 0 12px; }
    h1 { margin-bottom: 8px; }
    .card { border: 1px solid #ddd; border-radius: 8px; padding: 14px; margin: 14px 0; }
    a { margin-right: 12px; }
    pre { background: #111; color: #d8e8ff; padding: 12px; overflow: auto; border-radius: 6px; min-height: 160px; }
  </style>
</head>
<body>
  <h1>Docket Local API</h1>
  <p>Immigration court statistics, served from the local data directory.</p>

  <div class="card">
    <strong>Datasets</strong>
    <div>
      <a href="#" data-path="/api/stats">stats</a>
      <a href="#" data-path="/api/nationalities">nationalities</a>
      <a href="#" data-path="/api/courts">courts</a>
      <a href="#" data-path="/api/judges">judges</a>
      <a href="#" data-path="/api/top/nationalities?n=10">top nationalities</a>
      <a href="#" data-path="/api/appeals">appeals</a>
      <a href="#" data-path="/api/wait-times">wait times</a>
      <a href="#" data-path="/api/yearly-trends">trends</a>
      <a href="#" data-path="/api/data/version">data version</a>
    </div>
  </div>

  <pre id="output">Ready.</pre>

  <script>
    const output = document.getElementById('output');
    document.querySelectorAll('a[data-path]').forEach(link => {
      link.addEventListener('click', async (event) => {
        event.preventDefault();
        output.textContent = 'Loading…';
        const response = await fetch(link.dataset.path);
        output.textContent = 'HTTP ' + response.status + '\n' + await response.text();
      });
    });
  </script>
</body>
</html>
"##
    .to_string()
}
