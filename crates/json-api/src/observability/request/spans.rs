//! HTTP span and metric route naming.

use uuid::Uuid;

/// Path segments that are followed by a free-form identifier rather than a
/// UUID.
const REFERENCE_COLLECTIONS: [&str; 1] = ["payments"];

#[derive(Debug, Clone)]
pub(super) struct RequestSpanName {
    /// Low-cardinality route template, used as the metrics `route` label.
    pub(super) route: String,
    pub(super) otel_span_name: String,
}

pub(super) fn request_span_name(method: &str, path: &str) -> RequestSpanName {
    let route = route_template(path);
    let otel_span_name = format!("{method} {route}");

    RequestSpanName {
        route,
        otel_span_name,
    }
}

fn route_template(path: &str) -> String {
    let segments: Vec<&str> = path
        .trim_start_matches('/')
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect();

    let mut previous: Option<&str> = None;
    let mut template = Vec::with_capacity(segments.len());

    for segment in segments {
        let placeholder = if Uuid::parse_str(segment).is_ok() {
            "{uuid}"
        } else if previous.is_some_and(|collection| REFERENCE_COLLECTIONS.contains(&collection)) {
            "{reference}"
        } else {
            segment
        };

        template.push(placeholder);
        previous = Some(segment);
    }

    format!("/{}", template.join("/"))
}
