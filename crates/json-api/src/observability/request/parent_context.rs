//! Parent trace context extraction from HTTP headers.

use opentelemetry::{Context, global, propagation::Extractor, trace::TraceContextExt as _};
use salvo::http::{HeaderMap, HeaderName};

/// The caller's trace context, when the headers carry a valid one.
pub(super) fn extract_parent_context(headers: &HeaderMap) -> Option<Context> {
    let carrier = HeaderCarrier(headers);

    global::get_text_map_propagator(|propagator| {
        // Extract onto an empty context so a request without trace headers
        // never inherits an in-process span.
        let context = propagator.extract_with_context(&Context::new(), &carrier);
        let is_valid = context.span().span_context().is_valid();

        is_valid.then_some(context)
    })
}

#[derive(Debug)]
struct HeaderCarrier<'a>(&'a HeaderMap);

impl Extractor for HeaderCarrier<'_> {
    fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key)?.to_str().ok()
    }

    fn keys(&self) -> Vec<&str> {
        self.0.keys().map(HeaderName::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use opentelemetry_sdk::propagation::TraceContextPropagator;
    use salvo::http::header::HeaderValue;

    use super::*;

    #[test]
    fn traceparent_header_becomes_parent_context() {
        global::set_text_map_propagator(TraceContextPropagator::new());

        let mut headers = HeaderMap::new();

        headers.insert(
            "traceparent",
            HeaderValue::from_static("00-4bf92f3577b34da6a3ce929d0e0e4736-00f067aa0ba902b7-01"),
        );

        let context = extract_parent_context(&headers);

        assert_eq!(
            context.map(|context| context.span().span_context().trace_id().to_string()),
            Some("4bf92f3577b34da6a3ce929d0e0e4736".to_owned())
        );
    }

    #[test]
    fn missing_trace_headers_yield_no_parent() {
        global::set_text_map_propagator(TraceContextPropagator::new());

        assert!(extract_parent_context(&HeaderMap::new()).is_none());
    }
}
