//! OpenTelemetry tracer provider setup.

use std::time::Duration;

use opentelemetry::KeyValue;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{
    Resource,
    trace::{RandomIdGenerator, Sampler, SdkTracerProvider},
};

use crate::config::ServerConfig;

use super::ObservabilityError;

pub(super) fn build_tracer_provider(
    config: &ServerConfig,
) -> Result<SdkTracerProvider, ObservabilityError> {
    let otel = &config.observability;

    let resource = Resource::builder_empty()
        .with_service_name(otel.otel_service_name.clone())
        .with_attributes([
            KeyValue::new("service.version", otel.otel_service_version.clone()),
            KeyValue::new(
                "deployment.environment.name",
                otel.otel_deployment_environment.clone(),
            ),
        ])
        .build();

    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(otel.otel_exporter_otlp_endpoint.clone())
        .with_timeout(Duration::from_secs(
            otel.otel_exporter_otlp_timeout_seconds,
        ))
        .build()?;

    Ok(SdkTracerProvider::builder()
        .with_sampler(Sampler::ParentBased(Box::new(Sampler::TraceIdRatioBased(
            clamp_sample_ratio(otel.otel_trace_sample_ratio),
        ))))
        .with_id_generator(RandomIdGenerator::default())
        .with_resource(resource)
        .with_batch_exporter(exporter)
        .build())
}

fn clamp_sample_ratio(sample_ratio: f64) -> f64 {
    if sample_ratio.is_nan() {
        return 1.0;
    }

    sample_ratio.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::clamp_sample_ratio;

    #[test]
    fn sample_ratio_is_clamped_to_unit_interval() {
        assert!((clamp_sample_ratio(1.5) - 1.0).abs() < f64::EPSILON, "above range");
        assert!(clamp_sample_ratio(-0.2).abs() < f64::EPSILON, "below range");
        assert!((clamp_sample_ratio(0.25) - 0.25).abs() < f64::EPSILON, "in range");
        assert!((clamp_sample_ratio(f64::NAN) - 1.0).abs() < f64::EPSILON, "nan");
    }
}
