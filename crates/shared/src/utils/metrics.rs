use prometheus_client::{
    encoding::{EncodeLabelSet, EncodeLabelValue},
    metrics::{
        counter::Counter,
        family::Family,
        histogram::{Histogram, exponential_buckets},
    },
    registry::Registry,
};

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Method {
    Create,
    Get,
    Update,
    Delete,
    TotalCost,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Status {
    Success,
    Error,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
struct RequestLabels {
    method: Method,
    status: Status,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
struct MethodLabels {
    method: Method,
}

fn duration_histogram() -> Histogram {
    Histogram::new(exponential_buckets(0.001, 2.0, 14))
}

/// Per-operation counters and latency histograms. Clones share the same
/// underlying series.
#[derive(Clone, Debug)]
pub struct Metrics {
    requests: Family<RequestLabels, Counter>,
    duration: Family<MethodLabels, Histogram, fn() -> Histogram>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            requests: Family::default(),
            duration: Family::new_with_constructor(duration_histogram),
        }
    }

    pub fn register(&self, registry: &mut Registry) {
        registry.register(
            "subscription_requests",
            "Subscription operations by method and outcome",
            self.requests.clone(),
        );
        registry.register(
            "subscription_request_duration_seconds",
            "Subscription operation latency",
            self.duration.clone(),
        );
    }

    pub fn record(&self, method: Method, status: Status, elapsed_secs: f64) {
        self.requests
            .get_or_create(&RequestLabels {
                method: method.clone(),
                status,
            })
            .inc();
        self.duration
            .get_or_create(&MethodLabels { method })
            .observe(elapsed_secs);
    }

    pub fn count(&self, method: Method, status: Status) -> u64 {
        self.requests
            .get_or_create(&RequestLabels { method, status })
            .get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prometheus_client::encoding::text::encode;

    #[test]
    fn records_and_encodes_series() {
        let metrics = Metrics::new();
        let mut registry = Registry::default();
        metrics.register(&mut registry);

        metrics.record(Method::Create, Status::Success, 0.01);
        metrics.record(Method::Create, Status::Error, 0.02);
        metrics.record(Method::Create, Status::Success, 0.01);

        assert_eq!(metrics.count(Method::Create, Status::Success), 2);
        assert_eq!(metrics.count(Method::Create, Status::Error), 1);

        let mut out = String::new();
        encode(&mut out, &registry).unwrap();
        assert!(out.contains("subscription_requests_total"));
        assert!(out.contains("method=\"Create\""));
        assert!(out.contains("subscription_request_duration_seconds"));
    }
}
