//! Are we running on EC2?
//!
//! Detection tries the cheap heuristic first: the EC2-internal hostname
//! `instance-data.ec2.internal.` resolves to the metadata address on the
//! Amazon-provided DNS. That fails under custom DNS or VPC isolation, so a
//! miss falls through to a HEAD request against the metadata endpoint with a
//! short deadline. The host does not change while the process runs, so the
//! answer is computed once per [`Detector`] and memoized.

mod probe;

use crate::resolve::BASE_URL;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;
use std::time::Duration;
use tokio::sync::OnceCell;

/// EC2-internal hostname used for the DNS heuristic.
pub const EC2_INTERNAL_HOST: &str = "instance-data.ec2.internal.";

/// Address of the instance metadata service.
pub const METADATA_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::new(169, 254, 169, 254));

/// Deadline for the HEAD probe.
pub const PROBE_TIMEOUT: Duration = Duration::from_millis(500);

/// Upper bound on the DNS heuristic before falling back to the HEAD probe.
pub const DNS_TIMEOUT: Duration = Duration::from_secs(1);

/// One-shot environment detector.
///
/// Concurrent first callers of [`Detector::is_ec2`] share a single in-flight
/// detection and all observe its result.
#[derive(Debug)]
pub struct Detector {
    dns_host: String,
    expected_addr: IpAddr,
    probe_url: String,
    probe_timeout: Duration,
    dns_timeout: Duration,
    resolved: OnceCell<bool>,
    runs: AtomicUsize,
}

impl Default for Detector {
    fn default() -> Self {
        Self {
            dns_host: EC2_INTERNAL_HOST.to_string(),
            expected_addr: METADATA_ADDR,
            probe_url: BASE_URL.to_string(),
            probe_timeout: PROBE_TIMEOUT,
            dns_timeout: DNS_TIMEOUT,
            resolved: OnceCell::new(),
            runs: AtomicUsize::new(0),
        }
    }
}

impl Detector {
    /// Detector for the real EC2 endpoint.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hostname used for the DNS heuristic.
    pub fn with_dns_host(mut self, host: impl Into<String>) -> Self {
        self.dns_host = host.into();
        self
    }

    /// Address the DNS heuristic must resolve to.
    pub fn with_expected_addr(mut self, addr: IpAddr) -> Self {
        self.expected_addr = addr;
        self
    }

    /// URL the HEAD probe targets.
    pub fn with_probe_url(mut self, url: impl Into<String>) -> Self {
        self.probe_url = url.into();
        self
    }

    pub fn with_probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = timeout;
        self
    }

    pub fn with_dns_timeout(mut self, timeout: Duration) -> Self {
        self.dns_timeout = timeout;
        self
    }

    /// Memoized detection result; runs detection on first call only.
    pub async fn is_ec2(&self) -> bool {
        *self.resolved.get_or_init(|| self.detect()).await
    }

    /// Result if detection already completed.
    pub fn cached(&self) -> Option<bool> {
        self.resolved.get().copied()
    }

    /// How many times the detection logic actually ran (0 or 1).
    pub fn runs(&self) -> usize {
        self.runs.load(Ordering::SeqCst)
    }

    async fn detect(&self) -> bool {
        self.runs.fetch_add(1, Ordering::SeqCst);

        if probe::dns_points_at(&self.dns_host, self.expected_addr, self.dns_timeout).await {
            tracing::debug!("{} resolves to {}; running on EC2", self.dns_host, self.expected_addr);
            return true;
        }

        let on_ec2 = probe::head_responds(&self.probe_url, self.probe_timeout).await;
        tracing::debug!("HEAD probe of {} concluded on_ec2={}", self.probe_url, on_ec2);
        on_ec2
    }
}

/// Process-wide detector for the real endpoint.
fn global() -> &'static Detector {
    static DETECTOR: OnceLock<Detector> = OnceLock::new();
    DETECTOR.get_or_init(Detector::new)
}

/// True if this process runs on an EC2 instance. Detected once per process.
pub async fn is_ec2() -> bool {
    global().is_ec2().await
}
