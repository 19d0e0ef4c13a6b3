//! Integration tests: environment detection against a local stand-in endpoint.

mod common;

use common::imds_server::{self, Reply};
use ec2md_core::Detector;
use std::net::{IpAddr, Ipv4Addr, TcpListener};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Resolves, but never to the expected address, so detection falls through to HTTP.
fn dns_miss(detector: Detector) -> Detector {
    detector
        .with_dns_host("localhost")
        .with_expected_addr(IpAddr::V4(Ipv4Addr::new(192, 0, 2, 1)))
}

#[tokio::test]
async fn http_probe_detects_responding_endpoint() {
    let server = imds_server::start(&[("/latest/", Reply::Status(200, ""))]);
    let d = dns_miss(Detector::new()).with_probe_url(server.base_url.clone());
    assert!(d.is_ec2().await);
    assert_eq!(d.runs(), 1);
}

#[tokio::test]
async fn http_probe_refused_is_not_ec2() {
    let port = {
        let l = TcpListener::bind("127.0.0.1:0").unwrap();
        l.local_addr().unwrap().port()
    };
    let d = dns_miss(Detector::new()).with_probe_url(format!("http://127.0.0.1:{}/latest/", port));
    assert!(!d.is_ec2().await);
    assert_eq!(d.cached(), Some(false));
}

#[tokio::test]
async fn http_probe_times_out_quickly_and_hangs_up() {
    let server = imds_server::start(&[("/latest/", Reply::Hang)]);
    let d = dns_miss(Detector::new()).with_probe_url(server.base_url.clone());
    let started = Instant::now();
    assert!(!d.is_ec2().await);
    assert!(started.elapsed() < Duration::from_secs(3), "{:?}", started.elapsed());
    server
        .closed
        .recv_timeout(Duration::from_secs(3))
        .expect("probe connection should be aborted");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_first_callers_share_one_detection() {
    let server = imds_server::start(&[("/latest/", Reply::Status(200, ""))]);
    let d = Arc::new(dns_miss(Detector::new()).with_probe_url(server.base_url.clone()));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let d = Arc::clone(&d);
            tokio::spawn(async move { d.is_ec2().await })
        })
        .collect();
    let mut results = Vec::new();
    for h in handles {
        results.push(h.await.unwrap());
    }

    assert!(results.iter().all(|&r| r));
    assert_eq!(d.runs(), 1);
    assert_eq!(d.cached(), Some(true));
}
