//! The two detection strategies: DNS heuristic and HTTP HEAD probe.

use std::net::IpAddr;
use std::str;
use std::time::Duration;

/// True if `host` resolves to `expected` within `timeout`.
///
/// Lookup failures and timeouts count as "no", so the caller falls through
/// to the HTTP probe.
pub(super) async fn dns_points_at(host: &str, expected: IpAddr, timeout: Duration) -> bool {
    match tokio::time::timeout(timeout, tokio::net::lookup_host((host, 80))).await {
        Ok(Ok(mut addrs)) => addrs.any(|a| a.ip() == expected),
        Ok(Err(e)) => {
            tracing::debug!("DNS lookup of {} failed: {}", host, e);
            false
        }
        Err(_) => {
            tracing::debug!("DNS lookup of {} timed out", host);
            false
        }
    }
}

/// HEAD `url`; true as soon as any response header arrives.
///
/// The header callback aborts the transfer on the first header line, so the
/// connection is torn down once the answer is known. Timeouts and connection
/// errors yield false.
pub(super) async fn head_responds(url: &str, timeout: Duration) -> bool {
    let url = url.to_string();
    match tokio::task::spawn_blocking(move || head_blocking(&url, timeout)).await {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!("HEAD probe task failed: {}", e);
            false
        }
    }
}

fn head_blocking(url: &str, timeout: Duration) -> bool {
    let mut responded = false;
    let outcome = (|| -> Result<(), curl::Error> {
        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.noproxy("*")?;
        easy.nobody(true)?; // HEAD request
        easy.timeout(timeout)?;
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            if str::from_utf8(data).is_ok_and(|line| line.starts_with("HTTP/")) {
                responded = true;
                return false; // abort: the answer is known
            }
            true
        })?;
        transfer.perform()?;
        Ok(())
    })();

    match outcome {
        _ if responded => true,
        Ok(()) => true,
        Err(e) => {
            tracing::debug!("HEAD probe of {} failed: {}", url, e);
            false
        }
    }
}
