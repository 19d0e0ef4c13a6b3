//! Tests for get, is-ec2 and summary.

use super::parse;
use crate::cli::commands::{fetch_all, retry_policy};
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use ec2md_core::config::{Ec2mdConfig, RetryConfig};
use ec2md_core::MetadataError;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

#[test]
fn cli_parse_get_plain() {
    match parse(&["ec2md", "get", "instance-id"]) {
        CliCommand::Get {
            type_name,
            args,
            retry,
        } => {
            assert_eq!(type_name, "instance-id");
            assert!(args.is_empty());
            assert!(!retry);
        }
        _ => panic!("expected Get"),
    }
}

#[test]
fn cli_parse_get_with_args_and_retry() {
    match parse(&[
        "ec2md",
        "get",
        "network/interfaces/macs/mac/ipv4-associations/public-ip",
        "01-23-45-67-89-ab",
        "203.0.113.7",
        "--retry",
    ]) {
        CliCommand::Get {
            type_name,
            args,
            retry,
        } => {
            assert_eq!(
                type_name,
                "network/interfaces/macs/mac/ipv4-associations/public-ip"
            );
            assert_eq!(args, ["01-23-45-67-89-ab", "203.0.113.7"]);
            assert!(retry);
        }
        _ => panic!("expected Get with args"),
    }
}

#[test]
fn cli_parse_get_requires_type() {
    assert!(Cli::try_parse_from(["ec2md", "get"]).is_err());
}

#[test]
fn cli_parse_is_ec2() {
    match parse(&["ec2md", "is-ec2"]) {
        CliCommand::IsEc2 => {}
        _ => panic!("expected IsEc2"),
    }
}

#[test]
fn cli_parse_summary() {
    match parse(&["ec2md", "summary"]) {
        CliCommand::Summary => {}
        _ => panic!("expected Summary"),
    }
}

#[test]
fn get_without_retry_never_loads_config() {
    let policy = retry_policy(false, || -> anyhow::Result<Ec2mdConfig> {
        panic!("config must not be loaded for a plain get")
    })
    .unwrap();
    assert!(policy.is_none());
}

#[test]
fn get_with_retry_ignores_summary_types() {
    let cfg = Ec2mdConfig {
        summary_types: vec!["bogus".to_string()],
        retry: Some(RetryConfig {
            max_attempts: 4,
            base_delay_secs: 0.1,
            max_delay_secs: 1,
        }),
    };
    let policy = retry_policy(true, || Ok(cfg)).unwrap().expect("policy");
    assert_eq!(policy.max_attempts, 4);
    assert_eq!(policy.base_delay, Duration::from_millis(100));
}

#[test]
fn get_with_retry_reports_config_errors() {
    let err = retry_policy(true, || anyhow::bail!("unreadable")).unwrap_err();
    assert!(format!("{:#}", err).contains("unreadable"));
}

#[tokio::test]
async fn summary_awaits_every_fetch_after_a_failure() {
    let types: Vec<String> = ["ami-id", "hostname", "public-ipv4"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let finished = Arc::new(AtomicUsize::new(0));
    let counter = finished.clone();
    let values = fetch_all(&types, move |t| {
        let counter = counter.clone();
        async move {
            if t == "ami-id" {
                return Err(MetadataError::Timeout);
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(Some(format!("{}-value", t)))
        }
    })
    .await
    .unwrap();

    assert_eq!(finished.load(Ordering::SeqCst), 2);
    let names: Vec<&str> = values.iter().map(|(t, _)| t.as_str()).collect();
    assert_eq!(names, ["ami-id", "hostname", "public-ipv4"]);
    assert!(matches!(values[0].1, Err(MetadataError::Timeout)));
    assert_eq!(values[2].1.as_ref().unwrap().as_deref(), Some("public-ipv4-value"));
}

#[tokio::test]
async fn summary_rejects_bad_types_before_fetching() {
    let cfg = Ec2mdConfig {
        summary_types: vec!["block-device-mapping/ebsN".to_string()],
        retry: None,
    };
    let err = crate::cli::commands::run_summary(&cfg).await.unwrap_err();
    assert!(err.to_string().contains("needs 1 argument"), "{}", err);
}
