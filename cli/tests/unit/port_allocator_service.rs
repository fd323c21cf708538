//! Port allocator service tests with a fake probe.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use hotswap_cli::application::PortAllocator;
use hotswap_cli::domain::{PortError, PortPair, PortRole};

use crate::mocks::FakeProbe;

fn pair(proxy_port: u16, app_port: u16) -> PortPair {
    PortPair {
        proxy_port,
        app_port,
    }
}

// ── check_port ────────────────────────────────────────────────────────────────

#[test]
fn test_check_port_reflects_probe() {
    let probe = FakeProbe::occupied([8080]);
    let alloc = PortAllocator::new(&probe);
    assert!(alloc.check_port(8081));
    assert!(!alloc.check_port(8080));
}

#[test]
fn test_check_port_zero_is_never_free() {
    let probe = FakeProbe::default();
    let alloc = PortAllocator::new(&probe);
    assert!(!alloc.check_port(0));
    assert!(probe.probed().is_empty(), "port 0 must not reach the probe");
}

// ── find_available_port ───────────────────────────────────────────────────────

#[test]
fn test_find_available_port_returns_start_when_free() {
    let alloc = PortAllocator::new(FakeProbe::default());
    assert_eq!(alloc.find_available_port(5000), Some(5000));
}

#[test]
fn test_find_available_port_skips_occupied_in_order() {
    let probe = FakeProbe::occupied(5000..5005);
    let alloc = PortAllocator::new(&probe);
    assert_eq!(alloc.find_available_port(5000), Some(5005));
    assert_eq!(probe.probed(), vec![5000, 5001, 5002, 5003, 5004, 5005]);
}

#[test]
fn test_find_available_port_last_slot_of_window() {
    let alloc = PortAllocator::new(FakeProbe::occupied(5000..5099));
    assert_eq!(alloc.find_available_port(5000), Some(5099));
}

#[test]
fn test_find_available_port_window_exhausted() {
    let probe = FakeProbe::occupied(5000..5100);
    let alloc = PortAllocator::new(&probe);
    assert_eq!(alloc.find_available_port(5000), None);
    assert_eq!(probe.probed().len(), 100, "scan must stop at the window edge");
    assert!(!probe.probed().contains(&5100));
}

#[test]
fn test_find_available_port_near_u16_max_does_not_wrap() {
    let alloc = PortAllocator::new(FakeProbe::occupied(65_500..=u16::MAX));
    assert_eq!(alloc.find_available_port(65_500), None);
}

// ── find_available_ports ──────────────────────────────────────────────────────

#[test]
fn test_find_available_ports_fast_path_returns_requested() {
    let probe = FakeProbe::default();
    let alloc = PortAllocator::new(&probe);
    assert_eq!(alloc.find_available_ports(3000, 3001), Ok(pair(3000, 3001)));
    assert_eq!(probe.probed(), vec![3000, 3001], "no scanning on the fast path");
}

#[test]
fn test_find_available_ports_same_request_yields_distinct() {
    let alloc = PortAllocator::new(FakeProbe::default());
    assert_eq!(alloc.find_available_ports(4000, 4000), Ok(pair(4000, 4001)));
}

#[test]
fn test_find_available_ports_proxy_occupied() {
    let alloc = PortAllocator::new(FakeProbe::occupied([3000]));
    let got = alloc.find_available_ports(3000, 3001).expect("allocated");
    assert_ne!(got.proxy_port, 3000);
    assert_ne!(got.proxy_port, got.app_port);
    assert!((3000..3100).contains(&got.proxy_port));
}

#[test]
fn test_find_available_ports_both_occupied() {
    let alloc = PortAllocator::new(FakeProbe::occupied([3000, 3001]));
    let got = alloc.find_available_ports(3000, 3001).expect("allocated");
    assert_eq!(got, pair(3002, 3003));
}

#[test]
fn test_find_available_ports_app_scan_skips_resolved_proxy() {
    // Proxy 3000 busy → 3001. App 3001 now collides → scan from 3001 skips it.
    let alloc = PortAllocator::new(FakeProbe::occupied([3000]));
    let got = alloc.find_available_ports(3000, 3001).expect("allocated");
    assert_eq!(got, pair(3001, 3002));
}

#[test]
fn test_find_available_ports_proxy_exhausted() {
    let alloc = PortAllocator::new(FakeProbe::occupied(3000..3100));
    assert_eq!(
        alloc.find_available_ports(3000, 9000),
        Err(PortError::Exhausted {
            role: PortRole::Proxy,
            start: 3000
        })
    );
}

#[test]
fn test_find_available_ports_app_exhausted_reports_no_partial_pair() {
    let alloc = PortAllocator::new(FakeProbe::occupied(9000..9100));
    assert_eq!(
        alloc.find_available_ports(3000, 9000),
        Err(PortError::Exhausted {
            role: PortRole::App,
            start: 9000
        })
    );
}

#[test]
fn test_find_available_ports_app_window_only_holds_proxy() {
    // Every app candidate is busy except 4000, which the proxy already took.
    let busy: Vec<u16> = (4001..4100).collect();
    let alloc = PortAllocator::new(FakeProbe::occupied(busy));
    let err = alloc.find_available_ports(4000, 4000).unwrap_err();
    assert_eq!(
        err,
        PortError::Exhausted {
            role: PortRole::App,
            start: 4000
        }
    );
}
