//! Property-based tests for the allocator and binary-name invariants.
//!
//! Uses `proptest` to verify invariants across many random occupancy patterns.

#![allow(clippy::expect_used)]

use proptest::prelude::*;

use hotswap_cli::application::PortAllocator;
use hotswap_cli::domain::port::scan_window;
use hotswap_cli::domain::{PortError, PortRole, TargetOs, resolve_binary_name};

use crate::mocks::FakeProbe;

fn scenario() -> impl Strategy<Value = (u16, Vec<u16>, u16, u16)> {
    (1_000u16..60_000).prop_flat_map(|base| {
        (
            Just(base),
            prop::collection::vec(0u16..250, 0..200),
            0u16..150,
            0u16..150,
        )
    })
}

proptest! {
    /// A successful allocation is two distinct, free ports inside their windows.
    #[test]
    fn prop_allocated_pair_is_distinct_and_free((base, busy, p, a) in scenario()) {
        let probe = FakeProbe::occupied(busy.iter().map(|o| base + o));
        let alloc = PortAllocator::new(&probe);
        let (proxy_req, app_req) = (base + p, base + a);

        match alloc.find_available_ports(proxy_req, app_req) {
            Ok(pair) => {
                prop_assert_ne!(pair.proxy_port, pair.app_port);
                prop_assert!(!probe.is_occupied(pair.proxy_port));
                prop_assert!(!probe.is_occupied(pair.app_port));
                prop_assert!(scan_window(proxy_req).any(|x| x == pair.proxy_port));
                prop_assert!(scan_window(app_req).any(|x| x == pair.app_port));
            }
            Err(PortError::Exhausted { role: PortRole::Proxy, start }) => {
                prop_assert_eq!(start, proxy_req);
                prop_assert!(scan_window(proxy_req).all(|x| probe.is_occupied(x)));
            }
            Err(PortError::Exhausted { role: PortRole::App, start }) => {
                prop_assert_eq!(start, app_req);
                let free_in_window = scan_window(app_req).filter(|&x| !probe.is_occupied(x)).count();
                prop_assert!(free_in_window <= 1, "app window had {} free ports", free_in_window);
            }
        }
    }

    /// Distinct, free requests come back untouched.
    #[test]
    fn prop_free_distinct_request_is_kept((base, busy, p, a) in scenario()) {
        let (proxy_req, app_req) = (base + p, base + a);
        let busy: Vec<u16> = busy
            .iter()
            .map(|o| base + o)
            .filter(|&x| x != proxy_req && x != app_req)
            .collect();
        prop_assume!(proxy_req != app_req);
        let alloc = PortAllocator::new(FakeProbe::occupied(busy));
        let pair = alloc.find_available_ports(proxy_req, app_req).expect("fast path");
        prop_assert_eq!((pair.proxy_port, pair.app_port), (proxy_req, app_req));
    }

    /// A single-port scan returns the first free candidate, or none.
    #[test]
    fn prop_find_available_port_is_first_free((base, busy, p, _a) in scenario()) {
        let probe = FakeProbe::occupied(busy.iter().map(|o| base + o));
        let alloc = PortAllocator::new(&probe);
        let start = base + p;
        let expected = scan_window(start).find(|&x| !probe.is_occupied(x));
        prop_assert_eq!(alloc.find_available_port(start), expected);
    }

    /// Resolving a binary name twice never changes it again.
    #[test]
    fn prop_binary_name_resolution_is_idempotent(name in "[A-Za-z0-9_.-]{0,16}") {
        for os in [TargetOs::Unix, TargetOs::Windows] {
            let once = resolve_binary_name(&name, os);
            prop_assert_eq!(resolve_binary_name(&once, os), once.clone());
            prop_assert!(!once.is_empty());
            if os == TargetOs::Windows {
                prop_assert!(once.ends_with(".exe"));
                prop_assert!(!once.ends_with(".exe.exe") || name.ends_with(".exe.exe"));
            }
        }
    }
}
