use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;

use axum::http::{HeaderMap, HeaderName};

/// Proxy headers consulted for the client address, highest priority first.
pub const DEFAULT_CANDIDATE_HEADERS: [&str; 5] = [
    "x-vercel-forwarded-for",
    "x-forwarded-for",
    "x-real-ip",
    "cf-connecting-ip",
    "true-client-ip",
];

#[derive(Debug, Clone)]
pub struct CandidateHeaders {
    names: Arc<[HeaderName]>,
}

impl Default for CandidateHeaders {
    fn default() -> Self {
        Self::new(
            DEFAULT_CANDIDATE_HEADERS
                .into_iter()
                .map(HeaderName::from_static)
                .collect(),
        )
    }
}

impl CandidateHeaders {
    pub fn new(names: Vec<HeaderName>) -> Self {
        Self {
            names: names.into(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &HeaderName> {
        self.names.iter()
    }
}

/// Resolves the caller's IPv4 address: the first candidate header whose
/// leading entry parses as IPv4 wins, otherwise the peer address if it is
/// IPv4. IPv6 is never returned.
pub fn extract_ipv4(
    candidates: &CandidateHeaders,
    headers: &HeaderMap,
    peer: Option<IpAddr>,
) -> Option<Ipv4Addr> {
    candidates
        .iter()
        .find_map(|name| header_step(headers, name))
        .or_else(|| peer_step(peer))
}

fn header_step(headers: &HeaderMap, name: &HeaderName) -> Option<Ipv4Addr> {
    let first = first_forwarded_entry(headers.get(name)?.as_bytes())?;
    match first.parse::<IpAddr>().ok()? {
        IpAddr::V4(address) => Some(address),
        IpAddr::V6(_) => None,
    }
}

fn peer_step(peer: Option<IpAddr>) -> Option<Ipv4Addr> {
    match peer? {
        IpAddr::V4(address) => Some(address),
        IpAddr::V6(_) => None,
    }
}

/// First comma-separated entry of a forwarding header, trimmed. Only that
/// entry has to be valid UTF-8; later entries are never decoded. `None` when
/// the entry is blank or undecodable.
pub fn first_forwarded_entry(value: &[u8]) -> Option<&str> {
    let first = value.split(|byte| *byte == b',').next()?;
    let first = std::str::from_utf8(first).ok()?.trim();
    (!first.is_empty()).then_some(first)
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for &(name, value) in pairs {
            map.insert(
                HeaderName::from_static(name),
                HeaderValue::from_static(value),
            );
        }
        map
    }

    fn extract(pairs: &[(&'static str, &'static str)], peer: Option<&str>) -> Option<Ipv4Addr> {
        let peer = peer.map(|value| value.parse().expect("peer address"));
        extract_ipv4(&CandidateHeaders::default(), &headers(pairs), peer)
    }

    #[test]
    fn first_forwarded_entry_wins() {
        let found = extract(&[("x-forwarded-for", "10.0.0.1, 192.168.1.1")], None);
        assert_eq!(found, Some(Ipv4Addr::new(10, 0, 0, 1)));
    }

    #[test]
    fn higher_priority_header_wins() {
        let found = extract(
            &[
                ("true-client-ip", "198.51.100.9"),
                ("x-real-ip", "198.51.100.7"),
                ("x-vercel-forwarded-for", "198.51.100.1"),
            ],
            Some("203.0.113.5"),
        );
        assert_eq!(found, Some(Ipv4Addr::new(198, 51, 100, 1)));
    }

    #[test]
    fn invalid_candidate_moves_to_next_header() {
        let found = extract(
            &[
                ("x-vercel-forwarded-for", "garbage"),
                ("x-forwarded-for", "2001:db8::1"),
                ("cf-connecting-ip", "192.0.2.44"),
            ],
            None,
        );
        assert_eq!(found, Some(Ipv4Addr::new(192, 0, 2, 44)));
    }

    #[test]
    fn blank_leading_entry_is_skipped() {
        let found = extract(
            &[("x-forwarded-for", " , 10.0.0.2"), ("x-real-ip", "10.0.0.3")],
            None,
        );
        assert_eq!(found, Some(Ipv4Addr::new(10, 0, 0, 3)));
    }

    #[test]
    fn only_the_first_entry_is_considered() {
        let found = extract(&[("x-forwarded-for", "2001:db8::1, 10.0.0.9")], None);
        assert_eq!(found, None);
    }

    #[test]
    fn falls_back_to_ipv4_peer() {
        let found = extract(&[], Some("203.0.113.5"));
        assert_eq!(found, Some(Ipv4Addr::new(203, 0, 113, 5)));
    }

    #[test]
    fn ipv6_everywhere_yields_nothing() {
        let found = extract(
            &[
                ("x-forwarded-for", "2001:db8::2"),
                ("x-real-ip", "::1"),
            ],
            Some("2001:db8::1"),
        );
        assert_eq!(found, None);
    }

    #[test]
    fn ipv4_mapped_ipv6_is_not_ipv4() {
        let found = extract(&[("x-real-ip", "::ffff:192.0.2.1")], Some("::ffff:192.0.2.1"));
        assert_eq!(found, None);
    }

    #[test]
    fn header_names_match_case_insensitively() {
        let mut map = HeaderMap::new();
        map.insert(
            HeaderName::from_bytes(b"X-Real-Ip").expect("header name"),
            HeaderValue::from_static("192.0.2.8"),
        );
        let found = extract_ipv4(&CandidateHeaders::default(), &map, None);
        assert_eq!(found, Some(Ipv4Addr::new(192, 0, 2, 8)));
    }

    #[test]
    fn undecodable_leading_entry_moves_to_next_header() {
        let mut map = HeaderMap::new();
        map.insert(
            HeaderName::from_static("x-forwarded-for"),
            HeaderValue::from_bytes(b"\xff10.0.0.1").expect("header value"),
        );
        map.insert(
            HeaderName::from_static("x-real-ip"),
            HeaderValue::from_static("10.0.0.4"),
        );
        let found = extract_ipv4(&CandidateHeaders::default(), &map, None);
        assert_eq!(found, Some(Ipv4Addr::new(10, 0, 0, 4)));
    }

    #[test]
    fn non_ascii_tail_does_not_hide_valid_first_entry() {
        let mut map = HeaderMap::new();
        map.insert(
            HeaderName::from_static("x-forwarded-for"),
            HeaderValue::from_bytes(b"10.0.0.1, caf\xc3\xa9").expect("header value"),
        );
        map.insert(
            HeaderName::from_static("x-real-ip"),
            HeaderValue::from_static("10.0.0.4"),
        );
        let peer = Some("203.0.113.5".parse().expect("peer"));
        let found = extract_ipv4(&CandidateHeaders::default(), &map, peer);
        assert_eq!(found, Some(Ipv4Addr::new(10, 0, 0, 1)));
    }

    #[test]
    fn custom_candidate_list_is_respected() {
        let candidates = CandidateHeaders::new(vec![HeaderName::from_static("x-client-ip")]);
        let map = headers(&[
            ("x-forwarded-for", "10.0.0.1"),
            ("x-client-ip", "10.0.0.5"),
        ]);
        let found = extract_ipv4(&candidates, &map, None);
        assert_eq!(found, Some(Ipv4Addr::new(10, 0, 0, 5)));
    }

    #[test]
    fn first_forwarded_entry_trims_and_rejects_blank() {
        assert_eq!(first_forwarded_entry(b"  1.2.3.4 ,5.6.7.8"), Some("1.2.3.4"));
        assert_eq!(first_forwarded_entry(b"1.2.3.4,\xff\xfe"), Some("1.2.3.4"));
        assert_eq!(first_forwarded_entry(b"   "), None);
        assert_eq!(first_forwarded_entry(b",1.2.3.4"), None);
        assert_eq!(first_forwarded_entry(b"\xff1.2.3.4, 5.6.7.8"), None);
    }
}
