// Shared test helpers for building GeoLite2-format database files.
//
// The writer covers the part of the MaxMind DB format the resolver reads: an
// IPv4 search tree with 24-bit records, a data section of maps, strings,
// doubles and unsigned integers, and the trailing metadata block.

use std::net::Ipv4Addr;
use std::path::Path;

use serde_json::{json, Map, Value};

const METADATA_MARKER: &[u8] = b"\xab\xcd\xefMaxMind.com";
const DATA_SECTION_SEPARATOR: [u8; 16] = [0; 16];

const TYPE_STRING: u8 = 2;
const TYPE_DOUBLE: u8 = 3;
const TYPE_UINT32: u8 = 6;
const TYPE_MAP: u8 = 7;
const TYPE_UINT64: u8 = 9;
const TYPE_ARRAY: u8 = 11;
const TYPE_BOOL: u8 = 14;

#[derive(Clone, Copy)]
enum Slot {
    Empty,
    Node(usize),
    Data(usize),
}

/// Writes an IPv4 database of `database_type` to `path`.
///
/// Each entry is `(network, prefix_len, record)`. Networks must not overlap.
#[allow(dead_code)] // Used by other test files
pub fn write_database(path: &Path, database_type: &str, networks: &[(Ipv4Addr, u8, Value)]) {
    let mut nodes: Vec<[Slot; 2]> = vec![[Slot::Empty, Slot::Empty]];
    for (index, (network, prefix_len, _)) in networks.iter().enumerate() {
        assert!((1..=32).contains(prefix_len), "prefix length out of range");
        let bits = u32::from(*network);
        let mut node = 0;
        for depth in 0..*prefix_len {
            let bit = ((bits >> (31 - depth)) & 1) as usize;
            if depth + 1 == *prefix_len {
                assert!(matches!(nodes[node][bit], Slot::Empty), "overlapping networks");
                nodes[node][bit] = Slot::Data(index);
                break;
            }
            let slot = nodes[node][bit];
            node = match slot {
                Slot::Node(next) => next,
                Slot::Empty => {
                    nodes.push([Slot::Empty, Slot::Empty]);
                    let next = nodes.len() - 1;
                    nodes[node][bit] = Slot::Node(next);
                    next
                }
                Slot::Data(_) => panic!("overlapping networks"),
            };
        }
    }

    let mut data = Vec::new();
    let mut offsets = Vec::with_capacity(networks.len());
    for (_, _, record) in networks {
        offsets.push(data.len());
        encode(record, &mut data);
    }

    let node_count = nodes.len();
    let mut buf = Vec::new();
    for node in &nodes {
        for slot in node {
            let value = match *slot {
                Slot::Empty => node_count,
                Slot::Node(next) => next,
                Slot::Data(index) => node_count + DATA_SECTION_SEPARATOR.len() + offsets[index],
            };
            assert!(value < 1 << 24, "record does not fit in 24 bits");
            buf.extend_from_slice(&(value as u32).to_be_bytes()[1..]);
        }
    }
    buf.extend_from_slice(&DATA_SECTION_SEPARATOR);
    buf.extend_from_slice(&data);
    buf.extend_from_slice(METADATA_MARKER);
    encode(
        &json!({
            "binary_format_major_version": 2,
            "binary_format_minor_version": 0,
            "build_epoch": 1_700_000_000u64,
            "database_type": database_type,
            "description": { "en": "Test database" },
            "ip_version": 4,
            "languages": ["en"],
            "node_count": node_count,
            "record_size": 24,
        }),
        &mut buf,
    );

    std::fs::write(path, buf).expect("Failed to write database file");
}

/// A GeoLite2-City record with English names and coordinates.
#[allow(dead_code)] // Used by other test files
pub fn city_record(
    country: &str,
    iso_code: &str,
    city: &str,
    latitude: f64,
    longitude: f64,
) -> Value {
    json!({
        "city": { "geoname_id": 2643743u32, "names": { "en": city } },
        "country": { "iso_code": iso_code, "names": { "en": country, "de": country } },
        "location": { "accuracy_radius": 100u32, "latitude": latitude, "longitude": longitude },
    })
}

/// A GeoLite2-ASN record.
#[allow(dead_code)] // Used by other test files
pub fn asn_record(number: u32, organization: &str) -> Value {
    json!({
        "autonomous_system_number": number,
        "autonomous_system_organization": organization,
    })
}

fn encode(value: &Value, out: &mut Vec<u8>) {
    match value {
        Value::String(s) => {
            control(TYPE_STRING, s.len(), out);
            out.extend_from_slice(s.as_bytes());
        }
        Value::Number(n) => match n.as_u64() {
            Some(u) if u <= u64::from(u32::MAX) => {
                let be = u.to_be_bytes();
                let bytes = minimal_be(&be[4..]);
                control(TYPE_UINT32, bytes.len(), out);
                out.extend_from_slice(bytes);
            }
            Some(u) => {
                let be = u.to_be_bytes();
                let bytes = minimal_be(&be);
                control(TYPE_UINT64, bytes.len(), out);
                out.extend_from_slice(bytes);
            }
            None => {
                let f = n.as_f64().expect("negative integers are not supported");
                control(TYPE_DOUBLE, 8, out);
                out.extend_from_slice(&f.to_be_bytes());
            }
        },
        Value::Object(map) => encode_map(map, out),
        Value::Array(items) => {
            control(TYPE_ARRAY, items.len(), out);
            for item in items {
                encode(item, out);
            }
        }
        Value::Bool(b) => control(TYPE_BOOL, usize::from(*b), out),
        Value::Null => panic!("null has no MaxMind DB encoding"),
    }
}

fn encode_map(map: &Map<String, Value>, out: &mut Vec<u8>) {
    control(TYPE_MAP, map.len(), out);
    for (key, value) in map {
        control(TYPE_STRING, key.len(), out);
        out.extend_from_slice(key.as_bytes());
        encode(value, out);
    }
}

/// Control byte, extended type byte, then size extension bytes.
fn control(type_num: u8, size: usize, out: &mut Vec<u8>) {
    let (size_bits, extra): (u8, Vec<u8>) = match size {
        s if s < 29 => (s as u8, Vec::new()),
        s if s < 285 => (29, vec![(s - 29) as u8]),
        s if s < 65_821 => (30, ((s - 285) as u16).to_be_bytes().to_vec()),
        s => (31, ((s - 65_821) as u32).to_be_bytes()[1..].to_vec()),
    };
    if type_num <= TYPE_MAP {
        out.push((type_num << 5) | size_bits);
    } else {
        out.push(size_bits);
        out.push(type_num - TYPE_MAP);
    }
    out.extend_from_slice(&extra);
}

fn minimal_be(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    &bytes[start..]
}
