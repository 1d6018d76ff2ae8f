//! Tiny MaxMind DB writer for tests.
//!
//! Builds IPv4 country databases with a two-node search tree:
//!
//! * `0.0.0.0/2`   - not found
//! * `64.0.0.0/2`  - the "low" country
//! * `128.0.0.0/1` - the "high" country

#![allow(dead_code)]

use std::net::{IpAddr, Ipv4Addr};
use std::path::Path;

const METADATA_MARKER: &[u8] = b"\xAB\xCD\xEFMaxMind.com";
const NODE_COUNT: u32 = 2;

/// Address in the not-found range.
pub fn unknown_ip() -> IpAddr {
    IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1))
}

/// Address in the "low" range.
pub fn low_ip() -> IpAddr {
    IpAddr::V4(Ipv4Addr::new(100, 1, 2, 3))
}

/// Address in the "high" range.
pub fn high_ip() -> IpAddr {
    IpAddr::V4(Ipv4Addr::new(200, 1, 2, 3))
}

/// Country entry: ISO code (if any) and localized names.
#[derive(Clone)]
pub struct Country {
    pub iso_code: Option<&'static str>,
    pub names: Vec<(&'static str, &'static str)>,
}

impl Country {
    pub fn new(iso_code: &'static str, names: &[(&'static str, &'static str)]) -> Self {
        Self {
            iso_code: Some(iso_code),
            names: names.to_vec(),
        }
    }

    pub fn without_code(names: &[(&'static str, &'static str)]) -> Self {
        Self {
            iso_code: None,
            names: names.to_vec(),
        }
    }
}

pub fn germany() -> Country {
    Country::new("DE", &[("en", "Germany"), ("fr", "Allemagne"), ("de", "Deutschland")])
}

pub fn brazil() -> Country {
    Country::new("BR", &[("en", "Brazil"), ("pt-BR", "Brasil")])
}

pub struct MmdbBuilder {
    database_type: &'static str,
    low: Option<Country>,
    high: Option<Country>,
}

impl MmdbBuilder {
    pub fn new() -> Self {
        Self {
            database_type: "GeoLite2-Country",
            low: None,
            high: None,
        }
    }

    pub fn database_type(mut self, database_type: &'static str) -> Self {
        self.database_type = database_type;
        self
    }

    pub fn low(mut self, country: Country) -> Self {
        self.low = Some(country);
        self
    }

    pub fn high(mut self, country: Country) -> Self {
        self.high = Some(country);
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut data = Vec::new();
        let not_found = NODE_COUNT;

        let low_ptr = self.low.as_ref().map(|c| {
            let offset = data.len() as u32;
            encode_record(&mut data, c);
            NODE_COUNT + 16 + offset
        });
        let high_ptr = self.high.as_ref().map(|c| {
            let offset = data.len() as u32;
            encode_record(&mut data, c);
            NODE_COUNT + 16 + offset
        });

        let mut buf = Vec::new();
        // node 0: left -> node 1, right -> high
        push_u24(&mut buf, 1);
        push_u24(&mut buf, high_ptr.unwrap_or(not_found));
        // node 1: left -> not found, right -> low
        push_u24(&mut buf, not_found);
        push_u24(&mut buf, low_ptr.unwrap_or(not_found));

        buf.extend_from_slice(&[0u8; 16]);
        buf.extend_from_slice(&data);
        buf.extend_from_slice(METADATA_MARKER);
        self.encode_metadata(&mut buf);
        buf
    }

    pub fn write_to(&self, path: &Path) {
        std::fs::write(path, self.build()).unwrap();
    }

    fn encode_metadata(&self, out: &mut Vec<u8>) {
        map_header(out, 9);
        string(out, "binary_format_major_version");
        uint16(out, 2);
        string(out, "binary_format_minor_version");
        uint16(out, 0);
        string(out, "build_epoch");
        uint64(out, 1_700_000_000);
        string(out, "database_type");
        string(out, self.database_type);
        string(out, "description");
        map_header(out, 1);
        string(out, "en");
        string(out, "test database");
        string(out, "ip_version");
        uint16(out, 4);
        string(out, "languages");
        array_header(out, 2);
        string(out, "en");
        string(out, "fr");
        string(out, "node_count");
        uint32(out, NODE_COUNT);
        string(out, "record_size");
        uint16(out, 24);
    }
}

fn encode_record(out: &mut Vec<u8>, country: &Country) {
    map_header(out, 1);
    string(out, "country");

    let fields = country.iso_code.is_some() as usize + 1;
    map_header(out, fields);
    if let Some(code) = country.iso_code {
        string(out, "iso_code");
        string(out, code);
    }
    string(out, "names");
    map_header(out, country.names.len());
    for (locale, name) in &country.names {
        string(out, locale);
        string(out, name);
    }
}

fn push_u24(out: &mut Vec<u8>, v: u32) {
    out.extend_from_slice(&v.to_be_bytes()[1..]);
}

fn ctrl(out: &mut Vec<u8>, type_num: u8, size: usize) {
    assert!(size < 29, "field too large for test encoder");
    if type_num <= 7 {
        out.push((type_num << 5) | size as u8);
    } else {
        out.push(size as u8);
        out.push(type_num - 7);
    }
}

fn string(out: &mut Vec<u8>, s: &str) {
    ctrl(out, 2, s.len());
    out.extend_from_slice(s.as_bytes());
}

fn uint16(out: &mut Vec<u8>, v: u16) {
    ctrl(out, 5, 2);
    out.extend_from_slice(&v.to_be_bytes());
}

fn uint32(out: &mut Vec<u8>, v: u32) {
    ctrl(out, 6, 4);
    out.extend_from_slice(&v.to_be_bytes());
}

fn uint64(out: &mut Vec<u8>, v: u64) {
    ctrl(out, 9, 8);
    out.extend_from_slice(&v.to_be_bytes());
}

fn map_header(out: &mut Vec<u8>, len: usize) {
    ctrl(out, 7, len);
}

fn array_header(out: &mut Vec<u8>, len: usize) {
    ctrl(out, 11, len);
}
