//! Raw-bit traces of a workload, saved compressed so two runs (or two
//! machines) can be compared value by value.

use std::fs::File;
use std::io::{BufReader, BufWriter};

use chrono::{DateTime, Utc};
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use serde::{Deserialize, Serialize};

use crate::fixed_math::Fixed;

pub const TRACE_VERSION: u32 = 1;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Trace {
    pub version: u32,
    pub label: String,
    pub created: DateTime<Utc>,
    pub values: Vec<Fixed>,
}

impl Trace {
    pub fn new(label: impl Into<String>, values: Vec<Fixed>) -> Self {
        Self {
            version: TRACE_VERSION,
            label: label.into(),
            created: Utc::now(),
            values,
        }
    }

    pub fn checksum(&self) -> u64 {
        checksum(&self.values)
    }
}

/// FNV-1a over the little-endian raw bytes of every value.
pub fn checksum(values: &[Fixed]) -> u64 {
    values
        .iter()
        .flat_map(|value| value.to_le_bytes())
        .fold(FNV_OFFSET_BASIS, |hash, byte| {
            (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
        })
}

/// Index of the first differing value. A trace that is a strict prefix of
/// the other diverges at its length.
pub fn first_divergence(a: &[Fixed], b: &[Fixed]) -> Option<usize> {
    match a.iter().zip(b).position(|(x, y)| x != y) {
        Some(index) => Some(index),
        None if a.len() != b.len() => Some(a.len().min(b.len())),
        None => None,
    }
}

pub fn save_trace(path: &str, trace: &Trace) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let mut encoder = ZlibEncoder::new(writer, Compression::default());
    bincode::serialize_into(&mut encoder, trace)?;
    encoder.finish()?;
    Ok(())
}

pub fn load_trace(path: &str) -> Result<Trace, Box<dyn std::error::Error>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut decoder = ZlibDecoder::new(reader);
    let trace: Trace = bincode::deserialize_from(&mut decoder)?;
    if trace.version != TRACE_VERSION {
        return Err(format!(
            "trace {} has version {}, expected {}",
            path, trace.version, TRACE_VERSION
        )
        .into());
    }
    Ok(trace)
}
