use super::error::VectorError;
use regex::Regex;
use std::path::Path;

const MAGIC: &[u8] = b"\x93NUMPY";

/// A dense array read from an NPY file, flattened in C order.
#[derive(Debug, Clone, PartialEq)]
pub struct NpyMatrix {
    pub shape: Vec<usize>,
    pub data: Vec<f32>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Dtype {
    F32,
    F64,
}

impl Dtype {
    fn item_size(self) -> usize {
        match self {
            Dtype::F32 => 4,
            Dtype::F64 => 8,
        }
    }
}

pub fn load_npy(path: impl AsRef<Path>) -> Result<NpyMatrix, VectorError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| VectorError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_npy(&bytes)
}

/// Parses the raw bytes of an NPY file.
///
/// Only little-endian `f4`/`f8` arrays in C order are accepted; `f8` values
/// are narrowed to `f32`. Bytes past the declared shape are ignored.
pub fn parse_npy(bytes: &[u8]) -> Result<NpyMatrix, VectorError> {
    if bytes.len() < MAGIC.len() + 2 || &bytes[..MAGIC.len()] != MAGIC {
        return Err(VectorError::BadMagic);
    }

    let major = bytes[6];
    let minor = bytes[7];
    let (header_len, header_start) = match major {
        1 => {
            let raw = bytes
                .get(8..10)
                .ok_or_else(|| VectorError::InvalidHeader("missing header length".into()))?;
            (u16::from_le_bytes([raw[0], raw[1]]) as usize, 10)
        }
        2 | 3 => {
            let raw = bytes
                .get(8..12)
                .ok_or_else(|| VectorError::InvalidHeader("missing header length".into()))?;
            (
                u32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]) as usize,
                12,
            )
        }
        _ => return Err(VectorError::UnsupportedVersion { major, minor }),
    };

    let header_end = header_start + header_len;
    let header = bytes
        .get(header_start..header_end)
        .ok_or_else(|| VectorError::InvalidHeader("header runs past end of file".into()))?;
    let header = String::from_utf8_lossy(header);

    let fields = HeaderFields::new()?;
    let dtype = fields.dtype(&header)?;
    if fields.fortran_order(&header)? {
        return Err(VectorError::FortranOrder);
    }
    let shape = fields.shape(&header)?;

    let expected = shape
        .iter()
        .try_fold(dtype.item_size(), |acc, &dim| acc.checked_mul(dim))
        .ok_or_else(|| VectorError::InvalidHeader("shape overflows".into()))?;
    let body = &bytes[header_end..];
    if body.len() < expected {
        return Err(VectorError::Truncated {
            expected,
            actual: body.len(),
        });
    }

    let body = &body[..expected];
    let data = match dtype {
        Dtype::F32 => body
            .chunks_exact(4)
            .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
            .collect(),
        Dtype::F64 => body
            .chunks_exact(8)
            .map(|c| f64::from_le_bytes([c[0], c[1], c[2], c[3], c[4], c[5], c[6], c[7]]) as f32)
            .collect(),
    };

    Ok(NpyMatrix { shape, data })
}

/// Patterns for the three header dict entries, compiled once per parse.
struct HeaderFields {
    descr: Regex,
    fortran_order: Regex,
    shape: Regex,
}

impl HeaderFields {
    fn new() -> Result<Self, VectorError> {
        Ok(Self {
            descr: Regex::new(r"'descr'\s*:\s*'([^']*)'")?,
            fortran_order: Regex::new(r"'fortran_order'\s*:\s*(True|False)")?,
            shape: Regex::new(r"'shape'\s*:\s*\(([^)]*)\)")?,
        })
    }

    fn dtype(&self, header: &str) -> Result<Dtype, VectorError> {
        let descr = capture(&self.descr, header)
            .ok_or_else(|| VectorError::InvalidHeader("missing 'descr'".into()))?;

        match descr {
            "<f4" => Ok(Dtype::F32),
            "<f8" => Ok(Dtype::F64),
            other => Err(VectorError::UnsupportedDtype(other.to_string())),
        }
    }

    fn fortran_order(&self, header: &str) -> Result<bool, VectorError> {
        capture(&self.fortran_order, header)
            .map(|flag| flag == "True")
            .ok_or_else(|| VectorError::InvalidHeader("missing 'fortran_order'".into()))
    }

    fn shape(&self, header: &str) -> Result<Vec<usize>, VectorError> {
        let dims = capture(&self.shape, header)
            .ok_or_else(|| VectorError::InvalidHeader("missing 'shape'".into()))?;

        dims.split(',')
            .map(str::trim)
            .filter(|dim| !dim.is_empty())
            .map(|dim| {
                dim.parse::<usize>()
                    .map_err(|_| VectorError::InvalidHeader(format!("bad shape entry {:?}", dim)))
            })
            .collect()
    }
}

fn capture<'h>(re: &Regex, header: &'h str) -> Option<&'h str> {
    re.captures(header)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str())
}
