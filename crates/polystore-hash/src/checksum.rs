use std::fmt;
use std::str::FromStr;

/// Supported content hash kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HashKind {
    /// BLAKE3, 256-bit output.
    Blake3,
    /// SHA-256.
    Sha256,
}

impl HashKind {
    /// All supported kinds, in digest-map order.
    pub const ALL: [HashKind; 2] = [HashKind::Blake3, HashKind::Sha256];
}

impl fmt::Display for HashKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blake3 => write!(f, "blake3"),
            Self::Sha256 => write!(f, "sha256"),
        }
    }
}

/// Error from parsing a hash kind name.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown hash kind: {0}")]
pub struct UnknownHashKind(String);

impl FromStr for HashKind {
    type Err = UnknownHashKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "blake3" => Ok(Self::Blake3),
            "sha256" => Ok(Self::Sha256),
            _ => Err(UnknownHashKind(s.to_string())),
        }
    }
}

/// A parsed client checksum: hash kind plus lowercase hex digest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Checksum {
    /// The hash kind named by the client.
    pub kind: HashKind,
    /// The expected digest, lowercase hex.
    pub value: String,
}

impl Checksum {
    /// Parse a `"kind:hex"` checksum string.
    ///
    /// Returns `None` when the kind is absent or unrecognized, which
    /// callers treat as "no verification requested". The hex value is
    /// lowercased but not otherwise validated; a malformed value simply
    /// never matches a computed digest.
    pub fn parse(s: &str) -> Option<Self> {
        let (kind, value) = s.split_once(':')?;
        let kind = HashKind::from_str(kind.trim()).ok()?;
        Some(Self {
            kind,
            value: value.trim().to_ascii_lowercase(),
        })
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.value)
    }
}
