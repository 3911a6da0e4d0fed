use std::collections::BTreeMap;
use std::io::{self, Read, Write};

use sha2::{Digest, Sha256};

use crate::checksum::HashKind;

/// Multi-digest streaming hasher.
///
/// Updates every supported digest as data is written through it, so one
/// pass over a stream yields a digest for whichever [`HashKind`] a caller
/// later asks about.
pub struct StreamHasher {
    blake3: blake3::Hasher,
    sha256: Sha256,
}

impl StreamHasher {
    /// Create a hasher with all digests in their initial state.
    pub fn new() -> Self {
        Self {
            blake3: blake3::Hasher::new(),
            sha256: Sha256::new(),
        }
    }

    /// Feed a chunk of data into every digest.
    pub fn update(&mut self, data: &[u8]) {
        self.blake3.update(data);
        self.sha256.update(data);
    }

    /// Finish all digests, returning lowercase hex values keyed by kind.
    pub fn finalize(self) -> BTreeMap<HashKind, String> {
        let mut digests = BTreeMap::new();
        digests.insert(HashKind::Blake3, self.blake3.finalize().to_hex().to_string());
        digests.insert(HashKind::Sha256, hex::encode(self.sha256.finalize()));
        digests
    }
}

impl Default for StreamHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for StreamHasher {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Reader adapter that tees everything read through a [`StreamHasher`].
///
/// Lets a store hash an input stream while copying it to its staging file,
/// without a second pass over the data.
pub struct HashingReader<R> {
    inner: R,
    hasher: StreamHasher,
}

impl<R: Read> HashingReader<R> {
    /// Wrap `inner`, hashing every byte subsequently read from it.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            hasher: StreamHasher::new(),
        }
    }

    /// Finish hashing and return the digests of everything read so far.
    pub fn finalize(self) -> BTreeMap<HashKind, String> {
        self.hasher.finalize()
    }
}

impl<R: Read> Read for HashingReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.hasher.update(&buf[..n]);
        Ok(n)
    }
}

/// Read `reader` to exhaustion and return its digests keyed by kind.
pub fn hash_reader(reader: &mut dyn Read) -> io::Result<BTreeMap<HashKind, String>> {
    let mut hasher = StreamHasher::new();
    io::copy(reader, &mut hasher)?;
    Ok(hasher.finalize())
}
