use anyhow::{bail, Context, Result};
use sha2::{Digest, Sha512};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

pub const HASH_LEN: usize = 64;
pub type HashResult = [u8; HASH_LEN];

pub struct StreamHasher<R: Read> {
    hasher: Sha512,
    input: R,
}

impl<R: Read> StreamHasher<R> {
    pub fn new(input: R) -> Self {
        StreamHasher {
            hasher: Sha512::default(),
            input,
        }
    }

    pub fn get_result(self) -> HashResult {
        let mut result = [0; HASH_LEN];
        result.copy_from_slice(self.hasher.finalize().as_slice());
        result
    }
}

impl<R: Read> Read for StreamHasher<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let size = self.input.read(buf)?;
        self.hasher.update(&buf[..size]);
        Ok(size)
    }
}

pub fn hash_file(path: &Path) -> io::Result<HashResult> {
    let mut hasher = StreamHasher::new(File::open(path)?);
    io::copy(&mut hasher, &mut io::sink())?;
    Ok(hasher.get_result())
}

/// Fails unless `copy` has the same content as `original`.
pub fn verify_copy(original: &Path, copy: &Path) -> Result<()> {
    let expected = hash_file(original)
        .with_context(|| format!("failed to hash {}", original.display()))?;
    let actual =
        hash_file(copy).with_context(|| format!("failed to hash {}", copy.display()))?;
    if expected[..] != actual[..] {
        bail!(
            "{} differs from its source {}",
            copy.display(),
            original.display()
        );
    }
    Ok(())
}
