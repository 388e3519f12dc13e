//! Session identifier generation.

use alloc::format;
use alloc::string::String;
use rand::Rng;

/// Source of fresh session identifiers.
pub trait IdGenerator {
    fn generate(&mut self) -> String;
}

/// Produces version-4 UUID strings from any random number generator.
#[derive(Debug, Clone)]
pub struct RandomIdGenerator<R> {
    rng: R,
}

impl<R: Rng> RandomIdGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> IdGenerator for RandomIdGenerator<R> {
    fn generate(&mut self) -> String {
        let mut b: [u8; 16] = self.rng.random();
        // version 4, RFC 4122 variant
        b[6] = (b[6] & 0x0f) | 0x40;
        b[8] = (b[8] & 0x3f) | 0x80;
        format!(
            "{:02x}{:02x}{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}",
            b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7],
            b[8], b[9], b[10], b[11], b[12], b[13], b[14], b[15],
        )
    }
}

/// Hands out `"{prefix}-1"`, `"{prefix}-2"`, ... in order.
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: u64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn generate(&mut self) -> String {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

impl<G: IdGenerator + ?Sized> IdGenerator for &mut G {
    fn generate(&mut self) -> String {
        (**self).generate()
    }
}
