use std::ops::RangeInclusive;

use fake::Fake;
use fake::faker::lorem::en::Paragraphs;

/// Filler passages for typing practice.
#[derive(Debug, Clone)]
pub struct LoremSource {
    paragraphs: RangeInclusive<usize>,
}

impl LoremSource {
    pub fn new(paragraphs: RangeInclusive<usize>) -> Self {
        Self { paragraphs }
    }

    /// A fresh passage of lorem paragraphs separated by blank lines.
    pub fn passage(&self) -> String {
        let lo = *self.paragraphs.start();
        let hi = *self.paragraphs.end();
        let paragraphs: Vec<String> = Paragraphs(lo..hi.saturating_add(1)).fake();
        paragraphs.join("\n\n")
    }
}
