// ============================================================================
// Word Sequence
// Ordered words rendered with single-space separators
// ============================================================================

use smallvec::SmallVec;
use std::borrow::Cow;
use std::fmt;

/// An ordered sequence of upper-case words.
///
/// Most words are static table entries; only hyphenated compounds such as
/// "TWENTY-ONE" are allocated. Twenty-four inline slots cover a full
/// trillion-tier amount without spilling to the heap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Words(SmallVec<[Cow<'static, str>; 24]>);

impl Words {
    pub fn new() -> Self {
        Self(SmallVec::new())
    }

    #[inline]
    pub fn push(&mut self, word: impl Into<Cow<'static, str>>) {
        self.0.push(word.into());
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|w| w.as_ref())
    }

    /// How many words equal `token` exactly.
    pub fn count(&self, token: &str) -> usize {
        self.iter().filter(|w| *w == token).count()
    }
}

impl fmt::Display for Words {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut words = self.iter();
        if let Some(first) = words.next() {
            f.write_str(first)?;
            for word in words {
                f.write_str(" ")?;
                f.write_str(word)?;
            }
        }
        Ok(())
    }
}
