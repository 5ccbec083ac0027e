// -*- coding: utf-8 -*-
//
// Copyright 2021 Michael Buesch <m@bues.ch>
//
// SPDX-License-Identifier: MIT OR Apache-2.0
//

use itertools::chain;
use lazy_static::lazy_static;

lazy_static! {
    /// The character pool all passwords are drawn from.
    pub static ref POOL: CharPool = CharPool::new();
}

/// Ordered set of printable ASCII symbols:
/// upper case letters, lower case letters, digits and punctuation.
pub struct CharPool {
    symbols: Vec<u8>,
}

impl CharPool {
    fn new() -> CharPool {
        let symbols: Vec<u8> = chain!(
            b'A'..=b'Z',
            b'a'..=b'z',
            b'0'..=b'9',
            (b'!'..=b'~').filter(u8::is_ascii_punctuation)
        )
        .collect();
        // Byte based sampling needs at least one accepted byte value.
        assert!(!symbols.is_empty() && symbols.len() <= 256);
        CharPool {
            symbols,
        }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Get the symbol at `index`. Panics if out of range.
    pub fn symbol(&self, index: usize) -> char {
        char::from(self.symbols[index])
    }

    #[cfg(test)]
    pub fn contains(&self, c: char) -> bool {
        c.is_ascii() && self.symbols.contains(&(c as u8))
    }
}


// vim: ts=4 sw=4 expandtab
