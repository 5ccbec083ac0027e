// -*- coding: utf-8 -*-
//
// Copyright 2021 Michael Buesch <m@bues.ch>
//
// SPDX-License-Identifier: MIT OR Apache-2.0
//

use crate::error::Error;

/// Supplier of uniformly distributed random bytes.
pub trait ByteSource {
    /// Fill the whole buffer with random bytes.
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), Error>;
}

/// Secure random bytes from the operating system.
pub struct OsSource;

impl ByteSource for OsSource {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), Error> {
        getrandom::fill(buf)?;
        Ok(())
    }
}


// vim: ts=4 sw=4 expandtab
