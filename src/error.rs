// -*- coding: utf-8 -*-
//
// Copyright 2021 Michael Buesch <m@bues.ch>
//
// SPDX-License-Identifier: MIT OR Apache-2.0
//

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid password length '{input}': must be a positive integer.")]
    InvalidLength { input: String },

    #[error("Failed to read secure random bytes from the operating system: {0}")]
    RandomSourceFailure(#[from] getrandom::Error),
}

// vim: ts=4 sw=4 expandtab
