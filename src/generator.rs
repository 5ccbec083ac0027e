// -*- coding: utf-8 -*-
//
// Copyright 2021 Michael Buesch <m@bues.ch>
//
// SPDX-License-Identifier: MIT OR Apache-2.0
//

use crate::error::Error;
use crate::pool::{CharPool, POOL};
use crate::random::{ByteSource, OsSource};
use rand::{Rng, rng};

pub const DEFAULT_LENGTH: usize = 16;
/// Longest password that will be generated.
pub const MAX_LENGTH: usize = 1024 * 1024;
/// Random bytes requested from the source per round.
const BATCH_SIZE: usize = 256;

/// How characters are picked from the pool.
#[derive(clap::ValueEnum, Copy, Clone, PartialEq, Eq, Debug)]
pub enum Method {
    /// Draw OS random bytes and reject the ones that would bias the result.
    Rejection,
    /// Uniform index choice on the thread local CSPRNG.
    Choose,
}

#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
pub struct Stats {
    /// Random bytes consumed from the source.
    pub drawn: usize,
    /// Consumed bytes that did not map to a character.
    pub rejected: usize,
}

#[derive(Debug)]
pub struct Password {
    pub text: String,
    pub entropy_bits: f64,
    pub stats: Stats,
}

/// Parse a user supplied password length.
/// Accepted are integers in the range 1..=MAX_LENGTH.
pub fn parse_length(input: &str) -> Result<usize, Error> {
    let invalid = || Error::InvalidLength {
        input: input.to_string(),
    };
    match input.trim().parse::<i64>() {
        Ok(len) if len > 0 => usize::try_from(len)
            .ok()
            .filter(|len| *len <= MAX_LENGTH)
            .ok_or_else(invalid),
        _ => Err(invalid()),
    }
}

fn check_length(length: usize) -> Result<(), Error> {
    if (1..=MAX_LENGTH).contains(&length) {
        Ok(())
    } else {
        Err(Error::InvalidLength {
            input: length.to_string(),
        })
    }
}

/// Largest multiple of `pool_size` that is not bigger than 256.
/// Bytes at or above this value are rejected.
pub const fn rejection_threshold(pool_size: usize) -> usize {
    (256 / pool_size) * pool_size
}

pub fn entropy_bits(length: usize, pool_size: usize) -> f64 {
    length as f64 * (pool_size as f64).log2()
}

/// Generate a password of `length` characters from the global pool.
pub fn generate(length: usize, method: Method) -> Result<Password, Error> {
    check_length(length)?;
    match method {
        Method::Rejection => generate_from(&mut OsSource, &POOL, length),
        Method::Choose => Ok(generate_choose(&POOL, length)),
    }
}

/// Rejection sampling on the bytes of `source`.
pub fn generate_from<S: ByteSource>(
    source: &mut S,
    pool: &CharPool,
    length: usize,
) -> Result<Password, Error> {
    check_length(length)?;
    let threshold = rejection_threshold(pool.len());
    let mut text = String::with_capacity(length);
    let mut stats = Stats::default();
    let mut batch = [0_u8; BATCH_SIZE];

    // Never request more bytes than characters are missing,
    // so the result can not overshoot.
    while text.len() < length {
        let missing = (length - text.len()).min(BATCH_SIZE);
        let buf = &mut batch[..missing];
        source.fill(buf)?;
        stats.drawn += missing;

        for &byte in buf.iter() {
            let byte = usize::from(byte);
            if byte < threshold {
                text.push(pool.symbol(byte % pool.len()));
            } else {
                stats.rejected += 1;
            }
        }
    }

    Ok(Password {
        text,
        entropy_bits: entropy_bits(length, pool.len()),
        stats,
    })
}

fn generate_choose(pool: &CharPool, length: usize) -> Password {
    let mut rng = rng();
    let text = std::iter::repeat_with(|| pool.symbol(rng.random_range(0..pool.len())))
        .take(length)
        .collect();
    Password {
        text,
        entropy_bits: entropy_bits(length, pool.len()),
        stats: Stats::default(),
    }
}


// vim: ts=4 sw=4 expandtab
