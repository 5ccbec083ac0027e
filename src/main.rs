// -*- coding: utf-8 -*-
//
// Copyright 2021 Michael Buesch <m@bues.ch>
//
// SPDX-License-Identifier: MIT OR Apache-2.0
//

mod error;
mod generator;
mod pool;
mod print;
mod random;

use anyhow as ah;
use crate::generator::{DEFAULT_LENGTH, Method, generate, parse_length, rejection_threshold};
use crate::pool::POOL;
use crate::print::{Print, PrintLevel};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "pwgen", version, about = "Generate a random password from a secure random source")]
#[command(allow_negative_numbers = true)]
struct Opts {
    /// Password length in characters.
    #[arg(default_value_t = DEFAULT_LENGTH.to_string())]
    length: String,

    /// Character sampling method.
    #[arg(short, long, value_enum, default_value_t = Method::Rejection)]
    method: Method,

    /// Only print the password.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Print sampling details.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ah::Result<()> {
    let opt = Opts::parse();
    Print::set_level(PrintLevel::from_flags(opt.quiet, opt.verbose));

    let length = parse_length(&opt.length)?;
    let password = generate(length, opt.method)?;

    Print::info(&format!(
        "New random password of {} characters ({} bits):",
        length,
        length.saturating_mul(8)
    ));
    println!("{}", password.text);
    Print::info(&format!("Entropy: {:.1} bits", password.entropy_bits));
    Print::info(&format!("Character pool size: {}", POOL.len()));

    Print::debug(&format!("Sampling method: {:?}", opt.method));
    if opt.method == Method::Rejection {
        Print::debug(&format!(
            "Accepted bytes below {}, drew {} and rejected {}.",
            rejection_threshold(POOL.len()),
            password.stats.drawn,
            password.stats.rejected
        ));
    }
    Ok(())
}


// vim: ts=4 sw=4 expandtab
