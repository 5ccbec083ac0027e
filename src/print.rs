// -*- coding: utf-8 -*-
//
// Copyright 2021 Michael Buesch <m@bues.ch>
//
// SPDX-License-Identifier: MIT OR Apache-2.0
//

use lazy_static::lazy_static;
use std::sync::RwLock;

lazy_static! {
    static ref PRINT_LEVEL: RwLock<PrintLevel> = RwLock::new(PrintLevel::Info);
}

#[derive(PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Debug)]
pub enum PrintLevel {
    Silent,
    Error,
    Warning,
    Info,
    Debug,
}

impl PrintLevel {
    /// Map the command line switches to a level.
    pub fn from_flags(quiet: bool, verbose: bool) -> PrintLevel {
        match (quiet, verbose) {
            (true, _) => PrintLevel::Silent,
            (false, true) => PrintLevel::Debug,
            (false, false) => PrintLevel::Info,
        }
    }
}

pub struct Print;

macro_rules! define_printer {
    ($funcname:ident, $level:path, $prefix:literal) => {
        #[allow(dead_code)]
        pub fn $funcname(msg: &str) {
            if Print::level() >= $level {
                if $level <= PrintLevel::Warning {
                    eprintln!("{}{}", $prefix, msg);
                } else {
                    println!("{}{}", $prefix, msg);
                }
            }
        }
    };
}

impl Print {
    pub fn level() -> PrintLevel {
        *PRINT_LEVEL.read().unwrap()
    }

    pub fn set_level(level: PrintLevel) {
        *PRINT_LEVEL.write().unwrap() = level;
    }

    define_printer!(error, PrintLevel::Error, "ERROR: ");
    define_printer!(warning, PrintLevel::Warning, "Warning: ");
    define_printer!(info, PrintLevel::Info, "");
    define_printer!(debug, PrintLevel::Debug, "Debug: ");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flags() {
        assert_eq!(PrintLevel::from_flags(false, false), PrintLevel::Info);
        assert_eq!(PrintLevel::from_flags(false, true), PrintLevel::Debug);
        assert_eq!(PrintLevel::from_flags(true, false), PrintLevel::Silent);
        assert_eq!(PrintLevel::from_flags(true, true), PrintLevel::Silent);
    }

    #[test]
    fn test_ordering() {
        assert!(PrintLevel::Silent < PrintLevel::Error);
        assert!(PrintLevel::Warning < PrintLevel::Info);
        assert!(PrintLevel::Info < PrintLevel::Debug);
    }
}

// vim: ts=4 sw=4 expandtab
