//! Categorized message output and progress rendering

use colored::*;
use splitcraft_core::ProgressSink;
use std::io::{self, Write};

pub fn print_info(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

pub fn print_warning(message: &str) {
    println!("{} {}", "WARN".yellow().bold(), message);
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "ERROR".red().bold(), message);
}

/// Renders an in-place `[n/N]` counter while groups are written.
#[derive(Default)]
pub struct ConsoleProgress {
    total: usize,
    done: usize,
}

impl ConsoleProgress {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressSink for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
    }

    fn advance(&mut self) {
        self.done += 1;
        print!("\r[{}/{}]", self.done, self.total);
        let _ = io::stdout().flush();
    }

    fn reset(&mut self) {
        if self.done > 0 {
            println!();
        }
        self.total = 0;
        self.done = 0;
    }
}
