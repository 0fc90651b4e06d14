//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `marknote_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use marknote_core::Workbench;

fn main() {
    let mut bench = Workbench::new();
    bench.add_note();
    bench.update_title("Welcome to MarkNote");
    bench.update_content("# Hello\n\nYour notes live here.");
    let saved = bench.save().expect("welcome note should save");

    println!("marknote_core version={}", marknote_core::core_version());
    println!("notes={} selection={saved}", bench.store().notes().len());
    for entry in bench.sidebar_entries() {
        println!(
            "sidebar kind={:?} title={} active={}",
            entry.kind, entry.title, entry.active
        );
    }
}
