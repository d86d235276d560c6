// ABOUTME: Entry point for the AktieTipset desktop application.
// ABOUTME: Initializes the Rust host and launches the desktop window.

// Prevents additional console window on Windows in release, DO NOT REMOVE!!
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    aktietipset_desktop_lib::run()
}
