//! Outbound command channel.
//!
//! The hosting page provides a global `pycmd` function; action buttons send
//! `"<verb>:<ord>"` command strings through it, fire-and-forget.

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    fn pycmd(cmd: &str);
}

/// Send a command string to the hosting application.
pub fn send_command(cmd: &str) {
    log::debug!("sending command '{}'", cmd);
    pycmd(cmd);
}
