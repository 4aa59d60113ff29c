//! Procedural alphabet generator.
//!
//! One seed, twenty-six glyphs.

use glyphforge::core;

fn main() {
    let cli_args = core::platform::get_cli_args();
    if let Err(error) = core::run_app(cli_args) {
        core::platform::handle_error(error);
    }
}
