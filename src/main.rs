//! rlapdelta main entrypoint.

use rlapdelta::run;
use rlapdelta::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
