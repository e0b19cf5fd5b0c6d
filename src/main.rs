//! staffmetrics main entrypoint.

use staffmetrics::run;
use staffmetrics::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
