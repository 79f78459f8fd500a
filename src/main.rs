//! scpayroll main entrypoint.

use scpayroll::run;
use scpayroll::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
