//! # Tally POS Terminal Entry Point
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging, stderr)
//! 2. Build `TerminalConfig` from environment
//! 3. Construct the session over locked stdin/stdout
//! 4. Run the menu loop until exit or end of input

fn main() {
    // The actual setup is in lib.rs for better testability
    tally_terminal::run();
}
