use crate::{EXIT_FAILURE, EXIT_SUCCESS};
use crate::checker::CheckerRegistry;
use crate::error::Result;
use crate::output::ErrorOutput;

/// Prints the extensions of the built-in checkers as a JSON list.
#[must_use]
pub fn run_extensions(verbose: bool) -> i32 {
    match extensions_json(&CheckerRegistry::default()) {
        Ok(json) => {
            println!("{json}");
            EXIT_SUCCESS
        }
        Err(e) => {
            ErrorOutput::stderr().print_run_error(&e, verbose);
            EXIT_FAILURE
        }
    }
}

/// # Errors
/// Returns an error if serialization fails.
pub fn extensions_json(registry: &CheckerRegistry) -> Result<String> {
    Ok(serde_json::to_string(&registry.extensions())?)
}
