pub mod diff;
pub mod layout;

use std::path::Path;

/// Write to a file when a path is given, else to stdout
pub fn emit(output: Option<&Path>, body: &str) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(path) => {
            std::fs::write(path, body)?;
            eprintln!("✓ Wrote {}", path.display());
        }
        None => println!("{}", body),
    }
    Ok(())
}
