mod generate;

use std::process::ExitCode;

use lib_badge::{ensure_png_support, FontChain};

use generate::{generate_all, program_dir, DriverError};

fn main() -> ExitCode {
    lib_badge::init_logging();

    if let Err(e) = ensure_png_support() {
        eprintln!("Error: {}", e);
        eprintln!("Rebuild with the `png` feature of the `image` crate enabled");
        return ExitCode::from(1);
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<(), DriverError> {
    let dir = program_dir()?;
    let font = FontChain::system().load();

    println!("Generating extension icons...");
    generate_all(&dir, &font, |icon| {
        println!(
            "✓ Icon generated: {} ({}x{})",
            icon.path.display(),
            icon.size,
            icon.size
        );
    })?;
    println!("Icons generated successfully in {}", dir.display());

    Ok(())
}
