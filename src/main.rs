use anyhow::Result;
use lexcast::cast::LexicalCaster;
use lexcast::cli::{self, convert_input, render_error};

// Converts one input and reports the outcome; exits 0 either way
fn main() -> Result<()> {
    let args = cli::parse_args();
    cli::init_logging(args.verbosity);

    let config = cli::resolve_config(&args);
    let caster = LexicalCaster::from_config(&config);

    match convert_input(&caster, args.target, &args.input) {
        Ok(value) => println!("{}", value),
        Err(err) => eprintln!("{}", render_error(&err, args.format)),
    }

    Ok(())
}
