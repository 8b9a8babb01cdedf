use clap::Parser;

#[derive(Parser, Debug)]
pub struct Args {
    /// A single Rust expression, e.g. "a + b".
    pub expr: String,
}

pub fn execute(args: Args) -> anyhow::Result<()> {
    println!("{}", render(&args.expr)?);
    Ok(())
}

/// Prints the expansion with the expression text exactly as given.
pub fn render(source: &str) -> anyhow::Result<String> {
    Ok(casegen_rust::stringify_source(source)?.to_string())
}
