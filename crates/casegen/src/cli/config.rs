use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
pub struct Args {
    #[arg(short, long, env = "CASEGEN_CONFIG")]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub dump: bool,
}

pub fn execute(args: Args) -> anyhow::Result<()> {
    let config = super::load_config(args.config.as_deref())?;
    config.validate()?;

    if args.dump {
        println!("{}", toml::to_string_pretty(&config)?);
    } else {
        match &args.config {
            Some(path) => println!("✓ Configuration valid: {}", path.display()),
            None => println!("✓ Configuration valid"),
        }
        println!();
        println!("Codegen:");
        println!("  Fallback case: {}", config.codegen.fallback_case);
        println!("  Serde path: {}", config.codegen.serde_path);
    }

    Ok(())
}
