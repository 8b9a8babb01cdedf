use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use serde::Serialize;

use casegen_core::{Declaration, ExpansionConfig, Rule};
use casegen_rust::parser::{self, Site};

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    /// Generated Rust tokens.
    #[default]
    Rust,
    /// The abstract output tree of every site.
    Json,
}

#[derive(Parser, Debug)]
pub struct Args {
    /// Rust source file to scan for annotated enums.
    pub file: PathBuf,

    #[arg(short, long, env = "CASEGEN_CONFIG")]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum, default_value = "rust")]
    pub format: OutputFormat,
}

/// Expansion of one annotated item.
#[derive(Debug, Clone, Serialize)]
pub struct SiteReport {
    pub item: String,
    pub rule: Rule,
    pub declarations: Vec<Declaration>,
    #[serde(skip)]
    pub tokens: String,
}

pub fn execute(args: Args) -> anyhow::Result<()> {
    let config = super::load_config(args.config.as_deref())?;
    let reports = expand_file(&args.file, &config)?;

    match args.format {
        OutputFormat::Rust => {
            for report in &reports {
                println!("// #[{}] {}", report.rule, report.item);
                println!("{}", report.tokens);
                println!();
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
    }

    Ok(())
}

pub fn expand_file(path: &Path, config: &ExpansionConfig) -> anyhow::Result<Vec<SiteReport>> {
    let source = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("cannot read {}: {}", path.display(), e))?;
    let reports = expand_source(&source, config)
        .map_err(|e| anyhow::anyhow!("{}: {}", path.display(), e))?;

    tracing::info!(
        file = %path.display(),
        sites = reports.len(),
        "expanded annotated items"
    );
    Ok(reports)
}

pub fn expand_source(source: &str, config: &ExpansionConfig) -> anyhow::Result<Vec<SiteReport>> {
    let file = syn::parse_file(source)?;
    parser::find_sites(&file)
        .into_iter()
        .map(|site| expand_site(site, config))
        .collect()
}

fn expand_site(site: Site, config: &ExpansionConfig) -> anyhow::Result<SiteReport> {
    let item = item_name(&site.item);
    let expanded = casegen_rust::expand_item(site.rule, site.args, &site.item, config)
        .map_err(|e| anyhow::anyhow!("`{}`: {}", item, e))?;

    Ok(SiteReport {
        item,
        rule: site.rule,
        declarations: expanded.declarations,
        tokens: expanded.tokens.to_string(),
    })
}

fn item_name(item: &syn::Item) -> String {
    parser::lower_item(item, None).name
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SOURCE: &str = r#"
        use casegen::prelude::*;

        #[nullable_enum]
        #[derive(Debug)]
        pub enum Status { Visitor, Pr }

        pub enum Untouched { A }

        mod events {
            #[codable_enum(String)]
            pub enum Event { Opened, Pr = "pull_request" }
        }
    "#;

    #[test]
    fn should_expand_every_annotated_enum() {
        let reports = expand_source(SOURCE, &ExpansionConfig::default()).unwrap();

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].item, "Status");
        assert_eq!(reports[0].rule, Rule::NullableEnum);
        assert_eq!(reports[0].declarations.len(), 2);
        assert_eq!(reports[1].item, "Event");
        assert_eq!(reports[1].rule, Rule::CodableEnum);
        assert_eq!(reports[1].declarations.len(), 5);
        assert!(reports[1].tokens.contains("from_raw_value"));
    }

    #[test]
    fn json_report_should_omit_tokens() {
        let reports = expand_source(SOURCE, &ExpansionConfig::default()).unwrap();
        let json = serde_json::to_value(&reports).unwrap();

        assert_eq!(json[0]["item"], "Status");
        assert_eq!(json[0]["rule"], "nullable-enum");
        assert!(json[0].get("tokens").is_none());
    }

    #[test]
    fn should_name_failing_item() {
        let source = "#[nullable_enum] struct Point;";
        let err = expand_source(source, &ExpansionConfig::default()).unwrap_err();
        assert!(err.to_string().starts_with("`Point`"), "{}", err);
    }

    #[test]
    fn should_read_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SOURCE.as_bytes()).unwrap();

        let reports = expand_file(file.path(), &ExpansionConfig::default()).unwrap();
        assert_eq!(reports.len(), 2);
    }

    #[test]
    fn missing_file_should_fail() {
        let result = expand_file(Path::new("/nonexistent/lib.rs"), &ExpansionConfig::default());
        assert!(result.is_err());
    }
}
