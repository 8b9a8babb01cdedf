#![cfg(feature = "cli")]

use std::io::Write;

use casegen::cli::expand::expand_file;
use casegen::cli::load_config;
use casegen::ExpansionConfig;
use tempfile::NamedTempFile;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

mod load_config_tests {
    use super::*;

    #[test]
    fn explicit_file_should_be_loaded() {
        let file = write_temp(
            r#"
            [codegen]
            fallback_case = "Other"
            "#,
        );

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.codegen.fallback_case, "Other");
        assert_eq!(config.codegen.serde_path, "serde");
    }

    #[test]
    fn invalid_file_should_fail() {
        let file = write_temp(
            r#"
            [codegen]
            fallback_case = "not an ident"
            "#,
        );

        assert!(load_config(Some(file.path())).is_err());
    }

    #[test]
    fn missing_explicit_file_should_fail() {
        let result = load_config(Some(std::path::Path::new("/nonexistent/casegen.toml")));
        assert!(result.is_err());
    }
}

mod expand_file_tests {
    use super::*;

    #[test]
    fn configured_fallback_should_reach_generated_code() {
        let source = write_temp(
            r#"
            #[nullable_enum]
            enum Status { Visitor, Pr }
            "#,
        );
        let config = ExpansionConfig::from_toml(
            r#"
            [codegen]
            fallback_case = "Other"
            "#,
        )
        .unwrap();

        let reports = expand_file(source.path(), &config).unwrap();
        assert_eq!(reports.len(), 1);
        assert!(
            reports[0].tokens.contains("_ => Self :: Other"),
            "fallback should be renamed: {}",
            reports[0].tokens
        );
    }

    #[test]
    fn unparsable_source_should_fail() {
        let source = write_temp("enum {");
        assert!(expand_file(source.path(), &ExpansionConfig::default()).is_err());
    }
}
