// ABOUTME: Command line argument definitions and parsing using Clap
// ABOUTME: Defines the positional template/output arguments and option flags

use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "envject")]
#[command(about = "Render a configuration template by substituting ${NAME} environment references")]
#[command(version)]
pub struct Args {
    #[arg(help = "Path to the template file")]
    pub template: PathBuf,

    #[arg(help = "Path to write the rendered output")]
    pub output: PathBuf,

    #[arg(
        long = "var",
        help = "Extra substitution variables (key=value), applied on top of the environment"
    )]
    pub vars: Vec<String>,

    #[arg(long, help = "Render to stdout without writing the output file")]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(short, long, help = "Path to configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Disable colored output")]
    pub no_color: bool,
}

impl Args {
    /// Parse command line arguments.
    ///
    /// A malformed invocation (missing or extra arguments) prints the usage
    /// message to stdout and exits with status 1 before any file I/O.
    /// `--help` and `--version` keep their conventional exit status 0.
    pub fn parse_args() -> Self {
        match Self::try_parse() {
            Ok(args) => args,
            Err(err)
                if err.kind() == ErrorKind::DisplayHelp
                    || err.kind() == ErrorKind::DisplayVersion =>
            {
                let _ = err.print();
                std::process::exit(0);
            }
            Err(err) => {
                println!("{}", err);
                std::process::exit(1);
            }
        }
    }

    /// Parse variables from key=value format
    pub fn parse_variables(
        vars: &[String],
    ) -> anyhow::Result<std::collections::HashMap<String, String>> {
        let mut variables = std::collections::HashMap::new();

        for var in vars {
            if let Some((key, value)) = var.split_once('=') {
                variables.insert(key.to_string(), value.to_string());
            } else {
                return Err(anyhow::anyhow!(
                    "Invalid variable format '{}'. Expected 'key=value'",
                    var
                ));
            }
        }

        Ok(variables)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_variables() {
        let vars = vec![
            "HOST=example.com".to_string(),
            "PORT=8080".to_string(),
            "EMPTY=".to_string(),
        ];

        let parsed = Args::parse_variables(&vars).unwrap();

        assert_eq!(parsed.get("HOST"), Some(&"example.com".to_string()));
        assert_eq!(parsed.get("PORT"), Some(&"8080".to_string()));
        assert_eq!(parsed.get("EMPTY"), Some(&"".to_string()));
    }

    #[test]
    fn test_parse_variables_invalid() {
        let vars = vec!["invalid_format".to_string()];
        let result = Args::parse_variables(&vars);
        assert!(result.is_err());
    }

    #[test]
    fn test_positional_arguments() {
        let args = Args::try_parse_from(["envject", "app.conf.tpl", "app.conf"]).unwrap();
        assert_eq!(args.template, PathBuf::from("app.conf.tpl"));
        assert_eq!(args.output, PathBuf::from("app.conf"));
        assert!(args.vars.is_empty());
        assert!(!args.dry_run);
    }

    #[test]
    fn test_missing_output_argument() {
        let result = Args::try_parse_from(["envject", "app.conf.tpl"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_extra_positional_argument() {
        let result = Args::try_parse_from(["envject", "a.tpl", "a.conf", "extra"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_var_flag_repeats() {
        let args = Args::try_parse_from([
            "envject",
            "a.tpl",
            "a.conf",
            "--var",
            "HOST=localhost",
            "--var",
            "PORT=9090",
        ])
        .unwrap();
        assert_eq!(args.vars.len(), 2);
    }
}
