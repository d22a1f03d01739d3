use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments.
#[derive(Parser, Debug, Default)]
#[command(name = "storefront")]
#[command(about = "Browse products and fill a cart from the terminal")]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to storefront.toml in the platform config dir)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Product source URL, overriding the config file
    #[arg(long, value_name = "URL", conflicts_with = "source_file")]
    pub source_url: Option<String>,

    /// Read products from a local JSON file instead of the network
    #[arg(long, value_name = "PATH")]
    pub source_file: Option<PathBuf>,

    /// Do not load products when the home page opens
    #[arg(long)]
    pub no_fetch: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from([
            "storefront",
            "--source-file",
            "products.json",
            "--no-fetch",
        ]);
        assert_eq!(cli.source_file, Some(PathBuf::from("products.json")));
        assert!(cli.no_fetch);
        assert!(cli.source_url.is_none());
    }

    #[test]
    fn test_source_flags_conflict() {
        let result = Cli::try_parse_from([
            "storefront",
            "--source-url",
            "http://localhost/products",
            "--source-file",
            "products.json",
        ]);
        assert!(result.is_err());
    }
}
