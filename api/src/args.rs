use clap::Parser;
use querykit_core::domain::common::{ParserLimits, QueryKitConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "querykit-api", version, about = "QueryKit API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub parser: ParserArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. `/api`
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5555"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ParserArgs {
    #[arg(long = "parser-max-depth", env = "PARSER_MAX_DEPTH", default_value_t = 8)]
    pub max_depth: usize,

    #[arg(long = "parser-max-conditions", env = "PARSER_MAX_CONDITIONS", default_value_t = 256)]
    pub max_conditions: usize,

    #[arg(long = "parser-max-groups", env = "PARSER_MAX_GROUPS", default_value_t = 64)]
    pub max_groups: usize,

    #[arg(long = "parser-max-sort-fields", env = "PARSER_MAX_SORT_FIELDS", default_value_t = 32)]
    pub max_sort_fields: usize,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    /// Used when `RUST_LOG` is not set
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<ParserArgs> for ParserLimits {
    fn from(args: ParserArgs) -> Self {
        Self {
            max_depth: args.max_depth,
            max_conditions: args.max_conditions,
            max_groups: args.max_groups,
            max_sort_fields: args.max_sort_fields,
        }
    }
}

impl From<Args> for QueryKitConfig {
    fn from(args: Args) -> Self {
        Self {
            limits: ParserLimits::from(args.parser),
        }
    }
}
