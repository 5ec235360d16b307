//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "crudgen",
    bin_name = "crudgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} CRUD scaffolding from an entity description",
    long_about = "crudgen generates controller, view, test and routing \
                  boilerplate for a data entity into a module source tree.",
    after_help = "EXAMPLES:\n\
        \x20 crudgen init --skeleton-dir ./skeleton\n\
        \x20 crudgen generate Blog/Post --module-root ./src/AppModule --module-name AppModule \\\n\
        \x20     --field id --field title --field body --yes\n\
        \x20 crudgen generate Invoice --module-root . --module-name Billing --with-write-actions --yes\n\
        \x20 crudgen completions bash > /usr/share/bash-completion/completions/crudgen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate the CRUD scaffold for an entity.
    #[command(
        visible_alias = "g",
        about = "Generate scaffold artifacts for an entity",
        after_help = "EXAMPLES:\n\
            \x20 crudgen generate Blog/Post --module-root ./src/AppModule --module-name AppModule \\\n\
            \x20     --field id --field title --yes\n\
            \x20 crudgen generate Invoice --module-root . --module-name Billing \\\n\
            \x20     --with-write-actions --format xml --yes"
    )]
    Generate(GenerateArgs),

    /// Install the built-in skeleton set.
    #[command(
        about = "Install the built-in skeleton set",
        after_help = "EXAMPLES:\n\
            \x20 crudgen init                           # default skeleton directory\n\
            \x20 crudgen init --skeleton-dir ./skeleton\n\
            \x20 crudgen init --force                   # overwrite existing skeletons"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 crudgen completions bash > ~/.local/share/bash-completion/completions/crudgen\n\
            \x20 crudgen completions zsh  > ~/.zfunc/_crudgen\n\
            \x20 crudgen completions fish > ~/.config/fish/completions/crudgen.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the crudgen configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 crudgen config get defaults.format\n\
            \x20 crudgen config set defaults.format xml\n\
            \x20 crudgen config list"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `crudgen generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Namespaced entity type name, e.g. `Blog/Post`.
    #[arg(value_name = "ENTITY", help = "Namespaced entity name (Blog/Post)")]
    pub entity: String,

    /// Root of the destination module source tree.
    #[arg(
        short = 'r',
        long = "module-root",
        value_name = "DIR",
        default_value = ".",
        help = "Destination module root directory"
    )]
    pub module_root: PathBuf,

    /// Destination module name.
    #[arg(
        short = 'm',
        long = "module-name",
        value_name = "NAME",
        help = "Destination module name"
    )]
    pub module_name: String,

    /// Destination module namespace (defaults to the module name).
    #[arg(
        short = 'n',
        long = "namespace",
        value_name = "NS",
        help = "Module namespace prefix"
    )]
    pub namespace: Option<String>,

    /// Route-name prefix (defaults to the lowercased entity name).
    #[arg(
        short = 'p',
        long = "route-prefix",
        value_name = "PREFIX",
        help = "Prefix for generated route names"
    )]
    pub route_prefix: Option<String>,

    /// Routing-configuration format. Unrecognized values fall back to `yml`
    /// with a warning.
    #[arg(
        short = 'f',
        long = "format",
        value_name = "FORMAT",
        default_value = "yml",
        help = "Routing format: yml, xml or annotation"
    )]
    pub format: String,

    /// Entity field, repeatable; order is display order.
    #[arg(
        long = "field",
        value_name = "NAME",
        help = "Entity field name (repeatable, ordered)"
    )]
    pub fields: Vec<String>,

    /// Identifier field, repeatable (the generator requires exactly one,
    /// named `id`).
    #[arg(
        long = "id-field",
        value_name = "NAME",
        default_values_t = vec!["id".to_string()],
        help = "Identifier field name (repeatable)"
    )]
    pub id_fields: Vec<String>,

    /// Also generate the write actions (`new`, `edit`, `delete`).
    #[arg(
        short = 'w',
        long = "with-write-actions",
        help = "Enable new/edit/delete actions"
    )]
    pub with_write_actions: bool,

    /// Skeleton directory override.
    #[arg(
        short = 's',
        long = "skeleton-dir",
        value_name = "DIR",
        help = "Directory containing the skeleton files"
    )]
    pub skeleton_dir: Option<PathBuf>,

    /// Extension of the generated controller/test source files.
    #[arg(
        long = "source-extension",
        value_name = "EXT",
        help = "Source-file extension for controller/test artifacts"
    )]
    pub source_extension: Option<String>,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and generate immediately"
    )]
    pub yes: bool,

    /// Preview what would be generated without writing any files.
    #[arg(long = "dry-run", help = "Show what would be generated without generating")]
    pub dry_run: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `crudgen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Where to install the built-in skeleton set.
    #[arg(
        short = 's',
        long = "skeleton-dir",
        value_name = "DIR",
        help = "Skeleton directory to install into"
    )]
    pub skeleton_dir: Option<PathBuf>,

    /// Overwrite existing skeleton files.
    #[arg(short = 'f', long = "force", help = "Overwrite existing skeleton files")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `crudgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `crudgen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.format`.
        key: String,
    },
    /// Set a configuration key to a value.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_generate_command() {
        let cli = Cli::parse_from([
            "crudgen",
            "generate",
            "Blog/Post",
            "--module-root",
            "/srv/app",
            "--module-name",
            "AppModule",
            "--field",
            "id",
            "--field",
            "title",
        ]);
        assert!(matches!(cli.command, Commands::Generate(_)));
    }

    #[test]
    fn generate_alias_g() {
        let cli = Cli::parse_from(["crudgen", "g", "Post", "--module-name", "App"]);
        assert!(matches!(cli.command, Commands::Generate(_)));
    }

    #[test]
    fn field_order_is_preserved() {
        let cli = Cli::parse_from([
            "crudgen",
            "generate",
            "Post",
            "--module-name",
            "App",
            "--field",
            "id",
            "--field",
            "title",
            "--field",
            "body",
        ]);
        if let Commands::Generate(args) = cli.command {
            assert_eq!(args.fields, vec!["id", "title", "body"]);
        } else {
            panic!("expected Generate command");
        }
    }

    #[test]
    fn id_field_defaults_to_id() {
        let cli = Cli::parse_from(["crudgen", "generate", "Post", "--module-name", "App"]);
        if let Commands::Generate(args) = cli.command {
            assert_eq!(args.id_fields, vec!["id"]);
        } else {
            panic!("expected Generate command");
        }
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["crudgen", "--quiet", "--verbose", "init"]);
        assert!(result.is_err());
    }

    #[test]
    fn module_name_is_required_for_generate() {
        let result = Cli::try_parse_from(["crudgen", "generate", "Post"]);
        assert!(result.is_err());
    }
}
