//! Implementation of the `crudgen generate` command.
//!
//! Responsibility: translate CLI arguments into a target/entity/metadata
//! triple, call the core scaffold generator, and display results. No
//! business logic lives here.

use tracing::{debug, info, instrument};

use crudgen_adapters::{LocalFilesystem, SubstitutionRenderer};
use crudgen_core::{
    application::{
        GeneratorConfig, ScaffoldGenerator,
        ports::EntityMetadataProvider,
    },
    domain::{
        ConfigFormat, DomainError, EntityMetadata, EntityName, GenerationContext, GenerationStep,
        TargetModule,
    },
    error::CrudgenResult,
};

use crate::{
    cli::{GenerateArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `crudgen generate` command.
///
/// Dispatch sequence:
/// 1. Parse and validate the entity name
/// 2. Assemble metadata from the repeated `--field` / `--id-field` args
/// 3. Resolve format (with the documented yml fallback), target and settings
/// 4. Confirm with user unless `--yes` or `--quiet`
/// 5. Early-exit if `--dry-run`
/// 6. Execute generation via `ScaffoldGenerator`
#[instrument(skip_all, fields(entity = %args.entity))]
pub fn execute(
    args: GenerateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Entity name
    let entity = parse_entity(&args.entity)?;

    // 2. Metadata, via the same port a persistence integration would use.
    let provider = ArgsMetadataProvider::from_args(&args);
    let metadata = provider.metadata(&entity).map_err(CliError::Core)?;

    // 3. Format, target, settings
    let (format, fell_back) = resolve_format(&args.format);
    if fell_back {
        output.warning(&format!(
            "Unrecognized format '{}', falling back to yml",
            args.format
        ))?;
    }

    let namespace = args
        .namespace
        .clone()
        .unwrap_or_else(|| args.module_name.clone());
    let target = TargetModule::new(&args.module_root, &args.module_name, namespace)
        .map_err(|e| CliError::Core(e.into()))?;

    let route_prefix = args
        .route_prefix
        .clone()
        .unwrap_or_else(|| entity.route_name());
    let skeleton_dir = args
        .skeleton_dir
        .clone()
        .unwrap_or_else(|| config.skeleton_dir());
    let source_extension = args
        .source_extension
        .clone()
        .unwrap_or_else(|| config.defaults.source_extension.clone());

    let generator_config = GeneratorConfig::new(skeleton_dir, route_prefix, args.with_write_actions)
        .with_source_extension(source_extension);

    debug!(
        format = %format,
        actions = %generator_config.actions,
        skeleton_dir = %generator_config.settings.skeleton_dir.display(),
        "Generation inputs resolved"
    );

    // 4. Show configuration and confirm
    if !global.quiet && !args.yes && !args.dry_run {
        show_configuration(&args, &entity, format, &output)?;
        if !confirm()? {
            return Err(CliError::Cancelled);
        }
    }

    // 5. Dry run: describe but do not write.
    if args.dry_run {
        let context = GenerationContext::new(
            target,
            entity,
            metadata,
            generator_config.actions.clone(),
            format,
            generator_config.settings.clone(),
        );
        output.info("Dry run: no files will be written")?;
        for step in context.plan().steps() {
            match step {
                GenerationStep::EnsureDir { path } => {
                    output.print(&format!("  would create {}/", path.display()))?;
                }
                GenerationStep::Render { destination, .. } => {
                    output.print(&format!("  would write  {}", destination.display()))?;
                }
            }
        }
        return Ok(());
    }

    // 6. Create adapters and generate
    let filesystem = LocalFilesystem::new();
    let renderer = SubstitutionRenderer::new(Box::new(filesystem));
    let generator = ScaffoldGenerator::new(Box::new(filesystem), Box::new(renderer), generator_config);

    output.header(&format!("Generating scaffold for '{}'...", args.entity))?;
    info!(entity = %args.entity, "Generation started");

    let report = generator
        .generate(&target, &entity, &metadata, format)
        .map_err(CliError::Core)?;

    info!(files = report.file_count(), "Generation completed");

    // 7. Success summary
    for file in report.files() {
        output.print(&format!("  {}", file.display()))?;
    }
    output.success(&format!(
        "Generated {} files for '{}'",
        report.file_count(),
        args.entity
    ))?;

    Ok(())
}

// ── Input resolution ──────────────────────────────────────────────────────────

fn parse_entity(raw: &str) -> CliResult<EntityName> {
    EntityName::parse(raw).map_err(|e| {
        let reason = match e {
            DomainError::InvalidEntityName { reason, .. } => reason,
            other => other.to_string(),
        };
        CliError::InvalidEntityName {
            name: raw.into(),
            reason,
        }
    })
}

/// Strict parse first so the fallback can be surfaced; the coercion itself
/// matches `ConfigFormat::normalize_or_default`.
fn resolve_format(raw: &str) -> (ConfigFormat, bool) {
    match raw.parse::<ConfigFormat>() {
        Ok(format) => (format, false),
        Err(_) => (ConfigFormat::Yml, true),
    }
}

/// Metadata provider backed by the repeated `--field` / `--id-field`
/// arguments.
///
/// When no `--field` is given, the identifier fields double as the display
/// fields so the list view still has columns to render.
struct ArgsMetadataProvider {
    fields: Vec<String>,
    identifiers: Vec<String>,
}

impl ArgsMetadataProvider {
    fn from_args(args: &GenerateArgs) -> Self {
        let fields = if args.fields.is_empty() {
            args.id_fields.clone()
        } else {
            args.fields.clone()
        };
        Self {
            fields,
            identifiers: args.id_fields.clone(),
        }
    }
}

impl EntityMetadataProvider for ArgsMetadataProvider {
    fn metadata(&self, _entity: &EntityName) -> CrudgenResult<EntityMetadata> {
        Ok(EntityMetadata::new(
            self.fields.clone(),
            self.identifiers.clone(),
        ))
    }
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_configuration(
    args: &GenerateArgs,
    entity: &EntityName,
    format: ConfigFormat,
    out: &OutputManager,
) -> CliResult<()> {
    out.header("Configuration")?;
    out.print(&format!("  Entity:        {entity}"))?;
    out.print(&format!("  Module:        {}", args.module_name))?;
    out.print(&format!("  Module root:   {}", args.module_root.display()))?;
    out.print(&format!("  Format:        {format}"))?;
    out.print(&format!(
        "  Write actions: {}",
        if args.with_write_actions { "yes" } else { "no" }
    ))?;
    out.print("")?;
    Ok(())
}

fn confirm() -> CliResult<bool> {
    use std::io::{self, Write};

    print!("Continue? [Y/n] ");
    io::stdout().flush().map_err(|e| CliError::IoError {
        message: "failed to flush stdout".into(),
        source: e,
    })?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: e,
        })?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input.is_empty() || input == "y" || input == "yes")
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn generate_args(entity: &str) -> GenerateArgs {
        use clap::Parser;
        let cli = crate::cli::Cli::parse_from([
            "crudgen",
            "generate",
            entity,
            "--module-name",
            "AppModule",
        ]);
        match cli.command {
            crate::cli::Commands::Generate(args) => args,
            _ => unreachable!(),
        }
    }

    // ── parse_entity ──────────────────────────────────────────────────────

    #[test]
    fn valid_entity_parses() {
        assert_eq!(parse_entity("Blog/Post").unwrap().class_name(), "Post");
    }

    #[test]
    fn invalid_entity_is_a_cli_error() {
        assert!(matches!(
            parse_entity("9Bad"),
            Err(CliError::InvalidEntityName { .. })
        ));
    }

    // ── resolve_format ────────────────────────────────────────────────────

    #[test]
    fn recognized_formats_pass_through() {
        assert_eq!(resolve_format("yml"), (ConfigFormat::Yml, false));
        assert_eq!(resolve_format("xml"), (ConfigFormat::Xml, false));
        assert_eq!(
            resolve_format("annotation"),
            (ConfigFormat::Annotation, false)
        );
    }

    #[test]
    fn unrecognized_format_falls_back_to_yml_with_flag() {
        assert_eq!(resolve_format("bogus"), (ConfigFormat::Yml, true));
    }

    #[test]
    fn fallback_matches_the_documented_normalization() {
        let (format, _) = resolve_format("whatever");
        assert_eq!(format, ConfigFormat::normalize_or_default("whatever"));
    }

    // ── ArgsMetadataProvider ──────────────────────────────────────────────

    #[test]
    fn provider_preserves_field_order() {
        let mut args = generate_args("Post");
        args.fields = vec!["id".into(), "title".into(), "body".into()];

        let provider = ArgsMetadataProvider::from_args(&args);
        let metadata = provider
            .metadata(&EntityName::parse("Post").unwrap())
            .unwrap();
        assert_eq!(metadata.field_names(), ["id", "title", "body"]);
        assert_eq!(metadata.identifier_fields(), ["id"]);
    }

    #[test]
    fn provider_defaults_fields_to_identifiers() {
        let args = generate_args("Post");
        let provider = ArgsMetadataProvider::from_args(&args);
        let metadata = provider
            .metadata(&EntityName::parse("Post").unwrap())
            .unwrap();
        assert_eq!(metadata.field_names(), ["id"]);
    }
}
