//! stamp's main application entry point.
//! Parses the command line, loads configuration and runs the requested generators.

use stamp::{
    cli::{get_args, Args, Command},
    codegen,
    config::Config,
    error::{default_error_handler, Result},
    ignore::ExclusionSet,
    logger::init_logger,
    manifest,
    renderer::MiniJinjaRenderer,
};

/// Main application entry point.
fn main() {
    let args = match get_args() {
        Ok(args) => args,
        Err(err) => default_error_handler(err),
    };
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Runs the type-table generator.
fn run_code(engine: &MiniJinjaRenderer, args: &Args, config: &Config) -> Result<()> {
    let table = &config.type_table;
    codegen::generate(
        engine,
        &table.types,
        &table.template_source(&args.root),
        Config::resolve(&args.root, &table.output_dir),
        &table.extension,
        args.dry_run,
    )?;
    Ok(())
}

/// Runs the manifest builder.
fn run_manifest(engine: &MiniJinjaRenderer, args: &Args, config: &Config) -> Result<()> {
    let settings = &config.manifest;
    let exclusions = ExclusionSet::with_case(&settings.exclude, settings.case_insensitive)?;
    manifest::build_manifest(
        engine,
        &args.root,
        &exclusions,
        &settings.generated_via,
        &settings.template_source(&args.root),
        Config::resolve(&args.root, &settings.output),
        args.dry_run,
    )?;
    Ok(())
}

/// Main application logic execution.
///
/// # Flow
/// 1. Loads configuration (file or built-in defaults)
/// 2. Runs the type-table generator and/or the manifest builder
///
/// The first failing generator aborts the run.
fn run(args: Args) -> Result<()> {
    let engine = MiniJinjaRenderer::new();
    let config = Config::load(&args.root, args.config.as_deref())?;

    match args.command {
        Command::Code => run_code(&engine, &args, &config)?,
        Command::Manifest => run_manifest(&engine, &args, &config)?,
        Command::All => {
            run_code(&engine, &args, &config)?;
            run_manifest(&engine, &args, &config)?;
        }
    }

    log::info!("Generation completed successfully in {}.", args.root.display());
    Ok(())
}
