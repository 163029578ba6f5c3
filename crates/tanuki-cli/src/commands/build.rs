//! Build command implementation.
//!
//! The decision tree:
//!
//! 1. `--develop`: type-check and emit with `tsc`, whatever the mode
//! 2. `app` mode: `tsc`, honouring `noEmit`
//! 3. `library` mode: clean the output directory, bundle `src/index.ts` with
//!    esbuild into `<outDir>/<name>.cjs`, then optionally write the `.mjs`
//!    wrapper and docs.json

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{info, warn};

use crate::cli::BuildArgs;
use crate::commands::{docs, utils};
use crate::config::{BuildMode, Project};
use crate::error::{BuildError, Result};
use crate::toolchain::esbuild::{self, BundleOptions};
use crate::toolchain::typescript::find_tsconfig;
use crate::toolchain::{esm, Diagnostic, Shell, TypeScript};
use crate::ui;

/// Library artifacts requested by flags or configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LibraryPlan {
    pub esm: bool,
    pub minify: bool,
    pub docs: bool,
}

impl LibraryPlan {
    pub fn resolve(args: &BuildArgs, project: &Project) -> Self {
        let build = &project.config.build;
        Self {
            esm: args.esm || build.esm,
            minify: args.minify || build.minify,
            docs: args.docs || build.provide_docs,
        }
    }
}

/// What `tanuki build` will do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildPlan {
    /// `tsc` only
    Compile,
    Library(LibraryPlan),
}

impl BuildPlan {
    pub fn decide(args: &BuildArgs, project: &Project) -> Self {
        if args.develop {
            return BuildPlan::Compile;
        }

        match project.config.build.mode {
            BuildMode::App => {
                if args.esm || args.minify || args.docs {
                    warn!(
                        target: "tanuki::ts",
                        "--esm, --minify and --docs only apply to library builds"
                    );
                }
                BuildPlan::Compile
            }
            BuildMode::Library => BuildPlan::Library(LibraryPlan::resolve(args, project)),
        }
    }
}

/// Execute the build command.
pub fn execute(args: &BuildArgs, project: &Project) -> Result<()> {
    let start = Instant::now();
    let shell = Shell::new(&project.root);

    info!(target: "tanuki::ts", "Mode: {}", project.config.build.mode.as_str());

    match BuildPlan::decide(args, project) {
        BuildPlan::Compile => {
            ui::info("Invoking TypeScript compiler...");
            compile(project, &shell)?;
        }
        BuildPlan::Library(plan) => {
            if args.cjs {
                info!(target: "tanuki::ts", "|> Emit CommonJS: yes");
            }
            info!(target: "tanuki::ts", "|> Emit ES Modules: {}", yes_no(plan.esm));
            info!(target: "tanuki::ts", "|> Minified Output: {}", yes_no(plan.minify));
            info!(target: "tanuki::ts", "|> Documentation: {}", yes_no(plan.docs));
            build_library(project, &shell, plan, start)?;
        }
    }

    ui::success(&format!(
        "Built artifacts in {}",
        ui::format_duration(start.elapsed())
    ));
    Ok(())
}

/// Compiles with `tsc`. Error diagnostics fail the build after all are printed.
pub fn compile(project: &Project, shell: &Shell) -> Result<()> {
    let tsconfig = find_tsconfig(&project.root, project.config.tsconfig.as_deref())?;
    let tsc = TypeScript::new(shell);

    let options = tsc.show_config(&tsconfig)?;
    if options.no_emit {
        ui::warning("Will not emit files, will only type-check.");
    }

    let spinner = ui::Spinner::new("Building project artifacts...");
    let diagnostics = match tsc.compile(&tsconfig) {
        Ok(diagnostics) => diagnostics,
        Err(err) => {
            spinner.fail("Unable to run the TypeScript compiler.");
            return Err(err);
        }
    };
    let errors = diagnostics.iter().filter(|d| d.is_error()).count();

    if diagnostics.is_empty() {
        spinner.finish("Completed project artifacts.");
        return Ok(());
    }

    spinner.warn("Some errors have occurred while compiling:");
    for diagnostic in &diagnostics {
        eprintln!(
            "{}\n",
            render_diagnostic(&project.root, diagnostic, ui::colors_enabled())
        );
    }

    if errors > 0 {
        return Err(BuildError::Diagnostics { count: errors }.into());
    }
    Ok(())
}

/// A diagnostic framed against its source file, when it can be read.
pub fn render_diagnostic(root: &Path, diagnostic: &Diagnostic, colors: bool) -> String {
    let message = format!("{} | {}", diagnostic.location(), diagnostic.message);
    let source = diagnostic
        .file
        .as_ref()
        .and_then(|file| fs::read_to_string(utils::resolve_path(file, root)).ok());

    ui::frame_message(
        source.as_deref(),
        diagnostic.line,
        diagnostic.column,
        &message,
        false,
        colors,
    )
}

fn build_library(project: &Project, shell: &Shell, plan: LibraryPlan, start: Instant) -> Result<()> {
    info!(target: "tanuki::ts", "Compiling artifacts with `esbuild`!");

    let tsconfig = find_tsconfig(&project.root, project.config.tsconfig.as_deref())?;
    let options = TypeScript::new(shell).show_config(&tsconfig)?;
    let build_dir = options.build_dir(&project.root);

    let entry = project.resolve(Path::new("src").join("index.ts"));
    utils::validate_entry(&entry)?;
    utils::clean_output_dir(&build_dir)?;

    let spinner = ui::Spinner::new("Bundling with esbuild...");
    let emitted = emit_artifacts(project, shell, plan, entry, &build_dir, &spinner);
    match &emitted {
        Ok(_) => spinner.finish("Emitted library artifacts."),
        Err(_) => spinner.fail("Unable to emit library artifacts."),
    }
    let artifacts = emitted?;

    ui::print_artifacts(&utils::artifact_sizes(&artifacts), start.elapsed());

    if plan.docs {
        let path = docs::generate(project)?;
        ui::info(&format!("Generated documentation in {}", path.display()));
    }

    Ok(())
}

/// Bundles `<name>.cjs`, then the `.mjs` wrapper when requested.
fn emit_artifacts(
    project: &Project,
    shell: &Shell,
    plan: LibraryPlan,
    entry: PathBuf,
    build_dir: &Path,
    spinner: &ui::Spinner,
) -> Result<Vec<PathBuf>> {
    let name = &project.config.name;
    let bundle = esbuild::artifact_path(build_dir, name, "cjs");
    esbuild::bundle(shell, &BundleOptions::new(entry, &bundle).minify(plan.minify))?;

    let mut artifacts = vec![bundle.clone()];
    if plan.esm {
        spinner.set_message("Emitting ES module wrapper...");
        let wrapper = esbuild::artifact_path(build_dir, name, "mjs");
        esm::write_wrapper(shell, &bundle, &wrapper)?;
        artifacts.push(wrapper);
    }

    Ok(artifacts)
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}
