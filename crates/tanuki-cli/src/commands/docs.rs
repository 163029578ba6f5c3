//! `tanuki docs`: write docs.json from a typedoc reflection.

use std::path::PathBuf;

use tanuki_docs::{DocsOptions, Documentation, JsonFileSource, ReflectionSource};
use tracing::info;

use crate::cli::DocsArgs;
use crate::config::Project;
use crate::error::Result;
use crate::toolchain::TypedocSource;
use crate::ui;

pub fn execute(args: &DocsArgs, project: &Project) -> Result<()> {
    let path = match &args.reflection {
        Some(reflection) => serialize(project, JsonFileSource::new(project.resolve(reflection)))?,
        None => generate(project)?,
    };

    ui::success(&format!("Generated documentation in {}!", path.display()));
    Ok(())
}

/// Runs typedoc for the project and serializes its reflection.
pub fn generate(project: &Project) -> Result<PathBuf> {
    let spinner = ui::Spinner::new("Generating documentation...");
    match serialize(project, TypedocSource::for_project(project)) {
        Ok(path) => {
            spinner.finish("Received project reflection.");
            Ok(path)
        }
        Err(err) => {
            spinner.fail("Unable to generate documentation.");
            Err(err)
        }
    }
}

/// Serializes the reflection from `source` to the configured docs.json.
pub fn serialize<S: ReflectionSource>(project: &Project, source: S) -> Result<PathBuf> {
    let options = DocsOptions {
        output: project.docs_output(),
        workspaces: project.config.typedoc.workspaces.is_requested(),
    };

    info!(
        target: "tanuki::docs",
        project = %project.config.name,
        output = %options.output.display(),
        "serializing documentation"
    );
    Ok(Documentation::new(source, options).serialize()?)
}
