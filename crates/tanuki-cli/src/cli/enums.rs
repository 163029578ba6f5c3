use clap::ValueEnum;

/// Build mode selected on the command line
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum BuildModeArg {
    /// Application build
    ///
    /// Type-checks and emits with the TypeScript compiler. ESM output,
    /// minification and docs are not available.
    #[value(name = "app")]
    App,

    /// Library build
    ///
    /// Bundles src/index.ts with esbuild into a CommonJS file, optionally
    /// with an ES module wrapper, minification and docs.json.
    #[value(name = "library", alias = "lib")]
    Library,
}
