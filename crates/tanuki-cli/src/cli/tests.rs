#[cfg(test)]
mod tests {
    use crate::cli::{BuildModeArg, Cli, Command};
    use clap::{CommandFactory, Parser, ValueEnum};
    use std::path::PathBuf;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_build_mode_values() {
        let modes: Vec<_> = BuildModeArg::value_variants()
            .iter()
            .map(|v| v.to_possible_value().unwrap().get_name().to_string())
            .collect();
        assert_eq!(modes, vec!["app", "library"]);
    }

    #[test]
    fn test_lib_alias_selects_library() {
        let cli = Cli::try_parse_from(["tanuki", "build", "--mode", "lib", "--esm", "-m"]).unwrap();
        let Command::Build(args) = cli.command else {
            panic!("expected build");
        };
        assert_eq!(args.mode, Some(BuildModeArg::Library));
        assert!(args.esm);
        assert!(args.minify);
        assert!(!args.docs);
    }

    #[test]
    fn test_build_defaults() {
        let cli = Cli::try_parse_from(["tanuki", "build"]).unwrap();
        let Command::Build(args) = cli.command else {
            panic!("expected build");
        };
        assert_eq!(args.mode, None);
        assert!(!args.develop);
    }

    #[test]
    fn test_develop_alias() {
        let cli = Cli::try_parse_from(["tanuki", "build", "--dev"]).unwrap();
        let Command::Build(args) = cli.command else {
            panic!("expected build");
        };
        assert!(args.develop);
    }

    #[test]
    fn test_lint_defaults_to_current_directory() {
        let cli = Cli::try_parse_from(["tanuki", "lint"]).unwrap();
        let Command::Lint(args) = cli.command else {
            panic!("expected lint");
        };
        assert_eq!(args.files, vec!["."]);
        assert_eq!(args.fix_override(), None);
    }

    #[test]
    fn test_lint_fix_flags() {
        let cli = Cli::try_parse_from(["tanuki", "lint", "src", "test", "--no-fix"]).unwrap();
        let Command::Lint(args) = cli.command else {
            panic!("expected lint");
        };
        assert_eq!(args.files, vec!["src", "test"]);
        assert_eq!(args.fix_override(), Some(false));

        assert!(Cli::try_parse_from(["tanuki", "lint", "--fix", "--no-fix"]).is_err());
    }

    #[test]
    fn test_docs_and_global_flags() {
        let cli = Cli::try_parse_from([
            "tanuki",
            "docs",
            "--reflection",
            "project.json",
            "--out",
            "out/docs.json",
            "--cwd",
            "/work",
            "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.cwd, Some(PathBuf::from("/work")));
        let Command::Docs(args) = cli.command else {
            panic!("expected docs");
        };
        assert_eq!(args.reflection, Some(PathBuf::from("project.json")));
        assert_eq!(args.out, Some(PathBuf::from("out/docs.json")));
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["tanuki", "-v", "-q", "lint"]).is_err());
    }
}
