#[cfg(test)]
mod tests {
    use crate::cli::validation::parse_key_value;
    use crate::cli::{Cli, Command};
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_parse_key_value_valid() {
        assert_eq!(
            parse_key_value("react=React"),
            Ok(("react".to_string(), "React".to_string()))
        );
        assert_eq!(
            parse_key_value("~ = ./lib"),
            Ok(("~".to_string(), "./lib".to_string()))
        );
        assert_eq!(
            parse_key_value("q=a=b"),
            Ok(("q".to_string(), "a=b".to_string()))
        );
    }

    #[test]
    fn test_parse_key_value_invalid() {
        assert!(parse_key_value("react").is_err());
        assert!(parse_key_value("=React").is_err());
        assert!(parse_key_value("react=").is_err());
    }

    #[test]
    fn test_generate_defaults() {
        let cli = Cli::try_parse_from(["bundlecfg", "generate"]).unwrap();
        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert!(args.targets.is_empty());
        assert!(!args.minify);
        assert!(!args.no_filesize);
        assert!(!args.compact);
        assert!(args.project.cwd.is_none());
        assert!(args.out.is_none());
    }

    #[test]
    fn test_generate_repeated_flags() {
        let cli = Cli::try_parse_from([
            "bundlecfg",
            "generate",
            "-t",
            "cjs",
            "--target",
            "umd",
            "--external",
            "path",
            "--alias",
            "~=./lib",
            "--global",
            "react=React",
            "--cwd",
            "/tmp/project",
            "--minify",
        ])
        .unwrap();
        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.targets, vec!["cjs", "umd"]);
        assert_eq!(args.externals, vec!["path"]);
        assert_eq!(args.aliases, vec![("~".to_string(), "./lib".to_string())]);
        assert_eq!(args.globals, vec![("react".to_string(), "React".to_string())]);
        assert_eq!(args.project.cwd, Some(PathBuf::from("/tmp/project")));
        assert!(args.minify);
    }

    #[test]
    fn test_bad_alias_is_rejected() {
        let result = Cli::try_parse_from(["bundlecfg", "generate", "--alias", "nokey"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        let result = Cli::try_parse_from(["bundlecfg", "-v", "-q", "check"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_check_accepts_config() {
        let cli = Cli::try_parse_from(["bundlecfg", "check", "-c", "opts.json"]).unwrap();
        let Command::Check(args) = cli.command else {
            panic!("expected check");
        };
        assert_eq!(args.project.config, Some(PathBuf::from("opts.json")));
    }
}
