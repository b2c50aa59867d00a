/// What the driver should do, decided once at startup from `argv[1..]`.
pub enum Args {
    Repl,
    File { path: String, dump: bool },
    Usage,
}

/// Only recognizes one flag, `--dump` (gates the chunk disassembly — see
/// SPEC_FULL §2); anything else is a path, and more than one path is a
/// usage error exactly like the reference driver's argument-count check.
pub fn parse_args(argv: &[String]) -> Args {
    let rest = &argv[1..];
    let dump = rest.iter().any(|arg| arg == "--dump");
    let positional: Vec<&String> = rest.iter().filter(|arg| arg.as_str() != "--dump").collect();

    match positional.as_slice() {
        [] => Args::Repl,
        [path] => Args::File { path: (*path).clone(), dump },
        _ => Args::Usage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        std::iter::once("clox".to_string()).chain(args.iter().map(|s| s.to_string())).collect()
    }

    #[test]
    fn no_arguments_means_repl() {
        assert!(matches!(parse_args(&argv(&[])), Args::Repl));
    }

    #[test]
    fn one_path_means_file() {
        match parse_args(&argv(&["a.lox"])) {
            Args::File { path, dump } => {
                assert_eq!(path, "a.lox");
                assert!(!dump);
            }
            _ => panic!("expected Args::File"),
        }
    }

    #[test]
    fn dump_flag_is_recognized_alongside_a_path() {
        match parse_args(&argv(&["--dump", "a.lox"])) {
            Args::File { path, dump } => {
                assert_eq!(path, "a.lox");
                assert!(dump);
            }
            _ => panic!("expected Args::File"),
        }
    }

    #[test]
    fn two_paths_is_a_usage_error() {
        assert!(matches!(parse_args(&argv(&["a.lox", "b.lox"])), Args::Usage));
    }
}
