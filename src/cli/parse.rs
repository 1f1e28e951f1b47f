use super::CliFlags;

#[derive(Debug)]
pub enum ParseError {
    InvalidNumber(String),
    UnknownArg(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidNumber(s) => write!(f, "Invalid number: {}", s),
            ParseError::UnknownArg(s) => write!(f, "Unknown argument: {}", s),
        }
    }
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "-s" | "--saved" => flags.saved = true,
            "--symbols" => flags.symbols = true,
            "--digits" => flags.digits = true,
            "-l" | "--length" => {
                i += 1;
                if i < args.len() {
                    flags.length = Some(
                        args[i]
                            .parse()
                            .map_err(|_| ParseError::InvalidNumber(args[i].clone()))?,
                    );
                }
            }
            "-n" | "--number" => {
                i += 1;
                if i < args.len() {
                    flags.number = Some(
                        args[i]
                            .parse()
                            .map_err(|_| ParseError::InvalidNumber(args[i].clone()))?,
                    );
                }
            }
            "-o" | "--output" => {
                // Path is optional; a following flag means "use the default"
                if i + 1 < args.len() && !args[i + 1].starts_with('-') {
                    i += 1;
                    flags.output = Some(args[i].clone());
                } else {
                    flags.output = Some(".".to_string());
                }
            }
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("genpass")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn no_args_gives_defaults() {
        let flags = parse(&args(&[])).unwrap();
        assert_eq!(flags, CliFlags::default());
    }

    #[test]
    fn length_number_and_toggles() {
        let flags = parse(&args(&["-l", "20", "-n", "3", "--symbols", "--digits"])).unwrap();
        assert_eq!(flags.length, Some(20));
        assert_eq!(flags.number, Some(3));
        assert!(flags.symbols);
        assert!(flags.digits);
    }

    #[test]
    fn long_forms_match_short_forms() {
        let short = parse(&args(&["-l", "12", "-b", "-q", "-s"])).unwrap();
        let long = parse(&args(&["--length", "12", "--board", "--quiet", "--saved"])).unwrap();
        assert_eq!(short, long);
    }

    #[test]
    fn bad_length_is_an_error() {
        match parse(&args(&["-l", "eight"])) {
            Err(ParseError::InvalidNumber(s)) => assert_eq!(s, "eight"),
            other => panic!("expected InvalidNumber, got {other:?}"),
        }
    }

    #[test]
    fn unknown_flag_is_an_error() {
        match parse(&args(&["--frobnicate"])) {
            Err(ParseError::UnknownArg(s)) => assert_eq!(s, "--frobnicate"),
            other => panic!("expected UnknownArg, got {other:?}"),
        }
    }

    #[test]
    fn output_path_is_optional() {
        let flags = parse(&args(&["-o", "passwords.txt"])).unwrap();
        assert_eq!(flags.output.as_deref(), Some("passwords.txt"));

        let flags = parse(&args(&["-o", "-q"])).unwrap();
        assert_eq!(flags.output.as_deref(), Some("."));
        assert!(flags.quiet);
    }
}
