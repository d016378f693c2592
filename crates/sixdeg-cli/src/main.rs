use serde::Serialize;
use sixdeg_graphlib::alg::{is_simple_cycle, shortest_path};
use sixdeg_graphlib::{AdjListGraph, AdjMatrixGraph, Graph, load_edge_list};
use std::io::Read;

/// The classic sentinel target; `--to` overrides it.
const DEFAULT_TARGET: &str = "Kevin Bacon";

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Parse(sixdeg_graphlib::ParseError),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Parse(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<sixdeg_graphlib::ParseError> for CliError {
    fn from(value: sixdeg_graphlib::ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy)]
enum Command {
    Separation,
    Cycle,
}

#[derive(Debug, Clone, Copy, Default)]
enum Representation {
    #[default]
    List,
    Matrix,
}

#[derive(Debug, Default)]
struct Args {
    command: Option<Command>,
    input: Option<String>,
    from: Option<String>,
    to: Option<String>,
    walk: Option<String>,
    representation: Representation,
    json: bool,
    pretty: bool,
}

fn usage() -> &'static str {
    "sixdeg\n\
\n\
USAGE:\n\
  sixdeg separation --from <vertex> [--to <vertex>] [--matrix] [--json] [--pretty] [<path>|-]\n\
  sixdeg cycle --walk <v1,v2,...,v1> [--matrix] [--json] [--pretty] [<path>|-]\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', the edge list is read from stdin.\n\
  - Edge-list lines look like `Alice -- Bob`; `#` starts a comment; a bare\n\
    name adds an isolated vertex.\n\
  - --to defaults to \"Kevin Bacon\".\n\
  - --matrix stores the graph in an adjacency matrix instead of the default\n\
    adjacency list; results are identical.\n\
  - Exit code is 0 when connected / a simple cycle, 1 otherwise.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1).peekable();
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "separation" if args.command.is_none() => args.command = Some(Command::Separation),
            "cycle" if args.command.is_none() => args.command = Some(Command::Cycle),
            "--from" => {
                let Some(v) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.from = Some(v.clone());
            }
            "--to" => {
                let Some(v) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.to = Some(v.clone());
            }
            "--walk" => {
                let Some(v) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.walk = Some(v.clone());
            }
            "--matrix" => args.representation = Representation::Matrix,
            "--json" => args.json = true,
            "--pretty" => args.pretty = true,
            other if other.starts_with('-') && other != "-" => {
                return Err(CliError::Usage(usage()));
            }
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    if args.command.is_none() {
        return Err(CliError::Usage(usage()));
    }
    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn build_graph(
    representation: Representation,
    input: &str,
) -> Result<Box<dyn Graph<String>>, CliError> {
    let mut g: Box<dyn Graph<String>> = match representation {
        Representation::List => Box::new(AdjListGraph::new()),
        Representation::Matrix => Box::new(AdjMatrixGraph::new()),
    };
    load_edge_list(input, &mut *g)?;
    Ok(g)
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    println!();
    Ok(())
}

#[derive(Serialize)]
struct SeparationOut<'a> {
    from: &'a str,
    to: &'a str,
    connected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    degrees: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<&'a [String]>,
}

#[derive(Serialize)]
struct CycleOut<'a> {
    walk: &'a [String],
    simple_cycle: bool,
}

/// Returns the process exit code: 0 for connected / simple cycle, 1 for
/// the negative answer.
fn run(args: &Args) -> Result<u8, CliError> {
    let text = read_input(args.input.as_deref())?;
    let graph = build_graph(args.representation, &text)?;

    match args.command {
        Some(Command::Separation) => {
            let Some(from) = args.from.as_deref() else {
                return Err(CliError::Usage(usage()));
            };
            let to = args.to.as_deref().unwrap_or(DEFAULT_TARGET);

            let path = shortest_path(&*graph, &from.to_string(), &to.to_string());
            let degrees = path.as_ref().map(|p| p.len() - 1);

            if args.json {
                write_json(
                    &SeparationOut {
                        from,
                        to,
                        connected: path.is_some(),
                        degrees,
                        path: path.as_deref(),
                    },
                    args.pretty,
                )?;
            } else if let Some(path) = &path {
                println!("degrees of separation: {}", path.len() - 1);
                println!("{}", path.join(" -> "));
            } else {
                println!("not connected");
            }
            Ok(u8::from(path.is_none()))
        }
        Some(Command::Cycle) => {
            let Some(walk) = args.walk.as_deref() else {
                return Err(CliError::Usage(usage()));
            };
            let walk: Vec<String> = walk
                .split(',')
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .collect();

            let ok = is_simple_cycle(&*graph, &walk);
            if args.json {
                write_json(
                    &CycleOut {
                        walk: &walk,
                        simple_cycle: ok,
                    },
                    args.pretty,
                )?;
            } else if ok {
                println!("simple cycle");
            } else {
                println!("not a simple cycle");
            }
            Ok(u8::from(!ok))
        }
        None => Err(CliError::Usage(usage())),
    }
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    match run(&args) {
        Ok(code) => std::process::exit(code.into()),
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sixdeg_graphlib::alg::degrees_of_separation;

    #[test]
    fn parse_args_requires_a_command() {
        let argv: Vec<String> = vec!["sixdeg".into()];
        assert!(matches!(parse_args(&argv), Err(CliError::Usage(_))));
    }

    #[test]
    fn parse_args_separation_flags() {
        let argv: Vec<String> = ["sixdeg", "separation", "--from", "Alice", "--matrix", "g.txt"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let args = parse_args(&argv).expect("valid");
        assert!(matches!(args.command, Some(Command::Separation)));
        assert_eq!(args.from.as_deref(), Some("Alice"));
        assert!(matches!(args.representation, Representation::Matrix));
        assert_eq!(args.input.as_deref(), Some("g.txt"));
    }

    #[test]
    fn wrapper_matches_path_length() {
        let mut g: AdjListGraph<String> = AdjListGraph::new();
        g.add_edge("a".into(), "b".into());
        g.add_edge("b".into(), "c".into());
        assert_eq!(
            degrees_of_separation(&g, &"a".to_string(), &"c".to_string()),
            Some(2)
        );
    }
}
