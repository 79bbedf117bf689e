use std::io;
use std::path::PathBuf;

use zc::{CompileError, Settings, compile_file};

const VERSION: &str = env!("CARGO_PKG_VERSION");

struct Args {
    input: PathBuf,
    output: PathBuf,
    config: Option<PathBuf>,
    debug: bool,
}

fn main() {
    let args = std::env::args().collect::<Vec<String>>();

    // Handle flags
    if args.len() == 2 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!("Z Compiler {}", VERSION);
                return;
            }
            "--help" | "-h" => {
                print_usage(&args[0]);
                return;
            }
            _ => {}
        }
    }

    let Some(parsed) = parse_args(&args[1..]) else {
        print_usage(&args[0]);
        std::process::exit(1);
    };

    let mut settings = match &parsed.config {
        Some(path) => match Settings::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                eprintln!("error: {:#}", e);
                std::process::exit(1);
            }
        },
        None => Settings::default(),
    };
    settings.debug |= parsed.debug;

    let mut diag = io::stderr().lock();
    if let Err(e) = compile_file(&parsed.input, &parsed.output, &settings, &mut diag) {
        // Compile errors were already reported through the diagnostics sink
        if e.downcast_ref::<CompileError>().is_none() {
            eprintln!("error: {:#}", e);
        }
        std::process::exit(1);
    }
}

fn parse_args(args: &[String]) -> Option<Args> {
    let mut files = Vec::new();
    let mut config = None;
    let mut debug = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--debug" | "-d" => debug = true,
            "--config" | "-c" => config = Some(PathBuf::from(iter.next()?)),
            flag if flag.starts_with('-') => return None,
            file => files.push(PathBuf::from(file)),
        }
    }

    let (input, output) = match files.as_slice() {
        [input] => (input.clone(), input.with_extension("zbc")),
        [input, output] => (input.clone(), output.clone()),
        _ => return None,
    };

    Some(Args {
        input,
        output,
        config,
        debug,
    })
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [options] <input.z> [output]", program);
    eprintln!();
    eprintln!("The output defaults to the input path with a .zbc extension.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -c, --config <file>  Read settings from a TOML file");
    eprintln!("  -d, --debug          Dump tokens, AST and bytecode to stderr");
    eprintln!("  -h, --help           Print this help message");
    eprintln!("  -v, --version        Print version information");
}
