use std::{env, fs::read_to_string, process, rc::Rc, time::Instant};

use decl_parser::{
    ast::ast::Program,
    display_error,
    parser::parser::{parse, ParserConfig},
    SHELL_FILE,
};

struct Options {
    config: ParserConfig,
    show_tree: bool,
    input: Input,
}

enum Input {
    File(String),
    Eval(String),
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let options = match parse_args(&args) {
        Ok(Some(options)) => options,
        Ok(None) => {
            print_help();
            return;
        }
        Err(message) => {
            eprintln!("Error: {}", message);
            print_usage();
            process::exit(1);
        }
    };

    let (file, source) = match options.input {
        Input::File(path) => match read_to_string(&path) {
            Ok(source) => (path, source),
            Err(e) => {
                eprintln!("Failed to read file '{}': {}", path, e);
                process::exit(1);
            }
        },
        Input::Eval(source) => (String::from(SHELL_FILE), source),
    };

    let parse_start = Instant::now();
    let (_, result) = parse(&source, Rc::new(file), options.config);

    println!("Parsed in {:?}", parse_start.elapsed());

    let program = match result {
        Ok(program) => program,
        Err(error) => {
            display_error(&error, &source);
            process::exit(1);
        }
    };

    if options.show_tree {
        println!("{:#?}", program);
    } else {
        print_declarations(&program);
    }
}

fn parse_args(args: &[String]) -> Result<Option<Options>, String> {
    let mut config = ParserConfig::default();
    let mut show_tree = false;
    let mut input = None;

    let mut args = args.iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(None),
            "--strict" | "-s" => config = ParserConfig::strict(),
            "--tree" | "-t" => show_tree = true,
            "--eval" | "-e" => match args.next() {
                Some(source) => input = Some(Input::Eval(source.clone())),
                None => return Err(format!("{} expects a source argument", arg)),
            },
            _ if arg.starts_with('-') => return Err(format!("Unknown flag: {}", arg)),
            _ => input = Some(Input::File(arg.clone())),
        }
    }

    match input {
        Some(input) => Ok(Some(Options {
            config,
            show_tree,
            input,
        })),
        None => Err(String::from("No input file specified")),
    }
}

fn print_declarations(program: &Program) {
    for (i, declaration) in program.iter().enumerate() {
        let declarator = &declaration.declarator;
        let type_annotation = declarator.type_annotation.as_deref().unwrap_or("-");

        println!(
            "{:4}: {:6} {:12} : {:10} = {}({})",
            i,
            declaration.kind,
            declarator.identifier,
            type_annotation,
            declarator.value.kind(),
            declarator.value
        );
    }
}

fn print_usage() {
    eprintln!("Usage: decl-parser [OPTIONS] <file>");
    eprintln!("       decl-parser [OPTIONS] --eval <source>");
}

fn print_help() {
    println!("decl-parser - variable declaration parser");
    println!();
    println!("USAGE:");
    println!("    decl-parser [OPTIONS] <file>");
    println!("    decl-parser [OPTIONS] --eval <source>");
    println!();
    println!("OPTIONS:");
    println!("    -e, --eval <source>  Parse the given text instead of a file");
    println!("    -s, --strict         Only accept const/let/var and plain identifiers");
    println!("    -t, --tree           Print the full tree");
    println!("    -h, --help           Show this help message");
}
