use contactbook::RunResult;
use std::env;
use std::io;
use std::process;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() == 2 {
        match contactbook::run(&args[1], &mut io::stdout(), &mut io::stderr()) {
            RunResult::Ok => {}
            RunResult::ParseError => process::exit(65),
            RunResult::RuntimeError => process::exit(70),
        }
    } else {
        eprintln!("Usage: contactbook [path]");
        process::exit(64);
    }
}
