#![forbid(unsafe_code)]

use clap::Parser;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// The expression to compile
    #[clap(value_parser, value_name = "EXPRESSION")]
    expression: String,
}

fn main() {
    let args = Args::parse();

    init_tracing_subscriber();

    match exprcc::compiler::compile_string(&args.expression) {
        Ok(assembly) => print!("{assembly}"),
        Err(e) => {
            eprint!("{}", e.diagnostic_string(&args.expression));
            std::process::exit(1);
        }
    }
}

fn init_tracing_subscriber() {
    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .finish(),
    )
    .expect("setting tracing default failed");
}
