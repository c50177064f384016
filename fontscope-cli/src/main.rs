//! Binary entrypoint for fontscope-cli

fn main() {
    if let Err(err) = fontscope_cli::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
