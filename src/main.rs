use std::env;

fn main() {
    env_logger::init();
    let args: Vec<String> = env::args().collect();
    std::process::exit(docket::cli::run_with_args(&args));
}
