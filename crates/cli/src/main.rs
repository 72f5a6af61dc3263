fn main() {
    if let Err(err) = nodescope_cli::run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
