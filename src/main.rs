fn main() {
    if let Err(err) = cfm_layout::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
