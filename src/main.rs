fn main() {
    if let Err(err) = dot_rs_builder::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
