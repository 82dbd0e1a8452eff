fn main() {
    if let Err(err) = techradar_layout::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
