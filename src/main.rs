fn main() {
    if let Err(err) = vertical_text_renderer::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
