fn main() {
    if let Err(err) = tabnest_lib::run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
