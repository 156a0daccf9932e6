fn main() {
    if let Err(err) = plant_unify::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
