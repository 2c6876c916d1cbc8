fn main() {
    mlfleet::app::cli::run();
}
