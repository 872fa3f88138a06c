fn main() {
    firmata_build::app::cli::run();
}
