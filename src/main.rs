fn main() {
    polarconv::cli::run();
}
