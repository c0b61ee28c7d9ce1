fn main() {
    frontend::run_app();
}
