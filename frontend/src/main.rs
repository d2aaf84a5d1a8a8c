fn main() {
    hrms_frontend::run();
}
