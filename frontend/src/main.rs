fn main() {
    workforce_frontend::start();
}
