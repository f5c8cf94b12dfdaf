fn main() {
    portfolio_frontend::start();
}
