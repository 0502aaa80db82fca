fn main() -> lorenz_demos::error::Result<()> {
    lorenz_demos::logging::init();
    lorenz_demos::run_interactive_lorenz()
}
