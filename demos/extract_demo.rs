use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    geoprops::example_apps::run_extract_demo(std::env::args().skip(1))
}
