use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    prepstats::cli::run_report(std::env::args().skip(1))
}
