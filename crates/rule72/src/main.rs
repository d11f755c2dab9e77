#![forbid(unsafe_code)]

//! Binary entry point: parse flags, set up logging, run the program.

use r72_runtime::Program;

use rule72::app::CalculatorModel;
use rule72::cli::Opts;
use rule72::logging;

fn main() {
    let opts = Opts::parse();
    if let Err(e) = logging::init(opts.log_file.as_deref()) {
        eprintln!("Failed to set up logging: {e}");
        std::process::exit(1);
    }
    let model = CalculatorModel::new(opts.lang);
    let mut program = Program::new(model);
    if let Err(e) = program.run() {
        eprintln!("Runtime error: {e}");
        std::process::exit(1);
    }
}
