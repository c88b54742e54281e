use std::io;
use std::process::ExitCode;

use qa_assist::app::{self, Environment};
use qa_assist::cli::{self, GeneratorArgs};
use qa_assist::client::AnthropicClient;
use qa_assist::{logging, output};

fn main() -> ExitCode {
    let args = match cli::parse_args::<GeneratorArgs, _, _>(std::env::args_os()) {
        Ok(args) => args,
        Err(err) => {
            let code = cli::report_parse_error(&mut io::stderr(), &err, output::GENERATOR_EXAMPLES);
            return ExitCode::from(code);
        }
    };
    logging::init(args.common.verbose);

    let mut stdout = io::stdout().lock();
    let _ = output::print_banner(&mut stdout, "🧪", "AI-Powered Cypress Test Generator");

    let env = Environment::from_process();
    match app::run_test_generator(&args, &env, AnthropicClient::connect, &mut stdout) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            let _ = output::report_error(&mut io::stderr(), &err);
            ExitCode::FAILURE
        }
    }
}
