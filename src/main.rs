use colored::Colorize;
use fraction_calc::processor;
use std::{
  env,
  fs::File,
  io::{self, BufReader},
  process::ExitCode,
};

fn main() -> ExitCode {
  env_logger::init();
  match calculate() {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      eprintln!("{} {}", "error:".red().bold(), err);
      ExitCode::FAILURE
    }
  }
}

fn calculate() -> Result<(), Box<dyn std::error::Error>> {
  let args: Vec<String> = env::args().collect();
  let stdout = io::stdout();
  let mut output = stdout.lock();
  if args.len() == 2 {
    let path = std::path::Path::new(&args[1]);
    if !path.exists() {
      log::error!("File '{}' does not exist", path.display());
      return Err(format!("file '{}' does not exist", path.display()).into());
    }
    let file = File::open(path)?;
    processor::run(BufReader::new(file), &mut output)?;
  } else {
    let stdin = io::stdin();
    processor::run(stdin.lock(), &mut output)?;
  }
  Ok(())
}
