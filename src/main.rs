use std::fs;
use std::process::ExitCode;

use rscan::desc::parse_job_json;
use rscan::pipeline::run_job;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("usage: rscan <job.json>");
        return ExitCode::from(2);
    }
    let job_path = &args[1];

    let json = match fs::read_to_string(job_path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("reading {job_path}: {e}");
            return ExitCode::FAILURE;
        }
    };

    let desc = match parse_job_json(&json) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("parsing {job_path}: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run_job(&desc) {
        Ok(report) => {
            println!(
                "{} -> {} ({}x{}, {} elements)",
                desc.input_path,
                desc.output_path,
                report.canvas_w,
                report.canvas_h,
                report.n_elements
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
