use daily_budget::{
    cli::{output, run_cli},
    init,
};

fn main() {
    init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(err) = run_cli(&args) {
        output::error(err);
        std::process::exit(1);
    }
}
