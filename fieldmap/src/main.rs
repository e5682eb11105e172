use clap::Parser;
use fieldmap::app::FieldMapCliArguments;

fn main() {
    env_logger::init();
    let args = FieldMapCliArguments::parse();
    match args.op.run() {
        Ok(output) => println!("{output}"),
        Err(e) => {
            log::error!("failed running fieldmap: {e}");
            std::process::exit(1);
        }
    }
}
