use clap::Parser;
use nwgeom::{
    config::{Args, Config},
    die,
};

fn main() {
    env_logger::init();
    let args = Args::parse();
    let config = match Config::from_args(&args) {
        Ok(c) => c,
        Err(e) => die!("{e:#}"),
    };
    if args.json {
        match serde_json::to_string(&config) {
            Ok(s) => println!("{s}"),
            Err(e) => die!("failed to serialize config with {e}"),
        }
        return;
    }
    if let Err(e) = nwgeom::run(&config, ".") {
        die!("{e:#}");
    }
}
