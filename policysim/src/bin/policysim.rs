//! inspect, replace and restore the datasets behind the rail policy
//! simulation dashboard.
use clap::Parser;
use policysim::app::PolicySimApp;

fn main() {
    env_logger::init();
    let args = PolicySimApp::parse();
    if let Err(e) = args.run() {
        log::error!("{e}");
        eprintln!("{e}");
        std::process::exit(1);
    }
}
