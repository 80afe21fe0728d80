use clap::Parser;
use wanderlog_taxonomy::app::TaxonomyApp;

fn main() {
    env_logger::init();
    let args = TaxonomyApp::parse();
    if let Err(e) = args.op.run() {
        log::error!("wanderlog-taxonomy failed: {e}");
        eprintln!("{e}");
        std::process::exit(1);
    }
}
