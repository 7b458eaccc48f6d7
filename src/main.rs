use header_registry::Registry;
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = Registry::validate() {
        log::error!("Header registry failed its self-check: {}", e);
        process::exit(1);
    }

    match serde_json::to_string_pretty(&Registry) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            log::error!("Failed to serialize header registry: {}", e);
            process::exit(1);
        }
    }
}
