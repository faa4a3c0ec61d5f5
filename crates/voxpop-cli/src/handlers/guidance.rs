use crate::config::{self, BASE_URL_ENV};

pub fn handle() {
    println!("voxpop - Customer feedback dashboard\n");

    println!("Quick commands:");
    println!("  voxpop list                       # View feedback records");
    println!("  voxpop stats                      # Breakdown, trend, quick metrics");
    println!("  voxpop submit --name ... --rating 5   # Submit feedback");
    println!("  voxpop export                     # Write the current view as CSV");
    println!("  voxpop categories                 # List known categories\n");

    println!("The backend base URL comes from --base-url, the {} environment", BASE_URL_ENV);
    match config::Config::default_path() {
        Some(path) => println!("variable, or base_url in {}.", path.display()),
        None => println!("variable, or base_url in the voxpop config file."),
    }

    println!("\nFor more commands:");
    println!("  voxpop --help");
}
