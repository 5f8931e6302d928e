use log::debug;
use std::env;
use std::fs;
use std::io::Read;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Read the document from the path given as an argument, or from stdin
    let args: Vec<String> = env::args().collect();
    let input = match args.get(1) {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let recipes = rezept::parse_document(&input)?;
    debug!("parsed {} recipe(s)", recipes.len());
    println!("{}", serde_json::to_string_pretty(&recipes)?);

    Ok(())
}
