use clap::Subcommand;
use daygrid_core::parse_maps_link;

#[derive(Subcommand)]
pub enum MapAction {
    /// Extract coordinates from a shared maps link
    Parse {
        /// The maps URL to parse
        url: String,
        /// Emit JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: MapAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        MapAction::Parse { url, json } => {
            let coords = parse_maps_link(&url)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&coords)?);
            } else {
                println!("{}, {}", coords.lat, coords.lng);
            }
        }
    }
    Ok(())
}
