use cache_wavefront::registry::{Coverage, Registry};

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let registry = Registry::builtin();

    println!("Registered variants: {}", registry.len());
    for v in registry.iter() {
        let coverage = match v.coverage {
            Coverage::Full => "full interior",
            Coverage::FullTiles => "full tiles only",
        };
        println!("  {:<14} {} [{coverage}]", v.name, v.description);
    }

    Ok(())
}
