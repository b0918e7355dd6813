use lostfound_generate::generators::GeneratorRegistry;

fn main() {
    let registry = GeneratorRegistry::new();
    for generator in registry.iter() {
        println!("{} ({})", generator.table(), generator.columns().join(", "));
    }
}
