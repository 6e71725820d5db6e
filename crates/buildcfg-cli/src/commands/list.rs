//! List presets command

use buildcfg_presets::PresetRegistry;

use crate::error::Result;
use crate::output;

/// Lines of the preset listing, grouped by category.
pub fn preset_listing(registry: &PresetRegistry) -> Vec<String> {
    let mut lines = vec![String::new()];
    for (category, presets) in registry.categories() {
        lines.push(category.as_str().to_uppercase());
        for preset in presets {
            lines.push(format!("  {:<25} - {}", preset.name, preset.description));
        }
        lines.push(String::new());
    }
    lines
}

/// Run the list-presets command
pub fn run_list_presets() -> Result<()> {
    let registry = PresetRegistry::with_builtins();
    output::print_box("Available Presets", &preset_listing(&registry));
    Ok(())
}
