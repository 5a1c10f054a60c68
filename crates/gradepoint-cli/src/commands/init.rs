//! The `gradepoint init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("gradepoint.toml").exists() {
        println!("gradepoint.toml already exists, skipping.");
    } else {
        std::fs::write("gradepoint.toml", SAMPLE_CONFIG)?;
        println!("Created gradepoint.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit gradepoint.toml to pick a grade mode and adjust the scale");
    println!("  2. Run: gradepoint session --config gradepoint.toml");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# gradepoint configuration

# Grade mode: "numerical" or "letter"
mode = "numerical"

# Point-value overrides for the letter scale.
# Known letters: O, A+, A, B+, B, C
[scale]
# "A+" = 9.5
"#;
