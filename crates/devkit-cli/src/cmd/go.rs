use crate::output::print_json;
use clap::Subcommand;
use devkit_core::template;

#[derive(Subcommand)]
pub enum GoSubcommand {
    /// Generate initial main()
    Main,
}

pub fn run(subcommand: GoSubcommand, json: bool) -> anyhow::Result<()> {
    match subcommand {
        GoSubcommand::Main => {
            if json {
                print_json(&serde_json::json!({ "template": template::GO_MAIN }))?;
            } else {
                println!("{}", template::GO_MAIN);
            }
            Ok(())
        }
    }
}
