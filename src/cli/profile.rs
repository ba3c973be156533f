//! Profile CLI commands

use std::path::PathBuf;

use clap::Subcommand;

use crate::error::FinanceResult;
use crate::services::ProfileService;
use crate::storage::Storage;

/// Profile subcommands
#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Show the profile
    Show,

    /// Create or update the profile
    Set {
        /// Display name
        #[arg(short, long)]
        name: Option<String>,
        /// Email address
        #[arg(short, long)]
        email: Option<String>,
    },

    /// Set the avatar image (png, jpg, jpeg, gif or webp)
    Avatar {
        /// Path to the image
        path: PathBuf,
    },
}

pub fn handle_profile_command(storage: &Storage, cmd: ProfileCommands) -> FinanceResult<()> {
    let service = ProfileService::new(storage);

    match cmd {
        ProfileCommands::Show => match service.get()? {
            Some(profile) => {
                println!("Profile: {}", profile.display_name);
                println!("  ID:     {}", profile.id);
                if let Some(email) = &profile.email {
                    println!("  Email:  {}", email);
                }
                if let Some(avatar) = &profile.avatar {
                    println!("  Avatar: {}", avatar.display());
                }
                println!("  Since:  {}", profile.created_at.format("%Y-%m-%d"));
            }
            None => println!("No profile yet. Create one with `fintrack profile set --name NAME`."),
        },

        ProfileCommands::Set { name, email } => {
            let profile = service.upsert(name, email)?;
            println!("Saved profile for {}", profile.display_name);
        }

        ProfileCommands::Avatar { path } => {
            let stored = service.set_avatar(&path)?;
            println!("Avatar stored at {}", stored.display());
        }
    }

    Ok(())
}
