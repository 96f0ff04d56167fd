//! Stores a sample profile with one attachment and prints their JSON
//! projections.

use cabinet_core::{
    config,
    logging,
    models::{Attachment, Profile},
    repository::Repository,
    view::{ResultDto, ShortNamedInfo},
    Cabinet,
};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = config::get_or_init().await?;
    logging::init(&config.log_filter);

    let cabinet = Cabinet::start(config).await?;

    let login = format!("demo-{}", uuid::Uuid::new_v4().simple());
    let profile = Profile {
        first_name: "Demo".to_string(),
        last_name: "User".to_string(),
        ..Profile::new(login.clone(), format!("{login}@example.com"))
    };

    let profile = cabinet.profiles.insert(profile).await?;
    let attachment = cabinet
        .attachments
        .insert(Attachment {
            description: "Sample attachment".to_string(),
            ..Attachment::new(profile.id, "Name", "Title")
        })
        .await?;

    let profile = match cabinet.profiles.find_by_id(profile.id).await {
        Ok(profile) => profile,
        Err(err) => {
            error!(%err, "stored profile vanished");
            return Err(err.into());
        }
    };

    info!("{}", serde_json::to_string(&profile)?);
    info!("{}", serde_json::to_string(&attachment)?);

    let summary = vec![ShortNamedInfo::of(&profile), ShortNamedInfo::of(&attachment)];
    println!("{}", serde_json::to_string_pretty(&ResultDto::new(summary))?);

    cabinet.profiles.delete(profile.id).await?;
    cabinet.shutdown().await?;
    Ok(())
}
