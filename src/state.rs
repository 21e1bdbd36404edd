use anyhow::Context;
use mongodb::{bson::doc, options::ClientOptions, Client, Collection};

use crate::config::AppConfig;
use crate::signups::repo::Signup;

/// Shared by every in-flight request; established once before the listener
/// starts and never mutated afterwards.
#[derive(Clone)]
pub struct AppState {
    pub signups: Collection<Signup>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = AppConfig::from_env()?;

        let options = ClientOptions::parse(&config.mongodb_uri)
            .await
            .context("parse MONGODB_URI")?;
        let client = Client::with_options(options).context("build mongodb client")?;
        let db = client.database(&config.database);

        // The driver connects lazily; ping so an unreachable server fails
        // startup instead of the first request.
        db.run_command(doc! { "ping": 1 }, None)
            .await
            .context("connect to mongodb")?;

        let signups = db.collection::<Signup>(&config.collection);
        Ok(Self { signups })
    }
}
