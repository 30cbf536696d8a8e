use std::sync::Arc;

use drive_gallery::{provider::MIRROR_FIELDS, DriveClient, ImageSource};
use log::warn;

use super::{
    config::Config,
    mail::{SharedMailer, SmtpMailer},
};

/// Page size of the server-side gallery mirror
pub const MIRROR_PAGE_SIZE: usize = 50;

pub struct State {
    pub config: Config,
    /// `None` when mail credentials are missing; submissions are then only logged
    pub mailer: Option<SharedMailer>,
    pub gallery: Arc<dyn ImageSource>,
}

impl State {
    pub fn new(config: Config) -> Arc<Self> {
        let mailer = config.mail_credentials().and_then(|(user, pass)| {
            match SmtpMailer::new(&config.smtp_host, user, pass) {
                Ok(mailer) => Some(Arc::new(mailer) as SharedMailer),
                Err(e) => {
                    warn!("Mail transport unavailable: {e}");
                    None
                }
            }
        });

        let gallery = DriveClient::new(
            config.drive_folder_id.clone(),
            config.google_api_key.clone(),
            MIRROR_PAGE_SIZE,
        )
        .with_fields(MIRROR_FIELDS);

        Self::with_parts(config, mailer, Arc::new(gallery))
    }

    /// Assemble state from explicit collaborators
    pub fn with_parts(
        config: Config,
        mailer: Option<SharedMailer>,
        gallery: Arc<dyn ImageSource>,
    ) -> Arc<Self> {
        Arc::new(Self {
            config,
            mailer,
            gallery,
        })
    }
}
